#![no_main]

use libfuzzer_sys::fuzz_target;

use corrstat_data::{Dataset, Indicator};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Arbitrary snapshots must parse or fail cleanly
    if let Ok(ds) = Dataset::from_json_str(text) {
        let _ = ds.countries();
        for year in ds.available_years() {
            let _ = ds.correlation_points(Indicator::Gdp, Indicator::LifeExpectancy, year);
        }
    }
});
