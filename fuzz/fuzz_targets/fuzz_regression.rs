#![no_main]

use libfuzzer_sys::fuzz_target;

use corrstat_core::{compute, Point};

fuzz_target!(|data: &[u8]| {
    // Each 16-byte chunk is one (x, y) pair
    let points: Vec<Point> = data
        .chunks_exact(16)
        .take(4096)
        .map(|c| {
            let x = f64::from_le_bytes(c[..8].try_into().unwrap());
            let y = f64::from_le_bytes(c[8..].try_into().unwrap());
            Point::new(x, y)
        })
        .collect();

    // Should not panic, and never hand out non-finite numbers
    if let Ok(result) = compute(&points) {
        assert!(result.fit.slope.is_finite());
        assert!(result.fit.intercept.is_finite());
        assert!(result.fit.r.is_finite());
        assert!(result.regression_points.iter().all(Point::is_finite));
        assert!(!result.r.contains("NaN") && !result.r.contains("inf"));
    }
});
