//! Property-based tests for the regression estimator.

use std::collections::BTreeSet;

use proptest::prelude::*;

use corrstat_core::{compute, Point, RegressionError};

fn on_line(xs: &BTreeSet<i32>, slope: f64, intercept: f64) -> Vec<Point> {
    xs.iter()
        .map(|&x| {
            let x = f64::from(x);
            Point::new(x, slope * x + intercept)
        })
        .collect()
}

fn slope_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![0.1f64..10.0, -10.0f64..-0.1]
}

fn sample_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1000i32..1000, -1000i32..1000), 2..60).prop_map(|raw| {
        raw.into_iter()
            .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Points exactly on a line recover its coefficients and |r| = 1.
    #[test]
    fn exact_line_recovered(
        xs in prop::collection::btree_set(-500i32..500, 2..40),
        slope in slope_strategy(),
        intercept in -100.0f64..100.0,
    ) {
        let result = compute(&on_line(&xs, slope, intercept)).unwrap();
        prop_assert!((result.fit.slope - slope).abs() < 1e-6 * slope.abs().max(1.0));
        prop_assert!((result.fit.intercept - intercept).abs() < 1e-5);
        let expected = if slope > 0.0 { "1.000" } else { "-1.000" };
        prop_assert_eq!(result.r.as_str(), expected);
    }

    /// r never leaves [-1, 1] and is always printed with three decimals.
    #[test]
    fn r_bounded_and_formatted(points in sample_strategy()) {
        match compute(&points) {
            Ok(result) => {
                prop_assert!(result.fit.r.abs() <= 1.0 + 1e-12);
                let (_, decimals) = result.r.split_once('.').unwrap();
                prop_assert_eq!(decimals.len(), 3);
                prop_assert!(!result.r.contains('e'));
            }
            Err(err) => prop_assert!(matches!(err, RegressionError::DegenerateInput(_))),
        }
    }

    /// x values sharing a large offset (as with years or GDP levels) still
    /// recover an exact line.
    #[test]
    fn exact_line_at_large_x_offset(
        offset in 10_000_000u32..500_000_000,
        steps in 3u32..20,
        slope in prop_oneof![1i32..8, -8i32..-1],
        base in -100i32..100,
    ) {
        let offset = f64::from(offset);
        let slope = f64::from(slope);
        let base = f64::from(base);
        let points: Vec<Point> = (0..steps)
            .map(|i| Point::new(offset + f64::from(i), base + slope * f64::from(i)))
            .collect();

        let result = compute(&points).unwrap();
        prop_assert!((result.fit.slope - slope).abs() < 1e-9);
        let expected = if slope > 0.0 { "1.000" } else { "-1.000" };
        prop_assert_eq!(result.r.as_str(), expected);

        let [start, end] = &result.regression_points;
        let last = f64::from(steps - 1);
        prop_assert_eq!(start.x, offset);
        prop_assert_eq!(end.x, offset + last);
        prop_assert!((start.y - base).abs() < 1e-3);
        prop_assert!((end.y - (base + slope * last)).abs() < 1e-3);
    }

    /// Reordering the sample leaves r and the endpoints unchanged.
    #[test]
    fn order_invariant(points in sample_strategy(), rotate in 0usize..60) {
        let Ok(forward) = compute(&points) else {
            return Ok(());
        };
        let mut shuffled = points.clone();
        shuffled.reverse();
        let k = rotate % shuffled.len();
        shuffled.rotate_left(k);
        let other = compute(&shuffled).unwrap();

        prop_assert_eq!(&forward.r, &other.r);
        prop_assert!((forward.fit.r - other.fit.r).abs() < 1e-9);
        prop_assert_eq!(forward.regression_points[0].x, other.regression_points[0].x);
        prop_assert_eq!(forward.regression_points[1].x, other.regression_points[1].x);
    }

    /// The fitted line passes through the centroid of the sample.
    #[test]
    fn line_passes_through_centroid(points in sample_strategy()) {
        let Ok(result) = compute(&points) else {
            return Ok(());
        };
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;
        prop_assert!((result.fit.predict(mean_x) - mean_y).abs() < 1e-6);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A vertical column of points never yields a line.
    #[test]
    fn constant_x_always_rejected(
        x in -1e6f64..1e6,
        ys in prop::collection::vec(-1e3f64..1e3, 2..20),
    ) {
        let points: Vec<Point> = ys.into_iter().map(|y| Point::new(x, y)).collect();
        prop_assert!(matches!(
            compute(&points),
            Err(RegressionError::DegenerateInput(_))
        ));
    }
}
