#[cfg(test)]
mod tests {
    use crate::cluster::{BoundingBox, Point};
    use crate::error::BoundBoxError;
    use crate::pipeline::{BoundBoxPipeline, DEFAULT_CUTOFF, DEFAULT_SCALE_FACTOR, bound_box_coords};
    use quickcheck::{TestResult, quickcheck};

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn corners(bbox: BoundingBox) -> [[f64; 2]; 2] {
        bbox.into()
    }

    #[test]
    fn test_outlier_left_out() {
        log_init_test();
        let points = vec![
            Point([0.0, 0.0]),
            Point([1.0, 0.0]),
            Point([0.0, 1.0]),
            Point([1.0, 1.0]),
            Point([50.0, 50.0]),
        ];

        let bbox = bound_box_coords(&points, 0.75).unwrap();
        assert_eq!(corners(bbox), [[0.0, 0.0], [1.0, 1.0]]);
    }

    #[test]
    fn test_identical_points() {
        log_init_test();
        let points = vec![Point([2.0, 2.0]); 4];
        for cutoff in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let bbox = bound_box_coords(&points, cutoff).unwrap();
            assert_eq!(corners(bbox), [[2.0, 2.0], [2.0, 2.0]], "cutoff {}", cutoff);
        }
    }

    #[test]
    fn test_cutoff_zero_uses_closest_pair() {
        log_init_test();
        let points = vec![
            Point([0.0, 0.0]),
            Point([10.0, 0.0]),
            Point([10.5, 0.0]),
            Point([20.0, 0.0]),
        ];

        let bbox = bound_box_coords(&points, 0.0).unwrap();
        assert_eq!(corners(bbox), [[10.0, 0.0], [10.5, 0.0]]);
    }

    #[test]
    fn test_expanded_box_readmits_near_points() {
        log_init_test();
        // the closest pair spans [0, 2] x [0, 2]; doubled it reaches [-1, 3] x [-1, 3]
        let points = vec![
            Point([0.0, 0.0]),
            Point([2.0, 2.0]),
            Point([2.9, -0.9]),
            Point([20.0, 20.0]),
        ];

        let bbox = bound_box_coords(&points, 0.0).unwrap();
        assert_eq!(corners(bbox), [[0.0, -0.9], [2.9, 2.0]]);

        // without expansion only the pair itself survives
        let tight = BoundBoxPipeline::new(0.0)
            .with_scale_factor(1.0)
            .run(&points)
            .unwrap();
        assert_eq!(corners(tight), [[0.0, 0.0], [2.0, 2.0]]);
    }

    #[test]
    fn test_single_point() {
        let bbox = bound_box_coords(&[Point([3.0, -1.0])], 0.9).unwrap();
        assert_eq!(corners(bbox), [[3.0, -1.0], [3.0, -1.0]]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            bound_box_coords(&[], 0.5),
            Err(BoundBoxError::EmptyInput { stage: "input" })
        );
    }

    #[test]
    fn test_invalid_cutoff() {
        let points = vec![Point([0.0, 0.0]), Point([1.0, 1.0])];
        for cutoff in [1.5, -0.1] {
            match bound_box_coords(&points, cutoff) {
                Err(BoundBoxError::InvalidParameter { name, value, .. }) => {
                    assert_eq!(name, "cutoff");
                    assert_eq!(value, cutoff);
                }
                other => panic!("unexpected result for cutoff {}: {:?}", cutoff, other),
            }
        }
        // parameters are checked before the input
        assert!(matches!(
            bound_box_coords(&[], 2.0),
            Err(BoundBoxError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_invalid_scale_factor() {
        let points = vec![Point([0.0, 0.0]), Point([1.0, 1.0])];
        for factor in [0.0, -2.0] {
            let result = BoundBoxPipeline::new(0.5).with_scale_factor(factor).run(&points);
            assert!(
                matches!(result, Err(BoundBoxError::InvalidParameter { name: "scale factor", .. })),
                "factor {}: {:?}",
                factor,
                result
            );
        }
    }

    #[test]
    fn test_defaults() {
        let pipeline = BoundBoxPipeline::default();
        assert_eq!(pipeline.cutoff, DEFAULT_CUTOFF);
        assert_eq!(pipeline.scale_factor, DEFAULT_SCALE_FACTOR);
        assert_eq!(BoundBoxPipeline::new(0.3).scale_factor, 2.0);
    }

    #[test]
    fn test_error_messages() {
        let err = bound_box_coords(&[Point([0.0, 0.0])], 1.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid parameter `cutoff`: 1.5 (must be within [0, 1])"
        );
        let err = bound_box_coords(&[], 0.5).unwrap_err();
        assert_eq!(err.to_string(), "empty input at input");
    }

    fn to_points(coords: &[(i16, i16)]) -> Vec<Point> {
        coords
            .iter()
            .map(|&(x, y)| Point([x as f64, y as f64]))
            .collect()
    }

    quickcheck! {
        fn prop_result_inside_naive_box(coords: Vec<(i16, i16)>, c: u8) -> TestResult {
            if coords.is_empty() {
                return TestResult::discard();
            }
            let points = to_points(&coords);
            let naive = BoundingBox::fit(&points).unwrap();
            let bbox = bound_box_coords(&points, c as f64 / 255.0).unwrap();
            TestResult::from_bool(naive.contains_box(&bbox) && bbox.min.less_eq(&bbox.max))
        }

        fn prop_full_cutoff_matches_naive_box(coords: Vec<(i16, i16)>) -> TestResult {
            let mut points: Vec<Point> = Vec::new();
            for p in to_points(&coords) {
                if !points.contains(&p) {
                    points.push(p);
                }
            }
            if points.is_empty() {
                return TestResult::discard();
            }
            let naive = BoundingBox::fit(&points).unwrap();
            TestResult::from_bool(bound_box_coords(&points, 1.0).unwrap() == naive)
        }
    }
}
