use airliner_chart_layout::{Dimensions, LayoutError, Rect, build_bands_with_defaults};

#[test]
fn empty_obstacles_yield_single_full_height_band() {
    let dims = Dimensions::new(400.0, 300.0);
    let bands = build_bands_with_defaults(dims, 20.0, 100.0, &[]).unwrap();

    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].index, 0);
    assert_eq!(bands[0].top, 0.0);
    assert_eq!(bands[0].bottom, 300.0);
    assert_eq!(bands[0].left, 0.0);
    assert_eq!(bands[0].right, 400.0);
}

#[test]
fn single_obstacle_produces_contiguous_coverage_with_gaps() {
    let dims = Dimensions::new(400.0, 300.0);
    // Centre 150, height 40.
    let obstacle = Rect::new(0.0, 10.0, 130.0, 170.0).unwrap();
    let bands = build_bands_with_defaults(dims, 20.0, 100.0, &[obstacle]).unwrap();

    assert!(bands.len() >= 2, "expected at least an obstacle band and surrounding gaps");
    assert_eq!(bands.first().unwrap().top, 0.0);
    assert!((bands.last().unwrap().bottom - 300.0).abs() < 1e-9);

    for pair in bands.windows(2) {
        assert_eq!(pair[0].bottom, pair[1].top, "bands must be contiguous");
    }
    for (expected_index, band) in bands.iter().enumerate() {
        assert_eq!(band.index, expected_index);
    }
    assert!(
        bands.iter().any(|b| b.top <= 150.0 && b.bottom >= 150.0),
        "some band must cover the obstacle's centre"
    );
}

#[test]
fn dense_patch_lower_than_max_band_height_still_splits_correctly() {
    let dims = Dimensions::new(400.0, 1000.0);
    let obstacles: Vec<Rect> = (0..5)
        .map(|i| {
            let cy = 50.0 + i as f64 * 40.0;
            Rect::new(0.0, 10.0, cy - 5.0, cy + 5.0).unwrap()
        })
        .collect();

    let bands = build_bands_with_defaults(dims, 20.0, 80.0, &obstacles).unwrap();
    for pair in bands.windows(2) {
        assert_eq!(pair[0].bottom, pair[1].top);
    }
    assert_eq!(bands.first().unwrap().top, 0.0);
    assert!((bands.last().unwrap().bottom - 1000.0).abs() < 1e-9);
}

#[test]
fn rejects_negative_chart_dimensions() {
    let err = build_bands_with_defaults(Dimensions::new(-1.0, 300.0), 20.0, 100.0, &[]).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDimensions { .. }));
}
