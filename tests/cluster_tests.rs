use airliner_chart_layout::{ClusterDistance, Rect, cluster_by_proximity};

#[test]
fn clusters_group_nearby_markers_and_isolate_distant_ones() {
    let markers = vec![
        Rect::new(0.0, 4.0, 0.0, 4.0).unwrap(),
        Rect::new(6.0, 10.0, 0.0, 4.0).unwrap(),
        Rect::new(500.0, 504.0, 500.0, 504.0).unwrap(),
    ];

    let clusters = cluster_by_proximity(&markers, |r| *r, ClusterDistance::Scalar(4.0));
    assert_eq!(clusters.len(), 2);

    let total_items: usize = clusters.iter().map(Vec::len).sum();
    assert_eq!(total_items, markers.len());
}

#[test]
fn axis_specific_distance_can_cluster_on_one_axis_only() {
    let markers = vec![
        Rect::new(0.0, 2.0, 0.0, 2.0).unwrap(),
        Rect::new(20.0, 22.0, 0.0, 2.0).unwrap(),
    ];
    // Huge X tolerance, zero Y tolerance: these two should merge.
    let clusters = cluster_by_proximity(
        &markers,
        |r| *r,
        ClusterDistance::Axis { x: 100.0, y: 0.0 },
    );
    assert_eq!(clusters.len(), 1);
}
