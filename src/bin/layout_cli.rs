//! Exercises the placement engine against a small built-in sample of
//! airliner markers and prints a summary of the result.
//!
//! Not part of the engine's contract (spec: "no CLI ... surface in the
//! core") — this mirrors the teacher's `main.rs` role of giving a human a
//! way to see the library work from a terminal.

use airliner_chart_layout::{
    BandOccupancy, ClusterDistance, Dimensions, FirstPassConfig, FirstPassMode, MaxDistance,
    Offset, PlacementObject, Point, Rect, ResolveInput, Size, Strategy, SweepConfig,
    SweepHorizontal, XAlign, build_bands_with_defaults, compute_occupancy, resolve,
};

struct Airliner {
    name: &'static str,
    capacity: f64,
    range_km: f64,
}

const FLEET: &[Airliner] = &[
    Airliner { name: "A220-300", capacity: 160.0, range_km: 6297.0 },
    Airliner { name: "737 MAX 8", capacity: 178.0, range_km: 6570.0 },
    Airliner { name: "A320neo", capacity: 180.0, range_km: 6300.0 },
    Airliner { name: "787-9", capacity: 296.0, range_km: 14010.0 },
    Airliner { name: "A350-900", capacity: 325.0, range_km: 15000.0 },
    Airliner { name: "777-300ER", capacity: 396.0, range_km: 13650.0 },
    Airliner { name: "A380-800", capacity: 555.0, range_km: 14800.0 },
];

/// Maps the fleet's (capacity, range) data space onto a fixed pixel canvas.
fn project(dimensions: Dimensions, capacity: f64, range_km: f64) -> Point {
    const MAX_CAPACITY: f64 = 600.0;
    const MAX_RANGE: f64 = 16000.0;
    Point::new(
        (capacity / MAX_CAPACITY) * dimensions.width,
        dimensions.height - (range_km / MAX_RANGE) * dimensions.height,
    )
}

fn main() {
    let dimensions = Dimensions::new(800.0, 500.0);

    let markers: Vec<Rect> = FLEET
        .iter()
        .map(|plane| {
            let centre = project(dimensions, plane.capacity, plane.range_km);
            Rect::new(centre.x - 4.0, centre.x + 4.0, centre.y - 4.0, centre.y + 4.0).unwrap()
        })
        .collect();

    let labels: Vec<PlacementObject> = FLEET
        .iter()
        .zip(&markers)
        .map(|(plane, marker)| {
            PlacementObject::new(
                plane.name,
                Point::new(marker.centre_x(), marker.centre_y()),
                Size::new(8.0 * plane.name.len() as f64, 16.0),
            )
        })
        .collect();

    let bands = build_bands_with_defaults(dimensions, 20.0, 90.0, &markers)
        .expect("sample fleet produces a valid band layout");
    let occupancy: Vec<BandOccupancy> = compute_occupancy(&bands, &markers);

    let strategy = Strategy {
        first_pass: FirstPassConfig {
            modes: vec![
                FirstPassMode::Right,
                FirstPassMode::Left,
                FirstPassMode::Top,
                FirstPassMode::Bottom,
            ],
            max_distance: MaxDistance::new(60.0, 40.0),
            offset: Offset::default(),
        },
        sweep: SweepConfig {
            horizontal: SweepHorizontal::SweepToRight,
            vertical_search: vec![0, -1, 1, -2, 2],
            step_factor: 1.0,
            max_iterations: 20,
            max_distance: MaxDistance::new(120.0, 80.0),
            offset: Offset::default(),
            x_align: XAlign::Centre,
        },
    };

    let result = resolve(ResolveInput {
        dimensions,
        bands: &bands,
        occupancy: &occupancy,
        objects: &labels,
        cluster_distance: Some(ClusterDistance::Scalar(16.0)),
        strategy: &strategy,
    })
    .expect("sample fleet produces a valid resolve call");

    println!(
        "Bands: {}  Markers: {}  Placed: {}  Failed: {}  Clusters: {}",
        bands.len(),
        markers.len(),
        result.placements.len(),
        result.failed.len(),
        result.debug.clusters.len()
    );

    for (id, placement) in &result.placements {
        let pos = placement.placed_position.unwrap();
        println!(
            "  placed {id:<10} anchor=({:.0},{:.0}) -> ({:.0},{:.0}) band={}",
            placement.anchor.x,
            placement.anchor.y,
            pos.x,
            pos.y,
            placement.band_index.unwrap()
        );
    }
    for id in result.failed.keys() {
        println!("  failed {id}");
    }
}
