//! Orchestrates the two-pass placement strategy and owns the evolving
//! occupancy for the duration of one `resolve` call (spec §4.6).

use indexmap::IndexMap;

use crate::bands::PlacementBand;
use crate::clusters::{ClusterDistance, cluster_by_proximity};
use crate::debug::{self, Attempt, AttemptPlacement, DebugPlacementLogs, Pass};
use crate::errors::LayoutError;
use crate::geometry::{Dimensions, Point, Range, Rect};
use crate::label::{LabelId, PlacementObject};
use crate::occupancy::BandOccupancy;
use crate::placement::{IgnoreBandExtents, try_single_placement};
use crate::strategy::Strategy;

/// Input bundle for one `resolve` call.
///
/// `bands` and `occupancy` must be index-aligned and come from the band
/// builder and occupancy tracker over the same obstacles — the caller's
/// responsibility (spec §6); `resolve` validates this and rejects
/// non-contiguous or misaligned inputs with a [`LayoutError`].
pub struct ResolveInput<'a> {
    pub dimensions: Dimensions,
    pub bands: &'a [PlacementBand],
    pub occupancy: &'a [BandOccupancy],
    pub objects: &'a [PlacementObject],
    /// Neighbour-inflation distance for the informational cluster pass.
    /// `None` defaults to zero (only touching/overlapping bboxes cluster).
    pub cluster_distance: Option<ClusterDistance>,
    pub strategy: &'a Strategy,
}

/// Debug artifacts returned alongside the placement result (spec §4.7, §6).
#[derive(Debug, Clone)]
pub struct ResolveDebug {
    pub clusters: Vec<Vec<usize>>,
    pub indices_to_try: Vec<usize>,
    pub debug_placement_logs: DebugPlacementLogs,
}

/// The full result of one `resolve` call.
#[derive(Debug, Clone)]
pub struct ResolveOutput {
    pub placements: IndexMap<LabelId, PlacementObject>,
    pub failed: IndexMap<LabelId, PlacementObject>,
    pub occupancy: Vec<BandOccupancy>,
    pub debug: ResolveDebug,
}

/// Runs the two-pass placement strategy over `input`.
pub fn resolve(input: ResolveInput<'_>) -> Result<ResolveOutput, LayoutError> {
    if input.dimensions.width <= 0.0 || input.dimensions.height <= 0.0 {
        return Err(LayoutError::InvalidDimensions {
            width: input.dimensions.width,
            height: input.dimensions.height,
        });
    }
    if input.bands.len() != input.occupancy.len() {
        return Err(LayoutError::MisalignedOccupancy {
            bands: input.bands.len(),
            occupancy: input.occupancy.len(),
        });
    }
    validate_contiguous(input.bands)?;

    // Deep-copy: the resolver exclusively owns this copy for the call; the
    // caller's occupancy is never mutated (spec §4.6, Preparation).
    let mut occupancy: Vec<BandOccupancy> = input.occupancy.to_vec();

    let clusters = cluster_by_proximity(
        input.objects,
        label_bbox,
        input.cluster_distance.unwrap_or(ClusterDistance::Scalar(0.0)),
    );

    let mut placements: IndexMap<LabelId, PlacementObject> = IndexMap::new();
    let mut logs: DebugPlacementLogs = IndexMap::new();

    // Pass 1 — simple: process in ascending anchor.y order (stable sort
    // keeps original input order as the tiebreak, spec §4.6 Determinism).
    let mut order: Vec<usize> = (0..input.objects.len()).collect();
    order.sort_by(|&a, &b| {
        input.objects[a]
            .anchor
            .y
            .partial_cmp(&input.objects[b].anchor.y)
            .unwrap()
    });

    let mut unplaced: Vec<usize> = Vec::new();
    for idx in order {
        let label = &input.objects[idx];
        let home = home_band_index(input.bands, label.anchor.y);
        let mut placed = false;

        for (mode_idx, &mode) in input.strategy.first_pass.modes.iter().enumerate() {
            let (band_offset, x_align) = mode.offset_and_align();
            let target = home as i64 + i64::from(band_offset);
            if target < 0 || target as usize >= input.bands.len() {
                continue;
            }
            let target = target as usize;

            let effective_anchor = Point::new(
                label.anchor.x + input.strategy.first_pass.offset.x,
                label.anchor.y + input.strategy.first_pass.offset.y,
            );

            let attempt = try_single_placement(
                label.id.clone(),
                &occupancy[target],
                &input.bands[target],
                effective_anchor,
                x_align,
                false,
                label.dimensions,
                input.strategy.first_pass.max_distance,
                IgnoreBandExtents::None,
            );

            debug::record(
                &mut logs,
                &label.id,
                Attempt {
                    pass: Pass::Simple,
                    algorithm: "simple",
                    iteration: mode_idx,
                    placement: AttemptPlacement::Mode(mode),
                    is_placed: attempt.is_some(),
                },
            );

            if let Some(result) = attempt {
                commit(&mut occupancy, &input.bands[target], &result);
                placements.insert(label.id.clone(), result);
                placed = true;
                break;
            }
        }

        if !placed {
            unplaced.push(idx);
        }
    }

    // Pass 2 — sweep: process labels still unplaced, sorted by anchor.x —
    // ascending for sweep-to-left, descending for sweep-to-right (spec §4.6).
    let sweep_right = matches!(
        input.strategy.sweep.horizontal,
        crate::strategy::SweepHorizontal::SweepToRight
    );
    unplaced.sort_by(|&a, &b| {
        let xa = input.objects[a].anchor.x;
        let xb = input.objects[b].anchor.x;
        if sweep_right {
            xb.partial_cmp(&xa).unwrap()
        } else {
            xa.partial_cmp(&xb).unwrap()
        }
    });

    let mut failed: IndexMap<LabelId, PlacementObject> = IndexMap::new();
    let indices_to_try = unplaced.clone();

    for idx in unplaced {
        let label = &input.objects[idx];

        if label.anchor.x < -label.dimensions.width {
            debug::record(
                &mut logs,
                &label.id,
                Attempt {
                    pass: Pass::Sweep,
                    algorithm: "sweep",
                    iteration: 0,
                    placement: AttemptPlacement::PastLeftEdge,
                    is_placed: false,
                },
            );
            failed.insert(label.id.clone(), label.clone());
            continue;
        }

        let home = home_band_index(input.bands, label.anchor.y);
        let candidate_bands = sweep_candidate_bands(home, input.bands, &input.strategy.sweep);
        let dir = if sweep_right { 1.0 } else { -1.0 };

        let mut placed = false;
        'steps: for step in 0..input.strategy.sweep.max_iterations {
            let x = label.anchor.x
                + (step as f64) * input.strategy.sweep.step_factor * label.dimensions.width * dir;

            for &(target, y) in &candidate_bands {
                if (y - label.anchor.y).abs() > input.strategy.sweep.max_distance.y {
                    continue;
                }

                let effective_anchor = Point::new(
                    x + input.strategy.sweep.offset.x,
                    y + input.strategy.sweep.offset.y,
                );

                let attempt = try_single_placement(
                    label.id.clone(),
                    &occupancy[target],
                    &input.bands[target],
                    effective_anchor,
                    input.strategy.sweep.x_align,
                    false,
                    label.dimensions,
                    input.strategy.sweep.max_distance,
                    IgnoreBandExtents::None,
                );

                debug::record(
                    &mut logs,
                    &label.id,
                    Attempt {
                        pass: Pass::Sweep,
                        algorithm: "sweep",
                        iteration: step,
                        placement: AttemptPlacement::Candidate { x, y },
                        is_placed: attempt.is_some(),
                    },
                );

                if let Some(result) = attempt {
                    commit(&mut occupancy, &input.bands[target], &result);
                    placements.insert(label.id.clone(), result);
                    placed = true;
                    break 'steps;
                }
            }
        }

        if !placed {
            failed.insert(label.id.clone(), label.clone());
        }
    }

    Ok(ResolveOutput {
        placements,
        failed,
        occupancy,
        debug: ResolveDebug {
            clusters,
            indices_to_try,
            debug_placement_logs: logs,
        },
    })
}

/// Commit: append the placed range to the owning band's occupancy and
/// re-run consolidation/inversion for that band only (spec §4.6, Commit).
fn commit(occupancy: &mut [BandOccupancy], band: &PlacementBand, result: &PlacementObject) {
    let pos = result
        .placed_position
        .expect("a committed placement always has a position");
    let half_width = result.dimensions.width / 2.0;
    occupancy[band.index].commit(
        band,
        Range::new(pos.x - half_width, pos.x + half_width, band.top, band.bottom),
    );
}

/// Finds the band whose `[top, bottom]` contains `y`, falling back to the
/// nearest edge band for out-of-chart anchors. Ties resolve to the first
/// matching band (linear scan in order, spec §4.6 step 1).
fn home_band_index(bands: &[PlacementBand], y: f64) -> usize {
    for band in bands {
        if y >= band.top && y <= band.bottom {
            return band.index;
        }
    }
    if let Some(first) = bands.first() {
        if y < first.top {
            return first.index;
        }
    }
    bands.len().saturating_sub(1)
}

/// Precomputes `(band_index, y)` candidates from `verticalSearch` (spec
/// §4.6, Pass 2 step 2).
fn sweep_candidate_bands(
    home: usize,
    bands: &[PlacementBand],
    sweep: &crate::strategy::SweepConfig,
) -> Vec<(usize, f64)> {
    let mut out = Vec::new();
    for &offset in &sweep.vertical_search {
        let target = home as i64 + i64::from(offset);
        if target < 0 || target as usize >= bands.len() {
            continue;
        }
        let band = &bands[target as usize];
        let y = match offset.cmp(&0) {
            std::cmp::Ordering::Equal => band.centre(),
            std::cmp::Ordering::Less => band.bottom,
            std::cmp::Ordering::Greater => band.top,
        };
        out.push((target as usize, y));
    }
    out
}

fn label_bbox(label: &PlacementObject) -> Rect {
    let half_w = label.dimensions.width / 2.0;
    let half_h = label.dimensions.height / 2.0;
    Rect::new(
        label.anchor.x - half_w,
        label.anchor.x + half_w,
        label.anchor.y - half_h,
        label.anchor.y + half_h,
    )
    .expect("label dimensions are non-negative")
}

fn validate_contiguous(bands: &[PlacementBand]) -> Result<(), LayoutError> {
    for pair in bands.windows(2) {
        if pair[0].bottom != pair[1].top {
            return Err(LayoutError::NonContiguousBands {
                left: pair[0].index,
                left_bottom: pair[0].bottom,
                right: pair[1].index,
                right_top: pair[1].top,
            });
        }
    }
    Ok(())
}
