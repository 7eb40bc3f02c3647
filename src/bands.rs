//! Band construction: partitions the chart's vertical extent into horizontal
//! "bands" that avoid obstacle footprints, per spec §4.2.

use crate::errors::LayoutError;
use crate::geometry::{Dimensions, Rect};

/// Default padding band count used when a caller has no preference.
pub const DEFAULT_PADDING_BANDS: u32 = 2;

/// A horizontal strip of the chart area eligible to hold labels.
///
/// Bands are contiguous in Y: for adjacent bands `b_i, b_{i+1}`,
/// `b_i.bottom == b_{i+1}.top`. Their union covers `[0, chartHeight)`.
/// `index` is dense (`0..N-1`), unique, and assigned only after all
/// restructuring is complete — it must not be relied on across phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementBand {
    pub index: usize,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl PlacementBand {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn centre(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }
}

/// Builds the ordered list of placement bands using the default padding
/// configuration (`paddingBands = 2`, `paddingBandHeight = minBandHeight`).
pub fn build_bands_with_defaults(
    dimensions: Dimensions,
    min_band_height: f64,
    max_band_height: f64,
    obstacles: &[Rect],
) -> Result<Vec<PlacementBand>, LayoutError> {
    build_bands(
        dimensions,
        min_band_height,
        max_band_height,
        obstacles,
        DEFAULT_PADDING_BANDS,
        min_band_height,
    )
}

/// Builds the ordered list of placement bands from obstacle footprints and
/// chart dimensions. See spec §4.2 for the three-phase algorithm.
pub fn build_bands(
    dimensions: Dimensions,
    min_band_height: f64,
    max_band_height: f64,
    obstacles: &[Rect],
    padding_bands: u32,
    padding_band_height: f64,
) -> Result<Vec<PlacementBand>, LayoutError> {
    if dimensions.width <= 0.0 || dimensions.height <= 0.0 {
        return Err(LayoutError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    if min_band_height <= 0.0 {
        return Err(LayoutError::InvalidBandHeight(min_band_height));
    }
    if max_band_height <= 0.0 {
        return Err(LayoutError::InvalidBandHeight(max_band_height));
    }
    let max_band_height = if max_band_height < min_band_height {
        min_band_height
    } else {
        max_band_height
    };
    let padding_band_height = padding_band_height.max(min_band_height);

    let raw = build_initial_bands(dimensions, min_band_height, obstacles);
    let split = split_oversized(&raw, min_band_height, max_band_height, padding_bands, padding_band_height);
    let merged = merge_undersized(split, min_band_height);

    Ok(finalize(merged, dimensions.width))
}

/// Phase 1: sweep obstacles in Y order, emitting obstacle bands (around
/// overlapping footprints) and gap bands (the space between them).
fn build_initial_bands(
    dimensions: Dimensions,
    min_band_height: f64,
    obstacles: &[Rect],
) -> Vec<(f64, f64)> {
    if obstacles.is_empty() {
        return vec![(0.0, dimensions.height)];
    }

    let mut sorted: Vec<&Rect> = obstacles.iter().collect();
    sorted.sort_by(|a, b| a.centre_y().partial_cmp(&b.centre_y()).unwrap());

    // Effective clearance height: the single largest obstacle footprint
    // height, applied uniformly to every obstacle (spec §4.2 Phase 1).
    let clearance = sorted
        .iter()
        .map(|o| o.height().max(min_band_height))
        .fold(0.0_f64, f64::max);

    let mut bands = Vec::new();
    let mut current: Option<(f64, f64)> = None;

    for obstacle in sorted {
        let cy = obstacle.centre_y();
        let top = (cy - clearance / 2.0).clamp(0.0, dimensions.height);
        let bottom = (cy + clearance / 2.0).clamp(0.0, dimensions.height);

        current = Some(match current {
            None => {
                if top > 0.0 {
                    bands.push((0.0, top));
                }
                (top, bottom)
            }
            Some((ctop, cbottom)) => {
                if top <= cbottom {
                    (ctop, cbottom.max(bottom))
                } else {
                    bands.push((ctop, cbottom));
                    if top > cbottom {
                        bands.push((cbottom, top));
                    }
                    (top, bottom)
                }
            }
        });
    }

    if let Some((ctop, cbottom)) = current {
        bands.push((ctop, cbottom));
        if cbottom < dimensions.height {
            bands.push((cbottom, dimensions.height));
        }
    }

    bands
}

/// Phase 2: split any band taller than `max_band_height` into padding
/// strips plus a central remainder, or fall back to equal division.
fn split_oversized(
    bands: &[(f64, f64)],
    min_band_height: f64,
    max_band_height: f64,
    padding_bands: u32,
    padding_band_height: f64,
) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    for &(top, bottom) in bands {
        let height = bottom - top;
        if height <= max_band_height {
            out.push((top, bottom));
            continue;
        }

        // Literal spec formula (spec §4.2 Phase 2): no extra guard on
        // `padding_bands > 0`. With paddingBands=0 this reduces to emitting
        // a single central band spanning the whole original span (0 padding
        // strips + 1 central band), i.e. the oversized band is left
        // unsplit rather than falling back to equal division.
        let reserved = 2.0 * f64::from(padding_bands) * padding_band_height;
        if height - reserved >= min_band_height {
            let mut cursor = top;
            for _ in 0..padding_bands {
                out.push((cursor, cursor + padding_band_height));
                cursor += padding_band_height;
            }
            let central_bottom = bottom - f64::from(padding_bands) * padding_band_height;
            out.push((cursor, central_bottom));
            let mut tail_cursor = central_bottom;
            for _ in 0..padding_bands {
                out.push((tail_cursor, tail_cursor + padding_band_height));
                tail_cursor += padding_band_height;
            }
        } else {
            let divisions = ((height / padding_band_height).floor() as usize).max(1);
            let step = height / divisions as f64;
            let mut cursor = top;
            for i in 0..divisions {
                let next = if i + 1 == divisions {
                    bottom
                } else {
                    cursor + step
                };
                out.push((cursor, next));
                cursor = next;
            }
        }
    }
    out
}

/// Phase 3: repeatedly merge undersized bands into their smaller neighbour
/// until every band meets `min_band_height`, or has no neighbour left.
fn merge_undersized(mut bands: Vec<(f64, f64)>, min_band_height: f64) -> Vec<(f64, f64)> {
    if bands.len() <= 1 {
        return bands;
    }

    let mut idx = 0;
    while idx < bands.len() {
        let (top, bottom) = bands[idx];
        if bottom - top >= min_band_height {
            idx += 1;
            continue;
        }

        let has_left = idx > 0;
        let has_right = idx + 1 < bands.len();
        if !has_left && !has_right {
            idx += 1;
            continue;
        }

        let merge_left = match (has_left, has_right) {
            (true, false) => true,
            (false, true) => false,
            (true, true) => {
                let left_height = bands[idx - 1].1 - bands[idx - 1].0;
                let right_height = bands[idx + 1].1 - bands[idx + 1].0;
                left_height <= right_height
            }
            (false, false) => unreachable!(),
        };

        if merge_left {
            let (ltop, _) = bands[idx - 1];
            bands[idx - 1] = (ltop, bottom);
            bands.remove(idx);
            idx -= 1;
        } else {
            let (_, rbottom) = bands[idx + 1];
            bands[idx] = (top, rbottom);
            bands.remove(idx + 1);
        }
    }

    bands
}

/// Sorts by `top` and assigns dense, unique indices.
fn finalize(mut bands: Vec<(f64, f64)>, chart_width: f64) -> Vec<PlacementBand> {
    bands.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    bands
        .into_iter()
        .enumerate()
        .map(|(index, (top, bottom))| PlacementBand {
            index,
            top,
            bottom,
            left: 0.0,
            right: chart_width,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_obstacles_yield_single_band() {
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
    fn single_obstacle_yields_contiguous_coverage() {
        let dims = Dimensions::new(400.0, 300.0);
        let obstacle = Rect::new(0.0, 10.0, 130.0, 170.0).unwrap(); // centre 150, height 40
        let bands = build_bands_with_defaults(dims, 20.0, 100.0, &[obstacle]).unwrap();

        assert!(bands.first().unwrap().top == 0.0);
        assert!((bands.last().unwrap().bottom - 300.0).abs() < 1e-9);
        for pair in bands.windows(2) {
            assert!((pair[0].bottom - pair[1].top).abs() < 1e-9);
        }
        for (i, b) in bands.iter().enumerate() {
            assert_eq!(b.index, i);
        }
        assert!(bands.iter().any(|b| b.top <= 150.0 && b.bottom >= 150.0));
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        let err = build_bands_with_defaults(Dimensions::new(0.0, 300.0), 20.0, 100.0, &[]).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDimensions { .. }));
    }

    #[test]
    fn rejects_non_positive_band_height() {
        let dims = Dimensions::new(400.0, 300.0);
        let err = build_bands_with_defaults(dims, 0.0, 100.0, &[]).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidBandHeight(_)));
    }

    #[test]
    fn max_band_height_below_min_falls_back_to_min() {
        let dims = Dimensions::new(400.0, 300.0);
        // max < min: treated as min, so nothing should be split below 300 height.
        let bands = build_bands_with_defaults(dims, 50.0, 10.0, &[]).unwrap();
        assert!(!bands.is_empty());
    }

    #[test]
    fn obstacle_entirely_outside_chart_still_participates() {
        let dims = Dimensions::new(400.0, 300.0);
        let obstacle = Rect::new(0.0, 10.0, -500.0, -460.0).unwrap();
        let bands = build_bands_with_defaults(dims, 20.0, 100.0, &[obstacle]).unwrap();
        assert!((bands.first().unwrap().top).abs() < 1e-9);
        assert!((bands.last().unwrap().bottom - 300.0).abs() < 1e-9);
    }

    #[test]
    fn merge_undersized_keeps_lone_band_with_no_neighbours() {
        let merged = merge_undersized(vec![(0.0, 5.0)], 20.0);
        assert_eq!(merged, vec![(0.0, 5.0)]);
    }

    #[test]
    fn zero_padding_bands_leaves_an_oversized_band_unsplit() {
        // spec §4.2 Phase 2's split condition is purely arithmetic on
        // `height - 2*paddingBands*paddingBandHeight`; paddingBands=0 makes
        // that reduce to `height >= minBandHeight`, which is already true
        // for any band this function is asked to split (it only runs when
        // `height > maxBandHeight >= minBandHeight`). So with no padding
        // bands requested, the oversized band is emitted as a single
        // central band spanning its original span, not divided further.
        let dims = Dimensions::new(400.0, 300.0);
        let bands = build_bands(dims, 20.0, 50.0, &[], 0, 20.0).unwrap();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].top, 0.0);
        assert_eq!(bands[0].bottom, 300.0);
    }
}
