//! Per-band occupancy tracking: which horizontal ranges of a band are
//! occupied versus available, per spec §4.3.

use crate::bands::PlacementBand;
use crate::geometry::{Range, Rect};

/// Occupied and available horizontal ranges for a single band.
///
/// Invariants (spec §3, BandOccupancy): `occupied` is pairwise disjoint and
/// non-adjacent after consolidation; `available` is the exact complement of
/// `occupied` within `[band.left, band.right]`; every range lies wholly
/// inside its band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandOccupancy {
    pub occupied: Vec<Range>,
    pub available: Vec<Range>,
}

impl BandOccupancy {
    /// Appends `range` to this band's occupied list and re-derives
    /// `available` from scratch. This is the *only* mutation path the
    /// resolver is allowed to use (spec §4.3, Mutation / §9 re-architecture
    /// guidance: "expose mutation only via `commit`").
    pub fn commit(&mut self, band: &PlacementBand, range: Range) {
        self.occupied.push(range);
        self.occupied = consolidate(&self.occupied);
        self.available = invert(&self.occupied, band);
    }
}

/// Computes initial occupancy for every band, aligned by index with `bands`.
#[must_use]
pub fn compute_occupancy(bands: &[PlacementBand], obstacles: &[Rect]) -> Vec<BandOccupancy> {
    let mut sorted: Vec<&Rect> = obstacles.iter().collect();
    sorted.sort_by(|a, b| a.centre_y().partial_cmp(&b.centre_y()).unwrap());

    let mut start_ptr = 0usize;
    let mut result = Vec::with_capacity(bands.len());

    for band in bands {
        // Discard obstacles that end at or before this band's top — they
        // can never intersect this or any later band (bands are sorted).
        while start_ptr < sorted.len() && sorted[start_ptr].max_y <= band.top {
            start_ptr += 1;
        }

        let mut occupied = Vec::new();
        for obstacle in &sorted[start_ptr..] {
            if obstacle.min_y >= band.bottom {
                break;
            }
            if obstacle.max_y > band.top && obstacle.min_y < band.bottom {
                occupied.push(Range::new(
                    obstacle.min_x,
                    obstacle.max_x,
                    band.top,
                    band.bottom,
                ));
            }
        }

        let occupied = consolidate(&occupied);
        let available = invert(&occupied, band);
        result.push(BandOccupancy { occupied, available });
    }

    result
}

/// Sorts ranges by `start` and merges any pair that overlaps or touches
/// (`r1.end >= r2.start`) into pairwise disjoint, non-touching ranges.
#[must_use]
pub fn consolidate(ranges: &[Range]) -> Vec<Range> {
    if ranges.is_empty() {
        return Vec::new();
    }
    let mut sorted = ranges.to_vec();
    sorted.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap());

    let mut merged: Vec<Range> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                if range.end > last.end {
                    last.end = range.end;
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Computes the ordered complement of `occupied` within `[band.left, band.right]`.
#[must_use]
pub fn invert(occupied: &[Range], band: &PlacementBand) -> Vec<Range> {
    if occupied.is_empty() {
        return vec![Range::new(band.left, band.right, band.top, band.bottom)];
    }

    let mut available = Vec::new();
    let mut cursor = band.left;
    for range in occupied {
        if range.start > cursor {
            available.push(Range::new(cursor, range.start, band.top, band.bottom));
        }
        cursor = cursor.max(range.end);
    }
    if cursor < band.right {
        available.push(Range::new(cursor, band.right, band.top, band.bottom));
    }
    available
}
