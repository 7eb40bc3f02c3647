//! The label placement object itself (spec §3, PlacementObject).

use crate::geometry::{Point, Size};

/// Caller-supplied, unique identifier for a label.
pub type LabelId = String;

/// A label: its logical anchor, its unrotated pixel dimensions, and —
/// once placed — its final centre position and the band it landed in.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementObject {
    pub id: LabelId,
    pub anchor: Point,
    pub dimensions: Size,
    /// The centre of the final placement, once resolved. `None` before
    /// resolution and for labels that end up in `failed`.
    pub placed_position: Option<Point>,
    pub band_index: Option<usize>,
}

impl PlacementObject {
    /// Creates an unplaced label ready to be handed to the resolver.
    #[must_use]
    pub fn new(id: impl Into<LabelId>, anchor: Point, dimensions: Size) -> Self {
        Self {
            id: id.into(),
            anchor,
            dimensions,
            placed_position: None,
            band_index: None,
        }
    }
}
