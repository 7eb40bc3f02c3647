//! Typed errors for programmer-error conditions detected at the engine boundary.
//!
//! Domain outcomes (a label that could not be placed, a cluster that is too
//! dense) are never represented here — they are returned as data in
//! [`crate::resolver::ResolveOutput`]. Only invariant violations on the
//! caller-supplied inputs reach a [`LayoutError`].

use thiserror::Error;

/// Errors raised while validating inputs to the band builder, occupancy
/// tracker, or placement resolver.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Chart width or height was not strictly positive.
    #[error("chart dimensions must be positive, got width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// `minBandHeight` or `maxBandHeight` was not strictly positive.
    #[error("band height must be positive, got {0}")]
    InvalidBandHeight(f64),

    /// Caller-supplied bands are not contiguous in Y (`bands[i].bottom != bands[i+1].top`).
    #[error("bands are not contiguous: band {left} ends at {left_bottom}, band {right} starts at {right_top}")]
    NonContiguousBands {
        left: usize,
        left_bottom: f64,
        right: usize,
        right_top: f64,
    },

    /// Caller supplied `bands` and `occupancy` of mismatched length.
    #[error("bands and occupancy must be index-aligned: {bands} bands vs {occupancy} occupancy entries")]
    MisalignedOccupancy { bands: usize, occupancy: usize },

    /// A rectangle had `minX > maxX` or `minY > maxY`.
    #[error("rectangle has inverted bounds: minX={min_x}, maxX={max_x}, minY={min_y}, maxY={max_y}")]
    InvalidRectangle {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
}
