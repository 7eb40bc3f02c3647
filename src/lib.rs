//! Deterministic label placement engine for the airliner capacity/range
//! chart: given markers already projected into pixel space and a set of
//! text labels with known dimensions, decides where each label should sit
//! so labels never overlap each other or known obstacles, stay as close as
//! possible to their anchors, and placement is stable and reproducible.
//!
//! The engine is a pure function of its inputs — no I/O, no global state,
//! no animation. Everything outside of band/occupancy/cluster/placement
//! bookkeeping (data ingestion, scales, rendering, viewport, hit-testing)
//! is an external collaborator with no module here.

pub mod bands;
pub mod clusters;
pub mod debug;
pub mod errors;
pub mod geometry;
pub mod label;
pub mod occupancy;
pub mod placement;
pub mod resolver;
pub mod spatial;
pub mod strategy;

pub use bands::{PlacementBand, build_bands, build_bands_with_defaults};
pub use clusters::{ClusterDistance, cluster_by_proximity};
pub use errors::LayoutError;
pub use geometry::{Dimensions, Point, Range, Rect, Size};
pub use label::{LabelId, PlacementObject};
pub use occupancy::{BandOccupancy, compute_occupancy};
pub use placement::{IgnoreBandExtents, try_single_placement};
pub use resolver::{ResolveDebug, ResolveInput, ResolveOutput, resolve};
pub use strategy::{
    FirstPassConfig, FirstPassMode, MaxDistance, Offset, Strategy, SweepConfig, SweepHorizontal,
    XAlign,
};
