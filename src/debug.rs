//! Per-label trace of attempted placements (spec §4.7).
//!
//! The log is append-only during resolution and is truthful: `is_placed`
//! always reflects whether the corresponding attempt actually returned a
//! placement.

use indexmap::IndexMap;

use crate::label::LabelId;
use crate::strategy::FirstPassMode;

/// Which resolver pass produced an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Simple,
    Sweep,
}

/// What was tried. Pass 0 (simple) records the mode name; Pass 1 (sweep)
/// records the `(x, y)` candidate; a label that never entered the sweep
/// because its anchor was already past the left edge records the sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttemptPlacement {
    Mode(FirstPassMode),
    Candidate { x: f64, y: f64 },
    PastLeftEdge,
}

/// One recorded placement attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attempt {
    pub pass: Pass,
    pub algorithm: &'static str,
    pub iteration: usize,
    pub placement: AttemptPlacement,
    pub is_placed: bool,
}

/// The full per-label attempt trace, keyed by label id in processing order.
pub type DebugPlacementLogs = IndexMap<LabelId, Vec<Attempt>>;

/// Appends an attempt to `logs` for `id`, creating the entry if needed.
pub fn record(logs: &mut DebugPlacementLogs, id: &LabelId, attempt: Attempt) {
    logs.entry(id.clone()).or_default().push(attempt);
}
