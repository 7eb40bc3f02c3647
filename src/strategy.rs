//! Strategy record driving the placement resolver: mode order, sweep
//! direction and granularity, and distance ceilings (spec §3, Strategy).

/// Horizontal alignment of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XAlign {
    /// Label centre sits at the anchor.
    Centre,
    /// Label's right edge sits at the anchor (label extends to the left).
    LeftToAnchor,
    /// Label's left edge sits at the anchor (label extends to the right).
    RightToAnchor,
}

/// One of the eight closed first-pass placement modes.
///
/// Modelled as a closed sum type rather than a string tag (spec §9
/// re-architecture guidance): each variant maps at compile time to its
/// `(bandOffset, xAlign)` pair via [`FirstPassMode::offset_and_align`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstPassMode {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FirstPassMode {
    /// Translates the mode to a `(bandOffset, xAlign)` pair (spec §4.6, Pass 1).
    #[must_use]
    pub fn offset_and_align(self) -> (i32, XAlign) {
        match self {
            FirstPassMode::Left => (0, XAlign::LeftToAnchor),
            FirstPassMode::Right => (0, XAlign::RightToAnchor),
            FirstPassMode::Top => (-1, XAlign::Centre),
            FirstPassMode::Bottom => (1, XAlign::Centre),
            FirstPassMode::TopLeft => (-1, XAlign::LeftToAnchor),
            FirstPassMode::TopRight => (-1, XAlign::RightToAnchor),
            FirstPassMode::BottomLeft => (1, XAlign::LeftToAnchor),
            FirstPassMode::BottomRight => (1, XAlign::RightToAnchor),
        }
    }
}

/// Direction the sweep pass scans across bands from the anchor outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepHorizontal {
    SweepToLeft,
    SweepToRight,
}

/// Per-axis distance ceiling. A missing axis (per spec, `maxDistance.x?`) is
/// represented as `f64::INFINITY`, i.e. no ceiling on that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxDistance {
    pub x: f64,
    pub y: f64,
}

impl MaxDistance {
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            x: f64::INFINITY,
            y: f64::INFINITY,
        }
    }

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for MaxDistance {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Per-axis offset applied before a placement is attempted. A missing axis
/// defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Configuration for Pass 1 (simple placement).
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPassConfig {
    pub modes: Vec<FirstPassMode>,
    pub max_distance: MaxDistance,
    pub offset: Offset,
}

/// Configuration for Pass 2 (sweep placement).
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub horizontal: SweepHorizontal,
    pub vertical_search: Vec<i32>,
    pub step_factor: f64,
    pub max_iterations: usize,
    pub max_distance: MaxDistance,
    pub offset: Offset,
    pub x_align: XAlign,
}

/// Default cap on sweep iterations when the caller does not specify one.
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// The full two-phase placement strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy {
    pub first_pass: FirstPassConfig,
    pub sweep: SweepConfig,
}
