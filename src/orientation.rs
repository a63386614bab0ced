//! Plot origin and panel orientation.

/// Corner of the plot where the coordinate origin lies.
///
/// Plots of 1-D arrays default to lower-left, plots of 2-D arrays to
/// upper-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// Origin at the lower-left corner.
    #[default]
    LowerLeft,
    /// Origin at the upper-left corner.
    UpperLeft,
}

/// Mapping of the logical axes (x1, x2) onto screen directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// x1 increases to the right, x2 increases upward.
    #[default]
    X1RightX2Up,
    /// x1 increases downward, x2 increases to the right.
    X1DownX2Right,
}

impl From<Origin> for Orientation {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::LowerLeft => Orientation::X1RightX2Up,
            Origin::UpperLeft => Orientation::X1DownX2Right,
        }
    }
}

impl Orientation {
    /// Map logical coordinates (x1, x2) to (horizontal, vertical).
    pub fn to_hv(self, x1: f64, x2: f64) -> (f64, f64) {
        match self {
            Orientation::X1RightX2Up => (x1, x2),
            Orientation::X1DownX2Right => (x2, x1),
        }
    }

    /// Map (horizontal, vertical) back to logical coordinates (x1, x2).
    pub fn to_x1x2(self, h: f64, v: f64) -> (f64, f64) {
        match self {
            Orientation::X1RightX2Up => (h, v),
            Orientation::X1DownX2Right => (v, h),
        }
    }

    /// Whether vertical values increase toward the top of the screen.
    pub fn vertical_up(self) -> bool {
        matches!(self, Orientation::X1RightX2Up)
    }

    /// Whether the horizontal axis is drawn above the tile.
    pub fn h_axis_on_top(self) -> bool {
        matches!(self, Orientation::X1DownX2Right)
    }
}
