//! Layout configuration for plot panels and the terminal viewer.

use std::time::Duration;

/// Configuration for axis layout.
#[derive(Debug, Clone)]
pub struct AxisLayoutConfig {
    /// Target maximum number of tic intervals on the horizontal axis.
    pub max_h_tics: usize,
    /// Target maximum number of tic intervals on the vertical axis.
    pub max_v_tics: usize,
    /// Columns reserved per horizontal tic label when choosing tic density.
    pub h_tic_spacing: u16,
    /// Rows reserved per vertical tic label when choosing tic density.
    pub v_tic_spacing: u16,
    /// Maximum width of a vertical-axis tic label in characters.
    pub max_label_width: usize,
}

impl Default for AxisLayoutConfig {
    fn default() -> Self {
        Self {
            max_h_tics: 8,
            max_v_tics: 6,
            h_tic_spacing: 10,
            v_tic_spacing: 3,
            max_label_width: 10,
        }
    }
}

/// Configuration for the color bar strip.
#[derive(Debug, Clone)]
pub struct ColorBarLayoutConfig {
    /// Total width of the strip in characters.
    pub width: u16,
    /// Width of the color ramp in characters.
    pub ramp_width: u16,
}

impl Default for ColorBarLayoutConfig {
    fn default() -> Self {
        Self {
            width: 14,
            ramp_width: 2,
        }
    }
}

/// Combined layout configuration for a plot panel.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the axes.
    pub axis: AxisLayoutConfig,
    /// Configuration for the color bar.
    pub color_bar: ColorBarLayoutConfig,
}

/// Configuration for the interactive terminal viewer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// How long to wait for a key event before redrawing.
    pub poll_interval: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
        }
    }
}
