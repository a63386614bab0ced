//! Color palettes and color maps for pixels views and color bars.

use ratatui::style::Color;

/// Color palette for pixels visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Black to white.
    #[default]
    Gray,
    /// Blue-cyan-yellow-red.
    Jet,
    /// Viridis colormap (perceptually uniform, colorblind-friendly).
    Viridis,
    /// Plasma colormap (perceptually uniform).
    Plasma,
    /// Rainbow/Spectral colormap (traditional, high contrast).
    Rainbow,
    /// Blue-White-Red diverging colormap.
    BlueRed,
}

impl ColorPalette {
    /// All palettes in cycle order.
    pub const ALL: [ColorPalette; 6] = [
        Self::Gray,
        Self::Jet,
        Self::Viridis,
        Self::Plasma,
        Self::Rainbow,
        Self::BlueRed,
    ];

    /// Get the next palette in cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Gray => Self::Jet,
            Self::Jet => Self::Viridis,
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Gray,
        }
    }

    /// Get palette name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gray => "Gray",
            Self::Jet => "Jet",
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }

    /// Look up a palette by case-insensitive name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name) || p.short_name() == name)
    }

    fn short_name(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Jet => "jet",
            Self::Viridis => "viridis",
            Self::Plasma => "plasma",
            Self::Rainbow => "rainbow",
            Self::BlueRed => "bluered",
        }
    }

    /// Map a normalized value (0.0 to 1.0) to an RGB color.
    pub fn color(self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Gray => gray_color(t),
            Self::Jet => jet_color(t),
            Self::Viridis => viridis_color(t),
            Self::Plasma => plasma_color(t),
            Self::Rainbow => rainbow_color(t),
            Self::BlueRed => bluered_color(t),
        }
    }
}

/// Mapping from data values to colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMap {
    min: f64,
    max: f64,
    palette: ColorPalette,
}

impl ColorMap {
    /// Create a color map over `[min, max]`.
    ///
    /// A degenerate or reversed range is widened so that every finite value
    /// still maps somewhere on the palette.
    pub fn new(min: f64, max: f64, palette: ColorPalette) -> Self {
        let (min, max) = if min.is_finite() && max.is_finite() && min < max {
            (min, max)
        } else if min.is_finite() {
            (min - 0.5, min + 0.5)
        } else {
            (0.0, 1.0)
        };
        Self { min, max, palette }
    }

    /// Minimum value of the map.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum value of the map.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// The palette used.
    pub fn palette(&self) -> ColorPalette {
        self.palette
    }

    /// Normalize a value into `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Color for a data value; `None` for missing (non-finite) values.
    pub fn color(&self, value: f64) -> Option<Color> {
        value
            .is_finite()
            .then(|| self.palette.color(self.normalize(value)))
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new(0.0, 1.0, ColorPalette::Gray)
    }
}

fn gray_color(t: f64) -> Color {
    let v = (t * 255.0) as u8;
    Color::Rgb(v, v, v)
}

/// Jet colormap: blue, cyan, yellow, red.
fn jet_color(t: f64) -> Color {
    let channel = |center: f64| ((1.5 - (4.0 * t - center).abs()).clamp(0.0, 1.0) * 255.0) as u8;
    Color::Rgb(channel(3.0), channel(2.0), channel(1.0))
}

/// Viridis colormap approximation.
fn viridis_color(t: f64) -> Color {
    // Piecewise linear through three anchor colors
    let r = if t < 0.5 {
        68.0 + t * 2.0 * (33.0 - 68.0)
    } else {
        33.0 + (t - 0.5) * 2.0 * (253.0 - 33.0)
    };

    let g = if t < 0.5 {
        1.0 + t * 2.0 * (104.0 - 1.0)
    } else {
        104.0 + (t - 0.5) * 2.0 * (231.0 - 104.0)
    };

    let b = if t < 0.5 {
        84.0 + t * 2.0 * (109.0 - 84.0)
    } else {
        109.0 + (t - 0.5) * 2.0 * (37.0 - 109.0)
    };

    Color::Rgb(r as u8, g as u8, b as u8)
}

/// Plasma colormap approximation.
fn plasma_color(t: f64) -> Color {
    let r = if t < 0.5 {
        13.0 + t * 2.0 * (180.0 - 13.0)
    } else {
        180.0 + (t - 0.5) * 2.0 * (240.0 - 180.0)
    };

    let g = if t < 0.5 {
        8.0 + t * 2.0 * (54.0 - 8.0)
    } else {
        54.0 + (t - 0.5) * 2.0 * (175.0 - 54.0)
    };

    let b = if t < 0.5 {
        135.0 + t * 2.0 * (121.0 - 135.0)
    } else {
        121.0 + (t - 0.5) * 2.0 * (12.0 - 121.0)
    };

    Color::Rgb(r as u8, g as u8, b as u8)
}

/// Rainbow colormap, hue from 240° (blue) down to 0° (red).
fn rainbow_color(t: f64) -> Color {
    let h = (1.0 - t) * 240.0;
    let x = 1.0 - ((h / 60.0) % 2.0 - 1.0).abs();

    let (r, g, b) = if h < 60.0 {
        (1.0, x, 0.0)
    } else if h < 120.0 {
        (x, 1.0, 0.0)
    } else if h < 180.0 {
        (0.0, 1.0, x)
    } else {
        (0.0, x, 1.0)
    };

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Blue-White-Red diverging colormap.
fn bluered_color(t: f64) -> Color {
    if t < 0.5 {
        let v = (t * 2.0 * 255.0) as u8;
        Color::Rgb(v, v, 255)
    } else {
        let v = ((1.0 - (t - 0.5) * 2.0) * 255.0) as u8;
        Color::Rgb(255, v, v)
    }
}
