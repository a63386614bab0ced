//! Color themes for plot panels.

use ratatui::style::Color;

/// Plot theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color, also the default color of views.
    pub text: Color,
    /// Title color.
    pub title: Color,
    /// Axis label color.
    pub label: Color,
    /// Tic label color.
    pub tic: Color,
    /// Tile border color.
    pub border: Color,
    /// Grid line color.
    pub grid: Color,
    /// Color for missing values.
    pub missing: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                title: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                tic: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                grid: Color::Rgb(80, 73, 69),
                missing: Color::Rgb(146, 131, 116),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                title: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                tic: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                grid: Color::Rgb(213, 196, 161),
                missing: Color::Rgb(146, 131, 116),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
            },
        }
    }
}
