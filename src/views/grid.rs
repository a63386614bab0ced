//! Grid view: lines at axis tics or at zero.

use super::{Bounds, DrawContext, TiledView, ViewKind};
use crate::error::{PlotError, Result};
use crate::style::{color_from_char, take_line_token, LineStyle};
use ratatui::buffer::Buffer;
use ratatui::style::Color;

/// Which grid lines are drawn along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridLines {
    /// No lines.
    #[default]
    None,
    /// Lines at every major tic.
    Major,
    /// A single line at zero.
    Zero,
}

/// A view of grid lines.
///
/// Horizontal lines sit at tics of the vertical axis, vertical lines at tics
/// of the horizontal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    horizontal: GridLines,
    vertical: GridLines,
    line: LineStyle,
    color: Option<Color>,
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}

impl GridView {
    /// Dotted grid lines at all major tics.
    pub fn new() -> Self {
        Self {
            horizontal: GridLines::Major,
            vertical: GridLines::Major,
            line: LineStyle::Dot,
            color: None,
        }
    }

    /// Grid configured by a parameters string; see [`GridView::set_parameters`].
    pub fn with_parameters(parameters: &str) -> Result<Self> {
        let mut grid = Self::new();
        grid.set_parameters(parameters)?;
        Ok(grid)
    }

    /// Configure the grid from a compact string such as `"H-.V-."`.
    ///
    /// The string is a sequence of groups, each starting with `H`
    /// (horizontal lines) or `V` (vertical lines), optionally followed by
    /// `0` to draw only the line at zero, then style tokens: a color letter
    /// (`rgbcmykw`) or a line token (`-`, `--`, `-.`, `:`). Directions not
    /// named are not drawn. On error the grid is unchanged.
    pub fn set_parameters(&mut self, parameters: &str) -> Result<()> {
        let err = |reason: String| PlotError::format_parse(parameters, reason);
        let mut horizontal = GridLines::None;
        let mut vertical = GridLines::None;
        let mut line = None;
        let mut color = None;
        let mut current: Option<char> = None;

        let mut chars = parameters.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                'H' | 'V' => {
                    let lines = if chars.peek() == Some(&'0') {
                        chars.next();
                        GridLines::Zero
                    } else {
                        GridLines::Major
                    };
                    let slot = if c == 'H' {
                        &mut horizontal
                    } else {
                        &mut vertical
                    };
                    if *slot != GridLines::None {
                        return Err(err(format!("'{}' given twice", c)));
                    }
                    *slot = lines;
                    current = Some(c);
                },
                _ if current.is_none() => {
                    return Err(err(format!("'{}' before 'H' or 'V'", c)));
                },
                _ => {
                    if let Some(style) = take_line_token(c, &mut chars) {
                        line = Some(style);
                    } else if let Some(rgb) = color_from_char(c) {
                        color = Some(rgb);
                    } else {
                        return Err(err(format!("unexpected character '{}'", c)));
                    }
                },
            }
        }
        if current.is_none() {
            return Err(err("no 'H' or 'V'".to_string()));
        }

        self.horizontal = horizontal;
        self.vertical = vertical;
        self.line = line.unwrap_or(LineStyle::Dot);
        self.color = color;
        Ok(())
    }

    /// Horizontal lines drawn.
    pub fn horizontal(&self) -> GridLines {
        self.horizontal
    }

    /// Vertical lines drawn.
    pub fn vertical(&self) -> GridLines {
        self.vertical
    }

    /// Line style.
    pub fn line_style(&self) -> LineStyle {
        self.line
    }

    /// Line color, `None` for the theme's grid color.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Set the line color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }
}

fn positions(lines: GridLines, tics: &crate::axis::AxisTics) -> Vec<f64> {
    match lines {
        GridLines::None => Vec::new(),
        GridLines::Major => tics.values().collect(),
        GridLines::Zero => vec![0.0],
    }
}

impl TiledView for GridView {
    fn kind(&self) -> ViewKind {
        ViewKind::Grid
    }

    fn bounds(&self) -> Option<Bounds> {
        None
    }

    fn draw(&self, ctx: &DrawContext<'_>, buf: &mut Buffer) {
        let color = self.color.unwrap_or(ctx.colors.grid);
        let tile = ctx.tile;

        let rows: Vec<u16> = positions(self.horizontal, &ctx.v_tics)
            .into_iter()
            .filter_map(|v| ctx.row_of(v))
            .collect();
        for &row in &rows {
            for (i, col) in (tile.left()..tile.right()).enumerate() {
                if self.line.is_drawn(i) {
                    ctx.put(buf, col, row, self.line.horizontal_glyph(), color);
                }
            }
        }

        let cols = positions(self.vertical, &ctx.h_tics)
            .into_iter()
            .filter_map(|h| ctx.column_of(h));
        for col in cols {
            for (i, row) in (tile.top()..tile.bottom()).enumerate() {
                if !self.line.is_drawn(i) {
                    continue;
                }
                let crossing = self.line == LineStyle::Solid && rows.contains(&row);
                let glyph = if crossing {
                    '┼'
                } else {
                    self.line.vertical_glyph()
                };
                ctx.put(buf, col, row, glyph, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_is_dotted_major() {
        let g = GridView::new();
        assert_eq!(g.horizontal(), GridLines::Major);
        assert_eq!(g.vertical(), GridLines::Major);
        assert_eq!(g.line_style(), LineStyle::Dot);
    }

    #[test]
    fn parses_dash_dot_both_directions() {
        let g = GridView::with_parameters("H-.V-.").unwrap();
        assert_eq!(g.horizontal(), GridLines::Major);
        assert_eq!(g.vertical(), GridLines::Major);
        assert_eq!(g.line_style(), LineStyle::DashDot);
    }

    #[test]
    fn parses_zero_lines_and_color() {
        let g = GridView::with_parameters("H0r--").unwrap();
        assert_eq!(g.horizontal(), GridLines::Zero);
        assert_eq!(g.vertical(), GridLines::None);
        assert_eq!(g.line_style(), LineStyle::Dash);
        assert_eq!(g.color(), Some(Color::Red));
    }

    #[test]
    fn malformed_parameters_fail_and_keep_state() {
        let mut g = GridView::new();
        for bad in ["", "-H", "HX", "HH", "V0V"] {
            assert!(
                matches!(g.set_parameters(bad), Err(PlotError::FormatParse { .. })),
                "{bad} should be rejected"
            );
        }
        assert_eq!(g, GridView::new());
    }
}
