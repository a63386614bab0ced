//! Line, mark and color styles shared by points and grid views.
//!
//! Styles are written as compact strings such as `"r-o"` (red solid line
//! with hollow circles) or `"k--"` (black dashed line).

use crate::error::{PlotError, Result};
use ratatui::style::Color;

/// Line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// No line.
    None,
    /// Solid line (`-`).
    #[default]
    Solid,
    /// Dashed line (`--`).
    Dash,
    /// Dotted line (`:`).
    Dot,
    /// Dash-dot line (`-.`).
    DashDot,
}

impl LineStyle {
    /// Whether a line step at position `i` along the line is drawn.
    pub fn is_drawn(self, i: usize) -> bool {
        match self {
            LineStyle::None => false,
            LineStyle::Solid => true,
            LineStyle::Dash => i % 3 != 2,
            LineStyle::Dot => i % 2 == 0,
            LineStyle::DashDot => matches!(i % 5, 0 | 1 | 3),
        }
    }

    /// Glyph for a horizontal segment.
    pub fn horizontal_glyph(self) -> char {
        match self {
            LineStyle::Dot => '·',
            LineStyle::Dash => '╌',
            _ => '─',
        }
    }

    /// Glyph for a vertical segment.
    pub fn vertical_glyph(self) -> char {
        match self {
            LineStyle::Dot => '·',
            LineStyle::Dash => '╎',
            _ => '│',
        }
    }
}

/// Mark drawn at each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkStyle {
    /// No mark.
    #[default]
    None,
    /// Small point (`.`).
    Point,
    /// Plus sign (`+`).
    PlusSign,
    /// Cross (`x`).
    Cross,
    /// Asterisk (`*`).
    Asterisk,
    /// Hollow circle (`o`).
    HollowCircle,
    /// Filled circle (`O`).
    FilledCircle,
    /// Hollow square (`s`).
    HollowSquare,
    /// Filled square (`S`).
    FilledSquare,
}

impl MarkStyle {
    /// Glyph drawn for this mark, if any.
    pub fn glyph(self) -> Option<char> {
        match self {
            MarkStyle::None => None,
            MarkStyle::Point => Some('•'),
            MarkStyle::PlusSign => Some('+'),
            MarkStyle::Cross => Some('x'),
            MarkStyle::Asterisk => Some('*'),
            MarkStyle::HollowCircle => Some('o'),
            MarkStyle::FilledCircle => Some('●'),
            MarkStyle::HollowSquare => Some('□'),
            MarkStyle::FilledSquare => Some('■'),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(MarkStyle::Point),
            '+' => Some(MarkStyle::PlusSign),
            'x' => Some(MarkStyle::Cross),
            '*' => Some(MarkStyle::Asterisk),
            'o' => Some(MarkStyle::HollowCircle),
            'O' => Some(MarkStyle::FilledCircle),
            's' => Some(MarkStyle::HollowSquare),
            'S' => Some(MarkStyle::FilledSquare),
            _ => None,
        }
    }
}

/// Terminal color for a single-letter color code.
pub fn color_from_char(c: char) -> Option<Color> {
    match c {
        'r' => Some(Color::Red),
        'g' => Some(Color::Green),
        'b' => Some(Color::Blue),
        'c' => Some(Color::Cyan),
        'm' => Some(Color::Magenta),
        'y' => Some(Color::Yellow),
        'k' => Some(Color::Black),
        'w' => Some(Color::White),
        _ => None,
    }
}

/// Style parsed from a string like `"r-o"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Line color; `None` means the theme's default.
    pub color: Option<Color>,
    /// Line style.
    pub line: LineStyle,
    /// Mark style.
    pub mark: MarkStyle,
}

impl Style {
    /// Parse a points-view style string.
    ///
    /// The string holds at most one color letter, one line token (`-`, `--`,
    /// `-.`, `:`) and one mark letter, in any order. A missing line token
    /// means no line.
    pub fn parse(input: &str) -> Result<Self> {
        let mut style = Style {
            color: None,
            line: LineStyle::None,
            mark: MarkStyle::None,
        };
        let mut seen_line = false;
        let mut chars = input.chars().peekable();
        while let Some(c) = chars.next() {
            if let Some(line) = take_line_token(c, &mut chars) {
                if seen_line {
                    return Err(PlotError::format_parse(input, "more than one line style"));
                }
                seen_line = true;
                style.line = line;
            } else if let Some(color) = color_from_char(c) {
                if style.color.is_some() {
                    return Err(PlotError::format_parse(input, "more than one color"));
                }
                style.color = Some(color);
            } else if let Some(mark) = MarkStyle::from_char(c) {
                if style.mark != MarkStyle::None {
                    return Err(PlotError::format_parse(input, "more than one mark"));
                }
                style.mark = mark;
            } else {
                return Err(PlotError::format_parse(
                    input,
                    format!("unexpected character '{}'", c),
                ));
            }
        }
        Ok(style)
    }
}

/// Consume a line-style token that starts with `c`, if it is one.
pub(crate) fn take_line_token<I>(c: char, rest: &mut std::iter::Peekable<I>) -> Option<LineStyle>
where
    I: Iterator<Item = char>,
{
    match c {
        '-' => match rest.peek() {
            Some('-') => {
                rest.next();
                Some(LineStyle::Dash)
            },
            Some('.') => {
                rest.next();
                Some(LineStyle::DashDot)
            },
            _ => Some(LineStyle::Solid),
        },
        ':' => Some(LineStyle::Dot),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_color_line_and_mark() {
        let s = Style::parse("r-o").unwrap();
        assert_eq!(s.color, Some(Color::Red));
        assert_eq!(s.line, LineStyle::Solid);
        assert_eq!(s.mark, MarkStyle::HollowCircle);
    }

    #[test]
    fn dash_dot_is_not_a_point_mark() {
        let s = Style::parse("-.").unwrap();
        assert_eq!(s.line, LineStyle::DashDot);
        assert_eq!(s.mark, MarkStyle::None);

        let s = Style::parse("k--.").unwrap();
        assert_eq!(s.line, LineStyle::Dash);
        assert_eq!(s.mark, MarkStyle::Point);
    }

    #[test]
    fn marks_only_means_no_line() {
        let s = Style::parse("bO").unwrap();
        assert_eq!(s.line, LineStyle::None);
        assert_eq!(s.mark, MarkStyle::FilledCircle);
    }

    #[test]
    fn rejects_unknown_and_duplicate_tokens() {
        assert!(matches!(Style::parse("q"), Err(PlotError::FormatParse { .. })));
        assert!(Style::parse("rg").is_err());
        assert!(Style::parse("-:").is_err());
        assert!(Style::parse("o+").is_err());
    }

    #[test]
    fn dash_pattern_skips_every_third_step() {
        let drawn: Vec<bool> = (0..6).map(|i| LineStyle::Dash.is_drawn(i)).collect();
        assert_eq!(drawn, vec![true, true, false, true, true, false]);
    }
}
