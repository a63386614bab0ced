//! Points view: (x1, x2) pairs joined by lines and/or marked.

use super::{Bounds, DrawContext, TiledView, ViewKind};
use crate::error::{check_length, Result};
use crate::sampling::Sampling;
use crate::style::{LineStyle, MarkStyle, Style};
use ratatui::buffer::Buffer;
use ratatui::style::Color;

/// A view of points (x1, x2), by default joined by a solid line.
#[derive(Debug, Clone)]
pub struct PointsView {
    x1: Vec<f32>,
    x2: Vec<f32>,
    style: Style,
}

impl PointsView {
    /// Points with explicit x1 and x2 coordinates.
    pub fn new(x1: Vec<f32>, x2: Vec<f32>) -> Result<Self> {
        check_length("points x1 and x2", x1.len(), x2.len())?;
        Ok(Self {
            x1,
            x2,
            style: Style::default(),
        })
    }

    /// Points of a sampled function x2(x1).
    pub fn from_sampling(s1: &Sampling, x2: Vec<f32>) -> Result<Self> {
        check_length("sampling and x2", s1.count(), x2.len())?;
        let x1 = s1.values().map(|v| v as f32).collect();
        Self::new(x1, x2)
    }

    /// Points (i, x2[i]) for i = 0, 1, 2, ...
    pub fn from_values(x2: Vec<f32>) -> Self {
        Self {
            x1: (0..x2.len()).map(|i| i as f32).collect(),
            x2,
            style: Style::default(),
        }
    }

    /// The x1 coordinates.
    pub fn x1(&self) -> &[f32] {
        &self.x1
    }

    /// The x2 coordinates.
    pub fn x2(&self) -> &[f32] {
        &self.x2
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x1.len()
    }

    /// Whether the view has no points.
    pub fn is_empty(&self) -> bool {
        self.x1.is_empty()
    }

    /// Current style.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Set the style from a string such as `"r-o"`; see [`Style::parse`].
    ///
    /// On error the previous style is kept.
    pub fn set_style(&mut self, style: &str) -> Result<()> {
        self.style = Style::parse(style)?;
        Ok(())
    }

    /// Set the line style.
    pub fn set_line_style(&mut self, line: LineStyle) {
        self.style.line = line;
    }

    /// Set the mark style.
    pub fn set_mark_style(&mut self, mark: MarkStyle) {
        self.style.mark = mark;
    }

    /// Set the color; `None` uses the theme's text color.
    pub fn set_line_color(&mut self, color: Option<Color>) {
        self.style.color = color;
    }

    fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x1
            .iter()
            .zip(&self.x2)
            .map(|(&a, &b)| (a as f64, b as f64))
    }
}

impl TiledView for PointsView {
    fn kind(&self) -> ViewKind {
        ViewKind::Points
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points())
    }

    fn draw(&self, ctx: &DrawContext<'_>, buf: &mut Buffer) {
        let color = self.style.color.unwrap_or(ctx.colors.text);

        let mut step = 0;
        let mut previous: Option<(f64, f64)> = None;
        for point in self.points() {
            if !(point.0.is_finite() && point.1.is_finite()) {
                // Missing values break the line
                previous = None;
                continue;
            }
            if let Some(from) = previous {
                ctx.draw_line(buf, from, point, self.style.line, color, &mut step);
            }
            previous = Some(point);
        }

        if let Some(glyph) = self.style.mark.glyph() {
            for (x1, x2) in self.points() {
                if let Some((col, row)) = ctx.cell(x1, x2) {
                    ctx.put(buf, col, row, glyph, color);
                }
            }
        }
    }

    fn write_tsv(&self, out: &mut String) {
        for (x1, x2) in self.points() {
            out.push_str(&format!("{}\t{}\n", x1, x2));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlotError;

    #[test]
    fn paired_arrays_must_match() {
        let err = PointsView::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::LengthMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn sampling_supplies_x1() {
        let s1 = Sampling::new(3, 0.5, 1.0).unwrap();
        let pv = PointsView::from_sampling(&s1, vec![4.0, 5.0, 6.0]).unwrap();
        assert_eq!(pv.x1(), &[1.0, 1.5, 2.0]);
        assert!(PointsView::from_sampling(&s1, vec![4.0]).is_err());
    }

    #[test]
    fn default_style_is_solid_line_without_marks() {
        let pv = PointsView::new(vec![], vec![]).unwrap();
        assert_eq!(pv.style().line, LineStyle::Solid);
        assert_eq!(pv.style().mark, MarkStyle::None);
        assert!(pv.bounds().is_none());
    }

    #[test]
    fn bad_style_keeps_previous() {
        let mut pv = PointsView::new(vec![0.0], vec![0.0]).unwrap();
        pv.set_style("r-o").unwrap();
        assert!(pv.set_style("r-?").is_err());
        assert_eq!(pv.style().mark, MarkStyle::HollowCircle);
    }
}
