//! Sequence view: stems from zero to each sampled value.

use super::{Bounds, DrawContext, TiledView, ViewKind};
use crate::error::{check_length, Result};
use crate::sampling::Sampling;
use crate::style::{LineStyle, MarkStyle};
use ratatui::buffer::Buffer;
use ratatui::style::Color;

/// When the value axis of a sequence includes zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zero {
    /// Always include zero.
    #[default]
    Always,
    /// Only the range of the values.
    Never,
    /// Include zero when the values lie within one span of it.
    Normal,
}

/// A view of a sampled sequence f(x), drawn as stems with circle marks.
#[derive(Debug, Clone)]
pub struct SequenceView {
    sampling: Sampling,
    values: Vec<f32>,
    color: Option<Color>,
    zero: Zero,
}

impl SequenceView {
    /// Sequence with the given sampling of x.
    pub fn new(sampling: Sampling, values: Vec<f32>) -> Result<Self> {
        check_length("sampling and values", sampling.count(), values.len())?;
        Ok(Self {
            sampling,
            values,
            color: None,
            zero: Zero::default(),
        })
    }

    /// Sequence sampled at x = 0, 1, 2, ...
    pub fn from_values(values: Vec<f32>) -> Self {
        Self {
            sampling: Sampling::indices(values.len()),
            values,
            color: None,
            zero: Zero::default(),
        }
    }

    /// Sampling of x.
    pub fn sampling(&self) -> &Sampling {
        &self.sampling
    }

    /// Sequence values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Set the color; `None` uses the theme's text color.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Set when the value axis includes zero.
    pub fn set_zero(&mut self, zero: Zero) {
        self.zero = zero;
    }

    /// Current zero mode.
    pub fn zero(&self) -> Zero {
        self.zero
    }

    fn value_range(&self) -> Option<(f64, f64)> {
        let (min, max) = self
            .values
            .iter()
            .map(|&v| v as f64)
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return None;
        }
        let include_zero = match self.zero {
            Zero::Always => true,
            Zero::Never => false,
            Zero::Normal => {
                let span = max - min;
                (min > 0.0 && min <= span) || (max < 0.0 && -max <= span)
            },
        };
        if include_zero {
            Some((min.min(0.0), max.max(0.0)))
        } else {
            Some((min, max))
        }
    }
}

impl TiledView for SequenceView {
    fn kind(&self) -> ViewKind {
        ViewKind::Sequence
    }

    fn bounds(&self) -> Option<Bounds> {
        let (x2_min, x2_max) = self.value_range()?;
        let last = self.sampling.last()?;
        Some(Bounds {
            x1_min: self.sampling.first(),
            x1_max: last,
            x2_min,
            x2_max,
        })
    }

    fn draw(&self, ctx: &DrawContext<'_>, buf: &mut Buffer) {
        let Some(last) = self.sampling.last() else {
            return;
        };
        let color = self.color.unwrap_or(ctx.colors.text);

        let mut step = 0;
        ctx.draw_line(
            buf,
            (self.sampling.first(), 0.0),
            (last, 0.0),
            LineStyle::Solid,
            ctx.colors.border,
            &mut step,
        );

        let mark = MarkStyle::HollowCircle.glyph().unwrap_or('o');
        for (x, &f) in self.sampling.values().zip(&self.values) {
            let f = f as f64;
            if !f.is_finite() {
                continue;
            }
            let mut step = 0;
            ctx.draw_line(buf, (x, 0.0), (x, f), LineStyle::Solid, color, &mut step);
            if let Some((col, row)) = ctx.cell(x, f) {
                ctx.put(buf, col, row, mark, color);
            }
        }
    }

    fn write_tsv(&self, out: &mut String) {
        for (x, f) in self.sampling.values().zip(&self.values) {
            out.push_str(&format!("{}\t{}\n", x, f));
        }
    }
}
