//! Pixels view of a sampled function f(x1, x2).

use super::{Bounds, DrawContext, TiledView, ViewKind};
use crate::color::{ColorMap, ColorPalette};
use crate::error::{check_length, check_limits, PlotError, Result};
use crate::sampling::Sampling;
use ndarray::Array2;
use ratatui::buffer::Buffer;

/// How values between samples are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Value of the nearest sample.
    Nearest,
    /// Bilinear interpolation of the four nearest samples.
    #[default]
    Linear,
}

/// How the color map range is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Clips {
    Percentiles(f64, f64),
    Values(f64, f64),
}

/// A view of a sampled function f(x1, x2) as colored pixels.
///
/// Values are stored as an array of shape `(n2, n1)`: row `i2` holds the
/// samples f(x1, x2[i2]).
#[derive(Debug, Clone)]
pub struct PixelsView {
    s1: Sampling,
    s2: Sampling,
    f: Array2<f32>,
    interpolation: Interpolation,
    palette: ColorPalette,
    clips: Clips,
}

impl PixelsView {
    /// Pixels view with samplings `s1` (fast dimension) and `s2`.
    pub fn new(s1: Sampling, s2: Sampling, f: Array2<f32>) -> Result<Self> {
        let (n2, n1) = f.dim();
        check_length("sampling s1 and n1", s1.count(), n1)?;
        check_length("sampling s2 and n2", s2.count(), n2)?;
        Ok(Self {
            s1,
            s2,
            f,
            interpolation: Interpolation::default(),
            palette: ColorPalette::default(),
            clips: Clips::Percentiles(0.0, 100.0),
        })
    }

    /// Pixels view with zero first samples and unit intervals.
    pub fn from_array(f: Array2<f32>) -> Self {
        let (n2, n1) = f.dim();
        Self {
            s1: Sampling::indices(n1),
            s2: Sampling::indices(n2),
            f,
            interpolation: Interpolation::default(),
            palette: ColorPalette::default(),
            clips: Clips::Percentiles(0.0, 100.0),
        }
    }

    /// Number of samples in the fast dimension.
    pub fn n1(&self) -> usize {
        self.f.ncols()
    }

    /// Number of samples in the slow dimension.
    pub fn n2(&self) -> usize {
        self.f.nrows()
    }

    /// Sampling of x1.
    pub fn s1(&self) -> &Sampling {
        &self.s1
    }

    /// Sampling of x2.
    pub fn s2(&self) -> &Sampling {
        &self.s2
    }

    /// Sampled values, shape `(n2, n1)`.
    pub fn values(&self) -> &Array2<f32> {
        &self.f
    }

    /// Current interpolation.
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Set the interpolation.
    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    /// Current palette.
    pub fn color_palette(&self) -> ColorPalette {
        self.palette
    }

    /// Clip the color map to explicit values.
    pub fn set_clips(&mut self, min: f64, max: f64) -> Result<()> {
        check_limits(min, max)?;
        self.clips = Clips::Values(min, max);
        Ok(())
    }

    /// Clip the color map to percentiles of the finite values.
    pub fn set_percentiles(&mut self, pmin: f64, pmax: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&pmin) || !(0.0..=100.0).contains(&pmax) || pmin >= pmax {
            return Err(PlotError::InvalidLimits {
                min: pmin,
                max: pmax,
            });
        }
        self.clips = Clips::Percentiles(pmin, pmax);
        Ok(())
    }

    /// Effective clip values.
    pub fn clips(&self) -> (f64, f64) {
        match self.clips {
            Clips::Values(min, max) => (min, max),
            Clips::Percentiles(pmin, pmax) => {
                let mut finite: Vec<f32> = self.f.iter().copied().filter(|v| v.is_finite()).collect();
                if finite.is_empty() {
                    return (0.0, 1.0);
                }
                finite.sort_by(f32::total_cmp);
                let last = (finite.len() - 1) as f64;
                let at = |p: f64| finite[(p / 100.0 * last).round() as usize] as f64;
                (at(pmin), at(pmax))
            },
        }
    }

    /// Displayed value at logical point (x1, x2), or `None` outside the view.
    pub fn value_at(&self, x1: f64, x2: f64) -> Option<f32> {
        match self.interpolation {
            Interpolation::Nearest => self.nearest(x1, x2),
            Interpolation::Linear => self.bilinear(x1, x2),
        }
    }

    fn nearest(&self, x1: f64, x2: f64) -> Option<f32> {
        let i1 = self.s1.index_of_nearest(x1)?;
        let i2 = self.s2.index_of_nearest(x2)?;
        self.f.get((i2, i1)).copied()
    }

    fn bilinear(&self, x1: f64, x2: f64) -> Option<f32> {
        let (n2, n1) = self.f.dim();
        let p1 = self.s1.position(x1);
        let p2 = self.s2.position(x2);
        if n1 == 0 || n2 == 0 || p1 < -0.5 || p2 < -0.5 {
            return None;
        }
        if p1 > n1 as f64 - 0.5 || p2 > n2 as f64 - 0.5 {
            return None;
        }
        let p1 = p1.clamp(0.0, (n1 - 1) as f64);
        let p2 = p2.clamp(0.0, (n2 - 1) as f64);
        let (j1, j2) = (p1.floor() as usize, p2.floor() as usize);
        let (k1, k2) = ((j1 + 1).min(n1 - 1), (j2 + 1).min(n2 - 1));
        let (t1, t2) = ((p1 - j1 as f64) as f32, (p2 - j2 as f64) as f32);

        let corners = [
            self.f[(j2, j1)],
            self.f[(j2, k1)],
            self.f[(k2, j1)],
            self.f[(k2, k1)],
        ];
        if corners.iter().any(|v| !v.is_finite()) {
            return self.nearest(x1, x2);
        }
        let top = corners[0] * (1.0 - t1) + corners[1] * t1;
        let bottom = corners[2] * (1.0 - t1) + corners[3] * t1;
        Some(top * (1.0 - t2) + bottom * t2)
    }
}

impl TiledView for PixelsView {
    fn kind(&self) -> ViewKind {
        ViewKind::Pixels
    }

    fn bounds(&self) -> Option<Bounds> {
        let (l1, l2) = (self.s1.last()?, self.s2.last()?);
        let (h1, h2) = (self.s1.delta() / 2.0, self.s2.delta() / 2.0);
        Some(Bounds {
            x1_min: self.s1.first() - h1,
            x1_max: l1 + h1,
            x2_min: self.s2.first() - h2,
            x2_max: l2 + h2,
        })
    }

    fn draw(&self, ctx: &DrawContext<'_>, buf: &mut Buffer) {
        let map = self.color_map().unwrap_or_default();
        for row in ctx.tile.top()..ctx.tile.bottom() {
            for col in ctx.tile.left()..ctx.tile.right() {
                let (x1, x2) = ctx.world_at(col, row);
                match self.value_at(x1, x2).map(|v| map.color(v as f64)) {
                    Some(Some(color)) => ctx.put(buf, col, row, '█', color),
                    Some(None) => ctx.put(buf, col, row, '·', ctx.colors.missing),
                    None => {},
                }
            }
        }
    }

    fn color_map(&self) -> Option<ColorMap> {
        let (min, max) = self.clips();
        Some(ColorMap::new(min, max, self.palette))
    }

    fn set_color_palette(&mut self, palette: ColorPalette) {
        self.palette = palette;
    }

    fn write_tsv(&self, out: &mut String) {
        for row in self.f.rows() {
            let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            out.push_str(&line.join("\t"));
            out.push('\n');
        }
    }

    fn as_pixels_view(&self) -> Option<&PixelsView> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn sampling_counts_must_match_shape() {
        let f = Array2::<f32>::zeros((2, 3));
        assert!(PixelsView::new(Sampling::indices(3), Sampling::indices(2), f.clone()).is_ok());
        assert!(matches!(
            PixelsView::new(Sampling::indices(2), Sampling::indices(2), f),
            Err(PlotError::LengthMismatch {
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn nearest_reads_samples() {
        let mut pv = PixelsView::from_array(array![[1.0, 2.0], [3.0, 4.0]]);
        pv.set_interpolation(Interpolation::Nearest);
        // f[i2][i1]: x1 selects the column, x2 the row
        assert_eq!(pv.value_at(1.0, 0.0), Some(2.0));
        assert_eq!(pv.value_at(0.2, 0.9), Some(3.0));
        assert_eq!(pv.value_at(2.0, 0.0), None);
    }

    #[test]
    fn linear_interpolates_between_samples() {
        let pv = PixelsView::from_array(array![[0.0, 2.0], [4.0, 6.0]]);
        assert_eq!(pv.value_at(0.5, 0.0), Some(1.0));
        assert_eq!(pv.value_at(0.5, 0.5), Some(3.0));
        assert_eq!(pv.value_at(-0.4, 0.0), Some(0.0));
    }

    #[test]
    fn clips_follow_percentiles() {
        let mut pv = PixelsView::from_array(array![[0.0, 1.0, 2.0, 3.0, f32::NAN]]);
        assert_eq!(pv.clips(), (0.0, 3.0));
        pv.set_percentiles(0.0, 50.0).unwrap();
        assert_eq!(pv.clips().1, 2.0);
        pv.set_clips(-1.0, 1.0).unwrap();
        assert_eq!(pv.clips(), (-1.0, 1.0));
        assert!(pv.set_percentiles(50.0, 20.0).is_err());
        assert!(pv.set_clips(1.0, 1.0).is_err());
    }

    #[test]
    fn bounds_extend_half_a_sample() {
        let pv = PixelsView::from_array(Array2::zeros((2, 3)));
        let b = pv.bounds().unwrap();
        assert_eq!((b.x1_min, b.x1_max, b.x2_min, b.x2_max), (-0.5, 2.5, -0.5, 1.5));
    }

    #[test]
    fn palette_defaults_to_gray() {
        let mut pv = PixelsView::from_array(Array2::zeros((1, 1)));
        assert_eq!(pv.color_map().unwrap().palette(), ColorPalette::Gray);
        pv.set_color_palette(ColorPalette::Jet);
        assert_eq!(pv.color_palette(), ColorPalette::Jet);
    }
}
