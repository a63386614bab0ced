//! Uniform sampling of one coordinate axis.

use crate::error::{PlotError, Result};

/// Evenly spaced coordinate values `first + i*delta` for `i` in `0..count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    count: usize,
    delta: f64,
    first: f64,
}

impl Sampling {
    /// Create a sampling with the given count, interval and first value.
    pub fn new(count: usize, delta: f64, first: f64) -> Result<Self> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(PlotError::invalid_sampling(format!(
                "interval must be positive and finite, got {}",
                delta
            )));
        }
        if !first.is_finite() {
            return Err(PlotError::invalid_sampling(format!(
                "first value must be finite, got {}",
                first
            )));
        }
        Ok(Self {
            count,
            delta,
            first,
        })
    }

    /// Sampling 0, 1, 2, ... with `count` values.
    pub fn indices(count: usize) -> Self {
        Self {
            count,
            delta: 1.0,
            first: 0.0,
        }
    }

    /// Number of samples.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sampling interval.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Value of the first sample.
    pub fn first(&self) -> f64 {
        self.first
    }

    /// Value of the last sample, or `None` for an empty sampling.
    pub fn last(&self) -> Option<f64> {
        (self.count > 0).then(|| self.value(self.count - 1))
    }

    /// Value of sample `i`.
    pub fn value(&self, i: usize) -> f64 {
        self.first + i as f64 * self.delta
    }

    /// Iterate over all sample values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.value(i))
    }

    /// Index of the sample nearest to `x`, if `x` lies within half an
    /// interval of the sampled range.
    pub fn index_of_nearest(&self, x: f64) -> Option<usize> {
        let i = ((x - self.first) / self.delta).round();
        if i >= 0.0 && (i as usize) < self.count {
            Some(i as usize)
        } else {
            None
        }
    }

    /// Fractional sample position of `x`, i.e. `(x - first) / delta`.
    pub fn position(&self, x: f64) -> f64 {
        (x - self.first) / self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_start_at_zero_with_unit_interval() {
        let s = Sampling::indices(3);
        assert_eq!(s.values().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert_eq!(s.last(), Some(2.0));
    }

    #[test]
    fn rejects_bad_interval() {
        assert!(matches!(
            Sampling::new(4, 0.0, 0.0),
            Err(PlotError::InvalidSampling { .. })
        ));
        assert!(Sampling::new(4, f64::NAN, 0.0).is_err());
        assert!(Sampling::new(4, 0.5, f64::INFINITY).is_err());
    }

    #[test]
    fn nearest_index_respects_bounds() {
        let s = Sampling::new(5, 0.5, 1.0).unwrap();
        assert_eq!(s.index_of_nearest(1.0), Some(0));
        assert_eq!(s.index_of_nearest(1.7), Some(1));
        assert_eq!(s.index_of_nearest(3.0), Some(4));
        assert_eq!(s.index_of_nearest(3.3), None);
        assert_eq!(s.index_of_nearest(0.7), None);
    }

    #[test]
    fn empty_sampling_has_no_last() {
        assert_eq!(Sampling::indices(0).last(), None);
    }
}
