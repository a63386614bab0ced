//! Narrowing of caller data to the single-precision values views store.

use crate::error::{PlotError, Result};
use ndarray::{Array2, ArrayView2};

/// A number a plot accepts as sample data.
///
/// `f64` values are narrowed with an `as` cast, which rounds to the nearest
/// `f32` (ties to even), so plotting `&[f64]` stores exactly the values that
/// `&[f32]` of the cast values would.
pub trait Sample: Copy {
    /// The value as stored by views.
    fn to_f32(self) -> f32;
}

impl Sample for f32 {
    fn to_f32(self) -> f32 {
        self
    }
}

impl Sample for f64 {
    fn to_f32(self) -> f32 {
        self as f32
    }
}

/// Narrow a slice of samples.
pub fn narrow<T: Sample>(values: &[T]) -> Vec<f32> {
    values.iter().map(|v| v.to_f32()).collect()
}

/// Narrow rows `f[i2][i1]` into an array of shape `(n2, n1)`.
///
/// Every row must have the length of the first row.
pub fn narrow_grid<T: Sample, R: AsRef<[T]>>(rows: &[R]) -> Result<Array2<f32>> {
    let n2 = rows.len();
    let n1 = rows.first().map_or(0, |r| r.as_ref().len());
    if let Some((row, r)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.as_ref().len() != n1)
    {
        return Err(PlotError::shape_mismatch(row, n1, r.as_ref().len()));
    }
    Ok(Array2::from_shape_fn((n2, n1), |(i2, i1)| {
        rows[i2].as_ref()[i1].to_f32()
    }))
}

/// Narrow a 2-D array view.
pub fn narrow_array<T: Sample>(f: ArrayView2<'_, T>) -> Array2<f32> {
    f.mapv(Sample::to_f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn f64_narrowing_matches_cast() {
        let values = [0.1f64, 1.0 / 3.0, 1e40, -2.5];
        let expected: Vec<f32> = values.iter().map(|&v| v as f32).collect();
        assert_eq!(narrow(&values), expected);
        assert_eq!(narrow(&expected), expected);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]];
        assert!(matches!(
            narrow_grid(&rows),
            Err(PlotError::ShapeMismatch {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn grid_rows_become_array_rows() {
        let f = narrow_grid(&[[1.0f64, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(f, array![[1.0f32, 2.0], [3.0, 4.0]]);
        let empty: [Vec<f32>; 0] = [];
        assert_eq!(narrow_grid(&empty).unwrap().dim(), (0, 0));
    }

    #[test]
    fn array_views_are_narrowed() {
        let f = array![[0.5f64, 1.5]];
        assert_eq!(narrow_array(f.view()), array![[0.5f32, 1.5]]);
    }
}
