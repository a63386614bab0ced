//! Numeric text input for the `simplot` command.
//!
//! Input is whitespace- and/or comma-separated numbers, one row per line.
//! Blank lines and lines starting with `#` are skipped.

mod reader;

pub use reader::DataReader;

use ndarray::Array2;

/// Numbers read from a text input.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSet {
    /// A single row, or a single column.
    Series(Vec<f64>),
    /// Rows `f[i2][i1]` of equal length, shape `(n2, n1)`.
    Grid(Array2<f64>),
}

impl DataSet {
    /// Short description of the shape.
    pub fn describe(&self) -> String {
        match self {
            DataSet::Series(values) => format!("series of {} values", values.len()),
            DataSet::Grid(f) => format!("grid of {} x {} values", f.nrows(), f.ncols()),
        }
    }
}
