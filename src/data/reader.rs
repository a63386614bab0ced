//! Reader for whitespace/comma separated numbers.

use super::DataSet;
use crate::error::{PlotError, Result};
use ndarray::Array2;
use std::io::BufRead;
use std::path::Path;

/// Reads numeric text into a [`DataSet`].
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a file.
    pub fn read_file(path: &Path) -> Result<DataSet> {
        let file = std::fs::File::open(path)?;
        tracing::debug!(path = %path.display(), "reading data file");
        Self::read(std::io::BufReader::new(file))
    }

    /// Read from any buffered reader, such as locked standard input.
    pub fn read<R: BufRead>(reader: R) -> Result<DataSet> {
        let mut rows = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            rows.push(Self::parse_row(index + 1, trimmed)?);
        }
        Self::classify(rows)
    }

    /// Read from a string.
    pub fn read_str(text: &str) -> Result<DataSet> {
        Self::read(text.as_bytes())
    }

    fn parse_row(line: usize, text: &str) -> Result<Vec<f64>> {
        text.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| PlotError::invalid_number(line, token))
            })
            .collect()
    }

    fn classify(rows: Vec<Vec<f64>>) -> Result<DataSet> {
        if rows.iter().all(|r| r.is_empty()) {
            return Err(PlotError::EmptyInput);
        }
        if rows.len() == 1 {
            return Ok(DataSet::Series(rows.into_iter().flatten().collect()));
        }
        if rows.iter().all(|r| r.len() == 1) {
            return Ok(DataSet::Series(rows.into_iter().flatten().collect()));
        }
        let n1 = rows[0].len();
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n1) {
            return Err(PlotError::shape_mismatch(row, n1, r.len()));
        }
        let n2 = rows.len();
        tracing::debug!(n2, n1, "read grid");
        let data = rows.into_iter().flatten().collect();
        Array2::from_shape_vec((n2, n1), data)
            .map(DataSet::Grid)
            .map_err(|e| PlotError::UnsupportedInput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn single_row_is_series() {
        let data = DataReader::read_str("# header\n1.0, 2.5 3.0\n\n").unwrap();
        assert_eq!(data, DataSet::Series(vec![1.0, 2.5, 3.0]));
    }

    #[test]
    fn single_column_is_series() {
        let data = DataReader::read_str("1\n2\n3\n").unwrap();
        assert_eq!(data, DataSet::Series(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn rows_form_grid() {
        let data = DataReader::read_str("1 2\n3 4\n").unwrap();
        assert_eq!(data, DataSet::Grid(array![[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(data.describe(), "grid of 2 x 2 values");
    }

    #[test]
    fn errors_name_the_problem() {
        assert!(matches!(
            DataReader::read_str("1 2\n3\n"),
            Err(PlotError::ShapeMismatch { row: 1, .. })
        ));
        assert!(matches!(
            DataReader::read_str("1 2\n\n3 x\n"),
            Err(PlotError::InvalidNumber { line: 3, ref token }) if token == "x"
        ));
        assert!(matches!(
            DataReader::read_str("# nothing\n\n"),
            Err(PlotError::EmptyInput)
        ));
    }
}
