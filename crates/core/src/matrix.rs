use std::fmt;
use std::ops::{Index, IndexMut};

use crate::Error;

/// A dense matrix of `f64` values stored in row-major order.
///
/// Dimensions are fixed at construction. Solvers take `&Matrix` for their
/// inputs and clone into owned working copies when they need to mutate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if either dimension is zero, or
    /// [`Error::LengthMismatch`] if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::Empty);
        }
        if data.len() != rows * cols {
            return Err(Error::LengthMismatch {
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] for an empty list or empty first row, and
    /// [`Error::RaggedRows`] if any row's length differs from the first.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, Error> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(Error::Empty);
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::RaggedRows {
                    row: i + 1,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Creates a `rows × cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Returns the dimensions as `(rows, cols)`.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns row `i` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.rows()`.
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Returns the entry at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// Returns the underlying row-major data.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterates over the rows as slices. A matrix with no columns yields
    /// `rows` empty slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |i| self.row(i))
    }

    /// Returns the diagonal entries.
    #[must_use]
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.rows.min(self.cols)).map(|i| self[(i, i)]).collect()
    }

    /// Converts the matrix into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.iter_rows().map(<[f64]>::to_vec).collect()
    }

    /// Appends `column` to the right of the matrix, producing `[A | column]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `column.len() != self.rows()`.
    pub fn augment(&self, column: &[f64]) -> Result<Self, Error> {
        if column.len() != self.rows {
            return Err(Error::LengthMismatch {
                expected: self.rows,
                got: column.len(),
            });
        }

        let cols = self.cols + 1;
        let mut data = Vec::with_capacity(self.rows * cols);
        for (row, value) in self.iter_rows().zip(column) {
            data.extend_from_slice(row);
            data.push(*value);
        }

        Ok(Self {
            rows: self.rows,
            cols,
            data,
        })
    }

    /// Requires the matrix to be square and returns its order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSquare`] otherwise.
    pub fn require_square(&self) -> Result<usize, Error> {
        if self.is_square() {
            Ok(self.rows)
        } else {
            Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Requires every entry to be finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFinite`] naming the first offending entry.
    pub fn require_finite(&self) -> Result<(), Error> {
        match self.data.iter().position(|v| !v.is_finite()) {
            None => Ok(()),
            Some(pos) => Err(Error::NonFinite {
                name: "matrix",
                index: pos,
                value: self.data[pos],
            }),
        }
    }
}

/// Requires every entry of a vector to be finite.
///
/// # Errors
///
/// Returns [`Error::NonFinite`] naming the first offending entry.
pub fn require_finite(name: &'static str, values: &[f64]) -> Result<(), Error> {
    match values.iter().position(|v| !v.is_finite()) {
        None => Ok(()),
        Some(index) => Err(Error::NonFinite {
            name,
            index,
            value: values[index],
        }),
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(col < self.cols, "column {col} out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(col < self.cols, "column {col} out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

/// Renders one row per line, entries bracketed like `[[1. 2.]\n [3. 4.]]`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:.4}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
