use crate::prelude::*;
use std::ops::Index;

pub mod ops;

/// Dense row-major matrix. Element `(i, j)` lives at `i * cols + j`.
///
/// Every operation returns a freshly allocated matrix; operands are never
/// mutated once built.
#[derive(Debug, PartialEq, Clone)]
pub struct Matrix<T> {
    data: Vec<T>,
    dim: (usize, usize),
}

impl<T: Clone> Matrix<T> {
    /// Matrix of the given shape with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        check_dim(rows, cols)?;
        Ok(Self {
            data: vec![value; rows * cols],
            dim: (rows, cols),
        })
    }

    /// Copies one row out as a vector.
    pub fn row_to_vec(&self, row: usize) -> Result<Vec<T>> {
        if row >= self.rows() {
            return Err(Error::DimensionErr);
        }
        let start = row * self.cols();
        Ok(self.data[start..start + self.cols()].to_vec())
    }

    /// Copies one row out as a `1 x cols` matrix.
    pub fn row(&self, row: usize) -> Result<Matrix<T>> {
        Matrix::from_row(self.row_to_vec(row)?)
    }
}

impl<T: Default + Clone> Matrix<T> {
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        check_dim(rows, cols)?;
        Ok(Self {
            data: vec![T::default(); rows * cols],
            dim: (rows, cols),
        })
    }
}

impl<T> Matrix<T> {
    /// # Panics
    /// If either array dimension is zero.
    pub fn from_array<const R: usize, const C: usize>(arr: [[T; C]; R]) -> Self {
        assert!(R > 0 && C > 0, "matrix dimensions must be positive");
        let mut data = Vec::with_capacity(R * C);

        for row in arr {
            for x in row {
                data.push(x);
            }
        }

        Self { data, dim: (R, C) }
    }

    /// Wraps a flat row-major buffer. The buffer must hold exactly
    /// `rows * cols` values and both dimensions must be positive.
    pub fn from_raw(rows: usize, cols: usize, values: Vec<T>) -> Result<Self> {
        check_dim(rows, cols)?;
        if values.len() != rows * cols {
            return Err(Error::DimensionErr);
        }

        Ok(Self {
            data: values,
            dim: (rows, cols),
        })
    }

    pub fn from_row(row_vec: Vec<T>) -> Result<Self> {
        Self::from_raw(1, row_vec.len(), row_vec)
    }

    pub fn from_vec(vec: Vec<Vec<T>>) -> Result<Self> {
        let rows = vec.len();
        let cols = vec.first().map(|row| row.len()).unwrap_or(0);
        check_dim(rows, cols)?;

        let mut data = Vec::with_capacity(rows * cols);
        for row in vec {
            if cols != row.len() {
                return Err(Error::DimensionErr);
            }

            data.extend(row);
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn to_vec(self) -> Vec<Vec<T>> {
        let cols = self.cols();
        let mut res = Vec::with_capacity(self.rows());
        let mut values = self.data.into_iter();
        for _ in 0..self.dim.0 {
            res.push(values.by_ref().take(cols).collect());
        }
        res
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    /// The flat row-major backing values.
    pub fn values(&self) -> &[T] {
        &self.data
    }
}

fn check_dim(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(Error::DimensionErr);
    }
    Ok(())
}

impl<T: Copy> Matrix<T> {
    /// Applies a function to every element, returning a new matrix of the same shape.
    pub fn apply<U, F: Fn(T) -> U>(&self, f: F) -> Matrix<U> {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            dim: self.dim,
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols() + j]
    }
}

impl From<Matrix<u32>> for Matrix<f64> {
    fn from(value: Matrix<u32>) -> Self {
        Self {
            dim: value.dim(),
            data: value.data.into_iter().map(|x| x as f64).collect(),
        }
    }
}

impl From<Matrix<i32>> for Matrix<f64> {
    fn from(value: Matrix<i32>) -> Self {
        Self {
            dim: value.dim(),
            data: value.data.into_iter().map(|x| x as f64).collect(),
        }
    }
}
