use super::Matrix;
use crate::prelude::*;
use std::ops::{Add, AddAssign, Mul, Sub};

pub trait Dot<I> {
    type Output;
    fn dot(self, rhs: I) -> Result<Self::Output>;
}

pub trait Transpose {
    fn transpose(&self) -> Self;
}

/// `result[(j, i)] == self[(i, j)]`
impl<T: Copy> Transpose for Matrix<T> {
    fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());

        for col in 0..self.cols() {
            for row in 0..self.rows() {
                data.push(self[(row, col)]);
            }
        }

        Matrix {
            data,
            dim: (self.cols(), self.rows()),
        }
    }
}

impl<'a, T> Dot<&Matrix<T>> for &'a Matrix<T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
{
    type Output = Matrix<T>;
    fn dot(self, rhs: &Matrix<T>) -> Result<Self::Output> {
        if self.cols() != rhs.rows() {
            return Err(Error::DimensionErr);
        }

        let mut data = Vec::with_capacity(self.rows() * rhs.cols());

        for lhs_row in 0..self.rows() {
            for rhs_col in 0..rhs.cols() {
                let mut sum = T::default();
                for n in 0..self.cols() {
                    sum += self[(lhs_row, n)] * rhs[(n, rhs_col)]
                }
                data.push(sum);
            }
        }

        Ok(Matrix {
            data,
            dim: (self.rows(), rhs.cols()),
        })
    }
}

/// Adds two Matrices element-wise.
impl<'a, T> Add for &'a Matrix<T>
where
    &'a T: Add<Output = T>,
{
    type Output = Result<Matrix<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        if self.dim != rhs.dim {
            return Err(Error::DimensionErr);
        }

        Ok(Matrix {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a + b).collect(),
            dim: self.dim,
        })
    }
}

/// Subs two Matrices element-wise.
impl<'a, T> Sub for &'a Matrix<T>
where
    &'a T: Sub<Output = T>,
{
    type Output = Result<Matrix<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        if self.dim != rhs.dim {
            return Err(Error::DimensionErr);
        }

        Ok(Matrix {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a - b).collect(),
            dim: self.dim,
        })
    }
}

impl<T> Matrix<T>
where
    T: Add<Output = T> + Copy,
{
    /// Adds `scalar` to every element.
    pub fn scalar_add(&self, scalar: T) -> Matrix<T> {
        self.apply(|x| x + scalar)
    }
}

impl<T> Matrix<T>
where
    T: Mul<Output = T> + Copy,
{
    /// Multiplies every element by `scalar`.
    pub fn scalar_mul(&self, scalar: T) -> Matrix<T> {
        self.apply(|x| x * scalar)
    }

    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.dim != rhs.dim {
            return Err(Error::DimensionErr);
        }

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(&a, &b)| a * b)
                .collect(),
            dim: self.dim,
        })
    }
}

impl<T> Matrix<T>
where
    T: Default + AddAssign + Copy,
{
    /// Sum of the main diagonal of a square matrix.
    pub fn trace(&self) -> Result<T> {
        if self.rows() != self.cols() {
            return Err(Error::DimensionErr);
        }

        let mut sum = T::default();
        for i in 0..self.rows() {
            sum += self[(i, i)];
        }
        Ok(sum)
    }
}
