use std::fmt;
use std::ops::{Index, IndexMut};
use num_traits::{One, Zero};
use tracing::error;
use crate::vec::FixedVector;

/// Row-major `R x C` matrix. Storage only: there is no matrix algebra here.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Matrix<const R: usize, const C: usize, T> {
    cells: [[T; C]; R]
}

#[inline(always)]
fn check_cell(row: usize, col: usize, rows: usize, cols: usize) {
    if row >= rows || col >= cols {
        error!(row, col, rows, cols, "Matrix index out of range");
        panic!("cell ({}, {}) out of range for {}x{} Matrix", row, col, rows, cols)
    }
}

impl<const R: usize, const C: usize, T> Matrix<R, C, T> {
    const NONZERO_SHAPE: () = assert!(R > 0 && C > 0, "a Matrix needs at least one row and one column");

    pub fn from_rows(cells: [[T; C]; R]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_SHAPE;
        Matrix { cells }
    }

    /// Every cell set to `value`.
    pub fn filled<U: Into<T>>(value: U) -> Self
    where
        T: Clone
    {
        let value = value.into();
        Matrix::from_rows(std::array::from_fn(|_| std::array::from_fn(|_| value.clone())))
    }

    pub const fn rows(&self) -> usize {
        R
    }

    pub const fn cols(&self) -> usize {
        C
    }

    pub fn row(&self, idx: usize) -> FixedVector<C, T>
    where
        T: Clone
    {
        check_cell(idx, 0, R, C);
        FixedVector::new(self.cells[idx].clone())
    }

    pub fn column(&self, idx: usize) -> FixedVector<R, T>
    where
        T: Clone
    {
        check_cell(0, idx, R, C);
        FixedVector::new(std::array::from_fn(|r| self.cells[r][idx].clone()))
    }

    pub fn transpose(&self) -> Matrix<C, R, T>
    where
        T: Clone
    {
        Matrix::from_rows(std::array::from_fn(|c| std::array::from_fn(|r| self.cells[r][c].clone())))
    }
}

impl<const N: usize, T: Zero + One> Matrix<N, N, T> {
    pub fn identity() -> Self {
        Matrix::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| if r == c { T::one() } else { T::zero() })
        }))
    }
}

impl<const R: usize, const C: usize, T: Default> Default for Matrix<R, C, T> {
    fn default() -> Self {
        Matrix::from_rows(std::array::from_fn(|_| std::array::from_fn(|_| T::default())))
    }
}

impl<const R: usize, const C: usize, T> Index<(usize, usize)> for Matrix<R, C, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        check_cell(row, col, R, C);
        &self.cells[row][col]
    }
}

impl<const R: usize, const C: usize, T> IndexMut<(usize, usize)> for Matrix<R, C, T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        check_cell(row, col, R, C);
        &mut self.cells[row][col]
    }
}

impl<const R: usize, const C: usize, T: fmt::Display> fmt::Display for Matrix<R, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for row in self.cells.iter() {
            write!(f, "   ")?;
            for (idx, cell) in row.iter().enumerate() {
                if idx + 1 == C {
                    writeln!(f, "{}", cell)?;
                }
                else {
                    write!(f, "{}, ", cell)?;
                }
            }
        }
        write!(f, "}}")
    }
}

macro_rules! create_matrix_aliases {
    ($suffix:ident, $type:ty) => {
        paste::paste! {
            pub type [<Mat1x1 $suffix>] = Matrix<1, 1, $type>;
            pub type [<Mat2x2 $suffix>] = Matrix<2, 2, $type>;
            pub type [<Mat3x3 $suffix>] = Matrix<3, 3, $type>;
            pub type [<Mat4x4 $suffix>] = Matrix<4, 4, $type>;
        }
    };
}

create_matrix_aliases!(f, f32);
create_matrix_aliases!(d, f64);
