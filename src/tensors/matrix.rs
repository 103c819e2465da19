use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut, Neg},
    slice::{Chunks, Iter},
};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, trace};

use crate::domains::Arithmetic;

/// Errors that can occur when performing matrix operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Index {index} is out of range for dimension {bound}")]
    IndexOutOfRange { index: usize, bound: usize },
}

#[inline]
fn check_index(index: usize, bound: usize) -> Result<(), MatrixError> {
    if index < bound {
        Ok(())
    } else {
        Err(MatrixError::IndexOutOfRange { index, bound })
    }
}

#[inline]
fn check_dimension(expected: usize, found: usize) -> Result<(), MatrixError> {
    if expected == found {
        Ok(())
    } else {
        Err(MatrixError::DimensionMismatch { expected, found })
    }
}

/// Compute `zero + Σ a * b`.
fn sum_of_products<'a, N: Arithmetic + 'a>(
    zero: N,
    pairs: impl Iterator<Item = (&'a N, &'a N)>,
) -> N {
    let mut sum = zero;
    for (a, b) in pairs {
        let mut p = a.clone();
        p.multiply_with(b);
        sum.add(&p);
    }
    sum
}

/// An n-dimensional vector without orientation.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct Vector<N: Arithmetic> {
    pub(crate) data: Vec<N>,
}

impl<N: Arithmetic> Vector<N> {
    /// Create a new vector from a list of scalars.
    pub fn new(data: Vec<N>) -> Vector<N> {
        Vector { data }
    }

    /// Create a vector of `len` zeroes of the default kind.
    pub fn zeros(len: usize) -> Vector<N> {
        Vector {
            data: vec![N::new_zero(); len],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, N> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[N] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<N> {
        self.data
    }

    /// A zero of the kind of the entries.
    fn zero(&self) -> N {
        self.data.first().map(|e| e.zero()).unwrap_or_else(N::new_zero)
    }

    /// Get the `i`th entry of the vector.
    pub fn get(&self, i: usize) -> Result<&N, MatrixError> {
        check_index(i, self.data.len())?;
        Ok(&self.data[i])
    }

    /// Set the `i`th entry of the vector.
    pub fn set(&mut self, i: usize, n: N) -> Result<&mut Self, MatrixError> {
        check_index(i, self.data.len())?;
        self.data[i] = n;
        Ok(self)
    }

    /// Append an entry to the vector.
    pub fn push(&mut self, n: N) -> &mut Self {
        self.data.push(n);
        self
    }

    /// Remove the `i`th entry of the vector.
    pub fn remove(&mut self, i: usize) -> Result<&mut Self, MatrixError> {
        check_index(i, self.data.len())?;
        self.data.remove(i);
        Ok(self)
    }

    /// Take the Euclidean scalar product of two vectors.
    pub fn dot(&self, rhs: &Self) -> Result<N, MatrixError> {
        check_dimension(self.data.len(), rhs.data.len())?;
        Ok(sum_of_products(
            self.zero(),
            self.data.iter().zip(&rhs.data),
        ))
    }

    /// The sum of the squared norms of the entries.
    pub fn norm_squared(&self) -> N {
        let mut res = self.zero();
        for e in &self.data {
            res.add(&e.norm_squared());
        }
        res
    }

    /// Add `rhs` to the vector entry-wise.
    pub fn add_vector(&mut self, rhs: &Self) -> Result<&mut Self, MatrixError> {
        check_dimension(self.data.len(), rhs.data.len())?;
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            a.add(b);
        }
        Ok(self)
    }

    /// Multiply each entry with the scalar `k`.
    pub fn multiply_with_scalar(&mut self, k: &N) -> &mut Self {
        for e in &mut self.data {
            e.multiply_with(k);
        }
        self
    }

    /// Negate each entry of the vector.
    pub fn negative(&mut self) -> &mut Self {
        for e in &mut self.data {
            e.negative();
        }
        self
    }

    /// Convert the vector into a matrix with one row.
    pub fn into_row_matrix(self) -> Matrix<N> {
        Matrix {
            nrows: 1,
            ncols: self.data.len(),
            data: self.data,
            adopted: None,
        }
    }

    cloned_forms! {
        fn set_cloned = set(i: usize, n: N) -> Result<Self, MatrixError>;
        fn push_cloned = push(n: N) -> Self;
        fn remove_cloned = remove(i: usize) -> Result<Self, MatrixError>;
        fn add_vector_cloned = add_vector(rhs: &Self) -> Result<Self, MatrixError>;
        fn multiply_with_scalar_cloned = multiply_with_scalar(k: &N) -> Self;
        fn negative_cloned = negative() -> Self;
    }
}

impl<N: Arithmetic> From<Vec<N>> for Vector<N> {
    fn from(data: Vec<N>) -> Self {
        Vector { data }
    }
}

impl<N: Arithmetic> FromIterator<N> for Vector<N> {
    fn from_iter<T: IntoIterator<Item = N>>(iter: T) -> Self {
        Vector {
            data: iter.into_iter().collect(),
        }
    }
}

impl<N: Arithmetic> IntoIterator for Vector<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, N: Arithmetic> IntoIterator for &'a Vector<N> {
    type Item = &'a N;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<N: Arithmetic> Index<usize> for Vector<N> {
    type Output = N;

    /// Get the `i`th entry of the vector.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<N: Arithmetic> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut N {
        &mut self.data[index]
    }
}

impl<N: Arithmetic> Neg for Vector<N> {
    type Output = Vector<N>;

    fn neg(mut self) -> Self::Output {
        self.negative();
        self
    }
}

impl<N: Arithmetic> Display for Vector<N> {
    /// Print the vector as `{a,b,c}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_str("}")
    }
}

/// A handle to a single entry of a [Matrix], obtained with [Matrix::entry].
///
/// ```
/// use arithmetica::{domains::number::Number, tensors::matrix::Matrix};
///
/// let mut m: Matrix<Number> = Matrix::new(2, 2);
/// let mut e = m.entry(1, 0).unwrap();
/// e.write(Number::from(3));
/// e.update(|n| {
///     n.square();
/// });
/// assert_eq!(m.to_string(), "{{0,0},{9,0}}");
/// ```
pub struct NumberWrapper<'a, N: Arithmetic> {
    entry: &'a mut N,
}

impl<'a, N: Arithmetic> NumberWrapper<'a, N> {
    /// Read the entry.
    pub fn read(&self) -> &N {
        &*self.entry
    }

    /// Overwrite the entry with `n`.
    pub fn write(&mut self, n: N) {
        *self.entry = n;
    }

    /// Overwrite the entry with `n` and return the previous entry.
    pub fn replace(&mut self, n: N) -> N {
        std::mem::replace(&mut *self.entry, n)
    }

    /// Modify the entry in-place.
    pub fn update(&mut self, f: impl FnOnce(&mut N)) {
        f(&mut *self.entry)
    }
}

/// A dimension of a matrix that was taken from the first vector appended
/// to a matrix without rows and columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Adopted {
    Rows,
    Columns,
}

/// A dense matrix with entries of a number kind `N`, stored row by row.
/// All entries are expected to be of the same kind.
#[derive(Clone, Debug)]
pub struct Matrix<N: Arithmetic> {
    pub(crate) data: Vec<N>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    /// Removing the last row (column) also forgets an adopted number of columns (rows),
    /// so that appending to and removing from a `0x0` matrix restores it.
    adopted: Option<Adopted>,
}

impl<N: Arithmetic> PartialEq for Matrix<N> {
    fn eq(&self, other: &Self) -> bool {
        self.nrows == other.nrows && self.ncols == other.ncols && self.data == other.data
    }
}

impl<N: Arithmetic + Eq> Eq for Matrix<N> {}

impl<N: Arithmetic + Hash> Hash for Matrix<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
        self.nrows.hash(state);
        self.ncols.hash(state);
    }
}

impl<N: Arithmetic> Default for Matrix<N> {
    fn default() -> Self {
        Matrix::empty()
    }
}

impl<N: Arithmetic> Matrix<N> {
    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn new(nrows: usize, ncols: usize) -> Matrix<N> {
        Matrix {
            data: vec![N::new_zero(); nrows * ncols],
            nrows,
            ncols,
            adopted: None,
        }
    }

    /// Create a matrix with no rows and no columns.
    pub fn empty() -> Matrix<N> {
        Matrix {
            data: vec![],
            nrows: 0,
            ncols: 0,
            adopted: None,
        }
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(nrows: usize) -> Matrix<N> {
        let zero = N::new_zero();
        let one = zero.one();
        Matrix {
            data: (0..nrows * nrows)
                .map(|i| {
                    if i % nrows == i / nrows {
                        one.clone()
                    } else {
                        zero.clone()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
            adopted: None,
        }
    }

    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(data: Vec<N>, nrows: usize, ncols: usize) -> Result<Matrix<N>, MatrixError> {
        check_dimension(nrows.checked_mul(ncols).unwrap_or(usize::MAX), data.len())?;
        Ok(Matrix {
            data,
            nrows,
            ncols,
            adopted: None,
        })
    }

    /// Create a new matrix from a 2-dimensional vector of scalars.
    /// All rows must have the same length.
    pub fn from_nested_vec(matrix: Vec<Vec<N>>) -> Result<Matrix<N>, MatrixError> {
        let nrows = matrix.len();
        let ncols = matrix.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(nrows * ncols);
        for d in matrix {
            check_dimension(ncols, d.len())?;
            data.extend(d);
        }

        Ok(Matrix {
            data,
            nrows,
            ncols,
            adopted: None,
        })
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return `(nrows, ncols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, N> {
        self.data.chunks(self.ncols.max(1))
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| e.is_zero())
    }

    /// A zero of the kind of the entries.
    fn zero(&self) -> N {
        self.data.first().map(|e| e.zero()).unwrap_or_else(N::new_zero)
    }

    /// Get the entry at row `i` and column `j`.
    pub fn get(&self, i: usize, j: usize) -> Result<&N, MatrixError> {
        check_index(i, self.nrows)?;
        check_index(j, self.ncols)?;
        Ok(&self.data[i * self.ncols + j])
    }

    /// Get a handle to the entry at row `i` and column `j`.
    pub fn entry(&mut self, i: usize, j: usize) -> Result<NumberWrapper<'_, N>, MatrixError> {
        check_index(i, self.nrows)?;
        check_index(j, self.ncols)?;
        Ok(NumberWrapper {
            entry: &mut self.data[i * self.ncols + j],
        })
    }

    /// Get a copy of row `i`.
    pub fn get_row(&self, i: usize) -> Result<Vector<N>, MatrixError> {
        check_index(i, self.nrows)?;
        Ok(Vector::new(
            self.data[i * self.ncols..(i + 1) * self.ncols].to_vec(),
        ))
    }

    /// Get a copy of column `j`.
    pub fn get_col(&self, j: usize) -> Result<Vector<N>, MatrixError> {
        check_index(j, self.ncols)?;
        Ok(self.data.iter().skip(j).step_by(self.ncols).cloned().collect())
    }

    /// Set the entry at row `i` and column `j`.
    pub fn set(&mut self, i: usize, j: usize, n: N) -> Result<&mut Self, MatrixError> {
        check_index(i, self.nrows)?;
        check_index(j, self.ncols)?;
        self.data[i * self.ncols + j] = n;
        Ok(self)
    }

    /// Overwrite row `i` with `v`.
    pub fn set_row(&mut self, i: usize, v: &Vector<N>) -> Result<&mut Self, MatrixError> {
        check_index(i, self.nrows)?;
        check_dimension(self.ncols, v.len())?;
        self.data[i * self.ncols..(i + 1) * self.ncols].clone_from_slice(&v.data);
        Ok(self)
    }

    /// Overwrite column `j` with `v`.
    pub fn set_col(&mut self, j: usize, v: &Vector<N>) -> Result<&mut Self, MatrixError> {
        check_index(j, self.ncols)?;
        check_dimension(self.nrows, v.len())?;
        for (e, n) in self.data.iter_mut().skip(j).step_by(self.ncols).zip(&v.data) {
            *e = n.clone();
        }
        Ok(self)
    }

    /// Append `v` as the last row. A matrix without rows and columns
    /// takes its number of columns from `v`.
    pub fn append_row(&mut self, v: &Vector<N>) -> Result<&mut Self, MatrixError> {
        self.insert_row(self.nrows, v)
    }

    /// Append `v` as the last column. A matrix without rows and columns
    /// takes its number of rows from `v`.
    pub fn append_col(&mut self, v: &Vector<N>) -> Result<&mut Self, MatrixError> {
        self.insert_col(self.ncols, v)
    }

    /// Insert `v` as row `i`, shifting the later rows down.
    pub fn insert_row(&mut self, i: usize, v: &Vector<N>) -> Result<&mut Self, MatrixError> {
        check_index(i, self.nrows + 1)?;
        if self.nrows == 0 && self.ncols == 0 {
            self.ncols = v.len();
            self.adopted = Some(Adopted::Columns);
        }
        check_dimension(self.ncols, v.len())?;

        let at = i * self.ncols;
        self.data.splice(at..at, v.data.iter().cloned());
        self.nrows += 1;
        Ok(self)
    }

    /// Insert `v` as column `j`, shifting the later columns right.
    pub fn insert_col(&mut self, j: usize, v: &Vector<N>) -> Result<&mut Self, MatrixError> {
        check_index(j, self.ncols + 1)?;
        if self.nrows == 0 && self.ncols == 0 {
            self.nrows = v.len();
            self.adopted = Some(Adopted::Rows);
        }
        check_dimension(self.nrows, v.len())?;

        let mut data = Vec::with_capacity(self.data.len() + v.len());
        for (row, n) in self.row_iter().zip(&v.data) {
            data.extend_from_slice(&row[..j]);
            data.push(n.clone());
            data.extend_from_slice(&row[j..]);
        }
        if self.ncols == 0 {
            // `row_iter` yields nothing for zero columns
            data = v.data.clone();
        }

        self.data = data;
        self.ncols += 1;
        Ok(self)
    }

    /// Remove row `i`.
    pub fn remove_row(&mut self, i: usize) -> Result<&mut Self, MatrixError> {
        self.remove_rows(&[i])
    }

    /// Remove column `j`.
    pub fn remove_col(&mut self, j: usize) -> Result<&mut Self, MatrixError> {
        self.remove_cols(&[j])
    }

    /// Remove all rows in `indices`, which refer to the rows before removal.
    /// Duplicate indices are ignored. If any index is out of range, the matrix is left unchanged.
    ///
    /// Removing all rows keeps the number of columns, unless it was taken from
    /// a row appended to a `0x0` matrix.
    pub fn remove_rows(&mut self, indices: &[usize]) -> Result<&mut Self, MatrixError> {
        let rows = Self::sorted_indices(indices, self.nrows)?;
        if rows.is_empty() {
            return Ok(self);
        }
        trace!("Removing rows {:?}", rows.as_slice());

        let ncols = self.ncols;
        let mut pos = 0;
        self.data.retain(|_| {
            let keep = rows.binary_search(&(pos / ncols)).is_err();
            pos += 1;
            keep
        });
        self.nrows -= rows.len();

        if self.nrows == 0 && self.adopted == Some(Adopted::Columns) {
            self.forget_adopted();
        }
        Ok(self)
    }

    /// Remove all columns in `indices`, which refer to the columns before removal.
    /// Duplicate indices are ignored. If any index is out of range, the matrix is left unchanged.
    ///
    /// Removing all columns keeps the number of rows, unless it was taken from
    /// a column appended to a `0x0` matrix.
    pub fn remove_cols(&mut self, indices: &[usize]) -> Result<&mut Self, MatrixError> {
        let cols = Self::sorted_indices(indices, self.ncols)?;
        if cols.is_empty() {
            return Ok(self);
        }
        trace!("Removing columns {:?}", cols.as_slice());

        let ncols = self.ncols;
        let mut pos = 0;
        self.data.retain(|_| {
            let keep = cols.binary_search(&(pos % ncols)).is_err();
            pos += 1;
            keep
        });
        self.ncols -= cols.len();

        if self.ncols == 0 && self.adopted == Some(Adopted::Rows) {
            self.forget_adopted();
        }
        Ok(self)
    }

    fn sorted_indices(indices: &[usize], bound: usize) -> Result<SmallVec<[usize; 4]>, MatrixError> {
        let mut sorted: SmallVec<[usize; 4]> = SmallVec::with_capacity(indices.len());
        for &i in indices {
            check_index(i, bound)?;
            sorted.push(i);
        }
        sorted.sort_unstable();
        sorted.dedup();
        Ok(sorted)
    }

    fn forget_adopted(&mut self) {
        debug!(
            "Matrix without entries after removal: {}x{} becomes 0x0",
            self.nrows, self.ncols
        );
        self.nrows = 0;
        self.ncols = 0;
        self.adopted = None;
        self.data.clear();
    }

    /// Truncate or pad the matrix with zeroes to exactly `nrows` rows and `ncols` columns.
    pub fn trim(&mut self, nrows: usize, ncols: usize) -> &mut Self {
        if (nrows, ncols) == (self.nrows, self.ncols) {
            return self;
        }
        trace!(
            "Trimming {}x{} matrix to {}x{}",
            self.nrows,
            self.ncols,
            nrows,
            ncols
        );

        let zero = self.zero();
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                if i < self.nrows && j < self.ncols {
                    data.push(self.data[i * self.ncols + j].clone());
                } else {
                    data.push(zero.clone());
                }
            }
        }

        self.data = data;
        self.nrows = nrows;
        self.ncols = ncols;
        self.adopted = None;
        self
    }

    /// Transpose the matrix in-place.
    pub fn transpose(&mut self) -> &mut Self {
        if self.nrows == self.ncols {
            for i in 0..self.nrows {
                for j in 0..i {
                    self.data.swap(i * self.ncols + j, j * self.ncols + i);
                }
            }
        } else {
            let mut data = Vec::with_capacity(self.data.len());
            for j in 0..self.ncols {
                for i in 0..self.nrows {
                    data.push(self.data[i * self.ncols + j].clone());
                }
            }
            self.data = data;
            (self.nrows, self.ncols) = (self.ncols, self.nrows);
        }

        self.adopted = self.adopted.map(|a| match a {
            Adopted::Rows => Adopted::Columns,
            Adopted::Columns => Adopted::Rows,
        });
        self
    }

    /// Multiply the scalar `k` to each entry of the matrix.
    pub fn multiply_with_scalar(&mut self, k: &N) -> &mut Self {
        for e in &mut self.data {
            e.multiply_with(k);
        }
        self
    }

    /// Negate each entry of the matrix.
    pub fn negative(&mut self) -> &mut Self {
        for e in &mut self.data {
            e.negative();
        }
        self
    }

    /// Add `rhs` to the matrix entry-wise. The dimensions must be identical.
    pub fn add_matrix(&mut self, rhs: &Matrix<N>) -> Result<&mut Self, MatrixError> {
        check_dimension(self.nrows, rhs.nrows)?;
        check_dimension(self.ncols, rhs.ncols)?;

        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            a.add(b);
        }
        Ok(self)
    }

    /// Multiply the matrix with the column vector `v`, or if `transposed` is set,
    /// multiply the row vector `v` with the matrix.
    pub fn multiply_with_vector(
        &self,
        v: &Vector<N>,
        transposed: bool,
    ) -> Result<Vector<N>, MatrixError> {
        let zero = v.zero();
        if transposed {
            check_dimension(self.nrows, v.len())?;
            Ok((0..self.ncols)
                .map(|j| {
                    sum_of_products(
                        zero.clone(),
                        v.data.iter().zip(self.data.iter().skip(j).step_by(self.ncols)),
                    )
                })
                .collect())
        } else {
            check_dimension(self.ncols, v.len())?;
            Ok((0..self.nrows)
                .map(|i| {
                    sum_of_products(
                        zero.clone(),
                        self.data[i * self.ncols..(i + 1) * self.ncols]
                            .iter()
                            .zip(&v.data),
                    )
                })
                .collect())
        }
    }

    /// Multiply the matrix with `rhs` from the right.
    pub fn multiply_with_matrix(&mut self, rhs: &Matrix<N>) -> Result<&mut Self, MatrixError> {
        check_dimension(self.ncols, rhs.nrows)?;

        let zero = self.zero();
        let mut data = Vec::with_capacity(self.nrows * rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                data.push(sum_of_products(
                    zero.clone(),
                    (0..self.ncols).map(|k| (&self[(i, k)], &rhs[(k, j)])),
                ));
            }
        }

        self.data = data;
        self.ncols = rhs.ncols;
        self.adopted = None;
        Ok(self)
    }

    /// Get the squared Euclidean norm of the matrix.
    pub fn norm_squared(&self) -> N {
        let mut norm = self.zero();
        for d in &self.data {
            norm.add(&d.norm_squared());
        }
        norm
    }

    cloned_forms! {
        /// Return the transposed matrix.
        fn transpose_cloned = transpose() -> Self;
        fn multiply_with_scalar_cloned = multiply_with_scalar(k: &N) -> Self;
        fn negative_cloned = negative() -> Self;
        fn add_matrix_cloned = add_matrix(rhs: &Matrix<N>) -> Result<Self, MatrixError>;
        fn multiply_with_matrix_cloned = multiply_with_matrix(rhs: &Matrix<N>) -> Result<Self, MatrixError>;
        fn set_cloned = set(i: usize, j: usize, n: N) -> Result<Self, MatrixError>;
        fn set_row_cloned = set_row(i: usize, v: &Vector<N>) -> Result<Self, MatrixError>;
        fn set_col_cloned = set_col(j: usize, v: &Vector<N>) -> Result<Self, MatrixError>;
        fn append_row_cloned = append_row(v: &Vector<N>) -> Result<Self, MatrixError>;
        fn append_col_cloned = append_col(v: &Vector<N>) -> Result<Self, MatrixError>;
        fn insert_row_cloned = insert_row(i: usize, v: &Vector<N>) -> Result<Self, MatrixError>;
        fn insert_col_cloned = insert_col(j: usize, v: &Vector<N>) -> Result<Self, MatrixError>;
        fn remove_row_cloned = remove_row(i: usize) -> Result<Self, MatrixError>;
        fn remove_col_cloned = remove_col(j: usize) -> Result<Self, MatrixError>;
        fn remove_rows_cloned = remove_rows(indices: &[usize]) -> Result<Self, MatrixError>;
        fn remove_cols_cloned = remove_cols(indices: &[usize]) -> Result<Self, MatrixError>;
        /// Return the matrix truncated or padded to `nrows` rows and `ncols` columns.
        fn trim_cloned = trim(nrows: usize, ncols: usize) -> Self;
    }
}

impl<N: Arithmetic> Index<(usize, usize)> for Matrix<N> {
    type Output = N;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index.0 * self.ncols + index.1]
    }
}

impl<N: Arithmetic> IndexMut<(usize, usize)> for Matrix<N> {
    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut N {
        &mut self.data[index.0 * self.ncols + index.1]
    }
}

impl<N: Arithmetic> Neg for Matrix<N> {
    type Output = Matrix<N>;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        self.negative();
        self
    }
}

impl<N: Arithmetic> Display for Matrix<N> {
    /// Print the matrix as `{{a,b},{c,d}}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for i in 0..self.nrows {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("{")?;
            for j in 0..self.ncols {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", self[(i, j)])?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}
