use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dense row-major matrix. `data[i][j]` is row i, column j.
///
/// Weight matrices follow the input-to-output orientation: an input-to-hidden
/// matrix has one row per input feature and one column per hidden unit, so
/// the forward pass is a row-vector times matrix product ([`Matrix::vec_mul`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    /// Fills a matrix with values drawn uniformly from `[-limit, limit)`.
    ///
    /// The RNG is injected so that training runs are reproducible from a seed.
    pub fn uniform<R: Rng>(rows: usize, cols: usize, limit: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 * limit - limit;
            }
        }
        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data,
        }
    }

    /// Outer product: `col.len() x row.len()` matrix with `data[i][j] = col[i] * row[j]`.
    ///
    /// Gradients for a weight matrix between two layers are the outer product
    /// of that matrix's input activations (rows) and output deltas (columns).
    pub fn outer(col: &[f64], row: &[f64]) -> Matrix {
        let mut res = Matrix::zeros(col.len(), row.len());
        for i in 0..col.len() {
            for j in 0..row.len() {
                res.data[i][j] = col[i] * row[j];
            }
        }
        res
    }

    /// Row-vector times matrix: `v·M`, where `v.len() == rows`. Returns one
    /// entry per column.
    pub fn vec_mul(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.rows, "vec_mul: vector length must match rows");
        let mut res = vec![0.0; self.cols];
        for (i, row) in self.data.iter().enumerate() {
            for (j, w) in row.iter().enumerate() {
                res[j] += v[i] * w;
            }
        }
        res
    }

    /// Matrix times column-vector: `M·v`, where `v.len() == cols`. Returns one
    /// entry per row. Used to propagate output deltas back through a weight
    /// matrix without materializing its transpose.
    pub fn vec_mul_transpose(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(
            v.len(),
            self.cols,
            "vec_mul_transpose: vector length must match cols"
        );
        self.data.iter().map(|row| dot(row, v)).collect()
    }

    /// In-place `self -= factor * other`. The SGD update applied to weights.
    pub fn sub_scaled(&mut self, other: &Matrix, factor: f64) {
        assert_eq!(self.rows, other.rows, "sub_scaled: row count mismatch");
        assert_eq!(self.cols, other.cols, "sub_scaled: column count mismatch");
        for (row, other_row) in self.data.iter_mut().zip(other.data.iter()) {
            for (x, g) in row.iter_mut().zip(other_row.iter()) {
                *x -= factor * g;
            }
        }
    }

    /// True when `rows`/`cols` agree with the nested data. Deserialized
    /// matrices are checked with this before use.
    pub fn shape_consistent(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }
}

/// Dot product of two equal-length slices.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot: length mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Elementwise sum of two equal-length slices.
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "add: length mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// Elementwise (Hadamard) product of two equal-length slices.
pub fn hadamard(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "hadamard: length mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).collect()
}

/// In-place `a -= factor * b`. The SGD update applied to bias vectors.
pub fn sub_scaled(a: &mut [f64], b: &[f64], factor: f64) {
    assert_eq!(a.len(), b.len(), "sub_scaled: length mismatch");
    for (x, g) in a.iter_mut().zip(b.iter()) {
        *x -= factor * g;
    }
}
