// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use crate::errors::ClusterError;

/// A dense, row-major square matrix of non-negative f32 edge weights. The
/// dimension is fixed for the lifetime of the value; every cell is an
/// independent value with no sparsity bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix {
    dim: usize,
    values: Vec<f32>,
}

impl SquareMatrix {
    pub fn zeros(dim: usize) -> SquareMatrix {
        return SquareMatrix {
            dim,
            values: vec![0_f32; dim * dim],
        };
    }

    /// Builds a matrix from a pre-weighted grid. The grid must be square and
    /// every weight must be finite and non-negative.
    pub fn from_weights(weights: &[Vec<f32>]) -> Result<SquareMatrix, ClusterError> {
        let dim: usize = weights.len();
        let mut matrix: SquareMatrix = SquareMatrix::zeros(dim);
        for (row, row_weights) in weights.iter().enumerate() {
            if row_weights.len() != dim {
                return Err(ClusterError::ShapeMismatch {
                    left: dim,
                    right: row_weights.len(),
                });
            }
            for (col, &weight) in row_weights.iter().enumerate() {
                if !weight.is_finite() || weight < 0_f32 {
                    return Err(ClusterError::ParameterRangeError);
                }
                matrix.set(row, col, weight);
            }
        }
        return Ok(matrix);
    }

    /// Builds a matrix from a boolean edge grid, mapping present edges to a
    /// weight of 1.0 and absent edges to 0.0.
    pub fn from_adjacency(edges: &[Vec<bool>]) -> Result<SquareMatrix, ClusterError> {
        let dim: usize = edges.len();
        let mut matrix: SquareMatrix = SquareMatrix::zeros(dim);
        for (row, row_edges) in edges.iter().enumerate() {
            if row_edges.len() != dim {
                return Err(ClusterError::ShapeMismatch {
                    left: dim,
                    right: row_edges.len(),
                });
            }
            for (col, &present) in row_edges.iter().enumerate() {
                if present {
                    matrix.set(row, col, 1_f32);
                }
            }
        }
        return Ok(matrix);
    }

    pub fn dim(&self) -> usize {
        return self.dim;
    }

    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> f32 {
        return self.values[row * self.dim + col];
    }

    pub fn set(
        &mut self,
        row: usize,
        col: usize,
        value: f32,
    ) {
        self.values[row * self.dim + col] = value;
    }

    pub fn row(
        &self,
        row: usize,
    ) -> &[f32] {
        let start: usize = row * self.dim;
        return &self.values[start..start + self.dim];
    }

    pub fn row_mut(
        &mut self,
        row: usize,
    ) -> &mut [f32] {
        let start: usize = row * self.dim;
        return &mut self.values[start..start + self.dim];
    }

    pub fn row_checked(
        &self,
        row: usize,
    ) -> Result<&[f32], ClusterError> {
        return if row < self.dim {
            Ok(self.row(row))
        } else {
            Err(ClusterError::IndexingError)
        };
    }

    /// Overwrites every cell of this matrix with the corresponding cell of
    /// `other`. Used to snapshot the working matrix before each iteration.
    pub fn copy_from(
        &mut self,
        other: &SquareMatrix,
    ) -> Result<(), ClusterError> {
        if self.dim != other.dim {
            return Err(ClusterError::ShapeMismatch {
                left: self.dim,
                right: other.dim,
            });
        }
        self.values.copy_from_slice(&other.values);
        return Ok(());
    }

    /// Replaces this matrix with the matrix product `self · other`. Operands
    /// of unequal dimension are rejected with a ShapeMismatch error rather
    /// than silently ignored.
    ///
    /// Row i of the product depends only on row i of `self`, so a single
    /// transient row buffer is the only allocation needed per call.
    pub fn multiply_in_place(
        &mut self,
        other: &SquareMatrix,
    ) -> Result<(), ClusterError> {
        if self.dim != other.dim {
            return Err(ClusterError::ShapeMismatch {
                left: self.dim,
                right: other.dim,
            });
        }
        let mut product_row: Vec<f32> = vec![0_f32; self.dim];
        for row in 0..self.dim {
            for col in 0..self.dim {
                let mut total: f32 = 0_f32;
                for inner in 0..self.dim {
                    total += self.get(row, inner) * other.get(inner, col);
                }
                product_row[col] = total;
            }
            self.row_mut(row).copy_from_slice(&product_row);
        }
        return Ok(());
    }

    /// The largest absolute per-cell difference between this matrix and
    /// `other`. Drives the convergence check.
    pub fn max_abs_difference(
        &self,
        other: &SquareMatrix,
    ) -> Result<f32, ClusterError> {
        if self.dim != other.dim {
            return Err(ClusterError::ShapeMismatch {
                left: self.dim,
                right: other.dim,
            });
        }
        let mut largest: f32 = 0_f32;
        for (ours, theirs) in self.values.iter().zip(other.values.iter()) {
            let difference: f32 = (ours - theirs).abs();
            if difference > largest {
                largest = difference;
            }
        }
        return Ok(largest);
    }
}

#[cfg(test)]
mod tests {
    use super::SquareMatrix;
    use crate::errors::ClusterError;

    #[test]
    fn test_multiply_in_place() {
        let mut left: SquareMatrix = SquareMatrix::from_weights(&[
            vec![5_f32, 7_f32, 2_f32],
            vec![4_f32, 1_f32, 2_f32],
            vec![2_f32, 3_f32, 1_f32],
        ])
        .unwrap();
        let right: SquareMatrix = SquareMatrix::from_weights(&[
            vec![4_f32, 1_f32, 4_f32],
            vec![2_f32, 2_f32, 1_f32],
            vec![5_f32, 3_f32, 3_f32],
        ])
        .unwrap();
        let expected: SquareMatrix = SquareMatrix::from_weights(&[
            vec![44_f32, 25_f32, 33_f32],
            vec![28_f32, 12_f32, 23_f32],
            vec![19_f32, 11_f32, 14_f32],
        ])
        .unwrap();
        left.multiply_in_place(&right).unwrap();
        assert_eq!(left, expected);
    }

    #[test]
    fn test_multiply_shape_mismatch() {
        let mut left: SquareMatrix = SquareMatrix::zeros(3);
        let right: SquareMatrix = SquareMatrix::zeros(2);
        let result: Result<(), ClusterError> = left.multiply_in_place(&right);
        assert_eq!(result, Err(ClusterError::ShapeMismatch { left: 3, right: 2 }));
    }

    #[test]
    fn test_from_weights_rejects_ragged_grid() {
        let result: Result<SquareMatrix, ClusterError> =
            SquareMatrix::from_weights(&[vec![1_f32, 0_f32], vec![1_f32]]);
        assert_eq!(result, Err(ClusterError::ShapeMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn test_from_weights_rejects_negative_weight() {
        let result: Result<SquareMatrix, ClusterError> =
            SquareMatrix::from_weights(&[vec![1_f32, -0.5_f32], vec![0_f32, 1_f32]]);
        assert_eq!(result, Err(ClusterError::ParameterRangeError));
    }

    #[test]
    fn test_from_adjacency_maps_edges_to_unit_weights() {
        let matrix: SquareMatrix =
            SquareMatrix::from_adjacency(&[vec![false, true], vec![true, false]]).unwrap();
        assert_eq!(matrix.get(0, 0), 0_f32);
        assert_eq!(matrix.get(0, 1), 1_f32);
        assert_eq!(matrix.get(1, 0), 1_f32);
        assert_eq!(matrix.get(1, 1), 0_f32);
    }

    #[test]
    fn test_max_abs_difference() {
        let left: SquareMatrix =
            SquareMatrix::from_weights(&[vec![1_f32, 2_f32], vec![3_f32, 4_f32]]).unwrap();
        let right: SquareMatrix =
            SquareMatrix::from_weights(&[vec![1_f32, 2.5_f32], vec![2_f32, 4_f32]]).unwrap();
        assert_eq!(left.max_abs_difference(&right).unwrap(), 1_f32);
        assert_eq!(left.max_abs_difference(&left).unwrap(), 0_f32);
    }

    #[test]
    fn test_copy_from() {
        let source: SquareMatrix =
            SquareMatrix::from_weights(&[vec![1_f32, 2_f32], vec![3_f32, 4_f32]]).unwrap();
        let mut target: SquareMatrix = SquareMatrix::zeros(2);
        target.copy_from(&source).unwrap();
        assert_eq!(target, source);

        let mut wrong_size: SquareMatrix = SquareMatrix::zeros(3);
        assert!(wrong_size.copy_from(&source).is_err());
    }

    #[test]
    fn test_row_checked() {
        let matrix: SquareMatrix = SquareMatrix::zeros(2);
        assert_eq!(matrix.row_checked(1).unwrap(), &[0_f32, 0_f32]);
        assert_eq!(matrix.row_checked(2), Err(ClusterError::IndexingError));
    }
}
