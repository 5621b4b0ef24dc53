// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use crate::matrix::SquareMatrix;

/// Sets every diagonal entry to 1.0, unconditionally overwriting whatever
/// weight was there before. The self loop guarantees every node retains some
/// of its own probability mass across iterations, so no row can dissipate to
/// zero and every node ends up in at least one candidate cluster.
pub fn add_self_loops(matrix: &mut SquareMatrix) {
    for node in 0..matrix.dim() {
        matrix.set(node, node, 1_f32);
    }
}

/// Divides each row by its count of qualifying entries, producing a
/// row-stochastic matrix when the input weights are 0/1 valued.
///
/// An entry qualifies when its weight is at least 1.0; rows with no
/// qualifying entry are left completely untouched, divisor and all. Both
/// behaviors are deliberate: the qualifying test means weighted edges below
/// 1.0 never count toward the divisor, and the skip means rows of isolated or
/// low-weight nodes pass through unscaled.
pub fn normalize_rows(matrix: &mut SquareMatrix) {
    for row in 0..matrix.dim() {
        let qualifying: usize = matrix
            .row(row)
            .iter()
            .filter(|&&weight| weight >= 1_f32)
            .count();
        if qualifying > 0 {
            let divisor: f32 = qualifying as f32;
            for value in matrix.row_mut(row).iter_mut() {
                *value /= divisor;
            }
        }
    }
}
