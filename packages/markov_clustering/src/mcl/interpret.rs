// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use crate::matrix::SquareMatrix;
use crate::membership::Membership;

/// Reads the converged matrix column by column: node j belongs to column i's
/// attractor list when the (j, i) entry still carries more than `epsilon` of
/// probability mass. Lists come out in ascending node-id order because rows
/// are scanned in order. A pure read of the matrix with no failure modes;
/// interpreting the same matrix twice yields identical results.
pub fn interpret(
    matrix: &SquareMatrix,
    epsilon: f32,
) -> Membership {
    let mut attractor_lists: Vec<Vec<usize>> = Vec::with_capacity(matrix.dim());
    for column in 0..matrix.dim() {
        let mut members: Vec<usize> = Vec::new();
        for row in 0..matrix.dim() {
            if matrix.get(row, column) > epsilon {
                members.push(row);
            }
        }
        attractor_lists.push(members);
    }
    return Membership::from_lists(attractor_lists);
}
