// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#[derive(Clone, Debug, PartialEq)]
pub enum ClusterError {
    /// Two matrices of unequal dimension were used in a binary operation, or a
    /// constructor was handed a non-square grid. Carries both dimensions.
    ShapeMismatch {
        left: usize,
        right: usize,
    },
    /// The inflation step found a row whose post-exponentiation sum was zero,
    /// which would otherwise renormalize into NaN entries. Carries the row index.
    DegenerateRow(usize),
    /// The expand/inflate loop exceeded its iteration cap without the matrix
    /// stabilizing. Carries the number of iterations performed.
    NonConvergence {
        iterations: usize,
    },
    ParameterRangeError,
    EmptyMatrixError,
    IndexingError,
}
