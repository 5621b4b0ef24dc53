// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use crate::errors::ClusterError;
use crate::log;
use crate::matrix::SquareMatrix;
use crate::membership::Membership;

use super::interpret;
use super::stochastic;

pub const DEFAULT_EPSILON: f32 = 1e-5_f32;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Runs the Markov Cluster (MCL) algorithm over a dense adjacency matrix.
///
/// The algorithm consists of three phases:
/// - preprocessing: self loops are forced onto the diagonal and each row is
///   normalized into transition probabilities
/// - iteration: the matrix is expanded (raised to the `power`-th matrix
///   power, strengthening paths through well connected regions) and inflated
///   (each entry raised to the `inflation` exponent and the row renormalized,
///   sharpening strong transitions against weak ones) until no entry moves by
///   more than `epsilon` between rounds
/// - interpretation: each column of the stabilized matrix is read off as the
///   list of nodes still flowing probability mass into it
///
/// The loop body always runs at least once, so even an already-stable matrix
/// costs one expand/inflate round.
///
/// matrix: the adjacency matrix to cluster; build it with
///   `SquareMatrix::from_adjacency` for an unweighted graph or
///   `SquareMatrix::from_weights` for a weighted one.
/// power: the matrix-power exponent applied at each expansion step. Must be
///   at least 1; a power of 1 makes expansion a no-op. Expansion is iterated
///   multiplication rather than exponentiation by squaring, since useful
///   exponents are small (2 or 3).
/// inflation: the elementwise exponent applied at each inflation step,
///   typically greater than 1. An inflation of 1 only renormalizes, which
///   combined with power 1 is a degenerate configuration that converges on
///   the first comparison once the matrix is stochastic.
/// epsilon: Default is 1e-5. Both the per-entry convergence bound and the
///   significance threshold used when interpreting columns.
/// max_iterations: Default is 100. The sole external interrupt point; runs
///   that exceed it fail with NonConvergence instead of looping forever.
pub struct MarkovClustering {
    matrix: SquareMatrix,
    scratch: SquareMatrix,
    power: u32,
    inflation: f64,
    epsilon: f32,
    max_iterations: usize,
    membership_count: Option<usize>,
}

impl MarkovClustering {
    pub fn new(
        matrix: SquareMatrix,
        power: u32,
        inflation: f64,
        epsilon: Option<f32>,
        max_iterations: Option<usize>,
    ) -> Result<MarkovClustering, ClusterError> {
        let epsilon: f32 = epsilon.unwrap_or(DEFAULT_EPSILON);
        let max_iterations: usize = max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        if power == 0 || !inflation.is_finite() || epsilon <= 0_f32 || max_iterations == 0 {
            return Err(ClusterError::ParameterRangeError);
        }
        if matrix.dim() == 0 {
            return Err(ClusterError::EmptyMatrixError);
        }
        let scratch: SquareMatrix = SquareMatrix::zeros(matrix.dim());
        return Ok(MarkovClustering {
            matrix,
            scratch,
            power,
            inflation,
            epsilon,
            max_iterations,
            membership_count: None,
        });
    }

    /// Runs the full preprocess, iterate, interpret pipeline once and returns
    /// the column-indexed membership lists.
    ///
    /// The working matrix is mutated in place and left in its converged state
    /// afterward, so calling `execute` a second time re-runs the algorithm on
    /// the already-converged matrix rather than on the original input. Clone
    /// the input matrix before construction if the original is still needed.
    pub fn execute(&mut self) -> Result<Membership, ClusterError> {
        log!(
            "Preparing {}x{} matrix: forcing self loops and normalizing rows",
            self.matrix.dim(),
            self.matrix.dim()
        );
        stochastic::add_self_loops(&mut self.matrix);
        stochastic::normalize_rows(&mut self.matrix);

        let mut iteration: usize = 0;
        loop {
            iteration += 1;
            self.scratch.copy_from(&self.matrix)?;
            log!("Iteration {}: expanding to matrix power {}", iteration, self.power);
            self.expand()?;
            log!("Iteration {}: inflating with exponent {}", iteration, self.inflation);
            self.inflate()?;
            let largest_change: f32 = self.matrix.max_abs_difference(&self.scratch)?;
            log!("Iteration {}: largest entry change {}", iteration, largest_change);
            if largest_change <= self.epsilon {
                break;
            }
            if iteration >= self.max_iterations {
                return Err(ClusterError::NonConvergence { iterations: iteration });
            }
        }
        log!("Converged after {} iterations", iteration);

        let membership: Membership = interpret::interpret(&self.matrix, self.epsilon);
        self.membership_count = Some(membership.membership_count());
        return Ok(membership);
    }

    /// The current state of the working matrix: raw input before `execute`,
    /// the converged stochastic matrix after.
    pub fn matrix(&self) -> &SquareMatrix {
        return &self.matrix;
    }

    /// The total membership count found by the last `execute` call, or None
    /// if `execute` has not run yet.
    pub fn membership_count(&self) -> Option<usize> {
        return self.membership_count;
    }

    /// Raises the working matrix to its `power`-th matrix power by repeated
    /// multiplication against the pre-iteration snapshot held in scratch.
    fn expand(&mut self) -> Result<(), ClusterError> {
        for _round in 1..self.power {
            self.matrix.multiply_in_place(&self.scratch)?;
        }
        return Ok(());
    }

    /// Raises every entry to the inflation exponent and renormalizes each row
    /// to sum to 1. Entries are non-negative by construction, so the real
    /// exponent is always defined; a row whose inflated sum is zero would
    /// renormalize into NaN and is rejected instead.
    fn inflate(&mut self) -> Result<(), ClusterError> {
        let inflation: f64 = self.inflation;
        for row in 0..self.matrix.dim() {
            let mut row_sum: f32 = 0_f32;
            for value in self.matrix.row_mut(row).iter_mut() {
                *value = (*value as f64).powf(inflation) as f32;
                row_sum += *value;
            }
            if row_sum <= 0_f32 {
                return Err(ClusterError::DegenerateRow(row));
            }
            for value in self.matrix.row_mut(row).iter_mut() {
                *value /= row_sum;
            }
        }
        return Ok(());
    }
}
