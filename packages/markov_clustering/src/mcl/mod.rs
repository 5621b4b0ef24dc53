// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub use self::markov_clustering::{MarkovClustering, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};

mod interpret;
mod markov_clustering;
mod stochastic;
