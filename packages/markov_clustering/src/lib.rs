// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub mod errors;
pub mod macros;
pub mod matrix;
pub mod mcl;
pub mod membership;
