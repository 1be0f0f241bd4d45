//! Shared helpers: combinatorics, binning, small dense linear algebra,
//! progress reporting and multiplet ranking.

pub mod combinatorics;
pub mod discretize;
pub mod linalg;
pub mod progress;
pub mod ranking;
