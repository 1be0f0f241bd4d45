//! Entropy estimation approaches.
//!
//! Each approach implements [`crate::estimators::traits::EntropyBackend`]
//! over a `(samples, dims, channels)` batch, channel by channel:
//! - [`gaussian`]: parametric Gaussian entropy for copula-normalized data
//! - [`binning`]: maximum-likelihood plug-in entropy over binned symbols
//! - [`knn`]: Kozachenko-Leonenko nearest-neighbor differential entropy

pub mod binning;
pub mod gaussian;
pub mod knn;

pub use binning::BinningEntropy;
pub use gaussian::GaussianEntropy;
pub use knn::KnnEntropy;
