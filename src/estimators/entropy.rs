use std::fmt;

use ndarray::{Array3, ArrayView3};

use crate::errors::{HoiError, Result};
use crate::estimators::approaches::{BinningEntropy, GaussianEntropy, KnnEntropy};
use crate::estimators::approaches::gaussian::copnorm_array3;
use crate::estimators::traits::EntropyBackend;

/// Entropy estimation method selected by name.
///
/// Parsing happens once, up front, so a misspelled name fails before any
/// entropy is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyMethod {
    /// Gaussian-copula parametric entropy (`"gcmi"`).
    Gcmi,
    /// Plug-in entropy over pre-binned integer data (`"binning"`).
    Binning,
    /// Kozachenko-Leonenko k-nearest-neighbor entropy (`"knn"`).
    Knn,
}

impl EntropyMethod {
    /// Resolves a method name.
    ///
    /// # Arguments
    ///
    /// * `name` - One of `"gcmi"`, `"binning"`, `"knn"`
    ///
    /// # Returns
    ///
    /// The matching method, or [`HoiError::UnknownBackend`] for any other
    /// name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "gcmi" => Ok(Self::Gcmi),
            "binning" => Ok(Self::Binning),
            "knn" => Ok(Self::Knn),
            _ => Err(HoiError::UnknownBackend {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gcmi => "gcmi",
            Self::Binning => "binning",
            Self::Knn => "knn",
        }
    }
}

impl fmt::Display for EntropyMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tuning knobs shared by the entropy backends.
///
/// Only the fields relevant to the selected method are read: `biascorrect`
/// and `demean` by the Gaussian backend, `knn_k` by the kNN backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyConfig {
    /// Apply the small-sample bias correction (Gaussian).
    pub biascorrect: bool,
    /// Subtract column means before the covariance (Gaussian).
    pub demean: bool,
    /// Neighbor count for the Kozachenko-Leonenko estimator.
    pub knn_k: usize,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            biascorrect: true,
            demean: true,
            knn_k: 3,
        }
    }
}

/// Creates the entropy backend for a resolved method.
///
/// # Arguments
///
/// * `method` - Resolved estimation method
/// * `config` - Backend tuning knobs
///
/// # Returns
///
/// A boxed [`EntropyBackend`] ready for `(samples, dims, channels)` batches.
pub fn get_entropy(method: EntropyMethod, config: &EntropyConfig) -> Box<dyn EntropyBackend> {
    match method {
        EntropyMethod::Gcmi => Box::new(GaussianEntropy::new(config.biascorrect, config.demean)),
        EntropyMethod::Binning => Box::new(BinningEntropy),
        EntropyMethod::Knn => Box::new(KnnEntropy::new(config.knn_k)),
    }
}

/// Runs the method-specific data preparation, once, on the full array.
///
/// - `gcmi`: copula normalization of every feature per channel
/// - `binning`: validation that the data is integer-valued (the backend
///   counts symbols, it never discretizes)
/// - `knn`: pass-through
///
/// # Returns
///
/// The prepared `(samples, features, channels)` array, or
/// [`HoiError::InvalidData`] when `binning` data is not integer-valued.
pub fn prepare_for_entropy(data: ArrayView3<'_, f64>, method: EntropyMethod) -> Result<Array3<f64>> {
    match method {
        EntropyMethod::Gcmi => Ok(copnorm_array3(data)),
        EntropyMethod::Binning => {
            if data.iter().any(|&v| v.fract() != 0.0) {
                return Err(HoiError::invalid_data(
                    "binning requires integer-valued data; bin continuous inputs first",
                ));
            }
            Ok(data.to_owned())
        }
        EntropyMethod::Knn => Ok(data.to_owned()),
    }
}
