// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, Array3, Axis, concatenate};

use crate::errors::{HoiError, Result};

/// Shared dataset container for multiplet estimators.
///
/// Owns the combined array shaped `(samples, features, channels)` in which
/// the target variable is appended as the last feature column, so that the
/// candidate Feature Universe is `{0, ..., n_features - 2}`. Validated once
/// at construction; immutable afterwards.
pub struct HoiData {
    /// Candidate features plus the target as last column.
    combined: Array3<f64>,
}

impl HoiData {
    /// Build from a 3-D dataset `(samples, features, channels)` and a target
    /// `(samples, channels)`.
    ///
    /// # Errors
    ///
    /// [`HoiError::InvalidData`] when the shapes disagree, any axis is empty,
    /// fewer than two samples are provided, or a value is not finite.
    pub fn new(data: Array3<f64>, target: Array2<f64>) -> Result<Self> {
        let (n_samples, n_features, n_channels) = data.dim();
        if n_samples < 2 {
            return Err(HoiError::invalid_data(format!(
                "at least two samples are required, got {n_samples}"
            )));
        }
        if n_features == 0 || n_channels == 0 {
            return Err(HoiError::invalid_data(format!(
                "empty feature or channel axis: ({n_samples}, {n_features}, {n_channels})"
            )));
        }
        if target.dim() != (n_samples, n_channels) {
            return Err(HoiError::invalid_data(format!(
                "target shape {:?} does not match (samples, channels) = ({n_samples}, {n_channels})",
                target.dim()
            )));
        }
        if data.iter().any(|v| !v.is_finite()) || target.iter().any(|v| !v.is_finite()) {
            return Err(HoiError::invalid_data("non-finite value in dataset or target"));
        }

        let target3 = target.insert_axis(Axis(1));
        let combined = concatenate(Axis(1), &[data.view(), target3.view()])
            .map_err(|e| HoiError::invalid_data(format!("cannot append target column: {e}")))?;
        Ok(Self { combined })
    }

    /// Convenience constructor for single-channel data: `(samples, features)`
    /// plus a target of length `samples`.
    pub fn from_2d(data: Array2<f64>, target: Array1<f64>) -> Result<Self> {
        let n_samples = target.len();
        let data3 = data.insert_axis(Axis(2));
        let target2 = target
            .into_shape_with_order((n_samples, 1))
            .map_err(|e| HoiError::invalid_data(format!("cannot reshape target: {e}")))?;
        Self::new(data3, target2)
    }

    /// Number of samples.
    pub fn n_samples(&self) -> usize {
        self.combined.dim().0
    }

    /// Number of features including the target column.
    pub fn n_features(&self) -> usize {
        self.combined.dim().1
    }

    /// Size of the candidate Feature Universe (target excluded).
    pub fn n_candidates(&self) -> usize {
        self.n_features() - 1
    }

    /// Number of independent channels.
    pub fn n_channels(&self) -> usize {
        self.combined.dim().2
    }

    /// The combined `(samples, features, channels)` array, target last.
    pub fn combined(&self) -> &Array3<f64> {
        &self.combined
    }

    /// Resolve and validate the requested multiplet size range.
    ///
    /// `minsize` is clamped up to 2; a missing `maxsize` means "all
    /// candidates". Validation happens before any computation.
    ///
    /// # Errors
    ///
    /// [`HoiError::InvalidSize`] when `minsize > maxsize` or
    /// `maxsize > n_candidates`.
    pub fn check_minmax(&self, minsize: usize, maxsize: Option<usize>) -> Result<(usize, usize)> {
        let n_candidates = self.n_candidates();
        let minsize = minsize.max(2);
        let maxsize = maxsize.unwrap_or(n_candidates);
        if minsize > maxsize || maxsize > n_candidates {
            return Err(HoiError::InvalidSize {
                minsize,
                maxsize,
                n_candidates,
            });
        }
        Ok((minsize, maxsize))
    }
}
