// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy shared by the whole crate.
//!
//! Every failure is raised synchronously to the caller of `fit`; nothing is
//! retried internally and no partial output tables are ever returned.

use thiserror::Error;

/// Errors produced by dataset intake, backend selection and estimation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoiError {
    /// Requested multiplet sizes are outside the valid combinatorial range.
    ///
    /// Detected eagerly, before any computation starts.
    #[error(
        "invalid multiplet sizes: minsize {minsize} and maxsize {maxsize} \
         with {n_candidates} candidate features"
    )]
    InvalidSize {
        minsize: usize,
        maxsize: usize,
        n_candidates: usize,
    },

    /// Requested entropy method is not recognized.
    #[error("unknown entropy backend '{name}' (expected one of: gcmi, binning, knn)")]
    UnknownBackend { name: String },

    /// The requested configuration would exceed the preallocation bounds.
    ///
    /// Raised before any output table is allocated; the multiplet count per
    /// order grows combinatorially and is computed with checked arithmetic.
    #[error("resource limit exceeded: {reason}")]
    ResourceExhausted { reason: String },

    /// Internal consistency failure after assembly (offset or shape
    /// mismatch between enumeration and aggregation). Always fatal.
    #[error("assembly invariant violated: {reason}")]
    AssemblyInvariant { reason: String },

    /// Input data does not satisfy the shape or value preconditions.
    #[error("invalid input data: {reason}")]
    InvalidData { reason: String },

    /// The fit was aborted through its cancellation flag between two
    /// multiplet orders.
    #[error("fit aborted between multiplet orders")]
    Aborted,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HoiError>;

impl HoiError {
    /// Shorthand for an [`HoiError::InvalidData`] with a formatted reason.
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        HoiError::InvalidData {
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`HoiError::ResourceExhausted`] with a formatted reason.
    pub fn resource_exhausted(reason: impl Into<String>) -> Self {
        HoiError::ResourceExhausted {
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`HoiError::AssemblyInvariant`] with a formatted reason.
    pub fn assembly_invariant(reason: impl Into<String>) -> Self {
        HoiError::AssemblyInvariant {
            reason: reason.into(),
        }
    }
}
