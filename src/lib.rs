// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # hoimeasure
//!
//! Rust library for estimating higher-order interactions (HOIs) among sets of
//! observed variables: for every subset of features (a "multiplet") it
//! quantifies the redundant information the subset carries about a target
//! signal, using the Minimum Mutual Information (MMI) redundancy rule with
//! interchangeable entropy backends.
//!
//! ## Quick Start
//!
//! ```rust
//! use hoimeasure::estimators::redundancy::{FitOptions, RedundancyMmi};
//! use ndarray::array;
//!
//! // Six samples, three discretized features; the target follows feature 0.
//! let x = array![
//!     [0.0, 1.0, 0.0],
//!     [1.0, 0.0, 1.0],
//!     [0.0, 0.0, 1.0],
//!     [1.0, 1.0, 0.0],
//!     [0.0, 1.0, 1.0],
//!     [1.0, 0.0, 0.0],
//! ];
//! let y = x.column(0).to_owned();
//!
//! let mut model = RedundancyMmi::from_2d(x, y).unwrap();
//! let hoi = model.fit(FitOptions {
//!     method: "binning".into(),
//!     ..FitOptions::default()
//! })
//! .unwrap();
//!
//! // C(3, 2) + C(3, 3) = 4 multiplets, one channel.
//! assert_eq!(hoi.dim(), (4, 1));
//! assert_eq!(model.order().unwrap().to_vec(), vec![2, 2, 2, 3]);
//! ```
//!
//! ## Pipeline
//!
//! A `fit` call runs four stages over a dataset shaped
//! `(samples, features, channels)` with the target held out of the candidate
//! pool:
//!
//! 1. **Pairwise MI scan**: one pass computing `I(feature_i; target)` per
//!    channel for every candidate feature, through the selected entropy
//!    backend.
//! 2. **Multiplet enumeration**: all index tuples of each requested order,
//!    in lexicographic order, as one bulk array per order.
//! 3. **MMI aggregation**: the redundancy of a multiplet is the minimum of
//!    its members' individual MI with the target; no joint high-dimensional
//!    entropy is ever estimated.
//! 4. **Assembly**: scores, multiplet indices (sentinel-padded), orders and
//!    a keep mask are written into preallocated tables at per-order offsets.
//!
//! ## Entropy backends
//!
//! | Name      | Estimator                                    | Input          |
//! |-----------|----------------------------------------------|----------------|
//! | `gcmi`    | Gaussian entropy over copula-normalized data | continuous     |
//! | `binning` | Plug-in entropy of the joint histogram       | integer-valued |
//! | `knn`     | Kozachenko-Leonenko k-nearest-neighbor       | continuous     |
//!
//! All backends return entropies in nats and are evaluated independently per
//! channel. Backend selection is by name through
//! [`estimators::entropy::get_entropy`]; unknown names fail before any
//! computation runs.
//!
//! ## Simulation
//!
//! [`simulation`] ships the multivariate-Gaussian generators with controlled
//! redundant/synergistic covariance structure used to exercise the estimator
//! in tests and demos.

pub mod errors;
pub mod estimators;
pub mod simulation;

pub use errors::{HoiError, Result};
