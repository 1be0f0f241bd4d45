// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, Array2, s};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::estimators::utils::linalg::cholesky_lower;

/// Kind of higher-order interaction planted in a simulated triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripletCharacter {
    /// Couplings tuned so the triplet carries no net interaction.
    Null,
    /// Positive extra coupling, the triplet is redundancy-dominated.
    Redundancy,
    /// Negative extra coupling, the triplet is synergy-dominated.
    Synergy,
}

/// Covariance of a three-node factor model with a planted interaction.
///
/// Nodes load on a shared factor with loadings `sqrt(0.99)`, `sqrt(0.7)` and
/// `sqrt(0.3)`; unit variances come from matching diagonal noise, and the
/// character sets the extra noise coupling between the last two nodes.
pub fn cov_order_3(character: TripletCharacter) -> Array2<f64> {
    let lamb = [0.99f64.sqrt(), 0.7f64.sqrt(), 0.3f64.sqrt()];
    let theta_yz = match character {
        TripletCharacter::Null => -0.148,
        TripletCharacter::Redundancy => 0.22,
        TripletCharacter::Synergy => -0.39,
    };
    factor_covariance(&lamb, 1, 2, theta_yz)
}

/// Covariance of the three-node model extended with a behavioral target.
///
/// The target loads with `sqrt(0.2)` on the shared factor and the character
/// sets the extra noise coupling between the third node and the target.
pub fn cov_order_4(character: TripletCharacter) -> Array2<f64> {
    let lamb = [0.99f64.sqrt(), 0.7f64.sqrt(), 0.3f64.sqrt(), 0.2f64.sqrt()];
    let theta_zs = match character {
        TripletCharacter::Null => 0.0,
        TripletCharacter::Redundancy => 0.25,
        TripletCharacter::Synergy => -0.52,
    };
    factor_covariance(&lamb, 2, 3, theta_zs)
}

/// cov = lamb lamb^T + diag(1 - lamb^2) + theta on the `(i, j)` pair,
/// giving unit variances with the planted off-diagonal coupling.
fn factor_covariance(lamb: &[f64], i: usize, j: usize, theta: f64) -> Array2<f64> {
    let d = lamb.len();
    let mut cov = Array2::<f64>::zeros((d, d));
    for r in 0..d {
        for c in 0..d {
            cov[(r, c)] = if r == c { 1.0 } else { lamb[r] * lamb[c] };
        }
    }
    cov[(i, j)] += theta;
    cov[(j, i)] += theta;
    cov
}

/// Draw `(n_trials, 3)` samples of the three-node model, reproducibly.
pub fn simulate_hoi_gauss(
    n_trials: usize,
    character: TripletCharacter,
    seed: u64,
) -> Array2<f64> {
    sample_mvn(n_trials, &cov_order_3(character), seed)
}

/// Draw the target-extended model and split it into `(n_trials, 3)` node
/// data plus the length-`n_trials` behavioral target.
pub fn simulate_hoi_gauss_target(
    n_trials: usize,
    character: TripletCharacter,
    seed: u64,
) -> (Array2<f64>, Array1<f64>) {
    let full = sample_mvn(n_trials, &cov_order_4(character), seed);
    let data = full.slice(s![.., 0..3]).to_owned();
    let target = full.column(3).to_owned();
    (data, target)
}

/// Zero-mean multivariate normal samples through the Cholesky factor.
fn sample_mvn(n_trials: usize, cov: &Array2<f64>, seed: u64) -> Array2<f64> {
    let d = cov.nrows();
    let chol = cholesky_lower(cov.view()).expect("simulation covariance is positive definite");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut z = Array2::<f64>::zeros((n_trials, d));
    for v in z.iter_mut() {
        *v = rng.sample(StandardNormal);
    }
    z.dot(&chol.t())
}
