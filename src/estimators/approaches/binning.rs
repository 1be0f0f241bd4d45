// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use ndarray::{Array1, ArrayView2, ArrayView3, Axis};

use crate::estimators::traits::EntropyBackend;

/// Plug-in entropy over pre-binned data.
///
/// Each channel slice `(samples, dims)` is read as a sample of joint symbols,
/// one symbol per row, and the maximum-likelihood estimate H = -Σ p ln p is
/// returned in nats. Values are expected to be integer-valued already; the
/// backend counts, it never discretizes.
pub struct BinningEntropy;

impl BinningEntropy {
    fn entropy_channel(xs: ArrayView2<'_, f64>) -> f64 {
        let n = xs.dim().0;
        if n == 0 {
            return 0.0;
        }
        let mut counts: HashMap<Vec<i64>, usize> = HashMap::new();
        for row in xs.axis_iter(Axis(0)) {
            let key: Vec<i64> = row.iter().map(|&v| v as i64).collect();
            *counts.entry(key).or_insert(0) += 1;
        }
        let n_f = n as f64;
        counts
            .values()
            .map(|&c| {
                let p = c as f64 / n_f;
                -p * p.ln()
            })
            .sum()
    }
}

impl EntropyBackend for BinningEntropy {
    fn entropy(&self, batch: ArrayView3<'_, f64>) -> Array1<f64> {
        let n_channels = batch.dim().2;
        let mut out = Array1::<f64>::zeros(n_channels);
        for c in 0..n_channels {
            out[c] = Self::entropy_channel(batch.index_axis(Axis(2), c));
        }
        out
    }
}
