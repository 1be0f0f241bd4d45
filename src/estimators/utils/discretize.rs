// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, Axis, s};

/// Equal-width binning of continuous data into `n_bins` ordinal symbols,
/// independently per feature and per channel.
///
/// Each value maps to `floor((v - min) / width)` over the observed
/// `[min, max]` range of its column, with the maximum folded into the last
/// bin. A constant column maps to bin 0. Output values are integer-valued
/// floats, ready for the `binning` entropy backend.
pub fn digitize_uniform(data: ArrayView3<'_, f64>, n_bins: usize) -> Array3<f64> {
    assert!(n_bins >= 2, "n_bins must be >= 2");
    let (n_samples, n_features, n_channels) = data.dim();
    let mut out = Array3::<f64>::zeros(data.raw_dim());
    for f in 0..n_features {
        for c in 0..n_channels {
            let col = data.slice(s![.., f, c]);
            let mut mn = f64::INFINITY;
            let mut mx = f64::NEG_INFINITY;
            for &v in col.iter() {
                mn = mn.min(v);
                mx = mx.max(v);
            }
            let width = (mx - mn) / n_bins as f64;
            if !(width > 0.0) {
                continue;
            }
            for sample in 0..n_samples {
                let bin = (((col[sample] - mn) / width) as usize).min(n_bins - 1);
                out[(sample, f, c)] = bin as f64;
            }
        }
    }
    out
}

/// [`digitize_uniform`] over single-channel `(samples, features)` data.
pub fn digitize_uniform_2d(data: ArrayView2<'_, f64>, n_bins: usize) -> Array2<f64> {
    let expanded = data.insert_axis(Axis(2));
    let binned = digitize_uniform(expanded, n_bins);
    binned.index_axis(Axis(2), 0).to_owned()
}
