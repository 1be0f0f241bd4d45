use ndarray::{Array2, ArrayView3, Axis, concatenate, s};

use crate::estimators::traits::EntropyBackend;

/// Pairwise feature-target mutual information scan.
///
/// `combined` is the prepared `(samples, n_features + 1, channels)` array
/// with the target in the last column. For each candidate feature x_i the
/// scan computes, per channel,
///
/// I(x_i; y) = H(x_i) + H(y) - H([x_i, y])
///
/// with the selected backend. H(y) does not depend on the candidate and is
/// computed once. Returns a `(n_candidates, channels)` array in nats.
pub fn scan_feature_target_mi(
    combined: ArrayView3<'_, f64>,
    backend: &dyn EntropyBackend,
) -> Array2<f64> {
    let (_, n_columns, n_channels) = combined.dim();
    assert!(n_columns >= 1, "combined array must contain the target column");
    let n_candidates = n_columns - 1;

    let mut out = Array2::<f64>::zeros((n_candidates, n_channels));
    if n_candidates == 0 {
        return out;
    }

    let y = combined.slice(s![.., n_candidates..n_columns, ..]);
    let h_y = backend.entropy(y);

    for i in 0..n_candidates {
        let xi = combined.slice(s![.., i..i + 1, ..]);
        let h_xi = backend.entropy(xi);
        let joint = concatenate(Axis(1), &[xi, y]).expect("xi and y share sample and channel axes");
        let h_joint = backend.entropy(joint.view());
        for c in 0..n_channels {
            out[(i, c)] = h_xi[c] + h_y[c] - h_joint[c];
        }
    }
    out
}
