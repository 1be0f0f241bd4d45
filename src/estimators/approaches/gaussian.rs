use ndarray::{Array1, Array3, ArrayView1, ArrayView2, ArrayView3, Axis, s};
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::gamma::digamma;

use crate::estimators::traits::EntropyBackend;
use crate::estimators::utils::linalg::half_log_det;

/// Gaussian (parametric) entropy backend, the `gcmi` estimator.
///
/// Per channel the batch columns are treated as a multivariate Gaussian:
/// H = Σ ln L_ii + d/2 (ln 2π + 1) in nats, with L the lower Cholesky factor
/// of the (n-1)-normalized covariance. With `biascorrect` the small-sample
/// correction d (ln2 - ln(n-1))/2 + Σ_{i=1..d} ψ((n-i)/2)/2 is subtracted.
///
/// The copula step lives in the data preparation
/// ([`copnorm_array3`]): once every feature is rank-normalized to standard
/// normal margins, plain Gaussian entropies compose into the Gaussian-copula
/// mutual information.
///
/// A degenerate covariance (fewer samples than dimensions, or a constant
/// column) yields `-inf`, the limiting entropy of a degenerate Gaussian.
pub struct GaussianEntropy {
    pub biascorrect: bool,
    pub demean: bool,
}

impl GaussianEntropy {
    pub fn new(biascorrect: bool, demean: bool) -> Self {
        Self { biascorrect, demean }
    }

    /// Entropy of one `(samples, dims)` channel slice.
    fn entropy_channel(&self, xs: ArrayView2<'_, f64>) -> f64 {
        let (n, d) = xs.dim();
        if n < 2 {
            return f64::NEG_INFINITY;
        }
        let mut x = xs.to_owned();
        if self.demean {
            let mean = x.mean_axis(Axis(0)).expect("non-empty sample axis");
            x -= &mean;
        }
        let cov = x.t().dot(&x) / (n as f64 - 1.0);

        let Some(hld) = half_log_det(cov.view()) else {
            return f64::NEG_INFINITY;
        };
        let d_f = d as f64;
        let mut hx = hld + 0.5 * d_f * ((2.0 * std::f64::consts::PI).ln() + 1.0);
        if self.biascorrect {
            let n_f = n as f64;
            let dterm = (std::f64::consts::LN_2 - (n_f - 1.0).ln()) / 2.0;
            let psiterms: f64 = (1..=d).map(|i| digamma((n_f - i as f64) / 2.0) / 2.0).sum();
            hx -= d_f * dterm + psiterms;
        }
        hx
    }
}

impl EntropyBackend for GaussianEntropy {
    fn entropy(&self, batch: ArrayView3<'_, f64>) -> Array1<f64> {
        let n_channels = batch.dim().2;
        let mut out = Array1::<f64>::zeros(n_channels);
        for c in 0..n_channels {
            out[c] = self.entropy_channel(batch.index_axis(Axis(2), c));
        }
        out
    }
}

/// Copula normalization of a single series.
///
/// Maps each value to Φ⁻¹((rank + 1) / (n + 1)) with stable, first-occurrence
/// rank order for ties, so any strictly monotone transform of the input
/// produces the same output.
pub fn copnorm_series(values: ArrayView1<'_, f64>) -> Array1<f64> {
    let n = values.len();
    let mut idx: Vec<usize> = (0..n).collect();
    idx.sort_unstable_by(|&i, &j| values[i].total_cmp(&values[j]).then(i.cmp(&j)));

    let unit = Normal::new(0.0, 1.0).expect("unit normal parameters are valid");
    let denom = (n + 1) as f64;
    let mut out = Array1::<f64>::zeros(n);
    for (rank, &i) in idx.iter().enumerate() {
        out[i] = unit.inverse_cdf((rank + 1) as f64 / denom);
    }
    out
}

/// Copula-normalize every feature of a `(samples, features, channels)` array,
/// independently per feature and per channel.
pub fn copnorm_array3(data: ArrayView3<'_, f64>) -> Array3<f64> {
    let (_, n_features, n_channels) = data.dim();
    let mut out = data.to_owned();
    for f in 0..n_features {
        for c in 0..n_channels {
            let column = data.slice(s![.., f, c]);
            let normed = copnorm_series(column);
            out.slice_mut(s![.., f, c]).assign(&normed);
        }
    }
    out
}
