// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::num::NonZeroUsize;

use kiddo::{ImmutableKdTree, SquaredEuclidean};
use ndarray::{Array1, ArrayView2, ArrayView3, Axis};
use statrs::function::gamma::{digamma, gamma};

use crate::estimators::traits::EntropyBackend;

/// Kozachenko-Leonenko differential entropy backend (kNN-based, Euclidean).
///
/// H_hat = psi(N) - psi(k) + ln(V_d) + d * mean_i ln(rho_k,i)
/// where V_d is the d-dimensional unit-ball volume and rho_k,i the distance
/// to the k-th nearest neighbor of sample i (self excluded). Zero radii from
/// duplicate samples are dropped from the mean.
pub struct KnnEntropy {
    pub k: usize,
}

impl KnnEntropy {
    pub fn new(k: usize) -> Self {
        assert!(k >= 1, "k must be >= 1");
        Self { k }
    }

    fn entropy_channel(&self, xs: ArrayView2<'_, f64>) -> f64 {
        let (n, d) = xs.dim();
        if n == 0 {
            return 0.0;
        }
        assert!(
            self.k <= n - 1,
            "k must be <= N-1 when querying within the same dataset"
        );

        // KD-tree dims are compile-time in kiddo; dispatch the low dimensions
        // and fall back to brute force above.
        let radii = match d {
            1 => knn_radii_tree::<1>(xs, self.k),
            2 => knn_radii_tree::<2>(xs, self.k),
            3 => knn_radii_tree::<3>(xs, self.k),
            _ => knn_radii_brute(xs, self.k),
        };

        let mut sum_ln_r = 0.0f64;
        let mut cnt = 0usize;
        for r in radii {
            if r > 0.0 {
                sum_ln_r += r.ln();
                cnt += 1;
            }
        }
        if cnt == 0 {
            return 0.0;
        }

        let n_f = n as f64;
        digamma(n_f) - digamma(self.k as f64)
            + unit_ball_volume(d).ln()
            + (d as f64) * (sum_ln_r / cnt as f64)
    }
}

impl EntropyBackend for KnnEntropy {
    fn entropy(&self, batch: ArrayView3<'_, f64>) -> Array1<f64> {
        let n_channels = batch.dim().2;
        let mut out = Array1::<f64>::zeros(n_channels);
        for c in 0..n_channels {
            out[c] = self.entropy_channel(batch.index_axis(Axis(2), c));
        }
        out
    }
}

/// Volume of the unit d-ball: pi^{d/2} / Gamma(d/2 + 1).
pub fn unit_ball_volume(d: usize) -> f64 {
    let d_f = d as f64;
    std::f64::consts::PI.powf(d_f / 2.0) / gamma(d_f / 2.0 + 1.0)
}

fn to_points<const K: usize>(data: ArrayView2<'_, f64>) -> Vec<[f64; K]> {
    assert!(data.ncols() == K, "data.ncols() must equal K");
    let n = data.nrows();
    let mut points: Vec<[f64; K]> = Vec::with_capacity(n);
    if let Some(slice) = data.as_slice() {
        for chunk in slice.chunks_exact(K) {
            let mut p = [0.0; K];
            p.copy_from_slice(&chunk[..K]);
            points.push(p);
        }
    } else {
        for r in 0..n {
            let mut p = [0.0; K];
            for c in 0..K {
                p[c] = data[(r, c)];
            }
            points.push(p);
        }
    }
    points
}

/// Euclidean distance to the k-th nearest neighbor per sample (self excluded),
/// via a KD-tree over compile-time K dimensions.
fn knn_radii_tree<const K: usize>(data: ArrayView2<'_, f64>, k: usize) -> Vec<f64> {
    let points = to_points::<K>(data);
    let tree: ImmutableKdTree<f64, K> = ImmutableKdTree::new_from_slice(&points);

    // Query k+1 neighbors (including self), take index k (0-based).
    let mut radii = Vec::with_capacity(points.len());
    for p in points.iter() {
        let mut neigh =
            tree.nearest_n::<SquaredEuclidean>(p, NonZeroUsize::new(k + 1).unwrap());
        let kth = neigh.remove(k);
        let (dist2, _idx): (f64, u64) = kth.into();
        radii.push(dist2.sqrt());
    }
    radii
}

/// O(N^2) fallback for dimensions without a KD-tree fast path.
fn knn_radii_brute(data: ArrayView2<'_, f64>, k: usize) -> Vec<f64> {
    let (n, d) = data.dim();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let xi = data.row(i);
        let mut dists: Vec<f64> = Vec::with_capacity(n - 1);
        for j in 0..n {
            if i == j {
                continue;
            }
            let mut acc = 0.0f64;
            for dim in 0..d {
                let diff = xi[dim] - data[(j, dim)];
                acc += diff * diff;
            }
            dists.push(acc.sqrt());
        }
        dists.select_nth_unstable_by(k - 1, |a, b| a.partial_cmp(b).unwrap());
        out.push(dists[k - 1]);
    }
    out
}
