// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ndarray::{Array1, Array2, Array3, Axis};
use tracing::{debug, warn};

use crate::errors::{HoiError, Result};
use crate::estimators::dataset::HoiData;
use crate::estimators::entropy::{
    EntropyConfig, EntropyMethod, get_entropy, prepare_for_entropy,
};
use crate::estimators::mutual_information::scan_feature_target_mi;
use crate::estimators::utils::combinatorics::{combinations, total_multiplets};
use crate::estimators::utils::progress::OrderProgress;

/// Upper bound on any single assembled table, in bytes. Requests above it
/// fail with [`HoiError::ResourceExhausted`] before allocation.
pub const MAX_TABLE_BYTES: u64 = 4 << 30;

/// Options for [`RedundancyMmi::fit`].
#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Smallest multiplet order. Values below 2 are clamped up, redundancy
    /// needs at least a pair.
    pub minsize: usize,
    /// Largest multiplet order; `None` spans the whole candidate universe.
    pub maxsize: Option<usize>,
    /// Entropy backend name: `"gcmi"`, `"binning"` or `"knn"`.
    pub method: String,
    /// Backend tuning knobs.
    pub entropy: EntropyConfig,
    /// Cooperative cancellation flag, checked between order sweeps.
    pub abort: Option<Arc<AtomicBool>>,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            minsize: 2,
            maxsize: None,
            method: "gcmi".to_string(),
            entropy: EntropyConfig::default(),
            abort: None,
        }
    }
}

/// Redundancy estimated through the Minimum Mutual Information (MMI).
///
/// For every multiplet S of candidate features the redundancy about the
/// target y is the smallest pairwise mutual information,
///
/// Red(S; y) = min_{i in S} I(x_i; y)
///
/// so only `n_candidates` mutual informations are ever estimated, one per
/// feature, and the multiplet sweep reduces over that scan. Estimates are
/// in nats, per channel.
///
/// The estimator owns the validated dataset; [`RedundancyMmi::fit`] returns
/// the `(n_multiplets, channels)` redundancy table and stores the multiplet
/// index table, the order vector and the keep mask for inspection.
pub struct RedundancyMmi {
    data: HoiData,
    verbose: bool,
    multiplets: Option<Array2<i64>>,
    order: Option<Array1<i64>>,
    keep: Option<Array1<bool>>,
}

impl RedundancyMmi {
    /// Build the estimator from `(samples, features, channels)` data and a
    /// `(samples, channels)` target.
    pub fn new(data: Array3<f64>, target: Array2<f64>) -> Result<Self> {
        Ok(Self {
            data: HoiData::new(data, target)?,
            verbose: false,
            multiplets: None,
            order: None,
            keep: None,
        })
    }

    /// Build from single-channel `(samples, features)` data and a target of
    /// length `samples`.
    pub fn from_2d(data: Array2<f64>, target: Array1<f64>) -> Result<Self> {
        Ok(Self {
            data: HoiData::from_2d(data, target)?,
            verbose: false,
            multiplets: None,
            order: None,
            keep: None,
        })
    }

    /// Enable or disable the terminal progress display (default off).
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The validated dataset.
    pub fn data(&self) -> &HoiData {
        &self.data
    }

    /// Multiplet index table of the last successful fit, one row per
    /// multiplet, right-padded with `-1` up to the largest order.
    pub fn multiplets(&self) -> Option<&Array2<i64>> {
        self.multiplets.as_ref()
    }

    /// Order of each multiplet of the last successful fit.
    pub fn order(&self) -> Option<&Array1<i64>> {
        self.order.as_ref()
    }

    /// Row validity mask of the last successful fit. Every enumerated
    /// multiplet is computed, so the mask is all true.
    pub fn keep(&self) -> Option<&Array1<bool>> {
        self.keep.as_ref()
    }

    /// Estimate the redundancy of every multiplet.
    ///
    /// The sweep enumerates multiplets order by order, lexicographically
    /// within each order, and fills a fresh table at offsets derived from
    /// the per-order combination counts.
    ///
    /// # Arguments
    ///
    /// * `opts` - Order range, backend selection and tuning
    ///
    /// # Returns
    ///
    /// The `(n_multiplets, channels)` redundancy table in nats. Side tables
    /// ([`Self::multiplets`], [`Self::order`], [`Self::keep`]) are stored
    /// only when the fit succeeds; a failed fit leaves them `None`.
    ///
    /// # Errors
    ///
    /// * [`HoiError::InvalidSize`] for an unsatisfiable order range
    /// * [`HoiError::UnknownBackend`] for an unrecognized method name,
    ///   raised before any entropy computation
    /// * [`HoiError::InvalidData`] when the backend rejects the data, or the
    ///   kNN neighbor count does not fit the sample count
    /// * [`HoiError::ResourceExhausted`] when a table would overflow the
    ///   byte cap
    /// * [`HoiError::Aborted`] when the cancellation flag is raised
    pub fn fit(&mut self, opts: FitOptions) -> Result<Array2<f64>> {
        self.multiplets = None;
        self.order = None;
        self.keep = None;

        if opts.minsize < 2 {
            warn!(minsize = opts.minsize, "minsize below 2, clamping up");
        }
        let (minsize, maxsize) = self.data.check_minmax(opts.minsize, opts.maxsize)?;

        // Resolve the backend name before touching the data, so a typo
        // cannot cost a copula transform.
        let method = EntropyMethod::from_name(&opts.method)?;
        // The kNN estimator queries k neighbors besides the sample itself,
        // so k is bounded by n_samples - 1.
        if method == EntropyMethod::Knn {
            let k = opts.entropy.knn_k;
            let n_samples = self.data.n_samples();
            if k < 1 || k > n_samples - 1 {
                return Err(HoiError::invalid_data(format!(
                    "knn neighbor count k = {k} must satisfy 1 <= k <= {} for {n_samples} samples",
                    n_samples - 1
                )));
            }
        }
        let backend = get_entropy(method, &opts.entropy);

        let n_candidates = self.data.n_candidates();
        let n_channels = self.data.n_channels();
        debug!(
            %method,
            minsize,
            maxsize,
            n_candidates,
            n_channels,
            n_samples = self.data.n_samples(),
            "fitting redundancy via minimum mutual information"
        );

        let prepared = prepare_for_entropy(self.data.combined().view(), method)?;
        let i_xiy = scan_feature_target_mi(prepared.view(), backend.as_ref());

        let n_mults = total_multiplets(n_candidates, minsize, maxsize)?;
        check_table_bytes("hoi", n_mults, n_channels, size_of::<f64>())?;
        check_table_bytes("multiplets", n_mults, maxsize, size_of::<i64>())?;

        let mut hoi = Array2::<f64>::zeros((n_mults, n_channels));
        let mut multiplets = Array2::<i64>::from_elem((n_mults, maxsize), -1);
        let mut order = Array1::<i64>::zeros(n_mults);

        let progress = OrderProgress::new(n_mults, self.verbose);
        let mut offset = 0usize;
        for msize in minsize..=maxsize {
            if let Some(flag) = &opts.abort {
                if flag.load(Ordering::Relaxed) {
                    progress.finish();
                    return Err(HoiError::Aborted);
                }
            }
            progress.start_order(msize);

            let combs = combinations(n_candidates, msize)?;
            let n_combs = combs.nrows();
            if offset + n_combs > n_mults {
                return Err(HoiError::assembly_invariant(format!(
                    "order {msize} writes rows {offset}..{} past the {n_mults}-row table",
                    offset + n_combs
                )));
            }

            for (r, comb) in combs.axis_iter(Axis(0)).enumerate() {
                let row = offset + r;
                for (c, &feat) in comb.iter().enumerate() {
                    multiplets[(row, c)] = feat;
                }
                order[row] = msize as i64;
                for ch in 0..n_channels {
                    let mut red = f64::INFINITY;
                    for &feat in comb.iter() {
                        red = red.min(i_xiy[(feat as usize, ch)]);
                    }
                    hoi[(row, ch)] = red;
                }
            }

            debug!(order = msize, n_combs, "aggregated order");
            offset += n_combs;
            progress.inc(n_combs);
        }
        progress.finish();

        if offset != n_mults {
            return Err(HoiError::assembly_invariant(format!(
                "sweep filled {offset} of {n_mults} rows"
            )));
        }
        debug!(n_multiplets = n_mults, "assembled redundancy table");

        self.multiplets = Some(multiplets);
        self.order = Some(order);
        self.keep = Some(Array1::from_elem(n_mults, true));
        Ok(hoi)
    }
}

fn check_table_bytes(name: &str, rows: usize, cols: usize, elem_bytes: usize) -> Result<()> {
    let bytes = (rows as u64)
        .checked_mul(cols as u64)
        .and_then(|n| n.checked_mul(elem_bytes as u64))
        .ok_or_else(|| {
            HoiError::resource_exhausted(format!("{name} table of {rows} x {cols} overflows"))
        })?;
    if bytes > MAX_TABLE_BYTES {
        return Err(HoiError::resource_exhausted(format!(
            "{name} table of {rows} x {cols} needs {bytes} bytes, above the {MAX_TABLE_BYTES} byte cap"
        )));
    }
    Ok(())
}
