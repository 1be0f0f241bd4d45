// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array2;

use crate::errors::{HoiError, Result};

/// Binomial coefficient C(n, k) in checked 128-bit arithmetic.
///
/// Returns `None` when an intermediate product overflows `u128`.
pub fn binomial(n: u64, k: u64) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc.checked_mul((n - i) as u128)?;
        acc /= (i + 1) as u128;
    }
    Some(acc)
}

/// Number of k-element subsets of an n-element universe, as an addressable
/// count.
///
/// # Returns
///
/// C(n, k), or [`HoiError::ResourceExhausted`] when the count overflows
/// `usize`.
pub fn num_combinations(n: usize, k: usize) -> Result<usize> {
    let count = binomial(n as u64, k as u64).ok_or_else(|| {
        HoiError::resource_exhausted(format!("C({n}, {k}) overflows 128-bit arithmetic"))
    })?;
    usize::try_from(count).map_err(|_| {
        HoiError::resource_exhausted(format!("C({n}, {k}) = {count} exceeds addressable size"))
    })
}

/// Total number of multiplets of every order in `minsize..=maxsize` drawn
/// from an n-element universe, with overflow-checked accumulation.
pub fn total_multiplets(n: usize, minsize: usize, maxsize: usize) -> Result<usize> {
    let mut total: usize = 0;
    for k in minsize..=maxsize {
        total = total.checked_add(num_combinations(n, k)?).ok_or_else(|| {
            HoiError::resource_exhausted(format!(
                "multiplet count for orders {minsize}..={maxsize} over {n} features exceeds addressable size"
            ))
        })?;
    }
    Ok(total)
}

/// All k-element subsets of `{0, .., n-1}` in lexicographic order, one row
/// per subset.
///
/// # Arguments
///
/// * `n` - Universe size
/// * `k` - Subset size, `1 <= k <= n`
///
/// # Returns
///
/// A `(C(n, k), k)` array of feature indices, [`HoiError::InvalidSize`] when
/// `k` lies outside `1..=n`, or [`HoiError::ResourceExhausted`] when the
/// table does not fit in memory addressing.
pub fn combinations(n: usize, k: usize) -> Result<Array2<i64>> {
    if k < 1 || k > n {
        return Err(HoiError::InvalidSize {
            minsize: k,
            maxsize: k,
            n_candidates: n,
        });
    }
    let rows = num_combinations(n, k)?;
    rows.checked_mul(k).ok_or_else(|| {
        HoiError::resource_exhausted(format!("combination table C({n}, {k}) x {k} exceeds addressable size"))
    })?;

    let mut out = Array2::<i64>::zeros((rows, k));
    let mut idx: Vec<usize> = (0..k).collect();
    for r in 0..rows {
        for (c, &v) in idx.iter().enumerate() {
            out[(r, c)] = v as i64;
        }
        // Advance the rightmost index that still has headroom, then reset
        // everything to its right to the tightest ascending run.
        let mut i = k;
        while i > 0 {
            i -= 1;
            if idx[i] != i + n - k {
                idx[i] += 1;
                for j in i + 1..k {
                    idx[j] = idx[j - 1] + 1;
                }
                break;
            }
        }
    }
    Ok(out)
}
