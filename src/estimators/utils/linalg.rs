use ndarray::{Array2, ArrayView2};

/// Dense lower-triangular Cholesky factorization `A = L Lᵀ`.
///
/// Sized for the small symmetric positive-definite matrices this crate
/// factorizes, covariances over a handful of features. Returns `None` when
/// the matrix is not square or a pivot is non-positive (not SPD).
pub fn cholesky_lower(a: ArrayView2<'_, f64>) -> Option<Array2<f64>> {
    let n = a.nrows();
    if a.ncols() != n {
        return None;
    }
    let mut l = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[[i, j]];
            for k in 0..j {
                sum -= l[[i, k]] * l[[j, k]];
            }
            if i == j {
                if sum <= 0.0 || !sum.is_finite() {
                    return None;
                }
                l[[i, j]] = sum.sqrt();
            } else {
                l[[i, j]] = sum / l[[j, j]];
            }
        }
    }
    Some(l)
}

/// Sum of the natural logs of the Cholesky diagonal, i.e. `ln det(A) / 2`.
///
/// `None` when the matrix is not SPD.
pub fn half_log_det(a: ArrayView2<'_, f64>) -> Option<f64> {
    let l = cholesky_lower(a)?;
    Some((0..l.nrows()).map(|i| l[[i, i]].ln()).sum())
}
