use ndarray::{ArrayView1, ArrayView2};

/// One ranked multiplet with its aggregate score.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMultiplet {
    /// Feature indices of the multiplet, padding stripped.
    pub features: Vec<i64>,
    pub order: usize,
    /// Mean value across channels.
    pub score: f64,
}

/// Top `n_best` multiplets by mean value across channels, highest first.
///
/// Rows masked out by `keep` are skipped. When `orders` is given, only
/// multiplets of those orders compete.
pub fn nbest_multiplets(
    values: ArrayView2<'_, f64>,
    multiplets: ArrayView2<'_, i64>,
    order: ArrayView1<'_, i64>,
    keep: ArrayView1<'_, bool>,
    n_best: usize,
    orders: Option<&[usize]>,
) -> Vec<RankedMultiplet> {
    assert_eq!(values.nrows(), multiplets.nrows());
    assert_eq!(values.nrows(), order.len());
    assert_eq!(values.nrows(), keep.len());

    let mut ranked: Vec<RankedMultiplet> = Vec::new();
    for r in 0..values.nrows() {
        if !keep[r] {
            continue;
        }
        let ord = order[r] as usize;
        if let Some(wanted) = orders {
            if !wanted.contains(&ord) {
                continue;
            }
        }
        let score = values.row(r).mean().unwrap_or(f64::NAN);
        let features: Vec<i64> = multiplets
            .row(r)
            .iter()
            .copied()
            .filter(|&v| v >= 0)
            .collect();
        ranked.push(RankedMultiplet {
            features,
            order: ord,
            score,
        });
    }
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n_best);
    ranked
}
