// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use hoimeasure::estimators::redundancy::{FitOptions, RedundancyMmi};
use ndarray::array;

use crate::test_helpers::generate_symbol_data;

fn binning_options() -> FitOptions {
    FitOptions {
        method: "binning".into(),
        ..FitOptions::default()
    }
}

#[test]
fn fit_assembles_tables_in_order_major_layout() {
    // Three candidates swept at orders 2..=3: C(3,2) + C(3,3) = 4 rows
    let x = generate_symbol_data(40, 3, 3, 1);
    let y = x.column(0).to_owned();
    let mut model = RedundancyMmi::from_2d(x, y).unwrap();

    let hoi = model
        .fit(FitOptions {
            minsize: 2,
            maxsize: Some(3),
            ..binning_options()
        })
        .unwrap();

    assert_eq!(hoi.dim(), (4, 1));
    assert_eq!(model.order().unwrap(), &array![2, 2, 2, 3]);

    // Lexicographic within each order, right-padded with -1 to maxsize
    let expected = array![[0, 1, -1], [0, 2, -1], [1, 2, -1], [0, 1, 2]];
    assert_eq!(model.multiplets().unwrap(), &expected);

    // Every enumerated multiplet is computed
    assert!(model.keep().unwrap().iter().all(|&b| b));
}

#[test]
fn fit_defaults_span_the_whole_universe() {
    // Four candidates, maxsize = None: C(4,2) + C(4,3) + C(4,4) = 11 rows
    let x = generate_symbol_data(50, 4, 3, 2);
    let y = x.column(1).to_owned();
    let mut model = RedundancyMmi::from_2d(x, y).unwrap();
    let hoi = model.fit(binning_options()).unwrap();

    assert_eq!(hoi.dim(), (11, 1));
    let order = model.order().unwrap();
    assert_eq!(order.iter().filter(|&&o| o == 2).count(), 6);
    assert_eq!(order.iter().filter(|&&o| o == 3).count(), 4);
    assert_eq!(order.iter().filter(|&&o| o == 4).count(), 1);

    let multiplets = model.multiplets().unwrap();
    assert_eq!(multiplets.dim(), (11, 4));
    assert_eq!(multiplets.row(0).to_vec(), vec![0, 1, -1, -1]);
    assert_eq!(multiplets.row(10).to_vec(), vec![0, 1, 2, 3]);

    // Each row holds a strictly increasing prefix of its order's length,
    // sentinel-padded to the table width
    for (row, &k) in multiplets.rows().into_iter().zip(order.iter()) {
        let row = row.to_vec();
        let (prefix, padding) = row.split_at(k as usize);
        assert!(prefix.windows(2).all(|w| w[0] < w[1]));
        assert!(prefix.iter().all(|&f| f >= 0));
        assert!(padding.iter().all(|&f| f == -1));
    }
}

#[test]
fn fit_clamps_minsize_to_pairs() {
    let x = generate_symbol_data(40, 3, 3, 3);
    let y = x.column(0).to_owned();

    let mut model = RedundancyMmi::from_2d(x.clone(), y.clone()).unwrap();
    let from_zero = model
        .fit(FitOptions {
            minsize: 0,
            ..binning_options()
        })
        .unwrap();

    let mut reference = RedundancyMmi::from_2d(x, y).unwrap();
    let from_two = reference
        .fit(FitOptions {
            minsize: 2,
            ..binning_options()
        })
        .unwrap();

    assert_eq!(from_zero.dim(), from_two.dim());
    for (a, b) in from_zero.iter().zip(from_two.iter()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }
    assert_eq!(model.order().unwrap(), reference.order().unwrap());
}

#[test]
fn failed_fit_leaves_no_side_tables() {
    let x = generate_symbol_data(40, 3, 3, 4);
    let y = x.column(0).to_owned();
    let mut model = RedundancyMmi::from_2d(x, y).unwrap();

    model.fit(binning_options()).unwrap();
    assert!(model.multiplets().is_some());
    assert!(model.order().is_some());
    assert!(model.keep().is_some());

    // A failing fit resets the tables rather than leaving stale ones
    let err = model.fit(FitOptions {
        method: "bogus".into(),
        ..FitOptions::default()
    });
    assert!(err.is_err());
    assert!(model.multiplets().is_none());
    assert!(model.order().is_none());
    assert!(model.keep().is_none());
}

#[test]
fn refit_replaces_previous_tables() {
    let x = generate_symbol_data(40, 4, 3, 5);
    let y = x.column(0).to_owned();
    let mut model = RedundancyMmi::from_2d(x, y).unwrap();

    model
        .fit(FitOptions {
            maxsize: Some(2),
            ..binning_options()
        })
        .unwrap();
    assert_eq!(model.order().unwrap().len(), 6);

    model
        .fit(FitOptions {
            maxsize: Some(3),
            ..binning_options()
        })
        .unwrap();
    assert_eq!(model.order().unwrap().len(), 10);
    assert_eq!(model.multiplets().unwrap().ncols(), 3);
}
