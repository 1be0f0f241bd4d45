// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use hoimeasure::estimators::redundancy::{FitOptions, RedundancyMmi};
use ndarray::{Array2, Axis};

use crate::test_helpers::{generate_symbol_data, stack_channels};

fn binning_options() -> FitOptions {
    FitOptions {
        method: "binning".into(),
        ..FitOptions::default()
    }
}

fn target_of(channel: &Array2<f64>) -> Array2<f64> {
    let y = channel.column(0).to_owned();
    y.insert_axis(Axis(1))
}

#[test]
fn channel_columns_match_single_channel_fits() {
    let a = generate_symbol_data(60, 3, 3, 61);
    let b = generate_symbol_data(60, 3, 4, 63);

    let data = stack_channels(&[a.clone(), b.clone()]);
    let target = ndarray::concatenate(Axis(1), &[target_of(&a).view(), target_of(&b).view()])
        .unwrap();

    let mut model = RedundancyMmi::new(data, target).unwrap();
    let hoi = model.fit(binning_options()).unwrap();
    assert_eq!(hoi.dim(), (4, 2));

    // Each column equals the fit of that channel alone
    let mut model_a = RedundancyMmi::from_2d(a.clone(), a.column(0).to_owned()).unwrap();
    let hoi_a = model_a.fit(binning_options()).unwrap();
    let mut model_b = RedundancyMmi::from_2d(b.clone(), b.column(0).to_owned()).unwrap();
    let hoi_b = model_b.fit(binning_options()).unwrap();

    for r in 0..4 {
        assert_abs_diff_eq!(hoi[(r, 0)], hoi_a[(r, 0)], epsilon = 1e-12);
        assert_abs_diff_eq!(hoi[(r, 1)], hoi_b[(r, 0)], epsilon = 1e-12);
    }
}

#[test]
fn swapping_channels_swaps_output_columns() {
    let a = generate_symbol_data(50, 3, 3, 65);
    let b = generate_symbol_data(50, 3, 3, 67);

    let forward = stack_channels(&[a.clone(), b.clone()]);
    let backward = stack_channels(&[b.clone(), a.clone()]);
    let target_fwd =
        ndarray::concatenate(Axis(1), &[target_of(&a).view(), target_of(&b).view()]).unwrap();
    let target_bwd =
        ndarray::concatenate(Axis(1), &[target_of(&b).view(), target_of(&a).view()]).unwrap();

    let mut fwd = RedundancyMmi::new(forward, target_fwd).unwrap();
    let hoi_fwd = fwd.fit(binning_options()).unwrap();
    let mut bwd = RedundancyMmi::new(backward, target_bwd).unwrap();
    let hoi_bwd = bwd.fit(binning_options()).unwrap();

    for r in 0..hoi_fwd.nrows() {
        assert_abs_diff_eq!(hoi_fwd[(r, 0)], hoi_bwd[(r, 1)], epsilon = 1e-12);
        assert_abs_diff_eq!(hoi_fwd[(r, 1)], hoi_bwd[(r, 0)], epsilon = 1e-12);
    }
}
