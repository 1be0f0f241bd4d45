// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use hoimeasure::errors::HoiError;
use hoimeasure::estimators::entropy::{
    EntropyConfig, EntropyMethod, get_entropy, prepare_for_entropy,
};
use ndarray::Array3;

use crate::test_helpers::generate_gaussian_data;

#[test]
fn method_names_round_trip() {
    for name in ["gcmi", "binning", "knn"] {
        let method = EntropyMethod::from_name(name).unwrap();
        assert_eq!(method.name(), name);
        assert_eq!(method.to_string(), name);
    }
}

#[test]
fn unknown_method_name_is_preserved_in_the_error() {
    let err = EntropyMethod::from_name("bogus").unwrap_err();
    match err {
        HoiError::UnknownBackend { name } => assert_eq!(name, "bogus"),
        other => panic!("expected UnknownBackend, got {other:?}"),
    }
    // Case matters, method names are exact
    assert!(EntropyMethod::from_name("GCMI").is_err());
    assert!(EntropyMethod::from_name("").is_err());
}

#[test]
fn default_config_values() {
    let config = EntropyConfig::default();
    assert!(config.biascorrect);
    assert!(config.demean);
    assert_eq!(config.knn_k, 3);
}

#[test]
fn factory_builds_every_method() {
    let config = EntropyConfig::default();
    let batch = Array3::from_shape_vec((6, 1, 1), vec![0.0, 1.0, 2.0, 0.0, 1.0, 2.0]).unwrap();
    for method in [EntropyMethod::Gcmi, EntropyMethod::Binning, EntropyMethod::Knn] {
        let backend = get_entropy(method, &config);
        let h = backend.entropy(batch.view());
        assert_eq!(h.len(), 1);
        assert!(h[0].is_finite(), "{method} entropy should be finite here");
    }
}

#[test]
fn binning_preparation_rejects_continuous_data() {
    let batch = Array3::from_shape_vec((4, 1, 1), vec![0.0, 0.5, 1.0, 1.5]).unwrap();
    let err = prepare_for_entropy(batch.view(), EntropyMethod::Binning).unwrap_err();
    assert!(matches!(err, HoiError::InvalidData { .. }));
}

#[test]
fn binning_preparation_accepts_integer_valued_floats() {
    let batch = Array3::from_shape_vec((4, 1, 1), vec![0.0, 2.0, -3.0, 7.0]).unwrap();
    let prepared = prepare_for_entropy(batch.view(), EntropyMethod::Binning).unwrap();
    assert_eq!(prepared, batch);
}

#[test]
fn knn_preparation_passes_data_through() {
    let data = generate_gaussian_data(30, 2, 0.0, 1.0, 5).insert_axis(ndarray::Axis(2));
    let prepared = prepare_for_entropy(data.view(), EntropyMethod::Knn).unwrap();
    assert_eq!(prepared, data);
}

#[test]
fn gcmi_preparation_rank_normalizes() {
    let data = generate_gaussian_data(60, 1, 50.0, 9.0, 73).insert_axis(ndarray::Axis(2));
    let prepared = prepare_for_entropy(data.view(), EntropyMethod::Gcmi).unwrap();
    // Whatever the input location and scale, margins come out standard
    let column = prepared.slice(ndarray::s![.., 0, 0]);
    assert_abs_diff_eq!(column.mean().unwrap(), 0.0, epsilon = 1e-8);
    assert!(column.iter().all(|v| v.is_finite()));
    assert!(column.iter().cloned().fold(f64::NEG_INFINITY, f64::max) < 3.0);
}
