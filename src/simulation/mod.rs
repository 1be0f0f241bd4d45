// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ground-truth simulators for higher-order interactions.

pub mod gauss;

pub use gauss::{
    cov_order_3, cov_order_4, simulate_hoi_gauss, simulate_hoi_gauss_target, TripletCharacter,
};
