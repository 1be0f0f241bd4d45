// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView3};

/// Function-shaped contract every entropy backend satisfies.
///
/// A backend receives one batch shaped `(samples, selected_features,
/// channels)` and returns one entropy estimate per channel, in nats. The
/// channel axis indexes independent repetitions of the same estimation;
/// backends must treat channels independently so that reordering the channel
/// axis of the input reorders the output identically.
///
/// Backend-specific settings (neighbor count, bias correction, ...) are
/// fixed at construction through
/// [`EntropyConfig`](crate::estimators::entropy::EntropyConfig); the
/// estimation core never interprets them.
pub trait EntropyBackend {
    /// Entropy per channel of the given batch, in nats.
    fn entropy(&self, batch: ArrayView3<'_, f64>) -> Array1<f64>;
}
