// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

static ORDER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress display over the full multiplet sweep, messaged per order.
///
/// A hidden bar is used when `verbose` is off, so call sites stay
/// unconditional.
pub struct OrderProgress {
    bar: ProgressBar,
}

impl OrderProgress {
    pub fn new(total_multiplets: usize, verbose: bool) -> Self {
        let bar = if verbose {
            ProgressBar::new(total_multiplets as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(ORDER_STYLE.clone());
        Self { bar }
    }

    pub fn start_order(&self, order: usize) {
        self.bar.set_message(format!("RedMMI order {order}"));
    }

    pub fn inc(&self, n: usize) {
        self.bar.inc(n as u64);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
