// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zero suppression.
//!
//! Series are often padded with leading or trailing zeros that only anchor the line's baseline.
//! A series that sets `ignore_zero` hides the marker and label of those points. Suppressed points
//! keep their slot, so the spacing of the remaining points does not change.

/// Returns whether the marker and label of a point with `value` are drawn.
///
/// Both `0.0` and `-0.0` count as zero.
pub fn should_render(value: f64, ignore_zero: bool) -> bool {
    !ignore_zero || value != 0.0
}
