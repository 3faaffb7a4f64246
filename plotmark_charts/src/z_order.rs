// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for generated geometry.
//!
//! Renderers should sort by `(z_index, insertion order)` for a deterministic tie-break.

/// Range bands sit underneath everything else in the plot.
pub const RANGE_BANDS: i32 = 0;

/// Series lines.
pub const SERIES_LINES: i32 = 10;

/// Point markers drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;

/// Value labels float above everything else in the plot.
pub const VALUE_LABELS: i32 = 100;
