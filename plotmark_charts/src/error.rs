// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by the point placement pipeline.

/// Precondition failures of a placement pass.
///
/// Every variant is local to a single render pass: callers skip drawing the
/// affected series for that frame and try again on the next one.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PlacementError {
    /// The viewport has a non-positive (or NaN) dimension.
    #[error("viewport must have a positive size, got {width}x{height}")]
    InvalidViewport {
        /// Viewport width as supplied.
        width: f64,
        /// Viewport height as supplied.
        height: f64,
    },
    /// The mapper needs at least two points to compute a horizontal step.
    #[error("mapping a series needs at least two points, got {count}")]
    InsufficientPoints {
        /// Number of points in the series.
        count: usize,
    },
    /// The domain range is zero, negative or not finite.
    #[error("domain range must be positive and finite, got {range}")]
    DegenerateDomain {
        /// Domain range as supplied.
        range: f64,
    },
}
