// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The active selection of a render pass.
//!
//! Touch or hover handling lives with the host. It reports the selected point by building a new
//! [`ActiveSelection`] for the next pass; markers, labels and legend cells derive their state from
//! it instead of mutating each other.

/// The point the user is currently inspecting, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveSelection {
    /// Nothing is selected.
    #[default]
    None,
    /// A single point is selected.
    Point {
        /// Index of the series within the chart.
        series: usize,
        /// Index of the point within the series.
        index: usize,
    },
}

impl ActiveSelection {
    /// Returns whether the value label of `index` in `series` may be shown.
    ///
    /// With nothing selected every label may be shown; otherwise only the selected one.
    pub fn allows_label(self, series: usize, index: usize) -> bool {
        match self {
            Self::None => true,
            Self::Point {
                series: s,
                index: i,
            } => s == series && i == index,
        }
    }

    /// Returns the selected series, if any.
    pub fn series(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Point { series, .. } => Some(series),
        }
    }
}
