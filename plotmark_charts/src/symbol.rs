// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker shapes and how they are painted.

use kurbo::{BezPath, Circle, Rect, RoundedRect, Shape};

/// Path tolerance for curved symbols.
const TOLERANCE: f64 = 0.1;

/// The outline of a point marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symbol {
    /// A circle.
    #[default]
    Circle,
    /// An axis-aligned square.
    Square,
    /// A square with corners rounded to a quarter of its side.
    RoundedSquare,
}

impl Symbol {
    /// Returns a path for this symbol filling `footprint`.
    pub fn path(self, footprint: Rect) -> BezPath {
        match self {
            Self::Circle => {
                let r = 0.5 * footprint.width().min(footprint.height());
                Circle::new(footprint.center(), r).to_path(TOLERANCE)
            }
            Self::Square => footprint.to_path(TOLERANCE),
            Self::RoundedSquare => {
                let radius = 0.25 * footprint.width().min(footprint.height());
                RoundedRect::from_rect(footprint, radius).to_path(TOLERANCE)
            }
        }
    }
}

/// How a marker path is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointType {
    /// Fill only.
    Filled,
    /// Stroke only.
    #[default]
    Outline,
    /// Fill, with a stroke drawn on top.
    FilledOutline,
}

impl PointType {
    /// Whether the marker interior is filled.
    pub fn fills(self) -> bool {
        matches!(self, Self::Filled | Self::FilledOutline)
    }

    /// Whether the marker outline is stroked.
    pub fn strokes(self) -> bool {
        matches!(self, Self::Outline | Self::FilledOutline)
    }
}
