// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value label placement relative to a placed marker.
//!
//! A label sits below its marker while the marker is in the upper part of the viewport and
//! flips above it once the marker crosses `height / flip_divisor`, so labels near the bottom
//! edge are not clipped. Labels are placed independently; overlapping neighbours are not
//! moved apart.

use kurbo::{Point, Rect, Size};

use crate::mapper::PlacedMarker;

/// Which side of the marker a label is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelDirection {
    /// The label is drawn above the marker.
    Above,
    /// The label is drawn below the marker.
    Below,
}

impl LabelDirection {
    /// Returns the sign applied to the vertical offset (`-1` above, `+1` below).
    pub fn sign(self) -> f64 {
        match self {
            Self::Above => -1.0,
            Self::Below => 1.0,
        }
    }
}

/// Tunables of the label placer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelLayout {
    /// Labels flip above their marker once `marker.y > viewport_height / flip_divisor`.
    pub flip_divisor: f64,
    /// Gap between the label's half height and the marker position.
    pub padding: f64,
}

impl LabelLayout {
    /// Default flip divisor: labels flip in the lower half of the viewport.
    pub const DEFAULT_FLIP_DIVISOR: f64 = 2.0;
    /// Default label padding in pixels.
    pub const DEFAULT_PADDING: f64 = 10.0;

    /// Sets the flip divisor. Non-finite or non-positive values fall back to the default.
    pub fn with_flip_divisor(mut self, flip_divisor: f64) -> Self {
        self.flip_divisor = if flip_divisor.is_finite() && flip_divisor > 0.0 {
            flip_divisor
        } else {
            Self::DEFAULT_FLIP_DIVISOR
        };
        self
    }

    /// Sets the padding, clamped at zero.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Returns the y coordinate at which labels flip.
    pub fn threshold(&self, viewport_height: f64) -> f64 {
        viewport_height / self.flip_divisor
    }

    /// Chooses the label side for a marker at `marker_y`.
    ///
    /// The threshold itself belongs to the upper part (label below).
    pub fn direction(&self, marker_y: f64, viewport_height: f64) -> LabelDirection {
        if marker_y > self.threshold(viewport_height) {
            LabelDirection::Above
        } else {
            LabelDirection::Below
        }
    }

    /// Places a visible label of `label_size` next to `marker`.
    pub fn place(
        &self,
        marker: PlacedMarker,
        viewport_height: f64,
        label_size: Size,
    ) -> LabelDecision {
        let direction = self.direction(marker.y, viewport_height);
        let anchor = Point::new(
            marker.x + label_size.width / 2.0,
            marker.y + (label_size.height / 2.0 + self.padding) * direction.sign(),
        );
        LabelDecision {
            visible: true,
            anchor,
            direction,
        }
    }
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            flip_divisor: Self::DEFAULT_FLIP_DIVISOR,
            padding: Self::DEFAULT_PADDING,
        }
    }
}

/// Where (and whether) a value label is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelDecision {
    /// Whether the label is drawn at all.
    pub visible: bool,
    /// Centre of the label.
    pub anchor: Point,
    /// Side of the marker the label is on.
    pub direction: LabelDirection,
}

impl LabelDecision {
    /// A hidden label; the anchor is the marker position and carries no meaning.
    pub fn hidden(marker: PlacedMarker) -> Self {
        Self {
            visible: false,
            anchor: marker.origin(),
            direction: LabelDirection::Below,
        }
    }

    /// Returns the bounds of a label of `size` centred on the anchor.
    pub fn bounds(&self, size: Size) -> Rect {
        Rect::from_center_size(self.anchor, size)
    }
}

/// Places a label with the default [`LabelLayout`].
pub fn place_label(marker: PlacedMarker, viewport_height: f64, label_size: Size) -> LabelDecision {
    LabelLayout::default().place(marker, viewport_height, label_size)
}
