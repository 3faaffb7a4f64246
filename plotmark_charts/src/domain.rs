// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value domains and pixel viewports.

use kurbo::{Point, Rect, Size};

use crate::error::PlacementError;

/// The value span a series is drawn against: `min_value ..= min_value + range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    /// Smallest value of the domain; maps to the bottom edge.
    pub min_value: f64,
    /// `max - min`. Must be positive for mapping.
    pub range: f64,
}

impl Domain {
    /// Creates a domain starting at `min_value` spanning `range`.
    pub fn new(min_value: f64, range: f64) -> Self {
        Self { min_value, range }
    }

    /// Creates a domain from its bounds.
    pub fn from_bounds(min_value: f64, max_value: f64) -> Self {
        Self::new(min_value, max_value - min_value)
    }

    /// Infers the domain of a set of values.
    ///
    /// Non-finite values are ignored. Returns `None` if no finite values are present. The
    /// result may be degenerate (a constant series); see [`Domain::non_degenerate`].
    pub fn infer(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some(Self::from_bounds(min, max))
        } else {
            None
        }
    }

    /// Returns the largest value of the domain.
    pub fn max_value(&self) -> f64 {
        self.min_value + self.range
    }

    /// Returns `true` if the range is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.range.is_finite() && self.range > 0.0)
    }

    /// Checks the domain can be used for mapping.
    pub fn validate(self) -> Result<Self, PlacementError> {
        if self.is_degenerate() {
            return Err(PlacementError::DegenerateDomain { range: self.range });
        }
        Ok(self)
    }

    /// Widens a degenerate domain to a unit range centred on `min_value`.
    ///
    /// A constant series then maps to the vertical middle of the viewport. Non-degenerate
    /// domains are returned unchanged.
    pub fn non_degenerate(self) -> Self {
        if self.is_degenerate() {
            Self::new(self.min_value - 0.5, 1.0)
        } else {
            self
        }
    }
}

/// The pixel area a series renders into, with its origin at the top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport. Use [`Viewport::validate`] before mapping into it.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Checks both dimensions are positive.
    pub fn validate(self) -> Result<Self, PlacementError> {
        if self.width > 0.0 && self.height > 0.0 {
            Ok(self)
        } else {
            Err(PlacementError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns the centre point.
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// Returns the viewport as a rectangle at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn infer_skips_non_finite_values() {
        let d = Domain::infer([3.0, f64::NAN, -2.0, f64::INFINITY, 8.0]).unwrap();
        assert_eq!(d.min_value, -2.0);
        assert_eq!(d.range, 10.0);
        assert_eq!(d.max_value(), 8.0);
    }

    #[test]
    fn infer_of_nothing_is_none() {
        assert!(Domain::infer(core::iter::empty()).is_none());
        assert!(Domain::infer([f64::NAN]).is_none());
    }

    #[test]
    fn constant_series_is_degenerate_until_widened() {
        let d = Domain::infer([4.0, 4.0, 4.0]).unwrap();
        assert_eq!(
            d.validate(),
            Err(PlacementError::DegenerateDomain { range: 0.0 })
        );

        let wide = d.non_degenerate();
        assert_eq!(wide.min_value, 3.5);
        assert_eq!(wide.range, 1.0);
        assert!(wide.validate().is_ok());
    }

    #[test]
    fn viewport_rejects_empty_and_nan_sizes() {
        assert!(Viewport::new(10.0, 0.0).validate().is_err());
        assert!(Viewport::new(-1.0, 10.0).validate().is_err());
        assert!(Viewport::new(f64::NAN, 10.0).validate().is_err());
        assert!(Viewport::new(1.0, 1.0).validate().is_ok());
    }
}
