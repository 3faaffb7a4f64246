// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping of `(index, value)` pairs into viewport pixels.
//!
//! Points are spread evenly along x: the first sits on the left edge and the last on the right
//! edge. Values grow upward while screen y grows downward, so the domain minimum maps to the
//! bottom edge and the domain maximum to the top edge. Both coordinates are shifted by half the
//! marker size so they address the top-left corner of the marker footprint.

use kurbo::{Point, Rect};

use crate::domain::{Domain, Viewport};
use crate::error::PlacementError;

/// The top-left corner of a marker footprint, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedMarker {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position (grows downward).
    pub y: f64,
}

impl PlacedMarker {
    /// Returns the position as a point.
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the centre of a marker of `point_size`.
    pub fn center(self, point_size: f64) -> Point {
        let half = point_size * 0.5;
        Point::new(self.x + half, self.y + half)
    }

    /// Returns the square footprint of a marker of `point_size`.
    pub fn footprint(self, point_size: f64) -> Rect {
        Rect::new(self.x, self.y, self.x + point_size, self.y + point_size)
    }
}

/// A validated mapping for one series in one viewport.
///
/// Construction checks every precondition once; [`PointMapper::map`] is then infallible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMapper {
    domain: Domain,
    viewport: Viewport,
    step_x: f64,
    step_y: f64,
    offset: f64,
}

impl PointMapper {
    /// Creates a mapper for `count` evenly spaced points.
    ///
    /// Fails with [`PlacementError::InvalidViewport`], [`PlacementError::InsufficientPoints`] or
    /// [`PlacementError::DegenerateDomain`], checked in that order.
    pub fn new(
        count: usize,
        domain: Domain,
        viewport: Viewport,
        point_size: f64,
    ) -> Result<Self, PlacementError> {
        let viewport = viewport.validate()?;
        if count < 2 {
            return Err(PlacementError::InsufficientPoints { count });
        }
        let domain = domain.validate()?;
        Ok(Self {
            domain,
            viewport,
            step_x: viewport.width / (count - 1) as f64,
            step_y: viewport.height / domain.range,
            offset: point_size / 2.0,
        })
    }

    /// Horizontal distance between neighbouring points.
    pub fn step_x(&self) -> f64 {
        self.step_x
    }

    /// Pixels per domain unit.
    pub fn step_y(&self) -> f64 {
        self.step_y
    }

    /// Maps the point at `index` with `value`.
    ///
    /// Values outside the domain map outside the viewport; nothing is clamped.
    pub fn map(&self, index: usize, value: f64) -> PlacedMarker {
        let x = index as f64 * self.step_x - self.offset;
        let y = (-(value - self.domain.min_value) * self.step_y + self.viewport.height) - self.offset;
        PlacedMarker { x, y }
    }
}

/// Maps a single value into viewport pixels.
///
/// This is the one-shot form of [`PointMapper`].
pub fn map_to_viewport(
    value: f64,
    index: usize,
    count: usize,
    min_value: f64,
    range: f64,
    width: f64,
    height: f64,
    point_size: f64,
) -> Result<PlacedMarker, PlacementError> {
    let mapper = PointMapper::new(
        count,
        Domain::new(min_value, range),
        Viewport::new(width, height),
        point_size,
    )?;
    Ok(mapper.map(index, value))
}
