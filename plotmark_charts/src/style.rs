// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling for lines and their point markers.

use peniko::Brush;
use peniko::color::palette::css;

use crate::format::{ValueFormat, ValueUnit};
use crate::symbol::{PointType, Symbol};

/// Appearance of the point markers placed on a line.
#[derive(Clone, Debug)]
pub struct PointStyle {
    /// Side length of the marker footprint.
    pub point_size: f64,
    /// Outline paint.
    pub border: Brush,
    /// Interior paint; also used for the value label text.
    pub fill: Brush,
    /// Outline stroke width.
    pub line_width: f64,
    /// Whether the marker is filled, outlined or both.
    pub point_type: PointType,
    /// Marker shape.
    pub symbol: Symbol,
    /// Whether each marker shows its value.
    pub show_value: bool,
    /// Font size of the value labels.
    pub value_font_size: f64,
    /// Number format of the value labels.
    pub value_format: ValueFormat,
    /// Unit attached to the value labels.
    pub value_unit: ValueUnit,
}

impl PointStyle {
    /// Creates the default style: 9px outlined circles, value labels off.
    pub fn new() -> Self {
        Self {
            point_size: 9.0,
            border: css::BLACK.into(),
            fill: css::GRAY.into(),
            line_width: 3.0,
            point_type: PointType::Outline,
            symbol: Symbol::Circle,
            show_value: false,
            value_font_size: 8.0,
            value_format: ValueFormat::Integer,
            value_unit: ValueUnit::None,
        }
    }

    /// Sets the marker size, clamped at zero.
    pub fn with_point_size(mut self, point_size: f64) -> Self {
        self.point_size = point_size.max(0.0);
        self
    }

    /// Sets the outline paint.
    pub fn with_border(mut self, border: impl Into<Brush>) -> Self {
        self.border = border.into();
        self
    }

    /// Sets the interior paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline stroke width, clamped at zero.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width.max(0.0);
        self
    }

    /// Sets how the marker is painted.
    pub fn with_point_type(mut self, point_type: PointType) -> Self {
        self.point_type = point_type;
        self
    }

    /// Sets the marker shape.
    pub fn with_symbol(mut self, symbol: Symbol) -> Self {
        self.symbol = symbol;
        self
    }

    /// Enables or disables value labels.
    pub fn with_show_value(mut self, show_value: bool) -> Self {
        self.show_value = show_value;
        self
    }

    /// Sets the value label font size.
    pub fn with_value_font_size(mut self, value_font_size: f64) -> Self {
        self.value_font_size = value_font_size;
        self
    }

    /// Sets the value label number format.
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    /// Sets the value label unit.
    pub fn with_value_unit(mut self, value_unit: ValueUnit) -> Self {
        self.value_unit = value_unit;
        self
    }
}

impl Default for PointStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-point override of the marker paints.
#[derive(Clone, Debug)]
pub struct PointColour {
    /// Outline paint.
    pub border: Brush,
    /// Interior paint.
    pub fill: Brush,
}

impl PointColour {
    /// Creates an override.
    pub fn new(border: impl Into<Brush>, fill: impl Into<Brush>) -> Self {
        Self {
            border: border.into(),
            fill: fill.into(),
        }
    }
}

/// Appearance of the line itself.
#[derive(Clone, Debug)]
pub struct LineStyle {
    /// Line paint; also the legend swatch.
    pub colour: Brush,
    /// Stroke width.
    pub line_width: f64,
    /// Hide markers and labels of zero-valued points.
    pub ignore_zero: bool,
}

impl LineStyle {
    /// Creates a 2px black line that draws zero values.
    pub fn new() -> Self {
        Self {
            colour: css::BLACK.into(),
            line_width: 2.0,
            ignore_zero: false,
        }
    }

    /// Sets the line paint.
    pub fn with_colour(mut self, colour: impl Into<Brush>) -> Self {
        self.colour = colour.into();
        self
    }

    /// Sets the stroke width, clamped at zero.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width.max(0.0);
        self
    }

    /// Sets zero suppression.
    pub fn with_ignore_zero(mut self, ignore_zero: bool) -> Self {
        self.ignore_zero = ignore_zero;
        self
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new()
    }
}
