// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and ranged-line data sets.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Brush;
use peniko::color::palette::css;

use crate::domain::Domain;
use crate::style::{LineStyle, PointColour, PointStyle};

/// Read access to an ordered series of values, as needed by the points layer and legends.
pub trait PointSeries {
    /// Number of points, including suppressed ones.
    fn len(&self) -> usize;

    /// Returns `true` if the series has no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of the point at `index`.
    fn value(&self, index: usize) -> Option<f64>;

    /// Per-point paint override.
    fn point_colour(&self, index: usize) -> Option<&PointColour>;

    /// Marker style shared by every point.
    fn point_style(&self) -> &PointStyle;

    /// Line style.
    fn line_style(&self) -> &LineStyle;

    /// Legend label of the line.
    fn legend_title(&self) -> &str;

    /// Legend label and paint of a range fill, if the series has one.
    fn range_fill(&self) -> Option<(&str, &Brush)> {
        None
    }

    /// Lower and upper bound of the point at `index`, for series drawn with a band.
    fn bounds(&self, index: usize) -> Option<(f64, f64)> {
        let _ = index;
        None
    }

    /// Smallest and largest finite values the series draws.
    fn extent(&self) -> Option<(f64, f64)> {
        let d = Domain::infer((0..self.len()).filter_map(|i| self.value(i)))?;
        Some((d.min_value, d.max_value()))
    }
}

/// Computes a shared domain for several series drawn on the same axes.
///
/// Returns `None` if none of the series has a finite value.
pub fn shared_domain(series: &[&dyn PointSeries]) -> Option<Domain> {
    Domain::infer(
        series
            .iter()
            .filter_map(|s| s.extent())
            .flat_map(|(lo, hi)| [lo, hi]),
    )
}

/// A point on a line.
#[derive(Clone, Debug, Default)]
pub struct LineDataPoint {
    /// The value.
    pub value: f64,
    /// Label shown on the x axis under this point.
    pub x_axis_label: Option<String>,
    /// Longer description, e.g. for an info box.
    pub description: Option<String>,
    /// Paint override for this point's marker.
    pub point_colour: Option<PointColour>,
}

impl LineDataPoint {
    /// Creates a point with only a value.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Sets the x-axis label.
    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the marker paint override.
    pub fn with_point_colour(mut self, point_colour: PointColour) -> Self {
        self.point_colour = Some(point_colour);
        self
    }
}

/// The data and styling of a single line.
#[derive(Clone, Debug, Default)]
pub struct LineDataSet {
    /// Points in display order.
    pub points: Vec<LineDataPoint>,
    /// Legend label.
    pub legend_title: String,
    /// Marker styling.
    pub point_style: PointStyle,
    /// Line styling.
    pub style: LineStyle,
}

impl LineDataSet {
    /// Creates a data set with default styling.
    pub fn new(points: Vec<LineDataPoint>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Creates a data set from bare values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(values.into_iter().map(LineDataPoint::new).collect())
    }

    /// Sets the legend label.
    pub fn with_legend_title(mut self, legend_title: impl Into<String>) -> Self {
        self.legend_title = legend_title.into();
        self
    }

    /// Sets the marker styling.
    pub fn with_point_style(mut self, point_style: PointStyle) -> Self {
        self.point_style = point_style;
        self
    }

    /// Sets the line styling.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }
}

impl PointSeries for LineDataSet {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|p| p.value)
    }

    fn point_colour(&self, index: usize) -> Option<&PointColour> {
        self.points.get(index)?.point_colour.as_ref()
    }

    fn point_style(&self) -> &PointStyle {
        &self.point_style
    }

    fn line_style(&self) -> &LineStyle {
        &self.style
    }

    fn legend_title(&self) -> &str {
        &self.legend_title
    }
}

/// A point on a line with an upper and lower bound drawn as a band.
#[derive(Clone, Debug, Default)]
pub struct RangedLineDataPoint {
    /// The value on the line.
    pub value: f64,
    /// Top of the band.
    pub upper_value: f64,
    /// Bottom of the band.
    pub lower_value: f64,
    /// Label shown on the x axis under this point.
    pub x_axis_label: Option<String>,
    /// Longer description, e.g. for an info box.
    pub description: Option<String>,
    /// Paint override for this point's marker.
    pub point_colour: Option<PointColour>,
}

impl RangedLineDataPoint {
    /// Creates a point with a value and its band.
    pub fn new(value: f64, upper_value: f64, lower_value: f64) -> Self {
        Self {
            value,
            upper_value,
            lower_value,
            ..Self::default()
        }
    }

    /// Sets the x-axis label.
    pub fn with_x_axis_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis_label = Some(label.into());
        self
    }
}

/// A line with a band around it.
#[derive(Clone, Debug)]
pub struct RangedLineDataSet {
    /// Points in display order.
    pub points: Vec<RangedLineDataPoint>,
    /// Legend label of the line.
    pub legend_title: String,
    /// Legend label of the band.
    pub legend_fill_title: String,
    /// Marker styling.
    pub point_style: PointStyle,
    /// Line styling.
    pub style: LineStyle,
    /// Band paint.
    pub range_fill: Brush,
}

impl RangedLineDataSet {
    /// Creates a data set with default styling and a light grey band.
    pub fn new(points: Vec<RangedLineDataPoint>) -> Self {
        Self {
            points,
            legend_title: String::new(),
            legend_fill_title: String::new(),
            point_style: PointStyle::new(),
            style: LineStyle::new(),
            range_fill: css::LIGHT_GRAY.into(),
        }
    }

    /// Sets the legend labels of the line and the band.
    pub fn with_legend_titles(
        mut self,
        legend_title: impl Into<String>,
        legend_fill_title: impl Into<String>,
    ) -> Self {
        self.legend_title = legend_title.into();
        self.legend_fill_title = legend_fill_title.into();
        self
    }

    /// Sets the marker styling.
    pub fn with_point_style(mut self, point_style: PointStyle) -> Self {
        self.point_style = point_style;
        self
    }

    /// Sets the line styling.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the band paint.
    pub fn with_range_fill(mut self, range_fill: impl Into<Brush>) -> Self {
        self.range_fill = range_fill.into();
        self
    }
}

impl PointSeries for RangedLineDataSet {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn value(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|p| p.value)
    }

    fn point_colour(&self, index: usize) -> Option<&PointColour> {
        self.points.get(index)?.point_colour.as_ref()
    }

    fn point_style(&self) -> &PointStyle {
        &self.point_style
    }

    fn line_style(&self) -> &LineStyle {
        &self.style
    }

    fn legend_title(&self) -> &str {
        &self.legend_title
    }

    fn range_fill(&self) -> Option<(&str, &Brush)> {
        Some((&self.legend_fill_title, &self.range_fill))
    }

    fn bounds(&self, index: usize) -> Option<(f64, f64)> {
        self.points.get(index).map(|p| (p.lower_value, p.upper_value))
    }

    /// The band is part of what is drawn, so it widens the extent.
    fn extent(&self) -> Option<(f64, f64)> {
        let d = Domain::infer(
            self.points
                .iter()
                .flat_map(|p| [p.value, p.upper_value, p.lower_value]),
        )?;
        Some((d.min_value, d.max_value()))
    }
}
