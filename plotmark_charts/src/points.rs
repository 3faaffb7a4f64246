// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point markers and value labels for one series.
//!
//! Layout runs in two explicit passes so label sizes never lag a frame behind:
//! - **Measure**: format and measure the text of every label that will be shown.
//! - **Arrange**: map every point, then place each measured label next to its marker.
//!
//! Everything is recomputed from the series, the viewport and the active selection on each pass.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, RoundedRect, Size};
use peniko::Brush;
use peniko::color::palette::css;
use smallvec::SmallVec;

use crate::data_set::PointSeries;
use crate::domain::{Domain, Viewport};
use crate::error::PlacementError;
use crate::label::{LabelDecision, LabelLayout};
use crate::mapper::{PlacedMarker, PointMapper};
use crate::measure::TextMeasurer;
use crate::selection::ActiveSelection;
use crate::z_order;
use crate::zero::should_render;

/// One paint operation applied to a marker path.
#[derive(Clone, Debug)]
pub enum GlyphPaint {
    /// Fill the path.
    Fill(Brush),
    /// Stroke the path.
    Stroke {
        /// Stroke paint.
        brush: Brush,
        /// Stroke width.
        width: f64,
    },
}

/// A positioned point marker.
#[derive(Clone, Debug)]
pub struct PointGlyph {
    /// Index of the point within its series.
    pub index: usize,
    /// The point's value.
    pub value: f64,
    /// Top-left of the marker footprint.
    pub marker: PlacedMarker,
    /// Marker outline in viewport coordinates.
    pub path: BezPath,
    /// Paint operations, in drawing order.
    pub paints: SmallVec<[GlyphPaint; 2]>,
    /// Rendering order hint.
    pub z_index: i32,
}

/// Output of the measure pass for one label.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredLabel {
    /// Index of the point within its series.
    pub index: usize,
    /// Label text.
    pub text: String,
    /// Measured text size.
    pub size: Size,
}

/// A positioned value label.
#[derive(Clone, Debug)]
pub struct ValueLabel {
    /// Index of the point within its series.
    pub index: usize,
    /// Label text.
    pub text: String,
    /// Measured text size.
    pub size: Size,
    /// Font size the text was measured at.
    pub font_size: f64,
    /// Where the label goes.
    pub placement: LabelDecision,
    /// Text paint.
    pub text_fill: Brush,
    /// Capsule background paint.
    pub background: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl ValueLabel {
    /// Returns the capsule drawn behind the text.
    pub fn bubble(&self) -> RoundedRect {
        RoundedRect::from_rect(self.placement.bounds(self.size), 0.5 * self.size.height)
    }
}

/// The filled band between the lower and upper bounds of a ranged series.
#[derive(Clone, Debug)]
pub struct RangeBand {
    /// Closed outline: along the upper bounds left to right, then back along the lower bounds.
    pub path: BezPath,
    /// Band paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

/// Everything the points layer produces for one series.
#[derive(Clone, Debug, Default)]
pub struct PointsFrame {
    /// Line vertices at the marker centres, in series order.
    ///
    /// Zero-suppressed points are included, so padded series still reach their baseline.
    /// Non-finite values are not.
    pub line: Vec<Point>,
    /// Range band, for series that have one.
    pub band: Option<RangeBand>,
    /// Markers, in series order.
    pub glyphs: Vec<PointGlyph>,
    /// Visible labels, in series order.
    pub labels: Vec<ValueLabel>,
}

/// Lays out point markers and value labels for one series.
#[derive(Clone, Debug)]
pub struct PointsLayer {
    /// Index of the series within the chart, matched against the selection.
    pub series_index: usize,
    /// Domain the series is drawn against, usually shared by every series of a chart.
    pub domain: Domain,
    /// Label placement tunables.
    pub label_layout: LabelLayout,
    /// The point currently inspected by the user.
    pub selection: ActiveSelection,
    /// Capsule paint behind value labels.
    pub label_background: Brush,
}

impl PointsLayer {
    /// Creates a layer with default label placement and nothing selected.
    pub fn new(series_index: usize, domain: Domain) -> Self {
        Self {
            series_index,
            domain,
            label_layout: LabelLayout::default(),
            selection: ActiveSelection::None,
            label_background: css::WHITE.into(),
        }
    }

    /// Sets the label placement tunables.
    pub fn with_label_layout(mut self, label_layout: LabelLayout) -> Self {
        self.label_layout = label_layout;
        self
    }

    /// Sets the active selection.
    pub fn with_selection(mut self, selection: ActiveSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the label capsule paint.
    pub fn with_label_background(mut self, label_background: impl Into<Brush>) -> Self {
        self.label_background = label_background.into();
        self
    }

    /// Returns whether the point at `index` gets a value label this pass.
    pub fn shows_label(&self, series: &dyn PointSeries, index: usize) -> bool {
        if !series.point_style().show_value || series.len() < 2 {
            return false;
        }
        let Some(value) = series.value(index) else {
            return false;
        };
        value.is_finite()
            && should_render(value, series.line_style().ignore_zero)
            && self.selection.allows_label(self.series_index, index)
    }

    /// Measure pass: formats and measures every label that will be shown.
    pub fn measure_labels(
        &self,
        series: &dyn PointSeries,
        measurer: &impl TextMeasurer,
    ) -> Vec<MeasuredLabel> {
        let style = series.point_style();
        (0..series.len())
            .filter(|&index| self.shows_label(series, index))
            .filter_map(|index| {
                let value = series.value(index)?;
                let text = style
                    .value_format
                    .format_with_unit(value, &style.value_unit);
                let size = measurer.measure(&text, style.value_font_size);
                Some(MeasuredLabel { index, text, size })
            })
            .collect()
    }

    /// Decides where the label of `index` goes, given its measured size.
    ///
    /// The label is hidden if it was not measured or the point does not show a label.
    pub fn decide_label(
        &self,
        series: &dyn PointSeries,
        index: usize,
        marker: PlacedMarker,
        viewport: Viewport,
        size: Option<Size>,
    ) -> LabelDecision {
        match size {
            Some(size) if self.shows_label(series, index) => {
                self.label_layout.place(marker, viewport.height, size)
            }
            _ => LabelDecision::hidden(marker),
        }
    }

    /// Arrange pass: places markers and the labels measured by [`PointsLayer::measure_labels`].
    ///
    /// An empty series yields an empty frame. A single point is drawn at the viewport centre
    /// without a label. Longer series go through [`PointMapper`], whose precondition failures
    /// are returned.
    ///
    /// `measured` may be in any order; points without a measurement get no label.
    pub fn arrange(
        &self,
        series: &dyn PointSeries,
        viewport: Viewport,
        measured: &[MeasuredLabel],
    ) -> Result<PointsFrame, PlacementError> {
        let viewport = viewport
            .validate()
            .inspect_err(|err| tracing::debug!(%err, "points layer skipped"))?;
        let count = series.len();
        let style = series.point_style();
        let ignore_zero = series.line_style().ignore_zero;
        let offset = style.point_size / 2.0;

        let mapper = if count >= 2 {
            Some(
                PointMapper::new(count, self.domain, viewport, style.point_size)
                    .inspect_err(|err| tracing::debug!(%err, "points layer skipped"))?,
            )
        } else {
            None
        };

        let mut frame = PointsFrame::default();
        for index in 0..count {
            let Some(value) = series.value(index) else {
                continue;
            };
            if !value.is_finite() {
                tracing::debug!(index, value, "skipping non-finite point");
                continue;
            }

            let marker = match &mapper {
                Some(mapper) => mapper.map(index, value),
                None => {
                    let c = viewport.center();
                    PlacedMarker {
                        x: c.x - offset,
                        y: c.y - offset,
                    }
                }
            };
            frame.line.push(marker.center(style.point_size));
            if !should_render(value, ignore_zero) {
                continue;
            }
            frame.glyphs.push(self.glyph(series, index, value, marker));

            let label = measured.iter().find(|m| m.index == index);
            let placement =
                self.decide_label(series, index, marker, viewport, label.map(|l| l.size));
            if let (true, Some(label)) = (placement.visible, label) {
                tracing::trace!(
                    index,
                    x = placement.anchor.x,
                    y = placement.anchor.y,
                    direction = ?placement.direction,
                    "placed value label"
                );
                frame.labels.push(ValueLabel {
                    index,
                    text: label.text.clone(),
                    size: label.size,
                    font_size: style.value_font_size,
                    placement,
                    text_fill: style.fill.clone(),
                    background: self.label_background.clone(),
                    z_index: z_order::VALUE_LABELS,
                });
            }
        }
        if let Some(mapper) = &mapper {
            frame.band = band(series, mapper, style.point_size);
        }
        Ok(frame)
    }

    /// Runs the measure and arrange passes.
    pub fn layout(
        &self,
        series: &dyn PointSeries,
        viewport: Viewport,
        measurer: &impl TextMeasurer,
    ) -> Result<PointsFrame, PlacementError> {
        let measured = self.measure_labels(series, measurer);
        self.arrange(series, viewport, &measured)
    }

    fn glyph(
        &self,
        series: &dyn PointSeries,
        index: usize,
        value: f64,
        marker: PlacedMarker,
    ) -> PointGlyph {
        let style = series.point_style();
        let colour = series.point_colour(index);
        let fill = colour.map_or(&style.fill, |c| &c.fill);
        let border = colour.map_or(&style.border, |c| &c.border);

        let mut paints = SmallVec::new();
        if style.point_type.fills() {
            paints.push(GlyphPaint::Fill(fill.clone()));
        }
        if style.point_type.strokes() {
            paints.push(GlyphPaint::Stroke {
                brush: border.clone(),
                width: style.line_width,
            });
        }

        PointGlyph {
            index,
            value,
            marker,
            path: style.symbol.path(marker.footprint(style.point_size)),
            paints,
            z_index: z_order::SERIES_POINTS,
        }
    }
}

/// Outlines the band of a ranged series through the marker centres of its bounds.
///
/// Points with a non-finite bound are left out; fewer than two usable points give no band.
fn band(series: &dyn PointSeries, mapper: &PointMapper, point_size: f64) -> Option<RangeBand> {
    let (_, fill) = series.range_fill()?;
    let spans: Vec<(Point, Point)> = (0..series.len())
        .filter_map(|index| {
            let (lower, upper) = series.bounds(index)?;
            if !(lower.is_finite() && upper.is_finite()) {
                tracing::debug!(index, lower, upper, "skipping non-finite band bound");
                return None;
            }
            Some((
                mapper.map(index, upper).center(point_size),
                mapper.map(index, lower).center(point_size),
            ))
        })
        .collect();
    if spans.len() < 2 {
        return None;
    }

    let mut path = BezPath::new();
    path.move_to(spans[0].0);
    for (upper, _) in &spans[1..] {
        path.line_to(*upper);
    }
    for (_, lower) in spans.iter().rev() {
        path.line_to(*lower);
    }
    path.close_path();

    Some(RangeBand {
        path,
        fill: fill.clone(),
        z_index: z_order::RANGE_BANDS,
    })
}
