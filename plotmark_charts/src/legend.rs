// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legends: a grid of swatches with text labels, usually placed under the plot.
//!
//! Use this with a measure/arrange layout pass:
//! - Measure: call [`LegendGrid::measure`] to get a desired size.
//! - Arrange: call [`LegendGrid::arrange`] once you know the origin.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Brush;

use crate::data_set::PointSeries;
use crate::measure::TextMeasurer;
use crate::selection::ActiveSelection;

/// What a legend swatch stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegendKind {
    /// A line; drawn as a thin bar.
    Line,
    /// The band of a ranged line; drawn as a block.
    RangeFill,
}

/// One legend row item.
#[derive(Clone, Debug)]
pub struct LegendEntry {
    /// The label shown next to the swatch.
    pub label: String,
    /// The swatch paint.
    pub fill: Brush,
    /// Lower values come first.
    pub priority: u8,
    /// What the swatch stands for.
    pub kind: LegendKind,
    /// Index of the series the entry belongs to.
    pub series: usize,
}

/// Builds legend entries for the series of a chart.
///
/// Lines come first, in series order, followed by the bands of ranged series.
pub fn legend_entries(series: &[&dyn PointSeries]) -> Vec<LegendEntry> {
    let mut out = Vec::new();
    for (i, s) in series.iter().enumerate() {
        out.push(LegendEntry {
            label: String::from(s.legend_title()),
            fill: s.line_style().colour.clone(),
            priority: 1,
            kind: LegendKind::Line,
            series: i,
        });
        if let Some((title, fill)) = s.range_fill() {
            out.push(LegendEntry {
                label: String::from(title),
                fill: fill.clone(),
                priority: 2,
                kind: LegendKind::RangeFill,
                series: i,
            });
        }
    }
    out.sort_by_key(|e| e.priority);
    out
}

/// A positioned legend item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendCell {
    /// Index into the entries passed to [`LegendGrid::arrange`].
    pub entry: usize,
    /// Swatch rectangle.
    pub swatch: Rect,
    /// Left end of the label's vertical middle.
    pub label_origin: Point,
    /// Label font size, after highlighting.
    pub font_size: f64,
    /// `1.0`, or the highlight scale when the entry's series is selected.
    pub scale: f64,
}

/// Grid layout settings for a legend.
///
/// Items are laid out left-to-right, then top-to-bottom; all columns share the widest item's
/// width. Cells reserve room for `highlight_scale`, so selecting a series does not reflow the
/// grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendGrid {
    /// Number of columns.
    pub columns: usize,
    /// Swatch width.
    pub swatch_width: f64,
    /// Height of line swatches. Range swatches fill the row.
    pub swatch_height: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between columns.
    pub column_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Gap between the plot and the legend.
    pub top_padding: f64,
    /// Scale applied to the cells of the selected series, anchored at their left edge.
    pub highlight_scale: f64,
}

impl LegendGrid {
    /// Creates a single-column legend with defaults.
    pub fn new() -> Self {
        Self {
            columns: 1,
            swatch_width: 40.0,
            swatch_height: 4.0,
            label_dx: 6.0,
            row_gap: 6.0,
            column_gap: 12.0,
            font_size: 12.0,
            top_padding: 18.0,
            highlight_scale: 1.2,
        }
    }

    /// Sets the number of columns.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Sets the swatch width.
    pub fn with_swatch_width(mut self, swatch_width: f64) -> Self {
        self.swatch_width = swatch_width.max(0.0);
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the scale of highlighted cells. Values below `1.0` are clamped to `1.0`.
    pub fn with_highlight_scale(mut self, highlight_scale: f64) -> Self {
        self.highlight_scale = highlight_scale.max(1.0);
        self
    }

    /// Sets the gap between the plot and the legend.
    pub fn with_top_padding(mut self, top_padding: f64) -> Self {
        self.top_padding = top_padding.max(0.0);
        self
    }

    fn columns_used(&self, len: usize) -> usize {
        self.columns.max(1).min(len)
    }

    /// Scale reserved for every cell, so a highlighted cell never spills into its neighbours.
    fn reserved_scale(&self) -> f64 {
        self.highlight_scale.max(1.0)
    }

    fn content_width(&self, entries: &[LegendEntry], measurer: &impl TextMeasurer) -> f64 {
        let label_w = entries
            .iter()
            .map(|e| measurer.measure(&e.label, self.font_size).width)
            .fold(0.0_f64, f64::max);
        self.swatch_width + self.label_dx + label_w
    }

    fn content_height(&self, measurer: &impl TextMeasurer) -> f64 {
        self.swatch_height
            .max(measurer.measure("Mg", self.font_size).height)
    }

    fn column_width(&self, entries: &[LegendEntry], measurer: &impl TextMeasurer) -> f64 {
        self.content_width(entries, measurer) * self.reserved_scale()
    }

    fn row_height(&self, measurer: &impl TextMeasurer) -> f64 {
        self.content_height(measurer) * self.reserved_scale()
    }

    /// Measures the desired legend size (width/height).
    pub fn measure(&self, entries: &[LegendEntry], measurer: &impl TextMeasurer) -> Size {
        if entries.is_empty() {
            return Size::ZERO;
        }
        let columns = self.columns_used(entries.len());
        let rows = entries.len().div_ceil(columns);
        let col_w = self.column_width(entries, measurer);
        let row_h = self.row_height(measurer);
        Size::new(
            columns as f64 * col_w + (columns - 1) as f64 * self.column_gap,
            rows as f64 * row_h + (rows - 1) as f64 * self.row_gap,
        )
    }

    /// Positions every entry with the grid's top-left at `origin`.
    pub fn arrange(
        &self,
        entries: &[LegendEntry],
        origin: Point,
        measurer: &impl TextMeasurer,
        selection: ActiveSelection,
    ) -> Vec<LegendCell> {
        if entries.is_empty() {
            return Vec::new();
        }
        let columns = self.columns_used(entries.len());
        let col_w = self.column_width(entries, measurer);
        let row_h = self.row_height(measurer);
        let content_h = self.content_height(measurer);
        let selected = selection.series();

        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let col = i % columns;
                let row = i / columns;
                let x0 = origin.x + col as f64 * (col_w + self.column_gap);
                let mid = origin.y + row as f64 * (row_h + self.row_gap) + 0.5 * row_h;
                let scale = if selected == Some(entry.series) {
                    self.highlight_scale
                } else {
                    1.0
                };
                let swatch_h = match entry.kind {
                    LegendKind::Line => self.swatch_height,
                    LegendKind::RangeFill => content_h,
                } * scale;
                let swatch_w = self.swatch_width * scale;
                LegendCell {
                    entry: i,
                    swatch: Rect::new(x0, mid - 0.5 * swatch_h, x0 + swatch_w, mid + 0.5 * swatch_h),
                    label_origin: Point::new(x0 + swatch_w + self.label_dx * scale, mid),
                    font_size: self.font_size * scale,
                    scale,
                }
            })
            .collect()
    }
}

impl Default for LegendGrid {
    fn default() -> Self {
        Self::new()
    }
}
