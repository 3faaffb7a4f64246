// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point markers, value labels and legends for line charts.
//!
//! This crate turns data sets into renderer-agnostic geometry:
//! - The **mapper** converts `(index, value)` pairs into viewport pixels.
//! - The **label placer** puts a value label above or below its marker so it stays inside the
//!   plot.
//! - The **zero policy** hides sentinel zeros used only to anchor a line's baseline.
//!
//! [`PointsLayer`] combines the three into a measure/arrange pass per series. Shapes are `kurbo`
//! paths and paints are `peniko` brushes; drawing them is up to the caller.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod data_set;
mod domain;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod label;
mod layout;
mod legend;
mod mapper;
mod measure;
mod points;
#[cfg(test)]
mod points_tests;
mod selection;
mod style;
mod symbol;
mod z_order;
mod zero;

pub use data_set::{
    LineDataPoint, LineDataSet, PointSeries, RangedLineDataPoint, RangedLineDataSet,
    shared_domain,
};
pub use domain::{Domain, Viewport};
pub use error::PlacementError;
pub use format::{ValueFormat, ValueUnit};
pub use label::{LabelDecision, LabelDirection, LabelLayout, place_label};
pub use layout::{ChartFrame, ChartFrameSpec};
pub use legend::{LegendCell, LegendEntry, LegendGrid, LegendKind, legend_entries};
pub use mapper::{PlacedMarker, PointMapper, map_to_viewport};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use points::{
    GlyphPaint, MeasuredLabel, PointGlyph, PointsFrame, PointsLayer, RangeBand, ValueLabel,
};
pub use selection::ActiveSelection;
pub use style::{LineStyle, PointColour, PointStyle};
pub use symbol::{PointType, Symbol};
pub use z_order::*;
pub use zero::should_render;
