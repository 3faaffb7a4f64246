// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny measure/arrange layout helper for a chart with a legend underneath.
//!
//! - **Measure**: the caller measures the legend ([`crate::LegendGrid::measure`]).
//! - **Arrange**: [`ChartFrame::arrange`] gives the plot whatever is left of the view.

use kurbo::{Rect, Size};

use crate::domain::Viewport;

/// Layout inputs for a single chart.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartFrameSpec {
    /// Outer chart bounds.
    pub view_size: Size,
    /// Padding applied on all sides of the view.
    pub outer_padding: f64,
    /// Desired legend size, if the chart has a legend.
    pub legend: Option<Size>,
    /// Gap between the plot and the legend.
    pub legend_top_padding: f64,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartFrame {
    /// Outer chart bounds.
    pub view: Rect,
    /// The plot rectangle; markers are laid out in its local coordinates.
    pub plot: Rect,
    /// Legend rectangle (if any).
    pub legend: Option<Rect>,
}

impl ChartFrame {
    /// Computes a layout from the provided inputs.
    ///
    /// Sizes clamp at zero, so a view too small for its legend yields an empty plot (which the
    /// points layer then rejects as an invalid viewport).
    pub fn arrange(spec: &ChartFrameSpec) -> Self {
        let pad = spec.outer_padding.max(0.0);
        let view_w = spec.view_size.width.max(0.0);
        let view_h = spec.view_size.height.max(0.0);
        let view = Rect::new(0.0, 0.0, view_w, view_h);

        let legend_reserved = spec.legend.map_or(0.0, |l| {
            l.height.max(0.0) + spec.legend_top_padding.max(0.0)
        });
        let plot_w = (view_w - 2.0 * pad).max(0.0);
        let plot_h = (view_h - 2.0 * pad - legend_reserved).max(0.0);
        let plot = Rect::new(pad, pad, pad + plot_w, pad + plot_h);

        let legend = spec.legend.map(|l| {
            let y0 = plot.y1 + spec.legend_top_padding.max(0.0);
            Rect::new(plot.x0, y0, plot.x0 + l.width.max(0.0), y0 + l.height.max(0.0))
        });

        Self { view, plot, legend }
    }

    /// Returns the plot area as a viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport::from(self.plot.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_reserves_space_under_the_plot() {
        let frame = ChartFrame::arrange(&ChartFrameSpec {
            view_size: Size::new(400.0, 300.0),
            outer_padding: 10.0,
            legend: Some(Size::new(120.0, 30.0)),
            legend_top_padding: 18.0,
        });

        assert_eq!(frame.plot, Rect::new(10.0, 10.0, 390.0, 10.0 + 280.0 - 48.0));
        let legend = frame.legend.expect("missing legend rect");
        assert_eq!(legend.y0, frame.plot.y1 + 18.0);
        assert_eq!(legend.y1, 290.0);
        assert_eq!(frame.viewport(), Viewport::new(380.0, 232.0));
    }

    #[test]
    fn without_legend_the_plot_fills_the_padded_view() {
        let frame = ChartFrame::arrange(&ChartFrameSpec {
            view_size: Size::new(100.0, 50.0),
            outer_padding: 0.0,
            legend: None,
            legend_top_padding: 18.0,
        });
        assert_eq!(frame.plot, frame.view);
        assert!(frame.legend.is_none());
    }

    #[test]
    fn oversized_legend_leaves_an_empty_plot() {
        let frame = ChartFrame::arrange(&ChartFrameSpec {
            view_size: Size::new(100.0, 50.0),
            outer_padding: 5.0,
            legend: Some(Size::new(10.0, 80.0)),
            legend_top_padding: 18.0,
        });
        assert_eq!(frame.plot.height(), 0.0);
        assert!(frame.viewport().validate().is_err());
    }
}
