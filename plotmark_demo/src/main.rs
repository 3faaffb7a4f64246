// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out a few small line charts and writes them as SVG files.
//!
//! Set `RUST_LOG=plotmark_charts=trace` to see label decisions.

mod svg;

use std::path::PathBuf;

use anyhow::Context;
use kurbo::{Point, Rect, Size};
use peniko::color::palette::css;
use plotmark_charts::{
    ActiveSelection, ChartFrame, ChartFrameSpec, Domain, HeuristicTextMeasurer, LegendGrid,
    LineDataPoint, LineDataSet, LineStyle, PointColour, PointSeries, PointStyle, PointType,
    PointsLayer, RangedLineDataPoint, RangedLineDataSet, Symbol, ValueFormat, ValueUnit,
    legend_entries, shared_domain,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::svg::SvgScene;

const VIEW_SIZE: Size = Size::new(480.0, 280.0);
const OUTER_PADDING: f64 = 24.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,plotmark_charts=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".into()));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let london = london();
    let padded = padded_week();
    let spread = ranged_week();

    let charts: [(&str, Vec<&dyn PointSeries>, ActiveSelection); 3] = [
        (
            "plotmark_temperatures",
            vec![&london as &dyn PointSeries],
            ActiveSelection::None,
        ),
        (
            "plotmark_padded",
            vec![&padded as &dyn PointSeries],
            ActiveSelection::None,
        ),
        (
            "plotmark_ranged",
            vec![&spread as &dyn PointSeries, &london],
            ActiveSelection::Point {
                series: 0,
                index: 2,
            },
        ),
    ];

    for (name, series, selection) in charts {
        let svg = render_chart(&series, selection);
        let path = out_dir.join(format!("{name}.svg"));
        std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote chart");
    }
    Ok(())
}

fn london() -> LineDataSet {
    LineDataSet::new(vec![
        LineDataPoint::new(12.1).with_x_axis_label("May"),
        LineDataPoint::new(15.1).with_x_axis_label("June"),
        LineDataPoint::new(17.3)
            .with_x_axis_label("July")
            .with_point_colour(PointColour::new(css::DARK_RED, css::ORANGE)),
    ])
    .with_legend_title("London")
    .with_point_style(
        PointStyle::new()
            .with_fill(css::BLUE)
            .with_border(css::RED)
            .with_point_type(PointType::FilledOutline)
            .with_show_value(true)
            .with_value_format(ValueFormat::Fixed { decimals: 1 })
            .with_value_unit(ValueUnit::Suffix("ºC".into())),
    )
    .with_style(LineStyle::new().with_colour(css::RED))
}

/// Zero sentinels at both ends pull the line down to the baseline.
fn padded_week() -> LineDataSet {
    LineDataSet::from_values([0.0, 12.1, 15.1, 17.3, 0.0])
        .with_legend_title("Padded")
        .with_point_style(
            PointStyle::new()
                .with_symbol(Symbol::Square)
                .with_border(css::TEAL)
                .with_show_value(true),
        )
        .with_style(
            LineStyle::new()
                .with_colour(css::TEAL)
                .with_ignore_zero(true),
        )
}

fn ranged_week() -> RangedLineDataSet {
    let days = [
        ("Mon", 9.0, 12.0, 6.0),
        ("Tue", 11.0, 14.5, 8.0),
        ("Wed", 10.5, 13.0, 7.5),
        ("Thu", 14.0, 18.0, 10.0),
        ("Fri", 16.0, 19.5, 12.5),
    ];
    RangedLineDataSet::new(
        days.into_iter()
            .map(|(day, v, hi, lo)| RangedLineDataPoint::new(v, hi, lo).with_x_axis_label(day))
            .collect(),
    )
    .with_legend_titles("Mean", "Min / Max")
    .with_point_style(
        PointStyle::new()
            .with_symbol(Symbol::RoundedSquare)
            .with_point_type(PointType::Filled)
            .with_fill(css::STEEL_BLUE)
            .with_show_value(true),
    )
    .with_style(LineStyle::new().with_colour(css::STEEL_BLUE))
}

fn render_chart(series: &[&dyn PointSeries], selection: ActiveSelection) -> String {
    let measurer = HeuristicTextMeasurer;
    let entries = legend_entries(series);
    let grid = LegendGrid::new().with_columns(3);
    let legend_size = grid.measure(&entries, &measurer);

    let frame = ChartFrame::arrange(&ChartFrameSpec {
        view_size: VIEW_SIZE,
        outer_padding: OUTER_PADDING,
        legend: (!entries.is_empty()).then_some(legend_size),
        legend_top_padding: grid.top_padding,
    });
    let viewport = frame.viewport();
    let offset = frame.plot.origin().to_vec2();

    let domain = shared_domain(series)
        .map_or_else(|| Domain::new(0.0, 1.0), Domain::non_degenerate);
    tracing::debug!(min = domain.min_value, range = domain.range, "shared domain");

    let mut scene = SvgScene::default();
    scene.set_view_box(Rect::from_origin_size(Point::ZERO, VIEW_SIZE));

    for (i, s) in series.iter().enumerate() {
        let layer = PointsLayer::new(i, domain).with_selection(selection);
        let points = match layer.layout(*s, viewport, &measurer) {
            Ok(points) => points,
            Err(err) => {
                tracing::warn!(series = i, %err, "series not drawn");
                continue;
            }
        };

        if let Some(band) = &points.band {
            scene.push_band(offset, band);
        }
        let line = s.line_style();
        scene.push_line(offset, &points.line, &line.colour, line.line_width);

        for glyph in &points.glyphs {
            scene.push_glyph(offset, glyph);
        }
        for label in &points.labels {
            scene.push_label(offset, label);
        }
    }

    if let Some(legend) = frame.legend {
        for cell in grid.arrange(&entries, legend.origin(), &measurer, selection) {
            scene.push_legend_cell(&cell, &entries[cell.entry]);
        }
    }

    scene.to_svg_string()
}
