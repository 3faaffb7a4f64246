// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Shape, Size};
use peniko::Brush;
use peniko::color::Rgba8;
use peniko::color::palette::css;

use crate::{
    ActiveSelection, Domain, GlyphPaint, HeuristicTextMeasurer, LabelDirection, LineDataPoint,
    LineDataSet, LineStyle, MeasuredLabel, PlacementError, PointColour, PointSeries, PointStyle,
    PointType, PointsLayer, RangedLineDataPoint, RangedLineDataSet, Viewport, shared_domain,
};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

fn labelled(values: &[f64]) -> LineDataSet {
    LineDataSet::from_values(values.iter().copied()).with_point_style(
        PointStyle::new()
            .with_point_size(10.0)
            .with_show_value(true),
    )
}

fn solid(brush: &Brush) -> Rgba8 {
    match brush {
        Brush::Solid(c) => c.to_rgba8(),
        other => panic!("expected a solid brush, got {other:?}"),
    }
}

#[test]
fn three_point_series_maps_to_corners_and_centre() {
    let set = labelled(&[0.0, 10.0, 20.0]);
    let layer = PointsLayer::new(0, Domain::new(0.0, 20.0));
    let frame = layer
        .layout(&set, Viewport::new(100.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();

    let got: Vec<_> = frame.glyphs.iter().map(|g| (g.marker.x, g.marker.y)).collect();
    assert_eq!(got, vec![(-5.0, 95.0), (45.0, 45.0), (95.0, -5.0)]);
}

#[test]
fn padded_series_suppresses_only_the_sentinels() {
    let mut set = labelled(&[0.0, 12.1, 15.1, 17.3, 0.0]);
    set.style = LineStyle::new().with_ignore_zero(true);
    let domain = shared_domain(&[&set]).unwrap();
    assert_eq!(domain.min_value, 0.0);

    let layer = PointsLayer::new(0, domain);
    let frame = layer
        .layout(&set, Viewport::new(200.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();

    let indices: Vec<_> = frame.glyphs.iter().map(|g| g.index).collect();
    assert_eq!(indices, [1, 2, 3]);
    // Spacing still counts all five slots: step = 200 / 4.
    for g in &frame.glyphs {
        assert_close(g.marker.x, g.index as f64 * 50.0 - 5.0);
    }

    let texts: Vec<_> = frame.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["12", "15", "17"]);
}

#[test]
fn padded_series_line_still_reaches_the_baseline() {
    let mut set = labelled(&[0.0, 12.1, 15.1, 17.3, 0.0]);
    set.style = LineStyle::new().with_ignore_zero(true);
    let layer = PointsLayer::new(0, shared_domain(&[&set]).unwrap());
    let frame = layer
        .layout(&set, Viewport::new(200.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();

    assert_eq!(frame.glyphs.len(), 3);
    assert_eq!(frame.line.len(), 5);
    assert_eq!(frame.line[0], Point::new(0.0, 100.0));
    assert_eq!(frame.line[4], Point::new(200.0, 100.0));
    for (vertex, glyph) in frame.line[1..4].iter().zip(&frame.glyphs) {
        assert_eq!(*vertex, glyph.marker.center(10.0));
    }
    assert!(frame.band.is_none());
}

#[test]
fn ranged_series_outlines_its_band() {
    let set = RangedLineDataSet::new(vec![
        RangedLineDataPoint::new(5.0, 7.0, 3.0),
        RangedLineDataPoint::new(6.0, 9.0, 4.0),
    ])
    .with_range_fill(css::LIGHT_BLUE);
    let frame = PointsLayer::new(0, Domain::new(0.0, 10.0))
        .layout(&set, Viewport::new(100.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();

    let band = frame.band.expect("ranged series has a band");
    assert_eq!(band.z_index, crate::RANGE_BANDS);
    assert_eq!(solid(&band.fill), css::LIGHT_BLUE.to_rgba8());
    // Upper bounds 7 and 9, lower bounds 3 and 4, on a 10 px per unit scale.
    let b = band.path.bounding_box();
    assert_close(b.x0, 0.0);
    assert_close(b.x1, 100.0);
    assert_close(b.y0, 10.0);
    assert_close(b.y1, 70.0);
    assert!(band.path.contains(Point::new(50.0, 40.0)));
    assert!(!band.path.contains(Point::new(50.0, 5.0)));
    assert_eq!(frame.line.len(), 2);
}

#[test]
fn band_skips_non_finite_bounds() {
    let set = RangedLineDataSet::new(vec![
        RangedLineDataPoint::new(5.0, 7.0, 3.0),
        RangedLineDataPoint::new(6.0, f64::NAN, 4.0),
        RangedLineDataPoint::new(6.0, 8.0, 4.0),
    ]);
    let frame = PointsLayer::new(0, Domain::new(0.0, 10.0))
        .layout(&set, Viewport::new(100.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();
    let b = frame.band.expect("two usable points remain").path.bounding_box();
    assert_close(b.y0, 20.0);

    let short = RangedLineDataSet::new(vec![
        RangedLineDataPoint::new(5.0, 7.0, 3.0),
        RangedLineDataPoint::new(6.0, f64::NAN, 4.0),
    ]);
    let frame = PointsLayer::new(0, Domain::new(0.0, 10.0))
        .layout(&short, Viewport::new(100.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();
    assert!(frame.band.is_none());
}

#[test]
fn zeros_are_labelled_when_not_ignored() {
    let set = labelled(&[0.0, 12.1, 0.0]);
    let layer = PointsLayer::new(0, shared_domain(&[&set]).unwrap());
    let frame = layer
        .layout(&set, Viewport::new(100.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(frame.glyphs.len(), 3);
    let texts: Vec<_> = frame.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["0", "12", "0"]);
}

#[test]
fn labels_flip_above_markers_in_the_lower_half() {
    let set = labelled(&[1.0, 9.0]);
    let layer = PointsLayer::new(0, Domain::new(0.0, 10.0));
    let frame = layer
        .layout(&set, Viewport::new(100.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();

    // value 1 -> y = 90 - 5 = 85 (lower half); value 9 -> y = 10 - 5 = 5.
    let low = &frame.labels[0];
    let high = &frame.labels[1];
    assert_eq!(low.placement.direction, LabelDirection::Above);
    assert_eq!(high.placement.direction, LabelDirection::Below);

    // Default label font size 8: "1" measures 4.8 x 8.
    assert_eq!(low.size, Size::new(0.6 * 8.0, 8.0));
    assert_close(low.placement.anchor.x, -5.0 + 0.5 * low.size.width);
    assert_close(low.placement.anchor.y, 85.0 - (4.0 + 10.0));
    assert_close(high.placement.anchor.y, 5.0 + (4.0 + 10.0));
    assert!(low.bubble().rect().contains(low.placement.anchor));
}

#[test]
fn selection_keeps_only_the_selected_label() {
    let set = labelled(&[3.0, 5.0, 8.0, 2.0]);
    let layer = PointsLayer::new(2, Domain::new(0.0, 10.0)).with_selection(
        ActiveSelection::Point {
            series: 2,
            index: 1,
        },
    );
    let frame = layer
        .layout(&set, Viewport::new(90.0, 60.0), &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(frame.glyphs.len(), 4);
    assert_eq!(frame.labels.len(), 1);
    assert_eq!(frame.labels[0].index, 1);

    let other = layer.with_selection(ActiveSelection::Point {
        series: 0,
        index: 1,
    });
    let frame = other
        .layout(&set, Viewport::new(90.0, 60.0), &HeuristicTextMeasurer)
        .unwrap();
    assert!(frame.labels.is_empty());
}

#[test]
fn single_point_sits_in_the_centre_without_a_label() {
    let set = labelled(&[42.0]);
    let layer = PointsLayer::new(0, Domain::new(42.0, 0.0));
    assert!(layer.measure_labels(&set, &HeuristicTextMeasurer).is_empty());

    let frame = layer
        .layout(&set, Viewport::new(80.0, 40.0), &HeuristicTextMeasurer)
        .unwrap();
    assert_eq!(frame.glyphs.len(), 1);
    assert_eq!(frame.glyphs[0].marker.center(10.0), Point::new(40.0, 20.0));
    assert!(frame.labels.is_empty());
}

#[test]
fn empty_series_yields_an_empty_frame() {
    let set = labelled(&[]);
    let frame = PointsLayer::new(0, Domain::new(0.0, 1.0))
        .layout(&set, Viewport::new(10.0, 10.0), &HeuristicTextMeasurer)
        .unwrap();
    assert!(frame.glyphs.is_empty());
    assert!(frame.labels.is_empty());
}

#[test]
fn invalid_inputs_fail_the_pass() {
    let layer = PointsLayer::new(0, Domain::new(0.0, 1.0));
    assert_eq!(
        layer
            .layout(&labelled(&[]), Viewport::new(0.0, 10.0), &HeuristicTextMeasurer)
            .unwrap_err(),
        PlacementError::InvalidViewport {
            width: 0.0,
            height: 10.0
        }
    );

    let flat = labelled(&[4.0, 4.0, 4.0]);
    let degenerate = PointsLayer::new(0, shared_domain(&[&flat]).unwrap());
    assert_eq!(
        degenerate
            .layout(&flat, Viewport::new(10.0, 10.0), &HeuristicTextMeasurer)
            .unwrap_err(),
        PlacementError::DegenerateDomain { range: 0.0 }
    );

    let widened = PointsLayer::new(0, shared_domain(&[&flat]).unwrap().non_degenerate());
    let frame = widened
        .layout(&flat, Viewport::new(10.0, 10.0), &HeuristicTextMeasurer)
        .unwrap();
    for g in &frame.glyphs {
        assert_close(g.marker.center(10.0).y, 5.0);
    }
}

#[test]
fn non_finite_values_are_skipped_but_keep_their_slot() {
    let set = labelled(&[1.0, f64::NAN, 3.0]);
    let frame = PointsLayer::new(0, Domain::new(0.0, 4.0))
        .layout(&set, Viewport::new(100.0, 100.0), &HeuristicTextMeasurer)
        .unwrap();
    let indices: Vec<_> = frame.glyphs.iter().map(|g| g.index).collect();
    assert_eq!(indices, [0, 2]);
    assert_close(frame.glyphs[1].marker.x, 95.0);
    assert_eq!(frame.labels.len(), 2);
}

#[test]
fn arrange_ignores_measurements_for_hidden_labels() {
    let mut set = labelled(&[0.0, 6.0, 0.0]);
    set.style = LineStyle::new().with_ignore_zero(true);
    let layer = PointsLayer::new(0, Domain::new(0.0, 6.0));
    let stale = vec![
        MeasuredLabel {
            index: 0,
            text: String::from("0"),
            size: Size::new(5.0, 8.0),
        },
        MeasuredLabel {
            index: 2,
            text: String::from("0"),
            size: Size::new(5.0, 8.0),
        },
    ];
    let frame = layer
        .arrange(&set, Viewport::new(100.0, 100.0), &stale)
        .unwrap();
    assert_eq!(frame.glyphs.len(), 1);
    // The visible point was not measured, so it has no label either.
    assert!(frame.labels.is_empty());
}

#[test]
fn arrange_accepts_measurements_in_any_order() {
    let set = labelled(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let layer = PointsLayer::new(0, Domain::new(0.0, 5.0));
    let mut measured = layer.measure_labels(&set, &HeuristicTextMeasurer);
    measured.reverse();

    let frame = layer
        .arrange(&set, Viewport::new(100.0, 100.0), &measured)
        .unwrap();
    let indices: Vec<_> = frame.labels.iter().map(|l| l.index).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4]);
    let texts: Vec<_> = frame.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["1", "2", "3", "4", "5"]);
}

#[test]
fn hidden_values_produce_no_measurements() {
    let set = LineDataSet::from_values([1.0, 2.0, 3.0]);
    let layer = PointsLayer::new(0, Domain::new(0.0, 3.0));
    assert!(!set.point_style().show_value);
    assert!(layer.measure_labels(&set, &HeuristicTextMeasurer).is_empty());
}

#[test]
fn glyph_paints_follow_point_type_and_overrides() {
    let set = LineDataSet::new(vec![
        LineDataPoint::new(1.0),
        LineDataPoint::new(2.0).with_point_colour(PointColour::new(css::RED, css::BLUE)),
    ])
    .with_point_style(
        PointStyle::new()
            .with_point_type(PointType::FilledOutline)
            .with_fill(css::GREEN)
            .with_border(css::BLACK)
            .with_line_width(2.0),
    );
    let frame = PointsLayer::new(0, Domain::new(0.0, 2.0))
        .layout(&set, Viewport::new(50.0, 50.0), &HeuristicTextMeasurer)
        .unwrap();

    let plain = &frame.glyphs[0].paints;
    assert_eq!(plain.len(), 2);
    match (&plain[0], &plain[1]) {
        (GlyphPaint::Fill(fill), GlyphPaint::Stroke { brush, width }) => {
            assert_eq!(solid(fill), css::GREEN.to_rgba8());
            assert_eq!(solid(brush), css::BLACK.to_rgba8());
            assert_eq!(*width, 2.0);
        }
        other => panic!("unexpected paints {other:?}"),
    }

    let overridden = &frame.glyphs[1].paints;
    match (&overridden[0], &overridden[1]) {
        (GlyphPaint::Fill(fill), GlyphPaint::Stroke { brush, .. }) => {
            assert_eq!(solid(fill), css::BLUE.to_rgba8());
            assert_eq!(solid(brush), css::RED.to_rgba8());
        }
        other => panic!("unexpected paints {other:?}"),
    }
}
