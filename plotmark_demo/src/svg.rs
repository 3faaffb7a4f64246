// Copyright 2025 the Plotmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `plotmark_demo`.

use kurbo::{Affine, BezPath, Point, Rect, Shape, Vec2};
use peniko::Brush;
use plotmark_charts::{
    GlyphPaint, LEGEND_LABELS, LEGEND_SWATCHES, LegendCell, LegendEntry, PointGlyph, RangeBand,
    SERIES_LINES, ValueLabel,
};

#[derive(Debug)]
enum Item {
    Path {
        d: String,
        fill: Option<Brush>,
        stroke: Option<(Brush, f64)>,
    },
    Text {
        pos: Point,
        text: String,
        font_size: f64,
        fill: Brush,
        anchor: &'static str,
    },
}

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    items: Vec<(i32, Item)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    /// Adds a polyline through `points`, shifted by `offset`.
    pub(crate) fn push_line(&mut self, offset: Vec2, points: &[Point], brush: &Brush, width: f64) {
        let mut path = BezPath::new();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(*p + offset);
            } else {
                path.line_to(*p + offset);
            }
        }
        if points.len() < 2 {
            return;
        }
        self.items.push((
            SERIES_LINES,
            Item::Path {
                d: path.to_svg(),
                fill: None,
                stroke: Some((brush.clone(), width)),
            },
        ));
    }

    /// Adds a range band laid out in plot coordinates.
    pub(crate) fn push_band(&mut self, offset: Vec2, band: &RangeBand) {
        self.items.push((
            band.z_index,
            Item::Path {
                d: (Affine::translate(offset) * band.path.clone()).to_svg(),
                fill: Some(band.fill.clone()),
                stroke: None,
            },
        ));
    }

    /// Adds a point marker laid out in plot coordinates.
    pub(crate) fn push_glyph(&mut self, offset: Vec2, glyph: &PointGlyph) {
        let d = (Affine::translate(offset) * glyph.path.clone()).to_svg();
        for paint in &glyph.paints {
            let item = match paint {
                GlyphPaint::Fill(brush) => Item::Path {
                    d: d.clone(),
                    fill: Some(brush.clone()),
                    stroke: None,
                },
                GlyphPaint::Stroke { brush, width } => Item::Path {
                    d: d.clone(),
                    fill: None,
                    stroke: Some((brush.clone(), *width)),
                },
            };
            self.items.push((glyph.z_index, item));
        }
    }

    /// Adds a value label (capsule plus text) laid out in plot coordinates.
    pub(crate) fn push_label(&mut self, offset: Vec2, label: &ValueLabel) {
        let bubble = Affine::translate(offset) * label.bubble().to_path(0.1);
        self.items.push((
            label.z_index,
            Item::Path {
                d: bubble.to_svg(),
                fill: Some(label.background.clone()),
                stroke: None,
            },
        ));
        self.items.push((
            label.z_index,
            Item::Text {
                pos: label.placement.anchor + offset,
                text: label.text.clone(),
                font_size: label.font_size,
                fill: label.text_fill.clone(),
                anchor: "middle",
            },
        ));
    }

    /// Adds a legend cell.
    pub(crate) fn push_legend_cell(&mut self, cell: &LegendCell, entry: &LegendEntry) {
        self.items.push((
            LEGEND_SWATCHES,
            Item::Path {
                d: cell.swatch.to_path(0.1).to_svg(),
                fill: Some(entry.fill.clone()),
                stroke: None,
            },
        ));
        self.items.push((
            LEGEND_LABELS,
            Item::Text {
                pos: cell.label_origin,
                text: entry.label.clone(),
                font_size: cell.font_size,
                fill: Brush::default(),
                anchor: "start",
            },
        ));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        // Stable sort keeps insertion order within a z-index.
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by_key(|(z, _)| *z);

        for (_z, item) in items {
            match item {
                Item::Path { d, fill, stroke } => {
                    out.push_str(&format!(r#"<path d="{d}""#));
                    match fill {
                        Some(fill) => write_paint_attr(&mut out, "fill", fill),
                        None => out.push_str(r#" fill="none""#),
                    }
                    if let Some((brush, width)) = stroke {
                        write_paint_attr(&mut out, "stroke", brush);
                        out.push_str(&format!(r#" stroke-width="{width}""#));
                    }
                    out.push_str("/>\n");
                }
                Item::Text {
                    pos,
                    text,
                    font_size,
                    fill,
                    anchor,
                } => {
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle" text-anchor="{}""#,
                        pos.x, pos.y, font_size, anchor
                    ));
                    write_paint_attr(&mut out, "fill", fill);
                    out.push('>');
                    out.push_str(&escape_xml(text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
