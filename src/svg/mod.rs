//! SVG export - converts a composed Scene into an SVG string.
//!
//! Pure string building, no DOM manipulation. Renders back-to-front in the
//! Scene's z-order: connections → nodes → labels → overlays.

mod theme;

pub use theme::{DiagramColors, SldTheme};

use crate::scene::{DashPattern, Glyph, Label, Scene, Shape, WorkZone};
use crate::types::{Bounds, Point};

const PADDING: f64 = 20.0;
const LABEL_FONT_SIZE: f64 = 11.0;
const FONT_FAMILY: &str = "Inter, sans-serif";

/// Render a Scene as a standalone SVG string.
pub fn render_scene_svg(scene: &Scene, colors: &DiagramColors, transparent: bool) -> String {
    let bounds = padded_bounds(scene);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" font-family="{}">"#,
        fmt_num(bounds.min.x),
        fmt_num(bounds.min.y),
        fmt_num(bounds.width()),
        fmt_num(bounds.height()),
        FONT_FAMILY
    ));

    if !transparent {
        parts.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" />"#,
            fmt_num(bounds.min.x),
            fmt_num(bounds.min.y),
            fmt_num(bounds.width()),
            fmt_num(bounds.height()),
            colors.bg
        ));
    }

    // 1. Connections (behind nodes)
    for glyph in &scene.connections {
        parts.push(render_glyph(glyph, colors));
    }

    // 2. Node symbols
    for glyph in &scene.nodes {
        parts.push(render_glyph(glyph, colors));
    }

    // 3. Labels
    for label in &scene.labels {
        parts.push(render_label(label, colors));
    }

    // 4. Overlays (topmost)
    for zone in &scene.overlays {
        parts.push(render_work_zone(zone, colors));
    }

    parts.push("</svg>".to_string());
    parts.join("\n")
}

fn padded_bounds(scene: &Scene) -> Bounds {
    let mut bounds = scene.bounds().unwrap_or(Bounds {
        min: Point::new(0.0, 0.0),
        max: Point::new(100.0, 100.0),
    });
    bounds.min.x -= PADDING;
    bounds.min.y -= PADDING;
    bounds.max.x += PADDING;
    bounds.max.y += PADDING;
    bounds
}

// ============================================================================
// Glyph rendering
// ============================================================================

fn render_glyph(glyph: &Glyph, colors: &DiagramColors) -> String {
    let stroke = colors.hex(glyph.style.stroke);
    let fill = glyph.style.fill.map(|c| colors.hex(c));
    let dash = match glyph.style.dash {
        DashPattern::Solid => String::new(),
        DashPattern::Dashed => " stroke-dasharray=\"6 4\"".to_string(),
    };
    let width = glyph.style.width;

    glyph
        .shapes
        .iter()
        .map(|shape| match *shape {
            Shape::Segment { a, b } | Shape::Strike { a, b } | Shape::Tick { a, b } => format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{} />"#,
                fmt_num(a.x),
                fmt_num(a.y),
                fmt_num(b.x),
                fmt_num(b.y),
                stroke,
                width,
                dash
            ),
            Shape::Circle {
                center,
                radius,
                filled,
            } => format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}" />"#,
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(radius),
                if filled { fill.unwrap_or(stroke) } else { "none" },
                stroke,
                width
            ),
            Shape::Rect {
                center,
                width: w,
                height: h,
                filled,
            } => format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}" />"#,
                fmt_num(center.x - w / 2.0),
                fmt_num(center.y - h / 2.0),
                fmt_num(w),
                fmt_num(h),
                if filled { fill.unwrap_or(stroke) } else { "none" },
                stroke,
                width
            ),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_label(label: &Label, colors: &DiagramColors) -> String {
    format!(
        r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="hanging" font-size="{}" fill="{}">{}</text>"#,
        fmt_num(label.anchor.x),
        fmt_num(label.anchor.y),
        LABEL_FONT_SIZE,
        colors.text,
        escape_xml(&label.text)
    )
}

fn render_work_zone(zone: &WorkZone, colors: &DiagramColors) -> String {
    let mut parts = vec![format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="0.12" stroke="{}" stroke-width="1" stroke-dasharray="4 4" />"#,
        fmt_num(zone.bounds.min.x),
        fmt_num(zone.bounds.min.y),
        fmt_num(zone.bounds.width()),
        fmt_num(zone.bounds.height()),
        colors.maintenance,
        colors.maintenance
    )];
    if let Some(text) = &zone.label {
        parts.push(format!(
            r#"<text x="{}" y="{}" font-size="{}" fill="{}">{}</text>"#,
            fmt_num(zone.bounds.min.x + 4.0),
            fmt_num(zone.bounds.min.y + LABEL_FONT_SIZE + 2.0),
            LABEL_FONT_SIZE,
            colors.text,
            escape_xml(text)
        ));
    }
    parts.join("\n")
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn fmt_num(n: f64) -> String {
    format!("{}", n)
}
