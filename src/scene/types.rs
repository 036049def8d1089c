//! Scene types - renderer-agnostic glyphs produced by one compose pass.
//!
//! A Glyph describes shape and style only; it is not tied to any drawing
//! API. SVG export is one consumer, a host canvas is another.

use crate::types::{Bounds, ElementId, ElementKind, Point};

/// One drawable primitive inside a glyph
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Segment {
        a: Point,
        b: Point,
    },
    Circle {
        center: Point,
        radius: f64,
        filled: bool,
    },
    Rect {
        center: Point,
        width: f64,
        height: f64,
        filled: bool,
    },
    /// Diagonal marker drawn across a breaker body in the open position
    Strike {
        a: Point,
        b: Point,
    },
    /// Short disconnector blade
    Tick {
        a: Point,
        b: Point,
    },
}

impl Shape {
    pub fn bounds(&self) -> Bounds {
        match *self {
            Shape::Segment { a, b } | Shape::Strike { a, b } | Shape::Tick { a, b } => Bounds {
                min: Point::new(a.x.min(b.x), a.y.min(b.y)),
                max: Point::new(a.x.max(b.x), a.y.max(b.y)),
            },
            Shape::Circle { center, radius, .. } => {
                Bounds::around(center, radius * 2.0, radius * 2.0)
            }
            Shape::Rect {
                center,
                width,
                height,
                ..
            } => Bounds::around(center, width, height),
        }
    }
}

/// Semantic color class; concrete hex values live in the theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    /// Energized / closed / operational
    Normal,
    /// De-energized / open
    Inactive,
    Fault,
    Maintenance,
    LoadLow,
    LoadMedium,
    LoadHigh,
    VoltageHigh,
    VoltageMedium,
    VoltageLow,
}

/// Stroke dash pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashPattern {
    Solid,
    Dashed,
}

/// Style applied to every shape of a glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub stroke: ColorClass,
    pub fill: Option<ColorClass>,
    pub dash: DashPattern,
    pub width: f64,
}

/// A drawable element: identity, type, primitives, style
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub element: ElementId,
    pub kind: ElementKind,
    pub shapes: Vec<Shape>,
    pub style: GlyphStyle,
}

impl Glyph {
    /// Union of all shape bounds
    pub fn bounds(&self) -> Bounds {
        let mut iter = self.shapes.iter();
        let mut bounds = match iter.next() {
            Some(shape) => shape.bounds(),
            None => Bounds::around(Point::new(0.0, 0.0), 0.0, 0.0),
        };
        for shape in iter {
            bounds.expand_to(shape.bounds());
        }
        bounds
    }

    pub fn centroid(&self) -> Point {
        self.bounds().center()
    }

    /// Whether the glyph carries an open-position marker (breaker strike or
    /// swung disconnector blade)
    pub fn has_open_marker(&self) -> bool {
        let ticks = self
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Tick { .. }))
            .count();
        self.shapes.iter().any(|s| matches!(s, Shape::Strike { .. })) || ticks > 1
    }
}

/// Optional text placed beside an element, on its own layer
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub element: ElementId,
    /// Top-center anchor, placed below the symbol's bounding box
    pub anchor: Point,
    pub text: String,
}

/// Highlighted rectangular region (e.g. an active work zone), drawn on the
/// topmost layer
#[derive(Debug, Clone, PartialEq)]
pub struct WorkZone {
    pub id: String,
    pub label: Option<String>,
    pub bounds: Bounds,
}

/// Output of one compose pass, in z-order: connections under nodes under
/// labels under overlays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub connections: Vec<Glyph>,
    pub nodes: Vec<Glyph>,
    pub labels: Vec<Label>,
    pub overlays: Vec<WorkZone>,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            stroke: ColorClass::Inactive,
            fill: None,
            dash: DashPattern::Solid,
            width: 1.5,
        }
    }
}

impl Scene {
    /// All hit-testable glyphs, bottom layer first
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.connections.iter().chain(self.nodes.iter())
    }

    /// Find a glyph by element id
    pub fn glyph(&self, element: &ElementId) -> Option<&Glyph> {
        self.glyphs().find(|g| g.element == *element)
    }

    /// Union of all glyph bounds; `None` for an empty scene
    pub fn bounds(&self) -> Option<Bounds> {
        let mut iter = self.glyphs();
        let mut bounds = iter.next()?.bounds();
        for glyph in iter {
            bounds.expand_to(glyph.bounds());
        }
        for zone in &self.overlays {
            bounds.expand_to(zone.bounds);
        }
        Some(bounds)
    }
}
