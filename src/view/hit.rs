//! Interaction layer - hit-testing and hover/selection state.
//!
//! Hit-testing is a pure function over the Scene and the viewport
//! transform, driven by the host's pointer-event stream. It carries no
//! rendering-technology assumptions, so it is testable on its own.

use crate::scene::{Glyph, Scene, Shape};
use crate::types::{ElementId, ElementKind, Point};

use super::viewport::Viewport;

/// Pointer tolerance in screen pixels; divided by the scale when compared
/// in model space so thin lines stay clickable at low zoom
pub const HIT_TOLERANCE_PX: f64 = 6.0;

/// Emitted when the hovered element changes (`None` clears the hover)
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEvent {
    pub hovered: Option<ElementId>,
}

/// Emitted when a different element is selected
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionEvent {
    pub element: ElementId,
    pub kind: ElementKind,
}

/// Find the glyph under a screen-space pointer position.
///
/// Ties between overlapping glyphs go to the one whose centroid is closest
/// to the pointer; an exact tie prefers nodes, which draw on top of
/// connections.
pub fn hit_test<'a>(scene: &'a Scene, viewport: &Viewport, screen: Point) -> Option<&'a Glyph> {
    let model = viewport.to_model(screen);
    if !model.is_finite() {
        return None;
    }
    let tolerance = HIT_TOLERANCE_PX / viewport.scale();

    let mut best: Option<(&Glyph, f64)> = None;
    for glyph in scene.glyphs() {
        if !glyph_contains(glyph, model, tolerance) {
            continue;
        }
        let distance = glyph.centroid().distance_to(model);
        let better = match best {
            None => true,
            Some((current, best_distance)) => {
                if (distance - best_distance).abs() < f64::EPSILON {
                    // Nodes over connections on an exact tie
                    matches!(glyph.element, ElementId::Node(_))
                        && matches!(current.element, ElementId::Connection(_))
                } else {
                    distance < best_distance
                }
            }
        };
        if better {
            best = Some((glyph, distance));
        }
    }
    best.map(|(glyph, _)| glyph)
}

/// Whether a model-space point falls on any shape of the glyph
fn glyph_contains(glyph: &Glyph, p: Point, tolerance: f64) -> bool {
    glyph.shapes.iter().any(|shape| match *shape {
        Shape::Segment { a, b } | Shape::Strike { a, b } | Shape::Tick { a, b } => {
            segment_distance(p, a, b) <= tolerance
        }
        Shape::Circle { center, radius, .. } => {
            p.distance_to(center) <= radius.max(tolerance)
        }
        Shape::Rect { .. } => shape.bounds().contains(p),
    })
}

/// Distance from a point to a segment
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance_to(Point::new(a.x + t * dx, a.y + t * dy))
}

// ============================================================================
// Hover / selection state
// ============================================================================

/// Hover and selection are independent: hovering never selects, and the
/// selection outlives the pointer leaving the element.
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    hovered: Option<ElementId>,
    selected: Option<ElementId>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<&ElementId> {
        self.hovered.as_ref()
    }

    pub fn selected(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// Update the hover from a pointer position; emits only on change
    pub fn pointer_move(
        &mut self,
        scene: &Scene,
        viewport: &Viewport,
        screen: Point,
    ) -> Option<HoverEvent> {
        let hit = hit_test(scene, viewport, screen).map(|g| g.element.clone());
        if hit == self.hovered {
            return None;
        }
        self.hovered = hit.clone();
        Some(HoverEvent { hovered: hit })
    }

    /// Pointer left the diagram surface; clears the hover
    pub fn pointer_leave(&mut self) -> Option<HoverEvent> {
        if self.hovered.is_none() {
            return None;
        }
        self.hovered = None;
        Some(HoverEvent { hovered: None })
    }

    /// Click at a pointer position. Selects the hit element and emits a
    /// selection event when the selection changed; a miss leaves the
    /// current selection in place.
    pub fn click(
        &mut self,
        scene: &Scene,
        viewport: &Viewport,
        screen: Point,
    ) -> Option<SelectionEvent> {
        let glyph = hit_test(scene, viewport, screen)?;
        if self.selected.as_ref() == Some(&glyph.element) {
            return None;
        }
        self.selected = Some(glyph.element.clone());
        Some(SelectionEvent {
            element: glyph.element.clone(),
            kind: glyph.kind,
        })
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
