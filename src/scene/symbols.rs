//! Symbol renderer - pure mapping from (element type, status, geometry) to
//! a glyph.
//!
//! All status-to-color decisions go through one table (`status_color`) and
//! all type-to-shape decisions through one factory per element axis, so no
//! other module re-implements either mapping.

use crate::types::{
    ConnectionId, ConnectionKind, ConnectionStatus, ElementId, ElementKind, NodeKind, NodeStatus,
    Point,
};

use super::types::{ColorClass, DashPattern, Glyph, GlyphStyle, Shape};

/// Symbol dimensions in model-space units
pub struct SymbolSizes;

impl SymbolSizes {
    pub const BUS_LENGTH: f64 = 40.0;
    pub const BUS_THICKNESS: f64 = 6.0;
    pub const SUBSTATION_SIZE: f64 = 24.0;
    pub const JUNCTION_RADIUS: f64 = 4.0;
    pub const POINT_RADIUS: f64 = 2.5;
    pub const TRANSFORMER_RADIUS: f64 = 8.0;
    pub const BREAKER_WIDTH: f64 = 12.0;
    pub const BREAKER_HEIGHT: f64 = 8.0;
    pub const TICK_LENGTH: f64 = 10.0;
}

/// Stroke widths per element axis
pub struct StrokeWidths;

impl StrokeWidths {
    pub const NODE: f64 = 1.5;
    pub const CONNECTION: f64 = 1.5;
}

// ============================================================================
// Status → color (single table for both element axes)
// ============================================================================

/// Status of either element axis, unified for the color table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Node(NodeStatus),
    Connection(ConnectionStatus),
}

/// The one status-to-color mapping. Color is independent of element type
/// and exactly one class applies per element.
pub fn status_color(state: ElementState) -> ColorClass {
    match state {
        ElementState::Node(NodeStatus::Energized)
        | ElementState::Connection(ConnectionStatus::Closed) => ColorClass::Normal,
        ElementState::Node(NodeStatus::DeEnergized)
        | ElementState::Connection(ConnectionStatus::Open) => ColorClass::Inactive,
        ElementState::Node(NodeStatus::Fault)
        | ElementState::Connection(ConnectionStatus::Fault) => ColorClass::Fault,
        ElementState::Node(NodeStatus::Maintenance) => ColorClass::Maintenance,
    }
}

// ============================================================================
// Node symbols
// ============================================================================

/// Build the glyph for a node. Pure: identical inputs yield an identical
/// glyph.
pub fn node_glyph(node_id: &str, kind: NodeKind, status: NodeStatus, center: Point) -> Glyph {
    let color = status_color(ElementState::Node(status));
    let shapes = match kind {
        // Elongated bar along the local (horizontal) axis
        NodeKind::Bus => vec![Shape::Rect {
            center,
            width: SymbolSizes::BUS_LENGTH,
            height: SymbolSizes::BUS_THICKNESS,
            filled: true,
        }],
        NodeKind::Substation => vec![Shape::Rect {
            center,
            width: SymbolSizes::SUBSTATION_SIZE,
            height: SymbolSizes::SUBSTATION_SIZE,
            filled: false,
        }],
        NodeKind::Junction => vec![Shape::Circle {
            center,
            radius: SymbolSizes::JUNCTION_RADIUS,
            filled: true,
        }],
        NodeKind::ConnectionPoint | NodeKind::Other => vec![Shape::Circle {
            center,
            radius: SymbolSizes::POINT_RADIUS,
            filled: true,
        }],
    };
    Glyph {
        element: ElementId::Node(node_id.to_string()),
        kind: ElementKind::Node(kind),
        shapes,
        style: GlyphStyle {
            stroke: color,
            fill: Some(color),
            dash: DashPattern::Solid,
            width: StrokeWidths::NODE,
        },
    }
}

// ============================================================================
// Connection symbols
// ============================================================================

/// Build the glyph for a connection with resolved endpoints. Pure.
pub fn connection_glyph(
    id: ConnectionId,
    kind: ConnectionKind,
    status: ConnectionStatus,
    a: Point,
    b: Point,
) -> Glyph {
    let color = status_color(ElementState::Connection(status));
    let shapes = match kind {
        ConnectionKind::Line => vec![Shape::Segment { a, b }],
        ConnectionKind::Transformer => {
            broken_segment(a, b, SymbolSizes::TRANSFORMER_RADIUS, |mid, _u| {
                vec![Shape::Circle {
                    center: mid,
                    radius: SymbolSizes::TRANSFORMER_RADIUS,
                    filled: false,
                }]
            })
        }
        ConnectionKind::CircuitBreaker => {
            broken_segment(a, b, SymbolSizes::BREAKER_WIDTH / 2.0, |mid, _u| {
                let mut body = vec![Shape::Rect {
                    center: mid,
                    width: SymbolSizes::BREAKER_WIDTH,
                    height: SymbolSizes::BREAKER_HEIGHT,
                    filled: false,
                }];
                if status == ConnectionStatus::Open {
                    let hx = SymbolSizes::BREAKER_WIDTH / 2.0 + 2.0;
                    let hy = SymbolSizes::BREAKER_HEIGHT / 2.0 + 2.0;
                    body.push(Shape::Strike {
                        a: Point::new(mid.x - hx, mid.y + hy),
                        b: Point::new(mid.x + hx, mid.y - hy),
                    });
                }
                body
            })
        }
        ConnectionKind::Disconnector => {
            broken_segment(a, b, SymbolSizes::TICK_LENGTH / 2.0, |mid, u| {
                // Contact tick perpendicular to the run
                let p = Point::new(-u.y, u.x);
                let half = SymbolSizes::TICK_LENGTH / 2.0;
                let mut shapes = vec![Shape::Tick {
                    a: Point::new(mid.x - p.x * half, mid.y - p.y * half),
                    b: Point::new(mid.x + p.x * half, mid.y + p.y * half),
                }];
                if status == ConnectionStatus::Open {
                    // Blade swung ~45° away from the run
                    let blade = SymbolSizes::TICK_LENGTH;
                    let dir = Point::new(
                        (u.x + p.x) * std::f64::consts::FRAC_1_SQRT_2,
                        (u.y + p.y) * std::f64::consts::FRAC_1_SQRT_2,
                    );
                    shapes.push(Shape::Tick {
                        a: mid,
                        b: Point::new(mid.x + dir.x * blade, mid.y + dir.y * blade),
                    });
                }
                shapes
            })
        }
    };
    let dash = if color == ColorClass::Inactive {
        DashPattern::Dashed
    } else {
        DashPattern::Solid
    };
    Glyph {
        element: ElementId::Connection(id),
        kind: ElementKind::Connection(kind),
        shapes,
        style: GlyphStyle {
            stroke: color,
            fill: None,
            dash,
            width: StrokeWidths::CONNECTION,
        },
    }
}

/// Segment from `a` to `b` with a gap of `half_gap` around the midpoint,
/// filled by the shapes the builder returns. Degenerate (zero-length or
/// shorter than the gap) runs collapse to a plain segment; the integrity
/// checks upstream make these rare.
fn broken_segment<F>(a: Point, b: Point, half_gap: f64, build_mid: F) -> Vec<Shape>
where
    F: FnOnce(Point, Point) -> Vec<Shape>,
{
    let len = a.distance_to(b);
    if len <= half_gap * 2.0 {
        return vec![Shape::Segment { a, b }];
    }
    let u = Point::new((b.x - a.x) / len, (b.y - a.y) / len);
    let mid = a.midpoint(b);
    let mut shapes = vec![
        Shape::Segment {
            a,
            b: Point::new(mid.x - u.x * half_gap, mid.y - u.y * half_gap),
        },
        Shape::Segment {
            a: Point::new(mid.x + u.x * half_gap, mid.y + u.y * half_gap),
            b,
        },
    ];
    shapes.extend(build_mid(mid, u));
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaker_open_carries_strike() {
        let glyph = connection_glyph(
            1,
            ConnectionKind::CircuitBreaker,
            ConnectionStatus::Open,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!(glyph.has_open_marker());
    }

    #[test]
    fn breaker_closed_has_no_strike() {
        let glyph = connection_glyph(
            1,
            ConnectionKind::CircuitBreaker,
            ConnectionStatus::Closed,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        assert!(!glyph.has_open_marker());
    }

    #[test]
    fn disconnector_open_swings_a_second_blade() {
        let closed = connection_glyph(
            2,
            ConnectionKind::Disconnector,
            ConnectionStatus::Closed,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        let open = connection_glyph(
            2,
            ConnectionKind::Disconnector,
            ConnectionStatus::Open,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
        );
        let ticks = |g: &Glyph| {
            g.shapes
                .iter()
                .filter(|s| matches!(s, Shape::Tick { .. }))
                .count()
        };
        assert_eq!(ticks(&closed), 1);
        assert_eq!(ticks(&open), 2);
    }

    #[test]
    fn short_run_collapses_to_plain_segment() {
        let glyph = connection_glyph(
            3,
            ConnectionKind::Transformer,
            ConnectionStatus::Closed,
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
        );
        assert_eq!(glyph.shapes.len(), 1);
    }
}
