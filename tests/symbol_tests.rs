//! Symbol renderer tests: determinism across the type × status grid and
//! the status → color table.

use sldview::scene::{connection_glyph, node_glyph, status_color, ColorClass, ElementState};
use sldview::{ConnectionKind, ConnectionStatus, NodeKind, NodeStatus, Point};

/// Generate one determinism test per connection kind × status: two calls
/// with identical arguments must yield identical glyphs.
macro_rules! connection_determinism_test {
    ($kind:ident, $status:ident) => {
        paste::paste! {
            #[test]
            fn [<$kind:snake _ $status:snake _is_deterministic>]() {
                let a = Point::new(3.0, -4.0);
                let b = Point::new(120.0, 55.0);
                let first = connection_glyph(
                    9,
                    ConnectionKind::$kind,
                    ConnectionStatus::$status,
                    a,
                    b,
                );
                let second = connection_glyph(
                    9,
                    ConnectionKind::$kind,
                    ConnectionStatus::$status,
                    a,
                    b,
                );
                assert_eq!(first, second);
            }
        }
    };
}

connection_determinism_test!(Line, Closed);
connection_determinism_test!(Line, Open);
connection_determinism_test!(Line, Fault);
connection_determinism_test!(Transformer, Closed);
connection_determinism_test!(Transformer, Open);
connection_determinism_test!(CircuitBreaker, Closed);
connection_determinism_test!(CircuitBreaker, Open);
connection_determinism_test!(Disconnector, Closed);
connection_determinism_test!(Disconnector, Open);

/// Same grid for node kinds
macro_rules! node_determinism_test {
    ($kind:ident, $status:ident) => {
        paste::paste! {
            #[test]
            fn [<node_ $kind:snake _ $status:snake _is_deterministic>]() {
                let center = Point::new(17.0, 23.0);
                let first = node_glyph("n", NodeKind::$kind, NodeStatus::$status, center);
                let second = node_glyph("n", NodeKind::$kind, NodeStatus::$status, center);
                assert_eq!(first, second);
            }
        }
    };
}

node_determinism_test!(Bus, Energized);
node_determinism_test!(Bus, Maintenance);
node_determinism_test!(Junction, DeEnergized);
node_determinism_test!(Substation, Fault);
node_determinism_test!(ConnectionPoint, Energized);

#[test]
fn status_color_table() {
    assert_eq!(
        status_color(ElementState::Node(NodeStatus::Energized)),
        ColorClass::Normal
    );
    assert_eq!(
        status_color(ElementState::Node(NodeStatus::DeEnergized)),
        ColorClass::Inactive
    );
    assert_eq!(
        status_color(ElementState::Node(NodeStatus::Fault)),
        ColorClass::Fault
    );
    assert_eq!(
        status_color(ElementState::Node(NodeStatus::Maintenance)),
        ColorClass::Maintenance
    );
    assert_eq!(
        status_color(ElementState::Connection(ConnectionStatus::Closed)),
        ColorClass::Normal
    );
    assert_eq!(
        status_color(ElementState::Connection(ConnectionStatus::Open)),
        ColorClass::Inactive
    );
    assert_eq!(
        status_color(ElementState::Connection(ConnectionStatus::Fault)),
        ColorClass::Fault
    );
}

#[test]
fn unknown_wire_statuses_fall_back_to_neutral() {
    assert_eq!(NodeStatus::from_str("glowing"), NodeStatus::DeEnergized);
    assert_eq!(ConnectionStatus::from_str("ajar"), ConnectionStatus::Open);
}

#[test]
fn bus_is_elongated_along_its_axis() {
    let glyph = node_glyph("bus", NodeKind::Bus, NodeStatus::Energized, Point::new(0.0, 0.0));
    let bounds = glyph.bounds();
    assert!(bounds.width() > bounds.height() * 3.0);
}
