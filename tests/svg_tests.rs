//! SVG export tests: well-formedness (via roxmltree) and layer content.

use sldview::{
    compose, ConnectionKind, ConnectionStatus, DiagramColors, NetworkConnection, NetworkGraph,
    NetworkNode, NodeKind, NodeStatus, Point, SceneOptions, SldTheme, WorkZone,
};

fn sample_graph() -> NetworkGraph {
    NetworkGraph {
        nodes: vec![
            NetworkNode {
                node_id: "bus-1".to_string(),
                kind: NodeKind::Bus,
                position: Point::new(0.0, 0.0),
                label: Some("110kV <main>".to_string()),
                voltage_level: Some("110kV".to_string()),
                status: NodeStatus::Energized,
                region: None,
            },
            NetworkNode {
                node_id: "j-1".to_string(),
                kind: NodeKind::Junction,
                position: Point::new(150.0, 0.0),
                label: None,
                voltage_level: None,
                status: NodeStatus::Energized,
                region: None,
            },
        ],
        connections: vec![NetworkConnection {
            id: 1,
            source_node_id: "bus-1".to_string(),
            target_node_id: "j-1".to_string(),
            kind: ConnectionKind::CircuitBreaker,
            equipment_id: None,
            status: ConnectionStatus::Open,
        }],
    }
}

fn render(options: &SceneOptions, transparent: bool) -> String {
    let (scene, diagnostics) = compose(&sample_graph(), options);
    assert!(diagnostics.is_empty());
    sldview::render_scene_svg(&scene, &DiagramColors::default(), transparent)
}

#[test]
fn output_is_well_formed_xml() {
    let svg = render(&SceneOptions::default(), false);
    let doc = roxmltree::Document::parse(&svg).expect("invalid SVG output");
    assert_eq!(doc.root_element().tag_name().name(), "svg");
    assert!(doc.root_element().attribute("viewBox").is_some());
}

#[test]
fn open_breaker_renders_body_and_strike() {
    let svg = render(&SceneOptions::default(), false);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let rects: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("rect"))
        .collect();
    // Background, bus bar, breaker body
    assert_eq!(rects.len(), 3);
    let lines = doc
        .descendants()
        .filter(|n| n.has_tag_name("line"))
        .count();
    // Two half-segments plus the open strike
    assert_eq!(lines, 3);
}

#[test]
fn transparent_export_omits_the_background() {
    let svg = render(&SceneOptions::default(), true);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let rects = doc
        .descendants()
        .filter(|n| n.has_tag_name("rect"))
        .count();
    assert_eq!(rects, 2);
}

#[test]
fn labels_are_escaped_text_elements() {
    let options = SceneOptions {
        show_labels: true,
        ..SceneOptions::default()
    };
    let svg = render(&options, false);
    assert!(svg.contains("110kV &lt;main&gt;"));
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let text = doc
        .descendants()
        .find(|n| n.has_tag_name("text"))
        .expect("label text element");
    assert_eq!(text.text(), Some("110kV <main>"));
}

#[test]
fn work_zone_renders_on_top_with_its_label() {
    let options = SceneOptions {
        work_zone: Some(WorkZone {
            id: "wz".to_string(),
            label: Some("Crew A".to_string()),
            bounds: sldview::Bounds {
                min: Point::new(-20.0, -20.0),
                max: Point::new(60.0, 40.0),
            },
        }),
        ..SceneOptions::default()
    };
    let svg = render(&options, false);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert!(svg.contains("Crew A"));
    // The zone rectangle is the last rect in document order
    let last_rect = doc
        .descendants()
        .filter(|n| n.has_tag_name("rect"))
        .last()
        .unwrap();
    assert_eq!(last_rect.attribute("fill-opacity"), Some("0.12"));
}

#[test]
fn dark_theme_swaps_the_background() {
    let (scene, _) = compose(&sample_graph(), &SceneOptions::default());
    let colors = DiagramColors::from_theme(SldTheme::Dark);
    let svg = sldview::render_scene_svg(&scene, &colors, false);
    assert!(svg.contains("#1A1A2E"));
}
