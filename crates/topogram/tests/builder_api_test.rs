//! Integration tests for the DiagramBuilder API
//!
//! These tests drive the public API the way a diagram script does: declare,
//! build, render.

use std::fs;

use proptest::prelude::*;

use topogram::{
    DiagramBuilder, Renderer, TopogramError,
    color::Color,
    config::{AppConfig, IconConfig, StyleConfig},
    draw::StrokeDefinition,
    semantic::{ClusterStyle, Diagram, EdgeStyle, Icon, OutputFormat},
    structure::TopologyGraph,
};

/// A gateway in front of a namespaced workload, with every label supplied.
fn service_diagram(labels: &[String; 8]) -> Diagram {
    let mut builder = DiagramBuilder::new(labels[0].clone()).format(OutputFormat::Dot);

    let user = builder.node(Icon::User, labels[1].clone());
    let (gateway, pod, disk) = builder.cluster(labels[2].clone(), ClusterStyle::new(), |vpc| {
        let gateway = vpc.node(Icon::ApiGateway, labels[3].clone());
        let pod = vpc.cluster(labels[4].clone(), ClusterStyle::new(), |ns| {
            ns.node(Icon::Pod, labels[5].clone())
        });
        let disk = vpc.node(Icon::BlockStorage, "disk");
        (gateway, pod, disk)
    });

    builder.connect([user], gateway, EdgeStyle::labeled(labels[6].clone()));
    builder.connect([gateway], pod, EdgeStyle::new());
    builder.connect(
        [pod],
        disk,
        EdgeStyle::labeled(labels[7].clone())
            .with_stroke(StrokeDefinition::dashed(Color::default(), 1.0)),
    );

    builder.build().expect("service diagram is valid")
}

fn default_labels() -> [String; 8] {
    [
        "Service", "Visitor", "VPC", "Gateway", "namespace", "Pod", "HTTPS", "mount",
    ]
    .map(str::to_string)
}

#[test]
fn test_render_dot_file() {
    let dir = tempfile::tempdir().unwrap();
    let diagram = service_diagram(&default_labels());

    let path = dir.path().join("out/service.dot");
    Renderer::default()
        .render_to(&diagram, &path, OutputFormat::Dot)
        .expect("dot output needs no Graphviz");

    let source = fs::read_to_string(&path).unwrap();
    assert!(source.starts_with("digraph"));
    assert!(source.contains("Visitor"));
    assert!(source.contains("dashed"));
}

#[test]
fn test_config_is_applied() {
    let config: AppConfig = toml::from_str(
        r##"
        [style]
        background_color = "#111827"
        font_family = "Inter"
        "##,
    )
    .unwrap();
    let renderer = Renderer::new(config);

    let source = renderer.to_dot(&service_diagram(&default_labels())).unwrap();
    assert!(source.contains("#111827"));
    assert!(source.contains("Inter"));
}

#[test]
fn test_invalid_config_color_is_a_style_error() {
    let config: AppConfig = toml::from_str("[style]\nbackground_color = \"mauve-ish\"\n").unwrap();

    let err = Renderer::new(config)
        .to_dot(&service_diagram(&default_labels()))
        .unwrap_err();
    assert!(matches!(err, TopogramError::Style(_)));
}

#[test]
fn test_icon_directory_switches_to_images() {
    let dir = tempfile::tempdir().unwrap();
    let pod_icon = dir.path().join(Icon::Pod.resource_path());
    fs::create_dir_all(pod_icon.parent().unwrap()).unwrap();
    fs::write(&pod_icon, b"png").unwrap();

    let config = AppConfig::new(
        StyleConfig::default(),
        IconConfig::new(Some(dir.path().to_path_buf())),
    );
    let source = Renderer::new(config)
        .to_dot(&service_diagram(&default_labels()))
        .unwrap();

    assert!(source.contains("image="));
    assert!(source.contains(Icon::Pod.resource_path()));
    assert!(!source.contains(Icon::User.resource_path()));
}

fn label() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .:/()·→-]{1,24}(\n[A-Za-z0-9 ]{1,16})?"
}

fn labels() -> impl Strategy<Value = [String; 8]> {
    prop::array::uniform8(label())
}

/// Relabelling a diagram never changes its structure.
fn check_labels_do_not_change_topology(
    first: [String; 8],
    second: [String; 8],
) -> Result<(), TestCaseError> {
    let a = service_diagram(&first);
    let b = service_diagram(&second);

    let a_topology = TopologyGraph::from_diagram(&a).unwrap();
    let b_topology = TopologyGraph::from_diagram(&b).unwrap();

    prop_assert_eq!(a_topology.shape(), b_topology.shape());
    prop_assert_eq!(a_topology.summary(), b_topology.summary());
    Ok(())
}

/// Building the same diagram twice yields the same DOT text.
fn check_dot_is_deterministic(labels: [String; 8]) -> Result<(), TestCaseError> {
    let renderer = Renderer::default();
    let first = renderer.to_dot(&service_diagram(&labels)).unwrap();
    let second = renderer.to_dot(&service_diagram(&labels)).unwrap();

    prop_assert_eq!(first, second);
    Ok(())
}

proptest! {
    #[test]
    fn labels_do_not_change_topology(first in labels(), second in labels()) {
        check_labels_do_not_change_topology(first, second)?;
    }

    #[test]
    fn dot_is_deterministic(labels in labels()) {
        check_dot_is_deterministic(labels)?;
    }
}
