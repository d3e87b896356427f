//! Diagram elements: icon nodes, clusters and edges.

use std::{fmt, str::FromStr};

use crate::{
    color::Color,
    draw::{StrokeDefinition, StrokeStyle, TextDefinition},
    identifier::Id,
};

/// The kind of infrastructure an icon node depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Icon {
    /// A human or agent acting as a client.
    User,
    /// A managed API gateway.
    ApiGateway,
    /// A service-mesh ingress gateway.
    MeshGateway,
    /// A cross-account private network bridge.
    TransitGateway,
    /// A network load balancer.
    LoadBalancer,
    /// A virtual machine or compute instance.
    Compute,
    /// A block storage volume.
    BlockStorage,
    /// A Kubernetes service.
    Service,
    /// A Kubernetes workload pod.
    Pod,
}

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::User,
        Icon::ApiGateway,
        Icon::MeshGateway,
        Icon::TransitGateway,
        Icon::LoadBalancer,
        Icon::Compute,
        Icon::BlockStorage,
        Icon::Service,
        Icon::Pod,
    ];

    /// Short kebab-case name of the icon.
    pub fn name(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::ApiGateway => "api-gateway",
            Self::MeshGateway => "mesh-gateway",
            Self::TransitGateway => "transit-gateway",
            Self::LoadBalancer => "load-balancer",
            Self::Compute => "compute",
            Self::BlockStorage => "block-storage",
            Self::Service => "service",
            Self::Pod => "pod",
        }
    }

    /// Relative path of the icon image inside an icon pack directory.
    ///
    /// The layout is `<provider>/<category>/<file>.png`, the same layout the
    /// common diagram-as-code icon packs ship with.
    pub fn resource_path(&self) -> &'static str {
        match self {
            Self::User => "aws/general/user.png",
            Self::ApiGateway => "onprem/network/kong.png",
            Self::MeshGateway => "onprem/network/istio.png",
            Self::TransitGateway => "aws/network/transit-gateway.png",
            Self::LoadBalancer => "aws/network/elb-network-load-balancer.png",
            Self::Compute => "aws/compute/ec2.png",
            Self::BlockStorage => "aws/storage/elastic-block-store-ebs.png",
            Self::Service => "k8s/network/svc.png",
            Self::Pod => "k8s/compute/pod.png",
        }
    }

    /// Graphviz shape used when no icon image is available.
    pub fn fallback_shape(&self) -> &'static str {
        match self {
            Self::User => "egg",
            Self::ApiGateway => "hexagon",
            Self::MeshGateway => "octagon",
            Self::TransitGateway => "doubleoctagon",
            Self::LoadBalancer => "invtrapezium",
            Self::Compute => "box3d",
            Self::BlockStorage => "cylinder",
            Self::Service => "component",
            Self::Pod => "box",
        }
    }

    /// Fill color used together with [`Icon::fallback_shape`].
    pub fn fallback_fill(&self) -> &'static str {
        match self {
            Self::User => "#f1f5f9",
            Self::ApiGateway | Self::MeshGateway => "#e0f2f1",
            Self::TransitGateway | Self::LoadBalancer | Self::Compute | Self::BlockStorage => {
                "#ffe8cc"
            }
            Self::Service | Self::Pod => "#dce6fa",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| format!("unknown icon `{s}`"))
    }
}

/// A leaf element: one labeled infrastructure icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    icon: Icon,
    label: String,
}

impl Node {
    pub fn new(id: Id, icon: Icon, label: impl Into<String>) -> Self {
        Self {
            id,
            icon,
            label: label.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// The label text. Lines are separated by `\n`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of text lines in the label.
    pub fn label_lines(&self) -> usize {
        self.label.lines().count().max(1)
    }
}

/// Optional visual attributes of a cluster.
///
/// # Examples
///
/// ```
/// # use topogram_core::{color::Color, draw::StrokeDefinition, semantic::ClusterStyle};
/// # fn main() -> Result<(), String> {
/// let style = ClusterStyle::new()
///     .with_fill(Color::new("#dcfce7")?)
///     .with_border(StrokeDefinition::solid(Color::new("#16a34a")?, 3.0))
///     .with_font_color(Color::new("#14532d")?)
///     .with_font_size(12.0);
///
/// assert!(style.fill().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterStyle {
    fill: Option<Color>,
    border: Option<StrokeDefinition>,
    text: TextDefinition,
}

impl ClusterStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_border(mut self, stroke: StrokeDefinition) -> Self {
        self.border = Some(stroke);
        self
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.text.set_color(Some(color));
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.text.set_font_size(size);
        self
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn border(&self) -> Option<&StrokeDefinition> {
        self.border.as_ref()
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }
}

/// A child of a cluster or of the diagram root.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Node(Node),
    Cluster(Cluster),
}

/// A named visual container of nodes and nested clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    id: Id,
    label: String,
    style: ClusterStyle,
    items: Vec<Item>,
}

impl Cluster {
    pub fn new(id: Id, label: impl Into<String>, style: ClusterStyle, items: Vec<Item>) -> Self {
        Self {
            id,
            label: label.into(),
            style,
            items,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> &ClusterStyle {
        &self.style
    }

    /// Children in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Label and line style of an edge.
///
/// An unset stroke renders with the diagram's default edge pen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeStyle {
    label: Option<String>,
    stroke: Option<StrokeDefinition>,
}

impl EdgeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for an edge carrying only a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new().with_label(label)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }
}

/// A directed relation from one or more source nodes to a target node.
///
/// An edge with several sources is a single declaration that renders as
/// one connection per source, all sharing the same [`EdgeStyle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    sources: Vec<Id>,
    target: Id,
    style: EdgeStyle,
}

impl Edge {
    pub fn new(sources: Vec<Id>, target: Id, style: EdgeStyle) -> Self {
        Self {
            sources,
            target,
            style,
        }
    }

    pub fn sources(&self) -> &[Id] {
        &self.sources
    }

    pub fn target(&self) -> Id {
        self.target
    }

    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }

    pub fn label(&self) -> Option<&str> {
        self.style.label()
    }

    /// The line pattern, `Solid` when no stroke is set.
    pub fn stroke_style(&self) -> StrokeStyle {
        self.style
            .stroke()
            .map(|stroke| *stroke.style())
            .unwrap_or_default()
    }

    /// Every `(source, target)` connection this edge renders as.
    pub fn pairs(&self) -> impl Iterator<Item = (Id, Id)> + '_ {
        self.sources.iter().map(|source| (*source, self.target))
    }
}
