//! The private LLM infrastructure diagram.
//!
//! Two clients reach an Ollama pod running on EKS through Kong's managed AI
//! gateway. Traffic stays private end to end: Kong's AWS account peers with
//! the customer account over a Transit Gateway, enters the VPC through an
//! internal NLB and the Istio ingress gateway, and only then reaches the
//! `ollama` namespace. Model weights live on an EBS volume attached to the
//! GPU node.

use topogram::{
    DiagramBuilder, TopogramError,
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    identifier::Id,
    semantic::{ClusterStyle, Diagram, Direction, EdgeStyle, GraphStyle, Icon, OutputFormat, Splines},
};

pub const TITLE: &str = "Ollama on EKS — Private LLM Infrastructure";

/// Output path of the rendered diagram, without extension.
pub const FILENAME: &str = "docs/architecture";

const FONT: &str = "Helvetica";

/// Stroke color of the storage attachment edges.
const STORAGE_EDGE_COLOR: &str = "#6b7280";

fn color(value: &str) -> Result<Color, TopogramError> {
    Color::new(value).map_err(TopogramError::Style)
}

/// A cluster with a fill, a solid border and optionally a label color.
fn region(
    fill: &str,
    border: &str,
    border_width: f32,
    font: Option<&str>,
) -> Result<ClusterStyle, TopogramError> {
    let style = ClusterStyle::new()
        .with_fill(color(fill)?)
        .with_border(StrokeDefinition::solid(color(border)?, border_width));

    Ok(match font {
        Some(font) => style.with_font_color(color(font)?).with_font_size(12.0),
        None => style,
    })
}

/// Build the architecture diagram.
///
/// # Errors
///
/// Returns [`TopogramError::Style`] if one of the colors fails to parse and
/// [`TopogramError::Graph`] if the declared edges do not match the nodes.
pub fn architecture() -> Result<Diagram, TopogramError> {
    let graph_style = GraphStyle::new()
        .with_font_family(FONT)
        .with_font_size(13.0)
        .with_background(color("white")?)
        .with_pad(0.75)
        .with_node_separation(0.50)
        .with_rank_separation(0.90)
        .with_dpi(150)
        .with_splines(Splines::Ortho);

    let mut node_text = TextDefinition::new();
    node_text.set_font_family(FONT);
    node_text.set_font_size(11.0);

    let mut builder = DiagramBuilder::new(TITLE)
        .filename(FILENAME)
        .format(OutputFormat::Png)
        .direction(Direction::TopToBottom)
        .graph_style(graph_style)
        .node_text(node_text);

    let (coder, client) = builder.cluster(
        "Team — Any Device · Any Location",
        ClusterStyle::new(),
        |team| {
            (
                team.node(Icon::User, "Claude Code\nqwen3-coder:32b"),
                team.node(Icon::User, "OpenAI-compatible\nClient"),
            )
        },
    );

    let kong = builder.cluster(
        "KONG INC — Managed AWS Account\n(You never operate this infrastructure)",
        region("#dcfce7", "#16a34a", 3.0, Some("#14532d"))?,
        |kong| {
            kong.node(
                Icon::ApiGateway,
                "Kong Cloud AI Gateway\nai-proxy  ·  key-auth\nai-rate-limiting  ·  prometheus",
            )
        },
    );

    let vpc_style = region("#eff6ff", "#60a5fa", 2.0, None)?;
    let ingress_style = region("#e0e7ff", "#6366f1", 2.0, None)?;
    let eks_style = region("#e0f2fe", "#0284c7", 2.0, None)?;
    let ollama_style = region("#fce7f3", "#db2777", 2.0, None)?;

    let account = builder.cluster(
        "YOUR AWS ACCOUNT — us-west-2\n(You own · You control · Your prompts never leave)",
        region("#fef9c3", "#d97706", 3.0, Some("#78350f"))?,
        |account| {
            let tgw = account.node(
                Icon::TransitGateway,
                "Transit Gateway\nRAM Share → Kong account\nPrivate bridge  ·  never internet",
            );

            account.cluster(
                "VPC  10.0.0.0/16  ·  Private Subnets  ·  NAT Gateway",
                vpc_style,
                |vpc| {
                    let (nlb, istio) = vpc.cluster("istio-ingress namespace", ingress_style, |ns| {
                        (
                            ns.node(Icon::LoadBalancer, "Internal NLB\n(not internet-facing)"),
                            ns.node(Icon::MeshGateway, "Istio Gateway\nGateway API  ·  mTLS"),
                        )
                    });

                    let (gpu, svc, pod) =
                        vpc.cluster("EKS Cluster  ·  Kubernetes 1.31", eks_style, |eks| {
                            eks.node(Icon::Compute, "System Nodes\n2× t3.medium");
                            let gpu = eks.node(
                                Icon::Compute,
                                "GPU Node\ng5.12xlarge\n4× NVIDIA A10G  ·  96 GB VRAM",
                            );
                            let (svc, pod) = eks.cluster(
                                "ollama namespace\n(NetworkPolicy: istio-ingress only)",
                                ollama_style,
                                |ns| {
                                    (
                                        ns.node(
                                            Icon::Service,
                                            "ClusterIP  :11434\nnever internet-exposed",
                                        ),
                                        ns.node(
                                            Icon::Pod,
                                            "Ollama Pod\n4× GPU  ·  96 GB VRAM\nqwen3-coder:32b",
                                        ),
                                    )
                                },
                            );
                            (gpu, svc, pod)
                        });

                    // Sibling of the EKS cluster: the volume is AZ-local AWS storage,
                    // not a Kubernetes object.
                    let ebs = vpc.node(
                        Icon::BlockStorage,
                        "EBS gp3  ·  200 GB\nAZ-local AWS block storage\nAttached to EC2 via Nitro NVMe\nRetain policy  ·  4000 IOPS",
                    );

                    Hops {
                        tgw,
                        nlb,
                        istio,
                        gpu,
                        svc,
                        pod,
                        ebs,
                    }
                },
            )
        },
    );

    builder.connect([coder, client], kong, EdgeStyle::labeled("① HTTPS"));
    builder.connect(
        [kong],
        account.tgw,
        EdgeStyle::labeled("② Private peering\nKong CIDR: 192.168.0.0/16\nnever over internet"),
    );
    builder.connect(
        [account.tgw],
        account.nlb,
        EdgeStyle::labeled("③ VPC attachment\n10.0.0.0/16"),
    );
    builder.connect([account.nlb], account.istio, EdgeStyle::labeled("④"));
    builder.connect(
        [account.istio],
        account.svc,
        EdgeStyle::labeled("⑤ HTTPRoute → :11434"),
    );
    builder.connect([account.svc], account.pod, EdgeStyle::labeled("⑥"));

    let storage = StrokeDefinition::dashed(color(STORAGE_EDGE_COLOR)?, 1.0);
    builder.connect(
        [account.gpu],
        account.ebs,
        EdgeStyle::labeled("NVMe block device\n(Nitro hypervisor attach)")
            .with_stroke(storage.clone()),
    );
    builder.connect(
        [account.pod],
        account.ebs,
        EdgeStyle::labeled("PVC mount\n/root/.ollama").with_stroke(storage),
    );

    builder.build()
}

/// Nodes inside the customer account that edges attach to.
struct Hops {
    tgw: Id,
    nlb: Id,
    istio: Id,
    gpu: Id,
    svc: Id,
    pod: Id,
    ebs: Id,
}
