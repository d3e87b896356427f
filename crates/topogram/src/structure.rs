//! Structural view of a diagram.
//!
//! [`TopologyGraph`] indexes a [`Diagram`](topogram_core::semantic::Diagram):
//! which cluster each node lives in, and the directed connections drawn
//! between nodes. It is also where a freshly built diagram is validated.

mod graph_base;
mod topology;

pub use topology::{DiagramSummary, TopologyGraph, TopologyShape};
