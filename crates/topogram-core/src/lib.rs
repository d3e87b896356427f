//! Topogram Core Types and Definitions
//!
//! This crate provides the foundational types for Topogram architecture
//! diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Draw**: Stroke and text definitions shared by clusters, nodes and edges ([`draw`] module)
//! - **Semantic**: The diagram model itself ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod identifier;
pub mod semantic;
