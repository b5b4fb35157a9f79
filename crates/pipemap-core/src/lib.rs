//! Deterministic assembly of a project pipeline graph.
//!
//! Given already-parsed descriptions of a project's pipeline -- scanned
//! module and contract specs, hand-authored metadata overrides, a docs
//! directory, and historical run records -- this crate merges them into a
//! single deduplicated, multi-view [`Graph`] of typed nodes and edges,
//! suitable for downstream rendering or querying.
//!
//! The build is purely synchronous and referentially transparent: apart
//! from one bounded directory listing of the docs root, it performs no
//! I/O, holds no shared state, and the same inputs always yield the same
//! node and edge sequences.
//!
//! # Modules
//!
//! - [`project`]: scanned inputs (`ProjectLayout`, `ModuleSpec`, `ContractSchema`)
//! - [`runs`]: run-history inputs (`RunState`, `RunInfo`)
//! - [`meta`]: authored overrides (`MetaGraph` and its parts)
//! - [`graph`]: the output model (`Graph`, `GraphNode`, `GraphEdge`)
//! - [`resolve`]: identity resolution of scanned specs against overrides
//! - [`nodes`]: node construction, one constructor per node kind
//! - [`edges`]: edge inference (structural, manual, auto, doc chain, run coverage)
//! - [`docs`]: bounded docs-root listing
//! - [`registry`]: insertion-ordered id registry with first-write-wins insert
//! - [`build`]: the single [`build`](build::build) entry point
//! - [`load`]: JSON descriptor loading
//! - [`export`]: render payloads for the canvas and force-layout views

pub mod build;
pub mod docs;
pub mod edges;
pub mod error;
pub mod export;
pub mod graph;
pub mod load;
pub mod meta;
pub mod nodes;
pub mod project;
pub mod registry;
pub mod resolve;
pub mod runs;

// Re-export key types for ergonomic use.
pub use build::build;
pub use error::LoadError;
pub use graph::{edge_id, Confidence, Graph, GraphEdge, GraphNode, NodeKind, View};
pub use graph::DEFAULT_SCHEMA_VERSION;
pub use meta::{MetaContract, MetaEdge, MetaGraph, MetaModule, MetaPhase};
pub use project::{ContractSchema, ModuleSpec, ProjectLayout};
pub use runs::{RunInfo, RunState};
