//! The output graph model.
//!
//! [`Graph`] is a plain value: an ordered node sequence and an ordered,
//! deduplicated edge sequence, stamped with a schema version. It is built
//! fresh on every [`crate::build::build`] call and handed to the caller,
//! who owns it exclusively; nothing here is mutated after assembly.
//!
//! Edges may dangle: the build does not validate referential integrity,
//! so an edge's source or target may name a node that does not exist.
//! Consumers must tolerate that.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Schema version used when the metadata bundle does not declare one.
pub const DEFAULT_SCHEMA_VERSION: &str = "1.0.0";

/// The kind of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Phase,
    Module,
    Contract,
    Doc,
    Run,
}

impl NodeKind {
    /// Returns the kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Phase => "Phase",
            NodeKind::Module => "Module",
            NodeKind::Contract => "Contract",
            NodeKind::Doc => "Doc",
            NodeKind::Run => "Run",
        }
    }
}

/// The logical subgraph a node or edge belongs to.
///
/// Only `Doc` nodes and `docs_link` edges live in the Docs view;
/// everything else defaults to Pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Pipeline,
    Docs,
}

/// Provenance tag on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Hand-authored.
    Manual,
    /// Derived from declared module I/O.
    Auto,
    /// Heuristic (doc ordering, run coverage).
    Low,
}

/// A typed node of the assembled graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Globally unique node id.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub label: String,
    /// Id of the containing node; empty for top-level nodes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parent: String,
    /// Resolved owning phase; only meaningful for `Module` nodes, where it
    /// always equals `parent`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,
    #[serde(default)]
    pub view: View,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(rename = "mutable", default, skip_serializing_if = "Option::is_none")]
    pub mutable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Status strings, currently only populated for `Run` nodes.
    #[serde(rename = "statusFlags", default, skip_serializing_if = "BTreeSet::is_empty")]
    pub status_flags: BTreeSet<String>,
    /// Auxiliary scalar attributes, such as phase `order` or run `start_time`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub meta: IndexMap<String, serde_json::Value>,
}

impl GraphNode {
    /// Creates a node with the given identity and everything else unset.
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        GraphNode {
            id: id.into(),
            kind,
            label: label.into(),
            parent: String::new(),
            phase: String::new(),
            view: View::Pipeline,
            path: String::new(),
            tier: None,
            mutable: None,
            pinned: None,
            category: None,
            status_flags: BTreeSet::new(),
            meta: IndexMap::new(),
        }
    }
}

/// A directed edge of the assembled graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Unique, deterministic edge id: an explicit authored id, or the
    /// computed [`edge_id`].
    pub id: String,
    pub source: String,
    pub target: String,
    /// Edge type. Open set: manual edges carry their authored type verbatim.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Provenance; absent for structural edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(default)]
    pub view: View,
}

impl GraphEdge {
    /// Creates an edge with the computed id and everything else unset.
    pub fn new(kind: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        let kind = kind.into();
        let source = source.into();
        let target = target.into();
        GraphEdge {
            id: edge_id(&kind, &source, &target),
            source,
            target,
            kind,
            label: String::new(),
            confidence: None,
            view: View::Pipeline,
        }
    }
}

/// Computes the deterministic id of a non-explicit edge. Also serves as
/// the dedup key for manual edges that carry no explicit id.
pub fn edge_id(kind: &str, source: &str, target: &str) -> String {
    format!("{}:{}->{}", kind, source, target)
}

/// The assembled multi-view graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(rename = "schemaVersion")]
    pub schema_version: String,
    /// Nodes in construction order.
    pub nodes: Vec<GraphNode>,
    /// Edges in construction order, first-write-wins on duplicate id.
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }
}
