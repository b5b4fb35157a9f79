//! Render payloads for the two visualization surfaces.
//!
//! Pure value-to-value conversions of an assembled [`Graph`]:
//! [`elements`] produces the `{nodes: [{data}], edges: [{data}]}` envelope
//! the canvas view consumes, [`force_graph`] the flat `{nodes, links}`
//! shape of the force-layout view. No filtering or layout happens here.

use serde::Serialize;

use crate::graph::{Graph, GraphEdge, GraphNode};

/// A canvas element: the node or edge record wrapped under `data`.
#[derive(Debug, Clone, Serialize)]
pub struct Element<T> {
    pub data: T,
}

/// The canvas payload.
#[derive(Debug, Clone, Serialize)]
pub struct ElementsPayload {
    pub nodes: Vec<Element<GraphNode>>,
    pub edges: Vec<Element<GraphEdge>>,
}

/// Wraps every node and edge in the canvas `data` envelope.
pub fn elements(graph: &Graph) -> ElementsPayload {
    ElementsPayload {
        nodes: graph
            .nodes
            .iter()
            .map(|node| Element { data: node.clone() })
            .collect(),
        edges: graph
            .edges
            .iter()
            .map(|edge| Element { data: edge.clone() })
            .collect(),
    }
}

/// A force-layout node.
#[derive(Debug, Clone, Serialize)]
pub struct ForceNode {
    pub id: String,
    pub label: String,
    /// Grouping key for coloring: the node kind's wire string.
    pub group: String,
}

/// A force-layout link.
#[derive(Debug, Clone, Serialize)]
pub struct ForceLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The force-layout payload.
#[derive(Debug, Clone, Serialize)]
pub struct ForceGraph {
    pub nodes: Vec<ForceNode>,
    pub links: Vec<ForceLink>,
}

/// Flattens the graph to the force-layout shape.
pub fn force_graph(graph: &Graph) -> ForceGraph {
    ForceGraph {
        nodes: graph
            .nodes
            .iter()
            .map(|node| ForceNode {
                id: node.id.clone(),
                label: node.label.clone(),
                group: node.kind.as_str().to_string(),
            })
            .collect(),
        links: graph
            .edges
            .iter()
            .map(|edge| ForceLink {
                source: edge.source.clone(),
                target: edge.target.clone(),
                kind: edge.kind.clone(),
            })
            .collect(),
    }
}
