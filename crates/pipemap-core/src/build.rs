//! The graph assembler: the crate's single entry point.
//!
//! Orchestrates resolver, node factory, and edge inference in a fixed
//! order, dedups through one registry per element kind, and returns the
//! finished [`Graph`]. All state is local to the call; two builds over
//! identical inputs (and identical docs-root contents) produce identical
//! node and edge sequences.
//!
//! The build cannot fail. Degraded inputs degrade the output instead:
//! a missing docs root yields no doc elements, unresolvable references
//! yield dangling edges, and duplicate edge ids are dropped first-writer
//! wins in class order (structural, manual, auto, doc chain, run
//! coverage).

use std::collections::HashSet;

use crate::docs::list_doc_files;
use crate::edges::{
    containment_edges, declaration_edges, doc_chain_edges, manual_edges, run_coverage_edges,
};
use crate::graph::{Graph, GraphEdge, GraphNode, NodeKind, DEFAULT_SCHEMA_VERSION};
use crate::meta::MetaGraph;
use crate::nodes::{contract_node, doc_node, module_node, phase_node, run_node};
use crate::project::{ContractSchema, ModuleSpec, ProjectLayout};
use crate::registry::Registry;
use crate::resolve::{resolve_contracts, resolve_modules};
use crate::runs::RunState;

/// Assembles the pipeline graph from already-parsed inputs.
///
/// Node order: phases, modules (scanned then meta-only), contracts
/// (likewise), docs, runs. Edge order: structural, manual, auto, doc
/// chain, run coverage.
pub fn build(
    layout: &ProjectLayout,
    modules: &[ModuleSpec],
    contracts: &[ContractSchema],
    meta: &MetaGraph,
    runs: &RunState,
) -> Graph {
    let resolved_modules = resolve_modules(modules, &meta.modules);
    let resolved_contracts = resolve_contracts(contracts, &meta.contracts);
    let doc_files = list_doc_files(&layout.docs_root);

    let mut node_registry: Registry<GraphNode> = Registry::new();
    for phase in &meta.phases {
        add_node(&mut node_registry, phase_node(phase));
    }
    for module in &resolved_modules {
        add_node(&mut node_registry, module_node(module));
    }
    for contract in &resolved_contracts {
        add_node(&mut node_registry, contract_node(contract));
    }
    for doc in &doc_files {
        add_node(&mut node_registry, doc_node(doc));
    }
    for run in &runs.runs {
        add_node(&mut node_registry, run_node(run));
    }
    let nodes = node_registry.into_values();

    let contract_ids: HashSet<String> = nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Contract)
        .map(|node| node.id.clone())
        .collect();

    let mut edge_registry: Registry<GraphEdge> = Registry::new();
    add_edges(&mut edge_registry, containment_edges(&nodes));
    add_edges(&mut edge_registry, manual_edges(&meta.edges));
    add_edges(&mut edge_registry, declaration_edges(&resolved_modules, &contract_ids));
    add_edges(&mut edge_registry, doc_chain_edges(&doc_files));
    add_edges(&mut edge_registry, run_coverage_edges(&runs.runs, &resolved_modules));

    let schema_version = if meta.schema_version.is_empty() {
        DEFAULT_SCHEMA_VERSION.to_string()
    } else {
        meta.schema_version.clone()
    };

    Graph {
        schema_version,
        nodes,
        edges: edge_registry.into_values(),
    }
}

fn add_node(registry: &mut Registry<GraphNode>, node: GraphNode) {
    let id = node.id.clone();
    registry.insert(id, node);
}

fn add_edges(registry: &mut Registry<GraphEdge>, edges: Vec<GraphEdge>) {
    for edge in edges {
        let id = edge.id.clone();
        registry.insert(id, edge);
    }
}
