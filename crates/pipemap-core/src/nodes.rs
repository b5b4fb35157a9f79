//! Node construction: one constructor per node kind.
//!
//! Each constructor turns a resolved entity into a [`GraphNode`] with
//! normalized attributes. No constructor performs I/O or touches shared
//! state; the assembler decides order and uniqueness.

use serde_json::Value;

use crate::docs::DocFile;
use crate::graph::{GraphNode, NodeKind, View};
use crate::meta::MetaPhase;
use crate::resolve::{ResolvedContract, ResolvedModule};
use crate::runs::RunInfo;

/// Parent id assigned to every doc node.
pub const DOCS_PARENT: &str = "Docs";

/// Node id for a run record.
pub fn run_node_id(run_id: &str) -> String {
    format!("run:{}", run_id)
}

/// Builds a phase node. The phase's order lands in `meta.order`.
pub fn phase_node(phase: &MetaPhase) -> GraphNode {
    let label = if phase.label.is_empty() {
        phase.id.clone()
    } else {
        phase.label.clone()
    };
    let mut node = GraphNode::new(phase.id.clone(), NodeKind::Phase, label);
    node.meta.insert("order".to_string(), Value::from(phase.order));
    node
}

/// Builds a module node. `parent` mirrors the resolved phase.
pub fn module_node(module: &ResolvedModule) -> GraphNode {
    let label = if module.label.is_empty() {
        module.id.clone()
    } else {
        module.label.clone()
    };
    let mut node = GraphNode::new(module.id.clone(), NodeKind::Module, label);
    node.phase = module.phase.clone();
    node.parent = module.phase.clone();
    node.path = module.path.clone();
    node.tier = module.tier.clone();
    node.mutable = module.mutable;
    node.pinned = module.pinned;
    node.category = module.category.clone();
    node
}

/// Builds a contract node. `path` carries the resolved schema path.
pub fn contract_node(contract: &ResolvedContract) -> GraphNode {
    let label = if contract.label.is_empty() {
        contract.id.clone()
    } else {
        contract.label.clone()
    };
    let mut node = GraphNode::new(contract.id.clone(), NodeKind::Contract, label);
    node.path = contract.schema_path.clone();
    node.tier = contract.tier.clone();
    node.mutable = contract.mutable;
    node.pinned = contract.pinned;
    node.category = contract.category.clone();
    node
}

/// Builds a doc node. Doc nodes are the only nodes in the Docs view.
pub fn doc_node(doc: &DocFile) -> GraphNode {
    let mut node = GraphNode::new(doc.id.clone(), NodeKind::Doc, doc.file_name.clone());
    node.path = doc.path.to_string_lossy().into_owned();
    node.parent = DOCS_PARENT.to_string();
    node.view = View::Docs;
    node.category = Some(DOCS_PARENT.to_string());
    node
}

/// Builds a run node. The run's status lands in `statusFlags`; its path
/// and (when recorded) start time land in `meta`.
pub fn run_node(run: &RunInfo) -> GraphNode {
    let mut node = GraphNode::new(run_node_id(&run.id), NodeKind::Run, run.id.clone());
    node.status_flags.insert(run.status.clone());
    node.meta
        .insert("path".to_string(), Value::from(run.path.clone()));
    if !run.start_time.is_empty() {
        node.meta
            .insert("start_time".to_string(), Value::from(run.start_time.clone()));
    }
    node
}
