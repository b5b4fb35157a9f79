//! Edge inference: the five edge classes, each derived independently.
//!
//! Every pass returns a plain `Vec<GraphEdge>`; the assembler feeds them
//! into one registry in class order, so duplicates across classes resolve
//! first-writer-wins. Dangling references are emitted as-is -- the graph
//! does not validate referential integrity.

use std::collections::HashSet;

use crate::docs::DocFile;
use crate::graph::{Confidence, GraphEdge, GraphNode, NodeKind, View};
use crate::meta::MetaEdge;
use crate::nodes::run_node_id;
use crate::resolve::{Origin, ResolvedModule};
use crate::runs::RunInfo;

pub const PHASE_CONTAINS: &str = "phase_contains";
pub const PRODUCES: &str = "produces";
pub const CONSUMES: &str = "consumes";
pub const VERIFIES: &str = "verifies";
pub const DOCS_LINK: &str = "docs_link";
pub const RUN_TOUCHES: &str = "run_touches";

/// Structural containment: one `phase_contains` edge per module node with
/// a non-empty phase. Works off the built node list, not the raw specs,
/// so it reflects post-merge phase assignment.
pub fn containment_edges(nodes: &[GraphNode]) -> Vec<GraphEdge> {
    nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Module && !node.phase.is_empty())
        .map(|node| GraphEdge::new(PHASE_CONTAINS, node.phase.clone(), node.id.clone()))
        .collect()
}

/// Manual edges: authored records carried verbatim, tagged `manual`.
/// An explicit id wins over the computed one; `docs_link` edges land in
/// the Docs view.
pub fn manual_edges(authored: &[MetaEdge]) -> Vec<GraphEdge> {
    authored
        .iter()
        .map(|meta| {
            let mut edge = GraphEdge::new(meta.kind.clone(), meta.source.clone(), meta.target.clone());
            if !meta.id.is_empty() {
                edge.id = meta.id.clone();
            }
            edge.label = meta.label.clone();
            edge.confidence = Some(Confidence::Manual);
            edge.view = if meta.kind == DOCS_LINK {
                View::Docs
            } else {
                View::Pipeline
            };
            edge
        })
        .collect()
}

/// Resolves a contract reference: the literal string when it names a
/// known contract, otherwise the segment before the first `.` (dotted
/// field paths like `contract_id.field`). May return an id with no
/// corresponding node; only the empty string is treated as unresolvable.
fn resolve_contract_ref<'a>(reference: &'a str, known: &HashSet<String>) -> &'a str {
    if known.contains(reference) {
        reference
    } else {
        reference.split('.').next().unwrap_or("")
    }
}

fn auto_edge(kind: &str, source: &str, target: &str) -> GraphEdge {
    let mut edge = GraphEdge::new(kind, source, target);
    edge.confidence = Some(Confidence::Auto);
    edge
}

/// Auto edges from module I/O declarations: `produces` (module→contract)
/// per output, `consumes` (contract→module) per input, `verifies`
/// (module→target) per verification reference. Only scanned modules
/// declare I/O; references resolving to an empty id are skipped.
pub fn declaration_edges(
    modules: &[ResolvedModule],
    contract_ids: &HashSet<String>,
) -> Vec<GraphEdge> {
    let mut edges = Vec::new();
    for module in modules.iter().filter(|m| m.origin == Origin::Scanned) {
        for reference in &module.outputs {
            let contract = resolve_contract_ref(reference, contract_ids);
            if !contract.is_empty() {
                edges.push(auto_edge(PRODUCES, &module.id, contract));
            }
        }
        for reference in &module.inputs {
            let contract = resolve_contract_ref(reference, contract_ids);
            if !contract.is_empty() {
                edges.push(auto_edge(CONSUMES, contract, &module.id));
            }
        }
        for reference in &module.verifies {
            let target = resolve_contract_ref(reference, contract_ids);
            if !target.is_empty() {
                edges.push(auto_edge(VERIFIES, &module.id, target));
            }
        }
    }
    edges
}

/// Doc-chain edges: the name-sorted doc files linked as a simple chain.
/// A heuristic reading order, not a declared dependency, hence `low`
/// confidence.
pub fn doc_chain_edges(docs: &[DocFile]) -> Vec<GraphEdge> {
    docs.windows(2)
        .map(|pair| {
            let mut edge = GraphEdge::new(DOCS_LINK, pair[0].id.clone(), pair[1].id.clone());
            edge.confidence = Some(Confidence::Low);
            edge.view = View::Docs;
            edge
        })
        .collect()
}

/// Run-coverage edges: every run linked to every scanned module.
///
/// Deliberately coarse placeholder: it asserts only that the run occurred
/// in the presence of these modules, not that it exercised them, and it
/// is quadratic in runs x modules. Kept for compatibility; consumers must
/// not read it as precise attribution.
pub fn run_coverage_edges(runs: &[RunInfo], modules: &[ResolvedModule]) -> Vec<GraphEdge> {
    let mut edges = Vec::new();
    for run in runs {
        let source = run_node_id(&run.id);
        for module in modules.iter().filter(|m| m.origin == Origin::Scanned) {
            let mut edge = GraphEdge::new(RUN_TOUCHES, source.clone(), module.id.clone());
            edge.confidence = Some(Confidence::Low);
            edges.push(edge);
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::module_node;

    fn resolved(id: &str, phase: &str) -> ResolvedModule {
        ResolvedModule {
            id: id.to_string(),
            label: String::new(),
            path: String::new(),
            phase: phase.to_string(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            verifies: Vec::new(),
            tier: None,
            mutable: None,
            pinned: None,
            category: None,
            origin: Origin::Scanned,
        }
    }

    fn known(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn containment_skips_modules_without_a_phase() {
        let nodes: Vec<GraphNode> = vec![
            module_node(&resolved("m1", "p1")),
            module_node(&resolved("m2", "")),
        ];
        let edges = containment_edges(&nodes);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].id, "phase_contains:p1->m1");
        assert_eq!(edges[0].source, "p1");
        assert_eq!(edges[0].target, "m1");
        assert_eq!(edges[0].confidence, None);
    }

    #[test]
    fn manual_edge_prefers_the_explicit_id() {
        let authored = vec![
            MetaEdge {
                id: "custom".to_string(),
                source: "a".to_string(),
                target: "b".to_string(),
                kind: "depends_on".to_string(),
                label: "hand drawn".to_string(),
            },
            MetaEdge {
                id: String::new(),
                source: "a".to_string(),
                target: "c".to_string(),
                kind: "depends_on".to_string(),
                label: String::new(),
            },
        ];
        let edges = manual_edges(&authored);
        assert_eq!(edges[0].id, "custom");
        assert_eq!(edges[0].label, "hand drawn");
        assert_eq!(edges[0].confidence, Some(Confidence::Manual));
        assert_eq!(edges[1].id, "depends_on:a->c");
    }

    #[test]
    fn manual_docs_link_lands_in_docs_view() {
        let authored = vec![MetaEdge {
            id: String::new(),
            source: "doc:a".to_string(),
            target: "doc:b".to_string(),
            kind: DOCS_LINK.to_string(),
            label: String::new(),
        }];
        let edges = manual_edges(&authored);
        assert_eq!(edges[0].view, View::Docs);
    }

    #[test]
    fn dotted_reference_resolves_to_its_prefix() {
        let mut module = resolved("m1", "");
        module.outputs = vec!["c1.fieldA".to_string()];
        let edges = declaration_edges(&[module], &known(&["c1"]));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].id, "produces:m1->c1");
        assert_eq!(edges[0].confidence, Some(Confidence::Auto));
    }

    #[test]
    fn literal_contract_id_with_a_dot_is_kept() {
        let mut module = resolved("m1", "");
        module.outputs = vec!["c1.fieldA".to_string()];
        let edges = declaration_edges(&[module], &known(&["c1.fieldA"]));
        assert_eq!(edges[0].target, "c1.fieldA");
    }

    #[test]
    fn unknown_reference_is_kept_as_a_dangling_edge() {
        let mut module = resolved("m1", "");
        module.verifies = vec!["gate.threshold".to_string()];
        let edges = declaration_edges(&[module], &known(&[]));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, "gate");
    }

    #[test]
    fn empty_references_are_skipped() {
        let mut module = resolved("m1", "");
        module.inputs = vec![String::new(), ".dangling".to_string()];
        let edges = declaration_edges(&[module], &known(&[]));
        assert!(edges.is_empty());
    }

    #[test]
    fn consumes_points_from_contract_to_module() {
        let mut module = resolved("m1", "");
        module.inputs = vec!["c1".to_string()];
        let edges = declaration_edges(&[module], &known(&["c1"]));
        assert_eq!(edges[0].source, "c1");
        assert_eq!(edges[0].target, "m1");
    }

    #[test]
    fn meta_only_modules_declare_no_edges() {
        let mut module = resolved("planned", "");
        module.origin = Origin::MetaOnly;
        module.outputs = vec!["c1".to_string()];
        assert!(declaration_edges(&[module], &known(&["c1"])).is_empty());
    }

    #[test]
    fn doc_chain_links_consecutive_files() {
        let docs = vec![
            DocFile {
                id: "doc:a".to_string(),
                file_name: "a.md".to_string(),
                path: "a.md".into(),
            },
            DocFile {
                id: "doc:b".to_string(),
                file_name: "b.md".to_string(),
                path: "b.md".into(),
            },
            DocFile {
                id: "doc:c".to_string(),
                file_name: "c.md".to_string(),
                path: "c.md".into(),
            },
        ];
        let edges = doc_chain_edges(&docs);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].id, "docs_link:doc:a->doc:b");
        assert_eq!(edges[1].id, "docs_link:doc:b->doc:c");
        assert!(edges.iter().all(|e| e.view == View::Docs));
        assert!(edges.iter().all(|e| e.confidence == Some(Confidence::Low)));
    }

    #[test]
    fn run_coverage_is_the_full_cross_product_over_scanned_modules() {
        let runs = vec![
            RunInfo {
                id: "r1".to_string(),
                ..RunInfo::default()
            },
            RunInfo {
                id: "r2".to_string(),
                ..RunInfo::default()
            },
        ];
        let mut planned = resolved("planned", "");
        planned.origin = Origin::MetaOnly;
        let modules = vec![resolved("m1", ""), resolved("m2", ""), planned];

        let edges = run_coverage_edges(&runs, &modules);
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0].id, "run_touches:run:r1->m1");
        assert_eq!(edges[3].id, "run_touches:run:r2->m2");
        assert!(edges.iter().all(|e| e.confidence == Some(Confidence::Low)));
        assert!(edges.iter().all(|e| e.view == View::Pipeline));
    }
}
