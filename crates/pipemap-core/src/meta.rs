//! Hand-authored metadata overrides.
//!
//! [`MetaGraph`] is the second source of truth beside the scanned specs:
//! it declares the pipeline's phases, overrides scanned module/contract
//! fields, contributes entities the scanner has not seen yet, and carries
//! manually authored edges. Override precedence lives in
//! [`crate::resolve`]; these types only describe the authored shape.

use serde::{Deserialize, Serialize};

/// A named pipeline phase with its display order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaPhase {
    /// Unique phase id.
    pub id: String,
    /// Display label; empty falls back to the id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Ordering key among phases.
    #[serde(default)]
    pub order: i64,
}

/// An authored override record for a module.
///
/// Textual fields override the scanned value only when non-empty; the
/// typed attributes (`tier`, `mutable`, `pinned`, `category`) exist only
/// here and are applied unconditionally. `phase` is also applied
/// unconditionally when this record exists, so an empty authored phase
/// detaches the module from its scanned phase.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaModule {
    /// Id of the module this record overrides (or declares, when the
    /// scanner has no module with this id).
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,
    /// Architectural tier tag (free-form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    /// Whether the module's outputs are mutable.
    #[serde(rename = "mutable", default, skip_serializing_if = "Option::is_none")]
    pub mutable: Option<bool>,
    /// Whether the node should be pinned in rendered layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    /// Display category tag (free-form).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// An authored override record for a contract. Mirrors [`MetaModule`]
/// plus the schema path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaContract {
    /// Id of the contract this record overrides or declares.
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(rename = "schemaPath", default, skip_serializing_if = "String::is_empty")]
    pub schema_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    #[serde(rename = "mutable", default, skip_serializing_if = "Option::is_none")]
    pub mutable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A manually authored edge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaEdge {
    /// Explicit edge id; empty means the id is computed from type, source
    /// and target.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Edge type, carried verbatim. `docs_link` edges land in the Docs view.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display label.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
}

/// The authored metadata bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaGraph {
    /// Schema version stamped onto the assembled graph; empty means the
    /// build falls back to [`crate::graph::DEFAULT_SCHEMA_VERSION`].
    #[serde(rename = "schemaVersion", default, skip_serializing_if = "String::is_empty")]
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phases: Vec<MetaPhase>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modules: Vec<MetaModule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contracts: Vec<MetaContract>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<MetaEdge>,
}
