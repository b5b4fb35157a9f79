//! Scanned project inputs.
//!
//! These descriptors are produced by filesystem/project scanning outside
//! this crate and are read-only here. Textual fields use the empty string
//! to mean "unset", which is what the override merge in [`crate::resolve`]
//! keys on.

use serde::{Deserialize, Serialize};

/// Top-level layout of the scanned project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Directory holding the project's Markdown documentation. Empty means
    /// the project has no docs root; doc nodes and edges are then omitted
    /// entirely.
    #[serde(rename = "docsRoot", default, skip_serializing_if = "String::is_empty")]
    pub docs_root: String,
}

/// A scanned pipeline module with its declared contract references.
///
/// `inputs`, `outputs`, and `verifies` each hold ordered contract
/// references: either a bare contract id, or a dotted field path whose
/// first segment is the contract id (`"contract_id.field"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Unique module id. Assumed non-empty and unique across modules.
    pub id: String,
    /// Human-readable label; empty falls back to the id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Source path of the module.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    /// Id of the owning phase; empty if unassigned.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phase: String,
    /// Contract references this module consumes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    /// Contract references this module produces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    /// Contract references this module verifies against.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub verifies: Vec<String>,
}

/// A scanned data contract schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractSchema {
    /// Unique contract id. Assumed non-empty and unique across contracts.
    pub id: String,
    /// Human-readable label; empty falls back to the id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    /// Path of the schema file describing this contract.
    #[serde(rename = "schemaPath", default, skip_serializing_if = "String::is_empty")]
    pub schema_path: String,
}
