//! Identity resolution: scanned specs merged with authored overrides.
//!
//! The resolver produces the authoritative entity lists the node factory
//! and edge inferencer work from. Precedence is field-by-field and lives
//! entirely in [`merge_module`] and [`merge_contract`]: textual overrides
//! apply only when non-empty, typed attributes apply unconditionally, and
//! a module's phase follows the override record whenever one exists.
//!
//! Override records whose id matches no scanned entity still yield a
//! resolved record ([`Origin::MetaOnly`]), so planned-but-not-yet-scanned
//! entities receive nodes. Scanned entities come first in scanned order,
//! then meta-only ones in authored order. Duplicate ids within the
//! metadata itself are a caller error; the override index keeps the last
//! record per id.

use indexmap::IndexMap;

use crate::meta::{MetaContract, MetaModule};
use crate::project::{ContractSchema, ModuleSpec};

/// Where a resolved entity came from.
///
/// Auto edges and run-coverage edges are derived only from `Scanned`
/// modules; a meta-only module declares no I/O and no run has exercised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Present in the scanned specs (possibly with overrides applied).
    Scanned,
    /// Declared only in the metadata bundle.
    MetaOnly,
}

/// A module after override resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    pub id: String,
    /// Merged label; may still be empty, in which case the node factory
    /// falls back to the id.
    pub label: String,
    pub path: String,
    pub phase: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub verifies: Vec<String>,
    pub tier: Option<String>,
    pub mutable: Option<bool>,
    pub pinned: Option<bool>,
    pub category: Option<String>,
    pub origin: Origin,
}

/// A contract after override resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContract {
    pub id: String,
    pub label: String,
    pub schema_path: String,
    pub tier: Option<String>,
    pub mutable: Option<bool>,
    pub pinned: Option<bool>,
    pub category: Option<String>,
    pub origin: Origin,
}

/// Merges a scanned module with its optional override record.
pub fn merge_module(base: &ModuleSpec, overlay: Option<&MetaModule>) -> ResolvedModule {
    let label = match overlay {
        Some(m) if !m.label.is_empty() => m.label.clone(),
        _ => base.label.clone(),
    };
    // The override's phase applies even when empty: an authored record
    // owns the phase assignment outright.
    let phase = match overlay {
        Some(m) => m.phase.clone(),
        None => base.phase.clone(),
    };
    ResolvedModule {
        id: base.id.clone(),
        label,
        path: base.path.clone(),
        phase,
        inputs: base.inputs.clone(),
        outputs: base.outputs.clone(),
        verifies: base.verifies.clone(),
        tier: overlay.and_then(|m| m.tier.clone()),
        mutable: overlay.and_then(|m| m.mutable),
        pinned: overlay.and_then(|m| m.pinned),
        category: overlay.and_then(|m| m.category.clone()),
        origin: Origin::Scanned,
    }
}

/// Merges a scanned contract with its optional override record.
pub fn merge_contract(base: &ContractSchema, overlay: Option<&MetaContract>) -> ResolvedContract {
    let label = match overlay {
        Some(c) if !c.label.is_empty() => c.label.clone(),
        _ => base.label.clone(),
    };
    let schema_path = match overlay {
        Some(c) if !c.schema_path.is_empty() => c.schema_path.clone(),
        _ => base.schema_path.clone(),
    };
    ResolvedContract {
        id: base.id.clone(),
        label,
        schema_path,
        tier: overlay.and_then(|c| c.tier.clone()),
        mutable: overlay.and_then(|c| c.mutable),
        pinned: overlay.and_then(|c| c.pinned),
        category: overlay.and_then(|c| c.category.clone()),
        origin: Origin::Scanned,
    }
}

/// Synthesizes a resolved module from an override record with no scanned
/// counterpart.
pub fn synthesize_module(meta: &MetaModule) -> ResolvedModule {
    let base = ModuleSpec {
        id: meta.id.clone(),
        label: meta.label.clone(),
        path: meta.path.clone(),
        phase: meta.phase.clone(),
        ..ModuleSpec::default()
    };
    let mut resolved = merge_module(&base, Some(meta));
    resolved.origin = Origin::MetaOnly;
    resolved
}

/// Synthesizes a resolved contract from an override record with no
/// scanned counterpart.
pub fn synthesize_contract(meta: &MetaContract) -> ResolvedContract {
    let base = ContractSchema {
        id: meta.id.clone(),
        label: meta.label.clone(),
        schema_path: meta.schema_path.clone(),
    };
    let mut resolved = merge_contract(&base, Some(meta));
    resolved.origin = Origin::MetaOnly;
    resolved
}

/// Resolves the module list: scanned modules (merged with overrides) in
/// scanned order, then meta-only modules in authored order.
pub fn resolve_modules(scanned: &[ModuleSpec], overrides: &[MetaModule]) -> Vec<ResolvedModule> {
    let mut by_id: IndexMap<&str, &MetaModule> = IndexMap::new();
    for meta in overrides {
        by_id.insert(meta.id.as_str(), meta);
    }

    let mut resolved = Vec::with_capacity(scanned.len());
    for spec in scanned {
        resolved.push(merge_module(spec, by_id.get(spec.id.as_str()).copied()));
    }
    for meta in overrides {
        if !scanned.iter().any(|spec| spec.id == meta.id) {
            resolved.push(synthesize_module(meta));
        }
    }
    resolved
}

/// Resolves the contract list: scanned contracts (merged with overrides)
/// in scanned order, then meta-only contracts in authored order.
pub fn resolve_contracts(
    scanned: &[ContractSchema],
    overrides: &[MetaContract],
) -> Vec<ResolvedContract> {
    let mut by_id: IndexMap<&str, &MetaContract> = IndexMap::new();
    for meta in overrides {
        by_id.insert(meta.id.as_str(), meta);
    }

    let mut resolved = Vec::with_capacity(scanned.len());
    for spec in scanned {
        resolved.push(merge_contract(spec, by_id.get(spec.id.as_str()).copied()));
    }
    for meta in overrides {
        if !scanned.iter().any(|spec| spec.id == meta.id) {
            resolved.push(synthesize_contract(meta));
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanned_module(id: &str, label: &str, phase: &str) -> ModuleSpec {
        ModuleSpec {
            id: id.to_string(),
            label: label.to_string(),
            phase: phase.to_string(),
            ..ModuleSpec::default()
        }
    }

    #[test]
    fn override_label_wins_when_non_empty() {
        let spec = scanned_module("m1", "scanned", "p1");
        let meta = MetaModule {
            id: "m1".to_string(),
            label: "authored".to_string(),
            phase: "p1".to_string(),
            ..MetaModule::default()
        };
        let resolved = merge_module(&spec, Some(&meta));
        assert_eq!(resolved.label, "authored");
    }

    #[test]
    fn empty_override_label_keeps_scanned_label() {
        let spec = scanned_module("m1", "scanned", "p1");
        let meta = MetaModule {
            id: "m1".to_string(),
            phase: "p1".to_string(),
            ..MetaModule::default()
        };
        let resolved = merge_module(&spec, Some(&meta));
        assert_eq!(resolved.label, "scanned");
    }

    #[test]
    fn override_phase_applies_even_when_empty() {
        let spec = scanned_module("m1", "", "p1");
        let meta = MetaModule {
            id: "m1".to_string(),
            ..MetaModule::default()
        };
        let resolved = merge_module(&spec, Some(&meta));
        assert!(resolved.phase.is_empty());
    }

    #[test]
    fn module_path_always_comes_from_the_scan() {
        let spec = ModuleSpec {
            id: "m1".to_string(),
            path: "src/m1".to_string(),
            ..ModuleSpec::default()
        };
        let meta = MetaModule {
            id: "m1".to_string(),
            path: "elsewhere".to_string(),
            ..MetaModule::default()
        };
        let resolved = merge_module(&spec, Some(&meta));
        assert_eq!(resolved.path, "src/m1");
    }

    #[test]
    fn typed_attributes_come_only_from_the_override() {
        let spec = scanned_module("m1", "", "p1");
        let meta = MetaModule {
            id: "m1".to_string(),
            phase: "p1".to_string(),
            tier: Some("core".to_string()),
            mutable: Some(false),
            pinned: Some(true),
            category: Some("infra".to_string()),
            ..MetaModule::default()
        };
        let resolved = merge_module(&spec, Some(&meta));
        assert_eq!(resolved.tier.as_deref(), Some("core"));
        assert_eq!(resolved.mutable, Some(false));
        assert_eq!(resolved.pinned, Some(true));
        assert_eq!(resolved.category.as_deref(), Some("infra"));

        let plain = merge_module(&spec, None);
        assert_eq!(plain.tier, None);
        assert_eq!(plain.mutable, None);
    }

    #[test]
    fn contract_schema_path_prefers_non_empty_override() {
        let spec = ContractSchema {
            id: "c1".to_string(),
            schema_path: "schemas/c1.json".to_string(),
            ..ContractSchema::default()
        };
        let meta = MetaContract {
            id: "c1".to_string(),
            schema_path: "authored/c1.json".to_string(),
            ..MetaContract::default()
        };
        assert_eq!(
            merge_contract(&spec, Some(&meta)).schema_path,
            "authored/c1.json"
        );

        let empty_override = MetaContract {
            id: "c1".to_string(),
            ..MetaContract::default()
        };
        assert_eq!(
            merge_contract(&spec, Some(&empty_override)).schema_path,
            "schemas/c1.json"
        );
    }

    #[test]
    fn meta_only_module_is_synthesized_after_scanned() {
        let scanned = vec![scanned_module("m1", "one", "p1")];
        let overrides = vec![MetaModule {
            id: "planned".to_string(),
            label: "Planned".to_string(),
            phase: "p2".to_string(),
            ..MetaModule::default()
        }];
        let resolved = resolve_modules(&scanned, &overrides);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].id, "m1");
        assert_eq!(resolved[0].origin, Origin::Scanned);
        assert_eq!(resolved[1].id, "planned");
        assert_eq!(resolved[1].origin, Origin::MetaOnly);
        assert_eq!(resolved[1].label, "Planned");
        assert_eq!(resolved[1].phase, "p2");
        assert!(resolved[1].inputs.is_empty());
    }

    #[test]
    fn duplicate_override_ids_last_wins_in_the_index() {
        let scanned = vec![scanned_module("m1", "", "p1")];
        let overrides = vec![
            MetaModule {
                id: "m1".to_string(),
                label: "first".to_string(),
                ..MetaModule::default()
            },
            MetaModule {
                id: "m1".to_string(),
                label: "second".to_string(),
                ..MetaModule::default()
            },
        ];
        let resolved = resolve_modules(&scanned, &overrides);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].label, "second");
    }

    #[test]
    fn scanned_order_is_preserved() {
        let scanned = vec![
            scanned_module("b", "", ""),
            scanned_module("a", "", ""),
        ];
        let resolved = resolve_modules(&scanned, &[]);
        let ids: Vec<&str> = resolved.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
