//! Export-eligibility resolution
//!
//! The one piece of real logic in the addon: given a scene object's class,
//! walk the inheritance chain upward and apply the nearest explicit
//! `canexport` declaration. A more specific declaration always overrides a
//! more general one, matching the engine's single-inheritance override
//! semantics. The per-instance `AMS_Exclude` attribute is honored ahead of
//! any class-level rule.

use thiserror::Error;

use crate::hierarchy::ClassHierarchy;
use crate::rules::{ExportFlag, ExportRuleSet};
use std::collections::HashSet;

/// Errors that can occur while resolving export eligibility
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The starting class is not in the hierarchy snapshot. Surfaced rather
    /// than coerced to "not exported" so a stale or mismatched host data
    /// source is visible instead of silently dropping objects.
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// The parent chain loops back on itself. The engine's data model is a
    /// tree, but nothing in the snapshot format enforces that, so a malformed
    /// host export must fail fast instead of spinning.
    #[error("Cyclic inheritance chain detected at class: {0}")]
    CyclicHierarchy(String),
}

/// Resolve the effective export flag for `class`.
///
/// Walks from `class` toward its root, returning the first explicit flag
/// found; returns [`ExportFlag::Unset`] when the chain is exhausted without
/// one. Pure over its inputs: no state, no side effects, identical inputs
/// give identical results.
///
/// The walk is an explicit loop over parent links rather than recursion, with
/// a visited set so a malformed cyclic chain fails with
/// [`ResolveError::CyclicHierarchy`] instead of looping forever.
pub fn resolve(
    class: &str,
    hierarchy: &ClassHierarchy,
    rules: &ExportRuleSet,
) -> Result<ExportFlag, ResolveError> {
    if !hierarchy.contains(class) {
        return Err(ResolveError::UnknownClass(class.to_string()));
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = class;
    loop {
        if !visited.insert(current) {
            return Err(ResolveError::CyclicHierarchy(current.to_string()));
        }
        if let Some(flag) = rules.explicit_flag(current) {
            return Ok(flag);
        }
        match hierarchy.parent_of(current) {
            Some(parent) => current = parent,
            None => return Ok(ExportFlag::Unset),
        }
    }
}

/// A placed scenario object as the exporter sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneObject {
    /// Engine class of the object.
    pub class_name: String,
    /// Value of the persisted `AMS_Exclude` editor attribute.
    pub excluded_from_export: bool,
}

impl SceneObject {
    /// Object with the attribute left at its default (`false`).
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            excluded_from_export: false,
        }
    }

    /// Object with the `AMS_Exclude` attribute ticked.
    pub fn excluded(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            excluded_from_export: true,
        }
    }
}

/// Final per-object verdict combining the instance attribute and the
/// class-level rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportDecision {
    /// The object's own `AMS_Exclude` attribute is set; class rules were not
    /// consulted.
    InstanceExcluded,
    /// Verdict from the class-level rule chain (may be `Unset`).
    ClassRule(ExportFlag),
}

impl ExportDecision {
    /// Whether the exporter should include this object.
    ///
    /// `Unset` counts as not included; the default policy for completely
    /// undeclared classes belongs to the exporter, and it currently errs on
    /// the side of leaving them out.
    pub fn is_exportable(self) -> bool {
        match self {
            ExportDecision::InstanceExcluded => false,
            ExportDecision::ClassRule(flag) => flag.is_included(),
        }
    }
}

/// Decide whether a placed object is eligible for export.
///
/// The per-instance `AMS_Exclude` attribute wins outright when set; otherwise
/// the class-level chain is resolved. Unknown classes still fail even when
/// the attribute is set, so data-integrity problems are never masked by a
/// checkbox.
pub fn export_decision(
    object: &SceneObject,
    hierarchy: &ClassHierarchy,
    rules: &ExportRuleSet,
) -> Result<ExportDecision, ResolveError> {
    if !hierarchy.contains(&object.class_name) {
        return Err(ResolveError::UnknownClass(object.class_name.clone()));
    }
    if object.excluded_from_export {
        return Ok(ExportDecision::InstanceExcluded);
    }
    resolve(&object.class_name, hierarchy, rules).map(ExportDecision::ClassRule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builtin_rules;

    fn vehicle_hierarchy() -> ClassHierarchy {
        ClassHierarchy::from_links([
            ("All", None),
            ("AllVehicles", Some("All")),
            ("Car_F", Some("AllVehicles")),
            ("Shelter_base_F", Some("AllVehicles")),
            ("CamoNet_BLUFOR_F", Some("Shelter_base_F")),
            ("Wall_F", None),
            ("Land_New_WiredFence_5m_F", Some("Wall_F")),
            ("Land_New_WiredFence_10m_F", Some("Wall_F")),
            ("TargetBootcampHumanSimple_F", None),
            ("TargetBootcampHuman_F", Some("TargetBootcampHumanSimple_F")),
        ])
    }

    #[test]
    fn test_nearest_declaration_wins() {
        let h = ClassHierarchy::from_links([
            ("Root", None),
            ("P2", Some("Root")),
            ("P1", Some("P2")),
            ("C", Some("P1")),
        ]);
        let rules = ExportRuleSet::from_rules([
            ("Root", ExportFlag::Included),
            ("P1", ExportFlag::Excluded),
        ]);
        assert_eq!(resolve("C", &h, &rules), Ok(ExportFlag::Excluded));
    }

    #[test]
    fn test_undeclared_chain_resolves_unset() {
        let h = ClassHierarchy::from_links([("Root", None), ("C", Some("Root"))]);
        let rules = ExportRuleSet::new();
        assert_eq!(resolve("C", &h, &rules), Ok(ExportFlag::Unset));
    }

    #[test]
    fn test_vehicle_subclasses_inherit_root_denial() {
        let h = vehicle_hierarchy();
        // Car_F declares nothing of its own; AllVehicles' -1 applies.
        assert_eq!(
            resolve("Car_F", &h, builtin_rules()),
            Ok(ExportFlag::Excluded)
        );
    }

    #[test]
    fn test_fence_included_despite_disjoint_vehicle_denial() {
        let h = vehicle_hierarchy();
        // Wall_F lineage never touches AllVehicles.
        assert_eq!(
            resolve("Land_New_WiredFence_5m_F", &h, builtin_rules()),
            Ok(ExportFlag::Included)
        );
        assert_eq!(
            resolve("Wall_F", &h, builtin_rules()),
            Ok(ExportFlag::Unset)
        );
    }

    #[test]
    fn test_camonet_overrides_vehicle_denial() {
        let h = vehicle_hierarchy();
        // CamoNet descends from AllVehicles but re-allows itself.
        assert_eq!(
            resolve("CamoNet_BLUFOR_F", &h, builtin_rules()),
            Ok(ExportFlag::Included)
        );
        assert_eq!(
            resolve("Shelter_base_F", &h, builtin_rules()),
            Ok(ExportFlag::Excluded)
        );
    }

    #[test]
    fn test_unknown_class_is_an_error() {
        let h = vehicle_hierarchy();
        assert_eq!(
            resolve("DoesNotExist", &h, builtin_rules()),
            Err(ResolveError::UnknownClass("DoesNotExist".to_string()))
        );
    }

    #[test]
    fn test_cyclic_chain_is_an_error() {
        let h = ClassHierarchy::from_links([("A", Some("B")), ("B", Some("A"))]);
        let rules = ExportRuleSet::new();
        assert!(matches!(
            resolve("A", &h, &rules),
            Err(ResolveError::CyclicHierarchy(_))
        ));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let h = vehicle_hierarchy();
        let first = resolve("CamoNet_BLUFOR_F", &h, builtin_rules());
        let second = resolve("CamoNet_BLUFOR_F", &h, builtin_rules());
        assert_eq!(first, second);
    }

    #[test]
    fn test_instance_exclude_beats_class_rule() {
        let h = vehicle_hierarchy();
        let object = SceneObject::excluded("Land_New_WiredFence_5m_F");
        let decision = export_decision(&object, &h, builtin_rules()).unwrap();
        assert_eq!(decision, ExportDecision::InstanceExcluded);
        assert!(!decision.is_exportable());
    }

    #[test]
    fn test_default_attribute_falls_through_to_class_rule() {
        let h = vehicle_hierarchy();
        let object = SceneObject::new("Land_New_WiredFence_5m_F");
        let decision = export_decision(&object, &h, builtin_rules()).unwrap();
        assert_eq!(decision, ExportDecision::ClassRule(ExportFlag::Included));
        assert!(decision.is_exportable());
    }

    #[test]
    fn test_unset_class_rule_is_not_exportable() {
        let h = vehicle_hierarchy();
        let object = SceneObject::new("Wall_F");
        let decision = export_decision(&object, &h, builtin_rules()).unwrap();
        assert_eq!(decision, ExportDecision::ClassRule(ExportFlag::Unset));
        assert!(!decision.is_exportable());
    }

    #[test]
    fn test_excluded_instance_of_unknown_class_still_errors() {
        let h = vehicle_hierarchy();
        let object = SceneObject::excluded("DoesNotExist");
        assert_eq!(
            export_decision(&object, &h, builtin_rules()),
            Err(ResolveError::UnknownClass("DoesNotExist".to_string()))
        );
    }
}
