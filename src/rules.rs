//! Class-level export eligibility table
//!
//! The addon attaches a `canexport` flag to a handful of engine classes; every
//! other class is left undeclared and inherits the nearest ancestor's flag
//! (see [`crate::resolve`]). The flag is deliberately three-valued so that
//! "explicitly allowed", "explicitly denied" and "no opinion" stay distinct
//! all the way to the exporter.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Export eligibility polarity attached to a class.
///
/// The numeric values are part of the exporter contract: callers compare
/// against zero rather than collapsing the flag to a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFlag {
    /// Explicitly denied (`canexport = -1`).
    Excluded,
    /// No declaration; the caller picks the default policy.
    Unset,
    /// Explicitly allowed (`canexport = 1`).
    Included,
}

impl ExportFlag {
    /// Raw `canexport` value: `-1`, `0` or `1`.
    pub fn as_i8(self) -> i8 {
        match self {
            ExportFlag::Excluded => -1,
            ExportFlag::Unset => 0,
            ExportFlag::Included => 1,
        }
    }

    /// Parse a raw `canexport` value, rejecting anything outside `{-1, 0, 1}`.
    pub fn from_i8(raw: i8) -> Option<Self> {
        match raw {
            -1 => Some(ExportFlag::Excluded),
            0 => Some(ExportFlag::Unset),
            1 => Some(ExportFlag::Included),
            _ => None,
        }
    }

    /// Whether the flag explicitly allows export.
    pub fn is_included(self) -> bool {
        self.as_i8() > 0
    }

    /// Whether the flag explicitly denies export.
    pub fn is_excluded(self) -> bool {
        self.as_i8() < 0
    }
}

impl Default for ExportFlag {
    fn default() -> Self {
        ExportFlag::Unset
    }
}

/// Sparse map from class name to its explicit export flag.
///
/// Only classes with an explicit declaration appear here; everything else is
/// resolved through the inheritance chain. Declared once at configuration
/// load and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRuleSet {
    rules: HashMap<String, ExportFlag>,
}

impl ExportRuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Build a rule set from `(class, flag)` pairs.
    pub fn from_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, ExportFlag)>,
        S: Into<String>,
    {
        let rules: HashMap<String, ExportFlag> =
            rules.into_iter().map(|(c, f)| (c.into(), f)).collect();
        debug!("Built export rule set with {} declarations", rules.len());
        Self { rules }
    }

    /// Explicit flag declared for `class`, if any.
    ///
    /// `None` means "no declaration", which is not the same as
    /// [`ExportFlag::Unset`] stored explicitly — though the resolver treats an
    /// exhausted chain the same way.
    pub fn explicit_flag(&self, class: &str) -> Option<ExportFlag> {
        self.rules.get(class).copied()
    }

    /// Number of explicit declarations.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set has no declarations.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all explicit declarations.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ExportFlag)> {
        self.rules.iter().map(|(c, f)| (c.as_str(), *f))
    }
}

/// The rule declarations shipped with the addon.
///
/// Fences and the bootcamp target dummy are man-made map features the
/// exporter wants; vehicles as a whole are editor clutter, so the root
/// `AllVehicles` class is denied and the camouflage net (which descends from
/// it via `Shelter_base_F`) is individually re-allowed.
static BUILTIN_RULES: Lazy<ExportRuleSet> = Lazy::new(|| {
    ExportRuleSet::from_rules([
        ("Land_New_WiredFence_5m_F", ExportFlag::Included),
        ("Land_New_WiredFence_10m_F", ExportFlag::Included),
        ("TargetBootcampHuman_F", ExportFlag::Included),
        ("AllVehicles", ExportFlag::Excluded),
        ("CamoNet_BLUFOR_F", ExportFlag::Included),
    ])
});

/// Rule table matching the shipped addon configuration.
pub fn builtin_rules() -> &'static ExportRuleSet {
    &BUILTIN_RULES
}
