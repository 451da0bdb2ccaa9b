//! Aggregate addon configuration
//!
//! Everything the addon declares, as one immutable value: the manifest, the
//! editor surface, and the class-level export rules. The host loads this once
//! at startup; nothing mutates it afterwards, so it can be handed out by
//! shared reference from any thread.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::editor::EditorSurface;
use crate::manifest::AddonManifest;
use crate::rules::{builtin_rules, ExportRuleSet};

/// The full declarative content of the addon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonConfig {
    /// Patch-registration metadata.
    pub manifest: AddonManifest,

    /// Editor menu entries and object attributes.
    pub editor: EditorSurface,

    /// Class-level export declarations.
    pub rules: ExportRuleSet,
}

impl AddonConfig {
    /// Configuration identical to the shipped addon.
    pub fn builtin() -> Self {
        Self {
            manifest: AddonManifest::builtin(),
            editor: EditorSurface::builtin(),
            rules: builtin_rules().clone(),
        }
    }

    /// Load a configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading addon config from: {}", path.as_ref().display());

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AddonConfig =
            toml::from_str(&content).context("Failed to parse addon config")?;

        info!(
            "Loaded addon config '{}' with {} export rules",
            config.manifest.name,
            config.rules.len()
        );
        Ok(config)
    }

    /// Serialize for the host's loader.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
