//! Addon manifest parsing and validation
//!
//! Models the addon's patch-registration block: name, author, the minimum
//! host version, and the companion addons that must be loaded first. The host
//! engine consumes this to decide load order; nothing here is behavior.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Minimum host engine version the shipped addon requires.
pub const REQUIRED_HOST_VERSION: &str = "1.0.0";

/// Addon metadata registered with the host engine's patch system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonManifest {
    /// Addon component name.
    pub name: String,

    /// Author credited in the host's addon list.
    pub author: String,

    /// Minimum host engine version.
    pub required_version: String,

    /// Companion addons that must load before this one.
    #[serde(default)]
    pub required_addons: Vec<String>,

    /// Object classes this addon introduces (none; it only annotates
    /// existing ones).
    #[serde(default)]
    pub units: Vec<String>,

    /// Weapon classes this addon introduces (none).
    #[serde(default)]
    pub weapons: Vec<String>,
}

impl AddonManifest {
    /// Manifest matching the shipped addon configuration.
    pub fn builtin() -> Self {
        Self {
            name: "eden".to_string(),
            author: "GrueArbre".to_string(),
            required_version: REQUIRED_HOST_VERSION.to_string(),
            required_addons: vec!["ams_main".to_string(), "A3_3DEN".to_string()],
            units: Vec::new(),
            weapons: Vec::new(),
        }
    }

    /// Parse a manifest from TOML text.
    pub fn parse_from_str(content: &str) -> Result<Self> {
        debug!("Parsing addon manifest from string");

        let manifest: AddonManifest =
            toml::from_str(content).context("Failed to parse addon manifest content")?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a manifest from a TOML file on disk.
    pub fn parse_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!(
            "Parsing addon manifest from file: {}",
            path.as_ref().display()
        );

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read manifest file: {}", path.as_ref().display()))?;

        Self::parse_from_str(&content)
    }

    /// Validate required fields.
    fn validate(&self) -> Result<()> {
        info!("Validating addon manifest: {}", self.name);

        if self.name.is_empty() {
            bail!("Addon name cannot be empty");
        }

        if self.author.is_empty() {
            bail!("Addon author cannot be empty");
        }

        if self.required_version.is_empty() {
            bail!("Addon must specify a required host version");
        }

        for addon in &self.required_addons {
            if addon.is_empty() {
                bail!("Required addon names cannot be empty");
            }
        }

        // The addon annotates engine classes rather than shipping its own.
        if !self.units.is_empty() || !self.weapons.is_empty() {
            warn!(
                "Manifest '{}' declares units or weapons; this addon normally ships none",
                self.name
            );
        }

        debug!("Addon manifest validation completed successfully");
        Ok(())
    }
}
