//! # AMS Eden
//!
//! Scenario-editor addon model for GameRealisticMap Studio exports.
//!
//! The addon itself is declarative: it registers two editor menu entries, one
//! per-object "exclude from export" checkbox, and a sparse table of per-class
//! `canexport` flags. The one piece of logic layered on top is the
//! export-eligibility resolver, which walks a class's inheritance chain and
//! applies the nearest explicit declaration.
//!
//! The host engine (menus, property persistence, the class table itself) and
//! the external exporter application are black boxes; this crate models what
//! the addon declares and resolves eligibility on the exporter's behalf.
//!
//! ## Quick Start
//!
//! ```rust
//! use ams_eden::{builtin_rules, resolve, ClassHierarchy, ExportFlag};
//!
//! // Snapshot of the relevant slice of the engine class table.
//! let hierarchy = ClassHierarchy::from_links([
//!     ("All", None),
//!     ("AllVehicles", Some("All")),
//!     ("Car_F", Some("AllVehicles")),
//! ]);
//!
//! // Car_F declares nothing; AllVehicles' explicit -1 applies.
//! let flag = resolve("Car_F", &hierarchy, builtin_rules()).unwrap();
//! assert_eq!(flag, ExportFlag::Excluded);
//! assert_eq!(flag.as_i8(), -1);
//! ```

pub mod config;
pub mod editor;
pub mod hierarchy;
pub mod manifest;
pub mod resolve;
pub mod rules;

#[cfg(test)]
pub mod test_integration;

// Re-export commonly used types
pub use config::AddonConfig;
pub use editor::{
    ActionDispatcher, ActionId, AttributeControl, EditorSurface, MenuAction, MenuContainer,
    ObjectAttribute,
};
pub use hierarchy::ClassHierarchy;
pub use manifest::AddonManifest;
pub use resolve::{export_decision, resolve, ExportDecision, ResolveError, SceneObject};
pub use rules::{builtin_rules, ExportFlag, ExportRuleSet};

use anyhow::Result;
use tracing::info;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize structured logging for hosts that don't install their own
/// subscriber.
pub fn init() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("ams_eden=info")
        .with_target(false)
        .try_init();

    info!("Initializing ams-eden v{}", VERSION);

    Ok(())
}
