//! Scenario-editor UI surface declarations
//!
//! The addon extends the host's scenario editor with two menu entries and one
//! per-object attribute. Everything here is declarative: the host owns the
//! menus, the property panel, and the persistence of attribute values. The
//! only live seam is [`ActionDispatcher`], the host's fire-and-forget task
//! spawner that menu triggers are dispatched into.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Identifier of an addon-provided editor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    /// Export the current scenario to GameRealisticMap Studio.
    Export,
    /// Re-create objects hidden by a previous import.
    Transform,
}

/// Host menu container an action is registered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuContainer {
    /// The editor's top "Tools" menu strip.
    ToolsMenu,
    /// The right-click context menu on scene objects.
    ContextMenu,
}

/// A menu entry registered into one of the host's menu containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuAction {
    /// Which addon action this entry triggers.
    pub id: ActionId,

    /// Text shown in the menu.
    pub text: String,

    /// Where the host appends the entry.
    pub container: MenuContainer,

    /// Host-evaluated expression gating visibility, if any.
    pub condition_show: Option<String>,

    /// Whether triggering the entry opens a new host window.
    pub opens_new_window: bool,
}

/// Kind of control the host renders for an object attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeControl {
    Checkbox,
}

/// A persisted per-object custom property exposed in the host's
/// object-property panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectAttribute {
    /// Property key the host persists per object.
    pub property: String,

    /// Label shown next to the control.
    pub display_name: String,

    /// Host attribute category the control is grouped under.
    pub category: String,

    /// Control rendered in the property panel.
    pub control: AttributeControl,

    /// Value the host assigns until the user touches the control.
    pub default_value: bool,
}

/// The complete editor surface the addon registers with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSurface {
    /// Menu entries, in registration order.
    pub actions: Vec<MenuAction>,

    /// Per-object attributes.
    pub attributes: Vec<ObjectAttribute>,
}

impl EditorSurface {
    /// The surface the shipped addon declares: the Tools-menu export entry,
    /// the context-menu transform entry, and the `AMS_Exclude` checkbox.
    pub fn builtin() -> Self {
        Self {
            actions: vec![
                MenuAction {
                    id: ActionId::Export,
                    text: "Export to GameRealisticMap Studio".to_string(),
                    container: MenuContainer::ToolsMenu,
                    condition_show: None,
                    opens_new_window: false,
                },
                MenuAction {
                    id: ActionId::Transform,
                    text: "Re-create hidden objects".to_string(),
                    container: MenuContainer::ContextMenu,
                    condition_show: Some("selectedLogic".to_string()),
                    opens_new_window: false,
                },
            ],
            attributes: vec![ObjectAttribute {
                property: "AMS_Exclude".to_string(),
                display_name: "Exclude from GameRealisticMap Studio Export".to_string(),
                category: "StateSpecial".to_string(),
                control: AttributeControl::Checkbox,
                default_value: false,
            }],
        }
    }

    /// Look up the menu entry for an action.
    pub fn action(&self, id: ActionId) -> Option<&MenuAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Look up an attribute by its persisted property key.
    pub fn attribute(&self, property: &str) -> Option<&ObjectAttribute> {
        self.attributes.iter().find(|a| a.property == property)
    }

    /// Serialize the surface for the host's loader.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Dispatch a menu trigger into the host's task spawner.
    ///
    /// Fire-and-forget by contract: no return value is observed, matching the
    /// host's spawn semantics.
    pub fn trigger(&self, id: ActionId, dispatcher: &dyn ActionDispatcher) {
        if let Some(action) = self.action(id) {
            info!("Dispatching editor action: {}", action.text);
            dispatcher.spawn(id);
        }
    }
}

impl Default for EditorSurface {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The host's task-spawning mechanism for editor actions.
///
/// Implementations run the action asynchronously in the host; the addon never
/// observes completion or a result.
pub trait ActionDispatcher: Send + Sync {
    /// Spawn the handler for `action` in the host.
    fn spawn(&self, action: ActionId);
}
