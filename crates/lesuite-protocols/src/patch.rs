//! DOM patches: the serializable output of a dispatch.
//!
//! Handlers never touch a DOM. They emit patches describing the mutation a
//! thin client shim should apply, and the engine collects them into an
//! [`EnhancementPlan`].

use serde::{Deserialize, Serialize};

use crate::action::GameAction;

/// Stylesheet backing the exclamation/export icons.
pub const FONT_AWESOME_CSS: &str =
    "//maxcdn.bootstrapcdn.com/font-awesome/4.1.0/css/font-awesome.min.css";

/// Markup for a Font Awesome icon. Pair with an
/// [`DomPatch::EnsureStylesheet`] patch for [`FONT_AWESOME_CSS`].
pub fn fa_icon(class: &str) -> String {
    format!("<i class=\"fa {}\"></i>", class)
}

/// What a bound key or rebound element should do when triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyAction {
    /// Issue a game request.
    Request { action: GameAction },

    /// Click an element on the current page.
    Click { target: String },
}

/// When a disable-after-click guard fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisableTrigger {
    /// Disable the button once its form is submitted.
    Submit,

    /// Disable the button after its own click handler runs.
    Click,
}

/// A single mutation instruction. `target` and `anchor` fields hold CSS-ish
/// selectors understood by the client shim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DomPatch {
    /// Load a stylesheet once if not already present.
    EnsureStylesheet { href: String },

    /// Insert markup immediately after the anchor element.
    InsertAfter { anchor: String, html: String },

    /// Append markup inside the target element.
    AppendInto { target: String, html: String },

    /// Overwrite an attribute.
    SetAttribute {
        target: String,
        name: String,
        value: String,
    },

    /// Set a form control's value.
    SetValue { target: String, value: String },

    /// Set a checkbox's checked state.
    SetChecked { target: String, checked: bool },

    /// Remove the target element.
    RemoveNode { target: String },

    /// Gate the target's click behind a confirmation dialog.
    ConfirmClick { target: String, message: String },

    /// Disable the target button after its first activation.
    DisableAfterClick {
        target: String,
        trigger: DisableTrigger,
    },

    /// Attach a hover tooltip.
    Tooltip {
        target: String,
        html: String,
        width: u32,
    },

    /// Bind a keyboard shortcut.
    BindKey { key: String, action: KeyAction },
}

/// Everything a dispatch produced for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancementPlan {
    pub path: String,
    pub patches: Vec<DomPatch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fa_icon_markup() {
        let html = fa_icon("fa-exclamation-circle");
        assert_eq!(html, "<i class=\"fa fa-exclamation-circle\"></i>");
    }

    #[test]
    fn test_patch_serialize_tagged() {
        let patch = DomPatch::SetAttribute {
            target: "img".to_string(),
            name: "title".to_string(),
            value: "1,000".to_string(),
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert!(json.contains("\"op\":\"set_attribute\""));
        assert!(json.contains("1,000"));
    }

    #[test]
    fn test_patch_roundtrip_bind_key() {
        let patch = DomPatch::BindKey {
            key: "h".to_string(),
            action: KeyAction::Request {
                action: GameAction::new("/hospital.php").with("m", "1"),
            },
        };
        let json = serde_json::to_string(&patch).unwrap();
        let back: DomPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, patch);
    }
}
