//! Navigation items and permission-based filtering.

use serde::{Deserialize, Serialize};

use crate::menu::MenuRegistry;
use crate::permissions::{PermissionSet, has_access};

/// A UI-facing navigation entry.
///
/// Only `href` participates in the access decision; `title`, `icon`, and
/// `exact` are display metadata carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Human-readable label.
    pub title: String,

    /// Route the entry links to, matched against registered menu paths.
    pub href: String,

    /// Icon reference for the UI layer.
    #[serde(default)]
    pub icon: Option<String>,

    /// Highlight only on an exact path match (display concern).
    #[serde(default)]
    pub exact: bool,
}

impl NavItem {
    /// Create a nav item with no icon and prefix highlighting.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            icon: None,
            exact: false,
        }
    }

    /// Set the icon reference.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Highlight only on an exact path match.
    pub fn exact_match(mut self) -> Self {
        self.exact = true;
        self
    }
}

/// The visible subset of `items` for `granted`, in input order.
///
/// Each item's href is resolved through the registry; items that resolve to
/// no registered menu are dropped, never shown. Safe to call on every
/// render: no caching, no side effects.
pub fn filter_nav_items(
    registry: &MenuRegistry,
    granted: &PermissionSet,
    items: &[NavItem],
) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| {
            let config = registry
                .resolve_key_for_path(&item.href)
                .and_then(|key| registry.get(key));
            has_access(granted, config)
        })
        .cloned()
        .collect()
}
