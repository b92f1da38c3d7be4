//! Menu registry - the static menu-key -> access-rule table.
//!
//! The registry is built once at startup from an in-code table or a
//! JSON/TOML manifest and never mutated afterwards. Lookups that miss
//! (unknown key, unmapped path) are normal `None` returns, not errors.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AccessResult;
use crate::permissions::PermissionSet;

/// How a menu entry's required permissions combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Holding at least one listed permission grants access.
    Any,
    /// Every listed permission must be held.
    #[default]
    All,
}

impl<'de> Deserialize<'de> for AccessMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.to_ascii_lowercase().as_str() {
            "any" => AccessMode::Any,
            "all" => AccessMode::All,
            other => {
                // Unrecognized modes fall back to the stricter rule.
                warn!(mode = %other, "unrecognized access mode, treating as all");
                AccessMode::All
            }
        })
    }
}

/// Access rule for one navigable menu section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Stable menu key (e.g., "shifts").
    pub key: String,

    /// URL path prefix this menu governs (e.g., "/client-dashboard/shifts").
    /// Absent for key-only entries that are never resolved by path.
    #[serde(default)]
    pub path: Option<String>,

    /// Permission codes required for access (empty = unrestricted).
    #[serde(default)]
    pub permissions: Vec<String>,

    /// How `permissions` combine (default: all).
    #[serde(default)]
    pub mode: AccessMode,

    /// When true the entry is accessible unconditionally and
    /// `permissions`/`mode` are ignored.
    #[serde(default)]
    pub always_visible: bool,
}

impl MenuConfig {
    /// Decide whether `granted` satisfies this entry's rule.
    pub fn grants(&self, granted: &PermissionSet) -> bool {
        if self.always_visible {
            return true;
        }
        if self.permissions.is_empty() {
            return true;
        }
        match self.mode {
            AccessMode::Any => granted.has_any(&self.permissions),
            AccessMode::All => granted.has_all(&self.permissions),
        }
    }
}

/// Registry of all menu access rules, indexed by key and by path.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    /// All entries, indexed by menu key.
    menus: HashMap<String, MenuConfig>,

    /// (path, key) pairs sorted longest path first, so the deepest
    /// matching prefix wins during resolution.
    routes: Vec<(String, String)>,
}

impl MenuRegistry {
    /// Build a registry from an in-code table of entries.
    ///
    /// Entries with an empty key or a non-absolute path are skipped with a
    /// warning; a duplicate key replaces the earlier entry, so the built
    /// registry always holds exactly one config per key.
    pub fn from_configs(configs: Vec<MenuConfig>) -> Self {
        let mut menus: HashMap<String, MenuConfig> = HashMap::new();

        for config in configs {
            if config.key.is_empty() {
                warn!(
                    path = config.path.as_deref().unwrap_or_default(),
                    "menu entry with empty key skipped"
                );
                continue;
            }
            if let Some(path) = &config.path
                && !path.starts_with('/')
            {
                warn!(key = %config.key, path = %path, "menu path must be absolute, entry skipped");
                continue;
            }
            let key = config.key.clone();
            if menus.insert(key.clone(), config).is_some() {
                warn!(key = %key, "duplicate menu key replaces earlier entry");
            }
        }

        let mut routes: Vec<(String, String)> = menus
            .values()
            .filter_map(|m| m.path.clone().map(|p| (p, m.key.clone())))
            .collect();
        routes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));

        debug!(menus = menus.len(), routes = routes.len(), "built menu route table");

        Self { menus, routes }
    }

    /// Build a registry from a JSON array of menu entries.
    pub fn from_json_str(json: &str) -> AccessResult<Self> {
        let configs: Vec<MenuConfig> = serde_json::from_str(json)?;
        Ok(Self::from_configs(configs))
    }

    /// Build a registry from a TOML manifest with a `[[menu]]` array.
    pub fn from_toml_str(raw: &str) -> AccessResult<Self> {
        #[derive(Deserialize)]
        struct Manifest {
            #[serde(default)]
            menu: Vec<MenuConfig>,
        }

        let manifest: Manifest = toml::from_str(raw)?;
        Ok(Self::from_configs(manifest.menu))
    }

    /// Build a registry from a TOML manifest file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> AccessResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Get an entry by its menu key.
    pub fn get(&self, key: &str) -> Option<&MenuConfig> {
        self.menus.get(key)
    }

    /// Resolve the menu key governing `href`.
    ///
    /// Matches the longest registered path that is a prefix of `href` at a
    /// path-segment boundary, so "/client-dashboard/shifts/123" resolves to
    /// the entry for "/client-dashboard/shifts" and never to an entry whose
    /// path merely happens to be a textual prefix.
    pub fn resolve_key_for_path(&self, href: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|(path, _)| path_prefix_matches(path, href))
            .map(|(_, key)| key.as_str())
    }

    /// All registered entries, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &MenuConfig> {
        self.menus.values()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

/// Match `prefix` against `href` exactly or at a `/` segment boundary.
///
/// Prefix: "/client-dashboard/shifts"
/// Matches: "/client-dashboard/shifts", "/client-dashboard/shifts/123"
/// Rejects: "/client-dashboard/shifts-archive"
fn path_prefix_matches(prefix: &str, href: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    match href.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('/') || prefix.ends_with('/'),
        None => false,
    }
}
