//! Permission sets, the access evaluator, and lookup facades.
//!
//! Everything here is pure computation over the immutable registry and a
//! caller-supplied permission set. The overriding policy is deny by
//! default: unknown keys, unmapped paths, and unrecognized modes all
//! resolve to "not accessible".

use std::collections::BTreeSet;
use std::sync::Arc;

use dashmap::DashMap;

use crate::menu::{MenuConfig, MenuRegistry, NavItem, filter_nav_items};

/// The set of permission codes a user holds.
///
/// Built from whatever sequence the caller has on hand. Duplicates collapse
/// under set semantics; an empty string is an ordinary code that matches
/// only if literally present, never a "no permission" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    codes: BTreeSet<String>,
}

impl PermissionSet {
    /// Create an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership of a single code (exact string match).
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// True if at least one of `codes` is held.
    pub fn has_any<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().any(|code| self.contains(code.as_ref()))
    }

    /// True if every one of `codes` is held (vacuously true for none).
    pub fn has_all<I, S>(&self, codes: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes.into_iter().all(|code| self.contains(code.as_ref()))
    }

    /// Number of distinct codes held.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if no codes are held.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate the held codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    /// Stable cache key for this set: sorted distinct codes joined with a
    /// unit separator, so equal sets always fingerprint identically.
    pub(crate) fn fingerprint(&self) -> String {
        let mut out = String::new();
        for code in &self.codes {
            if !out.is_empty() {
                out.push('\u{1f}');
            }
            out.push_str(code);
        }
        out
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Decide whether `granted` satisfies `config`.
///
/// An absent config denies: a menu nothing is known about is never shown.
pub fn has_access(granted: &PermissionSet, config: Option<&MenuConfig>) -> bool {
    config.is_some_and(|c| c.grants(granted))
}

/// Access facade over a built [`MenuRegistry`].
///
/// Wrapped in Arc internally so Clone is cheap and the service can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct AccessService {
    registry: Arc<MenuRegistry>,
}

impl AccessService {
    /// Create a new access service over `registry`.
    pub fn new(registry: MenuRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    /// Whether `granted` may access the menu governing `href`.
    ///
    /// Returns false for hrefs no registered menu path covers.
    pub fn can_access_menu(&self, granted: &PermissionSet, href: &str) -> bool {
        let config = self
            .registry
            .resolve_key_for_path(href)
            .and_then(|key| self.registry.get(key));
        has_access(granted, config)
    }

    /// Whether `granted` may access the menu named `key`.
    ///
    /// Unknown keys are denied, whatever they are named.
    pub fn can_access_menu_by_key(&self, granted: &PermissionSet, key: &str) -> bool {
        has_access(granted, self.registry.get(key))
    }

    /// Raw membership test for a single permission code, independent of any
    /// menu configuration.
    pub fn has_permission(&self, granted: &PermissionSet, code: &str) -> bool {
        granted.contains(code)
    }

    /// Every menu key `granted` may access.
    ///
    /// Always includes the always-visible keys, including for an empty set.
    pub fn accessible_menu_keys(&self, granted: &PermissionSet) -> BTreeSet<String> {
        self.registry
            .all()
            .filter(|config| config.grants(granted))
            .map(|config| config.key.clone())
            .collect()
    }

    /// Raw registry passthrough for introspection (e.g., an admin screen
    /// listing a menu's required permissions).
    pub fn menu_config(&self, key: &str) -> Option<&MenuConfig> {
        self.registry.get(key)
    }

    /// The visible subset of `items` for `granted`, in input order.
    pub fn filter_nav_items(&self, granted: &PermissionSet, items: &[NavItem]) -> Vec<NavItem> {
        filter_nav_items(&self.registry, granted, items)
    }
}

/// Memoizing wrapper over [`AccessService`].
///
/// Caches the derived accessible-key set per permission-set fingerprint, so
/// a host re-rendering with unchanged permissions gets the same shared
/// value back without re-scanning the registry. Purely an optimization
/// layer: results are value-identical to the uncached service.
#[derive(Debug, Clone)]
pub struct CachedAccess {
    service: AccessService,
    keys: Arc<DashMap<String, Arc<BTreeSet<String>>>>,
}

impl CachedAccess {
    /// Wrap an access service with a memoization cache.
    pub fn new(service: AccessService) -> Self {
        Self {
            service,
            keys: Arc::new(DashMap::new()),
        }
    }

    /// The wrapped service.
    pub fn service(&self) -> &AccessService {
        &self.service
    }

    /// Every menu key `granted` may access, memoized per distinct set.
    pub fn accessible_menu_keys(&self, granted: &PermissionSet) -> Arc<BTreeSet<String>> {
        let fingerprint = granted.fingerprint();

        if let Some(hit) = self.keys.get(&fingerprint) {
            return Arc::clone(&hit);
        }

        let computed = Arc::new(self.service.accessible_menu_keys(granted));
        self.keys.insert(fingerprint, Arc::clone(&computed));
        computed
    }

    /// Drop every cached entry.
    ///
    /// Call this when the set of granted roles changes upstream.
    pub fn invalidate_all(&self) {
        self.keys.clear();
    }

    /// Number of cached entries (for monitoring).
    pub fn cache_size(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::AccessMode;

    fn service() -> AccessService {
        AccessService::new(MenuRegistry::from_configs(vec![
            MenuConfig {
                key: "dashboard".to_string(),
                path: Some("/client-dashboard".to_string()),
                permissions: vec![],
                mode: AccessMode::All,
                always_visible: true,
            },
            MenuConfig {
                key: "shifts".to_string(),
                path: Some("/client-dashboard/shifts".to_string()),
                permissions: vec![
                    "SHIFT_READ".to_string(),
                    "SHIFT_OPEN".to_string(),
                    "SHIFT_CLOSE".to_string(),
                ],
                mode: AccessMode::Any,
                always_visible: false,
            },
            MenuConfig {
                key: "roles".to_string(),
                path: Some("/client-dashboard/roles".to_string()),
                permissions: vec!["CLIENT_ROLE_MANAGE".to_string()],
                mode: AccessMode::All,
                always_visible: false,
            },
        ]))
    }

    #[test]
    fn duplicates_collapse() {
        let granted: PermissionSet =
            ["SHIFT_READ", "SHIFT_READ", "SHIFT_READ"].into_iter().collect();

        assert_eq!(granted.len(), 1);
        assert!(service().can_access_menu_by_key(&granted, "shifts"));
    }

    #[test]
    fn empty_string_is_a_literal_code() {
        let without: PermissionSet = ["SHIFT_READ"].into_iter().collect();
        let with: PermissionSet = ["SHIFT_READ", ""].into_iter().collect();

        assert!(!without.contains(""));
        assert!(with.contains(""));
    }

    #[test]
    fn has_access_denies_absent_config() {
        let granted: PermissionSet = ["SHIFT_READ"].into_iter().collect();
        assert!(!has_access(&granted, None));
    }

    #[test]
    fn unknown_key_is_denied_even_with_every_code() {
        let service = service();
        let everything: PermissionSet = service
            .registry()
            .all()
            .flat_map(|config| config.permissions.clone())
            .collect();

        assert!(!service.can_access_menu_by_key(&everything, "unknown-menu"));
        assert!(!service.can_access_menu_by_key(&everything, "admin"));
    }

    #[test]
    fn unresolvable_href_is_denied() {
        let granted: PermissionSet = ["SHIFT_READ"].into_iter().collect();
        assert!(!service().can_access_menu(&granted, "/somewhere-else"));
    }

    #[test]
    fn href_resolves_through_subpaths() {
        let granted: PermissionSet = ["SHIFT_CLOSE"].into_iter().collect();
        let service = service();

        assert!(service.can_access_menu(&granted, "/client-dashboard/shifts"));
        assert!(service.can_access_menu(&granted, "/client-dashboard/shifts/123"));
        assert!(!service.can_access_menu(&granted, "/client-dashboard/roles"));
    }

    #[test]
    fn accessible_keys_for_empty_set_are_the_always_visible_ones() {
        let keys = service().accessible_menu_keys(&PermissionSet::new());

        assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["dashboard".to_string()]);
    }

    #[test]
    fn accessible_keys_follow_grants() {
        let granted: PermissionSet = ["CLIENT_ROLE_MANAGE"].into_iter().collect();
        let keys = service().accessible_menu_keys(&granted);

        assert!(keys.contains("dashboard"));
        assert!(keys.contains("roles"));
        assert!(!keys.contains("shifts"));
    }

    #[test]
    fn fingerprint_ignores_order_and_duplicates() {
        let a: PermissionSet = ["B", "A", "A"].into_iter().collect();
        let b: PermissionSet = ["A", "B"].into_iter().collect();

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), PermissionSet::new().fingerprint());
    }

    #[test]
    fn cached_access_returns_shared_identical_results() {
        let cached = CachedAccess::new(service());
        let granted: PermissionSet = ["SHIFT_READ"].into_iter().collect();
        let same_again: PermissionSet = ["SHIFT_READ", "SHIFT_READ"].into_iter().collect();

        let first = cached.accessible_menu_keys(&granted);
        let second = cached.accessible_menu_keys(&same_again);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, cached.service().accessible_menu_keys(&granted));
        assert_eq!(cached.cache_size(), 1);

        cached.invalidate_all();
        assert_eq!(cached.cache_size(), 0);
    }
}
