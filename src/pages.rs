//! Page registry
//!
//! The fixed, ordered table of known pages plus the order sequence used for
//! prev/next adjacency. Built once and never mutated afterwards.

use std::collections::HashSet;

use crate::error::{CliError, Result};
use crate::types::{PageEntry, PageInfo, PageKey};

// =============================================================================
// Constants
// =============================================================================

/// Banner text shown at the top of every page
pub const SITE_TITLE: &str = "小松購買システム";

/// Key of the site's landing page
pub const HOME_KEY: &str = "home";

/// Link target for the landing page from any sub-page
pub const HOME_PATH: &str = "../index.html";

/// Built-in pages as (key, path, title), in registry order
const BUILTIN_PAGES: [(&str, &str, &str); 7] = [
    ("home", "../index.html", "ホーム"),
    ("login", "../login/index.html", "ログイン"),
    ("register", "../register/index.html", "会員登録"),
    ("menu", "../menu/index.html", "メニュー"),
    ("cart", "../cart/index.html", "カート"),
    ("detail", "../detail/index.html", "商品詳細"),
    ("order-dashboard", "../order-dashboard/index.html", "注文管理"),
];

/// Built-in prev/next order
const BUILTIN_ORDER: [&str; 7] = [
    "home",
    "login",
    "register",
    "menu",
    "cart",
    "detail",
    "order-dashboard",
];

// =============================================================================
// Page Registry
// =============================================================================

/// Ordered mapping from page key to page metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegistry {
    site_title: String,
    home_path: String,
    entries: Vec<(PageKey, PageInfo)>,
    order: Vec<PageKey>,
}

impl PageRegistry {
    /// The site's built-in page table
    pub fn builtin() -> Self {
        Self {
            site_title: SITE_TITLE.to_string(),
            home_path: HOME_PATH.to_string(),
            entries: BUILTIN_PAGES
                .iter()
                .map(|(key, path, title)| {
                    (
                        key.to_string(),
                        PageInfo {
                            path: path.to_string(),
                            title: title.to_string(),
                        },
                    )
                })
                .collect(),
            order: BUILTIN_ORDER.iter().map(|key| key.to_string()).collect(),
        }
    }

    /// Build a registry from explicit entries
    ///
    /// `order` defaults to registry order. Rejects an empty page list,
    /// duplicate keys, and order entries that are unregistered or repeated.
    pub fn new(
        site_title: impl Into<String>,
        home_path: impl Into<String>,
        pages: Vec<PageEntry>,
        order: Option<Vec<PageKey>>,
    ) -> Result<Self> {
        if pages.is_empty() {
            return Err(CliError::InvalidConfig(
                "site must define at least one page".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for page in &pages {
            if page.key.trim().is_empty() {
                return Err(CliError::InvalidConfig(
                    "page key cannot be empty".to_string(),
                ));
            }
            if !seen.insert(page.key.as_str()) {
                return Err(CliError::InvalidConfig(format!(
                    "duplicate page key '{}'",
                    page.key
                )));
            }
        }

        let order = match order {
            Some(order) => {
                let mut ordered = HashSet::new();
                for key in &order {
                    if !seen.contains(key.as_str()) {
                        return Err(CliError::InvalidConfig(format!(
                            "order references unknown page '{}'",
                            key
                        )));
                    }
                    if !ordered.insert(key.as_str()) {
                        return Err(CliError::InvalidConfig(format!(
                            "order lists page '{}' more than once",
                            key
                        )));
                    }
                }
                order
            }
            None => pages.iter().map(|page| page.key.clone()).collect(),
        };

        let unordered: Vec<&str> = pages
            .iter()
            .map(|page| page.key.as_str())
            .filter(|key| !order.iter().any(|ordered| ordered == key))
            .collect();
        if !unordered.is_empty() {
            tracing::warn!(
                pages = ?unordered,
                "some pages are not part of the prev/next order"
            );
        }

        Ok(Self {
            site_title: site_title.into(),
            home_path: home_path.into(),
            entries: pages
                .into_iter()
                .map(|page| {
                    (
                        page.key,
                        PageInfo {
                            path: page.path,
                            title: page.title,
                        },
                    )
                })
                .collect(),
            order,
        })
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Prev/next order sequence
    pub fn order(&self) -> &[PageKey] {
        &self.order
    }

    pub fn get(&self, key: &str) -> Option<&PageInfo> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, info)| info)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Entries in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageInfo)> {
        self.entries.iter().map(|(key, info)| (key.as_str(), info))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Title for `key`, or the key itself when unregistered
    pub fn title_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(info) => &info.title,
            None => key,
        }
    }

    /// Navigation target for a registered page
    ///
    /// Home always resolves to the home path, regardless of its entry.
    pub fn href_for(&self, key: &str) -> Option<&str> {
        let info = self.get(key)?;
        if key == HOME_KEY {
            Some(&self.home_path)
        } else {
            Some(&info.path)
        }
    }

    /// Entries as flat records, for listings and serialization
    pub fn to_entries(&self) -> Vec<PageEntry> {
        self.iter()
            .map(|(key, info)| PageEntry {
                key: key.to_string(),
                path: info.path.clone(),
                title: info.title.clone(),
            })
            .collect()
    }
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, title: &str) -> PageEntry {
        PageEntry {
            key: key.to_string(),
            path: format!("../{}/index.html", key),
            title: title.to_string(),
        }
    }

    #[test]
    fn builtin_registry_has_seven_pages_in_order() {
        let registry = PageRegistry::builtin();
        let keys: Vec<&str> = registry.iter().map(|(key, _)| key).collect();
        assert_eq!(
            keys,
            vec![
                "home",
                "login",
                "register",
                "menu",
                "cart",
                "detail",
                "order-dashboard"
            ]
        );
        assert_eq!(registry.order(), keys.as_slice());
    }

    #[test]
    fn builtin_registry_titles() {
        let registry = PageRegistry::builtin();
        assert_eq!(registry.get("register").unwrap().title, "会員登録");
        assert_eq!(registry.get("cart").unwrap().title, "カート");
        assert_eq!(
            registry.get("order-dashboard").unwrap().path,
            "../order-dashboard/index.html"
        );
        assert_eq!(registry.site_title(), SITE_TITLE);
    }

    #[test]
    fn title_or_key_falls_back_to_raw_key() {
        let registry = PageRegistry::builtin();
        assert_eq!(registry.title_or_key("menu"), "メニュー");
        assert_eq!(registry.title_or_key("about"), "about");
    }

    #[test]
    fn href_for_special_cases_home() {
        let registry = PageRegistry::new(
            "Shop",
            "/",
            vec![entry("home", "Home"), entry("cart", "Cart")],
            None,
        )
        .unwrap();

        assert_eq!(registry.href_for("home"), Some("/"));
        assert_eq!(registry.href_for("cart"), Some("../cart/index.html"));
        assert_eq!(registry.href_for("missing"), None);
    }

    #[test]
    fn new_defaults_order_to_registry_order() {
        let registry = PageRegistry::new(
            "Shop",
            HOME_PATH,
            vec![entry("b", "B"), entry("a", "A")],
            None,
        )
        .unwrap();
        assert_eq!(registry.order(), ["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn new_accepts_order_independent_of_registry_order() {
        let registry = PageRegistry::new(
            "Shop",
            HOME_PATH,
            vec![entry("a", "A"), entry("b", "B")],
            Some(vec!["b".to_string(), "a".to_string()]),
        )
        .unwrap();
        assert_eq!(registry.order(), ["b".to_string(), "a".to_string()]);
        let keys: Vec<&str> = registry.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn new_rejects_empty_page_list() {
        let err = PageRegistry::new("Shop", HOME_PATH, vec![], None).unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
    }

    #[test]
    fn new_rejects_duplicate_keys() {
        let err = PageRegistry::new(
            "Shop",
            HOME_PATH,
            vec![entry("cart", "Cart"), entry("cart", "Again")],
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate page key 'cart'"));
    }

    #[test]
    fn new_rejects_duplicate_order_entries() {
        let err = PageRegistry::new(
            "Shop",
            HOME_PATH,
            vec![entry("a", "A"), entry("b", "B")],
            Some(vec!["a".to_string(), "a".to_string()]),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidConfig(_)));
        assert!(err.to_string().contains("page 'a' more than once"));
    }

    #[test]
    fn new_allows_pages_outside_the_order() {
        let registry = PageRegistry::new(
            "Shop",
            HOME_PATH,
            vec![entry("a", "A"), entry("b", "B")],
            Some(vec!["a".to_string()]),
        )
        .unwrap();
        assert!(registry.contains("b"));
        assert_eq!(registry.order(), ["a".to_string()]);
    }

    #[test]
    fn new_rejects_unregistered_order_entries() {
        let err = PageRegistry::new(
            "Shop",
            HOME_PATH,
            vec![entry("cart", "Cart")],
            Some(vec!["cart".to_string(), "checkout".to_string()]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown page 'checkout'"));
    }
}
