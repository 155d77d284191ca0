//! Current-page resolution from a location path

use crate::pages::HOME_KEY;
use crate::types::PageKey;

/// Default document name served for a directory
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Resolve the page key for a location path
///
/// The site is laid out as one directory per page, so
/// `/shop/cart/index.html` and `/shop/cart` both resolve to `cart`. The root
/// (and a lone default document) resolve to home. Query strings and
/// fragments are ignored. Unknown segments are returned as-is.
pub fn current_page(location: &str, default_document: &str) -> PageKey {
    let segments: Vec<&str> = path_only(location)
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    let page = match segments.as_slice() {
        [] => HOME_KEY,
        [.., last] if *last == default_document => {
            if segments.len() <= 2 {
                HOME_KEY
            } else {
                segments[segments.len() - 2]
            }
        }
        [.., last] => *last,
    };

    tracing::debug!(location, page, "resolved current page");
    page.to_string()
}

/// Strip any query string or fragment
fn path_only(location: &str) -> &str {
    match location.find(['?', '#']) {
        Some(index) => &location[..index],
        None => location,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(path: &str) -> PageKey {
        current_page(path, DEFAULT_DOCUMENT)
    }

    #[test]
    fn empty_path_is_home() {
        assert_eq!(resolve(""), "home");
        assert_eq!(resolve("/"), "home");
        assert_eq!(resolve("///"), "home");
    }

    #[test]
    fn lone_default_document_is_home() {
        assert_eq!(resolve("/index.html"), "home");
    }

    #[test]
    fn default_document_with_one_parent_is_home() {
        assert_eq!(resolve("/site/index.html"), "home");
    }

    #[test]
    fn default_document_uses_parent_directory() {
        assert_eq!(resolve("/a/b/index.html"), "b");
        assert_eq!(resolve("/shop/cart/index.html"), "cart");
    }

    #[test]
    fn last_segment_wins_otherwise() {
        assert_eq!(resolve("/detail"), "detail");
        assert_eq!(resolve("/x/y/z/detail"), "detail");
        assert_eq!(resolve("/shop/menu/"), "menu");
    }

    #[test]
    fn unknown_pages_are_returned_literally() {
        assert_eq!(resolve("/shop/about/index.html"), "about");
        assert_eq!(resolve("/shop/page.html"), "page.html");
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(resolve("/shop/cart/index.html?item=3"), "cart");
        assert_eq!(resolve("/shop/login/#form"), "login");
        assert_eq!(resolve("/?ref=mail"), "home");
    }

    #[test]
    fn default_document_name_is_configurable() {
        assert_eq!(current_page("/shop/cart/default.htm", "default.htm"), "cart");
        assert_eq!(current_page("/shop/cart/index.html", "default.htm"), "index.html");
    }
}
