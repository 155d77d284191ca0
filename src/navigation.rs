//! Prev/next neighbor lookup and navigation targets

use crate::pages::PageRegistry;
use crate::types::{Key, Neighbors, PageKey};

/// Find the pages adjacent to `current` in the order sequence
///
/// Both neighbors are `None` when `current` is not in the sequence.
pub fn neighbors(current: &str, order: &[PageKey]) -> Neighbors {
    let Some(index) = order.iter().position(|key| key == current) else {
        return Neighbors::default();
    };

    Neighbors {
        previous: index.checked_sub(1).map(|i| order[i].clone()),
        next: order.get(index + 1).cloned(),
    }
}

/// Where navigating to `key` should take the browser
///
/// Unregistered keys have no target; callers treat that as a no-op.
pub fn navigation_target<'a>(registry: &'a PageRegistry, key: &str) -> Option<&'a str> {
    let target = registry.href_for(key);
    if target.is_none() {
        tracing::debug!(page = key, "ignoring navigation to unregistered page");
    }
    target
}

/// Page an arrow key should move to, if any
pub fn page_for_key<'a>(key: &Key, neighbors: &'a Neighbors) -> Option<&'a PageKey> {
    match key {
        Key::ArrowLeft => neighbors.previous.as_ref(),
        Key::ArrowRight => neighbors.next.as_ref(),
        Key::Other(_) => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
