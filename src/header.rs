//! Navigation header controller
//!
//! Ties the registry, resolver, renderer and keyboard handling together and
//! wires them into a host's events.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::host::{EventHost, Host};
use crate::navigation;
use crate::pages::PageRegistry;
use crate::render::HeaderRenderer;
use crate::resolver;
use crate::types::{EventOutcome, Key, Neighbors, PageKey};

/// The shared header for one site
///
/// Cheap to clone; listeners installed on a host each hold a clone.
#[derive(Debug, Clone)]
pub struct Header {
    registry: Arc<PageRegistry>,
    default_document: String,
}

impl Header {
    pub fn new(registry: PageRegistry, default_document: impl Into<String>) -> Self {
        Self {
            registry: Arc::new(registry),
            default_document: default_document.into(),
        }
    }

    /// Build a header from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = config.load_registry()?;
        Ok(Self::new(registry, config.default_document.clone()))
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    /// Resolve the page key for a location path
    pub fn page_at(&self, location: &str) -> PageKey {
        resolver::current_page(location, &self.default_document)
    }

    /// Resolve the page the host is currently showing
    pub fn current_page(&self, host: &dyn Host) -> PageKey {
        self.page_at(&host.pathname())
    }

    pub fn neighbors(&self, current: &str) -> Neighbors {
        navigation::neighbors(current, self.registry.order())
    }

    /// Header markup for `current`
    pub fn render(&self, current: &str) -> String {
        HeaderRenderer::new(&self.registry).render(current)
    }

    /// Insert the header for the host's current page
    pub fn on_document_ready(&self, host: &mut dyn Host) -> Result<()> {
        let current = self.current_page(host);
        let html = self.render(&current);
        host.insert_at_body_start(&html)?;
        tracing::debug!(page = %current, "inserted header");
        Ok(())
    }

    /// Navigate the host to a registered page
    ///
    /// Returns the assigned target, or `None` when `page` is unregistered
    /// and nothing happened.
    pub fn navigate_to(&self, host: &mut dyn Host, page: &str) -> Option<String> {
        let href = navigation::navigation_target(&self.registry, page)?.to_string();
        tracing::debug!(page, href = %href, "navigating");
        host.assign_location(&href);
        Some(href)
    }

    /// Arrow-key navigation
    ///
    /// Left and right move to the previous and next page and suppress the
    /// default action. Anything else, or an arrow at a boundary, is ignored.
    pub fn on_key_down(&self, host: &mut dyn Host, key: &Key) -> EventOutcome {
        let current = self.current_page(host);
        let neighbors = self.neighbors(&current);

        match navigation::page_for_key(key, &neighbors) {
            Some(page) => match self.navigate_to(host, page) {
                Some(href) => EventOutcome::navigated(href),
                None => EventOutcome::default(),
            },
            None => EventOutcome::default(),
        }
    }

    /// Subscribe the header to a host's ready and key-down events
    pub fn install<H: EventHost + ?Sized>(&self, host: &mut H) {
        let ready = self.clone();
        host.on_ready(Box::new(move |host: &mut dyn Host| {
            ready.on_document_ready(host)
        }));

        let keys = self.clone();
        host.on_key_down(Box::new(move |host: &mut dyn Host, key: &Key| {
            keys.on_key_down(host, key)
        }));
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new(PageRegistry::builtin(), resolver::DEFAULT_DOCUMENT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Host that records what the header did to it
    struct RecordingHost {
        pathname: String,
        assigned: Vec<String>,
        inserted: Vec<String>,
    }

    impl RecordingHost {
        fn at(pathname: &str) -> Self {
            Self {
                pathname: pathname.to_string(),
                assigned: Vec::new(),
                inserted: Vec::new(),
            }
        }
    }

    impl Host for RecordingHost {
        fn pathname(&self) -> String {
            self.pathname.clone()
        }

        fn assign_location(&mut self, href: &str) {
            self.assigned.push(href.to_string());
        }

        fn insert_at_body_start(&mut self, html: &str) -> Result<()> {
            self.inserted.push(html.to_string());
            Ok(())
        }
    }

    #[test]
    fn current_page_reads_host_location() {
        let header = Header::default();
        let host = RecordingHost::at("/shop/detail/index.html");
        assert_eq!(header.current_page(&host), "detail");
    }

    #[test]
    fn document_ready_inserts_rendered_header() {
        let header = Header::default();
        let mut host = RecordingHost::at("/shop/cart/index.html");

        header.on_document_ready(&mut host).unwrap();

        assert_eq!(host.inserted, vec![header.render("cart")]);
    }

    #[test]
    fn navigate_to_registered_page_assigns_location() {
        let header = Header::default();
        let mut host = RecordingHost::at("/shop/menu/index.html");

        let href = header.navigate_to(&mut host, "cart");

        assert_eq!(href.as_deref(), Some("../cart/index.html"));
        assert_eq!(host.assigned, vec!["../cart/index.html".to_string()]);
    }

    #[test]
    fn navigate_to_home_uses_home_path() {
        let header = Header::default();
        let mut host = RecordingHost::at("/shop/login/index.html");
        header.navigate_to(&mut host, "home");
        assert_eq!(host.assigned, vec!["../index.html".to_string()]);
    }

    #[test]
    fn navigate_to_unregistered_page_does_nothing() {
        let header = Header::default();
        let mut host = RecordingHost::at("/shop/menu/index.html");

        assert_eq!(header.navigate_to(&mut host, "about"), None);
        assert!(host.assigned.is_empty());
    }

    #[test]
    fn arrow_left_navigates_to_previous_page() {
        let header = Header::default();
        let mut host = RecordingHost::at("/shop/menu/index.html");

        let outcome = header.on_key_down(&mut host, &Key::ArrowLeft);

        assert!(outcome.default_prevented);
        assert_eq!(
            outcome.navigated_to.as_deref(),
            Some("../register/index.html")
        );
        assert_eq!(host.assigned, vec!["../register/index.html".to_string()]);
    }

    #[test]
    fn arrow_right_navigates_to_next_page() {
        let header = Header::default();
        let mut host = RecordingHost::at("/shop/menu/index.html");

        let outcome = header.on_key_down(&mut host, &Key::ArrowRight);

        assert_eq!(outcome, EventOutcome::navigated("../cart/index.html"));
    }

    #[test]
    fn arrow_at_boundary_is_not_suppressed() {
        let header = Header::default();
        let mut host = RecordingHost::at("/");

        let outcome = header.on_key_down(&mut host, &Key::ArrowLeft);

        assert_eq!(outcome, EventOutcome::default());
        assert!(host.assigned.is_empty());
    }

    #[test]
    fn arrows_on_unknown_page_are_ignored() {
        let header = Header::default();
        let mut host = RecordingHost::at("/shop/about/index.html");

        assert_eq!(
            header.on_key_down(&mut host, &Key::ArrowRight),
            EventOutcome::default()
        );
        assert!(host.assigned.is_empty());
    }

    #[test]
    fn other_keys_are_ignored() {
        let header = Header::default();
        let mut host = RecordingHost::at("/shop/menu/index.html");

        let outcome = header.on_key_down(&mut host, &Key::Other("Enter".to_string()));

        assert!(!outcome.default_prevented);
        assert!(host.assigned.is_empty());
    }
}
