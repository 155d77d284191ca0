//! Header markup rendering
//!
//! [`Element`] is a small HTML builder; [`HeaderRenderer`] uses it to assemble
//! the shared header for a given current page.

use std::fmt;

use crate::navigation;
use crate::pages::{HOME_KEY, PageRegistry};
use crate::types::Neighbors;

/// Label on the previous button when there is no previous page
pub const PREVIOUS_LABEL: &str = "前へ";

/// Label on the next button when there is no next page
pub const NEXT_LABEL: &str = "次へ";

// =============================================================================
// Element Builder
// =============================================================================

/// Child of an [`Element`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element with classes, attributes and children
///
/// Attribute values and text are escaped on render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Boolean attribute such as `disabled`
    pub fn flag(mut self, name: &'static str) -> Self {
        self.attrs.push((name, None));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(attr, _)| *attr == name)
    }

    /// Depth-first search for descendants (including self) matching `predicate`
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect(predicate, &mut found);
        found
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if predicate(self) {
            found.push(self);
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                element.collect(predicate, found);
            }
        }
    }

    /// Concatenated text content of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => out.push_str(&element.text_content()),
            }
        }
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", escape_attr(&self.classes.join(" ")))?;
        }
        for (name, value) in &self.attrs {
            match value {
                Some(value) => write!(f, " {}=\"{}\"", name, escape_attr(value))?,
                None => write!(f, " {}", name)?,
            }
        }
        f.write_str(">")?;
        for child in &self.children {
            match child {
                Node::Element(element) => write!(f, "{}", element)?,
                Node::Text(text) => f.write_str(&escape_text(text))?,
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Inline click handler that assigns `href` to the location
fn location_handler(href: &str) -> String {
    let literal = href.replace('\\', "\\\\").replace('\'', "\\'");
    format!("location.href='{}'", literal)
}

// =============================================================================
// Header Renderer
// =============================================================================

/// Builds the shared header for a page
pub struct HeaderRenderer<'a> {
    registry: &'a PageRegistry,
}

impl<'a> HeaderRenderer<'a> {
    pub fn new(registry: &'a PageRegistry) -> Self {
        Self { registry }
    }

    /// Render the header markup for `current`
    pub fn render(&self, current: &str) -> String {
        self.build(current).to_string()
    }

    /// Build the header element tree for `current`
    ///
    /// `current` is resolved once by the caller and reused for every
    /// active-state and home-link decision.
    pub fn build(&self, current: &str) -> Element {
        let neighbors = navigation::neighbors(current, self.registry.order());

        Element::new("header")
            .class("common-header")
            .child(
                Element::new("div")
                    .class("header-content")
                    .child(
                        Element::new("h1")
                            .class("site-title")
                            .text(self.registry.site_title()),
                    )
                    .child(
                        Element::new("nav")
                            .class("main-nav")
                            .child(self.nav_links(current)),
                    ),
            )
            .child(
                Element::new("div")
                    .class("page-navigation")
                    .child(self.controls(current, &neighbors)),
            )
    }

    fn nav_links(&self, current: &str) -> Element {
        let links = self.registry.iter().map(|(key, page)| {
            let href = if key == HOME_KEY {
                if current == HOME_KEY {
                    "#"
                } else {
                    self.registry.home_path()
                }
            } else {
                page.path.as_str()
            };

            let link = Element::new("a").attr("href", href).class("nav-link");
            let link = if key == current {
                link.class("active")
            } else {
                link
            };
            link.text(page.title.as_str())
        });

        Element::new("div").class("nav-links").children(links)
    }

    fn controls(&self, current: &str, neighbors: &Neighbors) -> Element {
        Element::new("div")
            .class("nav-controls")
            .child(self.previous_button(neighbors.previous.as_deref()))
            .child(
                Element::new("span")
                    .class("current-page")
                    .text(self.registry.title_or_key(current)),
            )
            .child(self.next_button(neighbors.next.as_deref()))
    }

    fn previous_button(&self, previous: Option<&str>) -> Element {
        let button = Element::new("button").class("nav-btn").class("prev-btn");
        match previous.and_then(|key| self.enabled_target(key)) {
            Some((href, title)) => button
                .attr("onclick", location_handler(href))
                .text(format!("< {}", title)),
            None => button
                .class("disabled")
                .flag("disabled")
                .text(format!("< {}", PREVIOUS_LABEL)),
        }
    }

    fn next_button(&self, next: Option<&str>) -> Element {
        let button = Element::new("button").class("nav-btn").class("next-btn");
        match next.and_then(|key| self.enabled_target(key)) {
            Some((href, title)) => button
                .attr("onclick", location_handler(href))
                .text(format!("{} >", title)),
            None => button
                .class("disabled")
                .flag("disabled")
                .text(format!("{} >", NEXT_LABEL)),
        }
    }

    fn enabled_target(&self, key: &str) -> Option<(&'a str, &'a str)> {
        let registry = self.registry;
        let href = navigation::navigation_target(registry, key)?;
        let title = registry.get(key).map(|page| page.title.as_str())?;
        Some((href, title))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn header(current: &str) -> Element {
        HeaderRenderer::new(&PageRegistry::builtin()).build(current)
    }

    fn nav_links(header: &Element) -> Vec<&Element> {
        header.find_all(&|el| el.has_class("nav-link"))
    }

    fn button<'a>(header: &'a Element, class: &str) -> &'a Element {
        header.find_all(&|el| el.tag() == "button" && el.has_class(class))[0]
    }

    #[test]
    fn element_renders_classes_attrs_and_text() {
        let html = Element::new("a")
            .attr("href", "../cart/index.html")
            .class("nav-link")
            .class("active")
            .text("カート")
            .to_string();
        assert_eq!(
            html,
            r#"<a class="nav-link active" href="../cart/index.html">カート</a>"#
        );
    }

    #[test]
    fn element_escapes_text_and_attributes() {
        let html = Element::new("span")
            .attr("title", "a \"b\" & c")
            .text("<script>")
            .to_string();
        assert_eq!(
            html,
            r#"<span title="a &quot;b&quot; &amp; c">&lt;script&gt;</span>"#
        );
    }

    #[test]
    fn element_renders_boolean_attributes() {
        let html = Element::new("button").flag("disabled").to_string();
        assert_eq!(html, "<button disabled></button>");
    }

    #[test]
    fn location_handler_escapes_quotes() {
        assert_eq!(location_handler("../a'b/"), r"location.href='../a\'b/'");
    }

    #[test]
    fn header_has_site_title_and_link_per_page() {
        let header = header("menu");
        let title = header.find_all(&|el| el.has_class("site-title"))[0];
        assert_eq!(title.text_content(), "小松購買システム");
        assert_eq!(nav_links(&header).len(), 7);
    }

    #[test]
    fn only_current_page_link_is_active() {
        let header = header("cart");
        let active: Vec<String> = nav_links(&header)
            .into_iter()
            .filter(|link| link.has_class("active"))
            .map(|link| link.text_content())
            .collect();
        assert_eq!(active, vec!["カート".to_string()]);
    }

    #[test]
    fn unknown_page_marks_no_link_active() {
        let header = header("about");
        assert!(nav_links(&header).iter().all(|link| !link.has_class("active")));
    }

    #[test]
    fn home_link_is_anchor_on_home() {
        let header = header("home");
        let home = nav_links(&header)[0];
        assert_eq!(home.attr_value("href"), Some("#"));
        assert!(home.has_class("active"));
    }

    #[test]
    fn home_link_is_home_path_elsewhere() {
        let header = header("login");
        let links = nav_links(&header);
        assert_eq!(links[0].attr_value("href"), Some("../index.html"));
        assert_eq!(links[1].attr_value("href"), Some("../login/index.html"));
    }

    #[test]
    fn middle_page_has_enabled_buttons() {
        let header = header("menu");
        let prev = button(&header, "prev-btn");
        let next = button(&header, "next-btn");

        assert!(prev.text_content().contains("会員登録"));
        assert_eq!(
            prev.attr_value("onclick"),
            Some("location.href='../register/index.html'")
        );
        assert!(!prev.has_attr("disabled"));

        assert!(next.text_content().contains("カート"));
        assert_eq!(next.text_content(), "カート >");
        assert!(!next.has_class("disabled"));
    }

    #[test]
    fn first_page_disables_previous() {
        let header = header("home");
        let prev = button(&header, "prev-btn");
        assert!(prev.has_class("disabled"));
        assert!(prev.has_attr("disabled"));
        assert!(!prev.has_attr("onclick"));
        assert_eq!(prev.text_content(), "< 前へ");
    }

    #[test]
    fn last_page_disables_next() {
        let header = header("order-dashboard");
        let next = button(&header, "next-btn");
        assert!(next.has_class("disabled"));
        assert_eq!(next.text_content(), "次へ >");
    }

    #[test]
    fn previous_home_button_targets_home_path() {
        let header = header("login");
        let prev = button(&header, "prev-btn");
        assert_eq!(prev.attr_value("onclick"), Some("location.href='../index.html'"));
        assert_eq!(prev.text_content(), "< ホーム");
    }

    #[test]
    fn current_page_label_shows_title_or_raw_key() {
        let known = header("detail");
        let label = known.find_all(&|el| el.has_class("current-page"))[0];
        assert_eq!(label.text_content(), "商品詳細");

        let unknown = header("about");
        let label = unknown.find_all(&|el| el.has_class("current-page"))[0];
        assert_eq!(label.text_content(), "about");
    }

    #[test]
    fn rendered_markup_escapes_arrows() {
        let html = HeaderRenderer::new(&PageRegistry::builtin()).render("menu");
        assert!(html.starts_with(r#"<header class="common-header">"#));
        assert!(html.contains("&lt; 会員登録</button>"));
        assert!(html.contains("カート &gt;</button>"));
        assert!(html.contains(r#"<span class="current-page">メニュー</span>"#));
    }
}
