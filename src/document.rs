//! In-memory document host
//!
//! A loaded HTML page with a location, driven by explicit event dispatch.
//! Used by the CLI to inject the header into static files, and by tests to
//! exercise the header's event wiring.

use std::mem;

use crate::error::{CliError, Result};
use crate::host::{EventHost, Host, KeyDownListener, ReadyListener};
use crate::types::{EventOutcome, Key};

/// An HTML document plus its location
pub struct StaticDocument {
    html: String,
    pathname: String,
    assigned_location: Option<String>,
    ready_fired: bool,
    ready_listeners: Vec<ReadyListener>,
    key_down_listeners: Vec<KeyDownListener>,
}

impl StaticDocument {
    pub fn new(html: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            pathname: pathname.into(),
            assigned_location: None,
            ready_fired: false,
            ready_listeners: Vec::new(),
            key_down_listeners: Vec::new(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Location assigned by navigation, if any
    pub fn assigned_location(&self) -> Option<&str> {
        self.assigned_location.as_deref()
    }

    /// Whether navigation has unloaded this document
    pub fn is_unloaded(&self) -> bool {
        self.assigned_location.is_some()
    }

    /// Signal that loading finished, running ready listeners once
    ///
    /// Later calls do nothing.
    pub fn fire_ready(&mut self) -> Result<()> {
        if self.ready_fired {
            return Ok(());
        }
        self.ready_fired = true;

        for listener in mem::take(&mut self.ready_listeners) {
            listener(self)?;
        }
        Ok(())
    }

    /// Dispatch a key-down event to every key listener
    ///
    /// Once a listener has navigated away the document is unloaded and
    /// further events are dropped.
    pub fn fire_key_down(&mut self, key: &Key) -> EventOutcome {
        let mut outcome = EventOutcome::default();
        if self.is_unloaded() {
            return outcome;
        }

        let mut listeners = mem::take(&mut self.key_down_listeners);
        for listener in listeners.iter_mut() {
            outcome.merge(listener(self, key));
            if self.is_unloaded() {
                break;
            }
        }
        // keep any listeners subscribed during dispatch
        listeners.append(&mut self.key_down_listeners);
        self.key_down_listeners = listeners;

        tracing::debug!(
            key = key.as_str(),
            prevented = outcome.default_prevented,
            "dispatched key-down"
        );
        outcome
    }
}

impl Host for StaticDocument {
    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn assign_location(&mut self, href: &str) {
        self.assigned_location = Some(href.to_string());
    }

    fn insert_at_body_start(&mut self, html: &str) -> Result<()> {
        let index = body_content_start(&self.html).ok_or_else(|| {
            CliError::InvalidDocument("document has no <body> element".to_string())
        })?;
        self.html.insert_str(index, html);
        Ok(())
    }
}

impl EventHost for StaticDocument {
    fn on_ready(&mut self, listener: ReadyListener) {
        self.ready_listeners.push(listener);
    }

    fn on_key_down(&mut self, listener: KeyDownListener) {
        self.key_down_listeners.push(listener);
    }
}

/// Elements whose content is raw text and cannot contain tags
const RAW_TEXT_ELEMENTS: [&str; 4] = ["script", "style", "textarea", "title"];

/// Byte offset just past the opening `<body ...>` tag
///
/// Comments and raw-text elements are skipped, so a `<body>` mentioned inside
/// them is never taken for the real one.
fn body_content_start(html: &str) -> Option<usize> {
    // ASCII lowercasing keeps byte offsets aligned with the original
    let lower = html.to_ascii_lowercase();
    let mut pos = 0;

    while let Some(found) = lower[pos..].find('<') {
        let start = pos + found;

        if lower[start..].starts_with("<!--") {
            let close = lower[start + 4..].find("-->")?;
            pos = start + 4 + close + 3;
            continue;
        }

        let name_start = start + 1;
        let name_len = lower[name_start..]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        if name_len == 0 {
            // closing tag, doctype or a bare '<' in text
            pos = name_start;
            continue;
        }

        let name = &lower[name_start..name_start + name_len];
        let content_start = tag_end(&lower, name_start + name_len)?;
        if name == "body" {
            return Some(content_start);
        }

        if RAW_TEXT_ELEMENTS.contains(&name) {
            let closing = format!("</{}", name);
            let close = lower[content_start..].find(&closing)?;
            pos = content_start + close + closing.len();
        } else {
            pos = content_start;
        }
    }
    None
}

/// Offset just past the `>` closing a start tag, ignoring quoted values
fn tag_end(lower: &str, from: usize) -> Option<usize> {
    let mut quote = None;
    for (offset, byte) in lower.as_bytes()[from..].iter().enumerate() {
        match (quote, byte) {
            (Some(q), b) if *b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(*byte),
            (None, b'>') => return Some(from + offset + 1),
            (None, _) => {}
        }
    }
    None
}

// =============================================================================
// Tests
// =============================================================================
