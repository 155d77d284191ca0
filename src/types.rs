//! Shared type definitions
//!
//! Page metadata, navigation results and the response envelope the CLI
//! prints in JSON mode.

use serde::{Deserialize, Serialize};

use crate::error::CliError;
use std::convert::Infallible;
use std::str::FromStr;

// =============================================================================
// Page Types
// =============================================================================

/// Short identifier naming a logical page, e.g. `cart`
///
/// Any string is a valid key; keys missing from the registry are shown
/// literally.
pub type PageKey = String;

/// Registry record for a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Relative link target
    pub path: String,
    /// Display title
    pub title: String,
}

/// A registry entry as it appears in site definition files and listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub key: PageKey,
    pub path: String,
    pub title: String,
}

/// Adjacent pages in the order sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub previous: Option<PageKey>,
    pub next: Option<PageKey>,
}

// =============================================================================
// Event Types
// =============================================================================

/// Key carried by a key-down event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    pub fn as_str(&self) -> &str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Other(name) => name,
        }
    }
}

impl FromStr for Key {
    type Err = Infallible;

    /// Parse a DOM `KeyboardEvent.key` value. Unknown names are kept as-is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        })
    }
}

/// Result of dispatching an event to the header's listeners
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Whether a listener suppressed the browser's default action
    pub default_prevented: bool,
    /// Location assigned by a listener, if any
    pub navigated_to: Option<String>,
}

impl EventOutcome {
    pub fn navigated(href: impl Into<String>) -> Self {
        Self {
            default_prevented: true,
            navigated_to: Some(href.into()),
        }
    }

    /// Fold another listener's outcome into this one
    pub fn merge(&mut self, other: EventOutcome) {
        self.default_prevented |= other.default_prevented;
        if other.navigated_to.is_some() {
            self.navigated_to = other.navigated_to;
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Result of a CLI command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Plain-text rendering for human output
    #[serde(skip)]
    pub text: Option<String>,
}

impl CommandResponse {
    pub fn ok(data: serde_json::Value, text: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            text: Some(text.into()),
        }
    }

    pub fn failure(error: &CliError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.to_string()),
            text: None,
        }
    }
}

/// Data returned from the pages command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageListData {
    pub site_title: String,
    pub home_path: String,
    pub pages: Vec<PageEntry>,
    pub order: Vec<PageKey>,
}

/// Data returned from the neighbors command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborsData {
    pub current: PageKey,
    pub previous: Option<PageKey>,
    pub next: Option<PageKey>,
}

// =============================================================================
// Tests
// =============================================================================
