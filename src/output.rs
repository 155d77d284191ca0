//! Output formatting for the site header CLI
//!
//! Handles formatting command responses for terminal display.
//! Supports human-readable, JSON and quiet output.

use clap::ValueEnum;

use crate::error::Result;
use crate::types::{CommandResponse, EventOutcome, NeighborsData, PageListData};

// =============================================================================
// Output Format
// =============================================================================

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
    /// Quiet mode - errors only
    Quiet,
}

// =============================================================================
// Output Formatter
// =============================================================================

/// Formats command responses for display
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the given format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format and print a command response
    pub fn print_response(&self, response: &CommandResponse) -> Result<()> {
        if response.success {
            let output = self.format_success(response)?;
            if !output.is_empty() {
                print_success(&output);
            }
        } else {
            let output = self.format_error(response)?;
            print_error(&output);
        }
        Ok(())
    }

    /// Format a success response
    fn format_success(&self, response: &CommandResponse) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Human => match (&response.text, &response.data) {
                (Some(text), _) => text.clone(),
                (None, Some(data)) => serde_json::to_string_pretty(data)?,
                (None, None) => "Success".to_string(),
            },
            OutputFormat::Json => serde_json::to_string(response)?,
            OutputFormat::Quiet => String::new(),
        })
    }

    /// Format an error response
    fn format_error(&self, response: &CommandResponse) -> Result<String> {
        let error_msg = response.error.as_deref().unwrap_or("Unknown error");
        Ok(match self.format {
            OutputFormat::Human => format!("Error: {}", error_msg),
            OutputFormat::Json => serde_json::to_string(response)?,
            OutputFormat::Quiet => error_msg.to_string(),
        })
    }
}

// =============================================================================
// Specialized Formatters
// =============================================================================

/// Format the page registry for human-readable output
pub fn format_page_list(data: &PageListData) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} ({} pages)\n\n", data.site_title, data.pages.len()));

    let width = data
        .pages
        .iter()
        .map(|page| page.key.len())
        .max()
        .unwrap_or(0);
    for page in &data.pages {
        output.push_str(&format!(
            "  {:width$}  {}  {}\n",
            page.key,
            page.title,
            page.path,
            width = width
        ));
    }

    output.push_str(&format!("\nOrder: {}", data.order.join(" > ")));
    output
}

/// Format neighbors for human-readable output
pub fn format_neighbors(data: &NeighborsData) -> String {
    format!(
        "previous: {}\ncurrent:  {}\nnext:     {}",
        data.previous.as_deref().unwrap_or("-"),
        data.current,
        data.next.as_deref().unwrap_or("-")
    )
}

/// Format a dispatched key event for human-readable output
pub fn format_outcome(outcome: &EventOutcome) -> String {
    match &outcome.navigated_to {
        Some(href) => format!("navigate: {}", href),
        None if outcome.default_prevented => "default prevented".to_string(),
        None => "no action".to_string(),
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Print a success message to stdout
pub fn print_success(message: &str) {
    println!("{}", message);
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}", message);
}

// =============================================================================
// Tests
// =============================================================================
