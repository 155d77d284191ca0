//! CLI argument parsing using clap
//!
//! Defines all commands and their arguments.

use std::path::PathBuf;

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Site Header - shared header and prev/next navigation for a static site
#[derive(Debug, Parser)]
#[command(name = "site-header")]
#[command(
    author,
    version,
    about = "Site Header - shared header and prev/next navigation for a static site",
    long_about = None,
    after_help = "QUICK START:\n  site-header pages\n  site-header current /shop/cart/index.html\n  site-header render /shop/menu/index.html\n  site-header key /shop/menu/index.html ArrowRight\n  site-header inject menu/index.html --path /shop/menu/index.html --in-place\n\nOUTPUT FORMATS:\n  - human (default)  Plain text output for humans\n  - json             JSON envelope for scripting\n  - quiet            No output except for errors\n\nENVIRONMENT VARIABLES:\n  SITE_HEADER_PAGES             JSON site definition to use instead of the built-in pages\n  SITE_HEADER_DEFAULT_DOCUMENT  Directory index name (default: index.html)\n  RUST_LOG                      Log filter, e.g. site_header=debug"
)]
pub struct Cli {
    /// Site definition file (overrides SITE_HEADER_PAGES env var)
    #[arg(long, global = true)]
    pub pages: Option<PathBuf>,

    /// Output format: human (plain text), json (JSON envelope), quiet (errors only)
    #[arg(short, long, global = true, value_enum, default_value = "human")]
    pub output: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the registered pages and their order
    #[command(
        about = "List the registered pages and their order",
        long_about = "List the registered pages in registry order, followed by the prev/next order.\n\nEXAMPLES:\n  site-header pages\n  site-header pages -o json"
    )]
    Pages,

    /// Resolve the page key for a location path
    #[command(
        about = "Resolve the page key for a location path",
        long_about = "Resolve the page key for a location path.\n\nUSAGE:\n  site-header current <PATH>\n\nEXAMPLES:\n  site-header current /shop/cart/index.html\n  site-header current /"
    )]
    Current(LocationArgs),

    /// Show the previous and next pages for a location path
    #[command(
        about = "Show the previous and next pages for a location path",
        long_about = "Show the previous and next pages for a location path.\n\nEXAMPLES:\n  site-header neighbors /shop/menu/index.html"
    )]
    Neighbors(LocationArgs),

    /// Render the header markup for a location path
    #[command(
        about = "Render the header markup for a location path",
        long_about = "Render the header markup for a location path.\n\nEXAMPLES:\n  site-header render /shop/menu/index.html"
    )]
    Render(LocationArgs),

    /// Show where navigating to a page leads
    #[command(
        about = "Show where navigating to a page leads",
        long_about = "Show where navigating to a page leads. Unregistered pages produce no navigation.\n\nUSAGE:\n  site-header navigate <PAGE>\n\nEXAMPLES:\n  site-header navigate cart\n  site-header navigate home"
    )]
    Navigate(NavigateArgs),

    /// Simulate a key press on a page
    #[command(
        about = "Simulate a key press on a page",
        long_about = "Simulate a key-down event at a location.\n\nUSAGE:\n  site-header key <PATH> <KEY>\n\nARGUMENTS:\n  <PATH>  Location path of the page\n  <KEY>   Key name: ArrowLeft, ArrowRight, or any other key\n\nEXAMPLES:\n  site-header key /shop/menu/index.html ArrowLeft"
    )]
    Key(KeyArgs),

    /// Insert the header into an HTML file
    #[command(
        about = "Insert the header into an HTML file",
        long_about = "Load an HTML file as a document and insert the header as the first child of <body>.\n\nThe page is resolved from --path, or from the file path when --path is omitted.\n\nEXAMPLES:\n  site-header inject cart/index.html\n  site-header inject out.html --path /shop/cart/index.html --in-place"
    )]
    Inject(InjectArgs),
}

#[derive(Debug, Args)]
pub struct LocationArgs {
    /// Location path, e.g. /shop/cart/index.html
    pub path: String,
}

#[derive(Debug, Args)]
pub struct NavigateArgs {
    /// Page key to navigate to
    pub page: String,
}

#[derive(Debug, Args)]
pub struct KeyArgs {
    /// Location path of the page
    pub path: String,

    /// Key name: ArrowLeft, ArrowRight, or any other key
    pub key: String,
}

#[derive(Debug, Args)]
pub struct InjectArgs {
    /// HTML file to load
    pub file: PathBuf,

    /// Location path of the document (defaults to the file path)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Write the result back to the file instead of stdout
    #[arg(short, long)]
    pub in_place: bool,
}

// =============================================================================
// Parse Functions
// =============================================================================

/// Parse command line arguments
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parse command line arguments from iterator (for testing)
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

// =============================================================================
// Tests
// =============================================================================
