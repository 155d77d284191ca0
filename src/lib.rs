//! Site Header Library
//!
//! Shared page header and prev/next navigation for a small multi-page site.
//! The header logic is exposed as a library so it can be driven from any
//! [`host::EventHost`]; the CLI drives it against in-memory documents.

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod header;
pub mod host;
pub mod navigation;
pub mod output;
pub mod pages;
pub mod render;
pub mod resolver;
pub mod types;

// Re-exports for convenience
pub use cli::{Cli, Commands};
pub use config::Config;
pub use document::StaticDocument;
pub use error::{CliError, Result};
pub use header::Header;
pub use output::{OutputFormat, OutputFormatter};
pub use pages::PageRegistry;

use commands::Execute;
use types::CommandResponse;

// =============================================================================
// Main Entry Point
// =============================================================================

/// Run the CLI with parsed arguments
///
/// Errors are reported through the output formatter, so `-o json` callers
/// get a failure envelope; the error is still returned for the exit code.
pub fn run(cli: Cli) -> Result<()> {
    let formatter = OutputFormatter::new(cli.output);

    match dispatch(cli) {
        Ok(response) => formatter.print_response(&response),
        Err(e) => {
            formatter.print_response(&CommandResponse::failure(&e))?;
            Err(e)
        }
    }
}

fn dispatch(cli: Cli) -> Result<CommandResponse> {
    // 1. Load configuration, letting --pages win over the environment
    let config = config::load_config().with_pages_file(cli.pages);

    // 2. Build the header for the configured site
    let header = Header::from_config(&config)?;
    let ctx = commands::CommandContext::new(header);

    // 3. Match on command and execute
    match cli.command {
        Commands::Pages => commands::PagesCommand::default().execute(&ctx),
        Commands::Current(args) => commands::CurrentCommand::new(args.path).execute(&ctx),
        Commands::Neighbors(args) => commands::NeighborsCommand::new(args.path).execute(&ctx),
        Commands::Render(args) => commands::RenderCommand::new(args.path).execute(&ctx),
        Commands::Navigate(args) => commands::NavigateCommand::new(args.page).execute(&ctx),
        Commands::Key(args) => commands::KeyCommand::new(args.path, args.key).execute(&ctx),
        Commands::Inject(args) => {
            commands::InjectCommand::new(args.file, args.path, args.in_place).execute(&ctx)
        }
    }
}

/// Install a stderr log subscriber
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug over warn.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a subscriber may already be set when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
