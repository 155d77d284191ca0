use site_header::cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse();
    site_header::init_logging(cli.verbose);

    match site_header::run(cli) {
        Ok(()) => ExitCode::from(0_u8),
        // already reported by the output formatter
        Err(e) => ExitCode::from(e.exit_code() as u8),
    }
}
