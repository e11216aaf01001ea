//! `shadowdefender-config`: pre-flight validator for ShadowDefender plugin
//! configuration files

use clap::Parser;

use shadowdefender_config::cli::{self, args::Cli};
use shadowdefender_config::error::ExitCode;
use shadowdefender_config::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match cli::run(&cli) {
        Ok(true) => std::process::exit(ExitCode::SUCCESS),
        Ok(false) => std::process::exit(ExitCode::INVALID),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
