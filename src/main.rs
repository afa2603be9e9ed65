mod cli;
mod commands;
mod logging;

use crate::cli::parser::{Cli, Commands};
use crate::logging::init::init_logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.debug, cli.quiet);

    match cli.command {
        Commands::Generate {
            output,
            dry_run,
            config,
        } => commands::generate::run(&config, output, dry_run),
        Commands::Info { json, config } => commands::info::run(&config, json),
    }
}
