use crate::cli::parser::ConfigArgs;
use crate::commands::load_config;
use anyhow::{Context, Result};
use std::path::PathBuf;
use vergen::services::generator::{collect, generate, system_runner};
use vergen::services::render::render;

pub fn run(args: &ConfigArgs, output: Option<PathBuf>, dry_run: bool) {
    if let Err(e) = execute_generate(args, output, dry_run) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn execute_generate(args: &ConfigArgs, output: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let config = load_config(args)?;
    let output = output.unwrap_or_else(|| config.default_output());

    if dry_run {
        let info = collect(&config, &system_runner(&config), &output)?;
        print!("{}", render(&info, &config));
        return Ok(());
    }

    generate(&config, Some(&output))
        .with_context(|| format!("Failed to generate {}", output.display()))?;
    Ok(())
}
