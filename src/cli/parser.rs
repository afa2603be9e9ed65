use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vergen::{Config, Language};

#[derive(Parser)]
#[command(name = "vergen")]
#[command(version, about = "Generate build version constants from git", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the version file
    Generate {
        /// Output file [default: <package>/<package>.<ext>]
        output: Option<PathBuf>,
        /// Print the file instead of writing it
        #[arg(long)]
        dry_run: bool,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Show the values that would be generated
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Overrides layered on top of the config file.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Config file [default: ./vergen.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Appended to the version when there are uncommitted changes
    #[arg(long)]
    pub suffix: Option<String>,

    /// File name substring whose changes are not counted (repeatable)
    #[arg(long = "ignore", value_name = "FILE")]
    pub ignore: Vec<String>,

    /// Seconds to wait for each git command
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Package or module name of the generated file
    #[arg(long)]
    pub package: Option<String>,

    /// Language of the generated file
    #[arg(long, value_enum)]
    pub lang: Option<Language>,

    /// Version used when the repository has no tags
    #[arg(long)]
    pub fallback: Option<String>,

    /// Repository to inspect [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(suffix) = &self.suffix {
            config.dirty_suffix = suffix.clone();
        }
        if !self.ignore.is_empty() {
            config.ignore_files = Some(self.ignore.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(package) = &self.package {
            config.package_name = package.clone();
        }
        if let Some(lang) = self.lang {
            config.language = lang;
        }
        if let Some(fallback) = &self.fallback {
            config.fallback_version = fallback.clone();
        }
        if let Some(repo) = &self.repo {
            config.work_dir = Some(repo.clone());
        }
    }
}
