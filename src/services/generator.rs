use crate::error::{Error, Result};
use crate::models::config::Config;
use crate::models::version_info::VersionInfo;
use crate::services::dirty::is_dirty;
use crate::services::render::{render, write_version_file};
use crate::services::runner::{CommandRunner, SystemRunner};
use log::{info, warn};
use std::path::{Path, PathBuf};

const GIT: &str = "git";

/// Asks git for the tag, commit and working tree state.
///
/// `output` is the file about to be generated; unless the config lists
/// its own ignore entries, changes to that file do not make the tree dirty.
pub fn collect(config: &Config, runner: &dyn CommandRunner, output: &Path) -> Result<VersionInfo> {
    let tag_description = match runner.run(GIT, &["describe", "--tags"]) {
        Ok(tag) => tag,
        Err(e) => {
            warn!(
                "'git describe --tags' failed, using version {}: {}",
                config.fallback_version, e
            );
            config.fallback_version.clone()
        }
    };

    let commit_hash = runner
        .run(GIT, &["rev-parse", "HEAD"])
        .map_err(Error::CommitHash)?;

    let diff_index = runner
        .run(GIT, &["diff-index", "HEAD"])
        .map_err(Error::DiffIndex)?;

    let dirty = is_dirty(&diff_index, &config.ignore_files_for(output));
    Ok(VersionInfo::new(tag_description, commit_hash, dirty))
}

/// Collects version info through `runner` and writes it to `output`.
pub fn generate_with(config: &Config, runner: &dyn CommandRunner, output: &Path) -> Result<VersionInfo> {
    let info = collect(config, runner, output)?;

    info!("Setting VgVersion to: {}", info.version(&config.dirty_suffix));
    info!("Setting VgHash to: {}", info.commit_hash);
    info!("Setting VgClean to: {}", info.is_clean());

    write_version_file(output, &render(&info, config))?;
    info!("Wrote {}", output.display());
    Ok(info)
}

/// Generates the version file at `output`, or at `config.default_output()`.
pub fn generate(config: &Config, output: Option<&Path>) -> Result<PathBuf> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.default_output());
    generate_with(config, &system_runner(config), &output)?;
    Ok(output)
}

pub fn system_runner(config: &Config) -> SystemRunner {
    SystemRunner::new(config.timeout()).with_work_dir(config.work_dir.clone())
}
