use crate::error::{Error, Result};
use crate::models::version_info::Language;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PACKAGE_NAME: &str = "version";
pub const DEFAULT_DIRTY_SUFFIX: &str = "+";
pub const DEFAULT_FALLBACK_VERSION: &str = "0.1.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Settings for one generation run. Read-only once the run starts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Appended to the version when the tree has uncommitted changes.
    pub dirty_suffix: String,
    /// File name substrings that never make the tree dirty. When unset,
    /// the generated file's own name is ignored.
    pub ignore_files: Option<Vec<String>>,
    pub timeout_secs: u64,
    pub package_name: String,
    pub language: Language,
    /// Used when `git describe --tags` fails, e.g. in a repo with no tags.
    pub fallback_version: String,
    /// Directory git runs in. Defaults to the current directory.
    pub work_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dirty_suffix: DEFAULT_DIRTY_SUFFIX.to_string(),
            ignore_files: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            language: Language::default(),
            fallback_version: DEFAULT_FALLBACK_VERSION.to_string(),
            work_dir: None,
        }
    }
}

impl Config {
    pub const FILENAME: &'static str = "vergen.toml";

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate().map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })?;
        Ok(config)
    }

    /// Checks values the type system cannot rule out.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `<package>/<package>.<ext>`, relative to the current directory.
    pub fn default_output(&self) -> PathBuf {
        PathBuf::from(&self.package_name).join(format!(
            "{}.{}",
            self.package_name,
            self.language.extension()
        ))
    }

    pub fn ignore_files_for(&self, output: &Path) -> Vec<String> {
        if let Some(files) = &self.ignore_files {
            return files.clone();
        }
        output
            .file_name()
            .map(|n| vec![n.to_string_lossy().into_owned()])
            .unwrap_or_default()
    }
}
