use crate::error::{Error, Result};
use crate::models::config::Config;
use crate::models::version_info::{Language, VersionInfo};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

const PROVENANCE: &str = "// auto generated by vergen. DO NOT EDIT.";

/// Renders the constants file for `info` in `config.language`.
pub fn render(info: &VersionInfo, config: &Config) -> String {
    let version = escape(&info.version(&config.dirty_suffix));
    let hash = escape(&info.commit_hash);
    let clean = info.is_clean();

    match config.language {
        Language::Go => format!(
            "package {pkg}\n\
             {PROVENANCE}\n\
             const (\n\
             \tVgVersion   = \"{version}\"\n\
             \tVgHash      = \"{hash}\"\n\
             \tVgClean     = {clean}\n\
             )\n",
            pkg = config.package_name,
        ),
        Language::Rust => format!(
            "{PROVENANCE}\n\
             // Build version constants for the `{pkg}` module.\n\
             \n\
             pub const VG_VERSION: &str = \"{version}\";\n\
             pub const VG_HASH: &str = \"{hash}\";\n\
             pub const VG_CLEAN: bool = {clean};\n",
            pkg = config.package_name,
        ),
    }
}

/// Writes `contents` to `path`, creating the parent directory and
/// replacing whatever was there.
pub fn write_version_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(contents.as_bytes()).map_err(write_err)?;
    Ok(())
}

/// Escapes a value for a double-quoted literal; the subset below is valid in both Go and Rust.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
