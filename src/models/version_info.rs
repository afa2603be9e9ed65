use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub tag_description: String,
    pub commit_hash: String,
    pub is_dirty: bool,
}

impl VersionInfo {
    pub fn new(tag_description: String, commit_hash: String, is_dirty: bool) -> Self {
        Self {
            tag_description,
            commit_hash,
            is_dirty,
        }
    }

    /// Tag description, with `dirty_suffix` appended when the tree is dirty.
    pub fn version(&self, dirty_suffix: &str) -> String {
        if self.is_dirty {
            format!("{}{}", self.tag_description, dirty_suffix)
        } else {
            self.tag_description.clone()
        }
    }

    pub fn is_clean(&self) -> bool {
        !self.is_dirty
    }
}

/// Syntax of the generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Go,
    Rust,
}

impl Language {
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Rust => "rs",
        }
    }
}
