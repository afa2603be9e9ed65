pub mod config;
pub mod version_info;
