//! Generates a source file holding the version, commit hash and clean
//! flag of the git checkout it runs in.

pub mod error;
pub mod models;
pub mod services;

pub use error::{CommandError, Error, Result};
pub use models::config::Config;
pub use models::version_info::{Language, VersionInfo};
pub use services::generator::{collect, generate, generate_with};
pub use services::runner::{CommandRunner, SystemRunner};
