use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Failure of a single external command.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("could not spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("i/o error while running `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with {status}: {output}")]
    Failed {
        command: String,
        status: ExitStatus,
        output: String,
    },
    #[error("`{command}` killed after {timeout:?}")]
    TimedOut { command: String, timeout: Duration },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not run 'git rev-parse HEAD' to get commit hash")]
    CommitHash(#[source] CommandError),
    #[error("could not run 'git diff-index HEAD' to detect uncommitted changes")]
    DiffIndex(#[source] CommandError),
    #[error("could not create directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read config file {path:?}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
