use std::path::PathBuf;

use thiserror::Error;

pub type Result<A> = std::result::Result<A, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Encountered io error: `{0}`")]
    IOError(std::io::Error),
    #[error("Pages directory not found: `{0}`")]
    MissingDir(PathBuf),
    #[error("Error with templating: `{0}`")]
    JinjaError(minijinja::Error),
    #[error("Error watching files: `{0}`")]
    NotifyError(notify::Error),
    #[error("Failed to read config: `{0}`")]
    ConfigError(figment::Error),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::IOError(value)
    }
}

impl From<minijinja::Error> for Error {
    fn from(value: minijinja::Error) -> Self {
        Self::JinjaError(value)
    }
}

impl From<notify::Error> for Error {
    fn from(value: notify::Error) -> Self {
        Self::NotifyError(value)
    }
}

impl From<figment::Error> for Error {
    fn from(value: figment::Error) -> Self {
        Self::ConfigError(value)
    }
}
