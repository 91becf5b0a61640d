use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input caught before any mutation: a malformed or out-of-range
    /// index, an empty item name, an unknown priority level.
    #[error("{0}")]
    Usage(String),

    /// The checklist could not be written back to disk. The mutation itself
    /// succeeded in memory but is lost when the process exits.
    #[error("could not save file '{path}': {source}; the change was not saved")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No home directory to place the default storage file in.
    #[error("could not find a home directory for the default storage file")]
    Home,
}

impl Error {
    /// The process exit code this error maps to: 2 for usage errors, 1 for
    /// everything else.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => 2,
            Error::Save { .. } | Error::Home => 1,
        }
    }
}
