use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Artifact '{name}': {reason}")]
    Artifact { name: String, reason: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Duplicate artifact name: {0}")]
    DuplicateName(String),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    /// Build an [`Error::Artifact`] for the named artifact.
    pub fn artifact(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Artifact {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
