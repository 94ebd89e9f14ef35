use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a validation run.
///
/// Everything else that can go wrong with a blame-ignore file (bad lines,
/// commits that don't exist, missing comments) is reported as data in the
/// `ValidationResult` instead.
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("The file '{}' does not exist.", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch commits authored by {author}.")]
    BotAuditFailed {
        author: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
