// error.rs - Error taxonomy and exit codes

use thiserror::Error;

/// Every way a run can fail. Each one is fatal: `main` prints the message on
/// stderr and exits with [`DropError::exit_code`].
#[derive(Debug, Error)]
pub enum DropError {
    #[error("No file names are specified.")]
    NoFileNames,

    #[error("The specified file path is not valid: {0}")]
    InvalidPath(String),

    #[error("The specified file is not found: {0}")]
    NotFound(String),

    #[error("Failed to generate a command message")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to write the command message: {0}")]
    Output(#[source] std::io::Error),
}

impl DropError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DropError::NoFileNames => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, DropError>;
