use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Execution,
    Parse,
}

/// Everything that can go wrong between a query and its rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    #[error("executable not found: {} ({reason})", path.display())]
    Configuration { path: PathBuf, reason: String },
    #[error("execution failed: {0}")]
    Execution(String),
    #[error("invalid response: {0}")]
    Parse(String),
}

impl InvokeError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            InvokeError::Configuration { .. } => ErrorKind::Configuration,
            InvokeError::Execution(_) => ErrorKind::Execution,
            InvokeError::Parse(_) => ErrorKind::Parse,
        }
    }

    #[must_use]
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}
