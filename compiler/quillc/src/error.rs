use quill_ir::SpanError;
use thiserror::Error;

/// Failures of the driver itself, as opposed to diagnostics about the
/// input program.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{message}")]
    Io {
        message: String,
        source: std::io::Error,
    },
    #[error("'{path}' is too large to parse ({source})")]
    TooLarge { path: String, source: SpanError },
    #[error("{0}")]
    Usage(String),
    #[error("{failed} of {total} files could not be checked")]
    Incomplete { failed: usize, total: usize },
}

impl DriverError {
    /// Wrap a read failure with a message naming the file.
    pub(crate) fn read(path: &str, source: std::io::Error) -> Self {
        let message = match source.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {source}"),
        };
        DriverError::Io { message, source }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, DriverError::Usage(_))
    }
}
