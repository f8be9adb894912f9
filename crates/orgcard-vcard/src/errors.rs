use orgcard_canonical::ErrorKind;
use thiserror::Error;

/// Errors raised while reading vCard text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The record starting at `line` is structurally broken; none of it is kept.
    #[error("malformed document at line {line}: {reason}")]
    MalformedDocument {
        /// 1-based line where the offending record or line starts.
        line: usize,
        /// Reason for rejection.
        reason: String,
    },
}

impl CodecError {
    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::MalformedDocument { .. } => ErrorKind::MalformedDocument,
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        CodecError::MalformedDocument {
            line,
            reason: reason.into(),
        }
    }
}
