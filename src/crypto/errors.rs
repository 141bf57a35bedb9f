use thiserror::Error;

/// Errors reported by the byte-level cipher entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DesError {
    /// Messages must be one block (8 bytes) or one challenge (16 bytes).
    #[error("message must be 8 or 16 bytes long, got {len}")]
    InvalidInputLength { len: usize },

    /// Keys are always exactly one block wide.
    #[error("key must be exactly 8 bytes long, got {len}")]
    InvalidKeyLength { len: usize },
}
