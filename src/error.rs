use std::collections::TryReserveError;

use thiserror::Error;

/// Recoverable failures of tree operations.
///
/// Contract violations (out-of-range node ids, rotations without the required
/// child) are caller bugs and panic instead of surfacing here.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Arena growth could not acquire memory. The tree is left unmodified.
    #[error("arena growth failed: {0}")]
    OutOfMemory(#[from] TryReserveError),
}
