//! Error types for the state container.

use thiserror::Error;

/// Errors returned by [`Store`](crate::Store) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No module is registered under the requested name.
    #[error("no store module registered under '{name}'")]
    UnknownModule { name: String },
}
