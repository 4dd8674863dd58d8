//! Error types for Gantry operations.

use std::io;

use thiserror::Error;

use crate::export::ExportError;

/// The main error type for Gantry operations.
///
/// Failures are all-or-nothing: the description is built entirely in memory
/// before rendering is attempted, so an error never leaves a partial output
/// file behind.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An edge referenced a node that was never declared in this diagram.
    #[error("unknown edge endpoint `{endpoint}`")]
    UnknownEndpoint { endpoint: String },

    /// The layout engine or the output write failed.
    #[error("render error: {0}")]
    Render(#[from] ExportError),
}
