//! Error adapter for converting [`gantry::Error`] to miette diagnostics.
//!
//! The library's errors carry no source spans (the input is programmatic or
//! a structured file), so the adapter only contributes stable error codes
//! and help text for the CLI's graphical reports.

use std::{error::Error as _, fmt};

use miette::Diagnostic as MietteDiagnostic;

use gantry::Error;

/// Adapter wrapping a [`gantry::Error`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a Error);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            Error::Io(_) => "gantry::io",
            Error::UnknownEndpoint { .. } => "gantry::endpoint",
            Error::Render(_) => "gantry::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            Error::UnknownEndpoint { .. } => Some(Box::new(
                "declare the node (in [[nodes]] or a cluster) before connecting it",
            )),
            _ => None,
        }
    }
}
