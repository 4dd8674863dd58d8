//! Export step: hand the DOT description to the layout engine and write the
//! output file.
//!
//! [`OutputFormat::Dot`] writes the DOT text directly. Every other format is
//! produced by the Graphviz `dot` executable, driven through the
//! [`graphviz-rust`](https://docs.rs/graphviz-rust) crate when the `graphviz`
//! feature is enabled.
//!
//! Exactly one file is written per export, at the configured path. A failing
//! engine or an unwritable path aborts the export and leaves no output.

use std::{fs, io, path::PathBuf};

use log::debug;
use thiserror::Error;

use crate::config::{DiagramConfig, OutputFormat};

/// Errors from the layout/export step.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("layout engine failed: {0}")]
    Engine(String),

    #[error("`{0}` output requires the `graphviz` feature")]
    EngineUnavailable(&'static str),
}

/// Renders `dot_source` in the configured format and writes the output file.
///
/// Returns the path of the written file.
pub(crate) fn export(dot_source: &str, config: &DiagramConfig) -> Result<PathBuf, ExportError> {
    let path = config.output_path();

    let bytes = match config.format() {
        OutputFormat::Dot => dot_source.as_bytes().to_vec(),
        format => layout(dot_source, format)?,
    };

    debug!(path = path.display().to_string(), bytes = bytes.len(); "Writing output file");
    fs::write(&path, bytes).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

#[cfg(feature = "graphviz")]
fn layout(dot_source: &str, format: OutputFormat) -> Result<Vec<u8>, ExportError> {
    use graphviz_rust::cmd::Format;

    let engine_format = match format {
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Pdf => Format::Pdf,
        OutputFormat::Dot => Format::Dot,
    };

    graphviz_rust::exec_dot(dot_source.to_string(), vec![engine_format.into()])
        .map_err(|err| ExportError::Engine(err.to_string()))
}

#[cfg(not(feature = "graphviz"))]
fn layout(_dot_source: &str, format: OutputFormat) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::EngineUnavailable(format.extension()))
}
