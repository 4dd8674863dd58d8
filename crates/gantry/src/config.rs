//! Configuration for diagram rendering.
//!
//! [`DiagramConfig`] carries everything the render step needs besides the
//! topology itself: the title, flow direction, output location and format,
//! and free-form Graphviz graph attributes. All types implement
//! [`serde::Deserialize`] so a configuration can be loaded from an external
//! description file.

use std::{path::PathBuf, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use gantry_core::direction::Direction;

/// The image format of the rendered output.
///
/// [`OutputFormat::Dot`] writes the DOT text itself and needs no layout
/// engine; the other formats are produced by Graphviz.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Portable Network Graphics (default).
    #[default]
    Png,
    /// Scalable Vector Graphics.
    Svg,
    /// Portable Document Format.
    Pdf,
    /// Raw Graphviz DOT text.
    Dot,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Dot => "dot",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            "dot" => Ok(Self::Dot),
            _ => Err(format!(
                "invalid output format `{s}`, valid values: png, svg, pdf, dot"
            )),
        }
    }
}

/// Rendering configuration for a diagram.
///
/// # Examples
///
/// ```
/// use gantry::{DiagramConfig, OutputFormat};
/// use gantry_core::direction::Direction;
///
/// let config = DiagramConfig::new("Pixel Streaming Backend")
///     .with_direction(Direction::LeftToRight)
///     .with_filename("infra")
///     .with_format(OutputFormat::Png)
///     .with_attribute("fontsize", "20")
///     .with_attribute("bgcolor", "transparent");
///
/// assert_eq!(config.output_path().to_str(), Some("infra.png"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DiagramConfig {
    /// Diagram title, drawn above the graph.
    #[serde(default)]
    title: String,

    /// Flow direction of the layout.
    #[serde(default)]
    direction: Direction,

    /// Output file stem; the extension follows the format.
    #[serde(default = "default_filename")]
    filename: String,

    /// Output image format.
    #[serde(default)]
    format: OutputFormat,

    /// Free-form Graphviz graph attributes, emitted in insertion order.
    #[serde(default)]
    attributes: IndexMap<String, String>,
}

fn default_filename() -> String {
    "diagram".to_string()
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            direction: Direction::default(),
            filename: default_filename(),
            format: OutputFormat::default(),
            attributes: IndexMap::new(),
        }
    }
}

impl DiagramConfig {
    /// Creates a configuration with the given title and defaults otherwise.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the flow direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the output file stem.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Adds a Graphviz graph attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the flow direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the output file stem.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the graph attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the full output path: the file stem plus the format extension.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.filename, self.format.extension()))
    }
}
