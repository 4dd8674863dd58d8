//! Edge styling definitions.
//!
//! This module provides [`EdgeStyle`], the optional styling attached to a
//! directed edge, and [`LineStyle`], the line pattern of the connector.
//! Both map directly to Graphviz edge attributes (`style`, `color`, `label`).

use std::str::FromStr;

use serde::Deserialize;

/// The line pattern of an edge connector.
///
/// Maps to the Graphviz `style` edge attribute; [`LineStyle::Solid`] is the
/// engine default and emits no attribute at all.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    /// Continuous line (default).
    #[default]
    Solid,
    /// Dashed line.
    Dashed,
    /// Dotted line.
    Dotted,
    /// Thick continuous line.
    Bold,
}

impl LineStyle {
    /// Returns the Graphviz `style` value, or `None` for solid lines.
    pub fn dot_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("dashed"),
            Self::Dotted => Some("dotted"),
            Self::Bold => Some("bold"),
        }
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "bold" => Ok(Self::Bold),
            _ => Err(format!(
                "invalid line style `{s}`, valid values: solid, dashed, dotted, bold"
            )),
        }
    }
}

/// Styling for a directed edge.
///
/// The default style is a plain solid connector with engine-default color and
/// no label, which emits no edge attributes at all.
///
/// # Examples
///
/// ```
/// use gantry_core::style::{EdgeStyle, LineStyle};
///
/// // Plain solid edge
/// let style = EdgeStyle::default();
/// assert!(style.is_default());
///
/// // Dashed edge with a label
/// let style = EdgeStyle::dashed().with_label("signaling");
/// assert_eq!(style.line(), LineStyle::Dashed);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct EdgeStyle {
    /// Line pattern of the connector.
    #[serde(default)]
    line: LineStyle,

    /// Stroke color, as a Graphviz color string.
    #[serde(default)]
    color: Option<String>,

    /// Text label drawn along the edge.
    #[serde(default)]
    label: Option<String>,
}

impl EdgeStyle {
    /// Creates a style with the given line pattern.
    pub fn new(line: LineStyle) -> Self {
        Self {
            line,
            ..Self::default()
        }
    }

    /// Creates a dashed style (convenience constructor).
    pub fn dashed() -> Self {
        Self::new(LineStyle::Dashed)
    }

    /// Creates a dotted style (convenience constructor).
    pub fn dotted() -> Self {
        Self::new(LineStyle::Dotted)
    }

    /// Creates a bold style (convenience constructor).
    pub fn bold() -> Self {
        Self::new(LineStyle::Bold)
    }

    /// Sets the stroke color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the edge label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the line pattern.
    pub fn line(&self) -> LineStyle {
        self.line
    }

    /// Returns the stroke color, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Returns the edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns `true` if the style carries no attributes to emit.
    pub fn is_default(&self) -> bool {
        self.line == LineStyle::Solid && self.color.is_none() && self.label.is_none()
    }
}
