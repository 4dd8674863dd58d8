//! TOML topology descriptions.
//!
//! The CLI's input is a declarative TOML file: a `[diagram]` table with the
//! rendering configuration, `[[nodes]]` and recursive `[[clusters]]` for the
//! entities, and `[[edges]]` connecting nodes by name. This module parses the
//! file and replays it onto the [`Diagram`] builder API.

use std::{collections::HashMap, fs, path::Path};

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use gantry::{
    Category, Diagram, DiagramConfig, EdgeStyle, Error, NodeRef, OutputFormat, Scope,
};
use gantry_core::direction::Direction;

use crate::config::AppConfig;

/// Description-file errors.
#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("Failed to parse topology description: {0}")]
    Parse(String),

    #[error("Duplicate node name `{0}` in description")]
    DuplicateNode(String),
}

impl From<DescriptionError> for Error {
    fn from(err: DescriptionError) -> Self {
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

/// A parsed topology description.
#[derive(Debug, Default, Deserialize)]
pub struct Description {
    /// Rendering configuration section.
    #[serde(default)]
    diagram: DiagramSection,

    /// Top-level nodes.
    #[serde(default)]
    nodes: Vec<NodeDecl>,

    /// Top-level clusters.
    #[serde(default)]
    clusters: Vec<ClusterDecl>,

    /// Directed edges between declared nodes.
    #[serde(default)]
    edges: Vec<EdgeDecl>,
}

/// The `[diagram]` table of a description.
#[derive(Debug, Default, Deserialize)]
struct DiagramSection {
    #[serde(default)]
    title: String,

    #[serde(default)]
    direction: Option<Direction>,

    #[serde(default)]
    filename: Option<String>,

    #[serde(default)]
    format: Option<OutputFormat>,

    /// Free-form Graphviz graph attributes.
    #[serde(default)]
    attributes: IndexMap<String, String>,
}

/// A node declaration.
#[derive(Debug, Deserialize)]
struct NodeDecl {
    /// Name used by edges to reference this node; unique per description.
    name: String,

    /// Display label; defaults to the name.
    #[serde(default)]
    label: Option<String>,

    #[serde(default)]
    category: Category,
}

impl NodeDecl {
    fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// A cluster declaration; clusters nest arbitrarily.
#[derive(Debug, Deserialize)]
struct ClusterDecl {
    label: String,

    #[serde(default)]
    nodes: Vec<NodeDecl>,

    #[serde(default)]
    clusters: Vec<ClusterDecl>,
}

/// An edge declaration referencing nodes by name.
#[derive(Debug, Deserialize)]
struct EdgeDecl {
    from: String,
    to: String,

    #[serde(default)]
    style: EdgeStyle,
}

impl Description {
    /// Builds the effective [`DiagramConfig`]: description values, app-config
    /// defaults where the description is silent, then command-line overrides.
    pub fn diagram_config(
        &self,
        app_config: &AppConfig,
        output: Option<&str>,
        format: Option<OutputFormat>,
    ) -> DiagramConfig {
        let section = &self.diagram;

        let direction = section
            .direction
            .or_else(|| app_config.render().direction())
            .unwrap_or_default();
        let format = format
            .or(section.format)
            .or_else(|| app_config.render().format())
            .unwrap_or_default();

        let mut config = DiagramConfig::new(section.title.clone())
            .with_direction(direction)
            .with_format(format);

        if let Some(filename) = output.or(section.filename.as_deref()) {
            config = config.with_filename(filename);
        }
        for (key, value) in &section.attributes {
            config = config.with_attribute(key, value);
        }
        config
    }

    /// Replays the description onto a [`Diagram`] and renders it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEndpoint`] for edges referencing undeclared
    /// node names, [`DescriptionError::DuplicateNode`] (as an I/O error) for
    /// name collisions, and [`Error::Render`] for export failures.
    pub fn render(&self, config: DiagramConfig) -> Result<std::path::PathBuf, Error> {
        Diagram::build(config, |diagram| {
            let mut handles: HashMap<&str, NodeRef> = HashMap::new();

            for decl in &self.nodes {
                let handle = diagram.node(decl.display_label(), decl.category);
                register(&mut handles, decl, handle)?;
            }
            for cluster in &self.clusters {
                diagram.cluster(&cluster.label, |scope| {
                    declare_cluster(scope, cluster, &mut handles)
                })?;
            }

            debug!(nodes = handles.len(), edges = self.edges.len(); "Description replayed");

            for edge in &self.edges {
                let from = resolve(&handles, &edge.from)?;
                let to = resolve(&handles, &edge.to)?;
                diagram.connect_with(from, to, edge.style.clone())?;
            }
            Ok(())
        })
    }
}

fn register<'a>(
    handles: &mut HashMap<&'a str, NodeRef>,
    decl: &'a NodeDecl,
    handle: NodeRef,
) -> Result<(), Error> {
    if handles.insert(decl.name.as_str(), handle).is_some() {
        return Err(DescriptionError::DuplicateNode(decl.name.clone()).into());
    }
    Ok(())
}

fn declare_cluster<'a>(
    scope: &mut Scope<'_>,
    decl: &'a ClusterDecl,
    handles: &mut HashMap<&'a str, NodeRef>,
) -> Result<(), Error> {
    for node in &decl.nodes {
        let handle = scope.node(node.display_label(), node.category);
        register(handles, node, handle)?;
    }
    for child in &decl.clusters {
        scope.cluster(&child.label, |inner| {
            declare_cluster(inner, child, handles)
        })?;
    }
    Ok(())
}

fn resolve(handles: &HashMap<&str, NodeRef>, name: &str) -> Result<NodeRef, Error> {
    handles.get(name).copied().ok_or_else(|| Error::UnknownEndpoint {
        endpoint: name.to_string(),
    })
}

/// Loads and parses a topology description file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or a parse error for
/// invalid TOML.
pub fn load(path: impl AsRef<Path>) -> Result<Description, Error> {
    let content = fs::read_to_string(path.as_ref())?;
    let description: Description =
        toml::from_str(&content).map_err(|e| DescriptionError::Parse(e.to_string()))?;
    Ok(description)
}
