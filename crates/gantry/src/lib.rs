//! Gantry - a declarative builder for architecture diagrams.
//!
//! A diagram is described once through a scoped builder API — labeled nodes
//! with icon categories, nested clusters for visual grouping, directed and
//! optionally styled edges — and rendered once to a single image file.
//! Layout and rasterization are delegated to Graphviz; this crate assembles
//! the description, serializes it to DOT, and drives the engine.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gantry::{Category, Diagram, DiagramConfig, EdgeStyle, OutputFormat};
//!
//! let config = DiagramConfig::new("Web Service")
//!     .with_filename("web")
//!     .with_format(OutputFormat::Png);
//!
//! let path = Diagram::build(config, |d| {
//!     let client = d.node("Browser", Category::Client);
//!
//!     let api = d.cluster("Cloud", |c| {
//!         let api = c.node("API", Category::Compute);
//!         let db = c.node("Postgres", Category::Database);
//!         c.connect(api, db)?;
//!         Ok(api)
//!     })?;
//!
//!     d.connect_with(client, api, EdgeStyle::dashed())
//! })?;
//!
//! println!("wrote {}", path.display());
//! # Ok::<(), gantry::Error>(())
//! ```

pub mod config;

mod dot;
mod error;
mod export;
mod graph;

pub use gantry_core::{
    category::Category,
    direction::Direction,
    identifier,
    style::{EdgeStyle, LineStyle},
};

pub use config::{DiagramConfig, OutputFormat};
pub use error::Error;
pub use export::ExportError;

use std::{fmt, path::PathBuf};

use log::{debug, info, trace};

use gantry_core::identifier::Id;

use graph::{ClusterIndex, Topology};

/// A reference to a declared node, usable as an edge endpoint.
///
/// Handles are cheap to copy and remain valid for the lifetime of the diagram
/// that minted them. A handle from one diagram is not a valid endpoint in
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef(Id);

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A diagram under construction.
///
/// Nodes, clusters, and edges are declared through this type (and through
/// [`Scope`] inside clusters); [`Diagram::render`] consumes the diagram and
/// produces the output file, so a rendered diagram cannot be mutated again.
pub struct Diagram {
    config: DiagramConfig,
    topology: Topology,
}

impl Diagram {
    /// Creates an empty diagram with the given configuration.
    pub fn new(config: DiagramConfig) -> Self {
        Self {
            config,
            topology: Topology::new(),
        }
    }

    /// Scoped one-shot construction: populates a diagram through `f` and
    /// renders it before returning.
    ///
    /// The render step runs only if `f` succeeds; a failed description never
    /// produces an output file.
    ///
    /// # Errors
    ///
    /// Propagates any error from `f`, plus [`Error::Render`] if the layout
    /// engine or the output write fails.
    pub fn build<F, R>(config: DiagramConfig, f: F) -> Result<PathBuf, Error>
    where
        F: FnOnce(&mut Diagram) -> Result<R, Error>,
    {
        let mut diagram = Self::new(config);
        f(&mut diagram)?;
        diagram.render()
    }

    /// Declares a node at the root scope.
    pub fn node(&mut self, label: &str, category: Category) -> NodeRef {
        NodeRef(self.topology.add_node(label, category, None))
    }

    /// Declares a cluster at the root scope and populates it through `f`.
    ///
    /// Everything declared on the closure's [`Scope`] belongs to the cluster.
    /// Node handles escape the cluster by being returned from the closure.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `f`.
    pub fn cluster<F, R>(&mut self, label: &str, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Scope<'_>) -> Result<R, Error>,
    {
        scoped(&mut self.topology, None, label, f)
    }

    /// Records a directed edge with default styling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEndpoint`] if either endpoint was not declared
    /// in this diagram.
    pub fn connect(&mut self, from: NodeRef, to: NodeRef) -> Result<(), Error> {
        self.connect_with(from, to, EdgeStyle::default())
    }

    /// Records a directed edge with the given style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEndpoint`] if either endpoint was not declared
    /// in this diagram.
    pub fn connect_with(
        &mut self,
        from: NodeRef,
        to: NodeRef,
        style: EdgeStyle,
    ) -> Result<(), Error> {
        self.topology.add_edge(from.0, to.0, style)
    }

    /// Returns the DOT serialization of the current description.
    pub fn to_dot(&self) -> String {
        dot::render(&self.topology, &self.config)
    }

    /// Renders the diagram and writes the output file.
    ///
    /// Consumes the diagram; rendering is terminal. Returns the path of the
    /// written file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the layout engine fails or the output
    /// path is not writable.
    pub fn render(self) -> Result<PathBuf, Error> {
        info!(
            title = self.config.title(),
            nodes = self.topology.node_count(),
            edges = self.topology.edge_count();
            "Rendering diagram"
        );

        let dot_source = dot::render(&self.topology, &self.config);
        trace!(dot_source; "Serialized description");

        let path = export::export(&dot_source, &self.config)?;

        debug!(path = path.display().to_string(); "Diagram exported");
        Ok(path)
    }
}

/// The interior of a cluster during construction.
///
/// Created by [`Diagram::cluster`] and [`Scope::cluster`]; declarations made
/// through it belong to that cluster.
pub struct Scope<'a> {
    topology: &'a mut Topology,
    cluster: ClusterIndex,
}

impl Scope<'_> {
    /// Declares a node inside this cluster.
    pub fn node(&mut self, label: &str, category: Category) -> NodeRef {
        NodeRef(self.topology.add_node(label, category, Some(self.cluster)))
    }

    /// Declares a nested cluster and populates it through `f`.
    ///
    /// # Errors
    ///
    /// Propagates any error returned by `f`.
    pub fn cluster<F, R>(&mut self, label: &str, f: F) -> Result<R, Error>
    where
        F: FnOnce(&mut Scope<'_>) -> Result<R, Error>,
    {
        scoped(self.topology, Some(self.cluster), label, f)
    }

    /// Records a directed edge with default styling.
    ///
    /// Edges belong to the diagram, not to the cluster; this is a convenience
    /// so connections can be declared where the endpoints are in scope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEndpoint`] if either endpoint was not declared
    /// in this diagram.
    pub fn connect(&mut self, from: NodeRef, to: NodeRef) -> Result<(), Error> {
        self.connect_with(from, to, EdgeStyle::default())
    }

    /// Records a directed edge with the given style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEndpoint`] if either endpoint was not declared
    /// in this diagram.
    pub fn connect_with(
        &mut self,
        from: NodeRef,
        to: NodeRef,
        style: EdgeStyle,
    ) -> Result<(), Error> {
        self.topology.add_edge(from.0, to.0, style)
    }
}

fn scoped<F, R>(
    topology: &mut Topology,
    parent: Option<ClusterIndex>,
    label: &str,
    f: F,
) -> Result<R, Error>
where
    F: FnOnce(&mut Scope<'_>) -> Result<R, Error>,
{
    let cluster = topology.add_cluster(label, parent);
    let mut scope = Scope { topology, cluster };
    f(&mut scope)
}
