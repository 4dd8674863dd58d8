//! Internal topology storage.
//!
//! [`Topology`] holds the in-memory description that the builder API
//! accumulates before rendering: a node map, the cluster tree, and the edge
//! list. Nodes are keyed by their interned [`Id`], which encodes the full
//! cluster path, so endpoint validation is a single map lookup.
//!
//! Ownership follows the description: a node belongs to exactly one cluster
//! (or the root), clusters form a tree, and edges only reference node ids.

use indexmap::IndexMap;

use gantry_core::{category::Category, identifier::Id, style::EdgeStyle};

use crate::error::Error;

/// Index of a cluster within [`Topology::clusters`]; the root scope is `None`.
pub(crate) type ClusterIndex = usize;

/// A declared node.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) id: Id,
    pub(crate) label: String,
    pub(crate) category: Category,
    pub(crate) parent: Option<ClusterIndex>,
}

/// A declared cluster.
#[derive(Debug, Clone)]
pub(crate) struct ClusterData {
    pub(crate) path: Id,
    pub(crate) label: String,
    pub(crate) parent: Option<ClusterIndex>,
}

/// A declared directed edge.
#[derive(Debug, Clone)]
pub(crate) struct EdgeData {
    pub(crate) source: Id,
    pub(crate) target: Id,
    pub(crate) style: EdgeStyle,
}

/// The complete in-memory diagram description.
#[derive(Debug, Default)]
pub(crate) struct Topology {
    nodes: IndexMap<Id, NodeData>,
    clusters: Vec<ClusterData>,
    edges: Vec<EdgeData>,
}

impl Topology {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Declares a cluster under `parent` and returns its index.
    pub(crate) fn add_cluster(&mut self, label: &str, parent: Option<ClusterIndex>) -> ClusterIndex {
        let path = match parent {
            Some(idx) => self.clusters[idx].path.nested(label),
            None => Id::new(label),
        };
        self.clusters.push(ClusterData {
            path,
            label: label.to_string(),
            parent,
        });
        self.clusters.len() - 1
    }

    /// Declares a node under `parent` and returns its id.
    ///
    /// The id is derived from the cluster path and the label. Duplicate
    /// labels within the same scope get a `#n` suffix so every node keeps a
    /// distinct identity.
    pub(crate) fn add_node(
        &mut self,
        label: &str,
        category: Category,
        parent: Option<ClusterIndex>,
    ) -> Id {
        let base = match parent {
            Some(idx) => self.clusters[idx].path.nested(label),
            None => Id::new(label),
        };

        let mut id = base;
        let mut n = 1;
        while self.nodes.contains_key(&id) {
            n += 1;
            id = Id::new(&format!("{base}#{n}"));
        }

        self.nodes.insert(
            id,
            NodeData {
                id,
                label: label.to_string(),
                category,
                parent,
            },
        );
        id
    }

    /// Records a directed edge between two declared nodes.
    ///
    /// Both endpoints must already exist in this topology.
    pub(crate) fn add_edge(&mut self, source: Id, target: Id, style: EdgeStyle) -> Result<(), Error> {
        for endpoint in [source, target] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(Error::UnknownEndpoint {
                    endpoint: endpoint.to_string(),
                });
            }
        }

        self.edges.push(EdgeData {
            source,
            target,
            style,
        });
        Ok(())
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Nodes declared directly under `parent`, in declaration order.
    pub(crate) fn nodes_of(
        &self,
        parent: Option<ClusterIndex>,
    ) -> impl Iterator<Item = &NodeData> {
        self.nodes.values().filter(move |node| node.parent == parent)
    }

    /// Clusters declared directly under `parent`, in declaration order.
    pub(crate) fn clusters_of(
        &self,
        parent: Option<ClusterIndex>,
    ) -> impl Iterator<Item = (ClusterIndex, &ClusterData)> {
        self.clusters
            .iter()
            .enumerate()
            .filter(move |(_, cluster)| cluster.parent == parent)
    }

    /// All edges, in declaration order.
    pub(crate) fn edges(&self) -> impl Iterator<Item = &EdgeData> {
        self.edges.iter()
    }
}
