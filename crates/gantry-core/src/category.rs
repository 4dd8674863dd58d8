//! Node categories and their visual mapping.
//!
//! A [`Category`] is the icon/category tag attached to every node: it says
//! what kind of system component the node represents and determines the
//! Graphviz shape and fill color used when the diagram is rendered.

use std::str::FromStr;

use serde::Deserialize;

/// The kind of system component a node represents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A compute unit: VM, function, worker.
    Compute,
    /// A database or other stateful store.
    Database,
    /// A networking component: gateway, load balancer, DNS.
    Network,
    /// Object or block storage.
    Storage,
    /// A message queue or event bus.
    Queue,
    /// A container or container orchestrator.
    Container,
    /// An end-user client: browser, desktop, mobile.
    Client,
    /// Anything that does not fit the other categories (default).
    #[default]
    Generic,
}

impl Category {
    /// Returns the Graphviz node shape for this category.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Compute => "box",
            Self::Database => "cylinder",
            Self::Network => "hexagon",
            Self::Storage => "folder",
            Self::Queue => "parallelogram",
            Self::Container => "box3d",
            Self::Client => "oval",
            Self::Generic => "box",
        }
    }

    /// Returns the fill color used for nodes of this category.
    pub fn fill_color(&self) -> &'static str {
        match self {
            Self::Compute => "#fad7a0",
            Self::Database => "#aed6f1",
            Self::Network => "#d7bde2",
            Self::Storage => "#f9e79f",
            Self::Queue => "#f5b7b1",
            Self::Container => "#a9dfbf",
            Self::Client => "#d5dbdb",
            Self::Generic => "#eaecee",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compute" => Ok(Self::Compute),
            "database" => Ok(Self::Database),
            "network" => Ok(Self::Network),
            "storage" => Ok(Self::Storage),
            "queue" => Ok(Self::Queue),
            "container" => Ok(Self::Container),
            "client" => Ok(Self::Client),
            "generic" => Ok(Self::Generic),
            _ => Err(format!(
                "invalid category `{s}`, valid values: compute, database, network, \
                 storage, queue, container, client, generic"
            )),
        }
    }
}
