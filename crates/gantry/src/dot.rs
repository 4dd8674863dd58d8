//! DOT serialization of the topology.
//!
//! The render pipeline hands the layout engine a textual DOT description:
//! graph attributes from the configuration, nodes with category-specific
//! shapes and fill colors, clusters as nested `subgraph cluster_*` blocks,
//! and edges with their style attributes.
//!
//! All identifiers and labels are emitted as quoted strings, so no name
//! mangling is needed; [`escape`] handles the characters that are special
//! inside DOT quoted strings.

use std::fmt::Write;

use crate::{
    config::DiagramConfig,
    graph::{ClusterIndex, EdgeData, NodeData, Topology},
};

/// Escapes a string for use inside a DOT quoted string.
pub(crate) fn escape(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Incremental DOT text writer.
struct DotWriter {
    output: String,
    indent: usize,
}

impl DotWriter {
    fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            indent: 1,
        }
    }

    fn line(&mut self, statement: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(statement);
        self.output.push('\n');
    }

    fn attr(&mut self, key: &str, value: &str) {
        self.line(&format!("{key}=\"{}\";", escape(value)));
    }

    fn node(&mut self, node: &NodeData) {
        self.line(&format!(
            "\"{}\" [label=\"{}\", shape=\"{}\", style=\"filled\", fillcolor=\"{}\"];",
            escape(&node.id.to_string()),
            escape(&node.label),
            node.category.shape(),
            node.category.fill_color(),
        ));
    }

    fn edge(&mut self, edge: &EdgeData) {
        let mut statement = format!(
            "\"{}\" -> \"{}\"",
            escape(&edge.source.to_string()),
            escape(&edge.target.to_string()),
        );

        let mut attrs = Vec::new();
        if let Some(style) = edge.style.line().dot_value() {
            attrs.push(format!("style=\"{style}\""));
        }
        if let Some(color) = edge.style.color() {
            attrs.push(format!("color=\"{}\"", escape(color)));
        }
        if let Some(label) = edge.style.label() {
            attrs.push(format!("label=\"{}\"", escape(label)));
        }
        if !attrs.is_empty() {
            let _ = write!(statement, " [{}]", attrs.join(", "));
        }
        statement.push(';');

        self.line(&statement);
    }

    fn begin_cluster(&mut self, path: &str, label: &str) {
        self.line(&format!("subgraph \"cluster_{}\" {{", escape(path)));
        self.indent += 1;
        self.attr("label", label);
    }

    fn end_cluster(&mut self) {
        self.indent -= 1;
        self.line("}");
    }
}

/// Serializes the topology and configuration to DOT text.
pub(crate) fn render(topology: &Topology, config: &DiagramConfig) -> String {
    let mut writer = DotWriter::new();

    if !config.title().is_empty() {
        writer.attr("label", config.title());
        writer.attr("labelloc", "t");
    }
    writer.attr("rankdir", config.direction().rankdir());
    for (key, value) in config.attributes() {
        writer.attr(key, value);
    }

    write_scope(&mut writer, topology, None);

    for edge in topology.edges() {
        writer.edge(edge);
    }

    format!("digraph {{\n{}}}\n", writer.output)
}

/// Emits the nodes and sub-clusters declared directly under `parent`.
fn write_scope(writer: &mut DotWriter, topology: &Topology, parent: Option<ClusterIndex>) {
    for node in topology.nodes_of(parent) {
        writer.node(node);
    }

    for (index, cluster) in topology.clusters_of(parent) {
        writer.begin_cluster(&cluster.path.to_string(), &cluster.label);
        write_scope(writer, topology, Some(index));
        writer.end_cluster();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use gantry_core::{category::Category, style::EdgeStyle};

    use super::*;

    fn simple_topology() -> Topology {
        let mut topology = Topology::new();
        let a = topology.add_node("A", Category::Generic, None);
        let b = topology.add_node("B", Category::Generic, None);
        topology.add_edge(a, b, EdgeStyle::default()).unwrap();
        topology
    }

    #[test]
    fn renders_digraph_with_nodes_and_edge() {
        let topology = simple_topology();
        let dot = render(&topology, &DiagramConfig::new("test"));

        assert!(dot.starts_with("digraph {"));
        assert!(dot.trim_end().ends_with('}'));
        assert!(dot.contains("\"A\" [label=\"A\""));
        assert!(dot.contains("\"B\" [label=\"B\""));
        assert_eq!(dot.matches("->").count(), 1);
        assert!(dot.contains("\"A\" -> \"B\";"));
    }

    #[test]
    fn solid_edge_emits_no_attributes() {
        let topology = simple_topology();
        let dot = render(&topology, &DiagramConfig::new("test"));

        assert!(!dot.contains("style=\"dashed\""));
        assert!(dot.contains("\"A\" -> \"B\";"));
    }

    #[test]
    fn styled_edge_emits_attributes() {
        let mut topology = Topology::new();
        let a = topology.add_node("a", Category::Generic, None);
        let b = topology.add_node("b", Category::Generic, None);
        let style = EdgeStyle::dashed().with_color("grey").with_label("sync");
        topology.add_edge(a, b, style).unwrap();

        let dot = render(&topology, &DiagramConfig::new("test"));
        assert!(dot.contains(
            "\"a\" -> \"b\" [style=\"dashed\", color=\"grey\", label=\"sync\"];"
        ));
    }

    #[test]
    fn title_and_direction_become_graph_attributes() {
        let topology = Topology::new();
        let config = DiagramConfig::new("Pixel Streaming Backend")
            .with_attribute("fontsize", "20")
            .with_attribute("bgcolor", "transparent");
        let dot = render(&topology, &config);

        assert!(dot.contains("label=\"Pixel Streaming Backend\";"));
        assert!(dot.contains("labelloc=\"t\";"));
        assert!(dot.contains("rankdir=\"LR\";"));
        assert!(dot.contains("fontsize=\"20\";"));
        assert!(dot.contains("bgcolor=\"transparent\";"));
    }

    #[test]
    fn untitled_graph_omits_label() {
        let topology = Topology::new();
        let dot = render(&topology, &DiagramConfig::default());
        assert!(!dot.contains("labelloc"));
    }

    #[test]
    fn clusters_nest_and_contain_their_nodes() {
        let mut topology = Topology::new();
        let aws = topology.add_cluster("AWS", None);
        let eks = topology.add_cluster("EKS", Some(aws));
        topology.add_node("External API", Category::Container, Some(eks));
        topology.add_node("Frontend", Category::Client, None);

        let dot = render(&topology, &DiagramConfig::new("test"));

        let outer = dot.find("subgraph \"cluster_AWS\"").unwrap();
        let inner = dot.find("subgraph \"cluster_AWS::EKS\"").unwrap();
        let api = dot.find("External API").unwrap();
        assert!(outer < inner);
        assert!(inner < api);

        // The top-level node is emitted before any cluster block.
        let frontend = dot.find("\"Frontend\"").unwrap();
        assert!(frontend < outer);
    }

    #[test]
    fn node_shape_follows_category() {
        let mut topology = Topology::new();
        topology.add_node("DynamoDB", Category::Database, None);

        let dot = render(&topology, &DiagramConfig::new("test"));
        assert!(dot.contains("shape=\"cylinder\""));
        assert!(dot.contains(&format!(
            "fillcolor=\"{}\"",
            Category::Database.fill_color()
        )));
    }

    #[test]
    fn escape_handles_special_characters() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
        assert_eq!(escape("two\nlines"), "two\\nlines");
    }

    proptest! {
        #[test]
        fn escaped_text_has_no_unescaped_quotes_or_newlines(input in ".*") {
            let escaped = escape(&input);
            prop_assert!(!escaped.contains('\n'));

            let mut chars = escaped.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    // Consume the escaped character.
                    chars.next();
                } else {
                    prop_assert_ne!(c, '"');
                }
            }
        }
    }
}
