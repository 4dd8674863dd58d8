//! Integration tests for the public diagram builder API.

use std::fs;

use tempfile::tempdir;

use gantry::{Category, Diagram, DiagramConfig, EdgeStyle, Error, OutputFormat};

fn dot_config(stem: &std::path::Path) -> DiagramConfig {
    DiagramConfig::new("test")
        .with_filename(stem.to_str().unwrap())
        .with_format(OutputFormat::Dot)
}

#[test]
fn build_produces_exactly_one_file() {
    let dir = tempdir().unwrap();

    let path = Diagram::build(dot_config(&dir.path().join("out")), |d| {
        let a = d.node("A", Category::Generic);
        let b = d.node("B", Category::Generic);
        d.connect(a, b)
    })
    .unwrap();

    assert_eq!(path, dir.path().join("out.dot"));
    assert!(path.exists());

    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let dot = fs::read_to_string(&path).unwrap();
    assert!(dot.contains("\"A\""));
    assert!(dot.contains("\"B\""));
    assert_eq!(dot.matches("->").count(), 1);
}

#[test]
fn foreign_handle_is_an_unknown_endpoint() {
    let dir = tempdir().unwrap();

    let mut other = Diagram::new(dot_config(&dir.path().join("other")));
    let foreign = other.node("Elsewhere", Category::Generic);

    let mut diagram = Diagram::new(dot_config(&dir.path().join("out")));
    let local = diagram.node("Local", Category::Generic);

    let err = diagram.connect(local, foreign).unwrap_err();
    assert!(matches!(err, Error::UnknownEndpoint { .. }));
    assert!(err.to_string().contains("Elsewhere"));

    // Position in the description does not matter.
    let later = diagram.node("Later", Category::Generic);
    let err = diagram.connect(foreign, later).unwrap_err();
    assert!(matches!(err, Error::UnknownEndpoint { .. }));
}

#[test]
fn failed_build_writes_nothing() {
    let dir = tempdir().unwrap();
    let stem = dir.path().join("out");

    let mut other = Diagram::new(dot_config(&dir.path().join("other")));
    let foreign = other.node("ghost", Category::Generic);

    let result = Diagram::build(dot_config(&stem), |d| {
        let a = d.node("A", Category::Generic);
        d.connect(a, foreign)
    });

    assert!(result.is_err());
    assert!(!dir.path().join("out.dot").exists());
}

#[test]
fn rerender_overwrites_previous_file() {
    let dir = tempdir().unwrap();
    let stem = dir.path().join("out");

    let first = Diagram::build(dot_config(&stem), |d| {
        d.node("A", Category::Generic);
        Ok(())
    })
    .unwrap();

    let second = Diagram::build(dot_config(&stem), |d| {
        d.node("B", Category::Generic);
        Ok(())
    })
    .unwrap();

    assert_eq!(first, second);
    let dot = fs::read_to_string(&second).unwrap();
    assert!(dot.contains("\"B\""));
    assert!(!dot.contains("\"A\""));
}

#[test]
fn cluster_grouping_and_dashed_edge() {
    let dir = tempdir().unwrap();

    let path = Diagram::build(dot_config(&dir.path().join("out")), |d| {
        let y = d.node("Y", Category::Client);
        let x = d.cluster("C", |c| Ok(c.node("X", Category::Compute)))?;
        d.connect_with(y, x, EdgeStyle::dashed())
    })
    .unwrap();

    let dot = fs::read_to_string(path).unwrap();

    // X is declared inside the cluster block for C.
    let cluster_open = dot.find("subgraph \"cluster_C\"").unwrap();
    let x_decl = dot.find("label=\"X\"").unwrap();
    assert!(cluster_open < x_decl);

    assert!(dot.contains("style=\"dashed\""));
}

#[test]
fn nested_cluster_handles_escape_through_returns() {
    let dir = tempdir().unwrap();

    let path = Diagram::build(dot_config(&dir.path().join("out")), |d| {
        let frontend = d.node("Frontend", Category::Client);

        let (rest, api) = d.cluster("AWS", |aws| {
            let rest = aws.node("Signaling REST API", Category::Network);
            let api = aws.cluster("EKS", |eks| {
                Ok(eks.node("External API", Category::Container))
            })?;
            aws.connect(api, rest)?;
            Ok((rest, api))
        })?;

        d.connect(frontend, api)?;
        d.connect_with(rest, frontend, EdgeStyle::dotted())
    })
    .unwrap();

    let dot = fs::read_to_string(path).unwrap();
    assert!(dot.contains("subgraph \"cluster_AWS\""));
    assert!(dot.contains("subgraph \"cluster_AWS::EKS\""));
    assert_eq!(dot.matches("->").count(), 3);
}

#[test]
fn unwritable_path_is_a_render_error() {
    let dir = tempdir().unwrap();
    let stem = dir.path().join("does-not-exist").join("out");

    let result = Diagram::build(dot_config(&stem), |d| {
        d.node("A", Category::Generic);
        Ok(())
    });

    match result {
        Err(Error::Render(_)) => {}
        other => panic!("expected render error, got {other:?}"),
    }
    assert!(!stem.with_extension("dot").exists());
}

#[test]
fn to_dot_reflects_configuration() {
    let config = DiagramConfig::new("Pixel Streaming Backend")
        .with_attribute("bgcolor", "transparent");

    let mut diagram = Diagram::new(config);
    let a = diagram.node("Frontend", Category::Client);
    let b = diagram.node("API", Category::Compute);
    diagram.connect(a, b).unwrap();

    let dot = diagram.to_dot();
    assert!(dot.contains("label=\"Pixel Streaming Backend\";"));
    assert!(dot.contains("bgcolor=\"transparent\";"));
    assert!(dot.contains("\"Frontend\" -> \"API\";"));
}

// The raster formats need a Graphviz binary at runtime; exercise the png
// path only where one is installed.
#[cfg(feature = "graphviz")]
#[test]
fn png_rendering_with_installed_engine() {
    let have_dot = std::process::Command::new("dot")
        .arg("-V")
        .output()
        .is_ok();
    if !have_dot {
        eprintln!("skipping: no `dot` executable on PATH");
        return;
    }

    let dir = tempdir().unwrap();
    let config = DiagramConfig::new("png test")
        .with_filename(dir.path().join("out").to_str().unwrap())
        .with_format(OutputFormat::Png);

    let path = Diagram::build(config, |d| {
        let a = d.node("A", Category::Generic);
        let b = d.node("B", Category::Generic);
        d.connect(a, b)
    })
    .unwrap();

    let bytes = fs::read(path).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}
