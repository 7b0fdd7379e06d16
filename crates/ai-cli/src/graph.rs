use std::path::Path;

use ai_nav::{AStar, AdjacencyMatrix, PathFinder};
use anyhow::{ensure, Result};
use serde::Deserialize;

use crate::document;

/// One undirected edge as written in a graph file.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: i32,
}

fn default_weight() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphFile {
    pub edges: Vec<EdgeRecord>,
}

impl GraphFile {
    pub fn into_matrix(self) -> AdjacencyMatrix<String> {
        self.edges
            .into_iter()
            .map(|edge| (edge.from, edge.to, edge.weight))
            .collect()
    }
}

pub fn load(path: &Path) -> Result<AdjacencyMatrix<String>> {
    let file: GraphFile = document::load(path)?;
    Ok(file.into_matrix())
}

/// Shortest route from `from` to `to`, `from` excluded.
pub fn route(matrix: AdjacencyMatrix<String>, from: &str, to: &str) -> Result<Vec<String>> {
    ensure!(matrix.contains(&from.to_owned()), "unknown node {from:?}");
    ensure!(matrix.contains(&to.to_owned()), "unknown node {to:?}");

    let finder = PathFinder::new(AStar::new(matrix));
    Ok(finder.path(&from.to_owned(), &to.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Format;

    const TRIANGLE: &str = "
edges:
  - { from: a, to: b }
  - { from: b, to: c, weight: 1 }
  - { from: a, to: c, weight: 5 }
";

    fn triangle() -> AdjacencyMatrix<String> {
        Format::Yaml
            .parse::<GraphFile>(TRIANGLE)
            .unwrap()
            .into_matrix()
    }

    #[test]
    fn missing_weights_default_to_one() {
        let matrix = triangle();
        assert_eq!(matrix.edge_count(), 3);
        assert_eq!(matrix.heaviest_edge(), Some(5));
    }

    #[test]
    fn routes_prefer_the_cheaper_detour() {
        assert_eq!(route(triangle(), "a", "c").unwrap(), vec!["b", "c"]);
    }

    #[test]
    fn unknown_endpoints_are_reported() {
        let err = route(triangle(), "a", "z").unwrap_err();
        assert!(err.to_string().contains("\"z\""));
    }

    #[test]
    fn json_graphs_parse_too() {
        let json = r#"{"edges": [{"from": "x", "to": "y", "weight": 2}]}"#;
        let matrix = Format::Json.parse::<GraphFile>(json).unwrap().into_matrix();
        assert_eq!(route(matrix, "x", "y").unwrap(), vec!["y"]);
    }
}
