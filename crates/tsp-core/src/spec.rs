use crate::{Graph, GraphError, Node};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointSpec {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub u: Node,
    pub v: Node,
}

/// Serialisable graph description, the shape level files use.
///
/// Without an edge list (or with an empty one) the graph is complete and
/// Euclidean. With one, only the listed pairs exist, in both directions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<PointSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeSpec>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Node>,
}

impl GraphSpec {
    pub fn from_json(text: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn build(&self) -> Result<Graph, GraphError> {
        let points: Vec<(f64, f64)> = self.nodes.iter().map(|p| (p.x, p.y)).collect();
        match self.edges.as_deref() {
            Some(edges) if !edges.is_empty() => {
                let pairs: Vec<(Node, Node)> = edges.iter().map(|e| (e.u, e.v)).collect();
                Graph::euclidean_with_edges(&points, &pairs, self.start)
            }
            _ => Graph::complete_euclidean(&points, self.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cost;

    #[test]
    fn parses_level_shape() {
        let text = r#"{
            "nodes": [{"id": 0, "x": 0, "y": 0}, {"id": 1, "x": 3, "y": 0}, {"id": 2, "x": 3, "y": 4}],
            "edges": [{"u": 0, "v": 1}, {"u": 1, "v": 2}],
            "start": 1
        }"#;
        let spec = GraphSpec::from_json(text).expect("parse");
        let g = spec.build().expect("build");

        assert_eq!(g.len(), 3);
        assert_eq!(g.designated_start(), Some(1));
        assert_eq!(g.weight(2, 1), Cost::Finite(4.0));
        assert_eq!(g.weight(0, 2), Cost::Forbidden);
    }

    #[test]
    fn empty_edge_list_means_complete() {
        let text = r#"{"nodes": [{"x": 0, "y": 0}, {"x": 3, "y": 4}], "edges": []}"#;
        let g = GraphSpec::from_json(text).unwrap().build().unwrap();
        assert_eq!(g.weight(0, 1), Cost::Finite(5.0));
        assert_eq!(g.start_node(), 0);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(GraphSpec::from_json("{\"nodes\": 3}"), Err(GraphError::Json(_))));
    }
}
