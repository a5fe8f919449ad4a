use serde::{Deserialize, Serialize};
use tsp_core::{Cost, Graph, Node, Tour};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoOptParams {
    /// Upper bound on full sweeps, reached or not a local optimum.
    pub max_passes: usize,
    /// A move must shorten the tour by more than this.
    pub tolerance: f64,
}

impl Default for TwoOptParams {
    fn default() -> Self {
        Self { max_passes: 4, tolerance: 1e-9 }
    }
}

impl TwoOptParams {
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}

/// First-improvement 2-opt over a complete seed tour.
///
/// Edge pairs `(t[i], t[i+1])`, `(t[j], t[j+1])` with `i + 2 <= j < n - 1` are
/// replaced by `(t[i], t[j])`, `(t[i+1], t[j+1])` whenever both new edges
/// exist and the tour gets shorter. The closing edge is never part of a move.
///
/// Returns `None` for a seed that is not a complete tour of `graph`, or when
/// the result cannot be closed.
pub fn two_opt(graph: &Graph, seed: &[Node], params: &TwoOptParams) -> Option<Tour> {
    let n = seed.len();
    if !graph.is_complete(seed) || graph.validate_tour(seed).is_err() {
        log::debug!("2-opt seed of {n} nodes is not a complete tour of {}", graph.len());
        return None;
    }

    let before = graph.tour_length(seed);
    let mut t = seed.to_vec();
    let mut pass = 0;
    let mut improved = true;

    while improved && pass < params.max_passes {
        pass += 1;
        improved = false;
        for i in 0..n.saturating_sub(3) {
            for j in (i + 2)..(n - 1) {
                let (a, b, c, d) = (t[i], t[i + 1], t[j], t[j + 1]);
                let removed = graph.weight(a, b) + graph.weight(c, d);
                let added = graph.weight(a, c) + graph.weight(b, d);
                if shortens(removed, added, params.tolerance) {
                    t[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    if !graph.closes(&t) {
        return None;
    }
    log::debug!(
        "2-opt: {} -> {} in {pass} passes",
        before,
        graph.tour_length(&t)
    );
    Some(t)
}

fn shortens(removed: Cost, added: Cost, tolerance: f64) -> bool {
    match (removed, added) {
        (_, Cost::Forbidden) => false,
        (Cost::Forbidden, Cost::Finite(_)) => true,
        (Cost::Finite(old), Cost::Finite(new)) => new - old < -tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0 and 2 share the bottom side, 1 and 3 sit on the top corners so the
    // seed [0, 1, 2, 3] draws an hourglass.
    fn hourglass() -> Graph {
        let pts = [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
        Graph::complete_euclidean(&pts, Some(0)).unwrap()
    }

    #[test]
    fn uncrosses_the_hourglass() {
        let g = hourglass();
        let seed = [0, 1, 2, 3];
        let out = two_opt(&g, &seed, &TwoOptParams::default()).expect("tour");

        assert_eq!(out, vec![0, 2, 1, 3]);
        assert!(g.tour_length(&out) < g.tour_length(&seed));
        assert_eq!(g.tour_length(&out), Cost::Finite(4.0));
    }

    #[test]
    fn local_optimum_is_kept() {
        let g = hourglass();
        let seed = [0, 2, 1, 3];
        assert_eq!(two_opt(&g, &seed, &TwoOptParams::default()), Some(seed.to_vec()));
    }

    #[test]
    fn zero_pass_budget_returns_seed() {
        let g = hourglass();
        let params = TwoOptParams::default().with_max_passes(0);
        assert_eq!(two_opt(&g, &[0, 1, 2, 3], &params), Some(vec![0, 1, 2, 3]));
    }

    #[test]
    fn rejects_incomplete_seed() {
        let g = hourglass();
        assert_eq!(two_opt(&g, &[0, 1, 2], &TwoOptParams::default()), None);
        assert_eq!(two_opt(&g, &[0, 1, 1, 3], &TwoOptParams::default()), None);
    }

    #[test]
    fn never_introduces_forbidden_edges() {
        // Same hourglass, but the uncrossing edge 0-2 is missing.
        let pts = [(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)];
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)];
        let g = Graph::euclidean_with_edges(&pts, &edges, Some(0)).unwrap();
        let out = two_opt(&g, &[0, 1, 2, 3], &TwoOptParams::default()).expect("tour");
        assert_eq!(out, vec![0, 1, 2, 3]);
    }

    #[test]
    fn replaces_forbidden_edge_when_possible() {
        let rows = vec![
            vec![None, None, Some(1.0), Some(1.0)],
            vec![None, None, Some(1.0), Some(1.0)],
            vec![Some(1.0), Some(1.0), None, None],
            vec![Some(1.0), Some(1.0), None, None],
        ];
        let g = Graph::from_matrix(&rows, Some(0)).unwrap();
        // 0-1 and 2-3 are missing; swapping to 0-2, 1-3 repairs it
        let out = two_opt(&g, &[0, 1, 2, 3], &TwoOptParams::default()).expect("tour");
        assert_eq!(out, vec![0, 2, 1, 3]);
        assert_eq!(g.tour_length(&out), Cost::Finite(4.0));
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let p: TwoOptParams = serde_json::from_str(r#"{"max_passes": 6}"#).unwrap();
        assert_eq!(p.max_passes, 6);
        assert!((p.tolerance - 1e-9).abs() < 1e-18);
    }
}
