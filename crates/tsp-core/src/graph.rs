use crate::{Cost, GraphError, Node, TourError};

/// Weighted graph over nodes `0..n` with an optional designated start.
///
/// The caller's weight function is evaluated once at construction into a flat
/// row-major table; every later lookup is an index.
#[derive(Clone, Debug)]
pub struct Graph {
    n: usize,
    start: Option<Node>,
    // Flattened n*n matrix for cache locality
    weights: Vec<Cost>,
}

impl Graph {
    /// Builds the table from `weight(u, v)`. Self-pairs are never queried.
    ///
    /// Negative or NaN finite weights are rejected; `Forbidden` marks a missing
    /// edge.
    pub fn from_fn<F>(n: usize, start: Option<Node>, mut weight: F) -> Result<Self, GraphError>
    where
        F: FnMut(Node, Node) -> Cost,
    {
        if let Some(s) = start {
            if s >= n {
                return Err(GraphError::StartOutOfRange { start: s, n });
            }
        }

        let mut weights = vec![Cost::Forbidden; n * n];
        for u in 0..n {
            for v in 0..n {
                if u == v {
                    continue;
                }
                let w = match weight(u, v) {
                    Cost::Finite(value) if value.is_nan() || value < 0.0 => {
                        return Err(GraphError::InvalidWeight { u, v, value });
                    }
                    Cost::Finite(value) => Cost::from_f64(value),
                    Cost::Forbidden => Cost::Forbidden,
                };
                weights[u * n + v] = w;
            }
        }

        Ok(Graph { n, start, weights })
    }

    /// `rows[u][v]` is the weight of `u -> v`, `None` for a missing edge.
    pub fn from_matrix(rows: &[Vec<Option<f64>>], start: Option<Node>) -> Result<Self, GraphError> {
        let n = rows.len();
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n {
                return Err(GraphError::NotSquare { row, len: r.len(), n });
            }
        }
        Graph::from_fn(n, start, |u, v| match rows[u][v] {
            Some(w) if w.is_infinite() => Cost::Forbidden,
            Some(w) => Cost::Finite(w),
            None => Cost::Forbidden,
        })
    }

    /// Complete graph with Euclidean costs.
    pub fn complete_euclidean(points: &[(f64, f64)], start: Option<Node>) -> Result<Self, GraphError> {
        Graph::from_fn(points.len(), start, |u, v| Cost::Finite(distance(points[u], points[v])))
    }

    /// Euclidean costs restricted to the listed undirected edges.
    pub fn euclidean_with_edges(
        points: &[(f64, f64)],
        edges: &[(Node, Node)],
        start: Option<Node>,
    ) -> Result<Self, GraphError> {
        let n = points.len();
        let mut allowed = vec![false; n * n];
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(GraphError::EdgeOutOfRange { u, v, n });
            }
            allowed[u * n + v] = true;
            allowed[v * n + u] = true;
        }
        Graph::from_fn(n, start, |u, v| {
            if allowed[u * n + v] {
                Cost::Finite(distance(points[u], points[v]))
            } else {
                Cost::Forbidden
            }
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The designated start, if the graph carries one.
    #[inline]
    pub fn designated_start(&self) -> Option<Node> {
        self.start
    }

    /// Designated start, falling back to node 0.
    #[inline]
    pub fn start_node(&self) -> Node {
        self.start.unwrap_or(0)
    }

    #[inline(always)]
    pub fn weight(&self, u: Node, v: Node) -> Cost {
        debug_assert!(u < self.n && v < self.n, "weight({u}, {v}) outside 0..{}", self.n);
        self.weights[u * self.n + v]
    }

    /// Finite neighbours of `u`.
    pub fn reachable(&self, u: Node) -> impl Iterator<Item = (Node, f64)> + '_ {
        let row = &self.weights[u * self.n..(u + 1) * self.n];
        row.iter()
            .enumerate()
            .filter_map(|(v, c)| c.value().map(|w| (v, w)))
    }

    /// Length of a (partial or complete) tour.
    ///
    /// Fewer than two nodes cost nothing. A complete tour also pays the
    /// closing edge. The first forbidden edge ends the walk.
    pub fn tour_length(&self, tour: &[Node]) -> Cost {
        if tour.len() < 2 {
            return Cost::ZERO;
        }

        let mut total = 0.0;
        for pair in tour.windows(2) {
            match self.weight(pair[0], pair[1]) {
                Cost::Finite(w) => total += w,
                Cost::Forbidden => return Cost::Forbidden,
            }
        }

        if self.is_complete(tour) {
            match self.weight(tour[tour.len() - 1], tour[0]) {
                Cost::Finite(w) => total += w,
                Cost::Forbidden => return Cost::Forbidden,
            }
        }

        Cost::Finite(total)
    }

    #[inline]
    pub fn is_complete(&self, tour: &[Node]) -> bool {
        tour.len() == self.n
    }

    /// Whether the edge from the last node back to the first exists.
    pub fn closes(&self, tour: &[Node]) -> bool {
        match tour {
            [] => false,
            [_] => true,
            [first, .., last] => self.weight(*last, *first).is_finite(),
        }
    }

    /// Checks ids are in range, distinct and the length is plausible.
    pub fn validate_tour(&self, tour: &[Node]) -> Result<(), TourError> {
        let min = self.n.min(2);
        if tour.len() < min || tour.len() > self.n {
            return Err(TourError::BadLength { len: tour.len(), min, max: self.n });
        }

        let mut seen = vec![false; self.n];
        for &node in tour {
            if node >= self.n {
                return Err(TourError::NodeOutOfRange { node, n: self.n });
            }
            if seen[node] {
                return Err(TourError::Repeated(node));
            }
            seen[node] = true;
        }
        Ok(())
    }
}

#[inline(always)]
fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}
