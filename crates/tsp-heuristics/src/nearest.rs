use tsp_core::{Graph, Node, Tour};

/// Greedy tour from the graph's start node.
pub fn nearest_neighbor(graph: &Graph) -> Option<Tour> {
    nearest_neighbor_from(graph, graph.start_node())
}

/// Greedy tour from `start`: always step to the closest unvisited node.
///
/// `None` when the walk gets stuck or the last node cannot return to `start`.
/// Ties go to the lowest node id.
pub fn nearest_neighbor_from(graph: &Graph, start: Node) -> Option<Tour> {
    let n = graph.len();
    if start >= n {
        return None;
    }

    let mut seen = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    seen[start] = true;

    for _ in 1..n {
        let u = tour[tour.len() - 1];
        // min_by keeps the first minimum, so ties go to the lowest id
        let (next, _) = seen
            .iter()
            .enumerate()
            .filter(|&(_, &done)| !done)
            .filter_map(|(v, _)| graph.weight(u, v).value().map(|w| (v, w)))
            .min_by(|a, b| a.1.total_cmp(&b.1))?;
        tour.push(next);
        seen[next] = true;
    }

    if !graph.closes(&tour) {
        return None;
    }
    log::debug!("nearest neighbour from {start}: {}", graph.tour_length(&tour));
    Some(tour)
}
