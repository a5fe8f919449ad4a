use tsp_core::{Cost, Graph, Node, Tour};

const NO_PARENT: u32 = u32::MAX;

/// Optimal tour by subset dynamic programming, O(N²·2ᴺ) time.
///
/// States are indexed by a bitmask over the non-start nodes and the node the
/// partial path ends on. `None` when no Hamiltonian cycle exists.
pub fn held_karp(graph: &Graph) -> Option<Tour> {
    let n = graph.len();
    if n == 0 {
        return None;
    }
    let start = graph.start_node();
    if n == 1 {
        return Some(vec![start]);
    }

    let others: Vec<Node> = (0..n).filter(|&v| v != start).collect();
    let m = others.len();
    let Some(states) = 1usize.checked_shl(m as u32).filter(|s| s.checked_mul(m).is_some()) else {
        log::error!("held-karp: {n} nodes do not fit a bitmask state space");
        return None;
    };
    let full_mask = states - 1;

    // Flattened [mask][end] tables. INFINITY marks a state no path reaches.
    let mut dp = vec![f64::INFINITY; states * m];
    let mut parent = vec![NO_PARENT; states * m];

    for (j, &v) in others.iter().enumerate() {
        if let Cost::Finite(w) = graph.weight(start, v) {
            dp[(1 << j) * m + j] = w;
        }
    }

    for mask in 1..states {
        for (j, &to) in others.iter().enumerate() {
            let jbit = 1 << j;
            if mask & jbit == 0 {
                continue;
            }
            let prev_mask = mask ^ jbit;
            if prev_mask == 0 {
                continue;
            }

            let mut best = f64::INFINITY;
            let mut best_k = NO_PARENT;
            for (k, &from) in others.iter().enumerate() {
                if prev_mask & (1 << k) == 0 {
                    continue;
                }
                let base = dp[prev_mask * m + k];
                if !base.is_finite() {
                    continue;
                }
                let Cost::Finite(w) = graph.weight(from, to) else {
                    continue;
                };
                if base + w < best {
                    best = base + w;
                    best_k = k as u32;
                }
            }
            dp[mask * m + j] = best;
            parent[mask * m + j] = best_k;
        }
    }

    let mut best = f64::INFINITY;
    let mut last = None;
    for (j, &v) in others.iter().enumerate() {
        let base = dp[full_mask * m + j];
        if !base.is_finite() {
            continue;
        }
        if let Cost::Finite(w) = graph.weight(v, start) {
            if base + w < best {
                best = base + w;
                last = Some(j);
            }
        }
    }
    let mut cur = last?;

    let mut tour = Vec::with_capacity(n);
    let mut mask = full_mask;
    loop {
        tour.push(others[cur]);
        let p = parent[mask * m + cur];
        mask ^= 1 << cur;
        if p == NO_PARENT {
            break;
        }
        cur = p as usize;
    }
    tour.push(start);
    tour.reverse();

    log::debug!("held-karp: optimal length {best:.3} over {n} nodes");
    Some(tour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_perimeter() {
        let pts = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let g = Graph::complete_euclidean(&pts, Some(0)).unwrap();
        let t = held_karp(&g).expect("tour");

        assert_eq!(t.len(), 4);
        assert_eq!(t[0], 0);
        assert!((g.tour_length(&t).as_f64() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn designated_start_leads() {
        let pts = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 2.0)];
        let g = Graph::complete_euclidean(&pts, Some(3)).unwrap();
        let t = held_karp(&g).expect("tour");
        assert_eq!(t[0], 3);
        assert!(g.validate_tour(&t).is_ok());
        assert!(g.is_complete(&t));
    }

    #[test]
    fn two_nodes() {
        let g = Graph::complete_euclidean(&[(0.0, 0.0), (3.0, 4.0)], None).unwrap();
        let t = held_karp(&g).expect("tour");
        assert_eq!(t, vec![0, 1]);
        assert_eq!(g.tour_length(&t), Cost::Finite(10.0));
    }

    #[test]
    fn trivial_sizes() {
        let g = Graph::complete_euclidean(&[], None).unwrap();
        assert_eq!(held_karp(&g), None);
        let g = Graph::complete_euclidean(&[(1.0, 1.0)], None).unwrap();
        assert_eq!(held_karp(&g), Some(vec![0]));
    }

    #[test]
    fn follows_the_only_cycle() {
        // ring 0-2-4-1-3-0 on otherwise missing edges
        let pts = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)];
        let ring = [(0, 2), (2, 4), (4, 1), (1, 3), (3, 0)];
        let g = Graph::euclidean_with_edges(&pts, &ring, Some(0)).unwrap();
        let t = held_karp(&g).expect("tour");
        assert!(t == vec![0, 2, 4, 1, 3] || t == vec![0, 3, 1, 4, 2], "got {t:?}");
    }

    #[test]
    fn open_path_has_no_cycle() {
        let pts = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)];
        let g = Graph::euclidean_with_edges(&pts, &[(0, 1), (1, 2), (2, 3)], Some(0)).unwrap();
        assert_eq!(held_karp(&g), None);
    }
}
