use tsp_core::{Cost, Graph, Tour};

/// Exhaustive search over every ordering of the non-start nodes.
///
/// With `prune` unset every permutation is materialised and measured. With it
/// set, a prefix whose cost already reaches the best complete tour is
/// abandoned; both settings return the same tour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BruteForce {
    pub prune: bool,
}

/// Unpruned brute force from the graph's start node.
pub fn brute_force(graph: &Graph) -> Option<Tour> {
    BruteForce::default().solve(graph)
}

struct SearchContext<'a> {
    graph: &'a Graph,
    prune: bool,
    // start fixed at index 0, positions 1.. permuted in place
    path: Tour,
    best_len: Cost,
    best_tour: Option<Tour>,
    visited: u64,
}

impl BruteForce {
    #[must_use]
    pub fn pruned() -> Self {
        BruteForce { prune: true }
    }

    pub fn solve(&self, graph: &Graph) -> Option<Tour> {
        let n = graph.len();
        if n == 0 {
            return None;
        }
        let start = graph.start_node();

        let mut path = Vec::with_capacity(n);
        path.push(start);
        path.extend((0..n).filter(|&v| v != start));

        let mut ctx = SearchContext {
            graph,
            prune: self.prune,
            path,
            best_len: Cost::Forbidden,
            best_tour: None,
            visited: 0,
        };
        permute(&mut ctx, 1, Cost::ZERO);

        log::debug!(
            "brute force{}: {} complete orderings measured, best {}",
            if self.prune { " (pruned)" } else { "" },
            ctx.visited,
            ctx.best_len
        );
        ctx.best_tour
    }
}

fn permute(ctx: &mut SearchContext, depth: usize, prefix: Cost) {
    let n = ctx.path.len();
    if depth == n {
        ctx.visited += 1;
        if !ctx.graph.closes(&ctx.path) {
            return;
        }
        let len = ctx.graph.tour_length(&ctx.path);
        if len.is_finite() && len < ctx.best_len {
            ctx.best_len = len;
            ctx.best_tour = Some(ctx.path.clone());
        }
        return;
    }

    for i in depth..n {
        ctx.path.swap(depth, i);

        let extended = if ctx.prune {
            prefix + ctx.graph.weight(ctx.path[depth - 1], ctx.path[depth])
        } else {
            prefix
        };
        let keep = !ctx.prune || (extended.is_finite() && extended < ctx.best_len);
        if keep {
            permute(ctx, depth + 1, extended);
        }

        ctx.path.swap(depth, i);
    }
}
