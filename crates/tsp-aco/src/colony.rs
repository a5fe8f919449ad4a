use crate::AcoParams;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_core::{Cost, Graph, Node, Stepper, StepperSnapshot, Tour};

const PHEROMONE_FLOOR: f64 = 1e-12;
const DISTANCE_FLOOR: f64 = 1e-12;

/// Ant System over a graph with forbidden edges, one iteration per
/// [`Stepper::step`].
///
/// The colony owns its pheromone matrix and random source. The graph's dense
/// weight table doubles as the distance table.
pub struct AntColony<'g, R = Xoshiro256PlusPlus> {
    graph: &'g Graph,
    params: AcoParams,
    rng: R,
    n: usize,
    candidates: Vec<Vec<Node>>,
    // Flattened n*n, symmetric, never below PHEROMONE_FLOOR
    tau: Vec<f64>,
    // Scratch for roulette selection
    choices: Vec<(Node, f64)>,
    iter: usize,
    best_tour: Option<Tour>,
    best_len: Cost,
}

impl<'g> AntColony<'g, Xoshiro256PlusPlus> {
    pub fn with_seed(graph: &'g Graph, params: AcoParams, seed: u64) -> Self {
        Self::new(graph, params, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<'g, R: Rng> AntColony<'g, R> {
    pub fn new(graph: &'g Graph, params: AcoParams, rng: R) -> Self {
        let n = graph.len();

        let candidates = (0..n)
            .map(|u| {
                let mut list: Vec<(Node, f64)> = graph.reachable(u).collect();
                list.sort_by(|a, b| a.1.total_cmp(&b.1));
                list.truncate(params.candidate_k);
                list.into_iter().map(|(v, _)| v).collect()
            })
            .collect();

        let (sum, count) = (0..n)
            .flat_map(move |u| graph.reachable(u))
            .fold((0.0, 0usize), |(s, c), (_, w)| (s + w, c + 1));
        let mean = if count > 0 { sum / count as f64 } else { 0.0 };
        let tau0 = if mean > 0.0 { 1.0 / (n as f64 * mean) } else { 1.0 };

        log::debug!("ant colony: {n} nodes, tau0 = {tau0:.3e}, {params:?}");

        AntColony {
            graph,
            params,
            rng,
            n,
            candidates,
            tau: vec![tau0; n * n],
            choices: Vec::with_capacity(n),
            iter: 0,
            best_tour: None,
            best_len: Cost::Forbidden,
        }
    }

    pub fn params(&self) -> &AcoParams {
        &self.params
    }

    pub fn candidates(&self, u: Node) -> &[Node] {
        &self.candidates[u]
    }

    pub fn pheromone(&self, u: Node, v: Node) -> f64 {
        self.tau[u * self.n + v]
    }

    fn is_exhausted(&self) -> bool {
        self.n == 0 || self.iter >= self.params.iters
    }

    /// One ant's walk. `None` when it gets stuck or cannot close.
    fn construct(&mut self, start: Node) -> Option<Tour> {
        let mut visited = vec![false; self.n];
        let mut tour = Vec::with_capacity(self.n);
        tour.push(start);
        visited[start] = true;

        let mut u = start;
        for _ in 1..self.n {
            let v = self.pick(u, &visited)?;
            tour.push(v);
            visited[v] = true;
            u = v;
        }

        self.graph.closes(&tour).then_some(tour)
    }

    /// Roulette choice of the next node, candidates first, then every
    /// unvisited reachable node.
    fn pick(&mut self, u: Node, visited: &[bool]) -> Option<Node> {
        self.choices.clear();
        for &v in &self.candidates[u] {
            if !visited[v] {
                if let Some(p) = self.desirability(u, v) {
                    self.choices.push((v, p));
                }
            }
        }
        if self.choices.is_empty() {
            for (v, _) in visited.iter().enumerate().filter(|(_, seen)| !**seen) {
                if let Some(p) = self.desirability(u, v) {
                    self.choices.push((v, p));
                }
            }
        }
        let &(last, _) = self.choices.last()?;

        let sum: f64 = self.choices.iter().map(|&(_, p)| p).sum();
        let mut r = self.rng.gen::<f64>() * sum;
        for &(v, p) in &self.choices {
            r -= p;
            if r <= 0.0 {
                return Some(v);
            }
        }
        Some(last)
    }

    /// `tau^alpha * (1/d)^beta`, or `None` for a missing edge.
    fn desirability(&self, u: Node, v: Node) -> Option<f64> {
        let d = self.graph.weight(u, v).value()?;
        let eta = 1.0 / d.max(DISTANCE_FLOOR);
        let p = self.tau[u * self.n + v].powf(self.params.alpha) * eta.powf(self.params.beta);
        (p > 0.0 && p.is_finite()).then_some(p)
    }

    fn evaporate(&mut self) {
        let keep = 1.0 - self.params.rho;
        for t in &mut self.tau {
            *t = (*t * keep).max(PHEROMONE_FLOOR);
        }
    }

    fn deposit(&mut self, tour: &[Node], len: f64) {
        let amount = 1.0 / len.max(DISTANCE_FLOOR);
        for (&u, &v) in tour.iter().zip(tour.iter().cycle().skip(1)) {
            if self.graph.weight(u, v).is_finite() {
                self.tau[u * self.n + v] += amount;
                self.tau[v * self.n + u] += amount;
            }
        }
    }
}

impl<R: Rng> Stepper for AntColony<'_, R> {
    fn step(&mut self) -> StepperSnapshot {
        if self.is_exhausted() {
            return StepperSnapshot { done: true, ..self.snapshot() };
        }

        let mut tours = Vec::with_capacity(self.params.ants);
        for _ in 0..self.params.ants {
            let start = match self.graph.designated_start() {
                Some(s) => s,
                None => self.rng.gen_range(0..self.n),
            };
            let Some(tour) = self.construct(start) else {
                continue;
            };
            if let Cost::Finite(len) = self.graph.tour_length(&tour) {
                if Cost::Finite(len) < self.best_len {
                    self.best_len = Cost::Finite(len);
                    self.best_tour = Some(tour.clone());
                }
                tours.push((tour, len));
            }
        }

        self.evaporate();
        for (tour, len) in &tours {
            self.deposit(tour, *len);
        }

        self.iter += 1;
        log::trace!(
            "ant colony iteration {}: {} tours, best {}",
            self.iter,
            tours.len(),
            self.best_len
        );
        self.snapshot()
    }

    fn snapshot(&self) -> StepperSnapshot {
        StepperSnapshot {
            done: false,
            progress: self.iter,
            best_tour: self.best_tour.clone(),
            best_len: self.best_len,
        }
    }
}
