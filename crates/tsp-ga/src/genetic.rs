use crate::GaParams;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tsp_core::{Cost, Graph, Node, Stepper, StepperSnapshot, Tour};
use tsp_heuristics::nearest_neighbor_from;

// Random draws allowed per population slot before giving up on a fresh tour.
const DRAWS_PER_SLOT: usize = 64;

#[derive(Clone, Debug)]
struct Individual {
    tour: Tour,
    len: Cost,
}

/// Generational GA with the start node pinned at position 0.
///
/// Every member closes (its last node reaches the start); interior edges may
/// still be missing, which only makes that member's length `Forbidden`.
pub struct Genetic<'g, R = Xoshiro256PlusPlus> {
    graph: &'g Graph,
    params: GaParams,
    rng: R,
    // shuffle pool: start followed by the other nodes, nearest-neighbour order
    base: Tour,
    population: Vec<Individual>,
    gen: usize,
    best_tour: Option<Tour>,
    best_len: Cost,
}

impl<'g> Genetic<'g, Xoshiro256PlusPlus> {
    pub fn with_seed(graph: &'g Graph, params: GaParams, seed: u64) -> Self {
        Self::new(graph, params, Xoshiro256PlusPlus::seed_from_u64(seed))
    }
}

impl<'g, R: Rng> Genetic<'g, R> {
    pub fn new(graph: &'g Graph, params: GaParams, rng: R) -> Self {
        let n = graph.len();
        let start = graph.start_node();

        let mut ga = Genetic {
            graph,
            params,
            rng,
            base: Vec::new(),
            population: Vec::new(),
            gen: 0,
            best_tour: None,
            best_len: Cost::Forbidden,
        };
        if n < 3 || params.pop == 0 {
            return ga;
        }

        let seed = nearest_neighbor_from(graph, start).unwrap_or_else(|| (0..n).collect());
        ga.base.push(start);
        ga.base.extend(seed.into_iter().filter(|&v| v != start));

        let mut draws = draw_budget(params.pop);
        while ga.population.len() < params.pop && draws > 0 {
            draws -= 1;
            if let Some(tour) = ga.random_tour() {
                ga.push(tour);
            }
        }
        // pad with copies so the size stays fixed
        let found = ga.population.len();
        for i in 0..params.pop.saturating_sub(found) {
            if found == 0 {
                break;
            }
            let copy = ga.population[i % found].clone();
            ga.population.push(copy);
        }

        log::debug!(
            "genetic: {n} nodes, {found} distinct valid tours drawn for a population of {}",
            params.pop
        );
        ga
    }

    pub fn params(&self) -> &GaParams {
        &self.params
    }

    pub fn population(&self) -> impl Iterator<Item = &[Node]> {
        self.population.iter().map(|ind| ind.tour.as_slice())
    }

    fn is_exhausted(&self) -> bool {
        self.population.is_empty() || self.gen >= self.params.gens
    }

    fn push(&mut self, tour: Tour) {
        let len = self.graph.tour_length(&tour);
        self.population.push(Individual { tour, len });
    }

    /// Start followed by a shuffle of the pool; `None` if it cannot close.
    fn random_tour(&mut self) -> Option<Tour> {
        let mut tour = self.base.clone();
        tour[1..].shuffle(&mut self.rng);
        self.graph.closes(&tour).then_some(tour)
    }

    fn fresh_tour(&mut self) -> Option<Tour> {
        (0..DRAWS_PER_SLOT).find_map(|_| self.random_tour())
    }

    /// Best of `tournament` uniform draws, by length.
    fn select(&mut self) -> usize {
        let size = self.population.len();
        let mut best = self.rng.gen_range(0..size);
        for _ in 1..self.params.tournament {
            let cand = self.rng.gen_range(0..size);
            if self.population[cand].len < self.population[best].len {
                best = cand;
            }
        }
        best
    }

    /// With probability `pmut`, reverse a random segment after the start.
    /// A reversal that breaks the closing edge is undone.
    fn mutate(&mut self, tour: Tour) -> Tour {
        if self.rng.gen::<f64>() >= self.params.pmut {
            return tour;
        }
        let len = tour.len();
        let i = 1 + if len > 3 { self.rng.gen_range(0..len - 3) } else { 0 };
        let j = i + 1 + self.rng.gen_range(0..len - 1 - i);

        let mut child = tour.clone();
        child[i..j].reverse();
        if self.graph.closes(&child) {
            child
        } else {
            tour
        }
    }
}

fn draw_budget(pop: usize) -> usize {
    pop.saturating_mul(DRAWS_PER_SLOT)
}

/// Order crossover on the genes after the pinned start: a random slice of
/// `p1` stays in place, the remaining slots take `p2`'s genes in order.
///
/// Both parents must hold the same set of nodes.
pub fn order_crossover<R: Rng + ?Sized>(p1: &[Node], p2: &[Node], rng: &mut R) -> Tour {
    let (a, b) = (&p1[1..], &p2[1..]);
    let genes = a.len();
    if genes == 0 {
        return p1.to_vec();
    }

    let i = rng.gen_range(0..genes);
    let j = rng.gen_range(0..genes);
    let (lo, hi) = (i.min(j), i.max(j));

    let bound = p1.iter().copied().max().map_or(0, |m| m + 1);
    let mut used = vec![false; bound];
    let mut child: Vec<Option<Node>> = vec![None; genes];
    for (slot, &gene) in child[lo..=hi].iter_mut().zip(&a[lo..=hi]) {
        *slot = Some(gene);
        used[gene] = true;
    }

    let mut slot = 0;
    for &gene in b {
        if used[gene] {
            continue;
        }
        while child[slot].is_some() {
            slot += 1;
        }
        child[slot] = Some(gene);
        used[gene] = true;
    }

    let mut tour = Vec::with_capacity(p1.len());
    tour.push(p1[0]);
    tour.extend(child.into_iter().flatten());
    tour
}

impl<R: Rng> Stepper for Genetic<'_, R> {
    fn step(&mut self) -> StepperSnapshot {
        if self.is_exhausted() {
            return StepperSnapshot { done: true, ..self.snapshot() };
        }

        self.population.sort_by(|x, y| x.len.total_cmp(&y.len));
        let leader = &self.population[0];
        if leader.len.is_finite() && leader.len < self.best_len {
            self.best_len = leader.len;
            self.best_tour = Some(leader.tour.clone());
        }

        let size = self.population.len();
        let mut next: Vec<Individual> = self.population[..self.params.elite_count().min(size)].to_vec();
        while next.len() < size {
            let p1 = self.select();
            let p2 = self.select();
            let crossed = order_crossover(
                &self.population[p1].tour,
                &self.population[p2].tour,
                &mut self.rng,
            );
            let child = if self.graph.closes(&crossed) {
                crossed
            } else {
                match self.fresh_tour() {
                    Some(t) => t,
                    None => self.population[p1].tour.clone(),
                }
            };
            let child = self.mutate(child);
            let len = self.graph.tour_length(&child);
            next.push(Individual { tour: child, len });
        }
        self.population = next;
        self.gen += 1;

        log::trace!("genetic generation {}: best {}", self.gen, self.best_len);
        self.snapshot()
    }

    fn snapshot(&self) -> StepperSnapshot {
        StepperSnapshot {
            done: false,
            progress: self.gen,
            best_tour: self.best_tour.clone(),
            best_len: self.best_len,
        }
    }
}
