use crate::{Algorithm, SuiteConfig, SuiteError};
use rand::Rng;
use serde::Serialize;
use tsp_aco::AntColony;
use tsp_core::{drive, Cost, Graph, Node, Stepper, Tour};
use tsp_exact::{held_karp, BruteForce};
use tsp_ga::Genetic;
use tsp_heuristics::{nearest_neighbor, two_opt};

/// Result of one solver on one graph. `tour` is `None` when infeasible.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Outcome {
    pub algorithm: Algorithm,
    pub tour: Option<Tour>,
    pub length: Cost,
    /// Iterations or generations performed, for the steppers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<usize>,
}

impl Outcome {
    fn from_tour(graph: &Graph, algorithm: Algorithm, tour: Option<Tour>) -> Self {
        let length = tour.as_deref().map_or(Cost::Forbidden, |t| graph.tour_length(t));
        Outcome { algorithm, tour, length, progress: None }
    }

    pub fn is_feasible(&self) -> bool {
        self.tour.is_some()
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SweepRow {
    pub algorithm: Algorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Length of a caller's own tour, scored next to the solvers.
///
/// A partial tour is a path: its length has no closing edge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UserScore {
    pub tour: Tour,
    pub complete: bool,
    pub length: Cost,
}

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub nodes: usize,
    pub start: Node,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub you: Option<UserScore>,
    pub rows: Vec<SweepRow>,
}

/// Scores a caller's tour, complete or partial. Nodes must be distinct and in range.
pub fn score_tour(graph: &Graph, tour: &[Node]) -> Result<UserScore, SuiteError> {
    graph.validate_tour(tour)?;
    Ok(UserScore {
        tour: tour.to_vec(),
        complete: graph.is_complete(tour) && graph.closes(tour),
        length: graph.tour_length(tour),
    })
}

/// Runs one solver under the configured policy.
///
/// `user_tour` only matters for 2-opt: a complete, closing tour supplied by
/// the caller is improved instead of a fresh nearest-neighbour tour.
pub fn run(
    graph: &Graph,
    algorithm: Algorithm,
    config: &SuiteConfig,
    user_tour: Option<&[Node]>,
) -> Result<Outcome, SuiteError> {
    check_size(graph, algorithm, config)?;

    let outcome = match algorithm {
        Algorithm::NearestNeighbor => Outcome::from_tour(graph, algorithm, nearest_neighbor(graph)),
        Algorithm::TwoOpt => {
            let seed = user_tour
                .filter(|t| graph.is_complete(t) && graph.validate_tour(t).is_ok() && graph.closes(t))
                .map(<[Node]>::to_vec)
                .or_else(|| nearest_neighbor(graph));
            let improved = seed.and_then(|s| two_opt(graph, &s, &config.two_opt));
            Outcome::from_tour(graph, algorithm, improved)
        }
        Algorithm::HeldKarp => Outcome::from_tour(graph, algorithm, held_karp(graph)),
        Algorithm::BruteForce => {
            let solver = BruteForce { prune: config.brute_force_prune };
            Outcome::from_tour(graph, algorithm, solver.solve(graph))
        }
        Algorithm::AntColony => {
            let mut stepper = AntColony::with_seed(graph, config.aco, seed_for(config));
            let ticks = config.max_ticks.unwrap_or(config.aco.iters + 1);
            finish(&mut stepper, algorithm, ticks)
        }
        Algorithm::Genetic => {
            let mut stepper = Genetic::with_seed(graph, config.ga, seed_for(config));
            let ticks = config.max_ticks.unwrap_or(config.ga.gens + 1);
            finish(&mut stepper, algorithm, ticks)
        }
    };

    if outcome.is_feasible() {
        log::info!("{algorithm}: length {}", outcome.length);
    } else {
        log::warn!("{algorithm}: no feasible tour on {} nodes", graph.len());
    }
    Ok(outcome)
}

/// Every algorithm in turn. Refusals are recorded, not propagated.
///
/// A `user_tour` is scored into [`Report::you`] and offered to 2-opt as its
/// seed. Only an invalid user tour fails the sweep.
pub fn sweep(
    graph: &Graph,
    config: &SuiteConfig,
    user_tour: Option<&[Node]>,
) -> Result<Report, SuiteError> {
    let you = user_tour.map(|t| score_tour(graph, t)).transpose()?;
    let rows = Algorithm::ALL
        .iter()
        .map(|&algorithm| match run(graph, algorithm, config, user_tour) {
            Ok(outcome) => SweepRow { algorithm, outcome: Some(outcome), error: None },
            Err(e) => SweepRow { algorithm, outcome: None, error: Some(e.to_string()) },
        })
        .collect();
    Ok(Report { nodes: graph.len(), start: graph.start_node(), you, rows })
}

fn check_size(graph: &Graph, algorithm: Algorithm, config: &SuiteConfig) -> Result<(), SuiteError> {
    let limit = match algorithm {
        Algorithm::HeldKarp => config.held_karp_max_nodes,
        Algorithm::BruteForce => config.brute_force_max_nodes,
        _ => return Ok(()),
    };
    let n = graph.len();
    if n <= limit {
        return Ok(());
    }
    if config.force {
        log::warn!("{algorithm} on {n} nodes (limit {limit}); this may not finish");
        return Ok(());
    }
    Err(SuiteError::TooLarge { algorithm, n, limit })
}

fn seed_for(config: &SuiteConfig) -> u64 {
    config.seed.unwrap_or_else(|| {
        let seed = rand::thread_rng().gen();
        log::debug!("no seed configured, using {seed}");
        seed
    })
}

fn finish<S: Stepper>(stepper: &mut S, algorithm: Algorithm, ticks: usize) -> Outcome {
    let last = drive(stepper, ticks, |snap| {
        log::trace!("{algorithm} progress {}: best {}", snap.progress, snap.best_len);
    });
    Outcome {
        algorithm,
        tour: last.best_tour,
        length: last.best_len,
        progress: Some(last.progress),
    }
}
