use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaParams {
    /// Individuals per generation
    pub pop: usize,
    /// Generation budget
    pub gens: usize,
    /// Probability of mutating each new child
    pub pmut: f64,
    /// Random draws per parent selection
    pub tournament: usize,
    /// Share of the sorted population copied unchanged (at least two)
    pub elite_fraction: f64,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            pop: 50,
            gens: 60,
            pmut: 0.25,
            tournament: 6,
            elite_fraction: 0.12,
        }
    }
}

impl GaParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pop(mut self, pop: usize) -> Self {
        self.pop = pop;
        self
    }

    #[must_use]
    pub fn with_gens(mut self, gens: usize) -> Self {
        self.gens = gens;
        self
    }

    #[must_use]
    pub fn with_pmut(mut self, pmut: f64) -> Self {
        self.pmut = pmut;
        self
    }

    #[must_use]
    pub fn with_tournament(mut self, tournament: usize) -> Self {
        self.tournament = tournament;
        self
    }

    /// Number of elites kept for a population of `self.pop`.
    pub fn elite_count(&self) -> usize {
        let share = (self.pop as f64 * self.elite_fraction).floor() as usize;
        share.max(2).min(self.pop)
    }
}
