use crate::SuiteError;
use serde::{Deserialize, Serialize};
use tsp_aco::AcoParams;
use tsp_ga::GaParams;
use tsp_heuristics::TwoOptParams;

/// Parameters for every solver plus the boundary policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    pub aco: AcoParams,
    pub ga: GaParams,
    pub two_opt: TwoOptParams,
    /// Seed for the stochastic solvers; drawn at random when absent.
    pub seed: Option<u64>,
    /// Run exact solvers past their size gate (with a warning).
    pub force: bool,
    pub held_karp_max_nodes: usize,
    pub brute_force_max_nodes: usize,
    pub brute_force_prune: bool,
    /// Cap on `step()` calls per stepper; the budget plus one by default.
    pub max_ticks: Option<usize>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            aco: AcoParams::default(),
            ga: GaParams::default(),
            two_opt: TwoOptParams::default().with_max_passes(6),
            seed: None,
            force: false,
            held_karp_max_nodes: 20,
            brute_force_max_nodes: 11,
            brute_force_prune: false,
            max_ticks: None,
        }
    }
}

impl SuiteConfig {
    pub fn from_json(text: &str) -> Result<Self, SuiteError> {
        Ok(serde_json::from_str(text)?)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_interactive_settings() {
        let c = SuiteConfig::default();
        assert_eq!(c.two_opt.max_passes, 6);
        assert_eq!(c.aco.ants, 30);
        assert_eq!(c.ga.pop, 50);
        assert_eq!((c.held_karp_max_nodes, c.brute_force_max_nodes), (20, 11));
        assert!(!c.force);
    }

    #[test]
    fn nested_overrides() {
        let c = SuiteConfig::from_json(r#"{"seed": 7, "aco": {"iters": 5}, "ga": {"gens": 3}}"#).unwrap();
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.aco.iters, 5);
        assert_eq!(c.aco.ants, 30);
        assert_eq!(c.ga.gens, 3);
        assert_eq!(c.two_opt.max_passes, 6);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(SuiteConfig::from_json(r#"{"seed": "x"}"#), Err(SuiteError::Json(_))));
    }
}
