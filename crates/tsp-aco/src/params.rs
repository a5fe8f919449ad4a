use serde::{Deserialize, Serialize};

/// Ant System settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoParams {
    /// Pheromone importance (α)
    pub alpha: f64,
    /// Heuristic importance (β)
    pub beta: f64,
    /// Evaporation rate (ρ)
    pub rho: f64,
    /// Ants per iteration
    pub ants: usize,
    /// Iteration budget
    pub iters: usize,
    /// Nearest reachable neighbours considered first
    pub candidate_k: usize,
}

impl Default for AcoParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 3.0,
            rho: 0.5,
            ants: 30,
            iters: 50,
            candidate_k: 6,
        }
    }
}

impl AcoParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    #[must_use]
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    #[must_use]
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    #[must_use]
    pub fn with_iters(mut self, iters: usize) -> Self {
        self.iters = iters;
        self
    }

    #[must_use]
    pub fn with_candidate_k(mut self, candidate_k: usize) -> Self {
        self.candidate_k = candidate_k;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = AcoParams::default();
        assert_eq!(p.ants, 30);
        assert_eq!(p.iters, 50);
        assert_eq!(p.candidate_k, 6);
        assert!((p.alpha - 1.0).abs() < 1e-10);
        assert!((p.beta - 3.0).abs() < 1e-10);
        assert!((p.rho - 0.5).abs() < 1e-10);
    }

    #[test]
    fn builder() {
        let p = AcoParams::new().with_ants(5).with_iters(7).with_rho(0.1).with_candidate_k(2);
        assert_eq!((p.ants, p.iters, p.candidate_k), (5, 7, 2));
        assert!((p.rho - 0.1).abs() < 1e-10);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let p: AcoParams = serde_json::from_str(r#"{"ants": 12, "beta": 2.5}"#).unwrap();
        assert_eq!(p.ants, 12);
        assert!((p.beta - 2.5).abs() < 1e-10);
        assert_eq!(p.iters, 50);
    }
}
