use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    NearestNeighbor,
    TwoOpt,
    HeldKarp,
    BruteForce,
    AntColony,
    Genetic,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::NearestNeighbor,
        Algorithm::TwoOpt,
        Algorithm::HeldKarp,
        Algorithm::BruteForce,
        Algorithm::AntColony,
        Algorithm::Genetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "nearest-neighbor",
            Self::TwoOpt => "two-opt",
            Self::HeldKarp => "held-karp",
            Self::BruteForce => "brute-force",
            Self::AntColony => "ant-colony",
            Self::Genetic => "genetic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nearest-neighbor" | "nn" | "greedy" => Some(Self::NearestNeighbor),
            "two-opt" | "2opt" | "2-opt" => Some(Self::TwoOpt),
            "held-karp" | "hk" => Some(Self::HeldKarp),
            "brute-force" | "bf" => Some(Self::BruteForce),
            "ant-colony" | "aco" | "ant" => Some(Self::AntColony),
            "genetic" | "ga" => Some(Self::Genetic),
            _ => None,
        }
    }

    /// Exact solvers are exponential and sit behind a size gate.
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::HeldKarp | Self::BruteForce)
    }

    pub fn is_stepper(&self) -> bool {
        matches!(self, Self::AntColony | Self::Genetic)
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(Algorithm::parse("HK"), Some(Algorithm::HeldKarp));
        assert_eq!(Algorithm::parse("2opt"), Some(Algorithm::TwoOpt));
        assert_eq!(Algorithm::parse("aco"), Some(Algorithm::AntColony));
        assert_eq!(Algorithm::parse("ga"), Some(Algorithm::Genetic));
        assert_eq!(Algorithm::parse("simplex"), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for a in Algorithm::ALL {
            assert_eq!(Algorithm::parse(a.as_str()), Some(a));
        }
    }

    #[test]
    fn serde_uses_kebab_names() {
        let s = serde_json::to_string(&Algorithm::BruteForce).unwrap();
        assert_eq!(s, "\"brute-force\"");
    }
}
