use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::Add;

/// Weight of an edge or a tour.
///
/// `Forbidden` is its own case rather than `f64::INFINITY`, so a sum that
/// touches a missing edge stays `Forbidden` instead of relying on float rules.
/// Every finite cost orders below `Forbidden`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cost {
    Finite(f64),
    Forbidden,
}

impl Cost {
    pub const ZERO: Cost = Cost::Finite(0.0);

    /// Lifts a raw number, treating non-finite input as a missing edge.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Cost::Finite(value)
        } else {
            Cost::Forbidden
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Cost::Finite(_))
    }

    #[inline]
    pub fn value(&self) -> Option<f64> {
        match *self {
            Cost::Finite(v) => Some(v),
            Cost::Forbidden => None,
        }
    }

    /// Total order for sorting: finite costs by `f64::total_cmp`, then
    /// `Forbidden`.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.total_cmp(b),
            (Cost::Finite(_), Cost::Forbidden) => Ordering::Less,
            (Cost::Forbidden, Cost::Finite(_)) => Ordering::Greater,
            (Cost::Forbidden, Cost::Forbidden) => Ordering::Equal,
        }
    }

    /// `Forbidden` becomes `+inf`. Only for display and telemetry.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        self.value().unwrap_or(f64::INFINITY)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Cost::ZERO
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Cost::Finite(a), Cost::Finite(b)) => a.partial_cmp(b),
            _ => Some(self.total_cmp(other)),
        }
    }
}

impl Add for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Cost {
        match (self, rhs) {
            (Cost::Finite(a), Cost::Finite(b)) => Cost::Finite(a + b),
            _ => Cost::Forbidden,
        }
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cost::Finite(v) => write!(f, "{v:.1}"),
            Cost::Forbidden => f.write_str("n/a"),
        }
    }
}
