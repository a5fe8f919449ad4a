use crate::{Cost, Tour};
use serde::{Deserialize, Serialize};

/// Externally visible state of a resumable solver after a step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepperSnapshot {
    pub done: bool,
    /// Completed iterations or generations.
    pub progress: usize,
    pub best_tour: Option<Tour>,
    pub best_len: Cost,
}

impl StepperSnapshot {
    pub fn empty(done: bool) -> Self {
        StepperSnapshot {
            done,
            progress: 0,
            best_tour: None,
            best_len: Cost::Forbidden,
        }
    }
}

/// A search that advances one bounded unit of work per call.
///
/// All mutable search state lives inside the implementor. Once the budget is
/// spent, `step` does nothing and reports `done`.
pub trait Stepper {
    fn step(&mut self) -> StepperSnapshot;

    /// Current state without advancing.
    fn snapshot(&self) -> StepperSnapshot;
}

/// Calls `step` until the stepper reports `done` or `max_ticks` calls were
/// made, handing every snapshot to `on_frame`.
pub fn drive<S, F>(stepper: &mut S, max_ticks: usize, mut on_frame: F) -> StepperSnapshot
where
    S: Stepper + ?Sized,
    F: FnMut(&StepperSnapshot),
{
    let mut last = stepper.snapshot();
    for _ in 0..max_ticks {
        last = stepper.step();
        on_frame(&last);
        if last.done {
            break;
        }
    }
    log::debug!(
        "driver stopped at progress {} (done: {}, best: {})",
        last.progress,
        last.done,
        last.best_len
    );
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown {
        iter: usize,
        budget: usize,
    }

    impl Stepper for Countdown {
        fn step(&mut self) -> StepperSnapshot {
            if self.iter >= self.budget {
                return StepperSnapshot { done: true, ..self.snapshot() };
            }
            self.iter += 1;
            self.snapshot()
        }

        fn snapshot(&self) -> StepperSnapshot {
            StepperSnapshot {
                done: false,
                progress: self.iter,
                best_tour: Some(vec![0, 1]),
                best_len: Cost::Finite(10.0 / self.iter.max(1) as f64),
            }
        }
    }

    #[test]
    fn drive_stops_on_done() {
        let mut s = Countdown { iter: 0, budget: 3 };
        let mut frames = Vec::new();
        let last = drive(&mut s, 100, |snap| frames.push(snap.progress));

        assert!(last.done);
        assert_eq!(last.progress, 3);
        // three working calls and one terminal call
        assert_eq!(frames, vec![1, 2, 3, 3]);
    }

    #[test]
    fn drive_respects_tick_limit() {
        let mut s = Countdown { iter: 0, budget: 10 };
        let last = drive(&mut s, 4, |_| {});
        assert!(!last.done);
        assert_eq!(last.progress, 4);

        // resumable: the driver can pick up where it stopped
        let last = drive(&mut s, 100, |_| {});
        assert!(last.done);
        assert_eq!(last.progress, 10);
    }

    #[test]
    fn zero_ticks_reports_current_state() {
        let mut s = Countdown { iter: 2, budget: 10 };
        let last = drive(&mut s, 0, |_| panic!("no frames expected"));
        assert_eq!(last.progress, 2);
    }
}
