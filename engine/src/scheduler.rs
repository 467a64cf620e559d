//! Timed step scheduler.
//!
//! Every discrete transition milestone is a scheduled step; the
//! continuous part of each animation lives in per-element effect
//! timers. Replacing nested timer callbacks with this single primitive
//! is what makes the transition lock checkable: a chain's final step is
//! the only place the machine unlocks.

use std::time::Duration;

/// A discrete milestone in a transition chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepAction {
    /// Dismiss the splash and reveal the menu.
    DismissLoading,
    /// Menu exit finished: swap the menu out of layout and activate the
    /// target section.
    CommitSection { target: usize },
    /// Start the stat counters.
    StartStats,
    /// Section fade finished: clear the active section and restore the
    /// menu to layout in its pre-entry state.
    CommitMenuReturn,
    /// Begin the staggered menu reveal.
    RevealMenu,
    /// Strip overrides, mark items visible, unlock.
    SettleMenu,
}

#[derive(Debug)]
struct Step {
    remaining: Duration,
    seq: u64,
    action: StepAction,
}

/// Pending steps, fired by [`Scheduler::tick`] in order of remaining
/// delay, then insertion order.
#[derive(Debug, Default)]
pub(crate) struct Scheduler {
    steps: Vec<Step>,
    seq: u64,
}

impl Scheduler {
    pub(crate) fn schedule(&mut self, after: Duration, action: StepAction) {
        let seq = self.seq;
        self.seq += 1;
        self.steps.push(Step {
            remaining: after,
            seq,
            action,
        });
    }

    /// Advance by `delta` and return every step that came due.
    ///
    /// A large delta can pass several deadlines at once; the returned
    /// actions preserve their deadline order so a chain never commits
    /// out of sequence.
    pub(crate) fn tick(&mut self, delta: Duration) -> Vec<StepAction> {
        let mut due: Vec<(Duration, u64, StepAction)> = Vec::new();
        self.steps.retain_mut(|step| {
            if step.remaining <= delta {
                due.push((step.remaining, step.seq, step.action));
                false
            } else {
                step.remaining -= delta;
                true
            }
        });
        due.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
        due.into_iter().map(|(_, _, action)| action).collect()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Duration, Scheduler, StepAction};

    #[test]
    fn fires_in_deadline_order() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(Duration::from_millis(300), StepAction::SettleMenu);
        scheduler.schedule(Duration::from_millis(100), StepAction::CommitMenuReturn);
        scheduler.schedule(Duration::from_millis(200), StepAction::RevealMenu);

        let fired = scheduler.tick(Duration::from_millis(500));
        assert_eq!(
            fired,
            vec![
                StepAction::CommitMenuReturn,
                StepAction::RevealMenu,
                StepAction::SettleMenu,
            ]
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_insertion_order() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(Duration::from_millis(100), StepAction::RevealMenu);
        scheduler.schedule(Duration::from_millis(100), StepAction::StartStats);

        let fired = scheduler.tick(Duration::from_millis(100));
        assert_eq!(fired, vec![StepAction::RevealMenu, StepAction::StartStats]);
    }

    #[test]
    fn undue_steps_keep_their_remainder() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(Duration::from_millis(100), StepAction::DismissLoading);

        assert!(scheduler.tick(Duration::from_millis(60)).is_empty());
        assert_eq!(
            scheduler.tick(Duration::from_millis(40)),
            vec![StepAction::DismissLoading]
        );
    }

    #[test]
    fn zero_delay_fires_on_next_tick() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(Duration::ZERO, StepAction::DismissLoading);
        assert_eq!(
            scheduler.tick(Duration::ZERO),
            vec![StepAction::DismissLoading]
        );
    }
}
