//! Animation timing primitives.
//!
//! Effects are advanced by the frame delta, never by wall-clock reads,
//! so choreography is deterministic under test.

use std::time::Duration;

fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Lifecycle of a delayed effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimPhase {
    /// Start delay has not elapsed yet.
    Pending,
    Running {
        progress: f32,
    },
    Completed,
}

/// Elapsed/duration timer with an optional start delay.
///
/// The delay is how per-item stagger is expressed: item `i` gets a timer
/// delayed by `i * stagger` and every timer is advanced by the same
/// frame delta.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    delay: Duration,
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self::with_delay(Duration::ZERO, duration)
    }

    #[must_use]
    pub fn with_delay(delay: Duration, duration: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    /// Progress through the active portion, clamped to `[0, 1]`.
    ///
    /// Zero until the start delay elapses; 1.0 immediately for a
    /// zero-duration timer whose delay has passed.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.elapsed < self.delay {
            return 0.0;
        }
        normalized_progress(self.elapsed - self.delay, self.duration)
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        if self.is_finished() {
            AnimPhase::Completed
        } else if self.elapsed < self.delay {
            AnimPhase::Pending
        } else {
            AnimPhase::Running {
                progress: self.progress(),
            }
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay.saturating_add(self.duration)
    }
}

/// Easing curves used by the transition choreography.
///
/// `BackOut` overshoots: its output transiently exceeds 1.0, so values
/// that cannot overshoot (opacity) must clamp after applying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Fast start, gentle settle. Used for exits.
    #[default]
    EaseOut,
    /// Overshoot-and-settle. Used for the menu re-entry.
    BackOut,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::BackOut => {
                const C1: f32 = 1.701_58;
                const C3: f32 = C1 + 1.0;
                let shifted = t - 1.0;
                1.0 + C3 * shifted * shifted * shifted + C1 * shifted * shifted
            }
        }
    }
}
