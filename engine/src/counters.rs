//! Animated stat counters.
//!
//! Each counter climbs from zero in 40 fixed increments, clamping and
//! stopping exactly at its target. Restarting the bank replaces any
//! in-flight counter for the same stat, so a re-entry into the landing
//! section can never leave two animations racing on one element.

use std::time::Duration;

use vitrine_types::{Portfolio, Timings};

const COUNTER_STEPS: f32 = 40.0;

#[derive(Debug, Clone)]
struct Counter {
    /// (section index, stat index) this counter renders into.
    key: (usize, usize),
    target: u64,
    current: f32,
    increment: f32,
    /// Remaining stagger before the first increment.
    delay: Duration,
    /// Frame time accumulated toward the next increment.
    accumulator: Duration,
    done: bool,
}

impl Counter {
    fn advance(&mut self, mut delta: Duration, tick: Duration) {
        if self.done {
            return;
        }
        if !self.delay.is_zero() {
            if delta < self.delay {
                self.delay -= delta;
                return;
            }
            delta -= self.delay;
            self.delay = Duration::ZERO;
        }

        // A zero tick interval (reduced motion) completes immediately.
        if tick.is_zero() {
            self.current = self.target as f32;
            self.done = true;
            return;
        }

        self.accumulator += delta;
        while self.accumulator >= tick && !self.done {
            self.accumulator -= tick;
            self.current += self.increment;
            if self.current >= self.target as f32 {
                self.current = self.target as f32;
                self.done = true;
            }
        }
    }

    fn value(&self) -> u64 {
        self.current.floor() as u64
    }
}

/// All running counters, rebuilt on every (re)start.
#[derive(Debug, Clone, Default)]
pub struct CounterBank {
    counters: Vec<Counter>,
}

impl CounterBank {
    /// Start (or restart) a counter for every stat with a parseable
    /// target, staggered by flattened index. Stats without a parseable
    /// target are skipped. Replaces any in-flight counters.
    pub fn start(&mut self, content: &Portfolio, timings: &Timings) {
        self.counters.clear();
        let mut index: u32 = 0;
        for (section_idx, section) in content.sections.iter().enumerate() {
            for (stat_idx, stat) in section.stats.iter().enumerate() {
                let Some(target) = stat.parsed_target() else {
                    continue;
                };
                self.counters.push(Counter {
                    key: (section_idx, stat_idx),
                    target,
                    current: 0.0,
                    increment: target as f32 / COUNTER_STEPS,
                    delay: timings.counter_stagger * index,
                    accumulator: Duration::ZERO,
                    done: false,
                });
                index += 1;
            }
        }
    }

    pub fn advance(&mut self, delta: Duration, timings: &Timings) {
        for counter in &mut self.counters {
            counter.advance(delta, timings.counter_tick);
        }
    }

    /// Rendered value for a stat: zero until its counter starts moving,
    /// `None` when the stat never had a counter (unparseable target, or
    /// the bank was never started).
    #[must_use]
    pub fn value(&self, section_idx: usize, stat_idx: usize) -> Option<u64> {
        self.counters
            .iter()
            .find(|c| c.key == (section_idx, stat_idx))
            .map(Counter::value)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.counters.iter().any(|c| !c.done)
    }
}

#[cfg(test)]
mod tests {
    use super::{CounterBank, Duration};
    use vitrine_types::{Portfolio, Timings};

    fn content() -> Portfolio {
        toml::from_str(
            r#"
title = "t"

[[section]]
id = "introduction"
title = "Introduction"
landing = true

[[section.stat]]
label = "Projects"
target = "80"

[[section.stat]]
label = "Bad"
target = "many"
"#,
        )
        .expect("content should parse")
    }

    #[test]
    fn climbs_monotonically_and_stops_exactly_at_target() {
        let mut bank = CounterBank::default();
        let timings = Timings::default();
        bank.start(&content(), &timings);

        let mut previous = 0;
        for _ in 0..200 {
            bank.advance(Duration::from_millis(30), &timings);
            let value = bank.value(0, 0).expect("counter exists");
            assert!(value >= previous, "sequence must be non-decreasing");
            assert!(value <= 80, "value must never exceed the target");
            previous = value;
        }
        assert_eq!(previous, 80, "counter must end exactly at the target");
        assert!(!bank.is_running());
    }

    #[test]
    fn unparseable_target_is_skipped() {
        let mut bank = CounterBank::default();
        let timings = Timings::default();
        bank.start(&content(), &timings);
        assert!(bank.value(0, 1).is_none());
    }

    #[test]
    fn restart_cancels_in_flight_counter() {
        let mut bank = CounterBank::default();
        let timings = Timings::default();
        bank.start(&content(), &timings);
        bank.advance(Duration::from_millis(600), &timings);
        let midway = bank.value(0, 0).expect("counter exists");
        assert!(midway > 0);

        bank.start(&content(), &timings);
        assert_eq!(bank.value(0, 0), Some(0), "restart resets to zero");
    }

    #[test]
    fn stagger_delays_later_counters() {
        let mut bank = CounterBank::default();
        let timings = Timings::default();
        let mut content = content();
        content.sections[0].stats[1].target = "40".into();
        bank.start(&content, &timings);

        // Within the second counter's 200ms stagger window only the
        // first has moved.
        bank.advance(Duration::from_millis(150), &timings);
        assert!(bank.value(0, 0).expect("first counter") > 0);
        assert_eq!(bank.value(0, 1), Some(0));
    }

    #[test]
    fn zero_tick_completes_immediately() {
        let mut bank = CounterBank::default();
        let timings = Timings::zeroed();
        bank.start(&content(), &timings);
        bank.advance(Duration::ZERO, &timings);
        assert_eq!(bank.value(0, 0), Some(80));
    }
}
