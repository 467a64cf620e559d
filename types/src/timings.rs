//! Choreography timing constants.

use std::time::Duration;

/// Every duration the transition choreography uses.
///
/// The defaults are fixed rather than user-tunable (config may override
/// a handful); the whole set collapses to zero under reduced motion so
/// transitions commit immediately on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Splash screen dwell before the menu appears.
    pub loading_delay: Duration,
    /// Outer envelope of a menu/section transition; the commit step
    /// fires when it elapses (covers stagger completion).
    pub transition_duration: Duration,
    /// Per-item start delay multiplier for the menu exit stagger.
    pub animation_stagger: Duration,
    /// Per-item start delay multiplier for the menu re-entry stagger.
    pub menu_fade_delay: Duration,
    /// One menu item's exit fade.
    pub item_exit: Duration,
    /// Header/footer fade-out.
    pub chrome_fade: Duration,
    /// Header/footer fade-in on menu reveal.
    pub chrome_enter: Duration,
    /// Active section's fade-out on back navigation.
    pub section_fade: Duration,
    /// One menu item's re-entry fade.
    pub menu_item_enter: Duration,
    /// Pause between restoring the menu to layout and starting its
    /// reveal.
    pub menu_reveal_pause: Duration,
    /// From reveal start until overrides are stripped and the machine
    /// unlocks.
    pub menu_settle: Duration,
    /// Extra delay before the landing section's counters start.
    pub stats_delay: Duration,
    /// Per-counter start delay multiplier.
    pub counter_stagger: Duration,
    /// Counter increment interval.
    pub counter_tick: Duration,
    /// Gallery item entrance after a filter change or reveal.
    pub tab_fade: Duration,
    /// Eased scroll-to-anchor tween.
    pub scroll_tween: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading_delay: Duration::from_millis(1000),
            transition_duration: Duration::from_millis(550),
            animation_stagger: Duration::from_millis(50),
            menu_fade_delay: Duration::from_millis(80),
            item_exit: Duration::from_millis(400),
            chrome_fade: Duration::from_millis(400),
            chrome_enter: Duration::from_millis(500),
            section_fade: Duration::from_millis(500),
            menu_item_enter: Duration::from_millis(500),
            menu_reveal_pause: Duration::from_millis(150),
            menu_settle: Duration::from_millis(600),
            stats_delay: Duration::from_millis(500),
            counter_stagger: Duration::from_millis(200),
            counter_tick: Duration::from_millis(30),
            tab_fade: Duration::from_millis(400),
            scroll_tween: Duration::from_millis(600),
        }
    }
}

impl Timings {
    /// All-zero timings for reduced motion.
    #[must_use]
    pub fn zeroed() -> Self {
        Self {
            loading_delay: Duration::ZERO,
            transition_duration: Duration::ZERO,
            animation_stagger: Duration::ZERO,
            menu_fade_delay: Duration::ZERO,
            item_exit: Duration::ZERO,
            chrome_fade: Duration::ZERO,
            chrome_enter: Duration::ZERO,
            section_fade: Duration::ZERO,
            menu_item_enter: Duration::ZERO,
            menu_reveal_pause: Duration::ZERO,
            menu_settle: Duration::ZERO,
            stats_delay: Duration::ZERO,
            counter_stagger: Duration::ZERO,
            counter_tick: Duration::ZERO,
            tab_fade: Duration::ZERO,
            scroll_tween: Duration::ZERO,
        }
    }
}
