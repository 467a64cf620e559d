//! Scroll state for the active section's body.

use std::time::Duration;

use vitrine_types::{AnimPhase, Easing, EffectTimer};

#[derive(Debug, Clone)]
struct ScrollTween {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

/// Scroll offset in rows, with an optional eased tween toward an anchor.
///
/// Manual scrolling cancels the tween; the nav highlighter recomputes
/// from the offset every frame either way.
#[derive(Debug, Clone, Default)]
pub struct ScrollView {
    offset: u16,
    max: u16,
    tween: Option<ScrollTween>,
}

impl ScrollView {
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Update the scrollable range from the rendered layout.
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
        self.tween = None;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.tween = None;
        let next = i32::from(self.offset) + delta;
        self.offset = next.clamp(0, i32::from(self.max)) as u16;
    }

    /// Begin an eased tween toward `target`, clamped to the valid range.
    pub fn tween_to(&mut self, target: u16, duration: Duration) {
        let target = target.min(self.max);
        self.tween = Some(ScrollTween {
            from: f32::from(self.offset),
            to: f32::from(target),
            timer: EffectTimer::new(duration),
        });
    }

    pub fn advance(&mut self, delta: Duration) {
        let Some(tween) = &mut self.tween else {
            return;
        };
        tween.timer.advance(delta);
        match tween.timer.phase() {
            AnimPhase::Pending => {}
            AnimPhase::Running { progress } => {
                let eased = Easing::EaseOut.apply(progress);
                let position = tween.from + (tween.to - tween.from) * eased;
                self.offset = position.round().clamp(0.0, f32::from(self.max)) as u16;
            }
            AnimPhase::Completed => {
                self.offset = tween.to.round() as u16;
                self.tween = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Duration, ScrollView};

    #[test]
    fn scroll_by_clamps_to_range() {
        let mut scroll = ScrollView::default();
        scroll.set_max(10);

        scroll.scroll_by(-5);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_by(25);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn tween_reaches_target_and_clears() {
        let mut scroll = ScrollView::default();
        scroll.set_max(40);
        scroll.tween_to(20, Duration::from_millis(100));

        scroll.advance(Duration::from_millis(50));
        let midway = scroll.offset();
        assert!(midway > 0 && midway <= 20);

        scroll.advance(Duration::from_millis(100));
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn manual_scroll_cancels_tween() {
        let mut scroll = ScrollView::default();
        scroll.set_max(40);
        scroll.tween_to(30, Duration::from_millis(100));
        scroll.scroll_by(1);

        scroll.advance(Duration::from_millis(200));
        assert_eq!(scroll.offset(), 1);
    }

    #[test]
    fn tween_target_clamped_to_max() {
        let mut scroll = ScrollView::default();
        scroll.set_max(5);
        scroll.tween_to(50, Duration::ZERO);
        scroll.advance(Duration::ZERO);
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn shrinking_max_pulls_offset_back() {
        let mut scroll = ScrollView::default();
        scroll.set_max(20);
        scroll.scroll_by(15);
        scroll.set_max(8);
        assert_eq!(scroll.offset(), 8);
    }
}
