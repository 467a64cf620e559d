//! Continuous style animation for a single element.

use std::time::Duration;

use vitrine_types::{AnimPhase, Easing, EffectTimer, ItemStyle};

/// An in-flight interpolation from one style to another.
#[derive(Debug, Clone)]
pub struct StyleEffect {
    from: ItemStyle,
    to: ItemStyle,
    easing: Easing,
    timer: EffectTimer,
}

/// An element's current style plus its running effect, if any.
///
/// Starting a new effect captures the element's current style as the
/// starting point, so a retargeted animation continues from wherever the
/// element visually is instead of snapping.
#[derive(Debug, Clone, Default)]
pub struct Animated {
    style: ItemStyle,
    effect: Option<StyleEffect>,
}

impl Animated {
    #[must_use]
    pub fn with_style(style: ItemStyle) -> Self {
        Self {
            style,
            effect: None,
        }
    }

    #[must_use]
    pub fn style(&self) -> ItemStyle {
        self.style
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.effect.is_some()
    }

    /// Drop any running effect and pin the style.
    pub fn set(&mut self, style: ItemStyle) {
        self.style = style;
        self.effect = None;
    }

    /// Begin animating from the current style toward `to`.
    pub fn animate_to(&mut self, to: ItemStyle, delay: Duration, duration: Duration, easing: Easing) {
        self.effect = Some(StyleEffect {
            from: self.style,
            to,
            easing,
            timer: EffectTimer::with_delay(delay, duration),
        });
    }

    pub fn advance(&mut self, delta: Duration) {
        let Some(effect) = &mut self.effect else {
            return;
        };
        effect.timer.advance(delta);
        match effect.timer.phase() {
            AnimPhase::Pending => {}
            AnimPhase::Running { progress } => {
                self.style = effect.from.lerp(effect.to, effect.easing.apply(progress));
            }
            AnimPhase::Completed => {
                self.style = effect.to;
                self.effect = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Animated, Duration, Easing, ItemStyle};

    #[test]
    fn advances_toward_target() {
        let mut anim = Animated::with_style(ItemStyle::NEUTRAL);
        anim.animate_to(
            ItemStyle::EXIT_SUNK,
            Duration::ZERO,
            Duration::from_millis(100),
            Easing::Linear,
        );

        anim.advance(Duration::from_millis(50));
        assert!(anim.style().opacity < 1.0);
        assert!(anim.is_animating());

        anim.advance(Duration::from_millis(100));
        assert_eq!(anim.style(), ItemStyle::EXIT_SUNK);
        assert!(!anim.is_animating());
    }

    #[test]
    fn delayed_effect_holds_initial_style() {
        let mut anim = Animated::with_style(ItemStyle::NEUTRAL);
        anim.animate_to(
            ItemStyle::EXIT_SUNK,
            Duration::from_millis(100),
            Duration::from_millis(100),
            Easing::EaseOut,
        );

        anim.advance(Duration::from_millis(50));
        assert_eq!(anim.style(), ItemStyle::NEUTRAL);
        assert!(anim.is_animating());
    }

    #[test]
    fn set_cancels_running_effect() {
        let mut anim = Animated::with_style(ItemStyle::NEUTRAL);
        anim.animate_to(
            ItemStyle::EXIT_SUNK,
            Duration::ZERO,
            Duration::from_millis(100),
            Easing::EaseOut,
        );
        anim.advance(Duration::from_millis(50));

        anim.set(ItemStyle::NEUTRAL);
        assert!(!anim.is_animating());
        assert_eq!(anim.style(), ItemStyle::NEUTRAL);

        // Further ticks must not move the pinned style.
        anim.advance(Duration::from_millis(100));
        assert_eq!(anim.style(), ItemStyle::NEUTRAL);
    }

    #[test]
    fn retarget_starts_from_current_style() {
        let mut anim = Animated::with_style(ItemStyle::NEUTRAL);
        anim.animate_to(
            ItemStyle::EXIT_SUNK,
            Duration::ZERO,
            Duration::from_millis(100),
            Easing::Linear,
        );
        anim.advance(Duration::from_millis(50));
        let midway = anim.style();

        anim.animate_to(
            ItemStyle::NEUTRAL,
            Duration::ZERO,
            Duration::from_millis(100),
            Easing::Linear,
        );
        assert_eq!(anim.style(), midway);
    }
}
