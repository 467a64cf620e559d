//! Gallery filtering and entrance effects.

use std::time::Duration;

use vitrine_types::{EffectTimer, GalleryItem, Timings};

/// Matches every item.
pub const FILTER_ALL: &str = "all";

/// Per-section gallery state: the active filter, per-item visibility,
/// the reveal-on-scroll marker, and entrance timers.
#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    filter: String,
    visible: Vec<bool>,
    revealed: Vec<bool>,
    entrance: Vec<Option<EffectTimer>>,
}

impl GalleryState {
    #[must_use]
    pub fn for_items(items: &[GalleryItem]) -> Self {
        Self {
            filter: FILTER_ALL.to_string(),
            visible: vec![true; items.len()],
            revealed: vec![false; items.len()],
            entrance: vec![None; items.len()],
        }
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        if self.filter.is_empty() {
            FILTER_ALL
        } else {
            &self.filter
        }
    }

    #[must_use]
    pub fn is_visible(&self, idx: usize) -> bool {
        self.visible.get(idx).copied().unwrap_or(false)
    }

    /// Entrance opacity for an item: progress while the fade runs, 1.0
    /// once revealed and settled, 0.0 before the item first enters the
    /// viewport.
    #[must_use]
    pub fn entrance_progress(&self, idx: usize) -> f32 {
        match self.entrance.get(idx) {
            Some(Some(timer)) => timer.progress(),
            Some(None) if self.is_revealed(idx) => 1.0,
            _ => 0.0,
        }
    }

    /// Apply a category filter: `"all"` shows everything, otherwise only
    /// matching items stay visible, and every item that ends up visible
    /// gets its entrance animation re-triggered.
    pub fn apply_filter(&mut self, category: &str, items: &[GalleryItem], timings: &Timings) {
        self.filter = category.to_string();
        for (idx, item) in items.iter().enumerate() {
            let shown = category == FILTER_ALL || item.category == category;
            if idx >= self.visible.len() {
                break;
            }
            self.visible[idx] = shown;
            if shown {
                self.revealed[idx] = true;
                self.entrance[idx] = Some(EffectTimer::new(timings.tab_fade));
            }
        }
    }

    /// First time an item scrolls into the viewport it fades in; once
    /// revealed it stays revealed.
    pub fn mark_in_viewport(&mut self, idx: usize, timings: &Timings) {
        let Some(revealed) = self.revealed.get_mut(idx) else {
            return;
        };
        if *revealed {
            return;
        }
        *revealed = true;
        self.entrance[idx] = Some(EffectTimer::new(timings.tab_fade));
    }

    #[must_use]
    pub fn is_revealed(&self, idx: usize) -> bool {
        self.revealed.get(idx).copied().unwrap_or(false)
    }

    pub fn advance(&mut self, delta: Duration) {
        for slot in &mut self.entrance {
            if let Some(timer) = slot {
                timer.advance(delta);
                if timer.is_finished() {
                    *slot = None;
                }
            }
        }
    }
}
