//! Controller state machine for Vitrine.
//!
//! This crate owns every piece of mutable UI state and all transition
//! choreography, with no rendering dependencies. The render layer reads
//! [`ViewState`] each frame and reports layout facts back (anchor
//! bounds, scroll range, viewport hits); everything else flows through
//! the public operations below, driven by [`App::tick`].

use std::time::Duration;

use tracing::debug;

mod config;
mod content;
mod counters;
mod effects;
mod gallery;
mod nav;
mod scheduler;
mod scroll;
mod tabs;
mod view;

pub use config::{AppConfig, ConfigError, ContentConfig, MotionConfig, VitrineConfig};
pub use content::{ContentError, load_portfolio, parse_portfolio};
pub use counters::CounterBank;
pub use gallery::{FILTER_ALL, GalleryState};
pub use nav::{AnchorBounds, HOME_ANCHOR, NAV_LOOKAHEAD, NavState, active_anchor};
pub use scroll::ScrollView;
pub use tabs::TabState;
pub use view::{ChromeView, MenuItemView, ViewState};

// Re-export the domain types the render layer works with.
pub use vitrine_types::{
    Anchor, GalleryItem, ItemStyle, MenuItem, Portfolio, Section, Stat, TabPane, Timings, UiOptions,
};

use vitrine_types::Easing;

use crate::scheduler::{Scheduler, StepAction};

/// Where the navigation machine is.
///
/// The transition lock is the phase itself: inputs that must not
/// overlap a transition are ignored exactly while one of the
/// `Transitioning*` phases holds, so the lock cannot leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Splash screen before the menu first appears.
    Loading,
    Menu,
    /// Menu exit is running; the target section takes over when it
    /// commits.
    TransitioningOut { target: usize },
    Section { index: usize },
    /// Section exit and menu reveal are running.
    TransitioningIn,
}

/// The controller. One per process, constructed at startup.
#[derive(Debug)]
pub struct App {
    content: Portfolio,
    options: UiOptions,
    timings: Timings,
    phase: Phase,
    scheduler: Scheduler,
    view: ViewState,
    counters: CounterBank,
    tabs: TabState,
    galleries: Vec<GalleryState>,
    menu_cursor: usize,
    tick_count: u64,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(content: Portfolio, options: UiOptions, timings: Timings) -> Self {
        let timings = if options.reduced_motion {
            Timings::zeroed()
        } else {
            timings
        };
        let tabs = TabState::for_sections(&content.sections);
        let galleries = content
            .sections
            .iter()
            .map(|section| GalleryState::for_items(&section.gallery))
            .collect();
        let view = ViewState::new(content.menu.len());

        let mut app = Self {
            content,
            options,
            timings,
            phase: Phase::Loading,
            scheduler: Scheduler::default(),
            view,
            counters: CounterBank::default(),
            tabs,
            galleries,
            menu_cursor: 0,
            tick_count: 0,
            should_quit: false,
        };
        app.scheduler
            .schedule(app.timings.loading_delay, StepAction::DismissLoading);
        app
    }

    // ------------------------------------------------------------------
    // Frame driver
    // ------------------------------------------------------------------

    /// Advance every timer by the elapsed frame delta and apply the
    /// steps that came due. Steps started by a fired action begin on
    /// the next tick, never retroactively within this one.
    pub fn tick(&mut self, delta: Duration) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.view.advance(delta);
        for gallery in &mut self.galleries {
            gallery.advance(delta);
        }
        self.counters.advance(delta, &self.timings);
        for action in self.scheduler.tick(delta) {
            self.apply(action);
        }
        if self.view.active_section.is_some() {
            self.view.nav.recompute(self.view.scroll.offset());
        }
    }

    // ------------------------------------------------------------------
    // Public operations
    // ------------------------------------------------------------------

    /// Begin the menu-to-section transition. Dropped (not queued) while
    /// a transition runs; unknown ids are a silent no-op.
    pub fn show_section(&mut self, id: &str) {
        if self.is_transitioning() {
            debug!(id, "selection ignored mid-transition");
            return;
        }
        if !matches!(self.phase, Phase::Menu) {
            return;
        }
        let Some(target) = self.content.section_index(id) else {
            debug!(id, "selection targets an unknown section");
            return;
        };

        self.phase = Phase::TransitioningOut { target };

        // Pin every item to a neutral visible state first, dropping any
        // running entrance effect, so the exit below always reads as a
        // fresh transition instead of compounding a prior one.
        for item in &mut self.view.items {
            item.anim_mut().set(ItemStyle::NEUTRAL);
        }

        let stagger = self.timings.animation_stagger;
        let exit = self.timings.item_exit;
        for (index, item) in self.view.items.iter_mut().enumerate() {
            item.anim_mut()
                .animate_to(ItemStyle::EXIT_SUNK, stagger * index as u32, exit, Easing::EaseOut);
        }

        // Header and footer fade on their own clock, independent of the
        // item stagger.
        let chrome_fade = self.timings.chrome_fade;
        self.view.header.anim.set(ItemStyle::NEUTRAL);
        self.view
            .header
            .anim
            .animate_to(ItemStyle::TRANSPARENT, Duration::ZERO, chrome_fade, Easing::EaseOut);
        self.view.footer.anim.set(ItemStyle::NEUTRAL);
        self.view
            .footer
            .anim
            .animate_to(ItemStyle::TRANSPARENT, Duration::ZERO, chrome_fade, Easing::EaseOut);

        self.scheduler.schedule(
            self.timings.transition_duration,
            StepAction::CommitSection { target },
        );
    }

    /// Begin the section-to-menu transition. Dropped mid-transition;
    /// with no active section it performs no mutation and never locks.
    pub fn back_to_menu(&mut self) {
        if self.is_transitioning() {
            debug!("back ignored mid-transition");
            return;
        }
        if !matches!(self.phase, Phase::Section { .. }) {
            return;
        }

        self.phase = Phase::TransitioningIn;

        // Force-reset the entrance state so the fade starts from fully
        // opaque rather than composing with an in-flight animation.
        let fade = self.timings.section_fade;
        self.view.section.set(ItemStyle::NEUTRAL);
        self.view
            .section
            .animate_to(ItemStyle::LIFTED, Duration::ZERO, fade, Easing::EaseOut);
        self.view
            .section_header
            .animate_to(ItemStyle::TRANSPARENT, Duration::ZERO, fade, Easing::EaseOut);
        self.view
            .back_hint
            .animate_to(ItemStyle::TRANSPARENT, Duration::ZERO, fade, Easing::EaseOut);

        self.scheduler
            .schedule(self.timings.transition_duration, StepAction::CommitMenuReturn);
    }

    /// Move a tab group's active marker. Never consults the transition
    /// lock; unknown ids leave state unchanged.
    pub fn switch_tab(&mut self, section_id: &str, tab_id: &str) {
        let Some(index) = self.content.section_index(section_id) else {
            return;
        };
        self.tabs.switch(&self.content.sections, index, tab_id);
    }

    /// Filter the active section's gallery. `"all"` shows everything.
    pub fn filter_gallery(&mut self, category: &str) {
        let Some(index) = self.view.active_section else {
            return;
        };
        let section = &self.content.sections[index];
        if section.gallery.is_empty() {
            return;
        }
        if let Some(gallery) = self.galleries.get_mut(index) {
            gallery.apply_filter(category, &section.gallery, &self.timings);
        }
    }

    /// (Re)start every stat counter. Replaces in-flight counters rather
    /// than letting them race.
    pub fn animate_stats(&mut self) {
        self.counters.start(&self.content, &self.timings);
    }

    /// Select a menu tile by its grid position.
    pub fn select_menu_item(&mut self, index: usize) {
        let Some(item) = self.content.menu.get(index) else {
            return;
        };
        let target = item.target.clone();
        self.show_section(&target);
    }

    /// Move the menu cursor, clamped to the tile count.
    pub fn move_menu_cursor(&mut self, delta: i32) {
        if self.content.menu.is_empty() {
            return;
        }
        let last = self.content.menu.len() as i32 - 1;
        let next = (self.menu_cursor as i32 + delta).clamp(0, last);
        self.menu_cursor = next as usize;
    }

    #[must_use]
    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// Open the section under the menu cursor.
    pub fn activate_menu_cursor(&mut self) {
        self.select_menu_item(self.menu_cursor);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        if self.view.active_section.is_some() {
            self.view.scroll.scroll_by(delta);
        }
    }

    /// Eased scroll to a nav anchor. The home anchor (or an empty id)
    /// scrolls to the top.
    pub fn scroll_to_anchor(&mut self, id: &str) {
        if self.view.active_section.is_none() {
            return;
        }
        let target = if id.is_empty() || id == HOME_ANCHOR {
            0
        } else {
            match self.view.nav.anchor_bounds(id) {
                Some(bounds) => bounds.top.saturating_sub(self.view.nav.nav_height()),
                None => return,
            }
        };
        self.view.scroll.tween_to(target, self.timings.scroll_tween);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Layout feedback from the render layer
    // ------------------------------------------------------------------

    /// Report the active section's rendered layout: anchor row bounds,
    /// the nav strip height, and the scrollable range.
    pub fn update_section_layout(
        &mut self,
        bounds: Vec<AnchorBounds>,
        nav_height: u16,
        scroll_max: u16,
    ) {
        self.view.scroll.set_max(scroll_max);
        self.view.nav.set_layout(bounds, nav_height);
        self.view.nav.recompute(self.view.scroll.offset());
    }

    /// Report that a gallery card entered the viewport.
    pub fn gallery_item_in_viewport(&mut self, section_idx: usize, item_idx: usize) {
        if let Some(gallery) = self.galleries.get_mut(section_idx) {
            gallery.mark_in_viewport(item_idx, &self.timings);
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn content(&self) -> &Portfolio {
        &self.content
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self.phase,
            Phase::TransitioningOut { .. } | Phase::TransitioningIn
        )
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Frame counter for spinner animation.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn active_tab(&self, section_idx: usize) -> Option<&str> {
        self.tabs.active(section_idx)
    }

    #[must_use]
    pub fn gallery(&self, section_idx: usize) -> Option<&GalleryState> {
        self.galleries.get(section_idx)
    }

    /// Animated value for a stat, `None` while no counter exists for it.
    #[must_use]
    pub fn stat_value(&self, section_idx: usize, stat_idx: usize) -> Option<u64> {
        self.counters.value(section_idx, stat_idx)
    }

    #[must_use]
    pub fn counters_running(&self) -> bool {
        self.counters.is_running()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // ------------------------------------------------------------------
    // Step application
    // ------------------------------------------------------------------

    fn apply(&mut self, action: StepAction) {
        match action {
            StepAction::DismissLoading => self.dismiss_loading(),
            StepAction::CommitSection { target } => self.commit_section(target),
            StepAction::StartStats => self.animate_stats(),
            StepAction::CommitMenuReturn => self.commit_menu_return(),
            StepAction::RevealMenu => self.reveal_menu(),
            StepAction::SettleMenu => self.settle_menu(),
        }
    }

    fn dismiss_loading(&mut self) {
        self.view.loading_visible = false;
        self.view.menu_visible = true;
        self.phase = Phase::Menu;
        self.start_menu_reveal();
        self.scheduler
            .schedule(self.timings.menu_settle, StepAction::SettleMenu);
    }

    /// Menu exit finished: swap layouts and activate the target.
    fn commit_section(&mut self, target: usize) {
        self.view.menu_visible = false;
        self.view.header.set_in_layout(false);
        self.view.header.anim.set(ItemStyle::NEUTRAL);
        self.view.footer.set_in_layout(false);
        self.view.footer.anim.set(ItemStyle::NEUTRAL);
        for item in &mut self.view.items {
            item.strip_override();
            item.set_visible(false);
        }

        self.view.active_section = Some(target);
        // One entrance effect on the section block as a whole.
        self.view.section.set(ItemStyle {
            opacity: 0.0,
            offset_y: 1.0,
            scale: 1.0,
        });
        self.view.section.animate_to(
            ItemStyle::NEUTRAL,
            Duration::ZERO,
            self.timings.section_fade,
            Easing::EaseOut,
        );
        self.view.section_header.set(ItemStyle::NEUTRAL);
        self.view.back_hint.set(ItemStyle::NEUTRAL);
        self.view.scroll.reset();
        self.view.nav.clear();

        self.phase = Phase::Section { index: target };

        if self.content.sections[target].landing {
            self.scheduler
                .schedule(self.timings.stats_delay, StepAction::StartStats);
        }
    }

    /// Section fade finished: restore the menu in its pre-entry state.
    fn commit_menu_return(&mut self) {
        self.view.active_section = None;
        self.view.section.set(ItemStyle::NEUTRAL);
        self.view.section_header.set(ItemStyle::NEUTRAL);
        self.view.back_hint.set(ItemStyle::NEUTRAL);
        self.view.nav.clear();
        self.view.scroll.reset();

        self.view.menu_visible = true;
        self.view.header.set_in_layout(true);
        self.view.header.anim.set(ItemStyle {
            opacity: 0.0,
            offset_y: 1.0,
            scale: 1.0,
        });
        self.view.footer.set_in_layout(true);
        self.view.footer.anim.set(ItemStyle::TRANSPARENT);
        for item in &mut self.view.items {
            item.set_visible(false);
            item.anim_mut().set(ItemStyle::HIDDEN_BELOW);
        }

        self.scheduler
            .schedule(self.timings.menu_reveal_pause, StepAction::RevealMenu);
    }

    fn reveal_menu(&mut self) {
        self.start_menu_reveal();
        self.scheduler
            .schedule(self.timings.menu_settle, StepAction::SettleMenu);
    }

    /// Shared by the initial reveal and the return-from-section reveal:
    /// chrome fades in, items rise in with an overshoot stagger.
    fn start_menu_reveal(&mut self) {
        let enter = self.timings.chrome_enter;
        self.view.header.anim.set(ItemStyle {
            opacity: 0.0,
            offset_y: 1.0,
            scale: 1.0,
        });
        self.view
            .header
            .anim
            .animate_to(ItemStyle::NEUTRAL, Duration::ZERO, enter, Easing::EaseOut);
        self.view.footer.anim.set(ItemStyle::TRANSPARENT);
        self.view
            .footer
            .anim
            .animate_to(ItemStyle::NEUTRAL, Duration::ZERO, enter, Easing::EaseOut);

        let fade_delay = self.timings.menu_fade_delay;
        let item_enter = self.timings.menu_item_enter;
        for (index, item) in self.view.items.iter_mut().enumerate() {
            item.set_visible(false);
            let anim = item.anim_mut();
            anim.set(ItemStyle::HIDDEN_BELOW);
            anim.animate_to(
                ItemStyle::NEUTRAL,
                fade_delay * index as u32,
                item_enter,
                Easing::BackOut,
            );
        }
    }

    /// Strip overrides and unlock. A stale settle left over from the
    /// initial reveal is dropped if a menu exit has started since.
    fn settle_menu(&mut self) {
        match self.phase {
            Phase::TransitioningIn => {
                self.finish_menu_settle();
                self.phase = Phase::Menu;
            }
            Phase::Menu => self.finish_menu_settle(),
            _ => debug!("stale menu settle dropped"),
        }
    }

    fn finish_menu_settle(&mut self) {
        self.view.header.anim.set(ItemStyle::NEUTRAL);
        self.view.footer.anim.set(ItemStyle::NEUTRAL);
        for item in &mut self.view.items {
            item.strip_override();
            item.set_visible(true);
        }
    }
}
