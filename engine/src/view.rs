//! View state for rendering.
//!
//! Everything the render layer reads lives here: element styles,
//! layout visibility, scroll, and the nav highlight. The choreography
//! in `App` mutates this state; the tui only reads it. That split keeps
//! the whole state machine testable without a terminal.

use std::time::Duration;

use vitrine_types::ItemStyle;

use crate::effects::Animated;
use crate::nav::NavState;
use crate::scroll::ScrollView;

/// One menu tile's visual state.
#[derive(Debug, Clone, Default)]
pub struct MenuItemView {
    anim: Animated,
    /// Persistent marker set once the reveal settles.
    visible: bool,
    /// True while the style carries a transition override rather than
    /// the stylesheet steady state.
    overridden: bool,
}

impl MenuItemView {
    #[must_use]
    pub fn style(&self) -> ItemStyle {
        self.anim.style()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_overridden(&self) -> bool {
        self.overridden
    }

    pub(crate) fn anim_mut(&mut self) -> &mut Animated {
        self.overridden = true;
        &mut self.anim
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Return control to the stylesheet steady state.
    pub(crate) fn strip_override(&mut self) {
        self.anim.set(ItemStyle::NEUTRAL);
        self.overridden = false;
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.anim.advance(delta);
    }
}

/// Header or footer: participates in layout only while `in_layout`.
#[derive(Debug, Clone)]
pub struct ChromeView {
    pub(crate) anim: Animated,
    in_layout: bool,
}

impl Default for ChromeView {
    fn default() -> Self {
        Self {
            anim: Animated::default(),
            in_layout: true,
        }
    }
}

impl ChromeView {
    #[must_use]
    pub fn style(&self) -> ItemStyle {
        self.anim.style()
    }

    #[must_use]
    pub fn in_layout(&self) -> bool {
        self.in_layout
    }

    pub(crate) fn set_in_layout(&mut self, in_layout: bool) {
        self.in_layout = in_layout;
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        self.anim.advance(delta);
    }
}

/// Complete render-facing state.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Splash overlay visibility.
    pub(crate) loading_visible: bool,
    /// Menu grid participates in layout.
    pub(crate) menu_visible: bool,
    pub(crate) header: ChromeView,
    pub(crate) footer: ChromeView,
    pub(crate) items: Vec<MenuItemView>,
    /// Index of the section carrying active status, if any.
    pub(crate) active_section: Option<usize>,
    /// The active section block's style.
    pub(crate) section: Animated,
    /// The active section's small header.
    pub(crate) section_header: Animated,
    /// The back hint line.
    pub(crate) back_hint: Animated,
    pub(crate) scroll: ScrollView,
    pub(crate) nav: NavState,
}

impl ViewState {
    pub(crate) fn new(item_count: usize) -> Self {
        Self {
            loading_visible: true,
            menu_visible: false,
            items: vec![MenuItemView::default(); item_count],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn loading_visible(&self) -> bool {
        self.loading_visible
    }

    #[must_use]
    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    #[must_use]
    pub fn header(&self) -> &ChromeView {
        &self.header
    }

    #[must_use]
    pub fn footer(&self) -> &ChromeView {
        &self.footer
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItemView] {
        &self.items
    }

    #[must_use]
    pub fn active_section(&self) -> Option<usize> {
        self.active_section
    }

    #[must_use]
    pub fn section_style(&self) -> ItemStyle {
        self.section.style()
    }

    #[must_use]
    pub fn section_header_style(&self) -> ItemStyle {
        self.section_header.style()
    }

    #[must_use]
    pub fn back_hint_style(&self) -> ItemStyle {
        self.back_hint.style()
    }

    #[must_use]
    pub fn scroll(&self) -> &ScrollView {
        &self.scroll
    }

    #[must_use]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub(crate) fn advance(&mut self, delta: Duration) {
        for item in &mut self.items {
            item.advance(delta);
        }
        self.header.advance(delta);
        self.footer.advance(delta);
        self.section.advance(delta);
        self.section_header.advance(delta);
        self.back_hint.advance(delta);
        self.scroll.advance(delta);
    }

    /// True when every element override has settled back to steady
    /// state.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.items.iter().any(MenuItemView::is_overridden)
            && !self.section.is_animating()
            && !self.header.anim.is_animating()
            && !self.footer.anim.is_animating()
    }
}
