//! Scroll-linked navigation highlighting.
//!
//! The highlighter is recomputed from the scroll offset every frame and
//! once on section entry, never patched incrementally. Anchor bounds
//! arrive from the render layer, which knows where each heading landed
//! after wrapping.

/// Fixed lookahead margin: rows a heading may sit below the nav line
/// and still count as current.
pub const NAV_LOOKAHEAD: u16 = 2;

/// Anchor id reserved for the top-of-section special case.
pub const HOME_ANCHOR: &str = "home";

/// One anchor's half-open row bounds `[top, bottom)` in the rendered
/// section body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorBounds {
    pub id: String,
    pub top: u16,
    pub bottom: u16,
}

/// Highlighter state for the active section.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    bounds: Vec<AnchorBounds>,
    nav_height: u16,
    active: Option<String>,
}

impl NavState {
    /// Replace the layout-derived bounds. Called by the render layer
    /// whenever the section body is laid out.
    pub fn set_layout(&mut self, bounds: Vec<AnchorBounds>, nav_height: u16) {
        self.bounds = bounds;
        self.nav_height = nav_height;
    }

    #[must_use]
    pub fn bounds(&self) -> &[AnchorBounds] {
        &self.bounds
    }

    #[must_use]
    pub fn anchor_bounds(&self, id: &str) -> Option<&AnchorBounds> {
        self.bounds.iter().find(|anchor| anchor.id == id)
    }

    #[must_use]
    pub fn nav_height(&self) -> u16 {
        self.nav_height
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn clear(&mut self) {
        self.bounds.clear();
        self.active = None;
    }

    /// Recompute the single active anchor for the given scroll offset.
    pub fn recompute(&mut self, scroll_y: u16) {
        self.active =
            active_anchor(&self.bounds, scroll_y, self.nav_height, NAV_LOOKAHEAD).map(str::to_owned);
    }
}

/// The anchor whose bounds contain `scroll_y + nav_height + lookahead`.
///
/// A designated home anchor stays active for any position above its
/// lower bound minus the offset, so it holds the highlight before a
/// strict bounds match would. Without one, plain bounds scanning
/// applies. Bounds are assumed ordered and non-overlapping, so the
/// result is exactly one or zero anchors.
#[must_use]
pub fn active_anchor<'a>(
    anchors: &'a [AnchorBounds],
    scroll_y: u16,
    nav_height: u16,
    lookahead: u16,
) -> Option<&'a str> {
    if anchors.is_empty() {
        return None;
    }

    let offset = nav_height + lookahead;
    let probe = scroll_y + offset;

    if let Some(home) = anchors.iter().find(|anchor| anchor.id == HOME_ANCHOR)
        && scroll_y < home.bottom.saturating_sub(offset)
    {
        return Some(&home.id);
    }

    anchors
        .iter()
        .find(|anchor| probe >= anchor.top && probe < anchor.bottom)
        .map(|anchor| anchor.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::{AnchorBounds, NavState, active_anchor};

    fn bounds(raw: &[(&str, u16, u16)]) -> Vec<AnchorBounds> {
        raw.iter()
            .map(|(id, top, bottom)| AnchorBounds {
                id: (*id).to_string(),
                top: *top,
                bottom: *bottom,
            })
            .collect()
    }

    #[test]
    fn probe_inside_second_bounds_selects_it() {
        // home [0, 100), about [100, 300), probe = 200 + 48 + 2 = 250.
        let anchors = bounds(&[("home", 0, 100), ("about", 100, 300)]);
        assert_eq!(active_anchor(&anchors, 200, 48, 2), Some("about"));
    }

    #[test]
    fn home_holds_highlight_before_strict_bounds_match() {
        // Home starts at row 60, so a plain scan at the top (probe 50)
        // matches nothing; the special case keeps home active anyway.
        let anchors = bounds(&[("home", 60, 100), ("about", 100, 300)]);
        assert_eq!(active_anchor(&anchors, 0, 48, 2), Some("home"));
        // Past home's lower bound minus the offset, scanning takes over.
        assert_eq!(active_anchor(&anchors, 60, 48, 2), Some("about"));
    }

    #[test]
    fn plain_scan_without_home() {
        let anchors = bounds(&[("work", 0, 80), ("contact", 80, 200)]);
        assert_eq!(active_anchor(&anchors, 0, 10, 2), Some("work"));
        assert_eq!(active_anchor(&anchors, 100, 10, 2), Some("contact"));
    }

    #[test]
    fn probe_past_every_bound_highlights_nothing() {
        let anchors = bounds(&[("work", 0, 80)]);
        assert_eq!(active_anchor(&anchors, 500, 10, 2), None);
    }

    #[test]
    fn no_anchors_no_highlight() {
        assert_eq!(active_anchor(&[], 50, 10, 2), None);
    }

    #[test]
    fn recompute_yields_at_most_one() {
        let mut nav = NavState::default();
        nav.set_layout(bounds(&[("home", 0, 100), ("about", 100, 300)]), 48);
        nav.recompute(250);
        assert_eq!(nav.active(), Some("about"));

        nav.recompute(0);
        assert_eq!(nav.active(), Some("home"));

        nav.clear();
        assert_eq!(nav.active(), None);
    }
}
