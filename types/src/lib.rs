//! Core domain types for Vitrine.
//!
//! Pure data with no IO, no async, no ratatui dependency. Used by the
//! engine (state ownership) and the tui (rendering).

pub mod content;
mod motion;
mod options;
mod style;
mod timings;

pub use content::{Anchor, GalleryItem, MenuItem, Portfolio, Section, Stat, TabPane};
pub use motion::{AnimPhase, Easing, EffectTimer};
pub use options::UiOptions;
pub use style::ItemStyle;
pub use timings::Timings;
