//! UI options derived from config.

/// Rendering options (theme, motion, glyphs).
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and spinners.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Collapse all animation durations to zero.
    pub reduced_motion: bool,
}
