//! Applying animated style values to rects and colors.
//!
//! Opacity becomes a blend of the foreground toward the background,
//! vertical offset shifts the draw rect by whole rows, and scale
//! shrinks the rect around its center. Together these are the terminal
//! rendition of the inline style overrides the engine animates.

use ratatui::layout::Rect;
use ratatui::style::Color;

use vitrine_types::ItemStyle;

/// Below this opacity an element is not drawn at all.
const VISIBILITY_FLOOR: f32 = 0.05;

#[must_use]
pub fn is_visible(style: ItemStyle) -> bool {
    style.opacity > VISIBILITY_FLOOR
}

/// Transform `base` by the style's offset and scale, clamped to the
/// viewport. Returns `None` when the element leaves the viewport
/// entirely.
#[must_use]
pub fn styled_rect(style: ItemStyle, base: Rect, viewport: Rect) -> Option<Rect> {
    let scaled = scale_rect(base, style.scale);
    let offset = style.offset_y.round() as i32;
    let y = i32::from(scaled.y) + offset;

    let viewport_top = i32::from(viewport.y);
    let viewport_bottom = i32::from(viewport.y) + i32::from(viewport.height);
    if y >= viewport_bottom || y + i32::from(scaled.height) <= viewport_top {
        return None;
    }

    let y = y.clamp(viewport_top, viewport_bottom - 1) as u16;
    let height = scaled
        .height
        .min((viewport_bottom as u16).saturating_sub(y));
    Some(Rect {
        x: scaled.x,
        y,
        width: scaled.width,
        height,
    })
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Blend `fg` toward `bg` by the element's opacity.
///
/// Non-RGB colors (the high-contrast palette) cannot blend, so they
/// switch hard at half opacity instead.
#[must_use]
pub fn fade(fg: Color, bg: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => Color::Rgb(
            blend(br, fr, opacity),
            blend(bg_, fg_, opacity),
            blend(bb, fb, opacity),
        ),
        _ if opacity < 0.5 => bg,
        _ => fg,
    }
}

fn blend(from: u8, to: u8, t: f32) -> u8 {
    (f32::from(from) + (f32::from(to) - f32::from(from)) * t).round() as u8
}

/// Fade every span of a line toward the background. Spans without an
/// explicit foreground fall back to `default_fg` before blending.
#[must_use]
pub fn fade_line(
    line: ratatui::text::Line<'static>,
    default_fg: Color,
    bg: Color,
    opacity: f32,
) -> ratatui::text::Line<'static> {
    if opacity >= 0.999 {
        return line;
    }
    let spans = line
        .spans
        .into_iter()
        .map(|mut span| {
            let fg = span.style.fg.unwrap_or(default_fg);
            span.style.fg = Some(fade(fg, bg, opacity));
            span
        })
        .collect::<Vec<_>>();
    ratatui::text::Line::from(spans)
}
