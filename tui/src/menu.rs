//! Menu grid rendering: header, tile grid, footer.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use vitrine_engine::{App, Phase};
use vitrine_types::ItemStyle;

use crate::effects::{fade, is_visible, styled_rect};
use crate::theme::{Glyphs, Palette};

const TILE_HEIGHT: u16 = 5;
pub(crate) const GRID_COLUMNS: usize = 2;

pub(crate) fn draw(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let header_height = if app.view().header().in_layout() { 4 } else { 0 };
    let footer_height = if app.view().footer().in_layout() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(1),
            Constraint::Length(footer_height),
        ])
        .split(area);

    if header_height > 0 {
        draw_header(frame, app, chunks[0], palette);
    }
    draw_grid(frame, app, chunks[1], palette, glyphs);
    if footer_height > 0 {
        draw_footer(frame, app, chunks[2], palette);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let style = app.view().header().style();
    if !is_visible(style) {
        return;
    }
    let Some(rect) = styled_rect(style, area, frame.area()) else {
        return;
    };

    let title_fg = fade(palette.primary, palette.bg_dark, style.opacity);
    let tagline_fg = fade(palette.text_muted, palette.bg_dark, style.opacity);
    let lines = vec![
        Line::from(""),
        Line::styled(
            app.content().title.clone(),
            Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
        ),
        Line::styled(app.content().tagline.clone(), Style::default().fg(tagline_fg)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let style = app.view().footer().style();
    if !is_visible(style) {
        return;
    }
    let fg = fade(palette.text_muted, palette.bg_dark, style.opacity);
    frame.render_widget(
        Paragraph::new(Line::styled(
            app.content().footer.clone(),
            Style::default().fg(fg),
        ))
        .alignment(Alignment::Center),
        area,
    );
}

fn draw_grid(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let items = app.content().menu.len();
    if items == 0 {
        return;
    }

    let rows = items.div_ceil(GRID_COLUMNS);
    let grid_height = (rows as u16) * (TILE_HEIGHT + 1);
    let top = area.y + area.height.saturating_sub(grid_height) / 2;
    let tile_width = (area.width.saturating_sub(4)) / GRID_COLUMNS as u16;
    let left = area.x + area.width.saturating_sub(tile_width * GRID_COLUMNS as u16 + 2) / 2;

    let cursor = app.menu_cursor();
    let selecting = matches!(app.phase(), Phase::Menu);

    for (index, item) in app.content().menu.iter().enumerate() {
        let state = &app.view().items()[index];
        let style = state.style();
        if !is_visible(style) {
            continue;
        }

        let col = (index % GRID_COLUMNS) as u16;
        let row = (index / GRID_COLUMNS) as u16;
        let base = Rect {
            x: left + col * (tile_width + 2),
            y: top + row * (TILE_HEIGHT + 1),
            width: tile_width,
            height: TILE_HEIGHT,
        };
        let Some(rect) = styled_rect(style, base, area) else {
            continue;
        };

        draw_tile(
            frame,
            item,
            rect,
            style,
            selecting && index == cursor,
            state.is_visible(),
            palette,
            glyphs,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tile(
    frame: &mut Frame,
    item: &vitrine_types::MenuItem,
    rect: Rect,
    style: ItemStyle,
    selected: bool,
    settled: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let border_base = if selected {
        palette.accent
    } else if settled {
        palette.bg_border
    } else {
        palette.bg_highlight
    };
    let border_fg = fade(border_base, palette.bg_dark, style.opacity);
    let label_fg = fade(
        if selected {
            palette.text_primary
        } else {
            palette.text_secondary
        },
        palette.bg_dark,
        style.opacity,
    );
    let summary_fg = fade(palette.text_muted, palette.bg_dark, style.opacity);

    let marker = if selected { glyphs.selected } else { glyphs.tile };
    let glyph = if item.glyph.is_empty() {
        marker.to_string()
    } else {
        item.glyph.clone()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_fg))
        .padding(Padding::horizontal(1));

    let inner_width = usize::from(rect.width.saturating_sub(4));
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{glyph} "), Style::default().fg(border_fg)),
            Span::styled(
                fit(&item.label, inner_width.saturating_sub(2)),
                Style::default().fg(label_fg).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(
            fit(&item.summary, inner_width),
            Style::default().fg(summary_fg),
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

/// Truncate to the given display width, with an ellipsis when cut.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > keep {
            break;
        }
        used += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::fit;

    #[test]
    fn fit_keeps_short_text() {
        assert_eq!(fit("hello", 10), "hello");
        assert_eq!(fit("exact", 5), "exact");
    }

    #[test]
    fn fit_truncates_with_ellipsis() {
        assert_eq!(fit("hello world", 6), "hello…");
    }
}
