//! TUI rendering for Vitrine using ratatui.

mod effects;
mod input;
pub mod markdown;
mod menu;
mod section;
mod theme;

pub use effects::{fade, fade_line, is_visible, styled_rect};
pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use vitrine_engine::{App, Phase};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if app.view().loading_visible() {
        draw_loading(frame, app, chunks[0], &palette, &glyphs);
    } else if app.view().active_section().is_some() {
        section::draw(frame, app, chunks[0], &palette, &glyphs);
    } else if app.view().menu_visible() {
        menu::draw(frame, app, chunks[0], &palette, &glyphs);
    }

    draw_status_bar(frame, app, chunks[1], &palette, &glyphs);
}

fn draw_loading(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, _glyphs: &Glyphs) {
    let spinner = spinner_frame(app.tick_count() as usize / 6, app.ui_options());
    let lines = vec![
        Line::from(""),
        Line::styled(app.content().title.clone(), styles::title(palette)),
        Line::styled(
            app.content().tagline.clone(),
            Style::default().fg(palette.text_muted),
        ),
        Line::from(""),
        Line::styled(format!("{spinner} loading"), Style::default().fg(palette.accent)),
    ];

    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let centered = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height: height.min(area.height),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hint = styles::key_hint(palette);
    let key = styles::key_highlight(palette);

    let mut spans: Vec<Span> = Vec::new();
    match app.phase() {
        Phase::Loading => {}
        Phase::Menu | Phase::TransitioningOut { .. } | Phase::TransitioningIn => {
            for (keycap, label) in [
                ("↑↓←→", " move  "),
                ("enter", " open  "),
                ("q", " quit"),
            ] {
                spans.push(Span::styled(keycap, key));
                spans.push(Span::styled(label, hint));
            }
        }
        Phase::Section { index } => {
            let section = &app.content().sections[index];
            spans.push(Span::styled(glyphs.back, key));
            spans.push(Span::styled(" esc back  ", hint));
            spans.push(Span::styled("↑↓", key));
            spans.push(Span::styled(" scroll  ", hint));
            if !section.tabs.is_empty() {
                spans.push(Span::styled("tab", key));
                spans.push(Span::styled(" switch  ", hint));
            }
            if !section.gallery.is_empty() {
                spans.push(Span::styled("f", key));
                spans.push(Span::styled(" filter  ", hint));
            }
            if !app.view().nav().bounds().is_empty() {
                spans.push(Span::styled("1-9", key));
                spans.push(Span::styled(" jump  ", hint));
            }
            spans.push(Span::styled("q", key));
            spans.push(Span::styled(" quit", hint));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
