//! Active section rendering.
//!
//! The section is one scrollable document: markdown body, then stats,
//! tabs, and the gallery. The draw pass also reports layout facts back
//! to the engine — where each anchor heading landed after wrapping, the
//! scrollable range, and which gallery cards entered the viewport — so
//! the highlighter and reveal logic stay in the engine.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use vitrine_engine::{AnchorBounds, App};
use vitrine_types::Section;

use crate::effects::{fade, fade_line, is_visible, styled_rect};
use crate::markdown::render_markdown;
use crate::theme::{Glyphs, Palette, styles};

pub(crate) fn draw(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let Some(index) = app.view().active_section() else {
        return;
    };
    let section = app.content().sections[index].clone();
    let section_style = app.view().section_style();

    let nav_height: u16 = u16::from(!section.anchors.is_empty());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),          // Small header + back hint
            Constraint::Length(nav_height), // Nav strip
            Constraint::Min(1),             // Body
        ])
        .split(area);

    // Snapshots before the layout feedback mutations below.
    let header_opacity = app.view().section_header_style().opacity * section_style.opacity;
    let back_opacity = app.view().back_hint_style().opacity * section_style.opacity;
    let nav_active = app.view().nav().active().map(str::to_owned);
    let active_tab = app.active_tab(index).map(str::to_owned);
    let gallery = app.gallery(index).map(|state| GallerySnapshot {
        filter: state.filter().to_string(),
        visible: (0..section.gallery.len()).map(|i| state.is_visible(i)).collect(),
        entrance: (0..section.gallery.len())
            .map(|i| state.entrance_progress(i))
            .collect(),
    });
    let stats: Vec<String> = section
        .stats
        .iter()
        .enumerate()
        .map(|(i, stat)| match stat.parsed_target() {
            Some(_) => app.stat_value(index, i).unwrap_or(0).to_string(),
            None => stat.target.clone(),
        })
        .collect();

    draw_small_header(frame, &section, chunks[0], header_opacity, back_opacity, palette, glyphs);
    if nav_height > 0 {
        draw_nav_strip(
            frame,
            &section,
            chunks[1],
            nav_active.as_deref(),
            section_style.opacity,
            palette,
            glyphs,
        );
    }

    let body_area = chunks[2];
    let built = build_body(
        &section,
        &stats,
        active_tab.as_deref(),
        gallery.as_ref(),
        palette,
        glyphs,
    );

    // Row positions after wrapping decide anchor bounds and reveals.
    let rows = wrapped_line_rows(&built.lines, body_area.width);
    let mut prefix = Vec::with_capacity(rows.len() + 1);
    let mut total: usize = 0;
    for count in &rows {
        prefix.push(total);
        total += count;
    }
    prefix.push(total);

    let bounds = anchor_bounds(&section, &built, &prefix, total);
    let scroll_max = (total as u16).saturating_sub(body_area.height);
    app.update_section_layout(bounds, nav_height, scroll_max);

    let offset = app.view().scroll().offset();
    let viewport_bottom = usize::from(offset) + usize::from(body_area.height);
    for (item_idx, line_idx) in &built.card_starts {
        let row = prefix[*line_idx];
        if row >= usize::from(offset) && row < viewport_bottom {
            app.gallery_item_in_viewport(index, *item_idx);
        }
    }

    if !is_visible(section_style) {
        return;
    }
    let Some(body_rect) = styled_rect(section_style, body_area, area) else {
        return;
    };

    let lines: Vec<Line<'static>> = built
        .lines
        .into_iter()
        .map(|line| fade_line(line, palette.text_secondary, palette.bg_dark, section_style.opacity))
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((offset, 0)),
        body_rect,
    );
}

struct GallerySnapshot {
    filter: String,
    visible: Vec<bool>,
    entrance: Vec<f32>,
}

struct BuiltBody {
    lines: Vec<Line<'static>>,
    /// `(heading text, line index)` from the markdown body.
    headings: Vec<(String, usize)>,
    /// `(gallery item index, line index)` of each drawn card's title.
    card_starts: Vec<(usize, usize)>,
}

fn draw_small_header(
    frame: &mut Frame,
    section: &Section,
    area: Rect,
    header_opacity: f32,
    back_opacity: f32,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let title_fg = fade(palette.violet, palette.bg_dark, header_opacity);
    let back_fg = fade(palette.text_muted, palette.bg_dark, back_opacity);
    let lines = vec![
        Line::styled(
            format!(" {}", section.title),
            Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!(" {} back to menu", glyphs.back),
            Style::default().fg(back_fg),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_nav_strip(
    frame: &mut Frame,
    section: &Section,
    area: Rect,
    active: Option<&str>,
    opacity: f32,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for anchor in &section.anchors {
        let is_active = active == Some(anchor.id.as_str());
        let (glyph, style) = if is_active {
            (glyphs.nav_active, styles::nav_active(palette))
        } else {
            (glyphs.nav_idle, Style::default().fg(palette.text_muted))
        };
        spans.push(Span::styled(format!("{glyph} "), style));
        spans.push(Span::styled(anchor.label.clone(), style));
        spans.push(Span::raw("  "));
    }
    let line = fade_line(
        Line::from(spans),
        palette.text_muted,
        palette.bg_dark,
        opacity,
    );
    frame.render_widget(Paragraph::new(line), area);
}

fn build_body(
    section: &Section,
    stats: &[String],
    active_tab: Option<&str>,
    gallery: Option<&GallerySnapshot>,
    palette: &Palette,
    glyphs: &Glyphs,
) -> BuiltBody {
    let base = Style::default().fg(palette.text_secondary);
    let rendered = render_markdown(&section.body, base, palette);
    let headings = rendered.headings;
    let mut lines = rendered.lines;

    if !section.stats.is_empty() {
        lines.push(Line::from(""));
        for (stat, value) in section.stats.iter().zip(stats) {
            lines.push(Line::from(vec![
                Span::styled(format!(" {value:>6}  "), styles::stat_value(palette)),
                Span::styled(stat.label.clone(), Style::default().fg(palette.text_muted)),
            ]));
        }
        lines.push(Line::from(""));
    }

    if !section.tabs.is_empty() {
        lines.push(Line::from(""));
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (i, pane) in section.tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(palette.bg_border)));
            }
            if active_tab == Some(pane.id.as_str()) {
                spans.push(Span::styled(
                    format!("{} {}", glyphs.tab_active, pane.label),
                    styles::nav_active(palette),
                ));
            } else {
                spans.push(Span::styled(
                    pane.label.clone(),
                    Style::default().fg(palette.text_muted),
                ));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        if let Some(pane) = section
            .tabs
            .iter()
            .find(|pane| active_tab == Some(pane.id.as_str()))
        {
            lines.extend(render_markdown(&pane.body, base, palette).lines);
        }
    }

    let mut card_starts = Vec::new();
    if let Some(snapshot) = gallery
        && !section.gallery.is_empty()
    {
        lines.push(Line::from(""));
        lines.push(filter_bar(section, snapshot, palette));
        lines.push(Line::from(""));

        for (item_idx, item) in section.gallery.iter().enumerate() {
            if !snapshot.visible.get(item_idx).copied().unwrap_or(false) {
                continue;
            }
            let opacity = snapshot.entrance.get(item_idx).copied().unwrap_or(1.0);
            let title_fg = fade(palette.text_primary, palette.bg_dark, opacity);
            let blurb_fg = fade(palette.text_muted, palette.bg_dark, opacity);
            let tag_fg = fade(palette.accent, palette.bg_dark, opacity);

            card_starts.push((item_idx, lines.len()));
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", glyphs.bullet), Style::default().fg(tag_fg)),
                Span::styled(
                    item.title.clone(),
                    Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  [{}]", item.category), Style::default().fg(tag_fg)),
            ]));
            if !item.blurb.is_empty() {
                lines.push(Line::styled(
                    format!("   {}", item.blurb),
                    Style::default().fg(blurb_fg),
                ));
            }
            lines.push(Line::from(""));
        }
    }

    BuiltBody {
        lines,
        headings,
        card_starts,
    }
}

fn filter_bar(section: &Section, snapshot: &GallerySnapshot, palette: &Palette) -> Line<'static> {
    let mut categories: Vec<&str> = vec!["all"];
    for item in &section.gallery {
        if !categories.contains(&item.category.as_str()) {
            categories.push(&item.category);
        }
    }

    let mut spans: Vec<Span> = vec![Span::styled(
        " filter: ",
        Style::default().fg(palette.text_muted),
    )];
    for category in categories {
        if snapshot.filter == category {
            spans.push(Span::styled(
                format!("[{category}] "),
                styles::nav_active(palette),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {category}  "),
                Style::default().fg(palette.text_muted),
            ));
        }
    }
    Line::from(spans)
}

/// Bind each content anchor to the heading with the same label and
/// produce its half-open row bounds. Anchors whose label matches no
/// heading are skipped.
fn anchor_bounds(
    section: &Section,
    built: &BuiltBody,
    prefix: &[usize],
    total_rows: usize,
) -> Vec<AnchorBounds> {
    let mut tops: Vec<(String, usize)> = Vec::new();
    for anchor in &section.anchors {
        let Some((_, line_idx)) = built
            .headings
            .iter()
            .find(|(text, _)| *text == anchor.label)
        else {
            continue;
        };
        tops.push((anchor.id.clone(), prefix[*line_idx]));
    }

    let mut bounds = Vec::with_capacity(tops.len());
    for (i, (id, top)) in tops.iter().enumerate() {
        let bottom = tops
            .get(i + 1)
            .map_or(total_rows, |(_, next_top)| *next_top);
        bounds.push(AnchorBounds {
            id: id.clone(),
            top: *top as u16,
            bottom: bottom.max(*top) as u16,
        });
    }
    bounds
}

fn wrapped_line_rows(lines: &[Line], width: u16) -> Vec<usize> {
    let width = width.max(1);
    lines
        .iter()
        .map(|line| {
            Paragraph::new(line.clone())
                .wrap(Wrap { trim: false })
                .line_count(width)
        })
        .collect()
}
