//! Markdown to ratatui rendering.
//!
//! Section bodies are simple documents: headings, paragraphs, emphasis,
//! and lists. Headings are reported with their line index so the nav
//! highlighter can bind anchors to them.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme::Palette;

/// A rendered section body plus where its headings landed, pre-wrap.
#[derive(Debug, Default)]
pub struct RenderedBody {
    pub lines: Vec<Line<'static>>,
    /// `(heading text, line index)` in document order.
    pub headings: Vec<(String, usize)>,
}

/// Render markdown content to ratatui lines.
#[must_use]
pub fn render_markdown(content: &str, base_style: Style, palette: &Palette) -> RenderedBody {
    let renderer = MarkdownRenderer::new(base_style, palette);
    renderer.render(content)
}

struct MarkdownRenderer {
    base_style: Style,
    heading_style: Style,
    lines: Vec<Line<'static>>,
    current_spans: Vec<Span<'static>>,
    headings: Vec<(String, usize)>,

    // Style stack for nested formatting (counters, not booleans), so
    // `## Heading with **bold**` unwinds correctly.
    bold_count: usize,
    italic_count: usize,

    in_heading: bool,
    heading_text: String,
    list_depth: usize,
}

impl MarkdownRenderer {
    fn new(base_style: Style, palette: &Palette) -> Self {
        Self {
            base_style,
            heading_style: Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
            lines: Vec::new(),
            current_spans: Vec::new(),
            headings: Vec::new(),
            bold_count: 0,
            italic_count: 0,
            in_heading: false,
            heading_text: String::new(),
            list_depth: 0,
        }
    }

    fn render(mut self, content: &str) -> RenderedBody {
        let parser = Parser::new_ext(content, Options::empty());
        for event in parser {
            self.handle(event);
        }
        self.flush_line();
        // Trim a trailing blank line left by the last block.
        if self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        RenderedBody {
            lines: self.lines,
            headings: self.headings,
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                self.flush_line();
                self.in_heading = true;
                self.heading_text.clear();
                self.bold_count += 1;
            }
            Event::End(TagEnd::Heading(_)) => {
                self.headings
                    .push((self.heading_text.trim().to_string(), self.lines.len()));
                self.flush_line();
                self.blank_line();
                self.in_heading = false;
                self.bold_count = self.bold_count.saturating_sub(1);
            }
            Event::Start(Tag::Paragraph) => self.flush_line(),
            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                self.blank_line();
            }
            Event::Start(Tag::Strong) => self.bold_count += 1,
            Event::End(TagEnd::Strong) => self.bold_count = self.bold_count.saturating_sub(1),
            Event::Start(Tag::Emphasis) => self.italic_count += 1,
            Event::End(TagEnd::Emphasis) => {
                self.italic_count = self.italic_count.saturating_sub(1);
            }
            Event::Start(Tag::List(_)) => {
                self.flush_line();
                self.list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                self.list_depth = self.list_depth.saturating_sub(1);
                if self.list_depth == 0 {
                    self.blank_line();
                }
            }
            Event::Start(Tag::Item) => {
                self.flush_line();
                let indent = "  ".repeat(self.list_depth.saturating_sub(1));
                self.current_spans
                    .push(Span::styled(format!("{indent}- "), self.base_style));
            }
            Event::End(TagEnd::Item) => self.flush_line(),
            Event::Text(text) | Event::Code(text) => {
                if self.in_heading {
                    self.heading_text.push_str(&text);
                }
                let style = self.current_style();
                self.current_spans
                    .push(Span::styled(text.into_string(), style));
            }
            Event::SoftBreak => {
                let style = self.current_style();
                self.current_spans.push(Span::styled(" ", style));
            }
            Event::HardBreak => self.flush_line(),
            _ => {}
        }
    }

    fn current_style(&self) -> Style {
        let mut style = if self.in_heading {
            self.heading_style
        } else {
            self.base_style
        };
        if self.bold_count > 0 && !self.in_heading {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic_count > 0 {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            let spans = std::mem::take(&mut self.current_spans);
            self.lines.push(Line::from(spans));
        }
    }

    fn blank_line(&mut self) {
        self.lines.push(Line::from(""));
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Style;

    use crate::theme::Palette;

    use super::render_markdown;

    fn plain(body: &crate::markdown::RenderedBody) -> Vec<String> {
        body.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn headings_are_reported_with_line_indices() {
        let body = render_markdown(
            "## Overview\nFirst.\n\n## History\nSecond.",
            Style::default(),
            &Palette::standard(),
        );
        assert_eq!(body.headings.len(), 2);
        assert_eq!(body.headings[0].0, "Overview");
        let lines = plain(&body);
        assert_eq!(lines[body.headings[0].1], "Overview");
        assert_eq!(lines[body.headings[1].1], "History");
        assert!(body.headings[0].1 < body.headings[1].1);
    }

    #[test]
    fn paragraphs_are_separated_by_blank_lines() {
        let body = render_markdown("One.\n\nTwo.", Style::default(), &Palette::standard());
        let lines = plain(&body);
        assert_eq!(lines, vec!["One.", "", "Two."]);
    }

    #[test]
    fn list_items_get_bullets() {
        let body = render_markdown("- alpha\n- beta", Style::default(), &Palette::standard());
        let lines = plain(&body);
        assert!(lines[0].starts_with("- alpha"));
        assert!(lines[1].starts_with("- beta"));
    }

    #[test]
    fn empty_body_renders_nothing() {
        let body = render_markdown("", Style::default(), &Palette::standard());
        assert!(body.lines.is_empty());
        assert!(body.headings.is_empty());
    }
}
