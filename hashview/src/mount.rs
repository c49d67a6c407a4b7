//! The render target the router owns.
//!
//! A `Mount` is a retained text buffer: views write lines into it during
//! `render`, the router clears it between navigations, and the
//! application loop draws whatever it currently holds on every frame.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

pub struct Mount {
    content: Text<'static>,
}

impl Mount {
    pub fn new() -> Self {
        Self {
            content: Text::default(),
        }
    }

    /// Drop all content.
    pub fn clear(&mut self) {
        self.content = Text::default();
    }

    /// Replace the content wholesale.
    pub fn set_content(&mut self, content: impl Into<Text<'static>>) {
        self.content = content.into();
    }

    /// Append a single line.
    pub fn push_line(&mut self, line: impl Into<Line<'static>>) {
        self.content.lines.push(line.into());
    }

    pub fn is_empty(&self) -> bool {
        self.content.lines.is_empty()
    }

    pub fn content(&self) -> &Text<'static> {
        &self.content
    }

    /// Content flattened to plain text, one line per mount line.
    pub fn plain_text(&self) -> String {
        self.content
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Widget for the application draw loop.
    pub fn paragraph(&self) -> Paragraph<'static> {
        Paragraph::new(self.content.clone())
    }

    pub(crate) fn show_not_found(&mut self, requested: &str) {
        self.content = Text::from(vec![
            Line::from(""),
            Line::styled(
                "  404 - Page Not Found",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(vec![
                Span::raw("  No view is registered for "),
                Span::styled(requested.to_string(), Style::default().fg(Color::Yellow)),
            ]),
        ]);
    }

    pub(crate) fn show_view_error(&mut self) {
        self.content = Text::from(vec![
            Line::from(""),
            Line::styled(
                "  Error",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from("  Could not load this page."),
        ]);
    }

    pub(crate) fn show_application_error(&mut self) {
        self.content = Text::from(vec![
            Line::from(""),
            Line::styled(
                "  Application Error",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from("  Something went wrong. See the log for details."),
        ]);
    }
}

impl Default for Mount {
    fn default() -> Self {
        Self::new()
    }
}
