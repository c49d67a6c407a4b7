use hashview::{Mount, Result, View};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use tracing::debug;

use crate::model::ChatLog;

pub struct ChatView {
    user: String,
    log: ChatLog,
}

impl ChatView {
    pub fn new(user: &str) -> Self {
        Self {
            user: user.to_string(),
            log: ChatLog::default(),
        }
    }
}

impl View for ChatView {
    fn render(&mut self, mount: &mut Mount) -> Result<()> {
        mount.push_line(Line::from(""));
        mount.push_line(Line::from(vec![
            Span::raw("  Chat with "),
            Span::styled(
                self.user.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        mount.push_line(Line::from(""));

        let messages = self.log.messages_for(&self.user);
        if messages.is_empty() {
            mount.push_line(Line::styled(
                format!("  No messages with {} yet.", self.user),
                Style::default().fg(Color::DarkGray),
            ));
            return Ok(());
        }

        for message in messages {
            let style = if message.from == "you" {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            mount.push_line(Line::from(vec![
                Span::styled(format!("  {:>6}: ", message.from), style.add_modifier(Modifier::BOLD)),
                Span::styled(message.body, style),
            ]));
        }
        Ok(())
    }

    fn destroy(&mut self) -> Result<()> {
        debug!(user = %self.user, "closing chat");
        Ok(())
    }
}
