use hashview::{Mount, Result, View};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }
}

impl View for HomeView {
    fn render(&mut self, mount: &mut Mount) -> Result<()> {
        mount.push_line(Line::from(""));
        mount.push_line(Line::styled(
            "  Welcome back, Rae",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        mount.push_line(Line::from(""));
        mount.push_line(Line::styled(
            "  Recent activity",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for entry in [
            "ada won a pong match against grace (11-9)",
            "grace updated her status: debugging",
            "alan sent you a friend request",
            "edsger came online",
        ] {
            mount.push_line(Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::DarkGray)),
                Span::raw(entry),
            ]));
        }
        Ok(())
    }
}
