use hashview::{Mount, Result, View};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::Profile;

pub struct ProfileView {
    profile: Profile,
}

impl ProfileView {
    pub fn new() -> Self {
        Self {
            profile: Profile::default(),
        }
    }
}

impl View for ProfileView {
    fn render(&mut self, mount: &mut Mount) -> Result<()> {
        let p = &self.profile;
        mount.push_line(Line::from(""));
        mount.push_line(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                p.name,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", p.rank),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        mount.push_line(Line::styled(
            format!("  \"{}\"", p.motto),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ));
        mount.push_line(Line::from(""));
        mount.push_line(Line::from(vec![
            Span::raw("  Pong record: "),
            Span::styled(
                format!("{} wins", p.wins),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{} losses", p.losses),
                Style::default().fg(Color::Red),
            ),
        ]));
        Ok(())
    }
}
