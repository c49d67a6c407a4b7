use hashview::{Mount, Result, View};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::Roster;

pub struct FriendsView {
    roster: Roster,
}

impl FriendsView {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
        }
    }
}

impl View for FriendsView {
    fn render(&mut self, mount: &mut Mount) -> Result<()> {
        mount.push_line(Line::from(""));
        mount.push_line(Line::styled(
            "  Friends",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
        mount.push_line(Line::from(""));
        for friend in &self.roster.friends {
            let (dot, dot_style) = if friend.online {
                ("●", Style::default().fg(Color::Green))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            mount.push_line(Line::from(vec![
                Span::raw("  "),
                Span::styled(dot, dot_style),
                Span::raw(" "),
                Span::styled(friend.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!("  {}", friend.status),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("  ({}-{})", friend.wins, friend.losses)),
            ]));
        }
        Ok(())
    }
}
