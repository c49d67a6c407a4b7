//! High-level application runner for routed terminal apps.
//!
//! Owns the terminal, the tokio runtime, and the event loop. The loop
//! waits on two sources: the location change signal (which drives the
//! router) and key input (which the keymap turns into navigation or
//! quit). Chrome around the mount is an address bar showing the current
//! fragment and a footer listing the key bindings.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use std::io::{self, stdout};
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::location::Location;
use crate::mount::Mount;
use crate::router::ViewRouter;

/// What a bound key does.
#[derive(Debug, Clone)]
pub enum KeyCommand {
    Navigate(String),
    Quit,
}

struct Binding {
    key: char,
    command: KeyCommand,
    label: String,
}

/// Key bindings registered during application setup.
#[derive(Default)]
pub struct Keymap {
    bindings: Vec<Binding>,
}

impl Keymap {
    /// Bind `key` to navigate to `path`. `label` shows up in the footer.
    pub fn bind(&mut self, key: char, path: &str, label: &str) {
        self.bindings.push(Binding {
            key,
            command: KeyCommand::Navigate(path.to_string()),
            label: label.to_string(),
        });
    }

    /// Bind `key` to quit the application.
    pub fn bind_quit(&mut self, key: char) {
        self.bindings.push(Binding {
            key,
            command: KeyCommand::Quit,
            label: "Quit".to_string(),
        });
    }

    fn command_for(&self, code: KeyCode) -> Option<&KeyCommand> {
        match code {
            KeyCode::Char(c) => self
                .bindings
                .iter()
                .find(|binding| binding.key == c)
                .map(|binding| &binding.command),
            _ => None,
        }
    }

    fn hints(&self) -> String {
        self.bindings
            .iter()
            .map(|binding| format!("{} {}", binding.key, binding.label))
            .collect::<Vec<_>>()
            .join(" │ ")
    }
}

/// Main application handle.
pub struct Application;

impl Application {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self
    }

    /// Run the application with a setup closure that registers routes,
    /// listeners, and key bindings.
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut ViewRouter, &mut Keymap) -> anyhow::Result<()>,
    {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {}", e))?;

        let location = Location::new();
        let mut router = ViewRouter::new(Mount::new(), location);
        let mut keymap = Keymap::default();
        setup(&mut router, &mut keymap)?;

        rt.block_on(async move { self.run_loop(router, keymap).await })
    }

    async fn run_loop(&self, mut router: ViewRouter, keymap: Keymap) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Initial render before any change event has fired.
        router.init();

        let result = self.run_app_loop(&mut terminal, &mut router, &keymap).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        router: &mut ViewRouter,
        keymap: &Keymap,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| draw(frame, router, keymap))?;

            tokio::select! {
                changed = router.changed() => {
                    if changed {
                        router.handle_route_change();
                    }
                }
                event_ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = event_ready {
                        if let CrosstermEvent::Key(key) = event::read()? {
                            if key.kind == KeyEventKind::Press {
                                match keymap.command_for(key.code) {
                                    Some(KeyCommand::Navigate(path)) => router.navigate(path),
                                    Some(KeyCommand::Quit) => return Ok(()),
                                    None => {}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn draw(frame: &mut Frame, router: &ViewRouter, keymap: &Keymap) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Address bar
            Constraint::Min(0),    // Mount
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let fragment = router.location().fragment();
    let shown = if fragment.is_empty() {
        "#".to_string()
    } else {
        fragment
    };
    let address = Paragraph::new(shown).block(
        Block::default()
            .title(" Location ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(address, chunks[0]);

    let view = router.mount().paragraph().block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(view, chunks[1]);

    let footer = Paragraph::new(format!(" {} ", keymap.hints()))
        .style(Style::default().bg(Color::Cyan).fg(Color::Black))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}
