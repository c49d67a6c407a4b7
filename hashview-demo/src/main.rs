//! Demo social app driving the hashview router.

mod model;
mod views;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context as _;
use clap::Parser;
use hashview::Application;
use tracing::info;

use crate::views::{ChatView, FriendsView, HomeView, ProfileView};

/// A toy social app driven by a hash-fragment view router
#[derive(Parser)]
#[command(name = "hashview-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A toy social app driven by a hash-fragment view router")]
struct Cli {
    /// Route to open on startup
    #[arg(long, default_value = "/")]
    start: String,

    /// Log file path (the terminal belongs to the UI)
    #[arg(long, default_value = "hashview-demo.log")]
    log_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let app = Application::new();
    app.run(move |router, keys| {
        router.add_route("/", |_| Ok(Box::new(HomeView::new())));
        router.add_route("/profile", |_| Ok(Box::new(ProfileView::new())));
        router.add_route("/friends", |_| Ok(Box::new(FriendsView::new())));
        router.add_param_route("/chat/:user", |_, params| {
            let user = params.first().cloned().unwrap_or_default();
            Ok(Box::new(ChatView::new(&user)))
        })?;

        let handle = router.handle();
        router.on_navigate(move || {
            info!(fragment = %handle.fragment(), "route changed");
            Ok(())
        });

        keys.bind('1', "/", "Home");
        keys.bind('2', "/profile", "Profile");
        keys.bind('3', "/friends", "Friends");
        keys.bind('4', "/chat/ada", "Chat ada");
        keys.bind('5', "/chat/grace", "Chat grace");
        keys.bind_quit('q');

        if !router.has_route(&cli.start) {
            info!(start = %cli.start, "start route is not registered; showing 404");
        }
        router.navigate(&cli.start);
        Ok(())
    })
}
