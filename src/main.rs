// Creator Suite - terminal dashboard for content creators
//
// A sidebar of panels (script writing, repurposing, analytics, planning,
// SEO, settings). Content panels are locked until an API key is entered in
// Settings for the current session.
//
// Architecture:
// - Panels: one handler per menu entry, rendering blocks from form input
// - Router: maps a menu label to its handler and enforces the key gate
// - Generation: chat-completions client (or an offline demo generator)
// - TUI (ratatui): sidebar, forms, output, logs strip, status bar

mod chart;
mod cli;
mod config;
mod generation;
mod logging;
mod panels;
mod router;
mod session;
mod startup;
mod theme;
mod tui;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use generation::{DemoGenerator, OpenAiGenerator, TextGenerator};
use logging::LogBuffer;
use router::{PanelRegistry, PanelRouter};

#[tokio::main]
async fn main() -> Result<()> {
    // Subcommands (config, panels) run and exit before any setup
    let cli = Cli::parse();
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Extract bundled themes on first run
    theme::ensure_themes_extracted();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    // Logs go to the in-memory buffer once the TUI owns the terminal.
    // The guard must outlive the dashboard so file logs flush.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, &log_buffer, true);

    let registry = PanelRegistry::standard().context("Invalid panel catalog")?;
    startup::print_startup(&config, &registry);
    startup::log_startup(&config, &registry);

    let generator: Box<dyn TextGenerator> = if config.demo_mode {
        Box::new(DemoGenerator::new())
    } else {
        Box::new(
            OpenAiGenerator::new(&config.generation)
                .context("Failed to build generation client")?,
        )
    };
    let router = PanelRouter::new(registry, generator);

    let app = tui::app::App::new(&config, router, log_buffer);
    tui::run_tui(app).await
}
