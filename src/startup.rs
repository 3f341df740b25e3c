// Startup module - banner and boot summary
//
// Printed to the terminal before the TUI takes over the screen, and echoed
// into the logs strip once logging is routed to the in-memory buffer.

use crate::config::{Config, VERSION};
use crate::router::PanelRegistry;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// One line of the boot summary
pub struct StartupItem {
    pub name: &'static str,
    pub value: String,
}

fn backend_description(config: &Config) -> String {
    if config.demo_mode {
        "offline demo generator".to_string()
    } else {
        format!(
            "{} @ {}",
            config.generation.model, config.generation.api_url
        )
    }
}

/// Boot summary shared by the banner and the log echo
pub fn startup_items(config: &Config, registry: &PanelRegistry) -> Vec<StartupItem> {
    let gated = registry.iter().filter(|d| d.is_gated()).count();
    vec![
        StartupItem {
            name: "panels",
            value: format!("{} ({} need an API key)", registry.len(), gated),
        },
        StartupItem {
            name: "backend",
            value: backend_description(config),
        },
        StartupItem {
            name: "theme",
            value: config.theme.clone(),
        },
        StartupItem {
            name: "mock data",
            value: match config.mock_seed {
                Some(seed) => format!("seed {}", seed),
                None => "random".to_string(),
            },
        },
    ]
}

/// Print the startup banner
pub fn print_startup(config: &Config, registry: &PanelRegistry) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Creator Suite{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Dashboard for content creators{RESET}");
    println!();

    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    println!();

    for item in startup_items(config, registry) {
        println!(
            "    {GREEN}✓{RESET} {:<10} {DIM}{}{RESET}",
            item.name, item.value
        );
    }
    println!();

    println!("  {MAGENTA}▸{RESET} Set your API key in {BOLD}Settings{RESET} to unlock the tools");
    if config.demo_mode {
        println!("  {YELLOW}▸{RESET} {YELLOW}Demo mode active{RESET} {DIM}(no network calls){RESET}");
    }
    println!();
}

/// Echo the boot summary into the logs strip
pub fn log_startup(config: &Config, registry: &PanelRegistry) {
    tracing::info!("Creator Suite v{}", VERSION);
    for item in startup_items(config, registry) {
        tracing::info!("  ✓ {} - {}", item.name, item.value);
    }
    if config.demo_mode {
        tracing::info!("▸ Demo mode active (no network calls)");
    }
    tracing::info!("Ready. Pick a panel from the sidebar.");
}
