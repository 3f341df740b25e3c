// CLI module - command-line argument parsing and handlers
//
// Runtime flags (--demo, --seed) feed into the resolved Config. Subcommands
// are handled here and exit before the dashboard starts:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --path: Show config file path
// - panels: Print the navigation menu

use crate::config::{Config, VERSION};
use crate::router::PanelRegistry;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Creator Suite - terminal dashboard for content creators
#[derive(Parser, Debug)]
#[command(name = "creator-suite")]
#[command(version = VERSION)]
#[command(about = "Terminal dashboard for content creators", long_about = None)]
pub struct Cli {
    /// Use the offline demo generator instead of the HTTP backend
    #[arg(long)]
    pub demo: bool,

    /// Seed for placeholder datasets (repeatable charts and tables)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// List the dashboard panels in menu order
    Panels,
}

impl Cli {
    /// Fold the runtime flags into an already-resolved config
    pub fn apply(&self, config: &mut Config) {
        if self.demo {
            config.demo_mode = true;
        }
        if let Some(seed) = self.seed {
            config.mock_seed = Some(seed);
        }
    }
}

/// Handle a subcommand. Returns true if one ran (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show(cli);
            } else if *reset {
                handle_config_reset()?;
            } else if *edit {
                handle_config_edit()?;
            } else {
                println!("Usage: creator-suite config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            Ok(true)
        }
        Some(Commands::Panels) => {
            let registry = PanelRegistry::standard()?;
            print!("{}", panel_menu(&registry));
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Navigation menu, one panel per line, gated panels marked with a lock
pub fn panel_menu(registry: &PanelRegistry) -> String {
    let mut out = String::new();
    for (i, descriptor) in registry.iter().enumerate() {
        let marker = if descriptor.is_gated() { "🔒" } else { "  " };
        out.push_str(&format!("{:>2}. {} {}\n", i + 1, marker, descriptor.label()));
    }
    out.push_str("\n🔒 requires an API key (set it in Settings)\n");
    out
}

fn config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", config_path()?.display());
    Ok(())
}

fn handle_config_show(cli: &Cli) {
    let mut config = Config::from_env();
    cli.apply(&mut config);

    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    if config.demo_mode {
        println!("# Demo mode: on");
    }
}

fn handle_config_reset() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| {
            format!(
                "Failed to launch editor '{}'; set $EDITOR to your preferred editor",
                editor
            )
        })?;

    if !status.success() {
        anyhow::bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn runtime_flags_override_config() {
        let cli = Cli::parse_from(["creator-suite", "--demo", "--seed", "7"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert!(config.demo_mode);
        assert_eq!(config.mock_seed, Some(7));
        assert!(cli.command.is_none());
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let cli = Cli::parse_from(["creator-suite"]);
        let mut config = Config::default();
        config.mock_seed = Some(3);
        cli.apply(&mut config);
        assert!(!config.demo_mode);
        assert_eq!(config.mock_seed, Some(3));
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from(["creator-suite", "config", "--show"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { show: true, .. })
        ));
        let cli = Cli::parse_from(["creator-suite", "panels"]);
        assert!(matches!(cli.command, Some(Commands::Panels)));
    }

    #[test]
    fn menu_marks_only_gated_panels() {
        let registry = PanelRegistry::standard().unwrap();
        let menu = panel_menu(&registry);
        let lines: Vec<&str> = menu.lines().take(registry.len()).collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[0].contains("🔒 Script Generator"));
        assert!(lines[9].ends_with("Settings"));
        assert!(!lines[9].contains('🔒'));
    }
}
