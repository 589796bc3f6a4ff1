use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use navlight_core::{AppConfig, Theme};

mod commands;

#[derive(Parser)]
#[command(name = "navlight")]
#[command(author, version, about = "Active navigation, theme and scroll behaviour for small sites")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of ~/.config/navlight/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview the site in the terminal
    Run {
        /// Location to open, e.g. index.html#pricing
        #[arg(short, long)]
        url: Option<String>,
    },
    /// Print the navigation links active at a location
    Resolve {
        /// Location, absolute or relative to the site root
        url: String,
        /// Read the navbar from an HTML file instead of the config
        #[arg(short, long)]
        markup: Option<PathBuf>,
    },
    /// Print the navigation links
    Links {
        /// Read the navbar from an HTML file instead of the config
        #[arg(short, long)]
        markup: Option<PathBuf>,
    },
    /// Read or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Configuration file helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored theme
    Get,
    /// Store a theme
    Set { theme: ThemeArg },
    /// Switch between light and dark
    Toggle,
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,
    /// Write the default site config
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)?;

    // Initialize logging; stderr keeps stdout free for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Run { url }) => commands::run::run(config, url.as_deref()),
        None => commands::run::run(config, None),
        Some(Commands::Resolve { url, markup }) => {
            commands::resolve::run(&config, &url, markup.as_deref())
        }
        Some(Commands::Links { markup }) => commands::links::run(&config, markup.as_deref()),
        Some(Commands::Theme { action }) => match action {
            ThemeAction::Get => commands::theme::get(&config),
            ThemeAction::Set { theme } => commands::theme::set(&config, theme.into()),
            ThemeAction::Toggle => commands::theme::toggle(&config),
        },
        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}
