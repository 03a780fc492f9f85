//! Terminal front end for the dashboard shell.
//!
//! ```text
//! dashboard-shell classify 900
//! dashboard-shell --store prefs.json theme toggle
//! dashboard-shell --store prefs.json theme accent '#722ED1'
//! dashboard-shell --store prefs.json render 1280 --drawer
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use console::{pad_str, style, Alignment};
use dashboard_shell::{
    AccentColor, Dashboard, DashboardConfig, LayoutRoute, ThemePreference, ThemeTokens, PALETTE,
};

#[derive(Debug, Parser)]
#[command(name = "dashboard-shell", version, about = "Device-adaptive dashboard shell")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preference file (overrides `storage_path` from the config)
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a viewport width; omit it to classify "no viewport"
    Classify { width: Option<u32> },
    /// Inspect or change the persisted theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// List the accent palette
    Palette,
    /// Render the layout frame for a width around some content
    Render {
        width: Option<u32>,
        /// Page content placed inside the frame
        #[arg(long, default_value = "(page content)")]
        content: String,
        /// Collapse the sider
        #[arg(long)]
        collapsed: bool,
        /// Open the drawer
        #[arg(long)]
        drawer: bool,
    },
}

#[derive(Debug, Subcommand)]
enum ThemeAction {
    /// Print the current mode and accent
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the accent color
    Accent { color: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(store) = &cli.store {
        config.storage_path = Some(store.clone());
    }

    match cli.command {
        Command::Classify { width } => {
            let device = config.breakpoints.classify(width);
            println!("{} {}", device, LayoutRoute::for_device(device));
        }
        Command::Theme { action } => run_theme(&config, action),
        Command::Palette => print_palette(&config),
        Command::Render {
            width,
            content,
            collapsed,
            drawer,
        } => {
            let dash = Dashboard::from_config(&config, width);
            if collapsed {
                dash.toggle_sidebar();
            }
            dash.set_drawer_open(drawer);
            println!("{}", dash.render(&content)?);
        }
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_theme(config: &DashboardConfig, action: ThemeAction) {
    if config.storage_path.is_none() && !matches!(action, ThemeAction::Show) {
        log::warn!("no --store given; the change will not persist");
    }
    let dash = Dashboard::from_config(config, None);
    let theme = dash.theme();

    match action {
        ThemeAction::Show => {}
        ThemeAction::Toggle => {
            theme.toggle_mode();
        }
        ThemeAction::Accent { color } => {
            let accent = AccentColor::new(color);
            if !accent.is_in_palette() {
                eprintln!(
                    "{} {} is not a palette color; using it as given",
                    style("note:").yellow(),
                    accent
                );
            }
            theme.set_accent_color(accent);
        }
    }

    let pref = theme.current();
    println!("mode:   {}", pref.mode);
    println!(
        "accent: {} {}",
        swatch(&theme.resolved_tokens()),
        pref.accent_color
    );
}

fn print_palette(config: &DashboardConfig) {
    let current = Dashboard::from_config(config, None).theme().current();
    for entry in PALETTE.iter() {
        let tokens = ThemeTokens::resolve(&ThemePreference::new(current.mode, entry.color));
        let marker = if current.accent_color.as_str().eq_ignore_ascii_case(entry.color) {
            "*"
        } else {
            " "
        };
        println!(
            "{} {} {} {}",
            marker,
            swatch(&tokens),
            pad_str(entry.label, 14, Alignment::Left, None),
            entry.color
        );
    }
}

// Accents that are not hex notation print an uncolored block.
fn swatch(tokens: &ThemeTokens) -> String {
    tokens.style("color_primary").apply_to("██").to_string()
}
