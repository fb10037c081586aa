use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use jiff::civil::Date;
use tracing_subscriber::EnvFilter;

use ptfax_cli::commands::{self, Format, RenderOptions};
use ptfax_cli::config::{self, PtfaxConfig};
use ptfax_core::dates::parse_date;
use ptfax_core::models::measurement::MeasurementCategory;

/// Physical-therapy progress reports and fax cover sheets
#[derive(Parser)]
#[command(name = "ptfax", version, propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv). Overridden by RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the improvement between two measurements
    Calc {
        /// rom, strength, functional, or pain
        category: MeasurementCategory,
        initial: String,
        current: String,
        /// Unit of the values; defaults to the category's unit
        #[arg(long)]
        unit: Option<String>,
    },
    /// List measurement presets
    Presets,
    /// Print a blank report, optionally pre-filled with preset rows
    New {
        #[arg(long = "preset")]
        presets: Vec<String>,
        /// Initial evaluation date (YYYY-MM-DD or MM/DD/YYYY)
        #[arg(long, value_parser = parse_date)]
        initial_eval: Option<Date>,
    },
    /// Check a report for out-of-range values
    Check { report: PathBuf },
    /// Render a report as a fax cover sheet
    Render {
        report: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Tera template to use instead of the built-in one
        #[arg(long)]
        template: Option<PathBuf>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write a new configuration file
    Init {
        #[arg(long)]
        recipient_name: Option<String>,
        #[arg(long)]
        recipient_fax: Option<String>,
        /// Replace an existing configuration
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let today = jiff::Zoned::now().date();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Calc {
            category,
            initial,
            current,
            unit,
        } => commands::calc(&mut stdout, category, &initial, &current, unit.as_deref())?,
        Commands::Presets => commands::list_presets(&mut stdout)?,
        Commands::New {
            presets,
            initial_eval,
        } => commands::new_report(&mut stdout, &presets, initial_eval, today)?,
        Commands::Check { report } => {
            let report = commands::load_report(&report)?;
            commands::check(&mut stdout, &report)?;
        }
        Commands::Render {
            report,
            format,
            output,
            template,
        } => {
            let config = config::load_or_default()?;
            let report = commands::load_report(&report)?;
            let options = RenderOptions {
                format,
                output,
                template,
                today,
            };
            commands::render_report(&mut stdout, &report, &config, &options)?;
        }
        Commands::Config { action } => run_config(&mut stdout, action)?,
    }

    Ok(())
}

fn run_config(out: &mut dyn Write, action: ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let path = config::config_path()?;
            let config = config::load_or_default()?;
            if !config::has_config() {
                writeln!(out, "# no config at {}, showing defaults", path.display())?;
            }
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
        ConfigCommands::Init {
            recipient_name,
            recipient_fax,
            force,
        } => {
            if config::has_config() && !force {
                eyre::bail!(
                    "config already exists at {}; pass --force to replace it",
                    config::config_path()?.display()
                );
            }
            let mut config = PtfaxConfig::default();
            if let Some(name) = recipient_name {
                config.defaults.recipient_name = name;
            }
            if let Some(fax) = recipient_fax {
                config.defaults.recipient_fax = fax;
            }
            let path = config::save_config(&config)?;
            writeln!(out, "wrote {}", path.display())?;
        }
    }
    Ok(())
}
