// Rust guideline compliant 2026-10-15

//! Cyclebench CLI Application
//!
//! Command-line benchmark that times placeholder cycles with a live progress
//! bar and reports throughput and predictions.

use anyhow::Context;
use clap::Parser;
use cyclebench_cli::commands;
use cyclebench_cli::commands::run::RunOptions;
use cyclebench_cli::interrupt::INTERRUPTED_MESSAGE;
use cyclebench_cli::logging::init_tracing;
use cyclebench_cli::prompt::parse_cycle_count;
use cyclebench_cli::terminal::{print_error, print_info, print_warning};
use cyclebench_cli::{create_formatter, rule_width, should_use_color};
use cyclebench_core::{Config, Error, OutputFormat};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cyclebench",
    version,
    about = "Cyclebench: time placeholder cycles with live progress and predictions",
    long_about = "Cyclebench runs a number of trivial arithmetic cycles, shows a live progress bar with throughput and ETA, and prints a performance report with predictions for larger cycle counts.",
    after_help = "Examples:\n  cyclebench\n  cyclebench 1,000,000\n  cyclebench 50000000 --yes --format json\n  cyclebench config init cyclebench.toml\n",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Number of cycles to execute (prompted for when omitted)
    #[arg(value_parser = parse_cycles_arg)]
    cycles: Option<u64>,

    /// Skip the confirmation for large runs
    #[arg(short, long)]
    yes: bool,

    /// Progress bar length in cells
    #[arg(long)]
    bar_length: Option<usize>,

    /// Label shown before the progress bar
    #[arg(long)]
    label: Option<String>,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Table,
    Plain,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Plain => OutputFormat::Plain,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "cyclebench.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,
}

fn parse_cycles_arg(value: &str) -> Result<u64, String> {
    parse_cycle_count(value).map_err(|_| "must be a positive integer".to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(bar_length) = cli.bar_length {
        config.bar_length = bar_length;
    }
    if let Some(label) = cli.label {
        config.label = label;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level.to_lowercase();
    }
    if let Some(format) = cli.format {
        config.output_format = format.into();
    } else if cli.json {
        config.output_format = OutputFormat::Json;
    }
    config.validate()?;

    let _guard = init_tracing(&config.log_level, cli.log_file.as_deref())?;
    let use_color = !cli.no_color && should_use_color();

    if let Some(Commands::Config { action }) = cli.command {
        return match action {
            ConfigAction::Init { path, force } => {
                commands::config::init(&path, force, use_color)
            }
            ConfigAction::Show => commands::config::show(&config),
        };
    }

    let formatter = create_formatter(config.output_format, rule_width());
    let options = RunOptions {
        cycles: cli.cycles,
        assume_yes: cli.yes,
        config,
        use_color,
    };

    match commands::run::execute(&options, formatter.as_ref()) {
        Ok(_) => {}
        Err(Error::Interrupted) => {
            eprintln!("\n");
            print_warning(INTERRUPTED_MESSAGE, use_color);
        }
        Err(Error::Cancelled) => {
            eprintln!();
            print_info("Operation cancelled.", use_color);
        }
        Err(err) => {
            eprintln!();
            let message = formatter.format_error(&err.to_string());
            if options.config.output_format == OutputFormat::Json {
                println!("{message}");
            } else {
                print_error(&message, use_color);
                print_info(
                    "Please try again with a different number of cycles.",
                    use_color,
                );
            }
        }
    }

    Ok(())
}
