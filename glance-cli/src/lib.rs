use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use glance::api::{BinRequest, ColorSchemeRequest, PaletteSpec};
use glance::palette::{CONTINUOUS_COLORMAPS, categorical_names, sequential_names};
use glance::{BuiltinPalettes, format_duration};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "glance",
    author,
    version,
    about = "Chart colors and timeline timestamps for the lecture dashboard",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Assign a color to every category key
    Colors(ColorsArgs),
    /// Pick the sequential palette color for a value in [0, 1]
    Bin(BinArgs),
    /// Format a number of seconds as HH:MM:SS
    Duration {
        #[arg(allow_negative_numbers = true)]
        seconds: f64,
    },
    /// List the built-in palette names
    Palettes,
    /// Resolve a color scheme request stored as JSON
    Request {
        #[arg(value_name = "REQUEST_FILE")]
        input: PathBuf,

        #[arg(long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Args, Clone)]
pub struct ColorsArgs {
    /// Category keys, in display order
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,

    /// File with one category key per line, appended after KEY arguments
    #[arg(long, value_name = "DOMAIN_FILE")]
    pub domain_file: Option<PathBuf>,

    /// Categorical palette name
    #[arg(long, env = "GLANCE_PALETTE", default_value = "Tableau10")]
    pub palette: String,

    /// Comma-separated hex colors; takes precedence over --palette
    #[arg(long, value_delimiter = ',')]
    pub colors: Option<Vec<String>>,

    /// Write the JSON mapping here instead of stdout
    #[arg(long, value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, clap::Args, Clone)]
pub struct BinArgs {
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Sequential palette name
    #[arg(long, env = "GLANCE_SEQUENTIAL_PALETTE", default_value = "BuGn")]
    pub palette: String,
}

#[derive(Debug, Serialize)]
struct PaletteListing {
    categorical: Vec<&'static str>,
    sequential: Vec<&'static str>,
    continuous: Vec<&'static str>,
}

/// Installs the stderr log subscriber, filtered by `GLANCE_LOG` (default
/// `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("GLANCE_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(cli, &mut out)
}

pub fn run_with_output<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Command::Colors(args) => run_colors(args, out),
        Command::Bin(args) => {
            let request = BinRequest {
                value: args.value,
                palette: PaletteSpec::Named(args.palette),
            };
            let color = request.resolve(&BuiltinPalettes)?;
            writeln!(out, "{color}")?;
            Ok(())
        }
        Command::Duration { seconds } => {
            writeln!(out, "{}", format_duration(seconds))?;
            Ok(())
        }
        Command::Palettes => {
            let listing = PaletteListing {
                categorical: categorical_names().collect(),
                sequential: sequential_names().collect(),
                continuous: CONTINUOUS_COLORMAPS.to_vec(),
            };
            serde_json::to_writer_pretty(&mut *out, &listing)?;
            writeln!(out)?;
            Ok(())
        }
        Command::Request { input, output } => {
            let contents = fs::read_to_string(&input)
                .with_context(|| format!("failed to read request '{}'", input.display()))?;
            let request: ColorSchemeRequest = serde_json::from_str(&contents)
                .with_context(|| format!("request '{}' is not valid JSON", input.display()))?;
            resolve_and_emit(&request, output.as_deref(), out)
        }
    }
}

fn run_colors<W: Write>(args: ColorsArgs, out: &mut W) -> Result<()> {
    let mut domain = args.keys;
    if let Some(path) = &args.domain_file {
        domain.extend(read_domain_file(path)?);
    }
    if domain.is_empty() {
        return Err(anyhow!("no category keys given"));
    }

    let palette = match args.colors {
        Some(colors) => PaletteSpec::Inline(colors),
        None => PaletteSpec::Named(args.palette),
    };

    let request = ColorSchemeRequest { domain, palette };
    resolve_and_emit(&request, args.output.as_deref(), out)
}

fn resolve_and_emit<W: Write>(
    request: &ColorSchemeRequest,
    output: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let response = request.resolve(&BuiltinPalettes)?;
    let json = serde_json::to_vec_pretty(&response)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!(
                            "failed to create output parent directory '{}'",
                            parent.display()
                        )
                    })?;
                }
            }
            fs::write(path, &json)
                .with_context(|| format!("failed to write colors to '{}'", path.display()))?;
        }
        None => {
            out.write_all(&json)?;
            writeln!(out)?;
        }
    }

    info!(
        target: "glance::cli",
        keys = request.domain.len(),
        warnings = response.warnings.len(),
        output = %output.map(|path| path.display().to_string()).unwrap_or_else(|| "-".into()),
        "color scheme resolved"
    );

    Ok(())
}

fn read_domain_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read domain file '{}'", path.display()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
