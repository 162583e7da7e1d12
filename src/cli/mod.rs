//! Command-line surface: evaluate, sample and validate curves from text.
//!
//! Commands write to any [`Write`] so they can be driven from tests without
//! spawning a process.

pub mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand};

use crate::codec::{self, DocumentLine, ParseError};
use crate::config::{self, OutputFormat, Settings};
use crate::curve::{CurveModel, CurveShape};

pub use error::CliError;

#[derive(Debug, Parser)]
#[command(
    name = "respcurve",
    version,
    about = "Evaluate parameterized response curves"
)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to ~/.respcurve/config.yaml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the curve's value at each input.
    Eval {
        /// Curve text, e.g. "Logistic 0 0 1 1 flipx".
        curve: String,
        #[arg(required = true, allow_negative_numbers = true)]
        x: Vec<f64>,
    },
    /// Print the curve at evenly spaced inputs over [0, 1].
    Sample {
        curve: String,
        #[arg(long)]
        steps: Option<usize>,
        #[arg(long)]
        precision: Option<usize>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the available curve shapes.
    Shapes,
    /// Validate curve lines and print them in canonical form.
    #[command(group(
        ArgGroup::new("input")
            .required(true)
            .multiple(true)
            .args(["curves", "file"])
    ))]
    Check {
        curves: Vec<String>,
        /// Read one curve per line; blank lines and `#` comments are skipped.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// Load settings from `--config` or the default location.
    pub fn load_settings(&self) -> Result<Settings, CliError> {
        let path = self
            .config
            .clone()
            .unwrap_or_else(config::default_settings_path);
        config::load_settings(&path).map_err(|source| CliError::Config { path, source })
    }

    /// Execute the selected command.
    pub fn run(&self, settings: &Settings, out: &mut impl Write) -> Result<(), CliError> {
        match &self.command {
            Command::Eval { curve, x } => eval(curve, x, settings.precision, out),
            Command::Sample {
                curve,
                steps,
                precision,
                format,
            } => {
                let settings = Settings {
                    steps: steps.unwrap_or(settings.steps),
                    precision: precision.unwrap_or(settings.precision),
                    format: format.unwrap_or(settings.format),
                };
                sample(curve, &settings, out)
            }
            Command::Shapes => {
                for shape in CurveShape::ALL {
                    writeln!(out, "{shape}")?;
                }
                Ok(())
            }
            Command::Check { curves, file } => check(curves, file.as_deref(), out),
        }
    }
}

fn eval(curve: &str, xs: &[f64], precision: usize, out: &mut impl Write) -> Result<(), CliError> {
    let model = codec::parse(curve)?;
    tracing::debug!(curve = %model, "evaluating");
    for &x in xs {
        writeln!(out, "{:.*}", precision, model.evaluate(x))?;
    }
    Ok(())
}

fn sample(curve: &str, settings: &Settings, out: &mut impl Write) -> Result<(), CliError> {
    let model = codec::parse(curve)?;
    tracing::debug!(curve = %model, steps = settings.steps, "sampling");
    write_samples(&model, settings, out)
}

fn write_samples(
    model: &CurveModel,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let p = settings.precision;
    let points = model.sample(settings.steps);
    match settings.format {
        OutputFormat::Table => {
            for (x, y) in points {
                writeln!(out, "{x:.p$}  {y:.p$}")?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "x,y")?;
            for (x, y) in points {
                writeln!(out, "{x:.p$},{y:.p$}")?;
            }
        }
    }
    Ok(())
}

fn check(
    curves: &[String],
    file: Option<&std::path::Path>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    // Arguments are labelled `arg N`, file lines `<path>:N`.
    let mut checked: Vec<(String, Result<CurveModel, ParseError>)> = curves
        .iter()
        .enumerate()
        .map(|(idx, text)| (format!("arg {}", idx + 1), codec::parse(text)))
        .collect();

    if let Some(path) = file {
        let text = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "checking curve file");
        checked.extend(
            codec::parse_document(&text)
                .into_iter()
                .map(|DocumentLine { line, result }| {
                    (format!("{}:{line}", path.display()), result)
                }),
        );
    }

    let total = checked.len();
    let mut failed = 0;
    for (label, result) in &checked {
        match result {
            Ok(model) => writeln!(out, "{label}: {model}")?,
            Err(err) => {
                failed += 1;
                writeln!(out, "{label}: {err}")?;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::Check { failed, total });
    }
    Ok(())
}
