use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use unity_notation::{parse_with_config, Config, Format};

#[derive(Parser)]
#[command(author, version, about = "Parse, validate and render Unity notation", long_about = None)]
struct Args {
    /// Input file (reads stdin when omitted or `-`)
    input: Option<PathBuf>,

    /// Rendering format: log, tree or lisp
    #[arg(short, long, default_value_t = Format::Log)]
    format: Format,

    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only report diagnostics, do not render
    #[arg(long)]
    check: bool,

    /// Maximum element nesting depth (at least 1)
    #[arg(long, default_value_t = Config::default().max_depth,
          value_parser = clap::value_parser!(u16).range(1..))]
    max_depth: u16,

    /// Maximum input size in bytes (0 means unlimited)
    #[arg(long, default_value_t = Config::default().max_size)]
    max_size: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when the input produced any diagnostic
fn run(args: Args) -> Result<bool> {
    let text = read_input(args.input.as_ref())?;
    let config = Config::new(args.max_depth, args.max_size);
    let result = parse_with_config(&text, config);

    let mut stderr = io::stderr().lock();
    for diagnostic in result.errors() {
        writeln!(stderr, "{diagnostic}").context("failed to write diagnostics")?;
    }

    if !args.check {
        if let Some(document) = result.document() {
            let rendered = document.render(args.format);
            write_output(args.output.as_ref(), &rendered)?;
        }
    }

    info!(errors = result.errors().len(), "done");
    Ok(result.is_valid())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn write_output(path: Option<&PathBuf>, contents: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, contents)
            .with_context(|| format!("failed to write {}", path.display())),
        None => io::stdout()
            .lock()
            .write_all(contents.as_bytes())
            .context("failed to write output"),
    }
}
