use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fanout_result::ResultSet;

/// Fanout - inspect the per-target results of a batch operation
#[derive(Parser)]
#[command(name = "fanout")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Log filter directive (default: $RUST_LOG, then "warn")
  #[arg(long, global = true)]
  log_level: Option<String>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Print target counts and which targets succeeded or failed
  Summary {
    /// Path to the results file (JSON); reads stdin when omitted or "-"
    results_file: Option<PathBuf>,
  },

  /// Print the outcome recorded for one target
  Get {
    /// Path to the results file (JSON); reads stdin when omitted or "-"
    results_file: Option<PathBuf>,

    /// The target name to look up
    #[arg(long)]
    target: String,
  },

  /// Print only the targets that failed
  #[command(name = "errors")]
  ErrorSubset {
    /// Path to the results file (JSON); reads stdin when omitted or "-"
    results_file: Option<PathBuf>,
  },

  /// Print only the targets that succeeded
  #[command(name = "ok")]
  OkSubset {
    /// Path to the results file (JSON); reads stdin when omitted or "-"
    results_file: Option<PathBuf>,
  },

  /// Print target names, one per line
  Names {
    /// Path to the results file (JSON); reads stdin when omitted or "-"
    results_file: Option<PathBuf>,
  },
}

#[derive(Serialize)]
struct Summary<'a> {
  count: usize,
  ok: bool,
  ok_targets: Vec<&'a str>,
  error_targets: Vec<&'a str>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  init_logging(cli.log_level.as_deref())?;

  match cli.command {
    Some(Commands::Summary { results_file }) => {
      let results = load_results(results_file)?;
      let (ok, failed) = results.partition();
      print_json(&Summary {
        count: results.len(),
        ok: results.is_ok(),
        ok_targets: ok.names(),
        error_targets: failed.names(),
      })?;
    }
    Some(Commands::Get {
      results_file,
      target,
    }) => {
      let results = load_results(results_file)?;
      let outcome = results.get(&target)?;
      print_json(outcome)?;
    }
    Some(Commands::ErrorSubset { results_file }) => {
      let results = load_results(results_file)?;
      print_json(&results.error_subset())?;
    }
    Some(Commands::OkSubset { results_file }) => {
      let results = load_results(results_file)?;
      print_json(&results.ok_subset())?;
    }
    Some(Commands::Names { results_file }) => {
      let results = load_results(results_file)?;
      for name in results.names() {
        println!("{}", name);
      }
    }
    None => {
      println!("fanout - use --help to see available commands");
    }
  }

  Ok(())
}

fn init_logging(log_level: Option<&str>) -> Result<()> {
  let filter = match log_level {
    Some(directive) => EnvFilter::try_new(directive)
      .with_context(|| format!("invalid log level: {}", directive))?,
    None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
  };

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(true)
    .init();

  Ok(())
}

fn load_results(results_file: Option<PathBuf>) -> Result<ResultSet> {
  let content = match results_file {
    Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
      .with_context(|| format!("failed to read results file: {}", path.display()))?,
    _ => read_stdin()?,
  };

  let raw: serde_json::Map<String, serde_json::Value> =
    serde_json::from_str(&content).context("failed to parse results: expected a JSON object")?;

  let results = ResultSet::from_raw(raw);
  debug!(targets = results.len(), ok = results.is_ok(), "loaded results");

  Ok(results)
}

fn read_stdin() -> Result<String> {
  use std::io::IsTerminal;

  if io::stdin().is_terminal() {
    // No stdin pipe, treat as no results
    return Ok("{}".to_string());
  }

  let mut input = String::new();
  io::stdin()
    .read_to_string(&mut input)
    .context("failed to read results from stdin")?;

  if input.trim().is_empty() {
    Ok("{}".to_string())
  } else {
    Ok(input)
  }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}
