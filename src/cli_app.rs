//! Top-level CLI definition and report rendering.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell as CompletionShell, generate};

use mdu::core::errors::{MduError, Result};
use mdu::walk::driver::{Driver, WalkOptions, WalkReport};

/// mdu — report the allocated disk size of each given path and everything
/// beneath it, in 1024-byte units, one tab-separated line per path.
#[derive(Debug, Parser)]
#[command(
    name = "mdu",
    author,
    version,
    about = "mdu - multithreaded disk usage",
    long_about = None
)]
pub struct Cli {
    /// Number of worker threads for directory descent.
    ///
    /// Unparsable or non-positive values clamp to 1 instead of erroring.
    #[arg(
        short = 'j',
        long = "threads",
        value_name = "N",
        default_value_t = 1,
        allow_hyphen_values = true,
        value_parser = parse_thread_count
    )]
    threads: usize,
    /// Emit the report as a JSON array instead of tab-separated text.
    #[arg(long)]
    json: bool,
    /// Generate shell completions and exit.
    #[arg(long, value_name = "SHELL")]
    completions: Option<CompletionShell>,
    /// Paths to measure, reported in the order given.
    #[arg(value_name = "PATH", required_unless_present = "completions")]
    paths: Vec<PathBuf>,
}

fn parse_thread_count(raw: &str) -> std::result::Result<usize, std::convert::Infallible> {
    Ok(raw
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .map_or(1, |n| n.max(1)))
}

/// Execute the CLI. Returns the process exit code: success when every path
/// was fully measured, `1` when any subtree was undercounted by an error.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    if let Some(shell) = cli.completions {
        generate(shell, &mut Cli::command(), "mdu", &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let driver = Driver::new(WalkOptions {
        workers: cli.threads,
    });
    let report = driver.run(&cli.paths);

    if cli.json {
        render_json(&report)?;
    } else {
        render_text(&report);
    }

    Ok(if report.degraded {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn render_text(report: &WalkReport) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for root in &report.roots {
        // Errors writing the report (closed pipe) are not worth a partial
        // retry; fall through and let the exit status stand.
        let _ = writeln!(out, "{}\t{}", root.kilobytes, root.path.display());
    }
}

fn render_json(report: &WalkReport) -> Result<()> {
    let rendered = serde_json::to_string_pretty(&report.roots).map_err(|e| MduError::Runtime {
        details: format!("JSON render failed: {e}"),
    })?;
    println!("{rendered}");
    Ok(())
}
