use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use word_ladder::validate::normalize;
use word_ladder::{batch, LadderConfig, Solver};

/// Find the shortest word ladder between two words of equal length.
#[derive(Parser)]
#[command(name = "word_ladder")]
#[command(version)]
#[command(about = "Shortest one-letter-at-a-time transformations between dictionary words")]
struct Cli {
    /// Dictionary file, one word per line
    dictionary: PathBuf,

    /// Ignore dictionary words shorter than this
    #[arg(long)]
    min_length: Option<usize>,

    /// Ignore dictionary words longer than this
    #[arg(long)]
    max_length: Option<usize>,

    /// CSV file with `start,end` rows; skips the interactive prompt
    #[arg(short, long)]
    queries: Option<PathBuf>,

    /// Where to write batch results (defaults to stdout)
    #[arg(short, long, requires = "queries")]
    output: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let config = LadderConfig::new(cli.min_length, cli.max_length);

    eprintln!(
        "Initializing word graphs with dictionary file '{}'",
        cli.dictionary.display()
    );
    let init_start = Instant::now();
    let solver = Solver::from_path(&cli.dictionary, &config)
        .with_context(|| format!("could not initialize from {}", cli.dictionary.display()))?;
    eprintln!(
        "Done initializing ({:.3} sec)",
        init_start.elapsed().as_secs_f64()
    );

    match cli.queries {
        Some(path) => run_batch(&solver, &path, cli.output.as_deref()),
        None => run_interactive(&solver),
    }
}

fn run_batch(solver: &Solver, queries: &Path, output: Option<&Path>) -> Result<()> {
    let file = File::open(queries)
        .with_context(|| format!("could not open query file {}", queries.display()))?;
    let queries = batch::read_queries(file)?;
    let reports = batch::run_batch(solver, &queries);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            batch::write_reports(file, &reports)?;
        }
        None => batch::write_reports(io::stdout().lock(), &reports)?,
    }
    Ok(())
}

/// Prompts for word pairs until stdin closes.
fn run_interactive(solver: &Solver) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("-------------------------------------------------");
        let Some(start) = prompt("Start word: ", &mut lines)? else {
            return Ok(());
        };
        let Some(end) = prompt("  End word: ", &mut lines)? else {
            return Ok(());
        };
        println!();

        if let Err(err) = solver.validate(&start, &end) {
            println!("{err}");
            continue; // re-prompt
        }

        let start = normalize(&start);
        let end = normalize(&end);
        println!("Finding shortest path from '{start}' to '{end}'");
        let search_start = Instant::now();
        let path = solver.find_shortest_path(&start, &end)?;
        let secs = search_start.elapsed().as_secs_f64();

        if path.is_empty() {
            println!("  NO_PATH_FOUND ({secs:.6} sec)");
        } else {
            println!("  PATH_FOUND ({secs:.6} sec): {}", path.join(" -> "));
        }
    }
}

/// Prints `label` and reads one line; `None` on end of input.
fn prompt(label: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    lines.next().transpose().context("failed to read from stdin")
}
