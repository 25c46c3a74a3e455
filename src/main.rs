//! pagesim - compare page-replacement policies from the command line.
//!
//! Usage: pagesim [OPTIONS]
//!
//! Examples:
//!   pagesim --frames 3 --refs "1,2,3,2,1,4,5" --steps
//!   pagesim --random 20 --max-page 8 --seed 7 --json
//!   pagesim --policy optimal --steps -v

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, Level, LevelFilter, Log, Metadata, Record};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pagesim::common::config::{DEFAULT_FRAME_COUNT, DEFAULT_MAX_PAGE, DEFAULT_REFERENCES};
use pagesim::input::{parse_references, random_references};
use pagesim::report::{filtered_summary_table, step_table};
use pagesim::{compare, compare_parallel, Comparison, Policy, Reference};

#[derive(Parser)]
#[command(author, version, about = "Simulate FIFO, LRU and Optimal page replacement")]
struct Cli {
    /// Number of frames in the pool
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT as i64, allow_negative_numbers = true)]
    frames: i64,

    /// Comma-separated page references
    #[arg(short, long, default_value = DEFAULT_REFERENCES)]
    refs: String,

    /// Generate a random reference string of this length instead of --refs
    #[arg(long)]
    random: Option<usize>,

    /// Highest page number for --random
    #[arg(long, default_value_t = DEFAULT_MAX_PAGE)]
    max_page: u32,

    /// Seed for --random
    #[arg(long)]
    seed: Option<u64>,

    /// Only report this policy (fifo, lru or optimal)
    #[arg(short, long)]
    policy: Option<Policy>,

    /// Print the step-by-step table for each policy
    #[arg(long)]
    steps: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Run the policies on separate threads
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Build the reference string from `--random` or `--refs`.
fn references(cli: &Cli) -> Result<Vec<Reference>> {
    let references = match cli.random {
        Some(len) => {
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            random_references(len, cli.max_page, &mut rng)
                .context("failed to generate references")?
        }
        None => parse_references(&cli.refs),
    };

    let skipped = references.iter().filter(|r| r.is_malformed()).count();
    if skipped > 0 {
        info!("skipping {} malformed references", skipped);
    }
    if log::log_enabled!(Level::Info) {
        let text: Vec<String> = references.iter().map(ToString::to_string).collect();
        info!("references: {}", text.join(","));
    }
    Ok(references)
}

/// Simulate and render everything the tool prints to stdout.
fn run(cli: &Cli) -> Result<String> {
    let references = references(cli)?;

    let comparison = if cli.parallel {
        compare_parallel(&references, cli.frames)
    } else {
        compare(&references, cli.frames)
    }
    .context("simulation failed")?;

    render(cli, &comparison)
}

/// Format a comparison as JSON or text, honoring `--policy` and `--steps`.
fn render(cli: &Cli, comparison: &Comparison) -> Result<String> {
    if cli.json {
        let json = match cli.policy {
            Some(policy) => {
                let result = comparison.get(policy).context("missing policy result")?;
                serde_json::to_string_pretty(result)?
            }
            None => comparison.to_json()?,
        };
        return Ok(json + "\n");
    }

    let mut out = format!("Frames: {}\n\n", cli.frames);
    out.push_str(&filtered_summary_table(comparison, cli.policy));

    match cli.policy {
        Some(policy) => {
            if !cli.steps {
                out.push('\n');
                out.push_str(policy.description());
                out.push('\n');
            }
        }
        None => {
            if let Some(best) = comparison.best() {
                out.push_str(&format!("\nFewest faults: {}\n", best.title()));
            }
        }
    }

    if cli.steps {
        for (policy, result) in comparison.iter() {
            if cli.policy.is_some_and(|p| p != policy) {
                continue;
            }
            out.push('\n');
            out.push_str(&step_table(result));
        }
    }

    Ok(out)
}
