//! Command-line front end: reads a marker sequence and prints the length of
//! the longest balanced run.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use balanced_run::{
    find_longest_balanced_run, parse, BalancedRunFinder, InputFormat, MarkerPolicy,
};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod trace;

use trace::TraceObserver;

#[derive(Debug, Parser)]
#[command(name = "balanced-run")]
#[command(about = "Longest run with equally many zeros and ones", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a count followed by that many 0/1 integers
    Ints(InputArgs),
    /// Read a single line of 0/1 characters
    Bits(InputArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Treat any value other than 0 as a one instead of rejecting it
    #[arg(long)]
    permissive: bool,

    /// Log every step of the scan to stderr
    #[arg(long)]
    trace: bool,

    /// Print "length start end" instead of only the length
    #[arg(long)]
    span: bool,
}

impl Command {
    fn into_parts(self) -> (InputFormat, InputArgs) {
        match self {
            Command::Ints(args) => (InputFormat::Counted, args),
            Command::Bits(args) => (InputFormat::BitString, args),
        }
    }
}

fn init_tracing(trace: bool) {
    let default = if trace {
        "balanced_run=debug"
    } else {
        "balanced_run=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (format, args) = cli.command.into_parts();

    init_tracing(args.trace);

    let policy = if args.permissive {
        MarkerPolicy::Permissive
    } else {
        MarkerPolicy::Strict
    };

    let input = read_input(args.input.as_deref())?;
    let markers = parse::parse(&input, format, policy).context("Malformed input")?;
    tracing::debug!(markers = markers.len(), ?format, ?policy, "input parsed");

    let best = if args.trace {
        let mut finder =
            BalancedRunFinder::with_observer_and_capacity(TraceObserver, markers.len());
        finder.extend(markers);
        finder.best()
    } else {
        find_longest_balanced_run(markers)
    };

    let len = best.map_or(0, |run| run.len);
    tracing::debug!(longest = len, "scan complete");

    if args.span {
        let (start, end) = best.map_or((0, 0), |run| (run.start, run.end()));
        println!("{} {} {}", len, start, end);
    } else {
        println!("{}", len);
    }

    Ok(())
}
