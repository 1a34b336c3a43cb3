//! Springboard CLI
//!
//! A command-line interface demonstrating the Springboard primitives.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use springboard::factorial::{factorial, factorial_bounded};
use springboard::nested::{flatten, from_json_str, read_nested_file};
use springboard::prime_scan::{scan_primes, LogSink};

#[derive(Parser)]
#[command(name = "springboard")]
#[command(author, version, about = "Stack-safe recursion primitives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute n! with the trampoline driver
    Factorial {
        /// The input n
        n: u64,
    },

    /// Flatten a nested JSON array into a flat sequence
    Flatten {
        /// Nested JSON array, e.g. '[1,[2,[3,[4,[5]]]]]'
        json: Option<String>,

        /// Read the nested JSON array from a file instead
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Enumerate primes up to n on the cooperative step loop
    Primes {
        /// Inclusive upper bound
        n: u64,
    },

    /// Run the depth-budgeted direct recursion and report the failure
    Overflow {
        /// The input n (pick n well past the budget)
        n: u64,

        /// Recursion depth budget
        #[arg(short, long, default_value_t = 1_000)]
        budget: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Factorial { n } => {
            println!("{}", factorial(n));
        }
        Commands::Flatten { json, file } => {
            let nested = match (json, file) {
                (_, Some(path)) => read_nested_file(&path)
                    .with_context(|| format!("reading nested input from {}", path.display()))?,
                (Some(text), None) => from_json_str(&text).context("parsing nested input")?,
                (None, None) => bail!("provide a JSON argument or --file"),
            };
            let flat: Vec<String> = flatten(nested).into_iter().map(|v| v.to_string()).collect();
            println!("[{}]", flat.join(", "));
        }
        Commands::Primes { n } => {
            let primes = scan_primes(n, LogSink);
            let rendered: Vec<String> = primes.iter().map(u64::to_string).collect();
            println!("[{}]", rendered.join(", "));
        }
        Commands::Overflow { n, budget } => match factorial_bounded(n, budget) {
            Ok(value) => println!("completed within the budget: {value}"),
            Err(err) => {
                println!("caught: {err}");
                if let Some(depth) = err.depth_reached() {
                    println!("depth reached: {depth}");
                }
            }
        },
    }

    Ok(())
}

/// Wire up tracing based on -v count; RUST_LOG overrides when set.
fn setup_logging(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
