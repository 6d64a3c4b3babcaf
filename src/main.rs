use clap::{Parser, Subcommand};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use niuniu::analyze::{aggregate_results, all_hands};
use niuniu::card::{parse_tokens, Hand};
use niuniu::cli::{read_hand_file, run_interactive};
use niuniu::report::{render, HandReport};
use niuniu::scoring::{solve, solve_many, BestResult};
use rayon::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "niuniu")]
#[command(about = "Niu Niu hand calculator (3 and 6 are interchangeable)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log search details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single hand given on the command line
    Score {
        /// Five cards: 1-10, or K/Q/J (10) and A (1)
        #[arg(num_args = 1..)]
        cards: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every hand in a file, one hand per line
    Batch {
        /// Hand file (blank lines and # or // comments are skipped)
        file: String,

        /// Print the results as a JSON array
        #[arg(long)]
        json: bool,

        /// Show a progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Print the rank distribution over every distinct hand
    Table,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "niuniu=debug" } else { "niuniu=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Score { cards, json }) => score_hand(&cards, json),
        Some(Commands::Batch {
            file,
            json,
            progress,
        }) => score_file(&file, json, progress),
        Some(Commands::Table) => print_table(),
        None => {
            let stdin = std::io::stdin();
            if let Err(e) = run_interactive(stdin.lock(), std::io::stdout()) {
                eprintln!("✗ {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("✗ Failed to serialize result: {}", e);
            std::process::exit(1);
        }
    }
}

fn score_hand(cards: &[String], json: bool) {
    let hand = match parse_tokens(cards) {
        Ok(hand) => hand,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let best = solve(&hand);
    if json {
        print_json(&HandReport::new(&hand, &best));
    } else {
        println!("{}", render(&hand, &best));
    }
}

fn score_file(path: &str, json: bool, progress: bool) {
    let hands = match read_hand_file(path) {
        Ok(hands) => hands,
        Err(e) => {
            eprintln!("✗ Failed to read hand file '{}': {}", path, e);
            std::process::exit(1);
        }
    };

    let start = std::time::Instant::now();
    let results: Vec<BestResult> = if progress {
        let bar = ProgressBar::new(hands.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} hands") {
            bar.set_style(style);
        }
        let results = hands
            .par_iter()
            .progress_with(bar.clone())
            .map(solve)
            .collect::<Vec<_>>();
        bar.finish_and_clear();
        results
    } else {
        solve_many(&hands)
    };
    let elapsed = start.elapsed();

    if json {
        let reports: Vec<_> = hands
            .iter()
            .zip(&results)
            .map(|(hand, best)| HandReport::new(hand, best))
            .collect();
        print_json(&reports);
        return;
    }

    for (hand, best) in hands.iter().zip(&results) {
        println!("{}", render(hand, best));
    }

    let found = results.iter().filter(|r| r.has_result()).count();
    eprintln!(
        "✓ Scored {} hands ({} with Niu) in {:.2?}",
        hands.len(),
        found,
        elapsed
    );
}

fn print_table() {
    let start = std::time::Instant::now();
    let hands: Vec<Hand> = all_hands();
    let results = solve_many(&hands);
    let dist = aggregate_results(&hands, &results);
    let elapsed = start.elapsed();

    println!("\n=== Niu Niu Rank Distribution ===\n");
    println!("Distinct hands: {}", dist.total);
    println!();

    for (bucket, count) in dist.sorted() {
        let pct = count as f64 / dist.total as f64 * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  {:8} {:5.1}% {} ({})", bucket.to_string(), pct, bar, count);
    }

    println!();
    println!(
        "Double pairs: {:5.1}% ({})",
        dist.doubles as f64 / dist.total as f64 * 100.0,
        dist.doubles
    );
    println!(
        "Needed 3↔6:   {:5.1}% ({})",
        dist.swapped as f64 / dist.total as f64 * 100.0,
        dist.swapped
    );
    println!("\nCompleted in {:.2?}", elapsed);
}
