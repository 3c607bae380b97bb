mod compare;
mod counter;
mod suite;

use clap::Parser;
use tracing::debug;

#[derive(Parser)]
#[command(name = "word_frequency_checker")]
#[command(version = "0.1.0")]
#[command(about = "Count word frequencies and check them against a gold standard", long_about = None)]
struct Cli {
    /// Print the counted tables and per-case diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let cases = suite::builtin_cases();
    debug!("running {} test cases", cases.len());

    let failed = suite::run(&cases);
    if failed > 0 {
        std::process::exit(1);
    }
}
