//! adjdot CLI — convert an adjacency list into a digraph document.
//!
//! Usage:
//!   adjdot <INPUT> <OUTPUT> [--verbose]

use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "adjdot",
    version,
    about = "Convert an adjacency list into a Graphviz digraph"
)]
struct Cli {
    /// Adjacency list: one `SOURCE TARGET...` record per line
    input: PathBuf,
    /// Digraph file to create or overwrite
    output: PathBuf,
    /// Log progress to stderr (logging only; the output is unaffected)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = adjdot::convert(&cli.input, &cli.output) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
