use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod formatters;

use crate::core::FileAnalyzer;
use crate::formatters::JsonGraphFormatter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "scopegraph",
    version = "0.1.0",
    author = "scopegraph developers",
    about = "Static call graph extraction for indentation-delimited source"
)]
struct Cli {
    /// Input source file (or directory to scan recursively)
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "nodes.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli { input, output } = cli;

    let start_time = Instant::now();

    println!("SCOPEGRAPH - Call graph extraction");
    println!("Input: {}", input.display());
    println!("Output: {}", output.display());

    let analyzer = FileAnalyzer::new()?;
    let graph = if input.is_dir() {
        analyzer.scan_all(&input)?
    } else {
        analyzer.scan(&input)
    };

    println!(
        "Calls collected: {} across {} scopes",
        graph.call_count(),
        graph.scope_count()
    );

    // Write synchronously so an output failure surfaces before the
    // process reports completion.
    JsonGraphFormatter::new().format_to_file(&graph, &output)?;

    println!("Scan complete. Generated {}", output.display());
    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
