//! rowsift - filters streamed CSV-like lines with a boolean filter expression

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use rowsift::expr;
use rowsift::pipeline;
use std::io::Read;
use std::path::PathBuf;

/// Filter CSV-like lines with a typed boolean filter expression
#[derive(ClapParser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Filter expression, e.g. "((string,3,contain,banana)and(int,0,<,3))"
    expression: String,

    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Number of evaluation workers
    #[arg(short, long, default_value = "4")]
    workers: usize,

    /// chrono format for datetime fields and literals
    #[arg(short = 'f', long, default_value = expr::DEFAULT_DATETIME_LAYOUT)]
    time_format: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let input = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };
    let lines: Vec<String> = input.lines().map(str::to_string).collect();

    let expression = args.expression.clone();
    let time_format = args.time_format.clone();
    let matches = pipeline::run(lines, args.workers, move |reader| {
        Ok(expr::compile(&expression, reader, &time_format)?)
    })
    .await
    .context("Failed to evaluate filter expression")?;

    for line in &matches {
        println!("{}", line);
    }
    log::debug!("{} lines matched", matches.len());

    Ok(())
}
