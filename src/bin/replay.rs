use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use crossbook::config::{EchoMode, Settings};
use crossbook::{MatchingEngine, Price, Quantity, session, telemetry};

#[derive(Parser, Debug)]
#[command(name = "replay", about = "Replay an order file and print the resulting book")]
struct Args {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Price levels to print per side.
    #[arg(long, default_value_t = 10)]
    depth: usize,
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FinalBook<'a> {
    trades: &'a [String],
    bids: Vec<(Price, Quantity)>,
    asks: Vec<(Price, Quantity)>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    telemetry::init(&settings.log);

    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;

    let mut engine = MatchingEngine::new();
    let mut stdout = io::stdout().lock();

    if args.json {
        session::run(&mut engine, BufReader::new(file), &mut io::sink(), EchoMode::Appended)?;
        let book = FinalBook {
            trades: engine.trades(),
            bids: engine.bids().depth(args.depth),
            asks: engine.asks().depth(args.depth),
        };
        serde_json::to_writer_pretty(&mut stdout, &book)?;
        writeln!(stdout)?;
        return Ok(());
    }

    session::run(&mut engine, BufReader::new(file), &mut stdout, EchoMode::Appended)?;
    writeln!(stdout, "bids:")?;
    for (price, quantity) in engine.bids().depth(args.depth) {
        writeln!(stdout, "  {quantity}@{price}")?;
    }
    writeln!(stdout, "asks:")?;
    for (price, quantity) in engine.asks().depth(args.depth) {
        writeln!(stdout, "  {quantity}@{price}")?;
    }
    Ok(())
}
