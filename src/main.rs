use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crossbook::MatchingEngine;
use crossbook::config::{EchoMode, LogFormat, Settings};
use crossbook::metrics::install_recorder;
use crossbook::{session, telemetry};

#[derive(Parser, Debug)]
#[command(name = "crossbook", about = "Match limit orders read from stdin")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    echo: Option<EchoMode>,
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
    #[arg(long)]
    no_banner: bool,
    /// Dump Prometheus metrics to stderr on exit.
    #[arg(long)]
    metrics: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = Settings::load(args.config.as_deref()).context("failed to load settings")?;
    if let Some(echo) = args.echo {
        settings.session.echo = echo;
    }
    if let Some(format) = args.log_format {
        settings.log.format = format;
    }
    if args.no_banner {
        settings.session.banner = false;
    }
    if args.metrics {
        settings.metrics.enabled = true;
    }

    telemetry::init(&settings.log);
    let prom = if settings.metrics.enabled {
        Some(install_recorder()?)
    } else {
        None
    };

    if settings.session.banner {
        eprintln!("Enter orders, e.g. `T1 B 5 30`, one per line. Press Ctrl+D to end:");
    }

    let mut engine = MatchingEngine::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session::run(&mut engine, stdin.lock(), &mut stdout, settings.session.echo)?;

    if let Some(prom) = prom {
        eprint!("{}", prom.render());
    }
    Ok(())
}
