use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::config::EchoMode;
use crate::engine::{Execution, MatchingEngine};
use crate::error::SessionError;
use crate::input::parse_line;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub lines: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub report_lines: u64,
}

/// Feeds every line of `reader` to `engine` and writes report lines to
/// `writer`. Lines that fail to parse or are refused by the engine are
/// logged and skipped; only I/O errors end the session early.
pub fn run<R, W>(
    engine: &mut MatchingEngine,
    reader: R,
    writer: &mut W,
    echo: EchoMode,
) -> Result<SessionStats, SessionError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();

    for line in reader.lines() {
        let line = line?;
        stats.lines += 1;

        let execution = match process_line(engine, &line) {
            Ok(execution) => execution,
            Err(err) => {
                warn!(line = stats.lines, input = %line.trim(), %err, "skipping order");
                stats.rejected += 1;
                continue;
            }
        };
        stats.accepted += 1;
        if execution.report.is_some() {
            stats.report_lines += 1;
        }

        match echo {
            EchoMode::Appended => {
                if let Some(report) = &execution.report {
                    writeln!(writer, "{report}")?;
                }
            }
            EchoMode::Full => {
                for report in engine.trades() {
                    writeln!(writer, "{report}")?;
                }
            }
        }
        writer.flush()?;
    }

    info!(
        lines = stats.lines,
        accepted = stats.accepted,
        rejected = stats.rejected,
        report_lines = stats.report_lines,
        "session finished"
    );
    Ok(stats)
}

fn process_line(engine: &mut MatchingEngine, line: &str) -> Result<Execution, SessionError> {
    let order = parse_line(line)?;
    Ok(engine.submit(order)?)
}
