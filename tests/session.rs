use std::io::Cursor;

use crossbook::MatchingEngine;
use crossbook::config::EchoMode;
use crossbook::session::{self, SessionStats};

fn run(input: &str, echo: EchoMode) -> (MatchingEngine, SessionStats, String) {
    let mut engine = MatchingEngine::new();
    let mut out = Vec::new();
    let stats = session::run(&mut engine, Cursor::new(input), &mut out, echo).unwrap();
    (engine, stats, String::from_utf8(out).unwrap())
}

#[test]
fn prints_each_new_report_line() {
    let input = "T1 B 5 30\nT2 S 2 30\nT3 S 3 30\n";
    let (engine, stats, out) = run(input, EchoMode::Appended);

    assert_eq!(out, "T1+2@30 T2-2@30\nT1+3@30 T3-3@30\n");
    assert_eq!(
        stats,
        SessionStats {
            lines: 3,
            accepted: 3,
            rejected: 0,
            report_lines: 2,
        }
    );
    assert!(engine.bids().is_empty());
}

#[test]
fn full_echo_reprints_the_whole_report() {
    let input = "T1 B 5 30\nT2 S 2 30\nT3 S 3 30\n";
    let (_, _, out) = run(input, EchoMode::Full);

    assert_eq!(
        out,
        "T1+2@30 T2-2@30\nT1+2@30 T2-2@30\nT1+3@30 T3-3@30\n"
    );
}

#[test]
fn malformed_lines_are_skipped() {
    let input = "T1 B 5 30\n\nT-2 S 5 30\nT2 X 5 30\nT2 S five 30\nT2 S 5 30\n";
    let (engine, stats, out) = run(input, EchoMode::Appended);

    assert_eq!(out, "T1+5@30 T2-5@30\n");
    assert_eq!(stats.lines, 6);
    assert_eq!(stats.accepted, 2);
    assert_eq!(stats.rejected, 4);
    assert_eq!(engine.trades(), ["T1+5@30 T2-5@30"]);
}

#[test]
fn reference_scenario_over_text() {
    let input = "\
T1 B 5 30
T2 S 5 70
T3 B 1 40
T4 S 2 60
T5 S 3 70
T6 S 20 80
T7 S 1 50
T2 S 5 70
T1 B 1 50
T1 B 3 60
T7 S 2 50
T8 B 10 90
";
    let (_, stats, out) = run(input, EchoMode::Appended);

    assert_eq!(
        out,
        "T1+1@50 T7-1@50\n\
         T1+2@60 T4-2@60\n\
         T1+1@60 T7-1@60\n\
         T2-6@70 T5-3@70 T7-1@50 T8+1@50 T8+9@70\n"
    );
    assert_eq!(stats.report_lines, 4);
}
