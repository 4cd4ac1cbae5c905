//! Binary that runs every locked scenario through the runner and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture [bfs|astar|iddfs]` (all three when omitted)
//!
//! Output: `key=value` lines on stdout, see `lock_tests::scenarios`.
//! Logs go to stderr, filtered by `WAYPOINT_LOG` (default `warn`).

use std::process::ExitCode;

use lock_tests::scenarios::fixture_lines;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use waypoint_harness::runner::AlgorithmKind;

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("WAYPOINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let kinds = match std::env::args().nth(1) {
        None => AlgorithmKind::ALL.to_vec(),
        Some(name) => match name.parse::<AlgorithmKind>() {
            Ok(kind) => vec![kind],
            Err(err) => {
                tracing::error!(%err, "bad algorithm argument");
                eprintln!("search_fixture: {err}");
                return ExitCode::from(2);
            }
        },
    };

    for line in fixture_lines(&kinds) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
