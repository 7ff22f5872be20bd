//! Replaying command scripts.
//!
//! A script is a text file with one catalog command per line, written the same way
//! as on the command line (e.g. `album "Abbey Road" Beatles`). Blank lines and
//! lines starting with `#` are skipped. A line that cannot be parsed, or whose
//! command fails, is reported on stderr and the replay carries on with the next.

use chorus_core::SharedCatalog;
use clap::Parser;
use log::{debug, warn};

use super::{CommandHandler, ScriptLine};

/// What happened during a replay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Commands that were attempted, including the ones that failed.
    pub ran: usize,
    pub failed: usize,
}

/// Split a script line into a command, `None` for blank lines and comments.
///
/// # Errors
///
/// If the line has unbalanced quotes, or is not a valid command.
pub fn parse_line(line: &str) -> Option<Result<ScriptLine, String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let Some(words) = shlex::split(line) else {
        return Some(Err("unbalanced quotes".to_string()));
    };

    Some(ScriptLine::try_parse_from(words).map_err(|e| first_line(&e.to_string())))
}

fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}

/// Run every command in `source` against the catalog, in order.
///
/// With `echo` set, each command is written to `stdout` (prefixed with `> `) before it runs.
///
/// # Errors
///
/// Only if writing to `stdout` or `stderr` fails; failing commands are reported and skipped.
pub async fn replay<W1: std::fmt::Write + Send, W2: std::fmt::Write + Send>(
    catalog: &SharedCatalog,
    source: &str,
    echo: bool,
    stdout: &mut W1,
    stderr: &mut W2,
) -> Result<Report, std::fmt::Error> {
    let mut report = Report::default();

    for (number, line) in source.lines().enumerate().map(|(i, line)| (i + 1, line)) {
        let Some(parsed) = parse_line(line) else {
            continue;
        };
        report.ran += 1;

        let command = match parsed {
            Ok(ScriptLine { command }) => command,
            Err(e) => {
                warn!("skipping line {number}: {e}");
                writeln!(stderr, "line {number}: {e}")?;
                report.failed += 1;
                continue;
            }
        };

        if echo {
            writeln!(stdout, "> {}", line.trim())?;
        }
        debug!("line {number}: {command:?}");

        if let Err(e) = command.handle(catalog, stdout, stderr).await {
            writeln!(stderr, "line {number}: {e}")?;
            report.failed += 1;
        }
    }

    Ok(report)
}
