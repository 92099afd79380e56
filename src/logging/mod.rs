//! Console logging for binaries which embed the coordinate mapping core.
//!
//! The library itself only emits records through the `log` facade. Call
//! [setup] early in `main` to see them.

use std::{fmt::Write as FmtWrite, sync::OnceLock};

use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};
use regex::Regex;
use textwrap::{termwidth, Options};

/// Matches the marker at the start of the last line of a wrapped record.
static LAST_LINE_MATCHER: OnceLock<Regex> = OnceLock::new();

/// Setup console logging for this application.
///
/// The log level is read from RUST_LOG and defaults to `info`. Keep the
/// returned handle alive for as long as logs should be written.
pub fn setup() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .format(multiline_format)
        .start()?;

    log::info!(
        "Adjust the log level by setting RUST_LOG. By default RUST_LOG=info"
    );

    Ok(handle)
}

/// An opinionated formatting function for flexi_logger which automatically
/// wraps content to the terminal width.
pub fn multiline_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let mut full_line = String::new();
    writeln!(
        full_line,
        "{} [{}] [{}:{}]",
        record.level(),
        now.now().format("%H:%M:%S%.6f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
    )
    .expect("unable to format first log line");

    write!(&mut full_line, "{}", &record.args())
        .expect("unable to format log!");

    writeln!(w, "{}", decorate(&full_line, termwidth().min(74)))
}

/// Wrap a record to `width` columns, open it with `┏`, continue it with
/// `┃` and close the final line with `┗`.
fn decorate(full_line: &str, width: usize) -> String {
    let wrap_options = Options::new(width)
        .initial_indent("┏ ")
        .subsequent_indent("┃ ");
    let wrapped = textwrap::fill(full_line, wrap_options);

    let matcher = LAST_LINE_MATCHER.get_or_init(|| {
        Regex::new(r"(┃)(.*)$").expect("last line pattern is valid")
    });
    matcher.replace(&wrapped, "┗$2").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_line_record_is_opened_and_closed() {
        let decorated = decorate("INFO [12:00:00] [a.rs:1]\nhello", 74);
        assert_eq!(decorated, "┏ INFO [12:00:00] [a.rs:1]\n┗ hello");
    }

    #[test]
    fn long_records_wrap_and_only_the_last_line_closes() {
        let message = "word ".repeat(40);
        let decorated =
            decorate(&format!("DEBUG [12:00:00] [a.rs:1]\n{}", message), 30);
        let lines: Vec<&str> = decorated.lines().collect();

        assert!(lines.len() > 3);
        assert!(lines[0].starts_with("┏ "));
        for line in &lines[1..lines.len() - 1] {
            assert!(line.starts_with("┃ "), "{:?}", line);
        }
        assert!(lines[lines.len() - 1].starts_with("┗ "));
        assert!(lines.iter().all(|line| line.chars().count() <= 30));
    }
}
