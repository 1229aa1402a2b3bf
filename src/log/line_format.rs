//! Line rendering shared by every sink.
//!
//! A line has the shape `<timestamp> [<level>]: <message>`. Interactive sinks
//! get the level token colorized; every other sink gets a line with all ANSI
//! escapes removed, including escapes the test engine embedded in messages.

use std::sync::LazyLock;

use chrono::SecondsFormat;
use colored::Colorize;
use regex::Regex;

use crate::log::log_record::LogRecord;

// CSI sequences (colors, cursor moves) and OSC sequences (titles,
// hyperlinks) terminated by BEL or ST.
static ANSI_ESCAPE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)").ok()
});

/// Renders `record` as one line, without the trailing newline.
#[must_use]
pub fn render_line(record: &LogRecord, colorize: bool) -> String {
    let ts = record
        .timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    if colorize {
        let level = record.level.as_str().color(record.level.color());
        format!("{ts} [{level}]: {}", record.message)
    } else {
        strip_ansi(&format!("{ts} [{}]: {}", record.level, record.message))
    }
}

/// Removes ANSI CSI and OSC escape sequences from `s`.
#[must_use]
pub fn strip_ansi(s: &str) -> String {
    match ANSI_ESCAPE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}
