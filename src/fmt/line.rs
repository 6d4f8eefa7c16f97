//! One line per emit: `<date> <color>[<Name>]<reset> <json>`.
//!
//! The human-readable date prefix and the RFC 3339 `ts` inside the payload are
//! formatted independently: the prefix is for eyes, the payload for tools.

use crate::level::LevelDescriptor;
use crate::output::LogRecord;

use super::colorize;
use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use std::fmt::Display;

/// Prefix format; sorts lexically and needs no time zone to read.
pub const HUMAN_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Second precision with `Z` for a zero offset, e.g. `2024-05-01T09:30:00+02:00`.
#[must_use]
pub fn rfc3339<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[must_use]
pub fn human_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format(HUMAN_DATE_FORMAT).to_string()
}

/// Renders the colorized line for `record`, dated now. Never contains a newline;
/// sinks append exactly one when they write.
///
/// # Errors
/// Fails only if the record payload cannot be serialized.
pub fn render_line(record: &LogRecord, level: &LevelDescriptor) -> Result<String, crate::Error> {
    render_line_at(record, level, &Local::now())
}

/// Same as [`render_line`] with an explicit prefix date, so tests get stable output.
///
/// # Errors
/// Fails only if the record payload cannot be serialized.
pub fn render_line_at<Tz: TimeZone>(
    record: &LogRecord,
    level: &LevelDescriptor,
    at: &DateTime<Tz>,
) -> Result<String, crate::Error>
where
    Tz::Offset: Display,
{
    let payload = record.to_json()?;
    let tag = colorize(&format!("[{}]", level.name), level.color);
    Ok(format!("{} {tag} {payload}", human_date(at)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use chrono::{FixedOffset, Utc};

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
    }

    #[test]
    fn rfc3339_uses_seconds_and_z() {
        assert_eq!(rfc3339(&fixed()), "2024-03-09T07:05:01Z");
    }

    #[test]
    fn rfc3339_keeps_non_zero_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = tz.with_ymd_and_hms(2024, 3, 9, 9, 5, 1).unwrap();
        assert_eq!(rfc3339(&at), "2024-03-09T09:05:01+02:00");
    }

    #[test]
    fn render_line_layout() {
        let record = LogRecord::new("a.rs:1", "core").stamped_at("hi", &fixed());
        let line = render_line_at(&record, &LevelDescriptor::describe(Level::Info), &fixed())
            .unwrap();
        assert_eq!(
            line,
            "2024-03-09 07:05:01 \x1b[32m[Info]\x1b[0m \
             {\"ts\":\"2024-03-09T07:05:01Z\",\"caller\":\"a.rs:1\",\"module\":\"core\",\"msg\":\"hi\"}"
        );
        assert!(!line.contains('\n'));
    }

    #[test]
    fn render_line_unknown_level_is_uncolored() {
        let record = LogRecord::new("c", "m").stamped_at("x", &fixed());
        let line = render_line_at(&record, &LevelDescriptor::describe_code(42), &fixed()).unwrap();
        assert!(line.contains("\x1b[0m[Unknown]\x1b[0m"));
    }
}
