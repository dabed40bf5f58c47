//! Field evaluation.
//!
//! Runs a compiled [Field] against one entry and its capture groups. Evaluation is total:
//! anything missing (no capture, no modification time, a format chrono cannot render)
//! becomes empty text instead of an error, so one odd entry never breaks a listing.

use crate::core::grammar::{Field, Instruction};
use crate::core::matcher::CaptureGroups;
use crate::core::FileEntry;

use chrono::{DateTime, Local, Utc};

use std::fmt::Write;
use std::time::{SystemTime, UNIX_EPOCH};

/// Used by `last-change` when no format argument is given. Renders as DD.MM.YYYY.
pub const DEFAULT_TIME_FORMAT: &str = "%d.%m.%Y";

/// Concatenates the text of every instruction of `field` in order.
pub fn evaluate(field: &Field, entry: &FileEntry, captures: &CaptureGroups<'_>) -> String {
    let mut buf = String::new();
    for instruction in field.instructions() {
        match instruction {
            Instruction::Literal(text) => buf.push_str(text),
            Instruction::EntryName => buf.push_str(&entry.name_str()),
            Instruction::LastModified(format) => {
                if let Some(mtime) = entry.modified() {
                    push_time(&mut buf, mtime, format.as_deref());
                }
            }
            Instruction::CaptureRef(index) => buf.push_str(captures.get(*index)),
        }
    }
    buf
}

fn push_time(buf: &mut String, mtime: SystemTime, format: Option<&str>) {
    let format = format
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_TIME_FORMAT);
    let Some(dt) = to_local(mtime) else {
        return;
    };

    // Invalid specifiers surface as a fmt::Error, keep nothing of a half written value.
    let mut rendered = String::new();
    if write!(rendered, "{}", dt.format(format)).is_ok() {
        buf.push_str(&rendered);
    }
}

/// Converts to local time, `None` when chrono cannot represent the instant.
fn to_local(mtime: SystemTime) -> Option<DateTime<Local>> {
    let (secs, nanos) = match mtime.duration_since(UNIX_EPOCH) {
        Ok(d) => (i64::try_from(d.as_secs()).ok()?, d.subsec_nanos()),
        Err(e) => {
            let d = e.duration();
            let secs = i64::try_from(d.as_secs()).ok()?;
            match d.subsec_nanos() {
                0 => (-secs, 0),
                n => (-secs - 1, 1_000_000_000 - n),
            }
        }
    };
    DateTime::<Utc>::from_timestamp(secs, nanos).map(|dt| dt.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matcher::{capture_groups, compile_patterns};

    use chrono::TimeZone;
    use std::time::Duration;

    fn field(def: &str) -> Field {
        Field::compile(def).expect("definition compiles")
    }

    fn mtime(y: i32, m: u32, d: u32) -> SystemTime {
        Local
            .with_ymd_and_hms(y, m, d, 12, 30, 0)
            .single()
            .expect("unambiguous local time")
            .into()
    }

    #[test]
    fn literal_is_independent_of_entry() {
        let f = field("`text`");
        for entry in [
            FileEntry::file("a", None),
            FileEntry::dir("b", Some(mtime(2020, 1, 1))),
        ] {
            assert_eq!(evaluate(&f, &entry, &CaptureGroups::default()), "text");
        }
    }

    #[test]
    fn file_name_ignores_matcher_state() {
        let f = field("file-name");
        let entry = FileEntry::file("report.pdf", None);
        assert_eq!(evaluate(&f, &entry, &CaptureGroups::default()), "report.pdf");

        let pats = compile_patterns(&["^(re)"]).expect("patterns compile");
        let caps = capture_groups(&pats, "report.pdf");
        assert_eq!(evaluate(&f, &entry, &caps), "report.pdf");
    }

    #[test]
    fn captures_and_missing_captures() {
        let pats = compile_patterns(&[r"^(.+)\.(\w+)$"]).expect("patterns compile");
        let entry = FileEntry::file("notes.txt", None);
        let name = entry.name_str();
        let caps = capture_groups(&pats, &name);

        assert_eq!(evaluate(&field("$0"), &entry, &caps), "notes.txt");
        assert_eq!(evaluate(&field("$2`:`$1"), &entry, &caps), "txt:notes");
        assert_eq!(evaluate(&field("`[`$3`]`"), &entry, &caps), "[]");
        assert_eq!(
            evaluate(&field("`[`$1`]`"), &entry, &CaptureGroups::default()),
            "[]"
        );
    }

    #[test]
    fn last_change_default_format() {
        let entry = FileEntry::file("a", Some(mtime(2016, 3, 7)));
        assert_eq!(
            evaluate(&field("last-change"), &entry, &CaptureGroups::default()),
            "07.03.2016"
        );
    }

    #[test]
    fn last_change_custom_format() {
        let entry = FileEntry::file("a", Some(mtime(2016, 3, 7)));
        let caps = CaptureGroups::default();
        assert_eq!(evaluate(&field("last-change:%Y"), &entry, &caps), "2016");
        assert_eq!(
            evaluate(&field("last-change:%Y-%m-%d"), &entry, &caps),
            "2016-03-07"
        );
        assert_eq!(evaluate(&field("last-change:2006"), &entry, &caps), "2006");
    }

    #[test]
    fn last_change_without_time_is_empty() {
        let entry = FileEntry::file("a", None);
        assert_eq!(
            evaluate(&field("`<`last-change`>`"), &entry, &CaptureGroups::default()),
            "<>"
        );
    }

    #[test]
    fn mtime_outside_chrono_range_is_empty() {
        let entry = FileEntry::file("a", Some(UNIX_EPOCH + Duration::from_secs(1 << 60)));
        assert_eq!(
            evaluate(&field("`<`last-change`>`"), &entry, &CaptureGroups::default()),
            "<>"
        );
    }

    #[test]
    fn mtime_before_epoch() {
        let caps = CaptureGroups::default();
        let day_before = FileEntry::file("a", Some(UNIX_EPOCH - Duration::from_secs(86_400)));
        let expected = Utc
            .timestamp_opt(-86_400, 0)
            .single()
            .expect("valid timestamp")
            .with_timezone(&Local)
            .format(DEFAULT_TIME_FORMAT)
            .to_string();
        assert_eq!(evaluate(&field("last-change"), &day_before, &caps), expected);
        assert!(expected.ends_with("1969"));

        // Sub-second offsets round toward negative infinity.
        let half_second = FileEntry::file("a", Some(UNIX_EPOCH - Duration::from_millis(500)));
        assert_eq!(evaluate(&field("last-change:%s"), &half_second, &caps), "-1");
    }
}
