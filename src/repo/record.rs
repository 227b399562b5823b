//! Parsing of delimited `git log` output into commit records.
use chrono::{DateTime, FixedOffset};

use crate::{error::CrossrefError, result::Result};

/// Separates one commit record from the next.
pub const RECORD_SEPARATOR: char = '\x1e';
/// Separates the fields of a single commit record.
pub const FIELD_SEPARATOR: char = '\x1f';
/// Number of fields emitted per record by [`LOG_FORMAT`].
pub const FIELD_COUNT: usize = 6;

/// `--format` argument producing id, author name, author email, strict ISO
/// author date, subject and body per commit.
pub const LOG_FORMAT: &str = "%x1e%H%x1f%an%x1f%ae%x1f%aI%x1f%s%x1f%b";

/// A single commit read from the version control log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub id: String,
    pub author_name: String,
    pub author_email: String,
    pub date: DateTime<FixedOffset>,
    pub subject: String,
    pub body: String,
}

/// Split raw log output into records, preserving git's emission order.
///
/// Commit messages containing either separator corrupt the split; project
/// convention keeps them out, so they are not validated here.
pub fn parse_log_output(output: &str) -> Result<Vec<CommitRecord>> {
    let mut records = vec![];

    for chunk in output.split(RECORD_SEPARATOR) {
        if chunk.trim().is_empty() {
            continue;
        }

        let fields = chunk.split(FIELD_SEPARATOR).collect::<Vec<&str>>();

        if fields.len() != FIELD_COUNT {
            return Err(CrossrefError::MalformedLogRecord {
                expected: FIELD_COUNT,
                found: fields.len(),
            }
            .into());
        }

        records.push(CommitRecord {
            id: fields[0].trim().to_string(),
            author_name: fields[1].to_string(),
            author_email: fields[2].to_string(),
            date: DateTime::parse_from_rfc3339(fields[3].trim())?,
            subject: fields[4].to_string(),
            body: fields[5].trim_end().to_string(),
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, subject: &str, body: &str) -> String {
        format!(
            "\x1e{id}\x1fJane Doe\x1fjane@example.com\x1f2024-03-01T10:15:00+01:00\x1f{subject}\x1f{body}\n"
        )
    }

    #[test]
    fn parses_records_in_emitted_order() {
        let output = format!(
            "{}{}",
            record("bbb", "Second change (#20)", "details\n\nmore"),
            record("aaa", "First change (#10)", "")
        );

        let records = parse_log_output(&output).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "bbb");
        assert_eq!(records[0].subject, "Second change (#20)");
        assert_eq!(records[0].body, "details\n\nmore");
        assert_eq!(records[0].author_name, "Jane Doe");
        assert_eq!(records[0].author_email, "jane@example.com");
        assert_eq!(records[0].date.to_rfc3339(), "2024-03-01T10:15:00+01:00");
        assert_eq!(records[1].id, "aaa");
        assert_eq!(records[1].body, "");
    }

    #[test]
    fn empty_output_yields_no_records() {
        assert!(parse_log_output("").unwrap().is_empty());
        assert!(parse_log_output("\n").unwrap().is_empty());
    }

    #[test]
    fn rejects_records_with_wrong_field_count() {
        let output = "\x1eabc\x1fJane\x1f2024-03-01T10:15:00Z\n";
        let err = parse_log_output(output).unwrap_err();
        let err = err.downcast_ref::<CrossrefError>().unwrap();
        assert!(matches!(
            err,
            CrossrefError::MalformedLogRecord {
                expected: 6,
                found: 3
            }
        ));
    }

    #[test]
    fn separator_inside_body_corrupts_record() {
        let output = record("abc", "Subject", "body with \x1f inside");
        assert!(parse_log_output(&output).is_err());
    }
}
