use regex::Regex;
use std::{collections::HashSet, sync::LazyLock};

// Squash merges append "(#1234)" to the subject. Anchored at the end so a
// number mentioned mid-sentence is never picked up.
static ISSUE_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(#([0-9]{1,6})\)$").unwrap());

/// Extract the issue or pull request number a subject line ends with.
pub fn extract_issue_reference(subject: &str) -> Option<u64> {
    ISSUE_REFERENCE_REGEX
        .captures(subject)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
}

/// True when the subject ends exactly with `(#<number>)`.
pub fn subject_references_issue(subject: &str, number: u64) -> bool {
    subject.ends_with(&format!("(#{number})"))
}

/// `git log --grep` pattern matching messages with a line ending in
/// `(#<number>)`. Parentheses are literal in git's basic regex syntax.
pub fn grep_pattern(number: u64) -> String {
    format!("(#{number})$")
}

/// Issue numbers already documented in release notes, found with the same
/// end-anchored pattern applied to every line.
pub fn documented_issue_numbers(release_notes: &str) -> HashSet<u64> {
    release_notes
        .lines()
        .filter_map(|line| extract_issue_reference(line.trim_end()))
        .collect()
}
