//! Equivalence rule codec.
//!
//! Converts between equivalence groups and the rule strings stored in a synonym
//! map. Every rule is an equivalency rule: all terms of a group are mutually
//! interchangeable, there is no `=>` target term.
//!
//! The comma is the term separator and cannot be escaped, so a term containing a
//! comma is split into two terms when decoded. Rules are stored newline
//! separated, so a term containing a line break splits its group into two rules.

use synonym_manager_shared::EquivalenceGroup;

/// Separator written between the terms of a rule.
pub const TERM_SEPARATOR: &str = ", ";

/// Encode equivalence groups into one rule string per group, in order.
pub fn encode(groups: &[EquivalenceGroup]) -> Vec<String> {
    groups.iter().map(|group| group.join(TERM_SEPARATOR)).collect()
}

/// Decode rule strings into one equivalence group per rule, in order.
pub fn decode<S: AsRef<str>>(rules: &[S]) -> Vec<EquivalenceGroup> {
    rules.iter().map(|rule| decode_rule(rule.as_ref())).collect()
}

/// Decode a single rule, trimming whitespace around each term.
pub fn decode_rule(rule: &str) -> EquivalenceGroup {
    rule.split(',').map(|term| term.trim().to_string()).collect()
}
