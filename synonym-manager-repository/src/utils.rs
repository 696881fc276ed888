//! Utility functions for the synonym manager repository.

use std::collections::HashSet;

/// Remove duplicate names, keeping the first occurrence of each.
///
/// # Example
///
/// ```
/// use synonym_manager_repository::unique_in_order;
///
/// let names = unique_in_order(["b", "a", "b", "c", "a"]);
/// assert_eq!(names, vec!["b", "a", "c"]);
/// ```
pub fn unique_in_order<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
