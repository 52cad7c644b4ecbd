use std::collections::HashSet;

/// Parses a terms list: one term per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are ignored.
/// Duplicates are dropped, keeping the first occurrence.
pub fn parse_terms(text: &str) -> Vec<String> {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    merge_terms(Vec::new(), lines)
}

/// Appends `extra` to `terms`, skipping anything already present.
pub fn merge_terms<I, S>(mut terms: Vec<String>, extra: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<String> = terms.iter().cloned().collect();
    for term in extra {
        let term = term.as_ref().trim();
        if term.is_empty() {
            continue;
        }
        if seen.insert(term.to_string()) {
            terms.push(term.to_string());
        }
    }
    terms
}
