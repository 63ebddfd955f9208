use super::domain::JobEntry;

/// Headline describing a pasted result set when the caller gave no goal.
/// Only the first entry is consulted.
pub fn derive_headline(entries: &[JobEntry]) -> Option<String> {
    let first = entries.first()?;
    let posting = &first.posting;
    let company = posting.company_name.trim();

    let mut headline = format!("Looking for {} roles", posting.title.trim());
    if !company.is_empty() {
        headline.push_str(", especially at companies like ");
        headline.push_str(company);
    }
    Some(headline)
}

/// The caller's goal wins over the derived headline.
pub fn resolve_goal(caller_goal: &str, entries: &[JobEntry]) -> String {
    if caller_goal.trim().is_empty() {
        derive_headline(entries).unwrap_or_default()
    } else {
        caller_goal.to_string()
    }
}
