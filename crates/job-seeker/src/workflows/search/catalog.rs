use super::domain::ResultSet;
use super::payload::{parse_payload, PayloadError};

/// Mocked agent response used by the in-memory search and the CLI demo.
pub const SAMPLE_PAYLOAD: &str = include_str!("../../../data/sample_jobs.json");

/// Suggestions offered under the goal input.
pub const EXAMPLE_GOALS: [&str; 4] = [
    "Senior Frontend Engineer in San Francisco",
    "Remote React Developer position",
    "Engineering Manager role at a startup",
    "Full Stack Developer in fintech",
];

pub fn sample_result_set() -> Result<ResultSet, PayloadError> {
    parse_payload(SAMPLE_PAYLOAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_payload_is_valid() {
        let set = sample_result_set().expect("bundled sample parses");
        assert_eq!(set.len(), 3);
        assert_eq!(set.entries()[0].posting.company_name, "Stripe");
        assert_eq!(set.entries()[1].posting.workplace_tags, ["Remote", "Hybrid"]);
        assert!(!set.entries()[2].posting.has_compensation());
        assert!(set.agent_message().is_some());
    }
}
