use std::collections::HashSet;

use serde::Deserialize;
use serde_json::error::Category;

use super::domain::{FeedbackRecord, JobAction, JobEntry, JobId, JobPosting, ResultSet};

/// Why a pasted or fetched document could not become a [`ResultSet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not valid JSON: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("payload does not match the job list format: {message}")]
    Schema {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("job id '{0}' appears more than once")]
    DuplicateJobId(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        let line = err.line();
        let column = err.column();
        let message = err.to_string();
        match err.classify() {
            Category::Data => Self::Schema {
                line,
                column,
                message,
            },
            Category::Syntax | Category::Eof | Category::Io => Self::Malformed {
                line,
                column,
                message,
            },
        }
    }
}

/// Validate a raw document and build the result set it describes.
///
/// The goal of the returned set is empty; callers decide between their own
/// goal text and [`super::derive_headline`].
pub fn parse_payload(raw: &str) -> Result<ResultSet, PayloadError> {
    let document: JobResponseDocument = serde_json::from_str(raw)?;
    document.into_result_set()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobResponseDocument {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    goal_id: Option<String>,
    jobs: Vec<JobRecord>,
}

impl JobResponseDocument {
    fn into_result_set(self) -> Result<ResultSet, PayloadError> {
        ensure_unique_ids(&self.jobs)?;

        let entries = self.jobs.into_iter().map(JobEntry::from).collect();
        Ok(ResultSet::new(String::new(), entries)
            .with_agent_message(self.response)
            .with_goal_id(self.goal_id))
    }
}

fn ensure_unique_ids(jobs: &[JobRecord]) -> Result<(), PayloadError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.job_id.as_str()) {
            return Err(PayloadError::DuplicateJobId(job.job_id.clone()));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobRecord {
    job_id: String,
    resume_data: String,
    cover_letter_data: String,
    feedback: FeedbackDocument,
    job_posting_data: PostingDocument,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedbackDocument {
    match_level: String,
    #[serde(default)]
    additional_comment: String,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    actions: Vec<ActionDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionDocument {
    action_type: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    target_resource: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostingDocument {
    #[serde(default)]
    id: String,
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    job_description: String,
    #[serde(default)]
    compensation_description: String,
    #[serde(default)]
    workplace_types: String,
    #[serde(default)]
    geo_location: String,
    #[serde(default)]
    experience_level: String,
}

impl From<JobRecord> for JobEntry {
    fn from(record: JobRecord) -> Self {
        let JobRecord {
            job_id,
            resume_data,
            cover_letter_data,
            feedback,
            job_posting_data: posting,
        } = record;

        JobEntry {
            id: JobId(job_id),
            posting: JobPosting {
                posting_id: posting.id,
                title: posting.title,
                company_name: posting.company_name,
                company_description: posting.company,
                description: posting.job_description,
                compensation: posting.compensation_description,
                location: posting.geo_location,
                experience_level: posting.experience_level,
                workplace_tags: workplace_tags(&posting.workplace_types),
            },
            resume: resume_data,
            cover_letter: cover_letter_data,
            feedback: FeedbackRecord {
                match_level: feedback.match_level,
                comment: feedback.additional_comment,
                suggestions: feedback.suggestions,
                actions: feedback
                    .actions
                    .into_iter()
                    .map(|action| JobAction {
                        kind: action.action_type,
                        description: action.description,
                        target_resource: action.target_resource,
                    })
                    .collect(),
            },
        }
    }
}

/// Split a bracketed list such as `[Remote]` or `["Remote", "Hybrid"]`.
pub(crate) fn workplace_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim_matches(|c: char| c == '[' || c == ']' || c == '"' || c.is_whitespace()))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: &str, title: &str) -> String {
        format!(
            r#"{{"jobId":"{id}","resumeData":"r","coverLetterData":"c","feedback":{{"matchLevel":"high"}},"jobPostingData":{{"title":"{title}","companyName":"Acme"}}}}"#
        )
    }

    #[test]
    fn parses_minimal_document_with_defaults() {
        let raw = format!(r#"{{"jobs":[{}]}}"#, job("1", "Engineer"));
        let set = parse_payload(&raw).expect("payload parses");
        assert_eq!(set.len(), 1);
        let entry = &set.entries()[0];
        assert_eq!(entry.id, JobId::new("1"));
        assert_eq!(entry.posting.title, "Engineer");
        assert!(entry.feedback.suggestions.is_empty());
        assert!(entry.posting.workplace_tags.is_empty());
        assert_eq!(set.goal(), "");
        assert!(set.agent_message().is_none());
    }

    #[test]
    fn keeps_source_order() {
        let raw = format!(
            r#"{{"response":"Picked 3","goalId":"g-1","jobs":[{},{},{}]}}"#,
            job("c", "Third"),
            job("a", "First"),
            job("b", "Second")
        );
        let set = parse_payload(&raw).expect("payload parses");
        let ids: Vec<&str> = set.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(set.agent_message(), Some("Picked 3"));
        assert_eq!(set.goal_id(), Some("g-1"));
    }

    #[test]
    fn classifies_syntax_errors_as_malformed() {
        match parse_payload("{invalid") {
            Err(PayloadError::Malformed { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected malformed payload, got {other:?}"),
        }
    }

    #[test]
    fn classifies_missing_fields_as_schema_errors() {
        let raw = r#"{"jobs":[{"jobId":"1","resumeData":"r","coverLetterData":"c","feedback":{"matchLevel":"low"}}]}"#;
        match parse_payload(raw) {
            Err(PayloadError::Schema { message, .. }) => {
                assert!(message.contains("jobPostingData"), "{message}")
            }
            other => panic!("expected schema error, got {other:?}"),
        }
        assert!(matches!(
            parse_payload(r#"{"jobs":5}"#),
            Err(PayloadError::Schema { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_identifiers() {
        let raw = format!(r#"{{"jobs":[{},{}]}}"#, job("7", "A"), job("7", "B"));
        assert_eq!(
            parse_payload(&raw),
            Err(PayloadError::DuplicateJobId("7".to_string()))
        );
    }

    #[test]
    fn empty_job_list_is_a_valid_empty_set() {
        let set = parse_payload(r#"{"jobs":[]}"#).expect("empty list parses");
        assert!(set.is_empty());
    }

    #[test]
    fn workplace_tags_strip_brackets_and_quotes() {
        assert_eq!(workplace_tags("[Remote]"), ["Remote"]);
        assert_eq!(workplace_tags(r#"["Remote", "Hybrid"]"#), ["Remote", "Hybrid"]);
        assert!(workplace_tags("[]").is_empty());
    }
}
