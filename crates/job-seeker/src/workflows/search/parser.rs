use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::ResultSet;
use super::headline::resolve_goal;
use super::payload::{parse_payload, PayloadError};

/// What the user submitted: goal text and, optionally, a pasted payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub payload: Option<String>,
}

impl Submission {
    pub fn goal(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            payload: None,
        }
    }

    pub fn with_payload(goal: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            payload: Some(payload.into()),
        }
    }

    fn pasted_payload(&self) -> Option<&str> {
        self.payload
            .as_deref()
            .filter(|payload| !payload.trim().is_empty())
    }
}

/// Outcome of interpreting a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Free text to hand to the job search service, kept verbatim.
    Goal(String),
    /// Results the user supplied directly.
    Pasted(ResultSet),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("enter a career goal or paste a job payload")]
    EmptySubmission,
    #[error(transparent)]
    InvalidPayload(#[from] PayloadError),
}

/// Decide how a submission should be searched.
///
/// A pasted payload is parsed strictly and its errors are returned. Without
/// one, the goal text is tried as a payload and otherwise taken as a goal.
pub fn interpret(submission: &Submission) -> Result<SearchQuery, InputError> {
    if let Some(payload) = submission.pasted_payload() {
        let set = parse_payload(payload)?;
        let goal = resolve_goal(&submission.goal, set.entries());
        return Ok(SearchQuery::Pasted(set.with_goal(goal)));
    }

    if submission.goal.trim().is_empty() {
        return Err(InputError::EmptySubmission);
    }

    match parse_payload(&submission.goal) {
        Ok(set) => {
            let goal = resolve_goal("", set.entries());
            Ok(SearchQuery::Pasted(set.with_goal(goal)))
        }
        Err(reason) => {
            debug!(%reason, "goal text is not a job payload; searching by goal");
            Ok(SearchQuery::Goal(submission.goal.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::search::JobId;

    const ONE_JOB: &str = r#"{"jobs":[{"jobId":"1","resumeData":"r","coverLetterData":"c","feedback":{"matchLevel":"medium"},"jobPostingData":{"title":"Engineer","companyName":"Acme"}}]}"#;

    #[test]
    fn plain_text_becomes_a_verbatim_goal() {
        let query = interpret(&Submission::goal("Remote React Developer position"))
            .expect("plain text is accepted");
        assert_eq!(
            query,
            SearchQuery::Goal("Remote React Developer position".to_string())
        );
    }

    #[test]
    fn goal_text_that_is_a_payload_is_parsed() {
        match interpret(&Submission::goal(ONE_JOB)).expect("payload accepted") {
            SearchQuery::Pasted(set) => {
                assert_eq!(set.len(), 1);
                assert_eq!(set.entries()[0].id, JobId::new("1"));
                assert_eq!(
                    set.goal(),
                    "Looking for Engineer roles, especially at companies like Acme"
                );
            }
            other => panic!("expected pasted results, got {other:?}"),
        }
    }

    #[test]
    fn malformed_goal_text_falls_back_to_goal() {
        let query = interpret(&Submission::goal("{invalid")).expect("lenient mode");
        assert_eq!(query, SearchQuery::Goal("{invalid".to_string()));

        let wrong_shape = r#"{"jobs":[{"jobId":"1"}]}"#;
        let query = interpret(&Submission::goal(wrong_shape)).expect("lenient mode");
        assert_eq!(query, SearchQuery::Goal(wrong_shape.to_string()));
    }

    #[test]
    fn pasted_payload_is_strict() {
        let submission = Submission::with_payload("Engineering roles", "{invalid");
        match interpret(&submission) {
            Err(InputError::InvalidPayload(PayloadError::Malformed { .. })) => {}
            other => panic!("expected invalid payload, got {other:?}"),
        }
    }

    #[test]
    fn pasted_payload_keeps_caller_goal() {
        let submission = Submission::with_payload("Staff roles near Austin", ONE_JOB);
        match interpret(&submission).expect("payload accepted") {
            SearchQuery::Pasted(set) => assert_eq!(set.goal(), "Staff roles near Austin"),
            other => panic!("expected pasted results, got {other:?}"),
        }
    }

    #[test]
    fn blank_payload_is_ignored() {
        let submission = Submission::with_payload("Full Stack Developer in fintech", "  \n");
        assert_eq!(
            interpret(&submission).expect("goal accepted"),
            SearchQuery::Goal("Full Stack Developer in fintech".to_string())
        );
    }

    #[test]
    fn empty_submission_is_rejected() {
        assert_eq!(
            interpret(&Submission::goal("   ")),
            Err(InputError::EmptySubmission)
        );
        assert_eq!(
            interpret(&Submission::default()),
            Err(InputError::EmptySubmission)
        );
    }
}
