use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a job entry, unique within one result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The advertised posting behind an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub posting_id: String,
    pub title: String,
    pub company_name: String,
    /// Narrative "about the company" text; may contain markup.
    pub company_description: String,
    /// Markdown job description.
    pub description: String,
    pub compensation: String,
    pub location: String,
    pub experience_level: String,
    pub workplace_tags: Vec<String>,
}

impl JobPosting {
    pub fn has_compensation(&self) -> bool {
        !self.compensation.trim().is_empty()
    }
}

/// A follow-up the agent recommends; all fields are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobAction {
    pub kind: String,
    pub description: String,
    pub target_resource: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Opaque match level such as "high", "medium" or "low".
    pub match_level: String,
    pub comment: String,
    pub suggestions: Vec<String>,
    pub actions: Vec<JobAction>,
}

impl FeedbackRecord {
    /// Upper-cased match level for badges.
    pub fn match_label(&self) -> String {
        self.match_level.to_uppercase()
    }

    pub fn is_high_match(&self) -> bool {
        self.match_level.eq_ignore_ascii_case("high")
    }
}

/// One posting plus the materials generated for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntry {
    pub id: JobId,
    pub posting: JobPosting,
    /// Markdown resume tailored to the posting.
    pub resume: String,
    /// Cover letter; may contain markup.
    pub cover_letter: String,
    pub feedback: FeedbackRecord,
}

/// Ordered entries produced by one search, plus the goal that produced them.
///
/// Entries keep their source order and cannot be edited after construction;
/// a new search replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    goal: String,
    agent_message: Option<String>,
    goal_id: Option<String>,
    entries: Vec<JobEntry>,
}

impl ResultSet {
    pub fn new(goal: impl Into<String>, entries: Vec<JobEntry>) -> Self {
        Self {
            goal: goal.into(),
            agent_message: None,
            goal_id: None,
            entries,
        }
    }

    pub fn with_agent_message(mut self, message: Option<String>) -> Self {
        self.agent_message = message.filter(|text| !text.trim().is_empty());
        self
    }

    pub fn with_goal_id(mut self, goal_id: Option<String>) -> Self {
        self.goal_id = goal_id.filter(|text| !text.trim().is_empty());
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn agent_message(&self) -> Option<&str> {
        self.agent_message.as_deref()
    }

    pub fn goal_id(&self) -> Option<&str> {
        self.goal_id.as_deref()
    }

    pub fn entries(&self) -> &[JobEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &JobId) -> Option<&JobEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn contains(&self, id: &JobId) -> bool {
        self.get(id).is_some()
    }
}
