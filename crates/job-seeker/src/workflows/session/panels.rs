use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::store::ResultStore;
use crate::render::{render_markdown, sanitize_rich_text};
use crate::workflows::search::{JobEntry, JobId, ResultSet};

#[derive(Debug, Clone, Serialize)]
pub struct ListRow {
    pub job_id: JobId,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub match_label: String,
    pub high_match: bool,
    pub tips_label: String,
    pub comment: String,
    pub selected: bool,
}

/// Selectable job list, one row per entry in result order.
#[derive(Debug, Clone, Serialize)]
pub struct ListPanel {
    pub heading: &'static str,
    pub count_label: String,
    pub rows: Vec<ListRow>,
}

impl ListPanel {
    pub fn build(results: &ResultSet, selected: Option<&JobId>) -> Self {
        let rows = results
            .entries()
            .iter()
            .map(|entry| ListRow {
                job_id: entry.id.clone(),
                title: entry.posting.title.clone(),
                company_name: entry.posting.company_name.clone(),
                location: entry.posting.location.clone(),
                match_label: format!("{} Match", entry.feedback.match_label()),
                high_match: entry.feedback.is_high_match(),
                tips_label: format!("{} Tips", entry.feedback.suggestions.len()),
                comment: entry.feedback.comment.clone(),
                selected: selected == Some(&entry.id),
            })
            .collect();

        Self {
            heading: "Job Recommendations",
            count_label: format!("{} matches found", results.len()),
            rows,
        }
    }
}

/// Named views of the selected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailView {
    #[default]
    Posting,
    Resume,
    CoverLetter,
    Feedback,
}

impl DetailView {
    pub const fn ordered() -> [Self; 4] {
        [Self::Posting, Self::Resume, Self::CoverLetter, Self::Feedback]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Posting => "Job Details",
            Self::Resume => "Resume",
            Self::CoverLetter => "Cover Letter",
            Self::Feedback => "Agent Feedback",
        }
    }

    /// Path segment identifying the view in URLs.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Posting => "posting",
            Self::Resume => "resume",
            Self::CoverLetter => "cover-letter",
            Self::Feedback => "feedback",
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown detail view '{0}'")]
pub struct UnknownDetailView(pub String);

impl FromStr for DetailView {
    type Err = UnknownDetailView;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|view| view.slug() == value)
            .ok_or_else(|| UnknownDetailView(value.to_string()))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TabMarker {
    pub view: DetailView,
    pub label: &'static str,
    pub slug: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostingView {
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub workplace_tags: Vec<String>,
    pub compensation: Option<String>,
    pub experience_level: String,
    /// Sanitized with the rich-text allow-list.
    pub company_html: String,
    pub description_html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionView {
    pub description: String,
    pub kind_label: String,
    pub target_resource: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackView {
    pub match_label: String,
    pub high_match: bool,
    pub comment: String,
    pub suggestions: Vec<String>,
    pub actions: Vec<ActionView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum DetailContent {
    Posting(PostingView),
    Resume { html: String },
    CoverLetter { html: String },
    Feedback(FeedbackView),
}

impl DetailContent {
    fn render(entry: &JobEntry, view: DetailView) -> Self {
        match view {
            DetailView::Posting => {
                let posting = &entry.posting;
                Self::Posting(PostingView {
                    title: posting.title.clone(),
                    company_name: posting.company_name.clone(),
                    location: posting.location.clone(),
                    workplace_tags: posting.workplace_tags.clone(),
                    compensation: posting
                        .has_compensation()
                        .then(|| posting.compensation.clone()),
                    experience_level: posting.experience_level.clone(),
                    company_html: sanitize_rich_text(&posting.company_description),
                    description_html: render_markdown(&posting.description),
                })
            }
            DetailView::Resume => Self::Resume {
                html: render_markdown(&entry.resume),
            },
            DetailView::CoverLetter => Self::CoverLetter {
                html: sanitize_rich_text(&entry.cover_letter),
            },
            DetailView::Feedback => {
                let feedback = &entry.feedback;
                Self::Feedback(FeedbackView {
                    match_label: feedback.match_label(),
                    high_match: feedback.is_high_match(),
                    comment: feedback.comment.clone(),
                    suggestions: feedback.suggestions.clone(),
                    actions: feedback
                        .actions
                        .iter()
                        .map(|action| ActionView {
                            description: action.description.clone(),
                            kind_label: format!("Action Type: {}", action.kind),
                            target_resource: action.target_resource.clone(),
                        })
                        .collect(),
                })
            }
        }
    }
}

pub const SELECT_PROMPT: &str = "Select a job from the list to view details";

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailPanel {
    Prompt {
        message: &'static str,
    },
    Showing {
        job_id: JobId,
        tabs: Vec<TabMarker>,
        content: DetailContent,
    },
}

impl DetailPanel {
    /// Render only the active view of the current selection.
    pub fn build(store: &ResultStore, active: DetailView) -> Self {
        let Some(entry) = store.selection() else {
            return Self::Prompt {
                message: SELECT_PROMPT,
            };
        };

        let tabs = DetailView::ordered()
            .into_iter()
            .map(|view| TabMarker {
                view,
                label: view.label(),
                slug: view.slug(),
                active: view == active,
            })
            .collect();

        Self::Showing {
            job_id: entry.id.clone(),
            tabs,
            content: DetailContent::render(entry, active),
        }
    }
}
