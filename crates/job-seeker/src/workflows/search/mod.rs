//! Goal/payload intake: turns what the user typed or pasted into a search
//! query and runs it against a [`JobSearchService`].

mod catalog;
pub mod domain;
mod headline;
mod parser;
mod payload;
pub mod service;

pub use catalog::{sample_result_set, EXAMPLE_GOALS, SAMPLE_PAYLOAD};
pub use domain::{FeedbackRecord, JobAction, JobEntry, JobId, JobPosting, ResultSet};
pub use headline::{derive_headline, resolve_goal};
pub use parser::{interpret, InputError, SearchQuery, Submission};
pub use payload::{parse_payload, PayloadError};
pub use service::{InMemoryJobSearch, JobSearchService, RemoteJobSearch, SearchError};
