use chrono::{TimeZone, Utc};

use crate::workflows::apply::{ApplicationStatus, ApplyWizard, SubmissionReceipt};
use crate::workflows::search::{sample_result_set, JobEntry, JobId};

pub(super) fn entry() -> JobEntry {
    sample_result_set().expect("sample parses").entries()[0].clone()
}

pub(super) fn receipt(job_id: &JobId) -> SubmissionReceipt {
    SubmissionReceipt {
        confirmation_id: "apl-000042".to_string(),
        job_id: job_id.clone(),
        job_title: "Frontend Engineer, UI Components and Patterns".to_string(),
        company_name: "Stripe".to_string(),
        submitted_at: Utc
            .with_ymd_and_hms(2025, 3, 15, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
        status: ApplicationStatus::Applied,
    }
}

/// A wizard walked forward to the final review step.
pub(super) fn wizard_at_review() -> ApplyWizard {
    let mut wizard = ApplyWizard::open(entry().id);
    for _ in 0..3 {
        wizard.advance().expect("advance to review");
    }
    wizard
}
