use serde::{Deserialize, Serialize};
use tracing::debug;

use super::materials::{ApplicantProfile, ContactCard, ScreeningQuestion};
use super::service::SubmissionReceipt;
use crate::render::{render_markdown, sanitize_rich_text};
use crate::workflows::search::{JobEntry, JobId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    ContactInfo,
    CoverLetter,
    Resume,
    Questions,
    Success,
}

impl WizardStep {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::ContactInfo,
            Self::CoverLetter,
            Self::Resume,
            Self::Questions,
            Self::Success,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ContactInfo => "Contact Info",
            Self::CoverLetter => "Cover Letter",
            Self::Resume => "Resume",
            Self::Questions => "Questions",
            Self::Success => "Success",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::ContactInfo => 0,
            Self::CoverLetter => 1,
            Self::Resume => 2,
            Self::Questions => 3,
            Self::Success => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ordered().get(index).copied()
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success)
    }

    /// The step that is left by submitting instead of advancing.
    pub const fn is_final_review(self) -> bool {
        matches!(self, Self::Questions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("an application submission is already in flight")]
    SubmissionInFlight,
    #[error("the final review step is completed by submitting the application")]
    SubmitRequired,
    #[error("the application has already been submitted")]
    AlreadySubmitted,
    #[error("already at the first step")]
    AtFirstStep,
    #[error("the application can only be submitted from the final review step")]
    NotOnReviewStep,
    #[error("required screening questions are unanswered: {0}")]
    UnansweredQuestions(String),
    #[error("no submission is in flight")]
    NotSubmitting,
}

/// Linear "apply to this job" flow for one entry.
///
/// Rejected transitions return an error and leave the wizard untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyWizard {
    job_id: JobId,
    step: WizardStep,
    submitting: bool,
    last_error: Option<String>,
    receipt: Option<SubmissionReceipt>,
}

impl ApplyWizard {
    pub fn open(job_id: JobId) -> Self {
        Self {
            job_id,
            step: WizardStep::ContactInfo,
            submitting: false,
            last_error: None,
            receipt: None,
        }
    }

    pub fn job_id(&self) -> &JobId {
        &self.job_id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn progress_percent(&self) -> u8 {
        ((self.step.index() + 1) * 100 / WizardStep::COUNT) as u8
    }

    pub fn can_advance(&self) -> bool {
        !self.submitting && !self.step.is_terminal() && !self.step.is_final_review()
    }

    pub fn can_retreat(&self) -> bool {
        !self.submitting && self.step.index() > 0 && !self.step.is_terminal()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.step.is_final_review()
    }

    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if self.step.is_terminal() {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.step.is_final_review() {
            return Err(WizardError::SubmitRequired);
        }
        self.move_to(self.step.index() + 1);
        Ok(self.step)
    }

    pub fn retreat(&mut self) -> Result<WizardStep, WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if self.step.is_terminal() {
            return Err(WizardError::AlreadySubmitted);
        }
        if self.step.index() == 0 {
            return Err(WizardError::AtFirstStep);
        }
        self.move_to(self.step.index() - 1);
        Ok(self.step)
    }

    /// Enter the submitting state. Only one submission may be in flight.
    pub fn begin_submit(&mut self, profile: &ApplicantProfile) -> Result<(), WizardError> {
        if self.submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if self.step.is_terminal() {
            return Err(WizardError::AlreadySubmitted);
        }
        if !self.step.is_final_review() {
            return Err(WizardError::NotOnReviewStep);
        }

        let missing = profile.unanswered_required();
        if !missing.is_empty() {
            let questions = missing
                .iter()
                .map(|question| question.question.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(WizardError::UnansweredQuestions(questions));
        }

        self.submitting = true;
        self.last_error = None;
        debug!(job_id = %self.job_id, "application submission started");
        Ok(())
    }

    pub fn complete_submit(
        &mut self,
        receipt: SubmissionReceipt,
    ) -> Result<WizardStep, WizardError> {
        if !self.submitting {
            return Err(WizardError::NotSubmitting);
        }
        self.submitting = false;
        self.receipt = Some(receipt);
        self.step = WizardStep::Success;
        Ok(self.step)
    }

    /// Leave the submitting state after a failed submission, staying on the
    /// final review step so the applicant can retry.
    pub fn fail_submit(&mut self, reason: impl Into<String>) -> Result<(), WizardError> {
        if !self.submitting {
            return Err(WizardError::NotSubmitting);
        }
        self.submitting = false;
        self.last_error = Some(reason.into());
        Ok(())
    }

    fn move_to(&mut self, index: usize) {
        if let Some(step) = WizardStep::from_index(index) {
            self.step = step;
            self.last_error = None;
        }
    }

    pub fn view(&self, entry: &JobEntry, profile: &ApplicantProfile) -> WizardView {
        let content = match self.step {
            WizardStep::ContactInfo => StepContent::ContactInfo {
                initials: profile.contact.initials(),
                contact: profile.contact.clone(),
                note: "We'll use this info to contact you about your application".to_string(),
            },
            WizardStep::CoverLetter => StepContent::CoverLetter {
                file_name: profile.cover_letter_file_name.clone(),
                html: sanitize_rich_text(&entry.cover_letter),
            },
            WizardStep::Resume => StepContent::Resume {
                file_name: profile.resume_file_name.clone(),
                html: render_markdown(&entry.resume),
            },
            WizardStep::Questions => StepContent::Questions {
                questions: profile.screening.clone(),
            },
            WizardStep::Success => StepContent::Success {
                message: format!(
                    "Your application has been submitted to {}",
                    entry.posting.company_name
                ),
                receipt: self.receipt.clone(),
            },
        };

        WizardView {
            job_id: self.job_id.clone(),
            job_title: entry.posting.title.clone(),
            company_name: entry.posting.company_name.clone(),
            step: self.step,
            step_label: self.step.label(),
            progress_percent: self.progress_percent(),
            steps: WizardStep::ordered()
                .into_iter()
                .map(|step| StepMarker {
                    label: step.label(),
                    current: step == self.step,
                })
                .collect(),
            can_advance: self.can_advance(),
            can_retreat: self.can_retreat(),
            can_submit: self.can_submit(),
            submitting: self.submitting,
            last_error: self.last_error.clone(),
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StepMarker {
    pub label: &'static str,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepContent {
    ContactInfo {
        contact: ContactCard,
        initials: String,
        note: String,
    },
    CoverLetter {
        file_name: String,
        html: String,
    },
    Resume {
        file_name: String,
        html: String,
    },
    Questions {
        questions: Vec<ScreeningQuestion>,
    },
    Success {
        message: String,
        receipt: Option<SubmissionReceipt>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub job_id: JobId,
    pub job_title: String,
    pub company_name: String,
    pub step: WizardStep,
    pub step_label: &'static str,
    pub progress_percent: u8,
    pub steps: Vec<StepMarker>,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub can_submit: bool,
    pub submitting: bool,
    pub last_error: Option<String>,
    pub content: StepContent,
}
