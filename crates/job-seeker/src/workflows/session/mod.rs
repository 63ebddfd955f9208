//! Per-visitor UI state: the active result set and selection, the detail tab,
//! the apply wizard and the inline notice, plus the view models rendered
//! from them.

mod flight;
mod panels;
mod store;

pub use flight::{FlightGuard, SingleFlight};
pub use panels::{
    ActionView, DetailContent, DetailPanel, DetailView, FeedbackView, ListPanel, ListRow,
    PostingView, TabMarker, UnknownDetailView, SELECT_PROMPT,
};
pub use store::ResultStore;

use serde::Serialize;
use tracing::{debug, info};

use crate::workflows::apply::{
    ApplicantProfile, ApplicationPacket, ApplyWizard, SubmissionReceipt, WizardError,
    WizardStep, WizardView,
};
use crate::workflows::search::{InputError, JobId, ResultSet, Submission};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("select a job before applying")]
    NoSelection,
    #[error("the application wizard is not open")]
    WizardClosed,
    #[error(transparent)]
    Wizard(#[from] WizardError),
}

#[derive(Debug, Default)]
pub struct DemoSession {
    store: ResultStore,
    view: DetailView,
    wizard: Option<ApplyWizard>,
    notice: Option<String>,
    draft: Option<Submission>,
}

impl DemoSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn active_view(&self) -> DetailView {
        self.view
    }

    pub fn wizard(&self) -> Option<&ApplyWizard> {
        self.wizard.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Replace the visible results. Any open wizard belongs to the old set
    /// and is closed.
    pub fn apply_result_set(&mut self, results: ResultSet) {
        info!(matches = results.len(), goal = %results.goal(), "showing results");
        self.store.set_result_set(results);
        self.view = DetailView::default();
        self.wizard = None;
        self.notice = None;
        self.draft = None;
    }

    /// Keep the current results and show why the submission was refused. The
    /// submission is kept so the form can be redisplayed as typed.
    pub fn reject_input(&mut self, submission: Submission, error: &InputError) {
        debug!(%error, "submission rejected");
        self.notice = Some(error.to_string());
        self.draft = Some(submission);
    }

    /// Show a message that is not tied to a submission, such as a backend
    /// failure.
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Drop everything and return to the goal input form.
    pub fn reset(&mut self) {
        self.store.clear();
        self.view = DetailView::default();
        self.wizard = None;
        self.notice = None;
        self.draft = None;
    }

    /// Select an entry. Unknown identifiers are ignored and return `false`.
    pub fn select(&mut self, id: &JobId) -> bool {
        if !self.store.select(id) {
            return false;
        }
        if self
            .wizard
            .as_ref()
            .is_some_and(|wizard| wizard.job_id() != id)
        {
            debug!(job_id = %id, "selection changed; closing wizard");
            self.wizard = None;
        }
        true
    }

    pub fn show_view(&mut self, view: DetailView) {
        self.view = view;
    }

    /// Start a fresh wizard for the selected entry.
    pub fn open_wizard(&mut self) -> Result<&ApplyWizard, SessionError> {
        let id = self
            .store
            .selected_id()
            .cloned()
            .ok_or(SessionError::NoSelection)?;
        debug!(job_id = %id, "wizard opened");
        Ok(&*self.wizard.insert(ApplyWizard::open(id)))
    }

    pub fn close_wizard(&mut self) {
        self.wizard = None;
    }

    pub fn wizard_advance(&mut self) -> Result<WizardStep, SessionError> {
        Ok(self.wizard_mut()?.advance()?)
    }

    pub fn wizard_retreat(&mut self) -> Result<WizardStep, SessionError> {
        Ok(self.wizard_mut()?.retreat()?)
    }

    /// Mark the open wizard as submitting and assemble what will be sent.
    pub fn wizard_begin_submit(
        &mut self,
        profile: &ApplicantProfile,
    ) -> Result<ApplicationPacket, SessionError> {
        let wizard = self.wizard.as_mut().ok_or(SessionError::WizardClosed)?;
        let entry = self
            .store
            .result_set()
            .and_then(|results| results.get(wizard.job_id()))
            .ok_or(SessionError::NoSelection)?;

        wizard.begin_submit(profile)?;
        Ok(ApplicationPacket::assemble(entry, profile))
    }

    /// Deliver a receipt to the wizard that started the submission. Returns
    /// `false` when that wizard has since been closed or replaced.
    pub fn wizard_complete_submit(&mut self, job_id: &JobId, receipt: SubmissionReceipt) -> bool {
        match self.submitting_wizard(job_id) {
            Some(wizard) => wizard.complete_submit(receipt).is_ok(),
            None => {
                debug!(%job_id, "dropping receipt for a closed wizard");
                false
            }
        }
    }

    pub fn wizard_fail_submit(&mut self, job_id: &JobId, reason: impl Into<String>) -> bool {
        match self.submitting_wizard(job_id) {
            Some(wizard) => wizard.fail_submit(reason).is_ok(),
            None => {
                debug!(%job_id, "dropping failure for a closed wizard");
                false
            }
        }
    }

    fn wizard_mut(&mut self) -> Result<&mut ApplyWizard, SessionError> {
        self.wizard.as_mut().ok_or(SessionError::WizardClosed)
    }

    fn submitting_wizard(&mut self, job_id: &JobId) -> Option<&mut ApplyWizard> {
        self.wizard
            .as_mut()
            .filter(|wizard| wizard.job_id() == job_id && wizard.is_submitting())
    }

    pub fn snapshot(&self, profile: &ApplicantProfile) -> SessionSnapshot {
        let results = self.store.result_set();
        let wizard = self.wizard.as_ref().and_then(|wizard| {
            let entry = results?.get(wizard.job_id())?;
            Some(wizard.view(entry, profile))
        });

        SessionSnapshot {
            goal: results.map(|set| set.goal().to_string()),
            agent_message: results.and_then(|set| set.agent_message().map(str::to_string)),
            list: results.map(|set| ListPanel::build(set, self.store.selected_id())),
            detail: results.map(|_| DetailPanel::build(&self.store, self.view)),
            wizard,
            notice: self.notice.clone(),
            draft: self.draft.clone(),
        }
    }
}

/// Everything the page needs, computed from the session in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub goal: Option<String>,
    pub agent_message: Option<String>,
    pub list: Option<ListPanel>,
    pub detail: Option<DetailPanel>,
    pub wizard: Option<WizardView>,
    pub notice: Option<String>,
    pub draft: Option<Submission>,
}

impl SessionSnapshot {
    pub fn has_results(&self) -> bool {
        self.list.is_some()
    }
}
