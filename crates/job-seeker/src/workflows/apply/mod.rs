//! The modal "apply to this job" flow: a five-step wizard over the selected
//! entry, the mocked applicant it applies for, and the submission seam.

pub mod materials;
pub mod service;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use materials::{
    ApplicantProfile, ApplicationPacket, ContactCard, ScreeningAnswer, ScreeningQuestion,
};
pub use service::{
    ApplicationStatus, ApplicationSubmissionService, InMemorySubmissions, RemoteSubmissions,
    SubmissionError, SubmissionReceipt,
};
pub use wizard::{ApplyWizard, StepContent, StepMarker, WizardError, WizardStep, WizardView};
