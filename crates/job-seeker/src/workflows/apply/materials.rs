use serde::{Deserialize, Serialize};

use crate::workflows::search::{JobEntry, JobId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
}

impl ContactCard {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningQuestion {
    pub id: u32,
    pub question: String,
    pub answer: String,
    pub required: bool,
}

impl ScreeningQuestion {
    pub fn is_unanswered(&self) -> bool {
        self.required && self.answer.trim().is_empty()
    }
}

/// The applicant the demo applies on behalf of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub contact: ContactCard,
    pub screening: Vec<ScreeningQuestion>,
    pub resume_file_name: String,
    pub cover_letter_file_name: String,
}

impl Default for ApplicantProfile {
    fn default() -> Self {
        let question = |id: u32, question: &str, answer: &str, required: bool| ScreeningQuestion {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            required,
        };

        Self {
            contact: ContactCard {
                name: "Justin Lai".to_string(),
                headline: "Engineering Manager".to_string(),
                email: "julai@example.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                linkedin: "linkedin.com/in/julai".to_string(),
            },
            screening: vec![
                question(
                    1,
                    "How many years of experience do you have with React?",
                    "I have 5 years of professional experience working with React, including building large-scale applications and design systems.",
                    true,
                ),
                question(
                    2,
                    "Are you authorized to work in the United States?",
                    "Yes, I am authorized to work in the United States.",
                    true,
                ),
                question(
                    3,
                    "Are you willing to work remotely?",
                    "Yes, I have 3 years of experience working in remote-first companies and am well-equipped for remote work.",
                    true,
                ),
                question(
                    4,
                    "What is your expected salary range?",
                    "My expected salary range is $130,000 - $180,000 annually, depending on the total compensation package.",
                    false,
                ),
            ],
            resume_file_name: "justin-lai-resume.pdf".to_string(),
            cover_letter_file_name: "cover-letter.pdf".to_string(),
        }
    }
}

impl ApplicantProfile {
    pub fn unanswered_required(&self) -> Vec<&ScreeningQuestion> {
        self.screening
            .iter()
            .filter(|question| question.is_unanswered())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningAnswer {
    pub question: String,
    pub answer: String,
}

/// Everything sent when the applicant confirms the final review step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPacket {
    pub job_id: JobId,
    pub job_title: String,
    pub company_name: String,
    pub contact: ContactCard,
    pub cover_letter: String,
    pub resume: String,
    pub answers: Vec<ScreeningAnswer>,
}

impl ApplicationPacket {
    pub fn assemble(entry: &JobEntry, profile: &ApplicantProfile) -> Self {
        Self {
            job_id: entry.id.clone(),
            job_title: entry.posting.title.clone(),
            company_name: entry.posting.company_name.clone(),
            contact: profile.contact.clone(),
            cover_letter: entry.cover_letter.clone(),
            resume: entry.resume.clone(),
            answers: profile
                .screening
                .iter()
                .map(|question| ScreeningAnswer {
                    question: question.question.clone(),
                    answer: question.answer.clone(),
                })
                .collect(),
        }
    }
}
