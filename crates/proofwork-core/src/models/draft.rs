//! Form input headed for the store: new work submissions and profile edits.

use serde::Serialize;

use super::submission::{ProjectSubmission, SubmissionStatus};
use super::user::UserRecord;
use super::parse_list;
use crate::errors::SubmissionError;

/// A work submission as filled in on the submit form.
///
/// # Examples
///
/// ```
/// use proofwork_core::models::{SubmissionDraft, SubmissionStatus};
///
/// let submission = SubmissionDraft::new("Inventory API", "REST service for stock levels")
///     .technologies("Rust, Axum")
///     .certify(true, true)
///     .into_pending()
///     .unwrap();
/// assert_eq!(submission.status, SubmissionStatus::Pending);
/// assert!(submission.submitted_at.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub title: String,
    pub description: String,
    pub project_type: Option<String>,
    /// Comma-separated, as typed.
    pub technologies: String,
    pub client_email: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    original_work: bool,
    accurate_info: bool,
}

impl SubmissionDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn project_type(mut self, project_type: impl Into<String>) -> Self {
        self.project_type = Some(project_type.into());
        self
    }

    pub fn technologies(mut self, technologies: impl Into<String>) -> Self {
        self.technologies = technologies.into();
        self
    }

    pub fn client_email(mut self, client_email: impl Into<String>) -> Self {
        self.client_email = Some(client_email.into());
        self
    }

    pub fn project_url(mut self, project_url: impl Into<String>) -> Self {
        self.project_url = Some(project_url.into());
        self
    }

    pub fn github_url(mut self, github_url: impl Into<String>) -> Self {
        self.github_url = Some(github_url.into());
        self
    }

    /// Record the two checkboxes: the work is the worker's own, and the
    /// details are accurate.
    pub fn certify(mut self, original_work: bool, accurate_info: bool) -> Self {
        self.original_work = original_work;
        self.accurate_info = accurate_info;
        self
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        if !(self.original_work && self.accurate_info) {
            return Err(SubmissionError::Uncertified);
        }
        for (field, value) in [("title", &self.title), ("description", &self.description)] {
            if value.trim().is_empty() {
                return Err(SubmissionError::MissingField {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }

    /// The document to write: status `pending`, timestamp left to the server.
    pub fn into_pending(self) -> Result<ProjectSubmission, SubmissionError> {
        self.validate()?;
        Ok(ProjectSubmission {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            project_type: non_blank(self.project_type),
            project_url: non_blank(self.project_url),
            github_url: non_blank(self.github_url),
            submitted_at: None,
            technologies: Some(self.technologies.trim().to_string()),
            client_email: non_blank(self.client_email),
            status: SubmissionStatus::Pending,
        })
    }
}

/// Fields written by the profile edit form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

impl ProfileUpdate {
    /// Build from raw form values. `skills` is comma-separated; blank fields
    /// clear the stored value.
    pub fn from_form(
        full_name: &str,
        bio: &str,
        skills: &str,
        github: &str,
        linkedin: &str,
        portfolio: &str,
    ) -> Self {
        let field = |s: &str| non_blank(Some(s.to_string()));
        Self {
            full_name: field(full_name),
            bio: field(bio),
            skills: parse_list(skills),
            github: field(github),
            linkedin: field(linkedin),
            portfolio: field(portfolio),
        }
    }

    /// Merge into a fetched record, as the store would after the write.
    pub fn apply_to(&self, record: &mut UserRecord) {
        record.full_name = self.full_name.clone();
        record.bio = self.bio.clone();
        record.counters.skills = self.skills.clone();
        record.github = self.github.clone();
        record.linkedin = self.linkedin.clone();
        record.portfolio = self.portfolio.clone();
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
