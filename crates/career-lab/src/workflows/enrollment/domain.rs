use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier a candidate keeps while moving between the applicant and
/// student rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier wrapper for curated projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Intake payload for a new applicant, before an identity is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantDraft {
    pub name: String,
    pub strength: String,
    pub weakness: String,
    /// Self-reported work ethic on a 1-10 scale.
    pub work_ethic: u8,
    pub willing_to_learn: bool,
    #[serde(default)]
    pub is_rival: bool,
    #[serde(default)]
    pub best_fit_project: Option<String>,
}

impl ApplicantDraft {
    pub fn new(
        name: impl Into<String>,
        strength: impl Into<String>,
        weakness: impl Into<String>,
        work_ethic: u8,
        willing_to_learn: bool,
    ) -> Self {
        Self {
            name: name.into(),
            strength: strength.into(),
            weakness: weakness.into(),
            work_ethic,
            willing_to_learn,
            is_rival: false,
            best_fit_project: None,
        }
    }

    pub fn validate(&self) -> Result<(), RosterValidationError> {
        if self.name.trim().is_empty() {
            return Err(RosterValidationError::BlankCandidateName);
        }
        if !(1..=10).contains(&self.work_ethic) {
            return Err(RosterValidationError::WorkEthicOutOfRange(self.work_ethic));
        }
        Ok(())
    }
}

/// Candidate awaiting an accept/reject decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: CandidateId,
    pub name: String,
    pub strength: String,
    pub weakness: String,
    pub work_ethic: u8,
    pub willing_to_learn: bool,
    pub is_rival: bool,
    pub best_fit_project: Option<String>,
}

impl Applicant {
    pub(crate) fn from_draft(id: CandidateId, draft: ApplicantDraft) -> Self {
        Self {
            id,
            name: draft.name,
            strength: draft.strength,
            weakness: draft.weakness,
            work_ethic: draft.work_ethic,
            willing_to_learn: draft.willing_to_learn,
            is_rival: draft.is_rival,
            best_fit_project: draft.best_fit_project,
        }
    }
}

/// Accepted applicant, eligible for project assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: CandidateId,
    pub name: String,
    pub strength: String,
    pub weakness: String,
    pub work_ethic: u8,
    pub willing_to_learn: bool,
    pub is_rival: bool,
    pub best_fit_project: Option<String>,
    /// Title of the assigned project, stored by value. Deleting the project
    /// later leaves this string in place.
    pub assigned_project: Option<String>,
}

impl Student {
    pub fn from_applicant(applicant: Applicant) -> Self {
        Self {
            id: applicant.id,
            name: applicant.name,
            strength: applicant.strength,
            weakness: applicant.weakness,
            work_ethic: applicant.work_ethic,
            willing_to_learn: applicant.willing_to_learn,
            is_rival: applicant.is_rival,
            best_fit_project: applicant.best_fit_project,
            assigned_project: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_project.is_some()
    }
}

/// Intake payload for a new project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Strength the project is best suited to exercise.
    #[serde(default)]
    pub category: Option<String>,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: None,
        }
    }

    pub fn validate(&self) -> Result<(), RosterValidationError> {
        if self.title.trim().is_empty() {
            return Err(RosterValidationError::BlankProjectTitle);
        }
        Ok(())
    }
}

/// Named activity a student may be associated with via its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl Project {
    pub(crate) fn from_draft(id: ProjectId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
        }
    }
}

/// Rejections raised while admitting new records into the roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterValidationError {
    #[error("applicant name must not be blank")]
    BlankCandidateName,
    #[error("project title must not be blank")]
    BlankProjectTitle,
    #[error("work ethic must be between 1 and 10, got {0}")]
    WorkEthicOutOfRange(u8),
}
