//! Directory of mentors, advisors, and industry professionals attached to
//! the program.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MentorId(pub u64);

impl fmt::Display for MentorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[default]
    Available,
    Busy,
    Unavailable,
}

impl Availability {
    pub const fn label(self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Busy => "busy",
            Availability::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorDraft {
    pub name: String,
    pub role: String,
    pub expertise: String,
    #[serde(default)]
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: MentorId,
    pub name: String,
    pub role: String,
    pub expertise: String,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MentorValidationError {
    #[error("mentor name must not be blank")]
    BlankName,
}

/// Ordered mentor roster with its own identity sequence. Removal of an
/// unknown id is a quiet no-op, matching the enrollment rosters.
#[derive(Debug, Default)]
pub struct MentorDirectory {
    mentors: Vec<Mentor>,
    next_id: u64,
}

impl MentorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_mentor(&mut self, draft: MentorDraft) -> Result<MentorId, MentorValidationError> {
        if draft.name.trim().is_empty() {
            return Err(MentorValidationError::BlankName);
        }
        self.next_id += 1;
        let id = MentorId(self.next_id);
        self.mentors.push(Mentor {
            id,
            name: draft.name,
            role: draft.role,
            expertise: draft.expertise,
            availability: draft.availability,
        });
        Ok(id)
    }

    pub fn remove_mentor(&mut self, id: MentorId) -> bool {
        match self.mentors.iter().position(|m| m.id == id) {
            Some(index) => {
                self.mentors.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn find_mentor(&self, id: MentorId) -> Option<&Mentor> {
        self.mentors.iter().find(|m| m.id == id)
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }
}

/// The starting mentor cohort shown on the collaborators dashboard.
pub fn standard_mentors() -> Vec<MentorDraft> {
    fn mentor(name: &str, role: &str, expertise: &str, availability: Availability) -> MentorDraft {
        MentorDraft {
            name: name.to_string(),
            role: role.to_string(),
            expertise: expertise.to_string(),
            availability,
        }
    }

    vec![
        mentor(
            "Collaborator 1",
            "Business Mentor",
            "Entrepreneurship & Strategy",
            Availability::Available,
        ),
        mentor(
            "Collaborator 2",
            "Financial Advisor",
            "Personal Finance & Budgeting",
            Availability::Available,
        ),
        mentor(
            "Collaborator 3",
            "Career Coach",
            "Career Development & Networking",
            Availability::Busy,
        ),
    ]
}
