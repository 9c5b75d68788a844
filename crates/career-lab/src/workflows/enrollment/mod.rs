//! Applicant intake, screening, enrollment, and project assignment.
//!
//! The store keeps the three ordered rosters, the screening config carries
//! the admission predicate, and the roster service owns every transition
//! between them.

pub mod domain;
pub mod report;
pub mod screening;
pub mod seed;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantDraft, CandidateId, Project, ProjectDraft, ProjectId,
    RosterValidationError, Student,
};
pub use report::{DanglingAssignment, ProjectRosterEntry, RosterOverview};
pub use screening::{ScreeningConfig, ScreeningVerdict};
pub use seed::{RosterCsvImporter, RosterImportError};
pub use service::RosterService;
pub use store::RecordStore;
