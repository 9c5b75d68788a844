use tracing::{debug, info};

use super::domain::{
    ApplicantDraft, CandidateId, ProjectDraft, ProjectId, RosterValidationError, Student,
};
use super::report::RosterOverview;
use super::screening::ScreeningConfig;
use super::store::RecordStore;

/// Orchestrator of every roster transition: intake, accept/reject,
/// auto-selection, and project assignment.
///
/// Operations referencing a missing id degrade to no-ops. The return value
/// (`Option`/`bool`) tells the caller whether anything moved; nothing is
/// surfaced as an error.
#[derive(Debug, Default)]
pub struct RosterService {
    store: RecordStore,
}

impl RosterService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn add_applicant(
        &mut self,
        draft: ApplicantDraft,
    ) -> Result<CandidateId, RosterValidationError> {
        let id = self.store.add_applicant(draft)?;
        debug!(candidate = %id, "applicant joined the roster");
        Ok(id)
    }

    pub fn add_project(&mut self, draft: ProjectDraft) -> Result<ProjectId, RosterValidationError> {
        let id = self.store.add_project(draft)?;
        debug!(project = %id, "project created");
        Ok(id)
    }

    /// Delete a project. Existing assignments keep the stale title string.
    pub fn remove_project(&mut self, id: ProjectId) -> bool {
        let removed = self.store.remove_project(id).is_some();
        if removed {
            debug!(project = %id, "project deleted");
        }
        removed
    }

    /// Move an applicant onto the student roster, copying every field and
    /// starting with no project assignment. The candidate keeps its id.
    pub fn accept(&mut self, id: CandidateId) -> Option<CandidateId> {
        let applicant = self.store.remove_applicant(id)?;
        self.store.push_student(Student::from_applicant(applicant));
        debug!(candidate = %id, "applicant enrolled as student");
        Some(id)
    }

    /// Drop an applicant from the roster. Students and projects are
    /// untouched.
    pub fn reject(&mut self, id: CandidateId) -> bool {
        let removed = self.store.remove_applicant(id).is_some();
        if removed {
            debug!(candidate = %id, "applicant rejected");
        }
        removed
    }

    /// Enroll every applicant the screening config admits, in their current
    /// relative order. The admitted set is computed as a snapshot before
    /// any applicant moves.
    pub fn auto_select(&mut self, config: &ScreeningConfig) -> Vec<CandidateId> {
        let selected: Vec<CandidateId> = self
            .store
            .applicants()
            .iter()
            .filter(|applicant| config.admits(applicant))
            .map(|applicant| applicant.id)
            .collect();

        for id in &selected {
            self.accept(*id);
        }

        info!(
            enrolled = selected.len(),
            min_work_ethic = config.min_work_ethic,
            require_willing = config.require_willing,
            "auto-selection finished"
        );
        selected
    }

    /// Record that a student works on a project by copying the project's
    /// title into the student. Reassignment overwrites the previous value;
    /// there is no per-project capacity.
    pub fn assign_project(&mut self, project: ProjectId, student: CandidateId) -> bool {
        let Some(title) = self
            .store
            .find_project(project)
            .map(|p| p.title.clone())
        else {
            return false;
        };

        match self.store.find_student_mut(student) {
            Some(record) => {
                record.assigned_project = Some(title);
                debug!(candidate = %student, project = %project, "project assigned");
                true
            }
            None => false,
        }
    }

    pub fn overview(&self) -> RosterOverview {
        RosterOverview::from_store(&self.store)
    }
}
