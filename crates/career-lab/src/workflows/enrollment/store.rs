use super::domain::{
    Applicant, ApplicantDraft, CandidateId, Project, ProjectDraft, ProjectId,
    RosterValidationError, Student,
};

/// In-memory store holding the three ordered rosters and the identity
/// sequence. Owned by the roster service; there are no ambient globals.
///
/// Identities are drawn from a single counter shared by candidates and
/// projects, so a value handed out once is never reused anywhere.
#[derive(Debug, Default)]
pub struct RecordStore {
    applicants: Vec<Applicant>,
    students: Vec<Student>,
    projects: Vec<Project>,
    next_id: u64,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Validate and append a new applicant, preserving submission order.
    pub fn add_applicant(
        &mut self,
        draft: ApplicantDraft,
    ) -> Result<CandidateId, RosterValidationError> {
        draft.validate()?;
        let id = CandidateId(self.next_id());
        self.applicants.push(Applicant::from_draft(id, draft));
        Ok(id)
    }

    /// Validate and append a new project. Blank or whitespace-only titles
    /// are rejected.
    pub fn add_project(&mut self, draft: ProjectDraft) -> Result<ProjectId, RosterValidationError> {
        draft.validate()?;
        let id = ProjectId(self.next_id());
        self.projects.push(Project::from_draft(id, draft));
        Ok(id)
    }

    /// Remove and return an applicant. Unknown ids are a quiet `None`, not
    /// an error.
    pub fn remove_applicant(&mut self, id: CandidateId) -> Option<Applicant> {
        let index = self.applicants.iter().position(|a| a.id == id)?;
        Some(self.applicants.remove(index))
    }

    /// Remove and return a project. Students keep whatever title string
    /// they were assigned.
    pub fn remove_project(&mut self, id: ProjectId) -> Option<Project> {
        let index = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(index))
    }

    pub fn find_applicant(&self, id: CandidateId) -> Option<&Applicant> {
        self.applicants.iter().find(|a| a.id == id)
    }

    pub fn find_student(&self, id: CandidateId) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub(crate) fn find_student_mut(&mut self, id: CandidateId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    pub fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Applicants in submission order.
    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    /// Students in acceptance order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Projects in creation order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub(crate) fn push_student(&mut self, student: Student) {
        self.students.push(student);
    }
}
