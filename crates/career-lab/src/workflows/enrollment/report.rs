use serde::Serialize;

use super::store::RecordStore;

/// Snapshot view of the whole roster for rendering and JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct RosterOverview {
    pub applicant_count: usize,
    pub student_count: usize,
    pub project_count: usize,
    pub project_rosters: Vec<ProjectRosterEntry>,
    pub unassigned_students: Vec<String>,
    /// Assignments whose title no longer matches any live project. Left in
    /// place on purpose; surfaced here so operators can see them.
    pub dangling_assignments: Vec<DanglingAssignment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectRosterEntry {
    pub title: String,
    pub students: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DanglingAssignment {
    pub student: String,
    pub title: String,
}

impl RosterOverview {
    pub(crate) fn from_store(store: &RecordStore) -> Self {
        let project_rosters = store
            .projects()
            .iter()
            .map(|project| ProjectRosterEntry {
                title: project.title.clone(),
                students: store
                    .students()
                    .iter()
                    .filter(|student| {
                        student.assigned_project.as_deref() == Some(project.title.as_str())
                    })
                    .map(|student| student.name.clone())
                    .collect(),
            })
            .collect();

        let unassigned_students = store
            .students()
            .iter()
            .filter(|student| !student.is_assigned())
            .map(|student| student.name.clone())
            .collect();

        let dangling_assignments = store
            .students()
            .iter()
            .filter_map(|student| {
                let title = student.assigned_project.as_deref()?;
                if store.projects().iter().any(|p| p.title == title) {
                    None
                } else {
                    Some(DanglingAssignment {
                        student: student.name.clone(),
                        title: title.to_string(),
                    })
                }
            })
            .collect();

        Self {
            applicant_count: store.applicants().len(),
            student_count: store.students().len(),
            project_count: store.projects().len(),
            project_rosters,
            unassigned_students,
            dangling_assignments,
        }
    }
}
