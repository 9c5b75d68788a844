//! End-to-end scenarios for the enrollment workflow, driven entirely
//! through the public service facade: seeded intake, manual decisions,
//! auto-selection, project assignment, and roster reporting.

mod common {
    use career_lab::workflows::enrollment::{
        seed::{sample_applicants, standard_projects},
        CandidateId, ProjectId, RosterService,
    };

    pub(super) fn seeded_service() -> RosterService {
        let mut service = RosterService::default();
        for draft in standard_projects() {
            service.add_project(draft).expect("seed project is valid");
        }
        for draft in sample_applicants() {
            service.add_applicant(draft).expect("seed applicant is valid");
        }
        service
    }

    pub(super) fn applicant_id_by_name(service: &RosterService, name: &str) -> CandidateId {
        service
            .store()
            .applicants()
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.id)
            .expect("applicant present")
    }

    pub(super) fn project_id_by_title(service: &RosterService, title: &str) -> ProjectId {
        service
            .store()
            .projects()
            .iter()
            .find(|p| p.title == title)
            .map(|p| p.id)
            .expect("project present")
    }
}

use career_lab::workflows::enrollment::{CandidateId, ScreeningConfig};
use common::*;

#[test]
fn seeded_roster_flows_from_intake_to_assignment() {
    let mut service = seeded_service();
    assert_eq!(service.store().applicants().len(), 13);
    assert_eq!(service.store().projects().len(), 10);

    // One manual decision each way before the batch runs.
    let accepted = applicant_id_by_name(&service, "Alex Rivera");
    let rejected = applicant_id_by_name(&service, "Drew Sterling");
    assert_eq!(service.accept(accepted), Some(accepted));
    assert!(service.reject(rejected));

    let moved = service.auto_select(&ScreeningConfig::default());
    assert_eq!(moved.len(), 8);
    assert_eq!(service.store().students().len(), 9);

    // Only rivals below the threshold remain.
    let leftovers: Vec<&str> = service
        .store()
        .applicants()
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(leftovers, vec!["Blake Winters", "Skyler Fox", "Reese Knight"]);

    // Students enroll in acceptance order: the manual accept first.
    assert_eq!(service.store().students()[0].id, accepted);

    // Assign everyone their advertised best fit.
    let assignments: Vec<(CandidateId, String)> = service
        .store()
        .students()
        .iter()
        .filter_map(|s| s.best_fit_project.clone().map(|title| (s.id, title)))
        .collect();
    for (student, title) in assignments {
        let project = project_id_by_title(&service, &title);
        assert!(service.assign_project(project, student));
    }

    let overview = service.overview();
    assert_eq!(overview.student_count, 9);
    assert!(overview.unassigned_students.is_empty());
    assert!(overview.dangling_assignments.is_empty());
    assert!(overview
        .project_rosters
        .iter()
        .any(|entry| entry.title == "Budget Challenge" && entry.students == vec!["Jordan Chen"]));
}

#[test]
fn reassignment_and_project_deletion_preserve_title_copies() {
    let mut service = seeded_service();
    let student = applicant_id_by_name(&service, "Jordan Chen");
    service.accept(student).expect("applicant present");

    let first = project_id_by_title(&service, "Business Pitch");
    let second = project_id_by_title(&service, "Budget Challenge");
    assert!(service.assign_project(first, student));
    assert!(service.assign_project(second, student));

    // Deleting the assigned project must not touch the student's copy.
    assert!(service.remove_project(second));
    let record = service
        .store()
        .find_student(student)
        .expect("student present");
    assert_eq!(record.assigned_project.as_deref(), Some("Budget Challenge"));

    let overview = service.overview();
    assert_eq!(overview.project_count, 9);
    assert_eq!(overview.dangling_assignments.len(), 1);
    assert_eq!(overview.dangling_assignments[0].title, "Budget Challenge");
}

#[test]
fn overview_serializes_for_json_consumers() {
    let mut service = seeded_service();
    let student = applicant_id_by_name(&service, "Morgan Davis");
    service.accept(student).expect("applicant present");

    let value = serde_json::to_value(service.overview()).expect("overview serializes");
    assert_eq!(value["student_count"], 1);
    assert_eq!(value["project_count"], 10);
    assert_eq!(value["unassigned_students"][0], "Morgan Davis");
    assert!(value["dangling_assignments"]
        .as_array()
        .expect("array present")
        .is_empty());
}
