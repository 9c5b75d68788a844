use super::common::*;
use crate::workflows::enrollment::domain::{CandidateId, ProjectId, RosterValidationError};
use crate::workflows::enrollment::store::RecordStore;

#[test]
fn add_applicant_grows_roster_and_assigns_fresh_identity() {
    let mut store = RecordStore::new();

    let first = store
        .add_applicant(applicant("Alex Rivera", 8, true))
        .expect("valid applicant");
    assert_eq!(store.applicants().len(), 1);

    let second = store
        .add_applicant(applicant("Jordan Chen", 9, true))
        .expect("valid applicant");
    assert_eq!(store.applicants().len(), 2);

    assert_ne!(first, second);
    assert!(second > first);
}

#[test]
fn applicants_keep_submission_order() {
    let mut store = RecordStore::new();
    for name in ["Alex Rivera", "Jordan Chen", "Taylor Morgan"] {
        store
            .add_applicant(applicant(name, 7, true))
            .expect("valid applicant");
    }

    let names: Vec<&str> = store.applicants().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alex Rivera", "Jordan Chen", "Taylor Morgan"]);
}

#[test]
fn blank_applicant_name_is_rejected() {
    let mut store = RecordStore::new();
    let result = store.add_applicant(applicant("   ", 7, true));
    assert_eq!(result, Err(RosterValidationError::BlankCandidateName));
    assert!(store.applicants().is_empty());
}

#[test]
fn out_of_range_work_ethic_is_rejected() {
    let mut store = RecordStore::new();

    let low = store.add_applicant(applicant("Alex Rivera", 0, true));
    assert_eq!(low, Err(RosterValidationError::WorkEthicOutOfRange(0)));

    let high = store.add_applicant(applicant("Alex Rivera", 11, true));
    assert_eq!(high, Err(RosterValidationError::WorkEthicOutOfRange(11)));

    assert!(store.applicants().is_empty());
}

#[test]
fn whitespace_project_title_is_rejected() {
    let mut store = RecordStore::new();
    let result = store.add_project(project("   "));
    assert_eq!(result, Err(RosterValidationError::BlankProjectTitle));
    assert!(store.projects().is_empty());
}

#[test]
fn remove_unknown_ids_are_silent_noops() {
    let mut store = RecordStore::new();
    store
        .add_applicant(applicant("Alex Rivera", 8, true))
        .expect("valid applicant");
    store
        .add_project(project("Business Pitch"))
        .expect("valid project");

    assert!(store.remove_applicant(CandidateId(999)).is_none());
    assert!(store.remove_project(ProjectId(999)).is_none());
    assert_eq!(store.applicants().len(), 1);
    assert_eq!(store.projects().len(), 1);
}

#[test]
fn identity_sequence_is_never_reused() {
    let mut store = RecordStore::new();
    let first = store
        .add_applicant(applicant("Alex Rivera", 8, true))
        .expect("valid applicant");
    store.remove_applicant(first).expect("applicant present");

    let project_id = store
        .add_project(project("Business Pitch"))
        .expect("valid project");
    let second = store
        .add_applicant(applicant("Jordan Chen", 9, true))
        .expect("valid applicant");

    assert!(project_id.0 > first.0);
    assert!(second.0 > project_id.0);
}

#[test]
fn find_resolves_only_live_records() {
    let mut store = RecordStore::new();
    let id = store
        .add_applicant(applicant("Alex Rivera", 8, true))
        .expect("valid applicant");

    assert_eq!(store.find_applicant(id).map(|a| a.name.as_str()), Some("Alex Rivera"));
    assert!(store.find_student(id).is_none());

    store.remove_applicant(id).expect("applicant present");
    assert!(store.find_applicant(id).is_none());
}
