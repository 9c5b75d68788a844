use crate::workflows::enrollment::domain::{ApplicantDraft, CandidateId, ProjectDraft, ProjectId};
use crate::workflows::enrollment::service::RosterService;

pub(super) fn applicant(name: &str, work_ethic: u8, willing_to_learn: bool) -> ApplicantDraft {
    ApplicantDraft::new(
        name,
        "Communication",
        "Time Management",
        work_ethic,
        willing_to_learn,
    )
}

pub(super) fn rival(name: &str, work_ethic: u8) -> ApplicantDraft {
    let mut draft = applicant(name, work_ethic, false);
    draft.is_rival = true;
    draft
}

pub(super) fn project(title: &str) -> ProjectDraft {
    ProjectDraft::new(title)
}

pub(super) fn enroll(service: &mut RosterService, name: &str, work_ethic: u8) -> CandidateId {
    let id = service
        .add_applicant(applicant(name, work_ethic, true))
        .expect("valid applicant");
    service.accept(id).expect("applicant present");
    id
}

pub(super) fn add_project(service: &mut RosterService, title: &str) -> ProjectId {
    service.add_project(project(title)).expect("valid project")
}
