use super::common::*;
use crate::workflows::enrollment::domain::{Applicant, CandidateId};
use crate::workflows::enrollment::screening::ScreeningConfig;

fn candidate(work_ethic: u8, willing_to_learn: bool) -> Applicant {
    let mut draft = applicant("Alex Rivera", work_ethic, willing_to_learn);
    draft.is_rival = !willing_to_learn;
    Applicant {
        id: CandidateId(1),
        name: draft.name,
        strength: draft.strength,
        weakness: draft.weakness,
        work_ethic: draft.work_ethic,
        willing_to_learn: draft.willing_to_learn,
        is_rival: draft.is_rival,
        best_fit_project: draft.best_fit_project,
    }
}

#[test]
fn defaults_are_six_and_not_required() {
    let config = ScreeningConfig::default();
    assert_eq!(config.min_work_ethic, 6);
    assert!(!config.require_willing);
}

#[test]
fn threshold_is_inclusive() {
    let config = ScreeningConfig::default();
    assert!(config.admits(&candidate(6, true)));
    assert!(!config.admits(&candidate(5, true)));
}

#[test]
fn willingness_only_matters_when_required() {
    let relaxed = ScreeningConfig {
        min_work_ethic: 6,
        require_willing: false,
    };
    let strict = ScreeningConfig {
        min_work_ethic: 6,
        require_willing: true,
    };
    let unwilling = candidate(8, false);

    assert!(relaxed.admits(&unwilling));
    assert!(!strict.admits(&unwilling));
}

#[test]
fn verdict_explains_each_failing_leg() {
    let strict = ScreeningConfig {
        min_work_ethic: 7,
        require_willing: true,
    };

    assert_eq!(strict.verdict(&candidate(9, true)).summary(), "admitted");
    assert_eq!(
        strict.verdict(&candidate(4, true)).summary(),
        "work ethic below threshold"
    );
    assert_eq!(
        strict.verdict(&candidate(9, false)).summary(),
        "not willing to learn"
    );
    assert_eq!(
        strict.verdict(&candidate(4, false)).summary(),
        "work ethic below threshold and not willing to learn"
    );
}
