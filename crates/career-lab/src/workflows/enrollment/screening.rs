use serde::{Deserialize, Serialize};

use super::domain::Applicant;

/// Threshold configuration for auto-selection. Supplied by the caller per
/// invocation rather than held as global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    pub min_work_ethic: u8,
    pub require_willing: bool,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            min_work_ethic: 6,
            require_willing: false,
        }
    }
}

impl ScreeningConfig {
    /// The stateless admission predicate: work ethic meets the threshold
    /// and, when required, the applicant is willing to learn.
    pub fn admits(&self, applicant: &Applicant) -> bool {
        self.verdict(applicant).admitted()
    }

    /// Per-leg breakdown of the predicate so callers can explain why an
    /// applicant was passed over.
    pub fn verdict(&self, applicant: &Applicant) -> ScreeningVerdict {
        ScreeningVerdict {
            meets_work_ethic: applicant.work_ethic >= self.min_work_ethic,
            meets_willingness: !self.require_willing || applicant.willing_to_learn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScreeningVerdict {
    pub meets_work_ethic: bool,
    pub meets_willingness: bool,
}

impl ScreeningVerdict {
    pub fn admitted(self) -> bool {
        self.meets_work_ethic && self.meets_willingness
    }

    pub fn summary(self) -> &'static str {
        match (self.meets_work_ethic, self.meets_willingness) {
            (true, true) => "admitted",
            (false, true) => "work ethic below threshold",
            (true, false) => "not willing to learn",
            (false, false) => "work ethic below threshold and not willing to learn",
        }
    }
}
