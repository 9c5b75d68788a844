//! Seed rosters and CSV intake.
//!
//! The built-in seeds mirror the program's stock project catalog, the
//! sample applicant pool used in demos, and the starting mentor cohort.
//! Larger applicant pools arrive as CSV exports with header-mapped columns.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{ApplicantDraft, ProjectDraft, RosterValidationError};

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Invalid(RosterValidationError),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read applicant export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid applicant CSV data: {}", err),
            RosterImportError::Invalid(err) => {
                write!(f, "applicant row failed roster validation: {}", err)
            }
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::Invalid(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<RosterValidationError> for RosterImportError {
    fn from(err: RosterValidationError) -> Self {
        Self::Invalid(err)
    }
}

pub struct RosterCsvImporter;

impl RosterCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantDraft>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse applicant drafts from a CSV export. Every row is validated the
    /// same way form intake is, so a bad row aborts the import instead of
    /// seeding a half-valid roster.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantDraft>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut drafts = Vec::new();

        for record in csv_reader.deserialize::<ApplicantRow>() {
            let row = record?;
            let draft = row.into_draft();
            draft.validate()?;
            drafts.push(draft);
        }

        Ok(drafts)
    }
}

#[derive(Debug, Deserialize)]
struct ApplicantRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Strength", default)]
    strength: String,
    #[serde(rename = "Weakness", default)]
    weakness: String,
    #[serde(rename = "Work Ethic")]
    work_ethic: u8,
    #[serde(rename = "Willing to Learn", default, deserialize_with = "lenient_bool")]
    willing_to_learn: bool,
    #[serde(rename = "Rival", default, deserialize_with = "lenient_bool")]
    is_rival: bool,
    #[serde(
        rename = "Best Fit Project",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    best_fit_project: Option<String>,
}

impl ApplicantRow {
    fn into_draft(self) -> ApplicantDraft {
        ApplicantDraft {
            name: self.name,
            strength: self.strength,
            weakness: self.weakness,
            work_ethic: self.work_ethic,
            willing_to_learn: self.willing_to_learn,
            is_rival: self.is_rival,
            best_fit_project: self.best_fit_project,
        }
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = opt else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "no" | "false" | "0" => Ok(false),
        "yes" | "true" | "1" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected yes/no, true/false, or 1/0, got '{other}'"
        ))),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// The stock project catalog students rotate through.
pub fn standard_projects() -> Vec<ProjectDraft> {
    fn project(title: &str, description: Option<&str>, category: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: description.map(str::to_string),
            category: Some(category.to_string()),
        }
    }

    vec![
        project(
            "Business Pitch",
            Some("Create a short business pitch for a startup idea."),
            "Communication",
        ),
        project(
            "Budget Challenge",
            Some("Plan a realistic monthly budget for a student lifestyle."),
            "Math",
        ),
        project(
            "Career Exploration",
            Some("Research a career path and present your findings."),
            "Research",
        ),
        project("Credit Card Management", None, "Financial Literacy"),
        project("Tax Document Understanding", None, "Attention to Detail"),
        project("Apartment Application", None, "Organization"),
        project("Employment Application", None, "Communication"),
        project("Resume Building", None, "Writing"),
        project("Interview Preparation", None, "Public Speaking"),
        project("Networking Skills", None, "Social Skills"),
    ]
}

/// Demo applicant pool: nine candidates in good standing plus four rivals
/// with low work ethic or no willingness to learn.
pub fn sample_applicants() -> Vec<ApplicantDraft> {
    fn candidate(
        name: &str,
        strength: &str,
        weakness: &str,
        work_ethic: u8,
        willing_to_learn: bool,
        is_rival: bool,
        best_fit_project: &str,
    ) -> ApplicantDraft {
        ApplicantDraft {
            name: name.to_string(),
            strength: strength.to_string(),
            weakness: weakness.to_string(),
            work_ethic,
            willing_to_learn,
            is_rival,
            best_fit_project: Some(best_fit_project.to_string()),
        }
    }

    vec![
        candidate(
            "Alex Rivera",
            "Communication",
            "Time Management",
            8,
            true,
            false,
            "Business Pitch",
        ),
        candidate(
            "Jordan Chen",
            "Math",
            "Public Speaking",
            9,
            true,
            false,
            "Budget Challenge",
        ),
        candidate(
            "Taylor Morgan",
            "Research",
            "Teamwork",
            7,
            true,
            false,
            "Career Exploration",
        ),
        candidate(
            "Casey Blake",
            "Financial Literacy",
            "Organization",
            8,
            true,
            false,
            "Credit Card Management",
        ),
        candidate(
            "Morgan Davis",
            "Attention to Detail",
            "Speed",
            9,
            true,
            false,
            "Tax Document Understanding",
        ),
        candidate(
            "Riley Thompson",
            "Organization",
            "Decision Making",
            7,
            true,
            false,
            "Apartment Application",
        ),
        candidate(
            "Sam Parker",
            "Writing",
            "Technical Skills",
            8,
            true,
            false,
            "Resume Building",
        ),
        candidate(
            "Avery Johnson",
            "Public Speaking",
            "Nervousness",
            6,
            true,
            false,
            "Interview Preparation",
        ),
        candidate(
            "Quinn Martinez",
            "Social Skills",
            "Follow-through",
            7,
            true,
            false,
            "Networking Skills",
        ),
        candidate(
            "Blake Winters",
            "Communication",
            "Attitude",
            4,
            false,
            true,
            "Business Pitch",
        ),
        candidate(
            "Drew Sterling",
            "Math",
            "Laziness",
            3,
            false,
            true,
            "Budget Challenge",
        ),
        candidate(
            "Skyler Fox",
            "Research",
            "Procrastination",
            5,
            false,
            true,
            "Career Exploration",
        ),
        candidate(
            "Reese Knight",
            "Financial Literacy",
            "Carelessness",
            4,
            false,
            true,
            "Credit Card Management",
        ),
    ]
}
