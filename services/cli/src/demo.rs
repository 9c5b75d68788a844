use std::path::{Path, PathBuf};

use career_lab::config::AppConfig;
use career_lab::error::AppError;
use career_lab::telemetry;
use career_lab::workflows::enrollment::seed::{sample_applicants, standard_projects};
use career_lab::workflows::enrollment::{
    CandidateId, ProjectId, RecordStore, RosterCsvImporter, RosterOverview, RosterService,
    ScreeningConfig,
};
use career_lab::workflows::mentors::{standard_mentors, MentorDirectory};
use chrono::Local;
use clap::Args;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Applicant CSV export to use instead of the built-in sample pool
    #[arg(long)]
    pub(crate) applicants_csv: Option<PathBuf>,
    /// Override the configured work ethic threshold
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub(crate) min_work_ethic: Option<u8>,
    /// Only enroll applicants who are willing to learn
    #[arg(long)]
    pub(crate) require_willing: bool,
    /// Skip the mentor directory portion of the demo
    #[arg(long)]
    pub(crate) skip_mentors: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Applicant CSV export to use instead of the built-in sample pool
    #[arg(long)]
    pub(crate) applicants_csv: Option<PathBuf>,
    /// Enroll qualifying applicants before reporting
    #[arg(long)]
    pub(crate) auto_select: bool,
    /// Override the configured work ethic threshold
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub(crate) min_work_ethic: Option<u8>,
    /// Only enroll applicants who are willing to learn
    #[arg(long)]
    pub(crate) require_willing: bool,
    /// Emit the overview as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let screening = screening_config(&config, args.min_work_ethic, args.require_willing);
    let mut service = build_roster(args.applicants_csv.as_deref())?;
    info!(
        applicants = service.store().applicants().len(),
        projects = service.store().projects().len(),
        "roster seeded"
    );

    println!(
        "Career & Adulting Lab roster demo ({})",
        Local::now().date_naive()
    );
    println!(
        "\nApplicant intake: {} applicants, {} projects",
        service.store().applicants().len(),
        service.store().projects().len()
    );

    // One manual decision each way before the batch screening runs.
    if let Some(first) = service.store().applicants().first().map(|a| (a.id, a.name.clone())) {
        service.accept(first.0);
        println!("- Accepted {} by hand", first.1);
    }
    if let Some(rival) = service
        .store()
        .applicants()
        .iter()
        .find(|a| a.is_rival)
        .map(|a| (a.id, a.name.clone()))
    {
        service.reject(rival.0);
        println!("- Rejected {} by hand", rival.1);
    }

    println!(
        "\nAuto-selection (min work ethic {}, willingness {}):",
        screening.min_work_ethic,
        if screening.require_willing {
            "required"
        } else {
            "optional"
        }
    );
    let moved = service.auto_select(&screening);
    for id in &moved {
        if let Some(student) = service.store().find_student(*id) {
            println!("- Enrolled {} (work ethic {}/10)", student.name, student.work_ethic);
        }
    }
    for applicant in service.store().applicants() {
        println!(
            "- Passed over {}: {}",
            applicant.name,
            screening.verdict(applicant).summary()
        );
    }

    assign_best_fits(&mut service);
    println!("\nProject board:");
    render_overview(&service.overview());

    if !args.skip_mentors {
        let mut directory = MentorDirectory::new();
        for draft in standard_mentors() {
            if let Err(err) = directory.add_mentor(draft) {
                println!("  Mentor skipped: {err}");
            }
        }
        println!("\nMentor directory:");
        for mentor in directory.mentors() {
            println!(
                "- {} | {} | {} ({})",
                mentor.name,
                mentor.role,
                mentor.expertise,
                mentor.availability.label()
            );
        }
    }

    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let mut service = build_roster(args.applicants_csv.as_deref())?;
    if args.auto_select {
        let screening = screening_config(&config, args.min_work_ethic, args.require_willing);
        service.auto_select(&screening);
    }

    let overview = service.overview();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&overview).expect("overview serializes")
        );
    } else {
        println!(
            "Roster report ({})",
            Local::now().date_naive()
        );
        render_overview(&overview);
    }

    Ok(())
}

fn screening_config(
    config: &AppConfig,
    min_work_ethic: Option<u8>,
    require_willing: bool,
) -> ScreeningConfig {
    let mut screening = config.screening;
    if let Some(threshold) = min_work_ethic {
        screening.min_work_ethic = threshold;
    }
    if require_willing {
        screening.require_willing = true;
    }
    screening
}

fn build_roster(applicants_csv: Option<&Path>) -> Result<RosterService, AppError> {
    let mut service = RosterService::default();
    for draft in standard_projects() {
        service.add_project(draft)?;
    }

    let drafts = match applicants_csv {
        Some(path) => RosterCsvImporter::from_path(path)?,
        None => sample_applicants(),
    };
    for draft in drafts {
        service.add_applicant(draft)?;
    }

    Ok(service)
}

/// Pair every student with their advertised best fit, falling back to the
/// first project whose category matches the student's strength.
fn assign_best_fits(service: &mut RosterService) {
    let picks: Vec<(CandidateId, Option<String>, String)> = service
        .store()
        .students()
        .iter()
        .map(|s| (s.id, s.best_fit_project.clone(), s.strength.clone()))
        .collect();

    for (student, best_fit, strength) in picks {
        let project = best_fit
            .as_deref()
            .and_then(|title| project_id_by_title(service.store(), title))
            .or_else(|| {
                service
                    .store()
                    .projects()
                    .iter()
                    .find(|p| p.category.as_deref() == Some(strength.as_str()))
                    .map(|p| p.id)
            });
        if let Some(project) = project {
            service.assign_project(project, student);
        }
    }
}

fn project_id_by_title(store: &RecordStore, title: &str) -> Option<ProjectId> {
    store.projects().iter().find(|p| p.title == title).map(|p| p.id)
}

fn render_overview(overview: &RosterOverview) {
    println!(
        "- Applicants {} | Students {} | Projects {}",
        overview.applicant_count, overview.student_count, overview.project_count
    );
    for entry in &overview.project_rosters {
        if entry.students.is_empty() {
            continue;
        }
        println!("- {}:", entry.title);
        for student in &entry.students {
            println!("    {student}");
        }
    }
    if !overview.unassigned_students.is_empty() {
        println!("- Unassigned: {}", overview.unassigned_students.join(", "));
    }
    for dangling in &overview.dangling_assignments {
        println!(
            "- {} still lists '{}' although the project is gone",
            dangling.student, dangling.title
        );
    }
}
