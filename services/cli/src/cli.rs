use career_lab::error::AppError;
use clap::{Parser, Subcommand};

use crate::demo::{run_demo, run_report, DemoArgs, ReportArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Career & Adulting Lab",
    about = "Drive the Career & Adulting Lab roster from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an end-to-end roster demo: intake, screening, enrollment, and assignment (default command)
    Demo(DemoArgs),
    /// Roster inspection commands
    Roster {
        #[command(subcommand)]
        command: RosterCommand,
    },
}

#[derive(Subcommand, Debug)]
enum RosterCommand {
    /// Render a roster overview from seed or CSV data
    Report(ReportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(args),
        Command::Roster {
            command: RosterCommand::Report(args),
        } => run_report(args),
    }
}
