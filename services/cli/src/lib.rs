mod cli;
mod demo;

use career_lab::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
