mod cli;
mod commands;
mod render;
mod session;

use ace_roster::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
