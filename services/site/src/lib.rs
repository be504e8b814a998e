mod catalog;
mod cli;
mod infra;
mod pages;
mod routes;
mod server;

use local_pros::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
