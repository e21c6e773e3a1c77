mod cli;
mod infra;
mod routes;
mod server;

use candidate_lookup::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
