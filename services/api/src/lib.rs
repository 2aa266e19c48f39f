mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use galaxy_toolkit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
