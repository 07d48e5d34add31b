//! Schema CLI for the POS database, reading `DATABASE_URL`.
//!
//! `cargo run -p migration -- status`, `-- up`, `-- down -n 1`, `-- fresh`.
//! The API applies pending migrations by itself at startup.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
