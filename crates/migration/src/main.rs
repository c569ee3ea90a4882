use sea_orm_migration::prelude::*;

/// SeaORM migration CLI: `up`, `down`, `status`, `fresh`, `refresh`, `reset`.
/// Reads `DATABASE_URL` (or `-u <url>`).
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
