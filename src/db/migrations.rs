//! Database migration runner.

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::error::AppResult;
use crate::migration::Migrator;

/// Run all pending migrations.
///
/// Applied migrations are tracked by sea-orm-migration in `seaql_migrations`.
pub async fn run_migrations(db: &DatabaseConnection) -> AppResult<()> {
    let pending = pending_migrations(db).await?;

    if pending.is_empty() {
        info!("No pending migrations");
        return Ok(());
    }

    info!("{} migration(s) pending", pending.len());
    for name in &pending {
        info!("Applying migration {}", name);
    }

    Migrator::up(db, None).await?;

    info!("Migrations applied successfully");
    Ok(())
}

/// List the names of migrations not yet applied, in application order.
pub async fn pending_migrations(db: &DatabaseConnection) -> AppResult<Vec<String>> {
    let pending = Migrator::get_pending_migrations(db).await?;
    Ok(pending.iter().map(|m| m.name().to_string()).collect())
}

/// Roll back all migrations, then apply them again.
pub async fn reset_schema(db: &DatabaseConnection) -> AppResult<()> {
    info!("Resetting schema");
    Migrator::refresh(db).await?;
    info!("Schema reset complete");
    Ok(())
}
