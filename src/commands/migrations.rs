use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager, LEGACY_IMPORT_VERSION},
    },
    libs::messages::Message,
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
    /// Forget migrations above a version so they run again
    #[cfg(debug_assertions)]
    Rollback { version: u32 },
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    #[cfg_attr(not(debug_assertions), allow(unused_mut))]
    let mut conn = Db::new_without_migrations()?;

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&conn)?;
            msg_print!(Message::DatabaseVersion(version));
            if needs_migration(&conn)? {
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
            if MigrationManager::new().is_migration_applied(&conn, LEGACY_IMPORT_VERSION)? {
                msg_info!(Message::LegacyImportStepApplied);
            }
        }
        MigrationsCommand::History => {
            let history = MigrationManager::new().get_migration_history(&conn)?;
            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in history {
                msg_print!(format!("  v{}: {} (applied: {})", version, name, applied_at));
            }
        }
        #[cfg(debug_assertions)]
        MigrationsCommand::Rollback { version } => MigrationManager::new().rollback_to(&mut conn, version)?,
    }

    Ok(())
}
