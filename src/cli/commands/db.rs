use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::print_applied_migrations;
use crate::db::stats::print_db_info;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info,
        log,
    } = cmd
    {
        // open_pool already applies pending migrations.
        let mut pool = open_pool(cfg)?;

        if *migrate {
            success("Database schema is up to date.");
        }

        if *check {
            let status: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if status == "ok" {
                success("Integrity check passed.");
            } else {
                warning(format!("Integrity check reported: {}", status));
                return Err(AppError::Other("database integrity check failed".into()));
            }
        }

        if *info {
            let db_path = cfg.database.clone();
            print_db_info(&mut pool, &db_path)?;
        }

        if *log {
            print_applied_migrations(&pool.conn)?;
        }
    }
    Ok(())
}
