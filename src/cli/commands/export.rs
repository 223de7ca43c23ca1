use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::load_all_shots;
use crate::errors::AppResult;
use crate::export::{notify_export_success, write_csv, write_json, ExportFormat};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, out } = cmd {
        let pool = open_pool(cfg)?;
        let shots = load_all_shots(&pool.conn)?;

        match format {
            ExportFormat::Csv => write_csv(out, &shots)?,
            ExportFormat::Json => write_json(out, &shots)?,
        }

        notify_export_success(format.as_str(), Path::new(out));
    }
    Ok(())
}
