use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::settings::{get_setting, put_setting, SETTING_CLUBS};
use crate::errors::{AppError, AppResult};
use crate::models::club::default_clubs;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clubs { set } = cmd {
        let pool = open_pool(cfg)?;

        if let Some(list) = set {
            let clubs: Vec<String> = list
                .split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();

            if clubs.is_empty() {
                return Err(AppError::Other(
                    "club list cannot be empty".to_string(),
                ));
            }

            put_setting(&pool.conn, SETTING_CLUBS, &clubs)?;
            success(format!("Club list updated ({} clubs).", clubs.len()));
        } else {
            let clubs: Vec<String> = get_setting(&pool.conn, SETTING_CLUBS, default_clubs())?;
            println!("{}", clubs.join(", "));
        }
    }
    Ok(())
}
