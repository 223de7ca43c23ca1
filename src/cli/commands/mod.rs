pub mod add;
pub mod calibrate;
pub mod clubs;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod fields;
pub mod fixloc;
pub mod init;
pub mod list;
pub mod stats;

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Feeling, Landing, Lie, MissType, Slope, Strength, Temperature, Wind};

/// Open the configured database and bring its schema up to date.
/// Every command that touches the store goes through here, so pending
/// migrations always run before the first query.
pub(crate) fn open_pool(cfg: &crate::config::Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

pub(crate) fn parse_slope(s: &str) -> AppResult<Slope> {
    Slope::from_db_str(s).ok_or_else(|| AppError::InvalidSlope(s.to_string()))
}

pub(crate) fn parse_lie(s: &str) -> AppResult<Lie> {
    Lie::from_db_str(s).ok_or_else(|| AppError::InvalidLie(s.to_string()))
}

pub(crate) fn parse_strength(s: &str) -> AppResult<Strength> {
    Strength::from_db_str(s).ok_or_else(|| AppError::InvalidStrength(s.to_string()))
}

pub(crate) fn parse_wind(s: &str) -> AppResult<Wind> {
    Wind::from_db_str(s).ok_or_else(|| AppError::InvalidWind(s.to_string()))
}

pub(crate) fn parse_temperature(s: &str) -> AppResult<Temperature> {
    Temperature::from_db_str(s).ok_or_else(|| AppError::InvalidTemperature(s.to_string()))
}

pub(crate) fn parse_feeling(s: &str) -> AppResult<Feeling> {
    Feeling::from_db_str(s).ok_or_else(|| AppError::InvalidFeeling(s.to_string()))
}

pub(crate) fn parse_miss(s: &str) -> AppResult<MissType> {
    MissType::from_db_str(s).ok_or_else(|| AppError::InvalidMissType(s.to_string()))
}

/// Parse an "a,b" float pair, as used by `--result` and `--tilt`.
pub(crate) fn parse_float_pair(s: &str, what: &str) -> AppResult<(f64, f64)> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(AppError::Other(format!(
            "invalid {what} '{s}': expected two comma-separated numbers"
        )));
    }

    let a = parts[0]
        .parse::<f64>()
        .map_err(|_| AppError::Other(format!("invalid {what} '{s}'")))?;
    let b = parts[1]
        .parse::<f64>()
        .map_err(|_| AppError::Other(format!("invalid {what} '{s}'")))?;

    Ok((a, b))
}

pub(crate) fn parse_landing(s: &str) -> AppResult<Landing> {
    let (x, y) = parse_float_pair(s, "landing offset")?;
    Landing::new(x, y)
}
