//! Key/value settings and the singleton calibration record.
//!
//! Setting values are arbitrary serde payloads stored as JSON TEXT, so the
//! club list, field toggles and the cached context snapshot all share one
//! table.

use crate::errors::{AppError, AppResult};
use crate::models::Calibration;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Engine setting keys.
pub const SETTING_CLUBS: &str = "clubs";
pub const SETTING_ENABLED_FIELDS: &str = "enabled_fields";
pub const SETTING_LAST_CONTEXT: &str = "last_context";
pub const SETTING_SENSOR_PERMISSION: &str = "sensor_permission";

/// Read a setting, falling back to `default` when the key is absent.
pub fn get_setting<T: DeserializeOwned>(conn: &Connection, key: &str, default: T) -> AppResult<T> {
    let raw: Option<String> = conn
        .query_row("SELECT value FROM settings WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?;

    match raw {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| AppError::Config(format!("setting '{}' is corrupt: {}", key, e))),
        None => Ok(default),
    }
}

/// Write a setting, replacing any previous value for the key.
pub fn put_setting<T: Serialize>(conn: &Connection, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| AppError::Config(format!("setting '{}' not serializable: {}", key, e)))?;

    conn.execute(
        "INSERT INTO settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, json],
    )?;
    Ok(())
}

pub fn get_calibration(conn: &Connection) -> AppResult<Option<Calibration>> {
    let row = conn
        .query_row(
            "SELECT x_offset, y_offset, z_offset, captured_at FROM calibration WHERE id = 1",
            [],
            |row| {
                Ok(Calibration {
                    x_offset: row.get(0)?,
                    y_offset: row.get(1)?,
                    z_offset: row.get(2)?,
                    captured_at: row.get(3)?,
                })
            },
        )
        .optional()?;

    Ok(row)
}

/// Overwrite the calibration in place. Never historized.
pub fn put_calibration(conn: &Connection, cal: &Calibration) -> AppResult<()> {
    conn.execute(
        "INSERT INTO calibration (id, x_offset, y_offset, z_offset, captured_at)
         VALUES (1, ?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
             x_offset = excluded.x_offset,
             y_offset = excluded.y_offset,
             z_offset = excluded.z_offset,
             captured_at = excluded.captured_at",
        params![cal.x_offset, cal.y_offset, cal.z_offset, cal.captured_at],
    )?;
    Ok(())
}
