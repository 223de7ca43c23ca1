//! Versioned schema migration engine.
//!
//! The schema version lives in `PRAGMA user_version` and only ever grows.
//! Migrations are an ordered list of `(version, tag, upgrade fn)` entries:
//! opening the store applies every pending entry, in order, before any query
//! is served. Each upgrade is additive (new tables / new columns with safe
//! defaults) and idempotent, so re-running a step on an already-upgraded
//! schema is a no-op. Applied steps are audited in the `log` table.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

type UpgradeFn = fn(&Connection) -> AppResult<()>;

/// All schema versions, oldest first. Version N+1 assumes version N's shape.
const MIGRATIONS: &[(i64, &str, UpgradeFn)] = &[
    (1, "0001_create_shots_and_settings", migrate_v1),
    (2, "0002_add_temperature_and_feeling", migrate_v2),
    (3, "0003_add_miss_type", migrate_v3),
    (4, "0004_create_calibration", migrate_v4),
    (5, "0005_add_course_context", migrate_v5),
];

/// Ensure the audit `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn user_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(v)
}

fn set_user_version(conn: &Connection, version: i64) -> AppResult<()> {
    // PRAGMA does not accept bound parameters.
    conn.execute_batch(&format!("PRAGMA user_version = {};", version))?;
    Ok(())
}

fn mark_applied(conn: &Connection, tag: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [tag, message],
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Add a column unless it is already there.
fn add_column(conn: &Connection, table: &str, decl: &str) -> AppResult<()> {
    let column = decl.split_whitespace().next().unwrap_or(decl);
    if has_column(conn, table, column)? {
        return Ok(());
    }
    conn.execute(&format!("ALTER TABLE {} ADD COLUMN {};", table, decl), [])
        .map_err(|e| AppError::Migration(format!("adding {}.{}: {}", table, column, e)))?;
    Ok(())
}

/// v1 — core `shots` table and the key/value `settings` table.
fn migrate_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS shots (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            created_at  INTEGER NOT NULL,
            slope       TEXT NOT NULL,
            club        TEXT NOT NULL,
            lie         TEXT NOT NULL,
            strength    TEXT NOT NULL,
            wind        TEXT NOT NULL DEFAULT 'none',
            result_x    REAL,
            result_y    REAL,
            distance    INTEGER,
            memo        TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_shots_created_at ON shots(created_at DESC);

        CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// v2 — seasonal temperature bucket and the optional feeling field.
/// Pre-existing rows default to `mid-season`.
fn migrate_v2(conn: &Connection) -> AppResult<()> {
    add_column(
        conn,
        "shots",
        "temperature TEXT NOT NULL DEFAULT 'mid-season'",
    )?;
    add_column(conn, "shots", "feeling TEXT")?;
    Ok(())
}

/// v3 — categorical miss label, NULL for every pre-existing row
/// (old rows always carried a coordinate result).
fn migrate_v3(conn: &Connection) -> AppResult<()> {
    add_column(conn, "shots", "miss_type TEXT")?;
    Ok(())
}

/// v4 — singleton calibration record.
fn migrate_v4(conn: &Connection) -> AppResult<()> {
    if table_exists(conn, "calibration")? {
        return Ok(());
    }
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS calibration (
            id          INTEGER PRIMARY KEY CHECK (id = 1),
            x_offset    REAL NOT NULL,
            y_offset    REAL NOT NULL,
            z_offset    REAL NOT NULL,
            captured_at INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// v5 — round context: course name, measured temperature, coordinates and
/// the manual-entry flag driving batch correction.
fn migrate_v5(conn: &Connection) -> AppResult<()> {
    add_column(conn, "shots", "golf_course TEXT")?;
    add_column(conn, "shots", "actual_temperature REAL")?;
    add_column(conn, "shots", "latitude REAL")?;
    add_column(conn, "shots", "longitude REAL")?;
    add_column(conn, "shots", "manual_location INTEGER NOT NULL DEFAULT 0")?;
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_shots_manual_location ON shots(manual_location);",
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let current = user_version(conn)?;

    for (version, tag, upgrade) in MIGRATIONS {
        if *version <= current {
            continue;
        }

        upgrade(conn).map_err(|e| match e {
            AppError::Migration(m) => AppError::Migration(m),
            other => AppError::Migration(format!("step {} ({}): {}", version, tag, other)),
        })?;

        set_user_version(conn, *version)?;
        mark_applied(
            conn,
            tag,
            &format!("Schema upgraded to version {}", version),
        )?;
    }

    Ok(())
}

/// Print the migration audit trail, most recent first.
pub fn print_applied_migrations(conn: &Connection) -> AppResult<()> {
    let mut stmt = conn.prepare(
        "SELECT date, target FROM log
         WHERE operation = 'migration_applied'
         ORDER BY id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    for r in rows {
        let (date, target) = r?;
        println!("{}  {}", date, target);
    }

    success(format!(
        "Schema version: {}",
        user_version(conn).unwrap_or(0)
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mem_conn() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn fresh_db_reaches_latest_version() {
        let conn = mem_conn();
        run_pending_migrations(&conn).unwrap();

        let latest = MIGRATIONS.last().unwrap().0;
        assert_eq!(user_version(&conn).unwrap(), latest);
        assert!(table_exists(&conn, "shots").unwrap());
        assert!(table_exists(&conn, "settings").unwrap());
        assert!(table_exists(&conn, "calibration").unwrap());
        assert!(has_column(&conn, "shots", "manual_location").unwrap());
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = mem_conn();
        run_pending_migrations(&conn).unwrap();

        // Force every step to run again: the column/table probes must make
        // each upgrade a no-op instead of an error.
        set_user_version(&conn, 0).unwrap();
        run_pending_migrations(&conn).unwrap();

        assert_eq!(user_version(&conn).unwrap(), MIGRATIONS.last().unwrap().0);
    }

    #[test]
    fn v1_rows_survive_later_migrations_with_defaults() {
        let conn = mem_conn();

        // Simulate a device that stopped at v1.
        ensure_log_table(&conn).unwrap();
        migrate_v1(&conn).unwrap();
        set_user_version(&conn, 1).unwrap();

        conn.execute(
            "INSERT INTO shots (date, created_at, slope, club, lie, strength, wind, result_x, result_y, distance)
             VALUES ('2024-05-01T09:00:00+09:00', 1714521600000, 'flat', '7I', 'normal', 'full', 'none', 2.0, -4.0, 150)",
            [],
        )
        .unwrap();

        run_pending_migrations(&conn).unwrap();

        let (temp, miss, manual): (String, Option<String>, i64) = conn
            .query_row(
                "SELECT temperature, miss_type, manual_location FROM shots",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();

        assert_eq!(temp, "mid-season");
        assert_eq!(miss, None);
        assert_eq!(manual, 0);
    }
}
