use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::DateTime;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL SHOTS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM shots", [], |row| row.get(0))?;
    println!("{}• Total shots:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) RECORDING RANGE
    //
    let first: Option<i64> = pool
        .conn
        .query_row("SELECT MIN(created_at) FROM shots", [], |row| row.get(0))
        .optional()?
        .flatten();

    let last: Option<i64> = pool
        .conn
        .query_row("SELECT MAX(created_at) FROM shots", [], |row| row.get(0))
        .optional()?
        .flatten();

    println!("{}• Recorded range:{}", CYAN, RESET);
    println!("    from: {}", fmt_epoch_ms(first));
    println!("    to:   {}", fmt_epoch_ms(last));

    //
    // 4) DISTINCT COURSES
    //
    let courses: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT golf_course) FROM shots WHERE golf_course IS NOT NULL",
        [],
        |row| row.get(0),
    )?;
    println!("{}• Courses seen:{} {}", CYAN, RESET, courses);

    println!();
    Ok(())
}

fn fmt_epoch_ms(ms: Option<i64>) -> String {
    match ms.and_then(DateTime::from_timestamp_millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => format!("{GREY}--{RESET}"),
    }
}
