use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{load_shots_where, ShotColumn};
use crate::errors::AppResult;
use crate::models::Shot;
use crate::utils::colors::{colorize_optional, CYAN, GREY, RESET};
use crate::utils::date::short_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        limit,
        club,
        course,
    } = cmd
    {
        let pool = open_pool(cfg)?;

        let mut filters = Vec::new();
        if let Some(c) = club {
            filters.push((ShotColumn::Club, c.clone()));
        }
        if let Some(c) = course {
            filters.push((ShotColumn::GolfCourse, c.clone()));
        }

        // Already ordered most recent first by the store contract.
        let shots = load_shots_where(&pool.conn, &filters)?;

        if shots.is_empty() {
            println!("No shots recorded.");
            return Ok(());
        }

        let shown = limit.unwrap_or(shots.len());
        for shot in shots.iter().take(shown) {
            print_shot_line(shot);
        }

        if shown < shots.len() {
            println!("{}… {} more{}", GREY, shots.len() - shown, RESET);
        }
    }
    Ok(())
}

fn print_shot_line(shot: &Shot) {
    let outcome = match (&shot.result, &shot.miss_type) {
        (Some(l), _) => format!("({:+.0},{:+.0})", l.x(), l.y()),
        (None, Some(m)) => m.to_db_str().to_string(),
        (None, None) => "--".to_string(),
    };

    println!(
        "{}#{:<5}{} {}  {:<4} {:<10} {:<8} {:<14} {:>4} yd  {}  {}",
        CYAN,
        shot.id,
        RESET,
        short_date(&shot.date),
        shot.club,
        shot.slope.to_db_str(),
        shot.lie.to_db_str(),
        outcome,
        shot.distance.unwrap_or(0),
        colorize_optional(shot.golf_course.as_deref().unwrap_or("--")),
        colorize_optional(shot.memo.as_deref().unwrap_or("")),
    );
}
