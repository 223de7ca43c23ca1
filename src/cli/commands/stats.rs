use super::{
    open_pool, parse_feeling, parse_lie, parse_slope, parse_strength, parse_temperature,
    parse_wind,
};
use crate::analytics::{
    average_distance, categorize_result, miss_tally, unique_courses, Outcome, ScatterPlot,
    ScatterRange, ShotFilter,
};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::load_all_shots;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, RESET, YELLOW};
use std::collections::BTreeMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        clubs,
        slopes,
        lies,
        strengths,
        winds,
        temps,
        feelings,
        courses,
        scatter,
    } = cmd
    {
        let pool = open_pool(cfg)?;
        let shots = load_all_shots(&pool.conn)?;

        //
        // 1. Build the multi-select filter from the repeated flags.
        //
        let mut filter = ShotFilter::new();
        filter.clubs = clubs.iter().cloned().collect();
        filter.courses = courses.iter().cloned().collect();
        for s in slopes {
            filter.slopes.insert(parse_slope(s)?);
        }
        for l in lies {
            filter.lies.insert(parse_lie(l)?);
        }
        for s in strengths {
            filter.strengths.insert(parse_strength(s)?);
        }
        for w in winds {
            filter.winds.insert(parse_wind(w)?);
        }
        for t in temps {
            filter.temperatures.insert(parse_temperature(t)?);
        }
        for f in feelings {
            filter.feelings.insert(parse_feeling(f)?);
        }

        let selected = filter.apply(&shots);

        println!();
        println!(
            "{}• Shots:{} {} of {}",
            CYAN,
            RESET,
            selected.len(),
            shots.len()
        );

        //
        // 2. Scalar statistics.
        //
        let avg = average_distance(selected.iter().copied());
        println!("{}• Average distance:{} {:.1} yd", CYAN, RESET, avg);

        let tally = miss_tally(selected.iter().copied());
        if !tally.is_empty() {
            println!("{}• Misses:{}", CYAN, RESET);
            for (miss, count) in &tally {
                println!("    {:<6} {}", miss.to_db_str(), count);
            }
        }

        //
        // 3. Outcome bands over coordinate results.
        //
        let mut outcomes: BTreeMap<&'static str, usize> = BTreeMap::new();
        for shot in &selected {
            if let Some(landing) = shot.result {
                let band: Outcome = categorize_result(&landing);
                *outcomes.entry(band.to_db_str()).or_insert(0) += 1;
            }
        }
        if !outcomes.is_empty() {
            println!("{}• Outcomes:{}", CYAN, RESET);
            for (band, count) in &outcomes {
                println!("    {:<10} {}", band, count);
            }
        }

        //
        // 4. Optional scatter positions.
        //
        if let Some(range_yds) = scatter {
            let range = ScatterRange::from_yards(*range_yds).ok_or_else(|| {
                AppError::Other(format!(
                    "invalid scatter range {range_yds}: expected 30 or 70"
                ))
            })?;

            let rim = cfg.scatter_pixel_radius;
            let plot = ScatterPlot::new(range, rim, rim, rim);

            println!("{}• Scatter ({} yd range):{}", CYAN, range.yards(), RESET);
            let mut excluded = 0usize;
            for shot in &selected {
                if let Some(landing) = shot.result {
                    match plot.place(&landing) {
                        Some((px, py)) => {
                            println!("    #{:<5} → ({:.1}, {:.1})", shot.id, px, py)
                        }
                        None => excluded += 1,
                    }
                }
            }
            if excluded > 0 {
                println!(
                    "    {}{} shot(s) outside the {} yd window{}",
                    YELLOW,
                    excluded,
                    range.yards(),
                    RESET
                );
            }
        }

        //
        // 5. Courses seen in the selection.
        //
        let courses_seen = unique_courses(selected.iter().copied());
        if !courses_seen.is_empty() {
            println!("{}• Courses:{} {}", CYAN, RESET, courses_seen.join(", "));
        }

        println!();
    }
    Ok(())
}
