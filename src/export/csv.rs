use crate::models::Shot;
use csv::Writer;

/// Write the shot history as CSV.
pub fn write_csv(path: &str, shots: &[Shot]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "date",
        "slope",
        "club",
        "lie",
        "strength",
        "wind",
        "temperature",
        "result_x",
        "result_y",
        "miss_type",
        "distance",
        "feeling",
        "golf_course",
        "memo",
    ])?;

    for shot in shots {
        wtr.write_record(&[
            shot.id.to_string(),
            shot.date.clone(),
            shot.slope.to_db_str().to_string(),
            shot.club.clone(),
            shot.lie.to_db_str().to_string(),
            shot.strength.to_db_str().to_string(),
            shot.wind.to_db_str(),
            shot.temperature.to_db_str().to_string(),
            shot.result.map(|l| l.x().to_string()).unwrap_or_default(),
            shot.result.map(|l| l.y().to_string()).unwrap_or_default(),
            shot.miss_type
                .map(|m| m.to_db_str().to_string())
                .unwrap_or_default(),
            shot.distance.map(|d| d.to_string()).unwrap_or_default(),
            shot.feeling
                .map(|f| f.to_db_str().to_string())
                .unwrap_or_default(),
            shot.golf_course.clone().unwrap_or_default(),
            shot.memo.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
