use crate::errors::{AppError, AppResult};
use crate::models::{
    Feeling, Landing, Lie, MissType, NewShot, Shot, Slope, Strength, Temperature, Wind,
};
use chrono::{Local, NaiveDate, Utc};
use rusqlite::{params, Connection, Result, Row};

fn invalid_text(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Shot> {
    let slope_str: String = row.get("slope")?;
    let slope = Slope::from_db_str(&slope_str)
        .ok_or_else(|| invalid_text(AppError::InvalidSlope(slope_str.clone())))?;

    let lie_str: String = row.get("lie")?;
    let lie = Lie::from_db_str(&lie_str)
        .ok_or_else(|| invalid_text(AppError::InvalidLie(lie_str.clone())))?;

    let strength_str: String = row.get("strength")?;
    let strength = Strength::from_db_str(&strength_str)
        .ok_or_else(|| invalid_text(AppError::InvalidStrength(strength_str.clone())))?;

    let wind_str: String = row.get("wind")?;
    let wind = Wind::from_db_str(&wind_str)
        .ok_or_else(|| invalid_text(AppError::InvalidWind(wind_str.clone())))?;

    let temp_str: String = row.get("temperature")?;
    let temperature = Temperature::from_db_str(&temp_str)
        .ok_or_else(|| invalid_text(AppError::InvalidTemperature(temp_str.clone())))?;

    let result = match (
        row.get::<_, Option<f64>>("result_x")?,
        row.get::<_, Option<f64>>("result_y")?,
    ) {
        (Some(x), Some(y)) => Some(Landing::raw(x, y)),
        _ => None,
    };

    let miss_type = match row.get::<_, Option<String>>("miss_type")? {
        Some(m) => Some(
            MissType::from_db_str(&m)
                .ok_or_else(|| invalid_text(AppError::InvalidMissType(m.clone())))?,
        ),
        None => None,
    };

    let feeling = match row.get::<_, Option<String>>("feeling")? {
        Some(f) => Some(
            Feeling::from_db_str(&f)
                .ok_or_else(|| invalid_text(AppError::InvalidFeeling(f.clone())))?,
        ),
        None => None,
    };

    Ok(Shot {
        id: row.get("id")?,
        date: row.get("date")?,
        created_at: row.get("created_at")?,
        slope,
        club: row.get("club")?,
        lie,
        strength,
        wind,
        temperature,
        result,
        miss_type,
        distance: row.get("distance")?,
        feeling,
        memo: row.get("memo")?,
        golf_course: row.get("golf_course")?,
        actual_temperature: row.get("actual_temperature")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
        manual_location: row.get::<_, i64>("manual_location")? == 1,
    })
}

/// Persist a completed draft. Assigns `created_at` and returns the new id.
pub fn insert_shot(conn: &Connection, shot: &NewShot) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO shots (date, created_at, slope, club, lie, strength, wind,
                            temperature, result_x, result_y, miss_type, distance,
                            feeling, memo, golf_course, actual_temperature,
                            latitude, longitude, manual_location)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
        params![
            shot.date,
            Utc::now().timestamp_millis(),
            shot.slope.to_db_str(),
            shot.club,
            shot.lie.to_db_str(),
            shot.strength.to_db_str(),
            shot.wind.to_db_str(),
            shot.temperature.to_db_str(),
            shot.result.map(|l| l.x()),
            shot.result.map(|l| l.y()),
            shot.miss_type.map(|m| m.to_db_str()),
            shot.distance,
            shot.feeling.map(|f| f.to_db_str()),
            shot.memo,
            shot.golf_course,
            shot.actual_temperature,
            shot.latitude,
            shot.longitude,
            if shot.manual_location { 1 } else { 0 },
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn get_shot(conn: &Connection, id: i64) -> AppResult<Shot> {
    let mut stmt = conn.prepare("SELECT * FROM shots WHERE id = ?1")?;

    stmt.query_row([id], map_row).map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::ShotNotFound(id),
        other => AppError::Db(other),
    })
}

pub fn delete_shot(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM shots WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::ShotNotFound(id));
    }
    Ok(())
}

/// All shots, most recent first. History views and course extraction rely
/// on this ordering.
pub fn load_all_shots(conn: &Connection) -> AppResult<Vec<Shot>> {
    let mut stmt = conn.prepare("SELECT * FROM shots ORDER BY created_at DESC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Columns that `load_shots_where` accepts as equality filters.
/// Keeping this closed avoids interpolating caller strings into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotColumn {
    Slope,
    Club,
    Lie,
    Strength,
    Wind,
    Temperature,
    Feeling,
    GolfCourse,
}

impl ShotColumn {
    fn col_name(&self) -> &'static str {
        match self {
            ShotColumn::Slope => "slope",
            ShotColumn::Club => "club",
            ShotColumn::Lie => "lie",
            ShotColumn::Strength => "strength",
            ShotColumn::Wind => "wind",
            ShotColumn::Temperature => "temperature",
            ShotColumn::Feeling => "feeling",
            ShotColumn::GolfCourse => "golf_course",
        }
    }
}

/// Shots matching every `(column, value)` pair exactly (logical AND).
/// Richer OR-within-category semantics live in the analytics filter.
pub fn load_shots_where(
    conn: &Connection,
    filters: &[(ShotColumn, String)],
) -> AppResult<Vec<Shot>> {
    if filters.is_empty() {
        return load_all_shots(conn);
    }

    let clause = filters
        .iter()
        .enumerate()
        .map(|(i, (col, _))| format!("{} = ?{}", col.col_name(), i + 1))
        .collect::<Vec<_>>()
        .join(" AND ");

    let sql = format!(
        "SELECT * FROM shots WHERE {} ORDER BY created_at DESC",
        clause
    );

    let values: Vec<&dyn rusqlite::ToSql> = filters
        .iter()
        .map(|(_, v)| v as &dyn rusqlite::ToSql)
        .collect();

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(values), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Partial update for one shot. `None` leaves a field untouched; for
/// nullable fields the inner Option distinguishes "set" from "clear".
#[derive(Debug, Clone, Default)]
pub struct ShotPatch {
    pub date: Option<String>,
    pub slope: Option<Slope>,
    pub club: Option<String>,
    pub lie: Option<Lie>,
    pub strength: Option<Strength>,
    pub wind: Option<Wind>,
    pub temperature: Option<Temperature>,
    pub result: Option<Option<Landing>>,
    pub miss_type: Option<Option<MissType>>,
    pub distance: Option<Option<i64>>,
    pub feeling: Option<Option<Feeling>>,
    pub memo: Option<Option<String>>,
    pub golf_course: Option<Option<String>>,
    pub actual_temperature: Option<Option<f64>>,
    pub latitude: Option<Option<f64>>,
    pub longitude: Option<Option<f64>>,
    pub manual_location: Option<bool>,
}

/// Merge `patch` into the stored shot. Does not re-check result/miss
/// exclusivity: the draft layer clears the counterpart field and sends both
/// sides in its patch.
pub fn update_shot_fields(conn: &Connection, id: i64, patch: &ShotPatch) -> AppResult<()> {
    let mut shot = get_shot(conn, id)?;

    if let Some(v) = &patch.date {
        shot.date = v.clone();
    }
    if let Some(v) = patch.slope {
        shot.slope = v;
    }
    if let Some(v) = &patch.club {
        shot.club = v.clone();
    }
    if let Some(v) = patch.lie {
        shot.lie = v;
    }
    if let Some(v) = patch.strength {
        shot.strength = v;
    }
    if let Some(v) = patch.wind {
        shot.wind = v;
    }
    if let Some(v) = patch.temperature {
        shot.temperature = v;
    }
    if let Some(v) = patch.result {
        shot.result = v;
    }
    if let Some(v) = patch.miss_type {
        shot.miss_type = v;
    }
    if let Some(v) = patch.distance {
        shot.distance = v;
    }
    if let Some(v) = patch.feeling {
        shot.feeling = v;
    }
    if let Some(v) = &patch.memo {
        shot.memo = v.clone();
    }
    if let Some(v) = &patch.golf_course {
        shot.golf_course = v.clone();
    }
    if let Some(v) = patch.actual_temperature {
        shot.actual_temperature = v;
    }
    if let Some(v) = patch.latitude {
        shot.latitude = v;
    }
    if let Some(v) = patch.longitude {
        shot.longitude = v;
    }
    if let Some(v) = patch.manual_location {
        shot.manual_location = v;
    }

    conn.execute(
        "UPDATE shots
         SET date = ?1, slope = ?2, club = ?3, lie = ?4, strength = ?5,
             wind = ?6, temperature = ?7, result_x = ?8, result_y = ?9,
             miss_type = ?10, distance = ?11, feeling = ?12, memo = ?13,
             golf_course = ?14, actual_temperature = ?15, latitude = ?16,
             longitude = ?17, manual_location = ?18
         WHERE id = ?19",
        params![
            shot.date,
            shot.slope.to_db_str(),
            shot.club,
            shot.lie.to_db_str(),
            shot.strength.to_db_str(),
            shot.wind.to_db_str(),
            shot.temperature.to_db_str(),
            shot.result.map(|l| l.x()),
            shot.result.map(|l| l.y()),
            shot.miss_type.map(|m| m.to_db_str()),
            shot.distance,
            shot.feeling.map(|f| f.to_db_str()),
            shot.memo,
            shot.golf_course,
            shot.actual_temperature,
            shot.latitude,
            shot.longitude,
            if shot.manual_location { 1 } else { 0 },
            id,
        ],
    )?;

    Ok(())
}

fn local_day_bounds_ms(day: &NaiveDate) -> AppResult<(i64, i64)> {
    let start = day
        .and_hms_opt(0, 0, 0)
        .and_then(|dt| dt.and_local_timezone(Local).earliest())
        .ok_or_else(|| AppError::InvalidDate(day.to_string()))?
        .timestamp_millis();
    Ok((start, start + 86_400_000))
}

/// Shots recorded today whose context was typed in by hand. These are the
/// candidates for batch correction once resolved context is available.
pub fn find_todays_manual_location_shots(
    conn: &Connection,
    today: &NaiveDate,
) -> AppResult<Vec<Shot>> {
    let (start, end) = local_day_bounds_ms(today)?;

    let mut stmt = conn.prepare(
        "SELECT * FROM shots
         WHERE manual_location = 1 AND created_at >= ?1 AND created_at < ?2
         ORDER BY created_at DESC",
    )?;
    let rows = stmt.query_map(params![start, end], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Overwrite the context fields of the given shots with resolved data and
/// drop their manual flag.
pub fn apply_location_to_shots(
    conn: &Connection,
    ids: &[i64],
    golf_course: &str,
    temperature: Temperature,
    actual_temperature: Option<f64>,
    latitude: f64,
    longitude: f64,
) -> AppResult<()> {
    for id in ids {
        let n = conn.execute(
            "UPDATE shots
             SET golf_course = ?1, temperature = ?2, actual_temperature = ?3,
                 latitude = ?4, longitude = ?5, manual_location = 0
             WHERE id = ?6",
            params![
                golf_course,
                temperature.to_db_str(),
                actual_temperature,
                latitude,
                longitude,
                id,
            ],
        )?;
        if n == 0 {
            return Err(AppError::ShotNotFound(*id));
        }
    }
    Ok(())
}
