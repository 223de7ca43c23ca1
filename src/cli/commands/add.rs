use super::{
    open_pool, parse_feeling, parse_float_pair, parse_landing, parse_lie, parse_miss, parse_slope,
    parse_strength, parse_temperature, parse_wind,
};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::context::manual_session_context;
use crate::db::queries::insert_shot;
use crate::db::settings::{
    get_setting, put_setting, SETTING_CLUBS, SETTING_LAST_CONTEXT, SETTING_SENSOR_PERMISSION,
};
use crate::draft::{SessionContext, ShotDraft};
use crate::errors::AppResult;
use crate::models::{club::default_clubs, Calibration, Temperature};
use crate::sensor::{classify, SensorStatus};
use crate::ui::messages::{success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        slope,
        tilt,
        club,
        lie,
        strength,
        wind,
        result,
        miss,
        distance,
        feeling,
        memo,
        course,
        temp,
        actual_temp,
        lat,
        lon,
        manual_location,
        date: date_flag,
    } = cmd
    {
        let pool = open_pool(cfg)?;

        //
        // 1. Session context: explicit flags win; otherwise reuse the cached
        //    round context so consecutive shots don't re-enter it.
        //
        let has_context_flags =
            course.is_some() || temp.is_some() || actual_temp.is_some() || lat.is_some();

        let context = if has_context_flags {
            let temperature = match temp {
                Some(t) => Some(parse_temperature(t)?),
                None => actual_temp.map(Temperature::from_celsius),
            };

            if *manual_location {
                manual_session_context(course.clone(), temperature, *actual_temp, *lat, *lon)
            } else {
                SessionContext {
                    golf_course: course.clone(),
                    temperature,
                    actual_temperature: *actual_temp,
                    latitude: *lat,
                    longitude: *lon,
                    manual_location: false,
                }
            }
        } else {
            get_setting(&pool.conn, SETTING_LAST_CONTEXT, SessionContext::default())?
        };

        let mut draft = ShotDraft::with_context(context);

        //
        // 2. Slope: an explicit choice suppresses the sensor; a raw tilt
        //    reading only auto-fills while no choice was made.
        //
        if let Some(s) = slope {
            draft = draft.with_slope(parse_slope(s)?);
        }

        if let Some(t) = tilt {
            let (beta, gamma) = parse_float_pair(t, "tilt reading")?;

            // A reading on the command line means the sensor is available;
            // the stored permission flag can still veto it.
            let status = SensorStatus {
                available: true,
                permission_granted: get_setting(&pool.conn, SETTING_SENSOR_PERMISSION, true)?,
            };

            if !status.usable() {
                warning("Sensor permission denied; pick the slope manually.");
            } else if cfg.auto_fill_slope {
                let calibration = crate::db::settings::get_calibration(&pool.conn)?
                    .unwrap_or_else(Calibration::zero);
                if calibration.captured_at == 0 {
                    warning("No calibration stored; classifying against a zero offset.");
                }
                draft = draft.observe_slope(classify(beta, gamma, &calibration));
            }
        }

        //
        // 3. Remaining capture fields.
        //
        if let Some(c) = club {
            let clubs: Vec<String> = get_setting(&pool.conn, SETTING_CLUBS, default_clubs())?;
            if !clubs.iter().any(|k| k == c) {
                warning(format!("Club '{}' is not in the configured club list.", c));
            }
            draft = draft.with_club(c.clone());
        }
        if let Some(l) = lie {
            draft = draft.with_lie(parse_lie(l)?);
        }
        if let Some(s) = strength {
            draft = draft.with_strength(parse_strength(s)?);
        }
        if let Some(w) = wind {
            draft = draft.with_wind(parse_wind(w)?);
        }
        if let Some(r) = result {
            draft = draft.with_result(parse_landing(r)?);
        }
        if let Some(m) = miss {
            draft = draft.with_miss(parse_miss(m)?);
        }
        if let Some(f) = feeling {
            draft.feeling = Some(parse_feeling(f)?);
        }
        draft.distance = *distance;
        draft.memo = memo.clone();
        draft.date = date_flag.clone();

        //
        // 4. Completion gate, then persist. A failed save leaves the draft
        //    content in the user's hands (flags), nothing is half-written.
        //
        if !draft.is_ready_to_save() {
            let pct = draft.completion_percentage();
            warning(format!("Draft is {}% complete.", pct));
        }

        let context_snapshot = draft.context.clone();
        let record = draft.try_into_new_shot(date::now_rfc3339())?;

        let id = insert_shot(&pool.conn, &record)?;

        // Cache the round context for the next shot.
        put_setting(&pool.conn, SETTING_LAST_CONTEXT, &context_snapshot)?;

        success(format!("Shot recorded with id {}.", id));
    }
    Ok(())
}
