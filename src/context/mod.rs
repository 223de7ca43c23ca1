//! Round context collaborators.
//!
//! Course name and weather come from an external lookup the engine only
//! knows as a trait; a failed lookup routes to the manual-entry path, which
//! fills the same fields and marks the shots for later batch correction.

use crate::db::queries;
use crate::draft::SessionContext;
use crate::errors::AppResult;
use crate::models::Temperature;
use chrono::NaiveDate;
use rusqlite::Connection;

/// What the location/weather lookup returns for a coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedContext {
    pub temperature: Temperature,
    pub actual_temperature: Option<f64>,
    pub location_name: String,
}

/// External location/weather lookup. Failures are recoverable; callers fall
/// back to [`manual_session_context`].
pub trait ContextResolver {
    fn resolve(&self, latitude: f64, longitude: f64) -> AppResult<ResolvedContext>;
}

/// Session context from a successful lookup.
pub fn resolved_session_context<R: ContextResolver>(
    resolver: &R,
    latitude: f64,
    longitude: f64,
) -> AppResult<SessionContext> {
    let ctx = resolver.resolve(latitude, longitude)?;

    Ok(SessionContext {
        golf_course: Some(ctx.location_name),
        temperature: Some(ctx.temperature),
        actual_temperature: ctx.actual_temperature,
        latitude: Some(latitude),
        longitude: Some(longitude),
        manual_location: false,
    })
}

/// Session context typed in by hand. Shots saved with it stay candidates
/// for batch correction.
pub fn manual_session_context(
    golf_course: Option<String>,
    temperature: Option<Temperature>,
    actual_temperature: Option<f64>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> SessionContext {
    SessionContext {
        golf_course,
        temperature,
        actual_temperature,
        latitude,
        longitude,
        manual_location: true,
    }
}

/// Re-resolve today's hand-entered shots against accurate coordinates and
/// overwrite their context. Returns how many shots were corrected.
pub fn correct_todays_manual_shots<R: ContextResolver>(
    conn: &Connection,
    today: &NaiveDate,
    resolver: &R,
    latitude: f64,
    longitude: f64,
) -> AppResult<usize> {
    let candidates = queries::find_todays_manual_location_shots(conn, today)?;
    if candidates.is_empty() {
        return Ok(0);
    }

    let ctx = resolver.resolve(latitude, longitude)?;
    let ids: Vec<i64> = candidates.iter().map(|s| s.id).collect();

    queries::apply_location_to_shots(
        conn,
        &ids,
        &ctx.location_name,
        ctx.temperature,
        ctx.actual_temperature,
        latitude,
        longitude,
    )?;

    Ok(ids.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::draft::ShotDraft;
    use crate::errors::AppError;
    use crate::models::{Lie, MissType, Slope, Strength, Wind};
    use chrono::Local;

    struct StubResolver {
        fail: bool,
    }

    impl ContextResolver for StubResolver {
        fn resolve(&self, _lat: f64, _lon: f64) -> AppResult<ResolvedContext> {
            if self.fail {
                return Err(AppError::Other("lookup unreachable".into()));
            }
            Ok(ResolvedContext {
                temperature: Temperature::Summer,
                actual_temperature: Some(29.0),
                location_name: "Seaside Links".into(),
            })
        }
    }

    #[test]
    fn successful_lookup_fills_the_session_context() {
        let ctx = resolved_session_context(&StubResolver { fail: false }, 35.3, 139.5).unwrap();

        assert_eq!(ctx.golf_course.as_deref(), Some("Seaside Links"));
        assert_eq!(ctx.temperature, Some(Temperature::Summer));
        assert_eq!(ctx.latitude, Some(35.3));
        assert!(!ctx.manual_location);
    }

    #[test]
    fn failed_lookup_falls_back_to_manual_entry() {
        let err = resolved_session_context(&StubResolver { fail: true }, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, AppError::Other(_)));

        // The manual path fills the same fields and flags the shots.
        let ctx = manual_session_context(Some("Alpine GC".into()), None, None, None, None);
        assert!(ctx.manual_location);
        assert_eq!(ctx.golf_course.as_deref(), Some("Alpine GC"));
        assert_eq!(ctx.temperature, None);
    }

    #[test]
    fn batch_correction_rewrites_only_manual_shots() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();

        let manual = ShotDraft::with_context(manual_session_context(
            Some("somewhere".into()),
            None,
            None,
            None,
            None,
        ))
        .with_slope(Slope::Flat)
        .with_club("7I")
        .with_lie(Lie::Normal)
        .with_strength(Strength::Full)
        .with_wind(Wind::None)
        .with_miss(MissType::Top);

        let auto = manual
            .clone()
            .reset_for_next()
            .with_slope(Slope::Flat)
            .with_club("9I")
            .with_lie(Lie::Good)
            .with_strength(Strength::Full)
            .with_wind(Wind::None)
            .with_miss(MissType::Duff);
        let mut auto = auto;
        auto.context.manual_location = false;
        auto.context.golf_course = Some("Alpine GC".into());

        let now = Local::now().to_rfc3339();
        let manual_id =
            queries::insert_shot(&conn, &manual.try_into_new_shot(now.clone()).unwrap()).unwrap();
        let auto_id =
            queries::insert_shot(&conn, &auto.try_into_new_shot(now).unwrap()).unwrap();

        let corrected = correct_todays_manual_shots(
            &conn,
            &Local::now().date_naive(),
            &StubResolver { fail: false },
            35.3,
            139.5,
        )
        .unwrap();
        assert_eq!(corrected, 1);

        let fixed = queries::get_shot(&conn, manual_id).unwrap();
        assert_eq!(fixed.golf_course.as_deref(), Some("Seaside Links"));
        assert_eq!(fixed.temperature, Temperature::Summer);
        assert!(!fixed.manual_location);

        let untouched = queries::get_shot(&conn, auto_id).unwrap();
        assert_eq!(untouched.golf_course.as_deref(), Some("Alpine GC"));

        // Nothing manual left: the next run is a no-op.
        let again = correct_todays_manual_shots(
            &conn,
            &Local::now().date_naive(),
            &StubResolver { fail: false },
            35.3,
            139.5,
        )
        .unwrap();
        assert_eq!(again, 0);
    }
}
