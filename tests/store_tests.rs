//! Library-level store tests: CRUD round trips, partial updates, equality
//! filters and settings, driven through the crate API on in-memory DBs.

use rshotlogger::db::initialize::init_db;
use rshotlogger::db::queries::{
    self, ShotColumn, ShotPatch,
};
use rshotlogger::db::settings::{
    get_calibration, get_setting, put_calibration, put_setting, SETTING_CLUBS,
};
use rshotlogger::models::{
    Calibration, Feeling, Landing, Lie, MissType, NewShot, Slope, Strength, Temperature, Wind,
};
use rusqlite::Connection;

fn open_store() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("run migrations");
    conn
}

fn new_shot(club: &str) -> NewShot {
    NewShot {
        date: "2024-06-01T10:00:00+09:00".into(),
        slope: Slope::LeftUpToeDown,
        club: club.into(),
        lie: Lie::Good,
        strength: Strength::Normal,
        wind: Wind::from_db_str("down-right-weak").unwrap(),
        temperature: Temperature::Summer,
        result: Some(Landing::new(3.0, -6.0).unwrap()),
        miss_type: None,
        distance: Some(145),
        feeling: Some(Feeling::Good),
        memo: Some("slight fade".into()),
        golf_course: Some("Seaside Links".into()),
        actual_temperature: Some(27.5),
        latitude: Some(35.3),
        longitude: Some(139.5),
        manual_location: false,
    }
}

#[test]
fn create_then_read_round_trips_every_field() {
    let conn = open_store();

    let id = queries::insert_shot(&conn, &new_shot("7I")).unwrap();
    let shot = queries::get_shot(&conn, id).unwrap();

    assert_eq!(shot.id, id);
    assert!(shot.created_at > 0);
    assert_eq!(shot.date, "2024-06-01T10:00:00+09:00");
    assert_eq!(shot.slope, Slope::LeftUpToeDown);
    assert_eq!(shot.club, "7I");
    assert_eq!(shot.lie, Lie::Good);
    assert_eq!(shot.strength, Strength::Normal);
    assert_eq!(shot.wind.to_db_str(), "down-right-weak");
    assert_eq!(shot.temperature, Temperature::Summer);
    let landing = shot.result.unwrap();
    assert_eq!((landing.x(), landing.y()), (3.0, -6.0));
    assert_eq!(shot.miss_type, None);
    assert_eq!(shot.distance, Some(145));
    assert_eq!(shot.feeling, Some(Feeling::Good));
    assert_eq!(shot.memo.as_deref(), Some("slight fade"));
    assert_eq!(shot.golf_course.as_deref(), Some("Seaside Links"));
    assert_eq!(shot.actual_temperature, Some(27.5));
    assert!(!shot.manual_location);
    assert!(shot.has_outcome());
}

#[test]
fn read_missing_shot_is_not_found() {
    let conn = open_store();

    assert!(matches!(
        queries::get_shot(&conn, 42),
        Err(rshotlogger::errors::AppError::ShotNotFound(42))
    ));
}

#[test]
fn partial_update_touches_only_patched_fields() {
    let conn = open_store();
    let id = queries::insert_shot(&conn, &new_shot("7I")).unwrap();

    let patch = ShotPatch {
        distance: Some(Some(160)),
        miss_type: Some(Some(MissType::Over)),
        result: Some(None),
        ..ShotPatch::default()
    };
    queries::update_shot_fields(&conn, id, &patch).unwrap();

    let shot = queries::get_shot(&conn, id).unwrap();
    assert_eq!(shot.distance, Some(160));
    assert_eq!(shot.miss_type, Some(MissType::Over));
    assert!(shot.result.is_none());
    // Untouched fields survive.
    assert_eq!(shot.club, "7I");
    assert_eq!(shot.memo.as_deref(), Some("slight fade"));
    assert!(shot.has_outcome());

    assert!(matches!(
        queries::update_shot_fields(&conn, 999, &ShotPatch::default()),
        Err(rshotlogger::errors::AppError::ShotNotFound(999))
    ));
}

#[test]
fn delete_removes_the_row() {
    let conn = open_store();
    let id = queries::insert_shot(&conn, &new_shot("7I")).unwrap();

    queries::delete_shot(&conn, id).unwrap();
    assert!(queries::get_shot(&conn, id).is_err());
    assert!(queries::delete_shot(&conn, id).is_err());
}

#[test]
fn list_where_is_an_and_of_equalities() {
    let conn = open_store();

    queries::insert_shot(&conn, &new_shot("7I")).unwrap();
    queries::insert_shot(&conn, &new_shot("9I")).unwrap();
    let mut other_lie = new_shot("7I");
    other_lie.lie = Lie::Bunker;
    queries::insert_shot(&conn, &other_lie).unwrap();

    let shots = queries::load_shots_where(
        &conn,
        &[
            (ShotColumn::Club, "7I".to_string()),
            (ShotColumn::Lie, "good".to_string()),
        ],
    )
    .unwrap();

    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].club, "7I");
    assert_eq!(shots[0].lie, Lie::Good);

    // No filters: everything, newest first.
    let all = queries::load_shots_where(&conn, &[]).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn settings_round_trip_and_default() {
    let conn = open_store();

    let fallback = vec!["7I".to_string()];
    let clubs: Vec<String> = get_setting(&conn, SETTING_CLUBS, fallback.clone()).unwrap();
    assert_eq!(clubs, fallback);

    let custom = vec!["D".to_string(), "PT".to_string()];
    put_setting(&conn, SETTING_CLUBS, &custom).unwrap();
    let clubs: Vec<String> = get_setting(&conn, SETTING_CLUBS, fallback).unwrap();
    assert_eq!(clubs, custom);
}

#[test]
fn calibration_is_a_singleton_overwritten_in_place() {
    let conn = open_store();

    assert!(get_calibration(&conn).unwrap().is_none());

    let first = Calibration {
        x_offset: 1.0,
        y_offset: 2.0,
        z_offset: 0.5,
        captured_at: 1_700_000_000_000,
    };
    put_calibration(&conn, &first).unwrap();
    assert_eq!(get_calibration(&conn).unwrap(), Some(first));

    let second = Calibration {
        x_offset: -0.25,
        y_offset: 0.75,
        z_offset: 0.0,
        captured_at: 1_700_000_100_000,
    };
    put_calibration(&conn, &second).unwrap();
    assert_eq!(get_calibration(&conn).unwrap(), Some(second));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM calibration", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
