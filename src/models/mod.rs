pub mod calibration;
pub mod club;
pub mod feeling;
pub mod lie;
pub mod miss;
pub mod shot;
pub mod slope;
pub mod strength;
pub mod temperature;
pub mod wind;

pub use calibration::Calibration;
pub use feeling::Feeling;
pub use lie::Lie;
pub use miss::MissType;
pub use shot::{Landing, NewShot, Shot, MAX_LANDING_RADIUS_YDS};
pub use slope::Slope;
pub use strength::Strength;
pub use temperature::Temperature;
pub use wind::{Wind, WindDirection, WindLevel};
