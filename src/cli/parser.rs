use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rShotlogger
/// CLI application to capture golf shots offline with SQLite
#[derive(Parser)]
#[command(
    name = "rshotlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple shot logging CLI: capture golf shots offline and analyze them with SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Record a shot
    Add {
        /// Slope category (flat, left-up, ..., left-down-toe-down)
        #[arg(long = "slope")]
        slope: Option<String>,

        /// Raw tilt reading "beta,gamma" in degrees; classified against the
        /// stored calibration when no explicit slope is given
        #[arg(long = "tilt")]
        tilt: Option<String>,

        /// Club label from the configured club list
        #[arg(long = "club")]
        club: Option<String>,

        /// Lie (a-grade, good, normal, bad, very-bad, bunker)
        #[arg(long = "lie")]
        lie: Option<String>,

        /// Swing strength (full, normal, soft)
        #[arg(long = "strength")]
        strength: Option<String>,

        /// Wind (none, or direction-level such as up-left-strong)
        #[arg(long = "wind")]
        wind: Option<String>,

        /// Landing offset "x,y" in yards (+x right, +y long)
        #[arg(long = "result")]
        result: Option<String>,

        /// Miss label (top, choro, duff, over, shank, pull)
        #[arg(long = "miss")]
        miss: Option<String>,

        /// Target distance in yards
        #[arg(long = "distance")]
        distance: Option<i64>,

        /// Strike feeling (great, good, normal, bad, unsure)
        #[arg(long = "feeling")]
        feeling: Option<String>,

        /// Free-form note
        #[arg(long = "memo")]
        memo: Option<String>,

        /// Golf course name
        #[arg(long = "course")]
        course: Option<String>,

        /// Seasonal temperature band (summer, mid-season, winter)
        #[arg(long = "temp")]
        temp: Option<String>,

        /// Measured temperature in °C
        #[arg(long = "actual-temp")]
        actual_temp: Option<f64>,

        #[arg(long = "lat")]
        lat: Option<f64>,

        #[arg(long = "lon")]
        lon: Option<f64>,

        /// Mark course/temperature as hand-entered (candidate for fixloc)
        #[arg(long = "manual-location")]
        manual_location: bool,

        /// Shot time as RFC3339; defaults to now
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// List recorded shots, most recent first
    List {
        /// Show at most N shots
        #[arg(long = "limit")]
        limit: Option<usize>,

        /// Only shots hit with this club
        #[arg(long = "club")]
        club: Option<String>,

        /// Only shots on this course
        #[arg(long = "course")]
        course: Option<String>,
    },

    /// Delete a shot by id
    Del {
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes")]
        yes: bool,
    },

    /// Edit fields of a recorded shot
    Edit {
        id: i64,

        #[arg(long = "club")]
        club: Option<String>,

        /// New landing offset "x,y"; clears any miss label
        #[arg(long = "result")]
        result: Option<String>,

        /// New miss label; clears any landing offset
        #[arg(long = "miss")]
        miss: Option<String>,

        #[arg(long = "distance")]
        distance: Option<i64>,

        #[arg(long = "feeling")]
        feeling: Option<String>,

        #[arg(long = "memo")]
        memo: Option<String>,
    },

    /// Aggregate statistics over the (filtered) shot history
    Stats {
        /// Accept these clubs (repeatable; OR within the category)
        #[arg(long = "club")]
        clubs: Vec<String>,

        #[arg(long = "slope")]
        slopes: Vec<String>,

        #[arg(long = "lie")]
        lies: Vec<String>,

        #[arg(long = "strength")]
        strengths: Vec<String>,

        #[arg(long = "wind")]
        winds: Vec<String>,

        #[arg(long = "temp")]
        temps: Vec<String>,

        #[arg(long = "feeling")]
        feelings: Vec<String>,

        #[arg(long = "course")]
        courses: Vec<String>,

        /// Also print scatter positions at this range (30 or 70 yards)
        #[arg(long = "scatter")]
        scatter: Option<u32>,
    },

    /// Record a device calibration from a tilt sample file
    Calibrate {
        /// Sample file: one "timestamp_ms,beta,gamma[,alpha]" line per sample
        #[arg(long = "samples")]
        samples: Option<String>,

        /// Print the stored calibration
        #[arg(long = "show")]
        show: bool,
    },

    /// Show the capture flow and enable/disable capture fields
    Fields {
        /// Re-enable a capture field (slope, lie, club, strength, wind, result)
        #[arg(long = "enable")]
        enable: Option<String>,

        /// Disable a capture field so the flow skips its step
        #[arg(long = "disable")]
        disable: Option<String>,
    },

    /// Show or replace the configured club list
    Clubs {
        /// Comma-separated club labels replacing the current list
        #[arg(long = "set")]
        set: Option<String>,
    },

    /// Apply accurate course/weather context to today's hand-entered shots
    Fixloc {
        #[arg(long = "course")]
        course: String,

        #[arg(long = "lat")]
        lat: f64,

        #[arg(long = "lon")]
        lon: f64,

        /// Measured temperature in °C; also derives the seasonal band
        #[arg(long = "actual-temp")]
        actual_temp: Option<f64>,

        /// Seasonal band override (summer, mid-season, winter)
        #[arg(long = "temp")]
        temp: Option<String>,
    },

    /// Export the shot history
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file path
        #[arg(long = "out")]
        out: String,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "log", help = "Print the migration audit trail")]
        log: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },
}
