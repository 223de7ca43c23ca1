use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::settings::{get_setting, put_setting, SETTING_ENABLED_FIELDS};
use crate::draft::steps::{first_enabled, next_enabled, CaptureStep, FieldToggles};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

fn parse_step(name: &str) -> AppResult<CaptureStep> {
    CaptureStep::from_name(name)
        .ok_or_else(|| AppError::Other(format!("unknown capture field '{name}'")))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fields { enable, disable } = cmd {
        let pool = open_pool(cfg)?;

        let mut toggles: FieldToggles =
            get_setting(&pool.conn, SETTING_ENABLED_FIELDS, FieldToggles::default())?;

        if let Some(name) = disable {
            toggles.set_enabled(parse_step(name)?, false);
            put_setting(&pool.conn, SETTING_ENABLED_FIELDS, &toggles)?;
            success(format!("Field '{}' disabled.", name));
        }

        if let Some(name) = enable {
            toggles.set_enabled(parse_step(name)?, true);
            put_setting(&pool.conn, SETTING_ENABLED_FIELDS, &toggles)?;
            success(format!("Field '{}' enabled.", name));
        }

        // Print the capture flow as the step navigation would walk it.
        let mut flow = Vec::new();
        let mut step = first_enabled(&toggles);
        while let Some(s) = step {
            flow.push(s.name());
            step = next_enabled(s, &toggles);
        }

        if flow.is_empty() {
            println!("Capture flow: (all fields disabled)");
        } else {
            println!("Capture flow: {}", flow.join(" → "));
        }
    }
    Ok(())
}
