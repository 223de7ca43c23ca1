use super::{open_pool, parse_temperature};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::context::{correct_todays_manual_shots, ContextResolver, ResolvedContext};
use crate::errors::AppResult;
use crate::models::Temperature;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Resolver backed by operator-supplied values. The CLI stands in for the
/// device's location/weather lookup here; the correction path is the same.
struct FixedResolver {
    context: ResolvedContext,
}

impl ContextResolver for FixedResolver {
    fn resolve(&self, _latitude: f64, _longitude: f64) -> AppResult<ResolvedContext> {
        Ok(self.context.clone())
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fixloc {
        course,
        lat,
        lon,
        actual_temp,
        temp,
    } = cmd
    {
        let pool = open_pool(cfg)?;

        let temperature = match temp {
            Some(t) => parse_temperature(t)?,
            None => actual_temp
                .map(Temperature::from_celsius)
                .unwrap_or(Temperature::MidSeason),
        };

        let resolver = FixedResolver {
            context: ResolvedContext {
                temperature,
                actual_temperature: *actual_temp,
                location_name: course.clone(),
            },
        };

        let corrected =
            correct_todays_manual_shots(&pool.conn, &date::today(), &resolver, *lat, *lon)?;

        if corrected == 0 {
            info("No hand-entered shots to correct today.");
        } else {
            success(format!("Corrected context on {} shot(s).", corrected));
        }
    }
    Ok(())
}
