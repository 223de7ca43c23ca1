use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::settings::{get_calibration, put_calibration};
use crate::errors::{AppError, AppResult};
use crate::sensor::calibrator::{calibrate_from_samples, CalibratorConfig};
use crate::sensor::TiltSample;
use crate::ui::messages::{info, success};
use chrono::Utc;
use std::fs;

/// Parse one "timestamp_ms,beta,gamma[,alpha]" sample line.
fn parse_sample_line(line: &str) -> AppResult<TiltSample> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return Err(AppError::Other(format!(
            "invalid sample line '{line}': expected timestamp_ms,beta,gamma[,alpha]"
        )));
    }

    fn bad(line: &str) -> AppError {
        AppError::Other(format!("invalid sample line '{line}'"))
    }

    let timestamp_ms: u64 = parts[0].parse().map_err(|_| bad(line))?;
    let beta: f64 = parts[1].parse().map_err(|_| bad(line))?;
    let gamma: f64 = parts[2].parse().map_err(|_| bad(line))?;
    let alpha: f64 = match parts.get(3) {
        Some(a) => a.parse().map_err(|_| bad(line))?,
        None => 0.0,
    };

    Ok(TiltSample::new(alpha, beta, gamma, timestamp_ms))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calibrate { samples, show } = cmd {
        let pool = open_pool(cfg)?;

        if *show {
            match get_calibration(&pool.conn)? {
                Some(cal) => info(format!(
                    "Calibration: x={:.3} y={:.3} z={:.3}",
                    cal.x_offset, cal.y_offset, cal.z_offset
                )),
                None => info("No calibration stored."),
            }
            return Ok(());
        }

        let path = samples.as_ref().ok_or_else(|| {
            AppError::Other("calibrate needs --samples <file> (or --show)".to_string())
        })?;

        let content = fs::read_to_string(path)?;
        let mut parsed = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            parsed.push(parse_sample_line(line)?);
        }

        // A failed run (no samples) leaves any previous calibration in
        // effect; a zero offset is never written silently.
        let calibration = calibrate_from_samples(
            &parsed,
            CalibratorConfig::default(),
            Utc::now().timestamp_millis(),
        )?;

        put_calibration(&pool.conn, &calibration)?;
        success(format!(
            "Calibration stored: x={:.3} y={:.3} z={:.3}",
            calibration.x_offset, calibration.y_offset, calibration.z_offset
        ));
    }
    Ok(())
}
