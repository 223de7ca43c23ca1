use crate::errors::{AppError, AppResult};
use crate::models::Shot;

/// Write the shot history as formatted JSON.
pub fn write_json(path: &str, shots: &[Shot]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(shots)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}
