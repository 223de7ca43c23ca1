use super::{open_pool, parse_feeling, parse_landing, parse_miss};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{update_shot_fields, ShotPatch};
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        club,
        result,
        miss,
        distance,
        feeling,
        memo,
    } = cmd
    {
        let pool = open_pool(cfg)?;

        let mut patch = ShotPatch {
            club: club.clone(),
            distance: distance.map(Some),
            memo: memo.clone().map(Some),
            ..ShotPatch::default()
        };

        if let Some(f) = feeling {
            patch.feeling = Some(Some(parse_feeling(f)?));
        }

        // Outcome edits patch both sides so the stored row keeps the
        // result/miss exclusivity the draft layer guarantees at capture.
        if let Some(r) = result {
            patch.result = Some(Some(parse_landing(r)?));
            patch.miss_type = Some(None);
        } else if let Some(m) = miss {
            patch.miss_type = Some(Some(parse_miss(m)?));
            patch.result = Some(None);
        }

        update_shot_fields(&pool.conn, *id, &patch)?;
        success(format!("Shot #{} updated.", id));
    }
    Ok(())
}
