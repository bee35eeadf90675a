use super::{normalize_date, normalize_time, parse_kind};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::store::EntryPatch;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        kind,
        start,
        end,
        client,
        location,
        attachment,
    } = cmd
    {
        let patch = EntryPatch {
            date: date.as_deref().map(normalize_date).transpose()?,
            start_time: start.as_deref().map(normalize_time).transpose()?,
            end_time: end.as_deref().map(normalize_time).transpose()?,
            kind: kind.as_deref().map(parse_kind).transpose()?,
            client: client.clone(),
            location: location.clone(),
            attachment_name: attachment.clone(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let entry = EditLogic::apply(&pool, id, &patch)?;

        success(format!(
            "Entry {} updated: {} {} {}-{}",
            entry.id, entry.date, entry.kind, entry.start_time, entry.end_time
        ));
    }

    Ok(())
}
