use super::parse_kind;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, NewEntry};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_required_time;

/// Add a work or leave entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        kind,
        start,
        end,
        client,
        location,
        attachment,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let kind = parse_kind(kind.as_deref().unwrap_or(&cfg.default_type))?;

        let new = NewEntry {
            date: d,
            start: parse_required_time(start)?,
            end: parse_required_time(end)?,
            kind,
            client: client.clone().unwrap_or_default(),
            location: location
                .clone()
                .unwrap_or_else(|| cfg.default_location.clone()),
            attachment: attachment.clone(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let entry = AddLogic::apply(&pool, new)?;

        success(format!(
            "Entry {} saved: {} {} {}-{}",
            entry.id, entry.date, entry.kind, entry.start_time, entry.end_time
        ));
    }

    Ok(())
}
