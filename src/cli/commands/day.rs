use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::WorkLogStore;
use crate::core::timeline::build_day_timeline;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, warning};
use crate::ui::timeline_view::TimelineView;
use crate::utils::date;
use std::io::IsTerminal;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        date: date_arg,
        json,
        plain,
    } = cmd
    {
        let d = match date_arg {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
            }
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let store = WorkLogStore::open(&pool)?;

        let entries = store.list(d);
        let timeline = build_day_timeline(d, &entries);

        for b in timeline.degraded() {
            warning(format!(
                "Entry {} has an unreadable time range ('{}' - '{}'); drawn at minimum height",
                b.entry.id, b.entry.start_time, b.entry.end_time
            ));
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&timeline)?);
            return Ok(());
        }

        header(format!("{} ({})", d, d.format("%A")));

        if timeline.is_empty() {
            info(format!("No entries for {d}."));
            return Ok(());
        }

        let color = !*plain && std::io::stdout().is_terminal();
        let view = TimelineView::new(cfg.timeline_columns, cfg.timeline_rows, color);
        print!("{}", view.render(&timeline));
    }

    Ok(())
}
