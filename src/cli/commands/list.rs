use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::store::WorkLogStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::range::parse_range;
use crate::models::day_summary::DaySummary;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let store = WorkLogStore::open(&pool)?;

        let dates = resolve_period(period.as_deref(), &store)?;
        if dates.is_empty() {
            info("No entries recorded.");
            return Ok(());
        }

        let summaries = Core::build_period_summary(&dates, store.all());
        print_summary(&summaries, period.as_deref());
    }
    Ok(())
}

fn resolve_period(period: Option<&str>, store: &WorkLogStore) -> AppResult<Vec<NaiveDate>> {
    match period {
        None => Ok(date::current_month_dates()),
        Some(p) if p.eq_ignore_ascii_case("all") => {
            let dates = store.dates();
            match (dates.first(), dates.last()) {
                (Some(first), Some(last)) => Ok(date::days_between(*first, *last)),
                _ => Ok(Vec::new()),
            }
        }
        Some(p) => {
            let (from, to) = parse_range(p)?;
            Ok(date::days_between(from, to))
        }
    }
}

fn print_summary(summaries: &[DaySummary], period: Option<&str>) {
    let title = match (summaries.first(), period) {
        (Some(first), None) => format!(
            "{} {}",
            date::month_name(first.date.month()),
            first.date.year()
        ),
        (_, Some(p)) => p.to_string(),
        _ => String::new(),
    };
    header(title);

    let mut table = Table::new(vec![
        Column::new("Date", 12),
        Column::new("Day", 4),
        Column::new("Entries", 8),
        Column::new("Hours", 6),
    ]);

    for s in summaries {
        table.add_row(vec![
            s.date.format("%Y-%m-%d").to_string(),
            s.date.format("%a").to_string(),
            s.entries.to_string(),
            hours2readable(s.work_minutes),
        ]);
    }

    print!("{}", table.render());

    let total: i64 = summaries.iter().map(|s| s.work_minutes).sum();
    println!("\nTotal hours: {}", hours2readable(total));
}
