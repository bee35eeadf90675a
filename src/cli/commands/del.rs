use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        if !*force
            && !ask_confirmation(&format!(
                "Delete entry {id}? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let removed = DeleteLogic::apply(&pool, id)?;

        success(format!(
            "Entry {} ({} {}) has been deleted.",
            removed.id, removed.date, removed.kind
        ));
    }

    Ok(())
}
