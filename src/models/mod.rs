pub mod day_summary;
pub mod entry_type;
pub mod log_entry;
