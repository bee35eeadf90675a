use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorklog
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track work and leave entries and view them as a day timeline",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a work or leave entry
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "type",
            short = 't',
            help = "Entry type: work, sick, family_sick, parent_sick, spouse_sick, spouse_absence, child_sick, vacation, reserve, bereavement, study"
        )]
        kind: Option<String>,

        #[arg(long = "start", short = 's', help = "Start time (HH:MM)")]
        start: String,

        #[arg(long = "end", short = 'e', help = "End time (HH:MM)")]
        end: String,

        #[arg(long = "client", help = "Client to bill, or extra details for leave")]
        client: Option<String>,

        #[arg(long = "location", help = "Work location, or absence reason for leave")]
        location: Option<String>,

        #[arg(
            long = "attachment",
            help = "Supporting document file name (required for sick leave types)"
        )]
        attachment: Option<String>,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id
        id: String,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "type", short = 't', help = "New entry type")]
        kind: Option<String>,

        #[arg(long = "start", short = 's', help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", short = 'e', help = "New end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "client")]
        client: Option<String>,

        #[arg(long = "location")]
        location: Option<String>,

        #[arg(long = "attachment")]
        attachment: Option<String>,
    },

    /// Delete an entry by id
    Del {
        /// Entry id
        id: String,

        #[arg(long, short = 'f', help = "Delete without asking for confirmation")]
        force: bool,
    },

    /// Month summary: worked hours per day
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, start:end, all)"
        )]
        period: Option<String>,
    },

    /// Day timeline
    Day {
        /// Date to show (YYYY-MM-DD); today if omitted
        date: Option<String>,

        #[arg(long = "json", help = "Print the laid-out blocks as JSON")]
        json: bool,

        #[arg(long = "plain", help = "Draw the timeline without colours")]
        plain: bool,
    },

    /// Export entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
