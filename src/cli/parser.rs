use crate::config::RecomputeScope;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftcal
#[derive(Parser)]
#[command(
    name = "shiftcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record work shifts per date and compute hours worked and income at an hourly rate",
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

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a shift, or edit an existing one with --edit --id
    Add {
        /// Date of the shift (YYYY-MM-DD or "today")
        date: String,

        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(
            long = "id",
            requires = "edit",
            help = "Shift id to edit (requires --edit)"
        )]
        id: Option<i64>,

        #[arg(
            long = "edit",
            requires = "id",
            help = "Edit an existing shift instead of creating a new one"
        )]
        edit: bool,
    },

    /// Delete a shift by id
    Del {
        /// Date of the shift (YYYY-MM-DD or "today")
        date: String,

        #[arg(long = "id", help = "Shift id to delete")]
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List shifts for a date or a period
    List {
        /// Date to show (YYYY-MM-DD); defaults to the current month
        date: Option<String>,

        #[arg(
            long,
            short,
            conflicts_with = "date",
            help = "Period: YYYY, YYYY-MM, YYYY-MM-DD or a range A:B"
        )]
        period: Option<String>,

        #[arg(
            long = "today",
            conflicts_with_all = ["date", "period"],
            help = "Show only today's shifts"
        )]
        today: bool,
    },

    /// List the dates that have at least one shift
    Marked {
        #[arg(long, short, help = "Restrict to a period: YYYY, YYYY-MM or a range A:B")]
        period: Option<String>,
    },

    /// Show or change the hourly rate
    Rate {
        #[arg(long = "set", value_name = "RATE", help = "New hourly rate")]
        set: Option<String>,

        #[arg(
            long = "date",
            value_name = "DATE",
            conflicts_with = "all",
            help = "Recompute only this date's shifts (selected-date scope)"
        )]
        date: Option<String>,

        #[arg(long = "all", help = "Recompute the shifts of every date")]
        all: bool,

        #[arg(
            long = "scope",
            value_enum,
            conflicts_with_all = ["date", "all"],
            help = "Override the configured recompute scope"
        )]
        scope: Option<RecomputeScope>,
    },

    /// Recompute hours and income of a date's shifts with the current rate
    Recompute {
        /// Date to recompute (YYYY-MM-DD or "today")
        date: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export shifts
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
