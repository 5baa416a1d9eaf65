use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for crewcal
#[derive(Parser)]
#[command(
    name = "crewcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small group calendar: shared events, leader/member visibility, lane layout for multi-day bars",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override session file path (who is logged in)
    #[arg(global = true, long = "session")]
    pub session: Option<String>,

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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Start a session as a group member
    Login {
        /// User id (unique inside the group)
        #[arg(long = "id")]
        id: String,

        /// Display name
        #[arg(long = "name")]
        name: String,

        /// Role inside the group: leader or member
        #[arg(long = "role", default_value = "member")]
        role: String,

        /// Group id
        #[arg(long = "group")]
        group: String,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// List the members of the current group
    Members,

    /// Add an event to the group calendar
    Add {
        /// First day (YYYY-MM-DD)
        start: String,

        /// Last day (YYYY-MM-DD), defaults to the first day
        end: Option<String>,

        /// Event title
        #[arg(long = "title", short = 't')]
        title: String,

        /// Print the month grid again once the event is stored
        #[arg(long = "show")]
        show: bool,
    },

    /// Delete an event by id
    Del {
        /// Event id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,

        /// Print the month grid again once the event is removed
        #[arg(long = "show")]
        show: bool,
    },

    /// Show the month grid
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Print the render model as JSON instead of the grid
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the events of one day
    Day {
        /// Day (YYYY-MM-DD)
        date: String,
    },

    /// List events as a table
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format, e.g. "2025-06:2025-08".
        /// Special value `all` shows every event.
        ///
        /// If omitted, the default is the current month.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
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

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,
    },

    /// Export the visible events with their rows
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same syntax as `list --period`).
        /// If omitted, every event of the group is exported.
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
