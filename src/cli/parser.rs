use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gymsched
/// Admin CLI for a gym's weekly class schedule
#[derive(Parser)]
#[command(
    name = "gymsched",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage gym classes and sessions, and lay out the weekly schedule grid",
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
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their defaults")]
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

    /// Manage classes (the things sessions are scheduled for)
    Class {
        #[command(subcommand)]
        action: ClassAction,
    },

    /// Manage scheduled sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Compute and show the weekly schedule grid
    Schedule {
        /// Show a single day (e.g. monday, Tue)
        #[arg(long, conflicts_with = "today")]
        day: Option<String>,

        /// Show only today's day of week
        #[arg(long)]
        today: bool,

        /// Print the computed layout as JSON
        #[arg(long)]
        json: bool,

        /// Lay out a JSON snapshot file instead of the database
        #[arg(long, value_name = "FILE")]
        from: Option<String>,

        /// Disable ANSI colors
        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// Import a JSON snapshot ({"classes": [...], "sessions": [...]})
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Remove existing classes and sessions first
        #[arg(long)]
        replace: bool,
    },

    /// Export the computed weekly layout
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ClassAction {
    /// Add a class
    Add {
        /// Display name
        name: String,
    },

    /// List classes
    List,

    /// Delete a class (refused while sessions use it)
    Del {
        /// Class id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Add a session
    Add {
        #[arg(long = "class", help = "Class id")]
        class_id: i64,

        #[arg(long, help = "Day of week (monday, tue, ...)")]
        day: String,

        #[arg(long, help = "Start time (HH:MM)")]
        start: String,

        #[arg(long, help = "End time (HH:MM, 24:00 allowed)")]
        end: String,
    },

    /// Change one or more fields of a session
    Edit {
        /// Session id
        id: i64,

        #[arg(long = "class", help = "New class id")]
        class_id: Option<i64>,

        #[arg(long, help = "New day of week")]
        day: Option<String>,

        #[arg(long, help = "New start time (HH:MM)")]
        start: Option<String>,

        #[arg(long, help = "New end time (HH:MM)")]
        end: Option<String>,
    },

    /// Delete a session
    Del {
        /// Session id
        id: i64,

        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List sessions, sorted by day and start time
    List {
        #[arg(long, help = "Only this day")]
        day: Option<String>,
    },
}
