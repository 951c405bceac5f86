use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkTimer
/// CLI application to time projects and bill them by worktype, using SQLite
#[derive(Parser)]
#[command(
    name = "rworktimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small project timer: track worked time, round it per worktype and bill it using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user (overrides `user_id` from the configuration file)
    #[arg(global = true, long = "user")]
    pub user: Option<i64>,

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
        #[arg(long = "print", help = "Print the current configuration file")]
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

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create or list billing worktypes
    Worktype {
        #[command(subcommand)]
        action: WorktypeAction,
    },

    /// Create or list your projects
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Start (or resume) the timer of a project
    Start {
        /// Project id
        id: i64,
    },

    /// Pause the running timer of a project
    Pause {
        /// Project id
        id: i64,
    },

    /// Stop a project: close the timer and add the rounding entry
    Stop {
        /// Project id
        id: i64,
    },

    /// List the time entries of a project
    Entries {
        /// Project id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum WorktypeAction {
    /// Create a new worktype, available to all users
    Add {
        /// Unique name (4 to 128 characters)
        name: String,

        #[arg(
            long = "rounding",
            default_value = "0",
            allow_hyphen_values = true,
            help = "Rounding unit for billed time (integer, 0 = no rounding)"
        )]
        rounding: String,

        #[arg(
            long = "rounding-unit",
            default_value_t = 0,
            help = "Unit of --rounding: 0=seconds, 1=minutes, 2=hours"
        )]
        rounding_unit: u8,

        #[arg(
            long = "minimum",
            default_value = "0",
            allow_hyphen_values = true,
            help = "Minimum billed time (integer)"
        )]
        minimum: String,

        #[arg(
            long = "min-unit",
            default_value_t = 0,
            help = "Unit of --minimum: 0=seconds, 1=minutes, 2=hours"
        )]
        min_unit: u8,

        #[arg(
            long = "price",
            default_value = "0",
            allow_hyphen_values = true,
            help = "Unit price (decimal, rounded to 2 places)"
        )]
        price: String,
    },

    /// List all worktypes
    List,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a project owned by the current user
    Add {
        /// Project name
        name: String,

        #[arg(long = "worktype", short = 'w', help = "Name of the worktype to bill with")]
        worktype: String,
    },

    /// List the projects of the current user
    List,
}
