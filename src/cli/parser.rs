use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rmileage
/// CLI application to log hours and miles per day against a remote API
#[derive(Parser)]
#[command(
    name = "rmileage",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small time-and-mileage tracker: log hours worked and miles driven per day",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (useful for tests or a different server)
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Fixed viewer offset, e.g. +02:00 (default: system timezone)
    #[arg(
        global = true,
        long = "utc-offset",
        value_name = "OFFSET",
        allow_hyphen_values = true
    )]
    pub utc_offset: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Show the calendar for a month and the following one
    Show {
        #[arg(long, short, value_name = "YYYY-MM", help = "First month shown (default: current)")]
        month: Option<String>,

        #[arg(long, value_name = "YYYY-MM-DD", help = "Highlight a day and show its values")]
        select: Option<String>,

        #[arg(long, help = "Use text markers instead of colors")]
        plain: bool,
    },

    /// List the records of a month and the following one
    List {
        #[arg(long, short, value_name = "YYYY-MM", help = "First month listed (default: current)")]
        month: Option<String>,
    },

    /// Show hours and miles logged for a day
    Get {
        /// Day (YYYY-MM-DD or "today")
        date: String,
    },

    /// Log hours and miles for a day (0 and 0 removes the day)
    Set {
        /// Day (YYYY-MM-DD or "today")
        date: String,

        #[arg(long, allow_hyphen_values = true, help = "Hours worked")]
        hours: String,

        #[arg(long, allow_hyphen_values = true, help = "Miles driven")]
        miles: String,
    },

    /// Remove the record of a day
    Clear {
        /// Day (YYYY-MM-DD or "today")
        date: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Edit a day interactively, starting from its current values
    Edit {
        /// Day (YYYY-MM-DD or "today")
        date: String,
    },

    /// Export the records of a month and the following one
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_name = "YYYY-MM", help = "First month exported (default: current)")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
