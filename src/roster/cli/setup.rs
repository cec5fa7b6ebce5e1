use super::render::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use roster::view::SortAction;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Search, sort and split a student roster", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Roster file or http(s) URL (overrides config and ROSTER_DATA)
    #[arg(short, long, global = true, value_name = "PATH|URL")]
    pub data: Option<String>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the roster, optionally sorted and searched
    #[command(alias = "ls")]
    List {
        /// Sort trigger to apply first: az, za, marks, passing, class or gender
        #[arg(short, long)]
        sort: Option<SortAction>,

        /// Search term matched against full name and email
        #[arg(short = 'q', long)]
        search: Option<String>,
    },

    /// Interactive session: type searches and sorts, one per line
    #[command(alias = "sh")]
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (data or output)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
