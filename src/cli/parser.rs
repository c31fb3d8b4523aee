use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lunchpick
/// CLI application to pick lunch spots backed by a spreadsheet workbook
#[derive(Parser)]
#[command(
    name = "lunchpick",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple lunch-picking CLI: random recommendations, a shared visit log, reviews and stats",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a second group)
    #[arg(global = true, long = "workbook")]
    pub workbook: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and a starter workbook
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Draw a random lunch recommendation and record the pick
    Recommend {
        /// Person asking for lunch (prompted when omitted)
        person: Option<String>,

        /// Record the first drawn restaurant without prompting
        #[arg(long = "pick", help = "Accept the first suggestion immediately")]
        pick: bool,
    },

    /// Record a visit directly, bypassing the recommendation cycle
    Add {
        /// Person who ate there
        person: String,

        /// Restaurant that was visited
        restaurant: String,

        /// Visit date (YYYY-MM-DD, defaults to today)
        #[arg(long = "date", help = "Visit date (YYYY-MM-DD, defaults to today)")]
        date: Option<String>,
    },

    /// List recorded visits
    List {
        #[arg(long, help = "Only show visits for this person")]
        person: Option<String>,

        #[arg(long, help = "Only the most recent visits (requires --person)")]
        recent: bool,
    },

    /// Write or browse restaurant reviews
    Review {
        /// Restaurant to review or filter by ("all" lists everything)
        restaurant: Option<String>,

        /// Submit a review instead of listing
        #[arg(long = "add", value_name = "TEXT", help = "Review text to submit")]
        add: Option<String>,
    },

    /// Show visit statistics (top restaurants and revisit rates)
    Stats {
        /// Window for the recent chart, in days
        #[arg(long, default_value_t = 30, help = "Window for the recent chart, in days")]
        days: i64,

        /// Chart size override (defaults to the configured top_n)
        #[arg(long, help = "How many restaurants per chart")]
        top: Option<usize>,
    },

    /// Show or extend the restaurant list
    Restaurants {
        #[arg(long = "add", value_name = "NAME", help = "Add a restaurant to the list")]
        add: Option<String>,
    },

    /// Show or extend the people tracked in the visit log
    People {
        #[arg(long = "add", value_name = "NAME", help = "Add a person column to the visit log")]
        add: Option<String>,
    },

    /// Export the visit log or the review log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export the review log instead of the visit log
        #[arg(long)]
        reviews: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the workbook
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
