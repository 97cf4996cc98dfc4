use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{ContactFilter, DEFAULT_RECENT_DAYS};

#[derive(Parser, Debug)]
#[command(name = "raincloud", version, about = "Contact manager and calculator")]
pub struct Cli {
    /// Storage choice (file, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("file"))]
    pub storage_choice: String,

    /// Directory used by the file storage
    #[arg(long, env = "RAINCLOUD_DATA_DIR", default_value_t = String::from("./.instance"))]
    pub data_dir: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// List contacts
    List {
        /// Which contacts to show
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,

        /// Window used by the recent filter
        #[arg(long, default_value_t = DEFAULT_RECENT_DAYS)]
        days: i64,

        /// Narrow the filtered list by name, email or company
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a single contact
    Show {
        #[arg(long)]
        id: String,
    },
    /// Edit the data of an existing contact
    /// Pass an empty string to clear phone, company or notes
    Edit {
        #[arg(long)]
        id: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Search contacts by name, email or company
    Search {
        #[arg(short, long)]
        query: String,
    },
    /// Group contacts by company
    Companies,
    /// Contacts whose company or note words match any tag
    Tags {
        tags: Vec<String>,
    },
    /// Contacts missing a phone, company or notes
    Missing,
    /// Remove all stored contacts
    Clear,
    /// Fetch users from the remote table
    Users {
        /// Only fetch the user with this id
        #[arg(long)]
        id: Option<String>,
    },
    /// Press calculator keys in order and print the display
    /// e.g. `calc 12 + 30 =`
    Calc {
        #[arg(allow_hyphen_values = true)]
        keys: Vec<String>,
    },
}

/// Supported list filters
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FilterArg {
    All,
    Recent,
    Incomplete,
}

impl From<FilterArg> for ContactFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => ContactFilter::All,
            FilterArg::Recent => ContactFilter::Recent,
            FilterArg::Incomplete => ContactFilter::Incomplete,
        }
    }
}
