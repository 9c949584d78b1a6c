use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex")]
#[command(about = "Console contact directory backed by a flat JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the contact file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact to the directory
    #[command(alias = "a")]
    Add {
        name: String,
        last_name: String,
        patronymic: String,
        company: String,
        /// Company phone: 8 followed by 10 characters
        work_phone: String,
        /// Personal phone: 8 followed by 10 characters
        personal_phone: String,
    },

    /// Show one page of the directory (5 contacts per page)
    #[command(alias = "ls")]
    Page {
        /// 1-based page number
        #[arg(default_value_t = 1)]
        number: usize,
    },

    /// Find contacts whose field exactly equals a value
    #[command(alias = "s")]
    Search {
        /// Field name or menu key 1-6 (name, last-name, patronymic,
        /// company, work-phone, personal-phone)
        field: String,

        /// Exact value to look for
        value: String,
    },

    /// Change a single field of one contact
    #[command(alias = "e")]
    Edit {
        /// 1-based position of the contact in the directory
        position: usize,

        /// Field name or menu key 1-6
        field: String,

        /// New value for the field
        value: String,
    },
}
