use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Flat-file employee record manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the backing data file
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Output format for record listings
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all employees
    #[command(alias = "ls")]
    List,

    /// Add a new employee
    Add {
        /// 6-digit employee ID
        #[arg(long)]
        id: String,

        /// Full name
        #[arg(long)]
        name: String,

        /// Department name
        #[arg(long, alias = "dept")]
        department: String,

        /// Role or job title
        #[arg(long)]
        role: String,
    },

    /// Update an existing employee
    Update {
        /// ID of the employee to update
        id: String,

        /// New 6-digit ID (keeps the current one when omitted)
        #[arg(long)]
        new_id: Option<String>,

        /// New full name
        #[arg(long)]
        name: Option<String>,

        /// New department name
        #[arg(long, alias = "dept")]
        department: Option<String>,

        /// New role or job title
        #[arg(long)]
        role: Option<String>,
    },

    /// Delete an employee
    #[command(alias = "rm")]
    Delete {
        /// ID of the employee to delete
        id: String,
    },

    /// Search employees by field
    Search {
        /// Exact employee ID
        #[arg(long)]
        id: Option<String>,

        /// Name substring (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Department substring (case-insensitive)
        #[arg(long, alias = "dept")]
        department: Option<String>,

        /// Role substring (case-insensitive)
        #[arg(long)]
        role: Option<String>,
    },

    /// Print the path of the backing data file
    Path,

    /// List known department names
    #[command(alias = "depts")]
    Departments,
}
