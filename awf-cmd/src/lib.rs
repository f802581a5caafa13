//! Command implementations for the AWF CLI.
//!
//! Provides subcommands for inspecting the wildfire dataset and running the
//! dashboard's selection callback from the terminal.

use awf_core::Dataset;
use awf_data::source::MonthlySource;
use awf_db::Database;
use clap::{Args, Subcommand};

pub mod aggregate;
pub mod summary;

/// Where the observation CSV lives unless `--data` says otherwise.
pub const DEFAULT_DATA_PATH: &str = "fixtures/wildfire_data.csv";

#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Path to the wildfire observation CSV
    #[arg(short = 'd', long, default_value = DEFAULT_DATA_PATH)]
    pub data: String,

    /// Aggregate through the in-memory SQLite database instead of in Rust
    #[arg(long)]
    pub sqlite: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Region code (defaults to the first region in the file)
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// Year (defaults to 2012, or the earliest year when 2012 is absent)
    #[arg(short = 'y', long)]
    pub year: Option<i32>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print row counts, regions and years in the dataset
    Summary {
        #[command(flatten)]
        data: DataArgs,
    },

    /// Print the monthly mean tables for a region and year
    Aggregate {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Write both chart figures and titles for a region and year as JSON
    Figures {
        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output file (stdout when omitted)
        #[arg(short = 'o', long)]
        out: Option<String>,
    },
}

/// The loaded dataset plus, in `--sqlite` mode, the database built from it.
pub struct Loaded {
    pub dataset: Dataset,
    db: Option<Database>,
}

impl Loaded {
    pub fn open(args: &DataArgs) -> anyhow::Result<Self> {
        let dataset = Dataset::from_path(&args.data)?;
        let db = if args.sqlite {
            let db = Database::new()?;
            db.load_dataset(&dataset)?;
            Some(db)
        } else {
            None
        };
        Ok(Self { dataset, db })
    }

    /// The store monthly means are computed from.
    pub fn source(&self) -> &dyn MonthlySource {
        match &self.db {
            Some(db) => db as &dyn MonthlySource,
            None => &self.dataset,
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { data } => summary::run_summary(&data),
        Command::Aggregate {
            data,
            selection,
            json,
        } => aggregate::run_aggregate(&data, &selection, json),
        Command::Figures {
            data,
            selection,
            out,
        } => aggregate::run_figures(&data, &selection, out.as_deref()),
    }
}
