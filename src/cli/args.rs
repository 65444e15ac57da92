use crate::io::output::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roimap")]
#[command(about = "ROI calculator for AI initiatives tracked as business indicators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Explicit configuration file (skips .roimap.toml discovery)
    #[arg(long, global = true, env = "ROIMAP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate ROI per project
    Project {
        /// Portfolio file (json, toml or yaml)
        portfolio: PathBuf,

        /// Report only this project
        #[arg(short, long)]
        project: Option<String>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable parallel aggregation
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long, default_value = "0")]
        jobs: usize,
    },

    /// Show the ROI breakdown of a single indicator
    Indicator {
        /// Portfolio file (json, toml or yaml)
        portfolio: PathBuf,

        /// Indicator id
        #[arg(long)]
        id: String,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List indicator types, periods and cost categories
    Types {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize a .roimap.toml configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
