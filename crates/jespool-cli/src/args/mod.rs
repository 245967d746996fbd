mod commands;

pub use commands::*;

use crate::types::OutputFormat;
use clap::Parser;

#[derive(Parser)]
#[command(name = "jespool")]
#[command(about = "Browse z/OS batch jobs and JES spool output", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, global = true)]
    pub archive: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
