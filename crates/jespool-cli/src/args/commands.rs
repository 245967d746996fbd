use clap::Subcommand;
use jespool_types::SpoolId;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List batch jobs, optionally drilling down to spool content")]
    List {
        #[arg(long, help = "Only list jobs owned by this user id (mask, e.g. IBM*)")]
        owner: Option<String>,

        #[arg(long, help = "Only list jobs whose name matches this mask")]
        prefix: Option<String>,

        #[arg(long, help = "Select a job, then one of its spool files, then print it")]
        interactive: bool,

        #[arg(long, help = "Suppress the blank line printed after each selection")]
        no_gap: bool,
    },

    #[command(about = "List the spool files of a job")]
    Files { job_id: String },

    #[command(about = "Print the content of one spool file")]
    View { job_id: String, spool_id: SpoolId },

    #[command(about = "Show the status of a job")]
    Status { job_id: String },
}
