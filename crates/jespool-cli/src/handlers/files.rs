//! `jespool files`: spool files of one job.

use anyhow::Result;
use jespool_client::JobStore;

use crate::context::ExecutionContext;
use crate::presentation::{CommandResult, messages, projections, table};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, job_id: &str, format: OutputFormat) -> Result<()> {
    let store = ctx.store()?;
    let job = store.get_job(job_id)?;
    let files = store.spool_files(&job)?;

    match format {
        OutputFormat::Json => {
            let message = messages::spool_files_obtained(&job, files.len());
            println!("{}", CommandResult::new(message, &files).to_json()?);
        }
        OutputFormat::Plain => {
            print!(
                "{}",
                table::render(&files, &projections::spool_table(), true)
            );
        }
    }

    Ok(())
}
