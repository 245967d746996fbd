//! `jespool view`: one spool file, verbatim.

use anyhow::Result;
use jespool_client::JobStore;
use jespool_types::SpoolId;

use crate::context::ExecutionContext;
use crate::presentation::{CommandResult, messages};
use crate::types::OutputFormat;

pub fn handle(
    ctx: &ExecutionContext,
    job_id: &str,
    spool_id: SpoolId,
    format: OutputFormat,
) -> Result<()> {
    let store = ctx.store()?;
    let job = store.get_job(job_id)?;
    let content = store.spool_content(&job.job_name, &job.job_id, spool_id)?;

    match format {
        OutputFormat::Json => {
            let message = messages::spool_content_obtained(&job, spool_id);
            println!("{}", CommandResult::new(message, &content).to_json()?);
        }
        OutputFormat::Plain => print!("{}", content),
    }

    Ok(())
}
