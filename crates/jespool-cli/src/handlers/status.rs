//! `jespool status`: detail of one job.

use anyhow::Result;
use jespool_client::JobStore;

use crate::context::ExecutionContext;
use crate::presentation::views::JobDetailView;
use crate::presentation::{CommandResult, messages};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, job_id: &str, format: OutputFormat) -> Result<()> {
    let store = ctx.store()?;
    let job = store.get_job(job_id)?;

    match format {
        OutputFormat::Json => {
            let message = messages::job_status_obtained(&job);
            println!("{}", CommandResult::new(message, &job).to_json()?);
        }
        OutputFormat::Plain => print!("{}", JobDetailView::new(&job)),
    }

    Ok(())
}
