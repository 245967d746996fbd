//! Interactive drill-down from the job listing into spool output.
//!
//! Each level lists records as a numbered table, blocks on one pick, and
//! resolves the pick by position against the listed records. Backing out at
//! any level ends the walk with [`Outcome::Cancelled`] and nothing further
//! is fetched.

use anyhow::{Result, anyhow};
use jespool_client::JobStore;
use jespool_types::{Job, JobFilter, SpoolFile, SpoolId};

use crate::presentation::projections;
use crate::presentation::table::{self, Projection};
use crate::prompt::{SelectPrompt, Selection};

/// Where a drill-down walk came to rest
#[derive(Debug)]
pub enum Outcome {
    /// The listing itself, when nothing was (or could be) selected
    Jobs(Vec<Job>),
    /// A job was selected; its spool files are the result
    Files { job: Job, files: Vec<SpoolFile> },
    /// A spool file was selected; its content is the result
    Content {
        job: Job,
        id: SpoolId,
        content: String,
    },
    /// The user backed out at some level
    Cancelled,
}

/// Walks job listing, spool listing, and spool content one selection at a
/// time against an injected store and prompt.
pub struct DrillDown<'a, P> {
    store: &'a dyn JobStore,
    prompt: P,
}

impl<'a, P: SelectPrompt> DrillDown<'a, P> {
    pub fn new(store: &'a dyn JobStore, prompt: P) -> Self {
        Self { store, prompt }
    }

    /// Lists jobs under `filter` and, in interactive mode, drills as deep as
    /// the user keeps picking. An empty listing at any level ends the walk
    /// without prompting.
    pub fn run(&mut self, filter: &JobFilter, interactive: bool) -> Result<Outcome> {
        let jobs = self.store.list_jobs(filter)?;
        if !interactive || jobs.is_empty() {
            return Ok(Outcome::Jobs(jobs));
        }

        let Some(job) = self.pick(&jobs, &projections::job_table())? else {
            return Ok(Outcome::Cancelled);
        };
        // Refresh the picked job: the listing row may already be stale.
        let job = self.store.get_job(&job.job_id)?;

        let files = self.store.spool_files(&job)?;
        if files.is_empty() {
            return Ok(Outcome::Files { job, files });
        }

        let Some(file) = self.pick(&files, &projections::spool_table())? else {
            return Ok(Outcome::Cancelled);
        };
        let id = file.id;

        let content = self.store.spool_content(&job.job_name, &job.job_id, id)?;
        Ok(Outcome::Content { job, id, content })
    }

    /// One drill level: show `records` as a numbered table, return the
    /// record whose line was picked, or `None` if the user backed out. A
    /// deeper hierarchy is one more call to this.
    fn pick<'r, T>(&mut self, records: &'r [T], projection: &Projection<T>) -> Result<Option<&'r T>> {
        let table = table::render(records, projection, true);
        match self
            .prompt
            .select(table.rows(), table.header().unwrap_or(""))?
        {
            Selection::Picked(index) => index
                .checked_sub(1)
                .and_then(|i| records.get(i))
                .map(Some)
                .ok_or_else(|| {
                    anyhow!(
                        "Selection {} is out of range (1-{})",
                        index,
                        records.len()
                    )
                }),
            Selection::Cancelled => Ok(None),
        }
    }
}
