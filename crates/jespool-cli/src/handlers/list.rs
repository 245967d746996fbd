//! `jespool list`: job listing with optional interactive drill-down.

use std::io;

use anyhow::Result;
use is_terminal::IsTerminal;
use jespool_types::{DEFAULT_PREFIX, JobFilter};

use crate::context::ExecutionContext;
use crate::drill::{DrillDown, Outcome};
use crate::presentation::{CommandResult, messages, projections, table};
use crate::prompt::LinePrompt;
use crate::types::OutputFormat;

pub fn handle(
    ctx: &ExecutionContext,
    owner: Option<String>,
    prefix: Option<String>,
    interactive: bool,
    no_gap: bool,
    format: OutputFormat,
) -> Result<()> {
    // Flags win over config defaults; the prefix always resolves to
    // something, the owner may stay unset.
    let defaults = &ctx.config()?.defaults;
    let owner = owner.or_else(|| defaults.owner.clone());
    let prefix = prefix
        .or_else(|| defaults.prefix.clone())
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
    let filter = JobFilter {
        owner,
        prefix: Some(prefix),
    };

    let store = ctx.store()?;
    let prompt = LinePrompt::new(io::stdin().lock(), io::stdout())
        .styled(io::stdout().is_terminal())
        .gap(!no_gap);

    match DrillDown::new(&store, prompt).run(&filter, interactive)? {
        Outcome::Jobs(jobs) => {
            let message = messages::jobs_listed(
                filter.prefix.as_deref().unwrap_or(DEFAULT_PREFIX),
                filter.owner.as_deref(),
            );
            match format {
                OutputFormat::Json => {
                    println!("{}", CommandResult::new(message, &jobs).to_json()?);
                }
                OutputFormat::Plain => {
                    print!("{}", table::render(&jobs, &projections::job_table(), true));
                }
            }
        }

        Outcome::Files { job, files } => {
            let message = messages::spool_files_obtained(&job, files.len());
            match format {
                OutputFormat::Json => {
                    println!("{}", CommandResult::new(message, &files).to_json()?);
                }
                OutputFormat::Plain => {
                    print!(
                        "{}",
                        table::render(&files, &projections::spool_table(), true)
                    );
                }
            }
        }

        Outcome::Content { job, id, content } => {
            let message = messages::spool_content_obtained(&job, id);
            match format {
                OutputFormat::Json => {
                    println!("{}", CommandResult::new(message, &content).to_json()?);
                }
                // The file is emitted exactly as stored, no added newline.
                OutputFormat::Plain => print!("{}", content),
            }
        }

        Outcome::Cancelled => {}
    }

    Ok(())
}
