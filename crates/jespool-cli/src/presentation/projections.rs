//! Column sets for the job and spool-file tables.

use jespool_types::{Job, SpoolFile};

use super::table::{Column, Projection};

/// Jobs as listed: id, completion code, name, phase.
///
/// A job that has not finished carries no completion code; the cell prints
/// the literal `null` so the column never collapses.
pub fn job_table() -> Projection<Job> {
    Projection::new(vec![
        Column {
            header: "JOBID",
            cell: |job: &Job| job.job_id.clone(),
        },
        Column {
            header: "RETCODE",
            cell: |job: &Job| job.ret_code.clone().unwrap_or_else(|| "null".to_string()),
        },
        Column {
            header: "JOBNAME",
            cell: |job: &Job| job.job_name.clone(),
        },
        Column {
            header: "STATUS",
            cell: |job: &Job| job.status.to_string(),
        },
    ])
}

/// Spool files of one job. JES-owned data sets have no producing step, so
/// the step cells stay blank rather than printing a placeholder.
pub fn spool_table() -> Projection<SpoolFile> {
    Projection::new(vec![
        Column {
            header: "ID",
            cell: |file: &SpoolFile| file.id.to_string(),
        },
        Column {
            header: "DDNAME",
            cell: |file: &SpoolFile| file.ddname.clone(),
        },
        Column {
            header: "PROCSTEP",
            cell: |file: &SpoolFile| file.proc_step.clone().unwrap_or_default(),
        },
        Column {
            header: "STEPNAME",
            cell: |file: &SpoolFile| file.step_name.clone().unwrap_or_default(),
        },
    ])
}
