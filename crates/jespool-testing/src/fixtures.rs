//! Canned jobs and spool files for integration tests.

use jespool_types::{Job, JobStatus, SpoolFile, SpoolId};

/// A finished job with a clean completion code
pub fn job(id: &str, name: &str, owner: &str) -> Job {
    Job {
        job_id: id.to_string(),
        job_name: name.to_string(),
        owner: owner.to_string(),
        status: JobStatus::Output,
        class: Some("A".to_string()),
        ret_code: Some("CC 0000".to_string()),
    }
}

/// A job still executing, no completion code yet
pub fn active_job(id: &str, name: &str, owner: &str) -> Job {
    Job {
        status: JobStatus::Active,
        ret_code: None,
        ..job(id, name, owner)
    }
}

/// A JES-owned data set with no producing step
pub fn spool_file(id: u32, ddname: &str) -> SpoolFile {
    SpoolFile {
        id: SpoolId::new(id),
        ddname: ddname.to_string(),
        step_name: None,
        proc_step: None,
        record_count: Some(20),
        byte_count: Some(1024),
    }
}

/// A data set produced by a named job step
pub fn step_file(id: u32, ddname: &str, step_name: &str) -> SpoolFile {
    SpoolFile {
        step_name: Some(step_name.to_string()),
        ..spool_file(id, ddname)
    }
}
