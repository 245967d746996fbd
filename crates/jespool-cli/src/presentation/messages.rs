//! User-facing result messages.
//!
//! These strings ride along in JSON output, so their shape is part of the
//! command contract and stays stable across releases.

use jespool_types::{Job, SpoolId};

/// An unset owner filter is reported as the literal `null`, not expanded to
/// the mask it implies.
pub fn jobs_listed(prefix: &str, owner: Option<&str>) -> String {
    format!(
        "List of jobs returned for prefix \"{}\" and owner \"{}\"",
        prefix,
        owner.unwrap_or("null")
    )
}

pub fn spool_files_obtained(job: &Job, count: usize) -> String {
    format!(
        "\"{}\" spool files obtained for job \"{}\"",
        count,
        job.label()
    )
}

pub fn spool_content_obtained(job: &Job, id: SpoolId) -> String {
    format!(
        "Spool file \"{}\" content obtained for job \"{}\"",
        id,
        job.label()
    )
}

pub fn job_status_obtained(job: &Job) -> String {
    format!("Job status obtained for job \"{}\"", job.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jespool_types::JobStatus;

    fn job() -> Job {
        Job {
            job_id: "J1".to_string(),
            job_name: "JOBA".to_string(),
            owner: "IBMUSER".to_string(),
            status: JobStatus::Output,
            class: Some("A".to_string()),
            ret_code: Some("CC 0".to_string()),
        }
    }

    #[test]
    fn unset_owner_reads_null() {
        assert_eq!(
            jobs_listed("*", None),
            "List of jobs returned for prefix \"*\" and owner \"null\""
        );
    }

    #[test]
    fn set_owner_is_echoed() {
        assert_eq!(
            jobs_listed("PAY*", Some("IBMUSER")),
            "List of jobs returned for prefix \"PAY*\" and owner \"IBMUSER\""
        );
    }

    #[test]
    fn job_messages_use_the_name_id_label() {
        let job = job();
        assert_eq!(
            spool_files_obtained(&job, 3),
            "\"3\" spool files obtained for job \"JOBA(J1)\""
        );
        assert_eq!(
            spool_content_obtained(&job, SpoolId::new(101)),
            "Spool file \"101\" content obtained for job \"JOBA(J1)\""
        );
        assert_eq!(
            job_status_obtained(&job),
            "Job status obtained for job \"JOBA(J1)\""
        );
    }
}
