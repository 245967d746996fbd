//! Display views for single records.

use std::fmt;

use jespool_types::Job;

/// Labelled field-per-line rendering of one job, as shown by `status`
pub struct JobDetailView<'a> {
    job: &'a Job,
}

impl<'a> JobDetailView<'a> {
    pub fn new(job: &'a Job) -> Self {
        Self { job }
    }
}

impl fmt::Display for JobDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let job = self.job;
        writeln!(f, "{:<8} {}", "jobid:", job.job_id)?;
        writeln!(f, "{:<8} {}", "jobname:", job.job_name)?;
        writeln!(f, "{:<8} {}", "owner:", job.owner)?;
        writeln!(f, "{:<8} {}", "status:", job.status)?;
        writeln!(f, "{:<8} {}", "class:", job.class.as_deref().unwrap_or("null"))?;
        writeln!(
            f,
            "{:<8} {}",
            "retcode:",
            job.ret_code.as_deref().unwrap_or("null")
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jespool_types::JobStatus;

    #[test]
    fn finished_job_prints_every_field() {
        let job = Job {
            job_id: "J1".to_string(),
            job_name: "JOBA".to_string(),
            owner: "IBMUSER".to_string(),
            status: JobStatus::Output,
            class: Some("A".to_string()),
            ret_code: Some("CC 0000".to_string()),
        };

        let rendered = JobDetailView::new(&job).to_string();

        assert_eq!(
            rendered,
            "jobid:   J1\n\
             jobname: JOBA\n\
             owner:   IBMUSER\n\
             status:  OUTPUT\n\
             class:   A\n\
             retcode: CC 0000\n"
        );
    }

    #[test]
    fn running_job_prints_null_for_absent_fields() {
        let job = Job {
            job_id: "J2".to_string(),
            job_name: "STC0001".to_string(),
            owner: "START2".to_string(),
            status: JobStatus::Active,
            class: None,
            ret_code: None,
        };

        let rendered = JobDetailView::new(&job).to_string();

        assert!(rendered.contains("class:   null"));
        assert!(rendered.contains("retcode: null"));
        assert!(rendered.contains("status:  ACTIVE"));
    }
}
