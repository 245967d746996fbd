use jespool_types::{Job, JobFilter, SpoolFile, SpoolId};

use crate::Result;

/// Access to job metadata and spool content
///
/// The CLI layer consumes this seam only; [`crate::SpoolArchive`] is the
/// shipped implementation. All calls are blocking and strictly sequenced by
/// the caller; implementations must not cache across calls.
pub trait JobStore {
    /// List jobs matching the filter, in archive order
    fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>>;

    /// Resolve one job by its identity
    fn get_job(&self, job_id: &str) -> Result<Job>;

    /// List the spool files of a job
    fn spool_files(&self, job: &Job) -> Result<Vec<SpoolFile>>;

    /// Fetch the content of one spool file verbatim
    fn spool_content(&self, job_name: &str, job_id: &str, id: SpoolId) -> Result<String>;
}
