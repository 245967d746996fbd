//! Directory-backed spool archive.
//!
//! Layout:
//! ```text
//! <root>/jobs.json                 JSON array of jobs
//! <root>/spool/<JOBID>/files.json  JSON array of spool files
//! <root>/spool/<JOBID>/<ID>.txt    content of spool file <ID>
//! ```
//!
//! A missing `jobs.json` is an empty archive; a present-but-unparsable file
//! is a malformed archive. Nothing is cached between calls.

use std::path::{Path, PathBuf};

use regex::Regex;

use jespool_types::{DEFAULT_PREFIX, Job, JobFilter, SpoolFile, SpoolId};

use crate::error::{Error, Result};
use crate::store::JobStore;

/// Spool archive rooted at a local directory
#[derive(Debug, Clone)]
pub struct SpoolArchive {
    root: PathBuf,
}

impl SpoolArchive {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn jobs_path(&self) -> PathBuf {
        self.root.join("jobs.json")
    }

    fn job_dir(&self, job_id: &str) -> PathBuf {
        self.root.join("spool").join(job_id)
    }

    fn read_jobs(&self) -> Result<Vec<Job>> {
        let path = self.jobs_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|err| Error::Malformed {
            path,
            reason: err.to_string(),
        })
    }
}

impl JobStore for SpoolArchive {
    fn list_jobs(&self, filter: &JobFilter) -> Result<Vec<Job>> {
        let owner = filter.owner.as_deref().map(compile_pattern).transpose()?;
        let prefix = compile_pattern(filter.prefix.as_deref().unwrap_or(DEFAULT_PREFIX))?;

        // Unset owner matches everything: a local archive has no ambient
        // user identity to default to.
        Ok(self
            .read_jobs()?
            .into_iter()
            .filter(|job| {
                prefix.is_match(&job.job_name)
                    && owner.as_ref().is_none_or(|re| re.is_match(&job.owner))
            })
            .collect())
    }

    fn get_job(&self, job_id: &str) -> Result<Job> {
        self.read_jobs()?
            .into_iter()
            .find(|job| job.job_id.eq_ignore_ascii_case(job_id))
            .ok_or_else(|| Error::JobNotFound(job_id.to_string()))
    }

    fn spool_files(&self, job: &Job) -> Result<Vec<SpoolFile>> {
        let path = self.job_dir(&job.job_id).join("files.json");
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|err| Error::Malformed {
            path,
            reason: err.to_string(),
        })
    }

    fn spool_content(&self, _job_name: &str, job_id: &str, id: SpoolId) -> Result<String> {
        let path = self.job_dir(job_id).join(format!("{}.txt", id));
        if !path.exists() {
            return Err(Error::SpoolFileNotFound {
                job_id: job_id.to_string(),
                id,
            });
        }
        Ok(std::fs::read_to_string(&path)?)
    }
}

/// Compile a JES-style mask (`*` any run, `?` one character) into an
/// anchored, case-insensitive regex. A mask without wildcards matches
/// exactly.
fn compile_pattern(pattern: &str) -> Result<Regex> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push_str("(?i)^");
    for ch in pattern.chars() {
        match ch {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            _ => {
                let mut buf = [0u8; 4];
                expr.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
            }
        }
    }
    expr.push('$');
    Ok(Regex::new(&expr)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jespool_types::JobStatus;
    use tempfile::TempDir;

    fn job(id: &str, name: &str, owner: &str) -> serde_json::Value {
        serde_json::json!({
            "jobid": id,
            "jobname": name,
            "owner": owner,
            "status": "OUTPUT",
            "class": "A",
            "retcode": "CC 0000"
        })
    }

    fn stage_archive(jobs: &[serde_json::Value]) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("jobs.json"),
            serde_json::to_string_pretty(&jobs).unwrap(),
        )
        .unwrap();
        dir
    }

    #[test]
    fn missing_jobs_file_is_an_empty_archive() {
        let dir = TempDir::new().unwrap();
        let archive = SpoolArchive::open(dir.path());

        let jobs = archive.list_jobs(&JobFilter::new()).unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn list_filters_by_prefix_mask() {
        let dir = stage_archive(&[
            job("JOB00001", "PAYROLL1", "IBMUSER"),
            job("JOB00002", "PAYROLL2", "IBMUSER"),
            job("JOB00003", "BACKUP", "SYSPROG"),
        ]);
        let archive = SpoolArchive::open(dir.path());

        let jobs = archive
            .list_jobs(&JobFilter::new().prefix("PAY*"))
            .unwrap();
        assert_eq!(jobs.len(), 2);
        assert!(jobs.iter().all(|j| j.job_name.starts_with("PAYROLL")));
    }

    #[test]
    fn list_filters_by_owner_case_insensitively() {
        let dir = stage_archive(&[
            job("JOB00001", "PAYROLL1", "IBMUSER"),
            job("JOB00003", "BACKUP", "SYSPROG"),
        ]);
        let archive = SpoolArchive::open(dir.path());

        let jobs = archive
            .list_jobs(&JobFilter::new().owner("ibmuser"))
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_name, "PAYROLL1");
    }

    #[test]
    fn mask_without_wildcards_matches_exactly() {
        let dir = stage_archive(&[
            job("JOB00001", "PAY", "IBMUSER"),
            job("JOB00002", "PAYROLL", "IBMUSER"),
        ]);
        let archive = SpoolArchive::open(dir.path());

        let jobs = archive.list_jobs(&JobFilter::new().prefix("PAY")).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_name, "PAY");
    }

    #[test]
    fn question_mark_matches_one_character() {
        let dir = stage_archive(&[
            job("JOB00001", "STEP1", "IBMUSER"),
            job("JOB00002", "STEP12", "IBMUSER"),
        ]);
        let archive = SpoolArchive::open(dir.path());

        let jobs = archive
            .list_jobs(&JobFilter::new().prefix("STEP?"))
            .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_name, "STEP1");
    }

    #[test]
    fn list_preserves_archive_order() {
        let dir = stage_archive(&[
            job("JOB00009", "ZEBRA", "IBMUSER"),
            job("JOB00001", "APPLE", "IBMUSER"),
        ]);
        let archive = SpoolArchive::open(dir.path());

        let jobs = archive.list_jobs(&JobFilter::new()).unwrap();
        let names: Vec<_> = jobs.iter().map(|j| j.job_name.as_str()).collect();
        assert_eq!(names, ["ZEBRA", "APPLE"]);
    }

    #[test]
    fn get_job_reports_unknown_identity() {
        let dir = stage_archive(&[job("JOB00001", "PAYROLL1", "IBMUSER")]);
        let archive = SpoolArchive::open(dir.path());

        let found = archive.get_job("job00001").unwrap();
        assert_eq!(found.status, JobStatus::Output);

        let err = archive.get_job("JOB99999").unwrap_err();
        assert!(matches!(err, Error::JobNotFound(id) if id == "JOB99999"));
    }

    #[test]
    fn job_without_spool_dir_has_no_files() {
        let dir = stage_archive(&[job("JOB00001", "PAYROLL1", "IBMUSER")]);
        let archive = SpoolArchive::open(dir.path());

        let job = archive.get_job("JOB00001").unwrap();
        assert!(archive.spool_files(&job).unwrap().is_empty());
    }

    #[test]
    fn spool_content_round_trips_from_disk() {
        let dir = stage_archive(&[job("JOB00001", "PAYROLL1", "IBMUSER")]);
        let spool = dir.path().join("spool").join("JOB00001");
        std::fs::create_dir_all(&spool).unwrap();
        std::fs::write(spool.join("2.txt"), "J E S 2  J O B  L O G\n").unwrap();
        let archive = SpoolArchive::open(dir.path());

        let content = archive
            .spool_content("PAYROLL1", "JOB00001", SpoolId::new(2))
            .unwrap();
        assert_eq!(content, "J E S 2  J O B  L O G\n");

        let err = archive
            .spool_content("PAYROLL1", "JOB00001", SpoolId::new(99))
            .unwrap_err();
        assert!(matches!(err, Error::SpoolFileNotFound { .. }));
    }

    #[test]
    fn unparsable_jobs_file_is_malformed_not_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("jobs.json"), "not json").unwrap();
        let archive = SpoolArchive::open(dir.path());

        let err = archive.list_jobs(&JobFilter::new()).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }
}
