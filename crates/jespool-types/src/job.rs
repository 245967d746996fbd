use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Execution phase of a batch job as reported by JES
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    Input,
    Active,
    Output,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Input => write!(f, "INPUT"),
            JobStatus::Active => write!(f, "ACTIVE"),
            JobStatus::Output => write!(f, "OUTPUT"),
        }
    }
}

/// One batch job as listed by the spool archive
///
/// Field names follow the z/OSMF jobs payload (`jobid`, `jobname`, ...), so
/// captured payloads deserialize without translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "jobid")]
    pub job_id: String,

    #[serde(rename = "jobname")]
    pub job_name: String,

    pub owner: String,

    pub status: JobStatus,

    /// Execution class; absent for started tasks
    pub class: Option<String>,

    /// Completion code, e.g. "CC 0000"; absent until the job finishes
    #[serde(rename = "retcode")]
    pub ret_code: Option<String>,
}

impl Job {
    /// `JOBNAME(JOBID)` as rendered in user-facing messages
    pub fn label(&self) -> String {
        format!("{}({})", self.job_name, self.job_id)
    }
}

/// Numeric identity of a spool file within its job
///
/// Spool identities are numeric by contract; non-numeric text fails at the
/// parse or deserialization boundary rather than somewhere mid-flow.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpoolId(u32);

impl SpoolId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SpoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SpoolId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(SpoolId)
    }
}

/// One spool data set belonging to a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpoolFile {
    pub id: SpoolId,

    pub ddname: String,

    /// Job step that produced the data set; absent for JES-owned data sets
    #[serde(rename = "stepname")]
    pub step_name: Option<String>,

    /// Procedure step, when the job ran a cataloged procedure
    #[serde(rename = "procstep")]
    pub proc_step: Option<String>,

    #[serde(rename = "record-count", skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,

    #[serde(rename = "byte-count", skip_serializing_if = "Option::is_none")]
    pub byte_count: Option<u64>,
}
