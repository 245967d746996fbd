//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated spool archives on disk
//! - Staging jobs, spool files, and config
//! - Executing CLI commands against the staged archive

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use assert_cmd::Command;
use tempfile::TempDir;

use jespool_types::{Job, SpoolFile};

/// Declarative test environment builder.
///
/// Every builder call rewrites the affected archive file, so the on-disk
/// state always reflects the staged records.
///
/// # Example
/// ```no_run
/// use jespool_testing::{TestWorld, fixtures};
///
/// let world = TestWorld::new()
///     .with_job(fixtures::job("JOB00001", "PAYROLL", "IBMUSER"));
///
/// let result = world.run(&["list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    archive_root: PathBuf,
    jobs: Vec<Job>,
    spool: HashMap<String, Vec<SpoolFile>>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    ///
    /// The archive lives at `<data-dir>/archive`, where the CLI resolves it
    /// by default, so tests only need to pass `--data-dir`.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".jespool");
        let archive_root = data_dir.join("archive");

        std::fs::create_dir_all(&archive_root).expect("Failed to create archive dir");

        Self {
            temp_dir,
            data_dir,
            archive_root,
            jobs: Vec::new(),
            spool: HashMap::new(),
        }
    }

    /// Get the data directory path (.jespool).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the archive root directory path.
    pub fn archive_root(&self) -> &Path {
        &self.archive_root
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Stage a job in the archive listing.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        let listing =
            serde_json::to_string_pretty(&self.jobs).expect("Failed to serialize jobs");
        std::fs::write(self.archive_root.join("jobs.json"), listing)
            .expect("Failed to write jobs.json");
        self
    }

    /// Stage a spool file, with content, under an already staged job.
    pub fn with_spool_file(mut self, job_id: &str, file: SpoolFile, content: &str) -> Self {
        let job_dir = self.archive_root.join("spool").join(job_id);
        std::fs::create_dir_all(&job_dir).expect("Failed to create spool dir");
        std::fs::write(job_dir.join(format!("{}.txt", file.id)), content)
            .expect("Failed to write spool content");

        let files = self.spool.entry(job_id.to_string()).or_default();
        files.push(file);
        let listing = serde_json::to_string_pretty(files).expect("Failed to serialize files");
        std::fs::write(job_dir.join("files.json"), listing)
            .expect("Failed to write files.json");
        self
    }

    /// Write a config.toml into the data directory.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), content)
            .expect("Failed to write config.toml");
        self
    }

    /// Create a CLI command pointed at this test environment.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("jespool").expect("Failed to find jespool binary");
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Execute a command against the staged archive and return the result.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let output = self.command().args(args).output()?;
        Ok(output.into())
    }

    /// Execute a command with the given text piped to stdin.
    ///
    /// Interactive flows read their selections line by line; the pipe closes
    /// after `input`, which the prompt treats as cancellation.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let output = self.command().args(args).write_stdin(input).output()?;
        Ok(output.into())
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

impl From<std::process::Output> for CliResult {
    fn from(output: std::process::Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
