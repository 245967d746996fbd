use std::path::{Path, PathBuf};

use anyhow::Result;
use once_cell::sync::OnceCell;

use jespool_client::SpoolArchive;

use crate::config::{self, Config};

/// Per-invocation environment: resolved paths plus lazily loaded config
pub struct ExecutionContext {
    data_dir: PathBuf,
    archive_override: Option<PathBuf>,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(data_dir: Option<&str>, archive: Option<&str>) -> Result<Self> {
        Ok(Self {
            data_dir: config::resolve_data_dir(data_dir)?,
            archive_override: archive.map(config::expand_tilde),
            config: OnceCell::new(),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn config(&self) -> Result<&Config> {
        self.config
            .get_or_try_init(|| Config::load_from(&self.config_path()))
    }

    /// Archive root priority: --archive flag, then config, then <data-dir>/archive
    pub fn archive_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.archive_override {
            return Ok(root.clone());
        }
        if let Some(root) = &self.config()?.archive.root {
            return Ok(root.clone());
        }
        Ok(self.data_dir.join("archive"))
    }

    pub fn store(&self) -> Result<SpoolArchive> {
        Ok(SpoolArchive::open(self.archive_root()?))
    }
}
