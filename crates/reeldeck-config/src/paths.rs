use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("reeldeck");
        Ok(Self::with_base(base_dir))
    }

    /// Root everything under an explicit base directory. Used by embedders
    /// that manage their own storage location, and by tests.
    pub fn with_base(base_dir: PathBuf) -> Self {
        Self {
            config_dir: base_dir.clone(),
            data_dir: base_dir.join("data"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn lists_dir(&self) -> PathBuf {
        self.data_dir.join("lists")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(self.lists_dir())?;
        Ok(())
    }
}
