use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// YamlConnection manages the data directory the auth store lives in.
#[derive(Clone)]
pub struct YamlConnection {
    base_directory: Arc<Mutex<PathBuf>>,
}

impl YamlConnection {
    /// Create a connection rooted at `base_directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: Arc::new(Mutex::new(base_path)),
        })
    }

    /// Create a connection in the default data directory
    /// (`~/.concierge`, overridable via `CONCIERGE_DATA_DIR`).
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("CONCIERGE_DATA_DIR") {
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        Self::new(PathBuf::from(home_dir).join(".concierge"))
    }

    pub fn base_directory(&self) -> PathBuf {
        self.base_directory.lock().unwrap().clone()
    }
}
