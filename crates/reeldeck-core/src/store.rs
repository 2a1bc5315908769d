use anyhow::{anyhow, Result};
use reeldeck_config::PathManager;
use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Durable mapping from a list name to an ordered sequence of entries, one
/// JSON file per list, rewritten whole on every save. A missing or corrupt
/// file is an empty list, never an error.
#[derive(Clone)]
pub struct ListStore {
    lists_dir: PathBuf,
}

impl ListStore {
    pub fn new(paths: &PathManager) -> Result<Self> {
        let lists_dir = paths.lists_dir();
        std::fs::create_dir_all(&lists_dir)?;
        Ok(Self { lists_dir })
    }

    fn list_path(&self, list: &str) -> PathBuf {
        self.lists_dir.join(format!("{}.json", list))
    }

    pub fn load<T>(&self, list: &str) -> Vec<T>
    where
        T: DeserializeOwned,
    {
        let path = self.list_path(list);

        if !path.exists() {
            debug!("List miss: {} (file does not exist)", list);
            return Vec::new();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<T>>(&content) {
                Ok(items) => {
                    info!("List hit: {} (loaded {} items)", list, items.len());
                    items
                }
                Err(e) => {
                    warn!(
                        "List corruption detected for {}: {}. Deleting corrupted file.",
                        list, e
                    );
                    if let Err(rm_err) = std::fs::remove_file(&path) {
                        warn!("Failed to delete corrupted list file: {}", rm_err);
                    }
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Failed to read list file for {}: {}", list, e);
                Vec::new()
            }
        }
    }

    pub fn save<T>(&self, list: &str, items: &[T]) -> Result<()>
    where
        T: Serialize,
    {
        let path = self.list_path(list);

        match serde_json::to_string_pretty(items) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(_) => {
                    debug!("List saved: {} (saved {} items)", list, items.len());
                    Ok(())
                }
                Err(e) => {
                    warn!("Failed to write list file for {}: {}", list, e);
                    Err(anyhow!("Failed to write list: {}", e))
                }
            },
            Err(e) => {
                warn!("Failed to serialize list data for {}: {}", list, e);
                Err(anyhow!("Failed to serialize list: {}", e))
            }
        }
    }
}
