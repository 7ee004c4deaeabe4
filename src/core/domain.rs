use std::path::PathBuf;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIBRARY_NAME: &str = "Library Inventory Manager";
pub const DEFAULT_CATALOG_PATH: &str = "library_catalog.json";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}

// Configuration abstracts config options for the inventory manager
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub library_name: String,
    pub catalog_path: PathBuf,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(library_name: &str) -> Self {
        Configuration {
            library_name: library_name.to_string(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            json_logs: false,
        }
    }

    pub fn with_catalog_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Builds the configuration from `LIBRARY_NAME`, `LIBRARY_CATALOG_PATH` and
    /// `LIBRARY_LOG_JSON`, falling back to the defaults for unset variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Configuration::new(DEFAULT_LIBRARY_NAME);
        if let Some(name) = lookup("LIBRARY_NAME").filter(|v| !v.trim().is_empty()) {
            config.library_name = name.trim().to_string();
        }
        if let Some(path) = lookup("LIBRARY_CATALOG_PATH").filter(|v| !v.trim().is_empty()) {
            config.catalog_path = PathBuf::from(path.trim());
        }
        if let Some(flag) = lookup("LIBRARY_LOG_JSON") {
            config.json_logs = matches!(flag.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(DEFAULT_LIBRARY_NAME)
    }
}
