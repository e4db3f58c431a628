use std::path::{Path, PathBuf};

use anyhow::Result;

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::core::FileStore;

/// Configuration and paths shared by every command.
pub struct CommandContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub store_path: PathBuf,
    pub verbose: bool,
}

impl CommandContext {
    /// Load configuration from the root directory and apply CLI overrides
    /// (CLI > config file > defaults).
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let root_dir = common.root.clone().unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::debug!("No {} found, using default configuration", CONFIG_FILE_NAME);
        }
        let config = config_result.config;

        let store_path = match &common.store_path {
            Some(path) => path.clone(),
            None => resolve(&root_dir, Path::new(&config.store_path)),
        };

        Ok(Self {
            config,
            root_dir,
            store_path,
            verbose: common.verbose,
        })
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.store_path)
    }
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
