use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{Config, InvalidConfig};

/// Result of [`ConfigStore::load`]
#[derive(Debug)]
pub struct Loaded {
    pub config: Config,
    /// The stored record was unusable and defaults were written in its place
    pub fresh_default: bool,
}

#[derive(Debug, thiserror::Error)]
enum ReadError {
    #[error("config file not found")]
    Missing,

    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed or incomplete config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(#[from] InvalidConfig),
}

/// JSON file holding the monitor configuration
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored record, replacing it with persisted defaults when unusable
    pub fn load(&self) -> anyhow::Result<Loaded> {
        match self.read() {
            Ok(config) => Ok(Loaded {
                config,
                fresh_default: false,
            }),
            Err(ReadError::Missing) => {
                tracing::info!("Config file not found, creating new config");
                self.reset()
            }
            Err(e) => {
                tracing::error!("{e}, creating fresh config");
                self.reset()
            }
        }
    }

    pub fn save(&self, config: &Config) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(config).context("encode config JSON")?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory: {}", parent.display()))?;
        }

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).with_context(|| format!("write temp: {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("replace file: {}", self.path.display()))?;

        tracing::info!("Configuration saved to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<Config, ReadError> {
        let bytes = std::fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ReadError::Missing,
            _ => ReadError::Io(e),
        })?;

        let config: Config = serde_json::from_slice(&bytes)?;
        config.validate()?;
        Ok(config)
    }

    fn reset(&self) -> anyhow::Result<Loaded> {
        let config = Config::default();
        self.save(&config)?;
        tracing::info!("Created fresh config file");

        Ok(Loaded {
            config,
            fresh_default: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionRecord;

    fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
        ConfigStore::at_path(dir.path().join("monitor_config.json"))
    }

    #[test]
    fn round_trips_config() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut config = Config {
            keywords: vec!["sale".into()],
            response: "noted".into(),
            target_username: "Alice".into(),
            ..Config::default()
        };
        config.record_session(SessionRecord {
            started_at: 10,
            ended_at: 20,
            messages_detected: 1,
            messages_sent: 1,
        });

        store.save(&config).unwrap();
        let loaded = store.load().unwrap();
        assert!(!loaded.fresh_default);
        assert_eq!(loaded.config, config);
    }

    #[test]
    fn missing_file_creates_and_persists_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let loaded = store.load().unwrap();
        assert!(loaded.fresh_default);
        assert_eq!(loaded.config, Config::default());
        assert!(store.path().exists());
    }

    #[test]
    fn incomplete_record_is_replaced_not_merged() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"keywords": ["keep-me"]}"#).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.fresh_default);
        assert_eq!(loaded.config, Config::default());
        assert!(loaded.config.keywords.is_empty());

        let on_disk: Config =
            serde_json::from_slice(&std::fs::read(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk, Config::default());
    }

    #[test]
    fn unparsable_and_invalid_records_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().unwrap().fresh_default);

        let mut value = serde_json::to_value(Config::default()).unwrap();
        value["scan_interval"] = serde_json::json!(-3.0);
        std::fs::write(store.path(), value.to_string()).unwrap();
        let loaded = store.load().unwrap();
        assert!(loaded.fresh_default);
        assert_eq!(loaded.config.scan_interval, 0.01);
    }
}
