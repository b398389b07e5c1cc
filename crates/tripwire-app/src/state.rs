use anyhow::Result;
use tripwire_config::{Config, ConfigStore, RuntimeSettings};
use tripwire_core::MessageWatcher;
use tripwire_notify::DiscordClient;
use tripwire_ocr::{ScreenGrabber, TesseractRecognizer};

pub type Watcher = MessageWatcher<ScreenGrabber, TesseractRecognizer, DiscordClient>;

/// Everything the menu actions operate on
pub struct AppState {
    pub config: Config,
    pub store: ConfigStore,
    pub watcher: Watcher,
}

impl AppState {
    pub fn load(settings: RuntimeSettings) -> Result<Self> {
        let store = ConfigStore::at_path(&settings.config_path);
        let loaded = store.load()?;
        if loaded.fresh_default {
            tracing::info!("Using default configuration at {}", store.path().display());
        }

        let watcher = MessageWatcher::new(
            ScreenGrabber::new(),
            TesseractRecognizer::new(settings.ocr_language, settings.tessdata_path),
            DiscordClient::new(settings.api_base),
        );

        Ok(Self {
            config: loaded.config,
            store,
            watcher,
        })
    }

    /// Apply `change` and persist the result
    pub fn update<T>(&mut self, change: impl FnOnce(&mut Config) -> T) -> Result<T> {
        let out = change(&mut self.config);
        self.store.save(&self.config)?;
        Ok(out)
    }
}
