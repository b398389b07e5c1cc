use std::env;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "monitor_config.json";
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Process-level settings that do not belong in the stored record
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    /// Location of the JSON configuration record
    pub config_path: PathBuf,
    /// Tesseract language code
    pub ocr_language: String,
    /// Tessdata directory, tesseract's built-in lookup when unset
    pub tessdata_path: Option<String>,
    /// Chat service REST base URL
    pub api_base: String,
}

impl RuntimeSettings {
    pub fn from_env() -> Self {
        let config_path = env::var("TRIPWIRE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let ocr_language = env::var("TRIPWIRE_OCR_LANG").unwrap_or_else(|_| "eng".to_string());

        let tessdata_path = env::var("TESSDATA_PREFIX").ok().filter(|p| !p.is_empty());

        let api_base = env::var("DISCORD_API_BASE")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            config_path,
            ocr_language,
            tessdata_path,
            api_base,
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            ocr_language: "eng".to_string(),
            tessdata_path: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
