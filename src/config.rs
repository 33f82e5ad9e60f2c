use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const APP_NAME: &str = "⚡️FlashChat";

/// Document store layout for the message feed
pub mod store {
    pub const COLLECTION_NAME: &str = "messages";
    pub const SENDER_FIELD: &str = "sender";
    pub const BODY_FIELD: &str = "body";
    pub const DATE_FIELD: &str = "sentAt";
}

// Default configuration
pub const DEFAULT_LOG_FILTER: &str = "flash_chat=info";
pub const DEFAULT_THEME: &str = "light";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Collection the feed reads from and appends to
    pub collection: String,
    /// Prefilled on the welcome screen
    pub last_email: String,
    pub theme: String,
    /// Used when RUST_LOG is not set
    pub log_filter: String,
    /// Simulated store write latency in milliseconds
    pub write_latency_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collection: store::COLLECTION_NAME.to_string(),
            last_email: String::new(),
            theme: DEFAULT_THEME.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            write_latency_ms: 0,
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "flashchat", "flash-chat") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            tracing::warn!(error = %e, "failed to create config dir");
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    match fs::read_to_string(&path) {
        Ok(content) => parse_settings(&content),
        Err(_) => Settings::default(),
    }
}

/// Parse settings JSON, falling back to defaults on malformed input.
pub fn parse_settings(content: &str) -> Settings {
    match serde_json::from_str(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed settings file");
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let data = serde_json::to_string_pretty(settings)?;
        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}
