//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.
//!
//! The Gemini API key is deliberately **not** part of the settings file: the
//! credential is supplied per call (environment variable or `/key` command)
//! so a rotated key takes effect on the very next turn.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// OracleConfig
// ---------------------------------------------------------------------------

/// Settings for the coaching oracle (Gemini `generateContent`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleConfig {
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// Model resource name sent in the request path
    /// (e.g. `"models/gemini-2.5-flash"`).
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f32,
    /// Maximum seconds to wait for an oracle response before timing out.
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".into(),
            model: "models/gemini-2.5-flash".into(),
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Settings for speech synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// Whether synthesis is attempted at all. Text rendering is unaffected
    /// when disabled.
    pub enabled: bool,
    /// Base URL of the translate TTS endpoint.
    pub base_url: String,
    /// Target speech language as an ISO-639-1 code.
    pub language: String,
    /// Maximum seconds to wait for an audio response before timing out.
    pub timeout_secs: u64,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://translate.google.com".into(),
            language: "en".into(),
            timeout_secs: 15,
        }
    }
}

// ---------------------------------------------------------------------------
// ExportConfig
// ---------------------------------------------------------------------------

/// Settings for the mistake-log export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exported CSV files — `None` means the current
    /// working directory.
    pub output_dir: Option<std::path::PathBuf>,
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use english_coach::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Oracle (Gemini) settings.
    pub oracle: OracleConfig,
    /// Speech synthesis settings.
    pub tts: TtsConfig,
    /// Export settings.
    pub export: ExportConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `AppConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.oracle.base_url, loaded.oracle.base_url);
        assert_eq!(original.oracle.model, loaded.oracle.model);
        assert_eq!(original.oracle.temperature, loaded.oracle.temperature);
        assert_eq!(original.oracle.timeout_secs, loaded.oracle.timeout_secs);

        assert_eq!(original.tts.enabled, loaded.tts.enabled);
        assert_eq!(original.tts.base_url, loaded.tts.base_url);
        assert_eq!(original.tts.language, loaded.tts.language);
        assert_eq!(original.tts.timeout_secs, loaded.tts.timeout_secs);

        assert_eq!(original.export.output_dir, loaded.export.output_dir);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        let default = AppConfig::default();

        assert_eq!(config.oracle.model, default.oracle.model);
        assert_eq!(config.tts.language, default.tts.language);
    }

    /// Verify default values.
    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert_eq!(
            cfg.oracle.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(cfg.oracle.model, "models/gemini-2.5-flash");
        assert!((cfg.oracle.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(cfg.oracle.timeout_secs, 30);

        assert!(cfg.tts.enabled);
        assert_eq!(cfg.tts.language, "en");
        assert!(cfg.export.output_dir.is_none());
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = AppConfig::default();
        cfg.oracle.model = "models/gemini-2.5-pro".into();
        cfg.oracle.temperature = 0.2;
        cfg.oracle.timeout_secs = 60;
        cfg.tts.enabled = false;
        cfg.tts.language = "en-GB".into();
        cfg.export.output_dir = Some("/tmp/exports".into());

        cfg.save_to(&path).expect("save");
        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(loaded.oracle.model, "models/gemini-2.5-pro");
        assert_eq!(loaded.oracle.timeout_secs, 60);
        assert!(!loaded.tts.enabled);
        assert_eq!(loaded.tts.language, "en-GB");
        assert_eq!(loaded.export.output_dir, Some("/tmp/exports".into()));
    }
}
