//! Configuration record for the recommendation core.
//!
//! The configuration system supports:
//! - Bundled defaults (`include_str!` from `stratagem.toml`)
//! - User overrides (`./stratagem.toml` or `~/.config/stratagem/stratagem.toml`)
//! - Automatic merging with user values taking precedence
//!
//! Credentials are deliberately absent: the provider API key is injected when
//! the driver is constructed.

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stratagem_error::{ConfigError, StratagemError, StratagemResult};
use tracing::{debug, instrument};

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout_seconds() -> f64 {
    60.0
}

fn default_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_cardinality() -> usize {
    3
}

fn default_currency_symbol() -> String {
    "€".to_string()
}

fn default_prompt_directory() -> PathBuf {
    PathBuf::from("prompts")
}

/// Provider call parameters.
///
/// ```toml
/// [llm]
/// model = "gpt-4"
/// temperature = 0.7
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LlmSettings {
    /// Model identifier sent to the provider
    #[serde(default = "default_model")]
    model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f64,
    /// Per-call timeout
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: f64,
    /// Chat-completions endpoint
    #[serde(default = "default_base_url")]
    base_url: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            timeout_seconds: default_timeout_seconds(),
            base_url: default_base_url(),
        }
    }
}

impl LlmSettings {
    /// Creates provider settings with the default endpoint.
    pub fn new(model: impl Into<String>, temperature: f64, timeout_seconds: f64) -> Self {
        Self {
            model: model.into(),
            temperature,
            timeout_seconds,
            base_url: default_base_url(),
        }
    }

    /// Per-call timeout as a duration.
    ///
    /// Non-positive or non-finite values fall back to the default (60 s);
    /// [`StratagemConfig::validate`] reports them separately.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::try_from_secs_f64(self.timeout_seconds)
            .ok()
            .filter(|timeout| !timeout.is_zero())
            .unwrap_or_else(|| std::time::Duration::from_secs_f64(default_timeout_seconds()))
    }
}

/// Section generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SectionSettings {
    /// Exact length of the insight, hypothesis and KPI sections
    #[serde(default = "default_cardinality")]
    cardinality: usize,
    /// Run the optional evidence pass for the state of play
    #[serde(default)]
    enrich_state_of_play: bool,
}

impl Default for SectionSettings {
    fn default() -> Self {
        Self {
            cardinality: default_cardinality(),
            enrich_state_of_play: false,
        }
    }
}

impl SectionSettings {
    /// Creates section settings.
    pub fn new(cardinality: usize, enrich_state_of_play: bool) -> Self {
        Self {
            cardinality,
            enrich_state_of_play,
        }
    }
}

/// Slide mapping settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct SlideSettings {
    /// Symbol printed before budget amounts
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
}

impl Default for SlideSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl SlideSettings {
    /// Creates slide settings with a currency symbol.
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }
}

/// Prompt template location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PromptSettings {
    /// Root directory holding `<section_id>.txt` templates
    #[serde(default = "default_prompt_directory")]
    directory: PathBuf,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            directory: default_prompt_directory(),
        }
    }
}

impl PromptSettings {
    /// Creates prompt settings rooted at `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

/// Top-level Stratagem configuration.
///
/// # Example
///
/// ```
/// use stratagem_core::StratagemConfig;
///
/// let config = StratagemConfig::default();
/// assert_eq!(config.llm().model(), "gpt-4");
/// assert_eq!(*config.sections().cardinality(), 3);
/// assert_eq!(config.slides().currency_symbol(), "€");
/// assert!(config.validate().is_ok());
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct StratagemConfig {
    /// Provider parameters
    #[serde(default)]
    llm: LlmSettings,
    /// Section generation settings
    #[serde(default)]
    sections: SectionSettings,
    /// Slide mapping settings
    #[serde(default)]
    slides: SlideSettings,
    /// Prompt template location
    #[serde(default)]
    prompts: PromptSettings,
}

impl StratagemConfig {
    /// Creates a configuration from its parts.
    pub fn new(
        llm: LlmSettings,
        sections: SectionSettings,
        slides: SlideSettings,
        prompts: PromptSettings,
    ) -> Self {
        Self {
            llm,
            sections,
            slides,
            prompts,
        }
    }

    /// Returns a copy with different section settings.
    pub fn with_sections(mut self, sections: SectionSettings) -> Self {
        self.sections = sections;
        self
    }

    /// Returns a copy with different slide settings.
    pub fn with_slides(mut self, slides: SlideSettings) -> Self {
        self.slides = slides;
        self
    }

    /// Returns a copy with a different prompt directory.
    pub fn with_prompts(mut self, prompts: PromptSettings) -> Self {
        self.prompts = prompts;
        self
    }

    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting record fails [`StratagemConfig::validate`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StratagemResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StratagemError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StratagemError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (`stratagem.toml` shipped with the library)
    /// 2. User config in home directory (`~/.config/stratagem/stratagem.toml`)
    /// 3. User config in current directory (`./stratagem.toml`)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// record is invalid.
    #[instrument]
    pub fn load() -> StratagemResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../stratagem.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/stratagem/stratagem.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("stratagem").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                StratagemError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StratagemError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty model, a temperature outside
    /// `[0, 2]`, a non-positive timeout or a zero section cardinality.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.model.trim().is_empty() {
            return Err(ConfigError::new("llm.model cannot be empty"));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ConfigError::new(format!(
                "llm.temperature must be in [0, 2], got {}",
                self.llm.temperature
            )));
        }
        if !self.llm.timeout_seconds.is_finite() || self.llm.timeout_seconds <= 0.0 {
            return Err(ConfigError::new(format!(
                "llm.timeout_seconds must be positive, got {}",
                self.llm.timeout_seconds
            )));
        }
        if self.sections.cardinality == 0 {
            return Err(ConfigError::new("sections.cardinality must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_cardinality() {
        let config = StratagemConfig::default().with_sections(SectionSettings::new(0, false));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_llm_settings() {
        let mut config = StratagemConfig::default();
        config.llm = LlmSettings::new("", 0.7, 60.0);
        assert!(config.validate().is_err());

        config.llm = LlmSettings::new("gpt-4", 3.5, 60.0);
        assert!(config.validate().is_err());

        config.llm = LlmSettings::new("gpt-4", 0.7, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_timeout_falls_back_on_nonsense() {
        let settings = LlmSettings::new("gpt-4", 0.7, -5.0);
        assert_eq!(settings.timeout(), std::time::Duration::from_secs(60));

        let settings = LlmSettings::new("gpt-4", 0.7, 1.5);
        assert_eq!(settings.timeout(), std::time::Duration::from_millis(1500));
    }
}
