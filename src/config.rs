//! Runtime settings for normalization and similarity scoring.
//!
//! Settings are stored as camelCase JSON. Every field has a default, so a
//! partial file only overrides the keys it names.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for `Settings`
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A value is outside its accepted range
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Independently toggleable normalization rules.
///
/// Rules always apply in declaration order: case folding, diacritic
/// stripping, underscore folding, punctuation stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizationRules {
    pub case_folding: bool,
    pub remove_diacritics: bool,
    pub underscores_to_dashes: bool,
    pub strip_punctuation: bool,
}

impl Default for NormalizationRules {
    fn default() -> Self {
        Self {
            case_folding: true,
            remove_diacritics: true,
            underscores_to_dashes: true,
            strip_punctuation: true,
        }
    }
}

/// Enable flags for the three similarity sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarityAlgorithms {
    pub levenshtein: bool,
    pub jaro_winkler: bool,
    pub token_overlap: bool,
}

impl Default for SimilarityAlgorithms {
    fn default() -> Self {
        Self {
            levenshtein: true,
            jaro_winkler: true,
            token_overlap: true,
        }
    }
}

/// Relative weights of the similarity sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimilarityWeights {
    pub levenshtein: f64,
    pub jaro_winkler: f64,
    pub token_overlap: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            levenshtein: 0.4,
            jaro_winkler: 0.3,
            token_overlap: 0.3,
        }
    }
}

/// Everything the indexer and matcher can be tuned with.
///
/// # Examples
///
/// ```
/// use tagcat::Settings;
///
/// let settings = Settings::from_json(r#"{ "similarityThreshold": 0.9 }"#).unwrap();
/// assert_eq!(settings.similarity_threshold, 0.9);
/// assert_eq!(settings.marker, '#');
/// assert!(settings.normalization_rules.case_folding);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Character that introduces a label, `#` by default.
    pub marker: char,
    pub normalization_rules: NormalizationRules,
    pub similarity_algorithms: SimilarityAlgorithms,
    pub similarity_weights: SimilarityWeights,
    /// Minimum composite score for a pair to be suggested.
    pub similarity_threshold: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            marker: '#',
            normalization_rules: NormalizationRules::default(),
            similarity_algorithms: SimilarityAlgorithms::default(),
            similarity_weights: SimilarityWeights::default(),
            similarity_threshold: 0.75,
        }
    }
}

impl Settings {
    /// Parses and validates settings from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::Invalid` for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads and validates settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from the default location if a file exists there,
    /// otherwise returns the defaults.
    ///
    /// The default location is `{config_dir}/tagcat/settings.json`.
    ///
    /// # Errors
    ///
    /// Returns an error only if a settings file exists but is invalid.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match default_settings_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Checks that the threshold lies in `[0, 1]`, weights are usable, and the
    /// marker cannot be mistaken for part of a label.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::Invalid(format!(
                "similarityThreshold must be between 0 and 1, got {}",
                self.similarity_threshold
            )));
        }

        let weights = [
            ("levenshtein", self.similarity_weights.levenshtein),
            ("jaroWinkler", self.similarity_weights.jaro_winkler),
            ("tokenOverlap", self.similarity_weights.token_overlap),
        ];
        for (name, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "similarityWeights.{name} must be a non-negative number, got {weight}"
                )));
            }
        }

        if self.marker.is_whitespace() || crate::catalog::is_label_char(self.marker) {
            return Err(ConfigError::Invalid(format!(
                "marker must not be whitespace or a label character, got {:?}",
                self.marker
            )));
        }

        Ok(())
    }
}

/// Returns `{config_dir}/tagcat/settings.json`, if a config directory exists.
///
/// - Linux: `~/.config`
/// - macOS: `~/Library/Application Support`
/// - Windows: `C:\Users\<user>\AppData\Roaming`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tagcat").join("settings.json"))
}
