use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub provider: FileProviderConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub images: FileImagesConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileProviderConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Human readable, e.g. `"30s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    /// Human readable, e.g. `"1500ms"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger_max: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct FileImagesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_base: Option<String>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub provider_url: Option<String>,
    pub provider_timeout: Option<String>,
    pub genres: Option<Vec<String>>,
    pub stagger_max: Option<String>,
    pub tmdb_base: Option<String>,
    pub placeholder_base: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the environment layer from an arbitrary variable source.
    ///
    /// Blank values count as unset. `API_KEY` takes precedence over
    /// `GEMINI_API_KEY`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        Self {
            config_path: var("MARQUEE_CONFIG").map(PathBuf::from),
            api_key: var("API_KEY").or_else(|| var("GEMINI_API_KEY")),
            model: var("MARQUEE_MODEL"),
            provider_url: var("MARQUEE_PROVIDER_URL"),
            provider_timeout: var("MARQUEE_PROVIDER_TIMEOUT"),
            genres: var("MARQUEE_GENRES").map(|raw| parse_csv(&raw)),
            stagger_max: var("MARQUEE_STAGGER_MAX"),
            tmdb_base: var("MARQUEE_TMDB_IMAGE_BASE"),
            placeholder_base: var("MARQUEE_PLACEHOLDER_BASE"),
        }
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}
