pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

use marquee_core::{
    CatalogOptions,
    catalog::GENRES,
    providers::{
        GeminiConfig,
        gemini::{DEFAULT_MODEL, DEFAULT_TIMEOUT, GEMINI_API_BASE},
    },
};

use crate::{
    models::{
        Config, ConfigMetadata, ImageConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{ConfigWarnings, validate_base_url},
};
use error::ConfigLoadError;

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Loads the `.env` file into the process environment, then resolves
    /// the configuration against it.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let mut load = self.load_from_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolves the configuration against an already gathered environment
    /// layer. Never touches the process environment.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        self.compose_config(file_config, env, config_path)
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };
        Ok(loaded)
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) = match (&self.options.config_path, &env.config_path)
        {
            (Some(path), _) | (None, Some(path)) => (path.clone(), true),
            (None, None) => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => (path.clone(), false),
                None => return Ok((None, None)),
            },
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let file_config = read_file_config(&path)?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No marquee.toml detected; using environment variables and defaults",
                "Create marquee.toml or pass --config to pin settings",
            );
        }

        let FileConfig {
            provider: file_provider,
            catalog: file_catalog,
            images: file_images,
        } = file_config.unwrap_or_default();

        let api_key = env
            .api_key
            .or(file_provider.api_key)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            warnings.push_with_hint(
                "No Gemini API key configured; catalog rows will stay empty",
                "Set API_KEY or GEMINI_API_KEY, or provider.api_key in marquee.toml",
            );
        }

        let model = env
            .model
            .or(file_provider.model)
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = validate_base_url(
            "provider.base_url",
            env.provider_url
                .as_deref()
                .or(file_provider.base_url.as_deref())
                .unwrap_or(GEMINI_API_BASE),
        )?;

        let mut timeout = parse_duration(
            "provider.timeout",
            env.provider_timeout.or(file_provider.timeout),
            DEFAULT_TIMEOUT,
        )?;
        if timeout.is_zero() {
            warnings.push("provider.timeout is zero; using the default of 30s");
            timeout = DEFAULT_TIMEOUT;
        }

        let defaults = CatalogOptions::default();
        let genres = match env.genres.or(file_catalog.genres) {
            Some(genres) => {
                let genres: Vec<String> = genres
                    .into_iter()
                    .map(|g| g.trim().to_string())
                    .filter(|g| !g.is_empty())
                    .collect();
                if genres.is_empty() {
                    warnings.push_with_hint(
                        "catalog.genres is empty; using the default rows",
                        format!("Default rows: {}", GENRES.join(", ")),
                    );
                    defaults.genres
                } else {
                    genres
                }
            }
            None => defaults.genres,
        };

        let stagger_max = parse_duration(
            "catalog.stagger_max",
            env.stagger_max.or(file_catalog.stagger_max),
            defaults.stagger_max,
        )?;

        let image_defaults = ImageConfig::default();
        let images = ImageConfig {
            tmdb_base: validate_base_url(
                "images.tmdb_base",
                env.tmdb_base
                    .as_deref()
                    .or(file_images.tmdb_base.as_deref())
                    .unwrap_or(image_defaults.tmdb_base.as_str()),
            )?,
            placeholder_base: validate_base_url(
                "images.placeholder_base",
                env.placeholder_base
                    .as_deref()
                    .or(file_images.placeholder_base.as_deref())
                    .unwrap_or(image_defaults.placeholder_base.as_str()),
            )?,
        };

        let config = Config {
            provider: GeminiConfig {
                api_key,
                model,
                base_url,
                timeout,
            },
            catalog: CatalogOptions {
                genres,
                stagger_max,
            },
            images,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded: false,
            },
        };

        Ok(ConfigLoad { config, warnings })
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

fn parse_duration(
    field: &'static str,
    raw: Option<String>,
    default: Duration,
) -> Result<Duration, ConfigLoadError> {
    match raw {
        Some(value) => humantime::parse_duration(value.trim()).map_err(|source| {
            ConfigLoadError::InvalidDuration {
                field,
                value,
                source,
            }
        }),
        None => Ok(default),
    }
}
