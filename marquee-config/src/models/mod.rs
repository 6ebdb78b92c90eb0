pub mod sources;

use std::{path::PathBuf, sync::Arc};

use marquee_core::{
    CatalogOptions, CatalogService, ImageResolver,
    providers::{
        ContentProvider, GeminiConfig, GeminiProvider, OfflineProvider,
        ProviderError,
    },
};

use sources::{FileCatalogConfig, FileConfig, FileImagesConfig, FileProviderConfig};

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub provider: GeminiConfig,
    pub catalog: CatalogOptions,
    pub images: ImageConfig,
    pub metadata: ConfigMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub tmdb_base: String,
    pub placeholder_base: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        let resolver = ImageResolver::default();
        Self {
            tmdb_base: resolver.tmdb_base().to_string(),
            placeholder_base: resolver.placeholder_base().to_string(),
        }
    }
}

impl ImageConfig {
    pub fn resolver(&self) -> ImageResolver {
        ImageResolver::new(&self.tmdb_base, &self.placeholder_base)
    }
}

/// Where the settings came from.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

impl Config {
    pub fn has_api_key(&self) -> bool {
        self.provider
            .api_key
            .as_deref()
            .is_some_and(|key| !key.is_empty())
    }

    /// Gemini when a key is configured, otherwise the offline provider.
    pub fn content_provider(
        &self,
    ) -> Result<Arc<dyn ContentProvider>, ProviderError> {
        if self.has_api_key() {
            Ok(Arc::new(GeminiProvider::new(self.provider.clone())?))
        } else {
            Ok(Arc::new(OfflineProvider))
        }
    }

    pub fn catalog_service_with(
        &self,
        provider: Arc<dyn ContentProvider>,
    ) -> CatalogService {
        CatalogService::new(provider)
            .with_resolver(self.images.resolver())
            .with_options(self.catalog.clone())
    }

    /// The effective settings in file form, with the API key masked.
    pub fn to_file_config(&self) -> FileConfig {
        FileConfig {
            provider: FileProviderConfig {
                api_key: self.has_api_key().then(|| "********".to_string()),
                model: Some(self.provider.model.clone()),
                base_url: Some(self.provider.base_url.clone()),
                timeout: Some(
                    humantime::format_duration(self.provider.timeout).to_string(),
                ),
            },
            catalog: FileCatalogConfig {
                genres: Some(self.catalog.genres.clone()),
                stagger_max: Some(
                    humantime::format_duration(self.catalog.stagger_max)
                        .to_string(),
                ),
            },
            images: FileImagesConfig {
                tmdb_base: Some(self.images.tmdb_base.clone()),
                placeholder_base: Some(self.images.placeholder_base.clone()),
            },
        }
    }
}
