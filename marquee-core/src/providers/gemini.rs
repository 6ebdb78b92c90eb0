use std::{fmt, time::Duration};

use async_trait::async_trait;
use marquee_model::{DetailsExtras, Movie};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use super::prompts;
use super::traits::{ContentProvider, ProviderError};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the Gemini `generateContent` endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// [`ContentProvider`] backed by Gemini structured JSON output.
pub struct GeminiProvider {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("config", &self.config)
            .finish()
    }
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Sends one prompt and returns the concatenated candidate text, or `None`
    /// when the model produced no text at all.
    async fn generate_text(
        &self,
        prompt: &str,
        schema: Value,
    ) -> Result<Option<String>, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        debug!(model = %self.config.model, "sending generateContent request");
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status, response).await);
        }

        let raw = response.text().await?;
        let payload: GenerateContentResponse = serde_json::from_str(&raw)?;
        Ok(payload.into_text())
    }

    async fn generate_json<T>(
        &self,
        prompt: &str,
        schema: Value,
    ) -> Result<Option<T>, ProviderError>
    where
        T: DeserializeOwned,
    {
        match self.generate_text(prompt, schema).await? {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ContentProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn movies_by_genre(
        &self,
        genre: &str,
    ) -> Result<Vec<Movie>, ProviderError> {
        let movies = self
            .generate_json::<Vec<Movie>>(
                &prompts::genre_prompt(genre),
                prompts::movie_list_schema(),
            )
            .await?;
        Ok(movies.unwrap_or_default())
    }

    async fn search(&self, query: &str) -> Result<Vec<Movie>, ProviderError> {
        let movies = self
            .generate_json::<Vec<Movie>>(
                &prompts::search_prompt(query),
                prompts::movie_list_schema(),
            )
            .await?;
        Ok(movies.unwrap_or_default())
    }

    async fn movie_details(
        &self,
        movie: &Movie,
    ) -> Result<Option<DetailsExtras>, ProviderError> {
        self.generate_json::<DetailsExtras>(
            &prompts::details_prompt(&movie.title, movie.year),
            prompts::details_schema(),
        )
        .await
    }
}

async fn error_from_response(
    status: StatusCode,
    response: reqwest::Response,
) -> ProviderError {
    #[derive(Debug, Deserialize)]
    struct ErrorEnvelope {
        #[serde(default)]
        error: Option<ErrorBody>,
    }

    #[derive(Debug, Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        message: Option<String>,
    }

    match status {
        StatusCode::TOO_MANY_REQUESTS => return ProviderError::RateLimited,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return ProviderError::InvalidApiKey;
        }
        _ => {}
    }

    let message = response
        .json::<ErrorEnvelope>()
        .await
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|body| body.message);

    match message {
        // Gemini reports a bad key as 400 INVALID_ARGUMENT
        Some(message) if message.contains("API key not valid") => {
            ProviderError::InvalidApiKey
        }
        Some(message) => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
        None => ProviderError::Api {
            status: status.as_u16(),
            message: format!("Gemini request failed with status {status}"),
        },
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() { None } else { Some(text) }
    }
}
