use crate::api::models::LookupOutcome;
use crate::config::LookupConfig;
use crate::error::LookupError;
use once_cell::sync::Lazy;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Resolves a free-text title to a movie.
#[allow(async_fn_in_trait)]
pub trait MovieLookup {
    async fn lookup(&self, title: &str) -> Result<LookupOutcome, LookupError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct OmdbClient {
    pub config: LookupConfig,
}

impl OmdbClient {
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    pub fn build_url(&self, title: &str) -> String {
        let base = &self.config.base_url;
        let separator = if base.contains('?') { '&' } else { '?' };
        format!(
            "{}{}apikey={}&t={}",
            base,
            separator,
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(title)
        )
    }

    pub async fn get_movie(&self, title: &str) -> Result<LookupOutcome, LookupError> {
        let url = self.build_url(title);
        tracing::debug!(title, "looking up movie");

        // OMDb reports "not found" and bad keys in the body, sometimes with a 4xx status,
        // so the body is decoded regardless of status.
        let body = HTTP_CLIENT.get(&url).send().await?.text().await?;
        let outcome = parse_lookup_body(&body)?;

        match &outcome {
            LookupOutcome::Found(data) => {
                tracing::debug!(title, imdb_id = %data.imdb_id, "movie found")
            }
            LookupOutcome::NotFound { error } => {
                tracing::debug!(title, error = %error, "movie not found")
            }
        }
        Ok(outcome)
    }
}

impl MovieLookup for OmdbClient {
    async fn lookup(&self, title: &str) -> Result<LookupOutcome, LookupError> {
        self.get_movie(title).await
    }
}

pub fn parse_lookup_body(body: &str) -> Result<LookupOutcome, LookupError> {
    Ok(serde_json::from_str(body)?)
}
