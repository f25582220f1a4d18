/// Endpoint settings for the movie lookup.
///
/// Values are baked in at build time: the web target has no process
/// environment to read from.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    pub base_url: String,
    pub api_key: String,
}

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

impl LookupConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("OMDB_API_URL").unwrap_or(DEFAULT_BASE_URL),
            option_env!("OMDB_API_KEY").unwrap_or_default(),
        )
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
