#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Effective runtime configuration for a newsgauge process.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Origin of the news search surface, without trailing slash.
    pub search_base_url: String,
    /// Word appended to every topic query.
    pub search_qualifier: String,
    pub user_agent: String,
    /// Applied to every outbound request.
    pub request_timeout_secs: u64,
    /// Upper bound on article fetches in flight at once.
    pub max_concurrent_fetches: usize,
    /// Number of sentences kept by the extractive summarizer.
    pub summary_sentences: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            search_base_url: "https://news.google.com".to_string(),
            search_qualifier: "politics".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
            request_timeout_secs: 30,
            max_concurrent_fetches: 4,
            summary_sentences: 5,
        }
    }
}
