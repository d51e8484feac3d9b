/// Completion service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Bearer token. `None` leaves the client unconfigured; every call then
    /// fails with `NotConfigured` and generation falls back to the blank
    /// template.
    pub api_key: Option<String>,
    /// Base URL without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model used for template classification.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4".to_string(),
            timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                     |
    /// |--------------------|-----------------------------|
    /// | `OPENAI_API_KEY`   | unset                       |
    /// | `OPENAI_BASE_URL`  | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`     | `gpt-4`                     |
    /// | `LLM_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let base_url = std::env::var("OPENAI_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let model = std::env::var("OPENAI_MODEL").unwrap_or(defaults.model);

        let timeout_secs: u64 = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.timeout_secs.to_string())
            .parse()
            .expect("LLM_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            model,
            timeout_secs,
        }
    }
}
