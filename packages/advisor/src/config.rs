//! Service configuration for the advisory client.
//!
//! A small value struct in place of any server-side configuration: the app is
//! delivered as static assets, so the API key is baked in at build time via
//! the `GEMINI_API_KEY` environment variable and everything else has a
//! sensible default.

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Configuration for [`crate::GeminiClient`].
#[derive(Clone, Debug, PartialEq)]
pub struct AdvisorConfig {
    /// API key sent with every request. Empty means unauthenticated calls,
    /// which the service will reject — the UI degrades to its fallback copy.
    pub api_key: String,
    /// Model identifier, e.g. `"gemini-2.5-flash"`.
    pub model: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Create a config with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Builder method to override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Read the API key baked in at compile time from `GEMINI_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(option_env!("GEMINI_API_KEY").unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_builder() {
        let config = AdvisorConfig::new("key").with_model("gemini-2.5-pro");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.model, "gemini-2.5-pro");
    }
}
