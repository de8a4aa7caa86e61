pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000"; // Development backend when BACKEND_URL is unset

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    backend_url: String,
}

impl SiteConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        let trimmed = backend_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { backend_url: trimmed.to_string() }
    }

    /// `BACKEND_URL` is read when the wasm bundle is compiled, trunk has no runtime env.
    pub fn from_build_env() -> Self {
        Self::from_value(option_env!("BACKEND_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn leads_endpoint(&self) -> String {
        format!("{}/api/leads", self.backend_url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { backend_url: DEFAULT_BACKEND_URL.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backend() {
        let config = SiteConfig::from_value(None);
        assert_eq!(config.backend_url(), "http://localhost:8000");
        assert_eq!(config.leads_endpoint(), "http://localhost:8000/api/leads");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        assert_eq!(SiteConfig::from_value(Some("")), SiteConfig::default());
        assert_eq!(SiteConfig::from_value(Some("   ")), SiteConfig::default());
    }

    #[test]
    fn test_configured_backend() {
        let config = SiteConfig::from_value(Some("https://api.genistein.example"));
        assert_eq!(config.leads_endpoint(), "https://api.genistein.example/api/leads");
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = SiteConfig::new("https://api.genistein.example/");
        assert_eq!(config.backend_url(), "https://api.genistein.example");
        assert_eq!(config.leads_endpoint(), "https://api.genistein.example/api/leads");
    }
}
