use crate::config::ServerConfig;
use crate::utils::ip::TrustedProxies;

/// Per-app HTTP settings shared with handlers through `web::Data`
#[derive(Debug, Clone)]
pub struct HttpContext {
    /// Public origin without trailing slash
    pub base_url: String,
    pub trusted_proxies: TrustedProxies,
}

impl HttpContext {
    pub fn new(base_url: impl Into<String>, trusted_proxies: TrustedProxies) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            trusted_proxies,
        }
    }

    pub fn from_server_config(config: &ServerConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            TrustedProxies::parse(&config.trusted_proxies),
        )
    }

    /// Public short URL for a code
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_url() {
        let ctx = HttpContext::new("https://sho.rt/", TrustedProxies::default());
        assert_eq!(ctx.short_url("myalias"), "https://sho.rt/myalias");
    }
}
