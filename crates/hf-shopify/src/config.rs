use crate::error::ShopifyError;
use std::env;

pub const DEFAULT_API_VERSION: &str = "2024-10";

pub const ENV_STORE_DOMAIN: &str = "SHOPIFY_STORE_DOMAIN";
pub const ENV_ACCESS_TOKEN: &str = "SHOPIFY_ACCESS_TOKEN";
pub const ENV_API_VERSION: &str = "SHOPIFY_API_VERSION";
pub const ENV_ADMIN_API_URL: &str = "SHOPIFY_ADMIN_API_URL";

#[derive(Debug, Clone)]
pub struct ShopifyConfig {
    /// Bare store host, e.g. `my-store.myshopify.com`.
    pub shop_domain: String,
    pub access_token: String,
    pub api_version: String,
    /// Full GraphQL endpoint that replaces the one derived from the domain.
    pub endpoint: Option<String>,
}

impl ShopifyConfig {
    pub fn new(shop_domain: &str, access_token: impl Into<String>) -> Self {
        Self {
            shop_domain: normalize_domain(shop_domain),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            endpoint: None,
        }
    }

    pub fn from_env() -> Result<Self, ShopifyError> {
        let domain = non_empty_var(ENV_STORE_DOMAIN);
        let token = non_empty_var(ENV_ACCESS_TOKEN);
        let (Some(domain), Some(token)) = (domain, token) else {
            return Err(ShopifyError::MissingCredentials);
        };

        let mut config = Self::new(&domain, token);
        if let Some(version) = non_empty_var(ENV_API_VERSION) {
            config.api_version = version;
        }
        config.endpoint = non_empty_var(ENV_ADMIN_API_URL);
        Ok(config)
    }

    pub fn admin_api_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!(
                "https://{}/admin/api/{}/graphql.json",
                self.shop_domain, self.api_version
            ),
        }
    }
}

/// Strip a scheme prefix and a trailing slash from a store domain.
pub fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme
        .strip_suffix('/')
        .unwrap_or(without_scheme)
        .to_string()
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
