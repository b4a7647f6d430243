use crate::config::ShopifyConfig;
use crate::error::ShopifyError;
use crate::types::{GraphQLResponse, UserError};
use reqwest::Client;
use serde_json::{json, Map, Value};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Thin client over the Admin GraphQL endpoint. Queries are sent as given.
pub struct ShopifyClient {
    http: Client,
    endpoint: String,
    access_token: String,
}

impl ShopifyClient {
    pub fn new(config: &ShopifyConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.admin_api_url(),
            access_token: config.access_token.clone(),
        }
    }

    pub fn from_env() -> Result<Self, ShopifyError> {
        Ok(Self::new(&ShopifyConfig::from_env()?))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a GraphQL document and return the raw response envelope.
    ///
    /// Non-2xx statuses are errors; GraphQL-level errors are left in the
    /// envelope for the caller to inspect.
    pub async fn execute(
        &self,
        query: &str,
        variables: Option<Map<String, Value>>,
        operation_name: Option<&str>,
    ) -> Result<GraphQLResponse, ShopifyError> {
        let mut body = json!({ "query": query });
        if let Some(variables) = variables {
            body["variables"] = Value::Object(variables);
        }
        if let Some(name) = operation_name {
            body["operationName"] = Value::String(name.to_string());
        }

        tracing::debug!("POST {} (operation: {:?})", self.endpoint, operation_name);
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Shopify responded with {}", status);
            return Err(ShopifyError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Run a query and return its `data`, turning GraphQL errors into
    /// [`ShopifyError::GraphQl`].
    pub async fn query(&self, query: &str, variables: Value) -> Result<Value, ShopifyError> {
        let variables = match variables {
            Value::Object(map) => Some(map),
            _ => None,
        };
        let response = self.execute(query, variables, None).await?;
        if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
            return Err(ShopifyError::GraphQl(errors));
        }
        Ok(response.data.unwrap_or(Value::Null))
    }

    /// Run a mutation and return its payload object under `field`, turning a
    /// non-empty `userErrors` list into [`ShopifyError::UserErrors`].
    pub async fn mutate(
        &self,
        mutation: &str,
        field: &str,
        variables: Value,
    ) -> Result<Value, ShopifyError> {
        let mut data = self.query(mutation, variables).await?;
        let payload = data.get_mut(field).map(Value::take).unwrap_or(Value::Null);

        let user_errors: Vec<UserError> = payload
            .get("userErrors")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default();
        if !user_errors.is_empty() {
            return Err(ShopifyError::UserErrors(user_errors));
        }
        Ok(payload)
    }
}
