use crate::types::{GraphQLError, UserError};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopifyError {
    #[error("Missing Shopify credentials. Set SHOPIFY_STORE_DOMAIN and SHOPIFY_ACCESS_TOKEN environment variables.")]
    MissingCredentials,

    #[error("Shopify API error: {status} {reason}")]
    Http { status: u16, reason: String },

    #[error("Request to Shopify failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GraphQL errors:\n{}", join_messages(.0))]
    GraphQl(Vec<GraphQLError>),

    #[error("Shopify rejected the mutation: {}", join_user_errors(.0))]
    UserErrors(Vec<UserError>),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    InvalidInput(String),
}

impl ShopifyError {
    /// The `"success": false` payload returned to the assistant.
    pub fn to_payload(&self) -> Value {
        match self {
            ShopifyError::GraphQl(errors) => json!({
                "success": false,
                "errors": errors,
                "message": self.to_string(),
            }),
            ShopifyError::UserErrors(errors) => json!({
                "success": false,
                "userErrors": errors,
            }),
            other => json!({
                "success": false,
                "error": other.to_string(),
            }),
        }
    }
}

fn join_messages(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(|e| match &e.field {
            Some(field) if !field.is_empty() => format!("{}: {}", field.join("."), e.message),
            _ => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphql_payload_joins_messages() {
        let err = ShopifyError::GraphQl(vec![
            GraphQLError::new("Field 'foo' doesn't exist"),
            GraphQLError::new("Throttled"),
        ]);
        let payload = err.to_payload();
        assert_eq!(payload["success"], false);
        assert_eq!(payload["message"], "GraphQL errors:\nField 'foo' doesn't exist\nThrottled");
        assert_eq!(payload["errors"][1]["message"], "Throttled");
    }

    #[test]
    fn test_user_errors_payload() {
        let err = ShopifyError::UserErrors(vec![UserError {
            field: Some(vec!["input".into(), "title".into()]),
            message: "Title can't be blank".into(),
        }]);
        assert_eq!(err.to_string(), "Shopify rejected the mutation: input.title: Title can't be blank");
        let payload = err.to_payload();
        assert_eq!(payload["userErrors"][0]["field"][1], "title");
        assert!(payload.get("error").is_none());
    }

    #[test]
    fn test_plain_error_payload() {
        let payload = ShopifyError::NotFound("Product").to_payload();
        assert_eq!(payload, json!({"success": false, "error": "Product not found"}));
    }
}
