use crate::client::ShopifyClient;
use crate::error::ShopifyError;
use crate::queries::{common_query, common_query_names};
use crate::types::ExecuteGraphQLInput;
use serde_json::{json, Value};

/// Run an arbitrary query or mutation, or one of the predefined queries.
pub async fn execute_graphql(
    client: &ShopifyClient,
    input: ExecuteGraphQLInput,
) -> Result<Value, ShopifyError> {
    let query = match (input.query.as_deref(), input.common_query.as_deref()) {
        (Some(query), _) if !query.trim().is_empty() => query.to_string(),
        (_, Some(name)) => common_query(name)
            .ok_or_else(|| {
                ShopifyError::InvalidInput(format!(
                    "Unknown common query \"{name}\". Available: {}",
                    common_query_names().join(", ")
                ))
            })?
            .to_string(),
        _ => {
            return Err(ShopifyError::InvalidInput(
                "Either query or commonQuery is required".to_string(),
            ))
        }
    };

    let response = client
        .execute(&query, input.variables, input.operation_name.as_deref())
        .await?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        return Err(ShopifyError::GraphQl(errors));
    }

    let mut payload = json!({
        "success": true,
        "data": response.data,
    });
    if let Some(extensions) = response.extensions {
        payload["extensions"] = extensions;
    }
    Ok(payload)
}
