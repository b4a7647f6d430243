use crate::client::ShopifyClient;
use crate::error::ShopifyError;
use crate::queries;
use crate::types::{
    CreateProductInput, DeleteProductInput, GetProductInput, ListProductsInput, UpdateProductInput,
};
use serde_json::{json, Map, Value};

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 250;

pub async fn create_product(
    client: &ShopifyClient,
    input: CreateProductInput,
) -> Result<Value, ShopifyError> {
    let mut product = Map::new();
    product.insert("title".into(), json!(input.title));
    insert_common_fields(
        &mut product,
        input.description_html,
        input.vendor,
        input.product_type,
        input.tags,
        input.status.map(|s| json!(s)),
    );
    if !input.variants.is_empty() {
        product.insert("variants".into(), json!(input.variants));
    }
    if !input.images.is_empty() {
        product.insert("images".into(), json!(input.images));
    }

    let payload = client
        .mutate(queries::CREATE_PRODUCT, "productCreate", json!({ "input": product }))
        .await?;
    tracing::info!("Created product {:?}", input.title);

    Ok(json!({
        "success": true,
        "product": payload.get("product"),
        "message": format!("Product \"{}\" created successfully", input.title),
    }))
}

pub async fn update_product(
    client: &ShopifyClient,
    input: UpdateProductInput,
) -> Result<Value, ShopifyError> {
    let mut product = Map::new();
    product.insert("id".into(), json!(input.id));
    if let Some(title) = input.title.filter(|t| !t.is_empty()) {
        product.insert("title".into(), json!(title));
    }
    insert_common_fields(
        &mut product,
        input.description_html,
        input.vendor,
        input.product_type,
        input.tags,
        input.status.map(|s| json!(s)),
    );

    let payload = client
        .mutate(queries::UPDATE_PRODUCT, "productUpdate", json!({ "input": product }))
        .await?;

    Ok(json!({
        "success": true,
        "product": payload.get("product"),
        "message": "Product updated successfully",
    }))
}

/// Fetch one product by id, or by handle when no id is given.
pub async fn get_product(
    client: &ShopifyClient,
    input: GetProductInput,
) -> Result<Value, ShopifyError> {
    let id = input.id.filter(|s| !s.is_empty());
    let handle = input.handle.filter(|s| !s.is_empty());

    let (query, variables, field) = match (id, handle) {
        (Some(id), _) => (queries::get_product_by_id(), json!({ "id": id }), "product"),
        (None, Some(handle)) => (
            queries::get_product_by_handle(),
            json!({ "handle": handle }),
            "productByHandle",
        ),
        (None, None) => {
            return Err(ShopifyError::InvalidInput(
                "Either id or handle is required".to_string(),
            ))
        }
    };

    let data = client.query(&query, variables).await?;
    match data.get(field) {
        Some(product) if !product.is_null() => Ok(json!({
            "success": true,
            "product": product,
        })),
        _ => Err(ShopifyError::NotFound("Product")),
    }
}

pub async fn list_products(
    client: &ShopifyClient,
    input: ListProductsInput,
) -> Result<Value, ShopifyError> {
    let first = input
        .first
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let mut variables = json!({ "first": first });
    if let Some(query) = input.query.filter(|q| !q.is_empty()) {
        variables["query"] = json!(query);
    }
    if let Some(sort_key) = input.sort_key {
        variables["sortKey"] = json!(sort_key);
    }
    if let Some(reverse) = input.reverse {
        variables["reverse"] = json!(reverse);
    }

    let data = client.query(queries::LIST_PRODUCTS, variables).await?;
    let products = edge_nodes(&data["products"]);

    Ok(json!({
        "success": true,
        "count": products.len(),
        "products": products,
        "hasNextPage": data["products"]["pageInfo"]["hasNextPage"].as_bool().unwrap_or(false),
    }))
}

pub async fn delete_product(
    client: &ShopifyClient,
    input: DeleteProductInput,
) -> Result<Value, ShopifyError> {
    let payload = client
        .mutate(
            queries::DELETE_PRODUCT,
            "productDelete",
            json!({ "input": { "id": input.product_id } }),
        )
        .await?;
    tracing::info!("Deleted product {}", input.product_id);

    Ok(json!({
        "success": true,
        "deletedProductId": payload.get("deletedProductId"),
        "message": "Product deleted successfully",
    }))
}

/// Nodes of a connection's `edges` array; empty when the shape is missing.
pub(crate) fn edge_nodes(connection: &Value) -> Vec<Value> {
    connection["edges"]
        .as_array()
        .map(|edges| edges.iter().map(|e| e["node"].clone()).collect())
        .unwrap_or_default()
}

fn insert_common_fields(
    product: &mut Map<String, Value>,
    description_html: Option<String>,
    vendor: Option<String>,
    product_type: Option<String>,
    tags: Option<Vec<String>>,
    status: Option<Value>,
) {
    let strings = [
        ("descriptionHtml", description_html),
        ("vendor", vendor),
        ("productType", product_type),
    ];
    for (key, value) in strings {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            product.insert(key.into(), json!(value));
        }
    }
    if let Some(tags) = tags {
        product.insert("tags".into(), json!(tags));
    }
    if let Some(status) = status {
        product.insert("status".into(), status);
    }
}
