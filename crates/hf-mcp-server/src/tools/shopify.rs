use super::{parse_params, Tool};
use crate::mcp::{ToolCallResult, ToolDefinition};
use hf_shopify::types::*;
use hf_shopify::{graphql, inventory, products, ShopifyClient, ShopifyError};
use serde_json::{json, Value};
use std::sync::Arc;

/// One Admin API operation exposed as a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ExecuteGraphQL,
    CreateProduct,
    UpdateProduct,
    GetProduct,
    ListProducts,
    DeleteProduct,
    UpdateInventory,
    AdjustInventory,
    GetInventoryLevels,
    ListLocations,
    GetProductInventory,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::ExecuteGraphQL,
        Operation::CreateProduct,
        Operation::UpdateProduct,
        Operation::GetProduct,
        Operation::ListProducts,
        Operation::DeleteProduct,
        Operation::UpdateInventory,
        Operation::AdjustInventory,
        Operation::GetInventoryLevels,
        Operation::ListLocations,
        Operation::GetProductInventory,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::ExecuteGraphQL => "executeGraphQL",
            Operation::CreateProduct => "createProduct",
            Operation::UpdateProduct => "updateProduct",
            Operation::GetProduct => "getProduct",
            Operation::ListProducts => "listProducts",
            Operation::DeleteProduct => "deleteProduct",
            Operation::UpdateInventory => "updateInventory",
            Operation::AdjustInventory => "adjustInventory",
            Operation::GetInventoryLevels => "getInventoryLevels",
            Operation::ListLocations => "listLocations",
            Operation::GetProductInventory => "getProductInventory",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Operation::ExecuteGraphQL => "Execute any GraphQL query or mutation against the Shopify Admin API. \
                Pass commonQuery instead of query to run a predefined query: shopInfo, listProducts, \
                getProduct, inventoryLevels, locations.",
            Operation::CreateProduct => "Create a new product in Shopify with title, description, variants, and images.",
            Operation::UpdateProduct => "Update an existing product by ID.",
            Operation::GetProduct => "Get a single product by ID or handle with full details.",
            Operation::ListProducts => "List products with filtering, sorting, and pagination.",
            Operation::DeleteProduct => "Delete a product by ID.",
            Operation::UpdateInventory => "Set the inventory quantity for an item at a specific location.",
            Operation::AdjustInventory => "Adjust inventory by a relative amount (positive to add, negative to remove).",
            Operation::GetInventoryLevels => "Get inventory levels for an inventory item across all locations.",
            Operation::ListLocations => "List all inventory locations in the store.",
            Operation::GetProductInventory => "Get inventory information for all variants of a product.",
        }
    }

    fn input_schema(self) -> Value {
        let status = json!({"type": "string", "enum": ["ACTIVE", "DRAFT", "ARCHIVED"], "description": "Product status"});
        let reason = json!({
            "type": "string",
            "enum": ["correction", "cycle_count_available", "received", "other"],
            "description": "Reason for the inventory change",
            "default": "correction"
        });

        match self {
            Operation::ExecuteGraphQL => json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "The GraphQL query or mutation to execute"},
                    "variables": {"type": "object", "description": "Variables for the GraphQL operation"},
                    "operationName": {"type": "string", "description": "Name of the operation if query contains multiple"},
                    "commonQuery": {
                        "type": "string",
                        "enum": ["shopInfo", "listProducts", "getProduct", "inventoryLevels", "locations"],
                        "description": "Use a predefined query instead of providing one"
                    }
                },
                "required": []
            }),
            Operation::CreateProduct => json!({
                "type": "object",
                "properties": {
                    "title": {"type": "string", "description": "Product title"},
                    "descriptionHtml": {"type": "string", "description": "Product description in HTML"},
                    "vendor": {"type": "string", "description": "Product vendor/brand"},
                    "productType": {"type": "string", "description": "Product type/category"},
                    "tags": {"type": "array", "items": {"type": "string"}, "description": "Product tags"},
                    "status": status,
                    "variants": {
                        "type": "array",
                        "description": "Product variants",
                        "items": {
                            "type": "object",
                            "properties": {
                                "price": {"type": "string", "description": "Variant price"},
                                "sku": {"type": "string", "description": "Variant SKU"},
                                "options": {"type": "array", "items": {"type": "string"}, "description": "Variant option values"}
                            },
                            "required": ["price"]
                        }
                    },
                    "images": {
                        "type": "array",
                        "description": "Product images",
                        "items": {
                            "type": "object",
                            "properties": {
                                "src": {"type": "string", "description": "Image URL"},
                                "altText": {"type": "string", "description": "Alt text"}
                            },
                            "required": ["src"]
                        }
                    }
                },
                "required": ["title"]
            }),
            Operation::UpdateProduct => json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string", "description": "Product ID (gid://shopify/Product/...)"},
                    "title": {"type": "string", "description": "New product title"},
                    "descriptionHtml": {"type": "string", "description": "New product description in HTML"},
                    "vendor": {"type": "string", "description": "New product vendor/brand"},
                    "productType": {"type": "string", "description": "New product type/category"},
                    "tags": {"type": "array", "items": {"type": "string"}, "description": "New product tags"},
                    "status": status
                },
                "required": ["id"]
            }),
            Operation::GetProduct => json!({
                "type": "object",
                "properties": {
                    "id": {"type": "string", "description": "Product ID (gid://shopify/Product/...)"},
                    "handle": {"type": "string", "description": "Product handle/slug"}
                },
                "required": []
            }),
            Operation::ListProducts => json!({
                "type": "object",
                "properties": {
                    "first": {"type": "number", "description": "Number of products to fetch (default: 10, max: 250)"},
                    "query": {"type": "string", "description": "Search query to filter products"},
                    "sortKey": {
                        "type": "string",
                        "enum": ["TITLE", "PRODUCT_TYPE", "VENDOR", "CREATED_AT", "UPDATED_AT", "INVENTORY_TOTAL"],
                        "description": "Field to sort by"
                    },
                    "reverse": {"type": "boolean", "description": "Reverse the sort order"}
                },
                "required": []
            }),
            Operation::DeleteProduct => json!({
                "type": "object",
                "properties": {
                    "productId": {"type": "string", "description": "Product ID to delete (gid://shopify/Product/...)"}
                },
                "required": ["productId"]
            }),
            Operation::UpdateInventory => json!({
                "type": "object",
                "properties": {
                    "inventoryItemId": {"type": "string", "description": "The inventory item ID (gid://shopify/InventoryItem/...)"},
                    "locationId": {"type": "string", "description": "The location ID (gid://shopify/Location/...)"},
                    "quantity": {"type": "number", "description": "New quantity to set"},
                    "reason": reason
                },
                "required": ["inventoryItemId", "locationId", "quantity"]
            }),
            Operation::AdjustInventory => json!({
                "type": "object",
                "properties": {
                    "inventoryItemId": {"type": "string", "description": "The inventory item ID"},
                    "locationId": {"type": "string", "description": "The location ID"},
                    "delta": {"type": "number", "description": "Amount to adjust (positive to add, negative to remove)"},
                    "reason": reason
                },
                "required": ["inventoryItemId", "locationId", "delta"]
            }),
            Operation::GetInventoryLevels => json!({
                "type": "object",
                "properties": {
                    "inventoryItemId": {"type": "string", "description": "The inventory item ID"}
                },
                "required": ["inventoryItemId"]
            }),
            Operation::ListLocations => json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
            Operation::GetProductInventory => json!({
                "type": "object",
                "properties": {
                    "productId": {"type": "string", "description": "Product ID (gid://shopify/Product/...)"}
                },
                "required": ["productId"]
            }),
        }
    }
}

/// Build the tool set from `SHOPIFY_*` environment variables.
///
/// Tools are listed even without credentials so the assistant sees them;
/// each call then reports the missing configuration.
pub fn tools() -> Vec<Box<dyn Tool>> {
    let client = match ShopifyClient::from_env() {
        Ok(client) => {
            tracing::info!("Shopify endpoint: {}", client.endpoint());
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!("{e}");
            None
        }
    };
    tools_with_client(client)
}

pub fn tools_with_client(client: Option<Arc<ShopifyClient>>) -> Vec<Box<dyn Tool>> {
    Operation::ALL
        .into_iter()
        .map(|operation| {
            Box::new(ShopifyTool {
                operation,
                client: client.clone(),
            }) as Box<dyn Tool>
        })
        .collect()
}

pub struct ShopifyTool {
    operation: Operation,
    client: Option<Arc<ShopifyClient>>,
}

impl ShopifyTool {
    async fn dispatch(&self, client: &ShopifyClient, params: Value) -> Result<Result<Value, ShopifyError>, ToolCallResult> {
        let result = match self.operation {
            Operation::ExecuteGraphQL => graphql::execute_graphql(client, parse_params(params)?).await,
            Operation::CreateProduct => products::create_product(client, parse_params(params)?).await,
            Operation::UpdateProduct => products::update_product(client, parse_params(params)?).await,
            Operation::GetProduct => products::get_product(client, parse_params(params)?).await,
            Operation::ListProducts => products::list_products(client, parse_params(params)?).await,
            Operation::DeleteProduct => {
                products::delete_product(client, parse_params::<DeleteProductInput>(params)?).await
            }
            Operation::UpdateInventory => {
                inventory::update_inventory(client, parse_params::<UpdateInventoryInput>(params)?).await
            }
            Operation::AdjustInventory => {
                inventory::adjust_inventory(client, parse_params::<AdjustInventoryInput>(params)?).await
            }
            Operation::GetInventoryLevels => {
                inventory::get_inventory_levels(client, parse_params::<InventoryLevelsInput>(params)?).await
            }
            Operation::ListLocations => inventory::list_locations(client).await,
            Operation::GetProductInventory => {
                inventory::get_product_inventory(client, parse_params::<ProductInventoryInput>(params)?).await
            }
        };
        Ok(result)
    }
}

#[async_trait::async_trait]
impl Tool for ShopifyTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.operation.name().into(),
            description: self.operation.description().into(),
            input_schema: self.operation.input_schema(),
        }
    }

    async fn call(&self, params: Value) -> ToolCallResult {
        let Some(client) = &self.client else {
            return ToolCallResult::json(&ShopifyError::MissingCredentials.to_payload(), true);
        };

        match self.dispatch(client, params).await {
            Ok(Ok(payload)) => ToolCallResult::json(&payload, false),
            Ok(Err(e)) => {
                tracing::warn!("{} failed: {}", self.operation.name(), e);
                ToolCallResult::json(&e.to_payload(), true)
            }
            Err(invalid) => invalid,
        }
    }
}
