use crate::client::ShopifyClient;
use crate::error::ShopifyError;
use crate::products::edge_nodes;
use crate::queries;
use crate::types::{
    AdjustInventoryInput, InventoryLevelsInput, ProductInventoryInput, UpdateInventoryInput,
};
use serde_json::{json, Value};

/// Quantity name every inventory change targets.
const AVAILABLE: &str = "available";

pub async fn update_inventory(
    client: &ShopifyClient,
    input: UpdateInventoryInput,
) -> Result<Value, ShopifyError> {
    let set_input = json!({
        "name": AVAILABLE,
        "reason": input.reason,
        "ignoreCompareQuantity": true,
        "quantities": [{
            "inventoryItemId": input.inventory_item_id,
            "locationId": input.location_id,
            "quantity": input.quantity,
        }],
    });

    let payload = client
        .mutate(queries::SET_INVENTORY, "inventorySetQuantities", json!({ "input": set_input }))
        .await?;

    Ok(json!({
        "success": true,
        "adjustment": payload.get("inventoryAdjustmentGroup"),
        "message": format!("Inventory updated to {} units", input.quantity),
    }))
}

pub async fn adjust_inventory(
    client: &ShopifyClient,
    input: AdjustInventoryInput,
) -> Result<Value, ShopifyError> {
    let adjust_input = json!({
        "name": AVAILABLE,
        "reason": input.reason,
        "changes": [{
            "inventoryItemId": input.inventory_item_id,
            "locationId": input.location_id,
            "delta": input.delta,
        }],
    });

    let payload = client
        .mutate(
            queries::ADJUST_INVENTORY,
            "inventoryAdjustQuantities",
            json!({ "input": adjust_input }),
        )
        .await?;

    Ok(json!({
        "success": true,
        "adjustment": payload.get("inventoryAdjustmentGroup"),
        "message": format!("Inventory adjusted by {} units", signed(input.delta)),
    }))
}

pub async fn get_inventory_levels(
    client: &ShopifyClient,
    input: InventoryLevelsInput,
) -> Result<Value, ShopifyError> {
    let data = client
        .query(
            queries::GET_INVENTORY_LEVELS,
            json!({ "inventoryItemId": input.inventory_item_id }),
        )
        .await?;

    let item = &data["inventoryItem"];
    if item.is_null() {
        return Err(ShopifyError::NotFound("Inventory item"));
    }

    let levels: Vec<Value> = edge_nodes(&item["inventoryLevels"])
        .iter()
        .map(|node| {
            json!({
                "locationId": node["location"]["id"],
                "locationName": node["location"]["name"],
                "available": node["available"],
                "isActive": node["location"]["isActive"],
            })
        })
        .collect();
    let total: i64 = levels.iter().filter_map(|l| l["available"].as_i64()).sum();

    Ok(json!({
        "success": true,
        "inventoryItemId": item["id"],
        "sku": item["sku"],
        "tracked": item["tracked"],
        "levels": levels,
        "totalAvailable": total,
    }))
}

pub async fn list_locations(client: &ShopifyClient) -> Result<Value, ShopifyError> {
    let data = client.query(queries::LIST_LOCATIONS, json!({})).await?;
    let locations = edge_nodes(&data["locations"]);

    Ok(json!({
        "success": true,
        "count": locations.len(),
        "locations": locations,
    }))
}

/// Per-variant inventory for a product, with levels at each location.
pub async fn get_product_inventory(
    client: &ShopifyClient,
    input: ProductInventoryInput,
) -> Result<Value, ShopifyError> {
    let data = client
        .query(
            queries::GET_PRODUCT_INVENTORY,
            json!({ "productId": input.product_id }),
        )
        .await?;

    let product = &data["product"];
    if product.is_null() {
        return Err(ShopifyError::NotFound("Product"));
    }

    let variants: Vec<Value> = edge_nodes(&product["variants"])
        .iter()
        .map(|variant| {
            let item = &variant["inventoryItem"];
            let levels: Vec<Value> = edge_nodes(&item["inventoryLevels"])
                .iter()
                .map(|level| {
                    json!({
                        "locationId": level["location"]["id"],
                        "locationName": level["location"]["name"],
                        "available": level["available"],
                    })
                })
                .collect();
            json!({
                "variantId": variant["id"],
                "title": variant["title"],
                "sku": variant["sku"],
                "inventoryQuantity": variant["inventoryQuantity"],
                "inventoryItemId": item["id"],
                "tracked": item["tracked"],
                "levels": levels,
            })
        })
        .collect();

    Ok(json!({
        "success": true,
        "productId": product["id"],
        "title": product["title"],
        "totalInventory": product["totalInventory"],
        "variants": variants,
    }))
}

fn signed(delta: i64) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}
