//! GraphQL documents sent to the Admin API.

/// Predefined queries selectable by name through `executeGraphQL`.
pub const COMMON_QUERIES: &[(&str, &str)] = &[
    ("shopInfo", SHOP_INFO),
    ("listProducts", COMMON_LIST_PRODUCTS),
    ("getProduct", COMMON_GET_PRODUCT),
    ("inventoryLevels", COMMON_INVENTORY_LEVELS),
    ("locations", COMMON_LOCATIONS),
];

pub fn common_query(name: &str) -> Option<&'static str> {
    COMMON_QUERIES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, query)| *query)
}

pub fn common_query_names() -> Vec<&'static str> {
    COMMON_QUERIES.iter().map(|(key, _)| *key).collect()
}

pub const SHOP_INFO: &str = r#"
query ShopInfo {
  shop {
    name
    email
    primaryDomain {
      url
      host
    }
    plan {
      displayName
    }
    currencyCode
    billingAddress {
      country
    }
  }
}
"#;

pub const COMMON_LIST_PRODUCTS: &str = r#"
query ListProducts($first: Int!, $query: String, $sortKey: ProductSortKeys, $reverse: Boolean) {
  products(first: $first, query: $query, sortKey: $sortKey, reverse: $reverse) {
    edges {
      node {
        id
        title
        handle
        status
        vendor
        productType
        createdAt
        updatedAt
        totalInventory
        priceRangeV2 {
          minVariantPrice {
            amount
            currencyCode
          }
          maxVariantPrice {
            amount
            currencyCode
          }
        }
        featuredImage {
          url
          altText
        }
      }
      cursor
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
    }
  }
}
"#;

pub const COMMON_GET_PRODUCT: &str = r#"
query GetProduct($id: ID!) {
  product(id: $id) {
    id
    title
    handle
    descriptionHtml
    status
    vendor
    productType
    tags
    createdAt
    updatedAt
    totalInventory
    options {
      id
      name
      values
    }
    variants(first: 100) {
      edges {
        node {
          id
          title
          sku
          price
          compareAtPrice
          inventoryQuantity
          selectedOptions {
            name
            value
          }
        }
      }
    }
    images(first: 10) {
      edges {
        node {
          id
          url
          altText
        }
      }
    }
  }
}
"#;

pub const COMMON_INVENTORY_LEVELS: &str = r#"
query InventoryLevels($inventoryItemId: ID!) {
  inventoryItem(id: $inventoryItemId) {
    id
    sku
    inventoryLevels(first: 10) {
      edges {
        node {
          id
          available
          location {
            id
            name
          }
        }
      }
    }
  }
}
"#;

pub const COMMON_LOCATIONS: &str = r#"
query Locations {
  locations(first: 50) {
    edges {
      node {
        id
        name
        isActive
        address {
          address1
          city
          country
        }
      }
    }
  }
}
"#;

// ─── Products ───────────────────────────────────────────────────────────────

pub const CREATE_PRODUCT: &str = r#"
mutation CreateProduct($input: ProductInput!) {
  productCreate(input: $input) {
    product {
      id
      title
      handle
      status
      variants(first: 10) {
        edges {
          node {
            id
            title
            sku
            price
          }
        }
      }
    }
    userErrors {
      field
      message
    }
  }
}
"#;

pub const UPDATE_PRODUCT: &str = r#"
mutation UpdateProduct($input: ProductInput!) {
  productUpdate(input: $input) {
    product {
      id
      title
      handle
      status
      updatedAt
    }
    userErrors {
      field
      message
    }
  }
}
"#;

pub const DELETE_PRODUCT: &str = r#"
mutation DeleteProduct($input: ProductDeleteInput!) {
  productDelete(input: $input) {
    deletedProductId
    userErrors {
      field
      message
    }
  }
}
"#;

const PRODUCT_DETAIL_FIELDS: &str = r#"
    id
    title
    handle
    descriptionHtml
    status
    vendor
    productType
    tags
    totalInventory
    variants(first: 100) {
      edges {
        node {
          id
          title
          sku
          price
          inventoryQuantity
        }
      }
    }
    images(first: 20) {
      edges {
        node {
          id
          url
          altText
        }
      }
    }
"#;

pub fn get_product_by_id() -> String {
    format!("query GetProduct($id: ID!) {{\n  product(id: $id) {{{PRODUCT_DETAIL_FIELDS}  }}\n}}\n")
}

pub fn get_product_by_handle() -> String {
    format!(
        "query GetProductByHandle($handle: String!) {{\n  productByHandle(handle: $handle) {{{PRODUCT_DETAIL_FIELDS}  }}\n}}\n"
    )
}

pub const LIST_PRODUCTS: &str = r#"
query ListProducts($first: Int!, $query: String, $sortKey: ProductSortKeys, $reverse: Boolean) {
  products(first: $first, query: $query, sortKey: $sortKey, reverse: $reverse) {
    edges {
      node {
        id
        title
        handle
        status
        vendor
        productType
        createdAt
        totalInventory
        priceRangeV2 {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        featuredImage {
          url
        }
      }
      cursor
    }
    pageInfo {
      hasNextPage
    }
  }
}
"#;

// ─── Inventory ──────────────────────────────────────────────────────────────

pub const SET_INVENTORY: &str = r#"
mutation SetInventoryQuantity($input: InventorySetQuantitiesInput!) {
  inventorySetQuantities(input: $input) {
    inventoryAdjustmentGroup {
      createdAt
      reason
      changes {
        name
        delta
      }
    }
    userErrors {
      field
      message
    }
  }
}
"#;

pub const ADJUST_INVENTORY: &str = r#"
mutation AdjustInventory($input: InventoryAdjustQuantitiesInput!) {
  inventoryAdjustQuantities(input: $input) {
    inventoryAdjustmentGroup {
      createdAt
      reason
      changes {
        name
        delta
      }
    }
    userErrors {
      field
      message
    }
  }
}
"#;

pub const GET_INVENTORY_LEVELS: &str = r#"
query GetInventoryLevels($inventoryItemId: ID!) {
  inventoryItem(id: $inventoryItemId) {
    id
    sku
    tracked
    inventoryLevels(first: 50) {
      edges {
        node {
          id
          available
          location {
            id
            name
            isActive
          }
        }
      }
    }
  }
}
"#;

pub const LIST_LOCATIONS: &str = r#"
query ListLocations {
  locations(first: 50) {
    edges {
      node {
        id
        name
        isActive
        fulfillsOnlineOrders
        address {
          address1
          address2
          city
          province
          country
          zip
        }
      }
    }
  }
}
"#;

pub const GET_PRODUCT_INVENTORY: &str = r#"
query GetProductInventory($productId: ID!) {
  product(id: $productId) {
    id
    title
    totalInventory
    variants(first: 100) {
      edges {
        node {
          id
          title
          sku
          inventoryQuantity
          inventoryItem {
            id
            tracked
            inventoryLevels(first: 10) {
              edges {
                node {
                  id
                  available
                  location {
                    id
                    name
                  }
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_query_lookup() {
        assert!(common_query("shopInfo").unwrap().contains("query ShopInfo"));
        assert!(common_query("locations").unwrap().contains("locations(first: 50)"));
        assert!(common_query("orders").is_none());
        assert_eq!(common_query_names().len(), 5);
    }

    #[test]
    fn test_product_detail_queries_are_balanced() {
        for query in [get_product_by_id(), get_product_by_handle()] {
            assert_eq!(query.matches('{').count(), query.matches('}').count());
        }
        assert!(get_product_by_handle().contains("productByHandle(handle: $handle)"));
    }
}
