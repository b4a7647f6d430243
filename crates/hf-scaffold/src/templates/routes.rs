use crate::classify::route_title;
use crate::types::RouteType;

/// Flags controlling which exports a route template emits.
#[derive(Debug, Clone, Copy)]
pub struct RouteFeatures {
    pub loader: bool,
    pub action: bool,
    pub meta: bool,
    pub graphql: bool,
}

impl Default for RouteFeatures {
    fn default() -> Self {
        Self {
            loader: true,
            action: false,
            meta: true,
            graphql: false,
        }
    }
}

const COLLECTION: &str = r#"import {redirect, useLoaderData} from 'react-router';
import type {Route} from './+types/__NAME__';
import {getPaginationVariables, Analytics} from '@shopify/hydrogen';
import {PaginatedResourceSection} from '~/components/PaginatedResourceSection';

export const meta: Route.MetaFunction = ({data}) => {
  return [{title: `${data?.collection?.title ?? ''} Collection`}];
};

export async function loader({context, params, request}: Route.LoaderArgs) {
  const {handle} = params;
  const {storefront} = context;
  const paginationVariables = getPaginationVariables(request, {pageBy: 8});

  if (!handle) {
    throw redirect('/collections');
  }

  const {collection} = await storefront.query(COLLECTION_QUERY, {
    variables: {handle, ...paginationVariables},
  });

  if (!collection) {
    throw new Response(`Collection ${handle} not found`, {status: 404});
  }

  return {collection};
}

export default function Collection() {
  const {collection} = useLoaderData<typeof loader>();

  return (
    <div className="container mx-auto px-4 py-8">
      <h1 className="text-2xl font-bold">{collection.title}</h1>
      {collection.description && (
        <p className="mt-2 text-secondary-600">{collection.description}</p>
      )}
      <PaginatedResourceSection
        connection={collection.products}
        resourcesClassName="mt-8 grid grid-cols-2 gap-4 md:grid-cols-3 lg:grid-cols-4"
      >
        {({node: product}) => (
          <div key={product.id}>
            {product.title}
          </div>
        )}
      </PaginatedResourceSection>
      <Analytics.CollectionView
        data={{
          collection: {
            id: collection.id,
            handle: collection.handle,
          },
        }}
      />
    </div>
  );
}

const COLLECTION_QUERY = `#graphql
  fragment ProductItem on Product {
    id
    handle
    title
    featuredImage {
      url
      altText
      width
      height
    }
    priceRange {
      minVariantPrice {
        amount
        currencyCode
      }
    }
  }

  query Collection(
    $handle: String!
    $first: Int
    $last: Int
    $after: String
    $before: String
  ) {
    collection(handle: $handle) {
      id
      handle
      title
      description
      products(first: $first, last: $last, after: $after, before: $before) {
        nodes {
          ...ProductItem
        }
        pageInfo {
          hasNextPage
          hasPreviousPage
          startCursor
          endCursor
        }
      }
    }
  }
` as const;
"#;

const PRODUCT: &str = r#"import {useLoaderData} from 'react-router';
import type {Route} from './+types/__NAME__';
import {
  getSelectedProductOptions,
  Analytics,
  useOptimisticVariant,
} from '@shopify/hydrogen';

export const meta: Route.MetaFunction = ({data}) => {
  return [{title: `${data?.product?.title ?? ''}`}];
};

export async function loader({context, params, request}: Route.LoaderArgs) {
  const {handle} = params;
  const {storefront} = context;

  const selectedOptions = getSelectedProductOptions(request);

  const {product} = await storefront.query(PRODUCT_QUERY, {
    variables: {handle, selectedOptions},
  });

  if (!product) {
    throw new Response('Product not found', {status: 404});
  }

  return {product};
}

export default function Product() {
  const {product} = useLoaderData<typeof loader>();
  const selectedVariant = useOptimisticVariant(
    product.selectedOrFirstAvailableVariant,
    product.variants,
  );

  return (
    <div className="container mx-auto px-4 py-8">
      <div className="grid gap-8 lg:grid-cols-2">
        <div>
          {product.featuredImage && (
            <img
              src={product.featuredImage.url}
              alt={product.featuredImage.altText || product.title}
              className="w-full rounded-lg"
            />
          )}
        </div>
        <div>
          <h1 className="text-3xl font-bold">{product.title}</h1>
          {product.descriptionHtml && (
            <div
              className="mt-4 prose"
              dangerouslySetInnerHTML={{__html: product.descriptionHtml}}
            />
          )}
        </div>
      </div>
      <Analytics.ProductView
        data={{
          products: [{
            id: product.id,
            title: product.title,
            price: selectedVariant?.price?.amount || '0',
            vendor: product.vendor,
            variantId: selectedVariant?.id || '',
            variantTitle: selectedVariant?.title || '',
            quantity: 1,
          }],
        }}
      />
    </div>
  );
}

const PRODUCT_QUERY = `#graphql
  query Product($handle: String!, $selectedOptions: [SelectedOptionInput!]!) {
    product(handle: $handle) {
      id
      title
      handle
      vendor
      descriptionHtml
      featuredImage {
        url
        altText
        width
        height
      }
      selectedOrFirstAvailableVariant(selectedOptions: $selectedOptions) {
        id
        title
        availableForSale
        price {
          amount
          currencyCode
        }
      }
      variants(first: 100) {
        nodes {
          id
          title
          availableForSale
          selectedOptions {
            name
            value
          }
          price {
            amount
            currencyCode
          }
        }
      }
    }
  }
` as const;
"#;

/// Render the TSX source for a route module.
pub fn render_route(name: &str, route_type: RouteType, features: RouteFeatures) -> String {
    match route_type {
        RouteType::Page => render_page(name, features),
        RouteType::Resource => render_resource(name, features),
        RouteType::Collection => COLLECTION.replace("__NAME__", name),
        RouteType::Product => PRODUCT.replace("__NAME__", name),
        RouteType::Account => render_account(name, features),
        RouteType::Api => render_api(name, features),
    }
}

fn types_import(name: &str) -> String {
    format!("import type {{Route}} from './+types/{name}';")
}

/// Join top-level blocks with a blank line between them.
fn assemble(blocks: Vec<String>) -> String {
    let mut out = blocks.join("\n\n");
    out.push('\n');
    out
}

fn render_page(name: &str, features: RouteFeatures) -> String {
    let title = route_title(name);
    let mut imports = Vec::new();
    if features.loader {
        imports.push("import {useLoaderData} from 'react-router';".to_string());
    }
    imports.push(types_import(name));
    if features.loader && features.graphql {
        imports.push("import {getPaginationVariables} from '@shopify/hydrogen';".to_string());
    }

    let mut blocks = vec![imports.join("\n")];

    if features.meta {
        blocks.push(format!(
            "export const meta: Route.MetaFunction = () => {{\n  return [{{title: '{title}'}}];\n}};"
        ));
    }

    if features.loader {
        blocks.push(if features.graphql {
            [
                "export async function loader({context, request}: Route.LoaderArgs) {",
                "  const {storefront} = context;",
                "  const paginationVariables = getPaginationVariables(request, {pageBy: 8});",
                "",
                "  const data = await storefront.query(PAGE_QUERY, {",
                "    variables: {...paginationVariables},",
                "  });",
                "",
                "  return {data};",
                "}",
            ]
            .join("\n")
        } else {
            [
                "export async function loader({context}: Route.LoaderArgs) {",
                "  // Add your loader logic here",
                "  return {};",
                "}",
            ]
            .join("\n")
        });
    }

    if features.action {
        blocks.push(
            [
                "export async function action({context, request}: Route.ActionArgs) {",
                "  const formData = await request.formData();",
                "",
                "  // Add your action logic here",
                "  return {success: true};",
                "}",
            ]
            .join("\n"),
        );
    }

    let data_line = if features.loader {
        "  const data = useLoaderData<typeof loader>();\n\n"
    } else {
        ""
    };
    blocks.push(format!(
        "export default function {title}() {{\n{data_line}  return (\n    <div className=\"container mx-auto px-4 py-8\">\n      <h1 className=\"text-2xl font-bold\">{title}</h1>\n      {{/* Add your page content here */}}\n    </div>\n  );\n}}"
    ));

    if features.graphql {
        blocks.push(
            [
                "const PAGE_QUERY = `#graphql",
                "  query PageQuery($first: Int, $last: Int, $after: String, $before: String) {",
                "    # Add your GraphQL query here",
                "    shop {",
                "      name",
                "    }",
                "  }",
                "` as const;",
            ]
            .join("\n"),
        );
    }

    assemble(blocks)
}

fn render_resource(name: &str, features: RouteFeatures) -> String {
    let mut blocks = vec![types_import(name)];

    if features.loader {
        blocks.push(
            [
                "export async function loader({context, params, request}: Route.LoaderArgs) {",
                "  // Resource route loader - return data directly",
                "  return Response.json({",
                "    // Return your resource data here",
                "  });",
                "}",
            ]
            .join("\n"),
        );
    }

    if features.action {
        blocks.push(
            [
                "export async function action({context, request}: Route.ActionArgs) {",
                "  const formData = await request.formData();",
                "",
                "  // Process the action",
                "  return Response.json({success: true});",
                "}",
            ]
            .join("\n"),
        );
    }

    assemble(blocks)
}

fn render_account(name: &str, features: RouteFeatures) -> String {
    let mut imports = Vec::new();
    if features.loader {
        imports.push("import {useLoaderData} from 'react-router';".to_string());
    }
    imports.push(types_import(name));

    let mut blocks = vec![
        imports.join("\n"),
        "export const meta: Route.MetaFunction = () => {\n  return [{title: 'Account'}];\n};"
            .to_string(),
    ];

    if features.loader {
        blocks.push(
            [
                "export async function loader({context}: Route.LoaderArgs) {",
                "  const {customerAccount} = context;",
                "",
                "  // Redirects to login when the customer is not authenticated",
                "  await customerAccount.handleAuthStatus();",
                "",
                "  const {data} = await customerAccount.query(CUSTOMER_QUERY);",
                "",
                "  return {customer: data.customer};",
                "}",
            ]
            .join("\n"),
        );
    }

    if features.action {
        blocks.push(
            [
                "export async function action({context, request}: Route.ActionArgs) {",
                "  const {customerAccount} = context;",
                "  const formData = await request.formData();",
                "",
                "  // Handle form submission",
                "  return {success: true};",
                "}",
            ]
            .join("\n"),
        );
    }

    let body = if features.loader {
        [
            "export default function Account() {",
            "  const {customer} = useLoaderData<typeof loader>();",
            "",
            "  return (",
            "    <div className=\"container mx-auto px-4 py-8\">",
            "      <h1 className=\"text-2xl font-bold\">Account</h1>",
            "      <div className=\"mt-6\">",
            "        <p>Welcome, {customer?.firstName || 'Customer'}</p>",
            "      </div>",
            "    </div>",
            "  );",
            "}",
        ]
        .join("\n")
    } else {
        [
            "export default function Account() {",
            "  return (",
            "    <div className=\"container mx-auto px-4 py-8\">",
            "      <h1 className=\"text-2xl font-bold\">Account</h1>",
            "    </div>",
            "  );",
            "}",
        ]
        .join("\n")
    };
    blocks.push(body);

    if features.loader {
        blocks.push(
            [
                "const CUSTOMER_QUERY = `#graphql",
                "  query CustomerQuery {",
                "    customer {",
                "      id",
                "      firstName",
                "      lastName",
                "      email",
                "    }",
                "  }",
                "` as const;",
            ]
            .join("\n"),
        );
    }

    assemble(blocks)
}

fn render_api(name: &str, features: RouteFeatures) -> String {
    let mut blocks = vec![types_import(name)];

    if features.loader {
        blocks.push(
            [
                "export async function loader({context, request}: Route.LoaderArgs) {",
                "  // Handle GET requests",
                "  return Response.json({",
                "    message: 'API endpoint',",
                "    timestamp: new Date().toISOString(),",
                "  });",
                "}",
            ]
            .join("\n"),
        );
    }

    if features.action {
        blocks.push(
            [
                "export async function action({context, request}: Route.ActionArgs) {",
                "  const method = request.method;",
                "",
                "  if (method === 'POST') {",
                "    const body = await request.json();",
                "    return Response.json({success: true, data: body});",
                "  }",
                "",
                "  if (method === 'PUT') {",
                "    const body = await request.json();",
                "    return Response.json({success: true, data: body});",
                "  }",
                "",
                "  if (method === 'DELETE') {",
                "    return Response.json({success: true});",
                "  }",
                "",
                "  return Response.json({error: 'Method not allowed'}, {status: 405});",
                "}",
            ]
            .join("\n"),
        );
    }

    assemble(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(loader: bool, action: bool, meta: bool, graphql: bool) -> RouteFeatures {
        RouteFeatures {
            loader,
            action,
            meta,
            graphql,
        }
    }

    #[test]
    fn test_page_defaults() {
        let code = render_route("about", RouteType::Page, RouteFeatures::default());
        assert!(code.starts_with("import {useLoaderData} from 'react-router';\nimport type {Route} from './+types/about';\n\n"));
        assert!(code.contains("return [{title: 'About'}];"));
        assert!(code.contains("export async function loader({context}: Route.LoaderArgs)"));
        assert!(!code.contains("export async function action"));
        assert!(code.contains("export default function About() {"));
        assert!(!code.contains("PAGE_QUERY"));
        assert!(code.ends_with("}\n"));
    }

    #[test]
    fn test_page_with_graphql_and_action() {
        let code = render_route("blog._index", RouteType::Page, features(true, true, true, true));
        assert!(code.contains("import {getPaginationVariables} from '@shopify/hydrogen';"));
        assert!(code.contains("storefront.query(PAGE_QUERY"));
        assert!(code.contains("const PAGE_QUERY = `#graphql"));
        assert!(code.contains("export async function action"));
        assert!(code.contains("export default function Index()"));
    }

    #[test]
    fn test_page_without_loader_skips_loader_data() {
        let code = render_route("faq", RouteType::Page, features(false, false, false, false));
        assert!(!code.contains("useLoaderData"));
        assert!(!code.contains("loader"));
        assert!(!code.contains("meta"));
        assert!(code.starts_with("import type {Route} from './+types/faq';\n\nexport default function Faq() {\n  return ("));
    }

    #[test]
    fn test_api_route_handles_methods() {
        let code = render_route("api.webhook", RouteType::Api, features(true, true, true, false));
        assert!(code.contains("import type {Route} from './+types/api.webhook';"));
        assert!(code.contains("method === 'PUT'"));
        assert!(code.contains("method === 'DELETE'"));
        assert!(code.contains("{status: 405}"));
    }

    #[test]
    fn test_resource_route_only_action() {
        let code = render_route("feed", RouteType::Resource, features(false, true, true, false));
        assert!(!code.contains("loader"));
        assert!(code.contains("export async function action"));
    }

    #[test]
    fn test_account_without_loader_has_no_query() {
        let code = render_route("account.profile", RouteType::Account, features(false, false, true, false));
        assert!(!code.contains("CUSTOMER_QUERY"));
        assert!(!code.contains("useLoaderData"));
        assert!(code.contains("return [{title: 'Account'}];"));
    }

    #[test]
    fn test_collection_and_product_fill_types_path() {
        let code = render_route("collections.$handle", RouteType::Collection, RouteFeatures::default());
        assert!(code.contains("from './+types/collections.$handle';"));
        assert!(code.contains("const COLLECTION_QUERY"));

        let code = render_route("products.$handle", RouteType::Product, RouteFeatures::default());
        assert!(code.contains("from './+types/products.$handle';"));
        assert!(code.contains("useOptimisticVariant"));
        assert!(!code.contains("__NAME__"));
    }
}
