use super::{prop_members, prop_names, strip_class_names};
use crate::types::{ComponentType, PropDef};

const BASIC: &str = r#"__INTERFACE__export function __NAME__(__PARAMS__) {
  return (
    <div className="p-4">
      <h2>__NAME__ Component</h2>
    </div>
  );
}
"#;

const PRODUCT: &str = r#"import {Link} from 'react-router';
import {Image, Money} from '@shopify/hydrogen';
import type {MoneyV2} from '@shopify/hydrogen/storefront-api-types';

export interface __NAME__Props {
  product: {
    id: string;
    title: string;
    handle: string;
    featuredImage?: {
      url: string;
      altText?: string | null;
      width?: number;
      height?: number;
    } | null;
    priceRange: {
      minVariantPrice: MoneyV2;
    };
  };
__EXTRA_MEMBERS__}

export function __NAME__({product__EXTRA_ARGS__}: __NAME__Props) {
  const image = product.featuredImage;

  return (
    <Link
      to={`/products/${product.handle}`}
      className="group block"
      prefetch="intent"
    >
      <div className="relative aspect-square overflow-hidden rounded-lg bg-secondary-100">
        {image ? (
          <Image
            alt={image.altText || product.title}
            data={image}
            className="h-full w-full object-cover transition-transform group-hover:scale-105"
          />
        ) : (
          <div className="flex h-full w-full items-center justify-center">
            <span className="text-secondary-400">No image</span>
          </div>
        )}
      </div>
      <div className="mt-3 space-y-1">
        <h3 className="text-sm font-medium text-secondary-900">{product.title}</h3>
        <Money
          data={product.priceRange.minVariantPrice}
          className="text-sm text-secondary-500"
        />
      </div>
    </Link>
  );
}
"#;

const COLLECTION: &str = r#"import {Link} from 'react-router';
import {Image} from '@shopify/hydrogen';

export interface __NAME__Props {
  collection: {
    id: string;
    title: string;
    handle: string;
    description?: string;
    image?: {
      url: string;
      altText?: string | null;
      width?: number;
      height?: number;
    } | null;
  };
__EXTRA_MEMBERS__}

export function __NAME__({collection__EXTRA_ARGS__}: __NAME__Props) {
  return (
    <Link
      to={`/collections/${collection.handle}`}
      className="group relative block overflow-hidden rounded-lg"
      prefetch="intent"
    >
      <div className="aspect-video bg-secondary-100">
        {collection.image ? (
          <Image
            alt={collection.image.altText || collection.title}
            data={collection.image}
            className="h-full w-full object-cover transition-transform group-hover:scale-105"
          />
        ) : (
          <div className="flex h-full w-full items-center justify-center bg-secondary-200">
            <span className="text-secondary-500">{collection.title}</span>
          </div>
        )}
      </div>
      <div className="absolute inset-0 flex items-end bg-gradient-to-t from-black/60 to-transparent p-4">
        <div>
          <h3 className="text-lg font-semibold text-white">{collection.title}</h3>
          {collection.description && (
            <p className="mt-1 text-sm text-white/80 line-clamp-2">
              {collection.description}
            </p>
          )}
        </div>
      </div>
    </Link>
  );
}
"#;

const CART: &str = r#"import {CartForm, Money} from '@shopify/hydrogen';
import type {CartLineUpdateInput} from '@shopify/hydrogen/storefront-api-types';

export interface __NAME__Props {
  line: {
    id: string;
    quantity: number;
    merchandise: {
      id: string;
      title: string;
      product: {
        title: string;
        handle: string;
      };
      image?: {
        url: string;
        altText?: string | null;
      } | null;
    };
    cost: {
      totalAmount: {
        amount: string;
        currencyCode: string;
      };
    };
  };
__EXTRA_MEMBERS__}

export function __NAME__({line__EXTRA_ARGS__}: __NAME__Props) {
  const {id, quantity, merchandise, cost} = line;

  return (
    <div className="flex gap-4 py-4 border-b border-secondary-200">
      {merchandise.image && (
        <div className="h-20 w-20 flex-shrink-0 overflow-hidden rounded-md bg-secondary-100">
          <img
            src={merchandise.image.url}
            alt={merchandise.image.altText || merchandise.title}
            className="h-full w-full object-cover"
          />
        </div>
      )}
      <div className="flex flex-1 flex-col">
        <h3 className="text-sm font-medium text-secondary-900">
          {merchandise.product.title}
        </h3>
        <p className="text-sm text-secondary-500">{merchandise.title}</p>
        <div className="mt-auto flex items-center justify-between">
          <div className="flex items-center gap-2">
            <CartForm
              route="/cart"
              action={CartForm.ACTIONS.LinesUpdate}
              inputs={{
                lines: [{id, quantity: Math.max(0, quantity - 1)}] as CartLineUpdateInput[],
              }}
            >
              <button
                type="submit"
                className="flex h-8 w-8 items-center justify-center rounded border border-secondary-300 text-secondary-600 hover:bg-secondary-50"
              >
                -
              </button>
            </CartForm>
            <span className="w-8 text-center text-sm">{quantity}</span>
            <CartForm
              route="/cart"
              action={CartForm.ACTIONS.LinesUpdate}
              inputs={{
                lines: [{id, quantity: quantity + 1}] as CartLineUpdateInput[],
              }}
            >
              <button
                type="submit"
                className="flex h-8 w-8 items-center justify-center rounded border border-secondary-300 text-secondary-600 hover:bg-secondary-50"
              >
                +
              </button>
            </CartForm>
          </div>
          <Money
            data={cost.totalAmount}
            className="text-sm font-medium text-secondary-900"
          />
        </div>
      </div>
    </div>
  );
}
"#;

const FORM: &str = r#"import {Form, useNavigation} from 'react-router';

export interface __NAME__Props {
  action?: string;
  method?: 'get' | 'post';
__EXTRA_MEMBERS__}

export function __NAME__({action, method = 'post'__EXTRA_ARGS__}: __NAME__Props) {
  const navigation = useNavigation();
  const isSubmitting = navigation.state === 'submitting';

  return (
    <Form
      action={action}
      method={method}
      className="space-y-4"
    >
      <div>
        <label
          htmlFor="email"
          className="block text-sm font-medium text-secondary-700"
        >
          Email
        </label>
        <input
          type="email"
          id="email"
          name="email"
          required
          className="mt-1 block w-full rounded-md border border-secondary-300 px-3 py-2 shadow-sm focus:border-primary-500 focus:outline-none focus:ring-1 focus:ring-primary-500"
        />
      </div>
      <button
        type="submit"
        disabled={isSubmitting}
        className="w-full rounded-md bg-primary-600 px-4 py-2 text-sm font-medium text-white hover:bg-primary-700 focus:outline-none focus:ring-2 focus:ring-primary-500 focus:ring-offset-2 disabled:opacity-50"
      >
        {isSubmitting ? 'Submitting...' : 'Submit'}
      </button>
    </Form>
  );
}
"#;

const LAYOUT: &str = r#"import type {ReactNode} from 'react';

export interface __NAME__Props {
  children: ReactNode;
  header?: ReactNode;
  footer?: ReactNode;
__EXTRA_MEMBERS__}

export function __NAME__({children, header, footer__EXTRA_ARGS__}: __NAME__Props) {
  return (
    <div className="flex min-h-screen flex-col">
      {header && (
        <header className="sticky top-0 z-40 border-b border-secondary-200 bg-white">
          {header}
        </header>
      )}
      <main className="flex-1">{children}</main>
      {footer && (
        <footer className="border-t border-secondary-200 bg-secondary-50">
          {footer}
        </footer>
      )}
    </div>
  );
}
"#;

const TEST_FILE: &str = r#"import {render} from '@testing-library/react';
import {describe, it, expect} from 'vitest';
import {__NAME__} from '../__NAME__';

describe('__NAME__', () => {
  it('renders without crashing', () => {
    const {container} = render(<__NAME__ />);
    expect(container).toBeTruthy();
  });
});
"#;

/// Render the TSX source for a component.
pub fn render_component(
    name: &str,
    component_type: ComponentType,
    props: &[PropDef],
    with_styles: bool,
) -> String {
    let source = match component_type {
        ComponentType::Basic => render_basic(name, props),
        ComponentType::Product => render_typed(PRODUCT, name, props),
        ComponentType::Collection => render_typed(COLLECTION, name, props),
        ComponentType::Cart => render_typed(CART, name, props),
        ComponentType::Form => render_typed(FORM, name, props),
        ComponentType::Layout => render_typed(LAYOUT, name, props),
    };

    if with_styles {
        source
    } else {
        strip_class_names(&source)
    }
}

/// Smoke test placed in `__tests__/` next to the component.
pub fn component_test_file(name: &str) -> String {
    TEST_FILE.replace("__NAME__", name)
}

fn render_basic(name: &str, props: &[PropDef]) -> String {
    let (interface, params) = if props.is_empty() {
        (String::new(), String::new())
    } else {
        (
            format!("export interface {name}Props {{\n{}}}\n\n", prop_members(props)),
            format!("{{{}}}: {name}Props", prop_names(props)),
        )
    };

    BASIC
        .replace("__INTERFACE__", &interface)
        .replace("__PARAMS__", &params)
        .replace("__NAME__", name)
}

/// Typed templates carry their own props; custom props are appended.
fn render_typed(template: &str, name: &str, props: &[PropDef]) -> String {
    let extra_args = if props.is_empty() {
        String::new()
    } else {
        format!(", {}", prop_names(props))
    };

    template
        .replace("__EXTRA_MEMBERS__", &prop_members(props))
        .replace("__EXTRA_ARGS__", &extra_args)
        .replace("__NAME__", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_without_props_has_no_interface() {
        let code = render_component("Hero", ComponentType::Basic, &[], true);
        assert!(code.starts_with("export function Hero() {"));
        assert!(!code.contains("interface"));
        assert!(code.contains(r#"<div className="p-4">"#));
        assert!(code.contains("<h2>Hero Component</h2>"));
    }

    #[test]
    fn test_basic_with_props() {
        let props = vec![PropDef::new("title", "string")];
        let code = render_component("Banner", ComponentType::Basic, &props, true);
        assert!(code.starts_with("export interface BannerProps {\n  title: string;\n}\n\n"));
        assert!(code.contains("export function Banner({title}: BannerProps) {"));
    }

    #[test]
    fn test_product_appends_custom_props() {
        let mut badge = PropDef::new("badge", "string");
        badge.required = false;
        let code = render_component("ProductTile", ComponentType::Product, &[badge], true);
        assert!(code.contains("  };\n  badge?: string;\n}"));
        assert!(code.contains("export function ProductTile({product, badge}: ProductTileProps)"));
        assert!(code.contains("to={`/products/${product.handle}`}"));
    }

    #[test]
    fn test_without_styles_removes_every_class_name() {
        for component_type in ComponentType::ALL {
            let code = render_component("Thing", component_type, &[], false);
            assert!(
                !code.contains("className"),
                "{component_type} still has className"
            );
        }
    }

    #[test]
    fn test_typed_templates_close_interface_without_props() {
        let code = render_component("SiteLayout", ComponentType::Layout, &[], true);
        assert!(code.contains("  footer?: ReactNode;\n}\n"));
        assert!(code.contains("({children, header, footer}: SiteLayoutProps)"));
        assert!(!code.contains("__"));
    }

    #[test]
    fn test_test_file_imports_from_parent_dir() {
        let code = component_test_file("CartDrawer");
        assert!(code.contains("import {CartDrawer} from '../CartDrawer';"));
        assert!(code.contains("describe('CartDrawer'"));
    }
}
