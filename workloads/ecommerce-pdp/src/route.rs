//! Path and query parsing for PDP routes.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;
use turbo_commerce::ProductSlug;

/// Path prefixes that serve the product page.
pub const ROUTE_PREFIXES: [&str; 2] = ["/allproducts/", "/product/"];

/// Decoded query string parameters. Later duplicates win.
pub type QueryParams = HashMap<String, String>;

/// Extract the product slug from a path like `/allproducts/linen-shirt?size=M`.
pub fn extract_slug(path_with_query: &str) -> Option<ProductSlug> {
    let path = path_with_query.split(['?', '#']).next().unwrap_or_default();
    let rest = ROUTE_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))?;
    let raw = rest.trim_end_matches('/');
    if raw.is_empty() || raw.contains('/') {
        return None;
    }
    let slug = percent_decode_str(raw).decode_utf8().ok()?;
    Some(ProductSlug::new(slug.into_owned()))
}

/// Parse the query part of `path_with_query`.
pub fn parse_query(path_with_query: &str) -> QueryParams {
    let Some((_, query)) = path_with_query.split_once('?') else {
        return QueryParams::new();
    };
    parse_form(query.split('#').next().unwrap_or_default())
}

/// Parse an `application/x-www-form-urlencoded` body.
pub fn parse_form(body: &str) -> QueryParams {
    body.trim_end_matches(['\r', '\n'])
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode_component(key)?, decode_component(value)?))
        })
        .collect()
}

fn decode_component(value: &str) -> Option<String> {
    let value = value.replace('+', " ");
    percent_decode_str(&value)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}
