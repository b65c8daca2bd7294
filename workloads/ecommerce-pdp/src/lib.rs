//! E-commerce Product Detail Page workload.
//!
//! Serves `/allproducts/{slug}` (and `/product/{slug}`):
//! - `GET` loads the product by slug from the storefront API, resolves
//!   variants and stock for the shopper's selection, and renders HTML
//! - `POST` validates an add-to-cart or wishlist submission against the
//!   same selection and renders the page with the outcome
//!
//! Everything except the Spin entry point builds natively, so the whole
//! request path can be exercised from tests.

pub mod actions;
pub mod config;
pub mod loader;
pub mod page;
pub mod route;
pub mod sections;

use std::time::Instant;

use turbo_commerce::cart::{CartService, WishlistService};
use turbo_commerce::ActionError;
use turbo_observability::{RequestId, StructuredLogger};

use crate::actions::{PageAction, ACTION_FIELD};
use crate::config::{ConfigError, PdpConfig};
use crate::loader::{HttpProductSource, ProductLoader, ProductSource};
use crate::page::{PageState, ProductView};
use crate::route::{extract_slug, parse_form, parse_query, QueryParams};
use crate::sections::render_document;

/// Workload name used in logs.
pub const WORKLOAD: &str = "ecommerce-pdp";

/// A rendered response body with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub status: u16,
    pub html: String,
}

/// Logger for one request, configured from `config`.
pub fn request_logger(
    config: &PdpConfig,
    request_id: RequestId,
    route: &str,
) -> Result<StructuredLogger, ConfigError> {
    Ok(StructuredLogger::new(request_id)
        .with_workload(WORKLOAD)
        .with_route(route)
        .with_min_level(config.log_level()?)
        .with_format(config.log_format()?))
}

/// Loader that talks to the configured storefront API.
pub fn http_loader(
    config: &PdpConfig,
    logger: StructuredLogger,
) -> ProductLoader<HttpProductSource> {
    ProductLoader::new(
        HttpProductSource::new(config),
        config.normalize_options(),
        logger,
    )
}

/// Load and render the page for `path_with_query`.
///
/// 200 with the product page, 404 when the path is not a product route or
/// the product could not be loaded.
pub async fn render_route<S: ProductSource>(
    loader: &ProductLoader<S>,
    path_with_query: &str,
) -> RenderedPage {
    let started = Instant::now();
    let state = load_state(loader, path_with_query, &parse_query(path_with_query)).await;
    let status = match state {
        PageState::Ready(_) => 200,
        _ => 404,
    };
    finish(loader.logger(), started, &state, status)
}

/// Handle a purchase form posted back to `path_with_query`.
///
/// Form fields override query parameters before the selection is applied.
/// The `action` field picks add-to-cart or wishlist, and the outcome is
/// rendered as the page notice: 200 when accepted, 422 when the selection
/// is rejected, 503 when a collaborator fails, 400 for an unknown action.
pub async fn submit_route<S, C, W>(
    loader: &ProductLoader<S>,
    path_with_query: &str,
    form_body: &str,
    cart: &mut C,
    wishlist: &mut W,
) -> RenderedPage
where
    S: ProductSource,
    C: CartService + ?Sized,
    W: WishlistService + ?Sized,
{
    let started = Instant::now();
    let logger = loader.logger();
    let mut params = parse_query(path_with_query);
    params.extend(parse_form(form_body));

    let mut state = load_state(loader, path_with_query, &params).await;
    let status = match &mut state {
        PageState::Ready(page) => match PageAction::from_params(&params) {
            Some(PageAction::AddToCart) => {
                action_status(logger, PageAction::AddToCart, page.add_to_cart(cart).map(|_| ()))
            }
            Some(PageAction::AddToWishlist) => action_status(
                logger,
                PageAction::AddToWishlist,
                page.add_to_wishlist(wishlist),
            ),
            None => {
                logger
                    .warn_builder("Unknown page action")
                    .field(ACTION_FIELD, params.get(ACTION_FIELD).map_or("", String::as_str))
                    .emit();
                400
            }
        },
        _ => 404,
    };
    finish(logger, started, &state, status)
}

async fn load_state<S: ProductSource>(
    loader: &ProductLoader<S>,
    path_with_query: &str,
    params: &QueryParams,
) -> PageState {
    let logger = loader.logger();
    let Some(slug) = extract_slug(path_with_query) else {
        logger
            .warn_builder("No product slug in path")
            .field("path", path_with_query)
            .emit();
        return PageState::NotFound;
    };

    logger
        .info_builder("PDP request started")
        .field("slug", slug.as_str())
        .emit();

    let (mut view, ticket) = ProductView::start(slug);
    let product = loader.load(ticket.slug()).await;
    view.complete(&ticket, product);

    if let Some(page) = view.page_mut() {
        page.apply_query(params);
    }
    view.into_state()
}

fn action_status(
    logger: &StructuredLogger,
    action: PageAction,
    result: Result<(), ActionError>,
) -> u16 {
    match result {
        Ok(()) => 200,
        Err(ActionError::Rejected(reason)) => {
            logger
                .warn_builder("Page action rejected")
                .field(ACTION_FIELD, action.as_str())
                .field("reason", reason.code())
                .emit();
            422
        }
        Err(ActionError::Collaborator(e)) => {
            logger
                .error_builder("Page action failed")
                .field(ACTION_FIELD, action.as_str())
                .field("error", e.to_string())
                .emit();
            503
        }
    }
}

fn finish(
    logger: &StructuredLogger,
    started: Instant,
    state: &PageState,
    status: u16,
) -> RenderedPage {
    let html = render_document(state, logger.request_id());

    logger
        .info_builder("PDP request complete")
        .field_i64("status", i64::from(status))
        .field_i64("bytes", html.len() as i64)
        .duration_ms("duration_ms", started.elapsed())
        .emit();

    RenderedPage { status, html }
}

#[cfg(target_arch = "wasm32")]
mod handler {
    use anyhow::Context;
    use spin_sdk::http::{IntoResponse, Method, Request, Response};
    use spin_sdk::http_component;

    use super::*;
    use crate::actions::{RequestCart, RequestWishlist};

    /// Main HTTP handler for the PDP.
    #[http_component]
    async fn handle(req: Request) -> anyhow::Result<impl IntoResponse> {
        let request_id = RequestId::generate();

        if !matches!(req.method(), Method::Get | Method::Post) {
            return Ok(Response::builder()
                .status(405)
                .header("allow", "GET, POST")
                .header("x-request-id", request_id.as_str())
                .build());
        }

        let path = req.path_and_query().unwrap_or("/").to_string();
        let config = PdpConfig::from_env().context("Invalid PDP configuration")?;
        let logger = request_logger(&config, request_id.clone(), &path)?;
        let loader = http_loader(&config, logger);

        let rendered = if matches!(req.method(), Method::Post) {
            let form = String::from_utf8_lossy(req.body());
            let mut cart = RequestCart::new(config.normalize_options().currency, loader.logger());
            let mut wishlist = RequestWishlist::new(loader.logger());
            submit_route(&loader, &path, &form, &mut cart, &mut wishlist).await
        } else {
            render_route(&loader, &path).await
        };

        Ok(Response::builder()
            .status(rendered.status)
            .header("content-type", "text/html; charset=utf-8")
            .header("x-request-id", request_id.as_str())
            .body(rendered.html)
            .build())
    }
}
