//! End-to-end PDP tests against a mock storefront API.

use ecommerce_pdp::actions::{RequestCart, RequestWishlist};
use ecommerce_pdp::config::PdpConfig;
use ecommerce_pdp::loader::{HttpProductSource, ProductLoader};
use ecommerce_pdp::page::{Notice, PageState, ProductView};
use ecommerce_pdp::route::parse_query;
use ecommerce_pdp::{http_loader, render_route, request_logger, submit_route};
use serde_json::{json, Value};
use turbo_commerce::cart::{prepare_add_to_cart, Cart, Wishlist};
use turbo_commerce::selection::Selection;
use turbo_commerce::{ActionError, Currency, ProductSlug, SelectionError};
use turbo_observability::{LogCapture, LogSink, RequestId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOOKUP: &str = "/api/products/productslug";

fn config_for(server: &MockServer) -> PdpConfig {
    PdpConfig {
        api_base: format!("{}/api", server.uri()),
        ..PdpConfig::default()
    }
}

fn loader_for(config: &PdpConfig) -> (ProductLoader<HttpProductSource>, LogCapture) {
    let (sink, capture) = LogSink::memory();
    let logger = request_logger(config, RequestId::from_string("req-test"), "/allproducts")
        .unwrap()
        .with_sink(sink);
    (http_loader(config, logger), capture)
}

async fn serve(server: &MockServer, slug: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{LOOKUP}/{slug}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn two_color_shirt() -> Value {
    json!({
        "data": {
            "_id": "65f1c2aa9b03d4e5f6a7b8c9",
            "title": "Linen Shirt",
            "price": 49.0,
            "originalPrice": 61.25,
            "discount": 20,
            "variantType": "MultiVarient",
            "variants": [
                {"size": "S", "color": "Red", "stock": 3},
                {"size": "S", "color": "Blue", "stock": 0}
            ]
        }
    })
}

#[tokio::test]
async fn test_multi_variant_defaults_to_first_options() {
    let server = MockServer::start().await;
    serve(&server, "linen-shirt", two_color_shirt()).await;
    let (loader, capture) = loader_for(&config_for(&server));

    let rendered = render_route(&loader, "/allproducts/linen-shirt").await;

    assert_eq!(rendered.status, 200);
    let html = rendered.html;
    assert!(html.contains("Linen Shirt"));
    assert!(html.contains("In Stock (3 available)"));
    assert!(html.contains("3 pieces available"));
    assert!(html.contains("-20% OFF"));
    assert!(html.contains(r#"value="S" class="option option--selected""#));
    assert!(html.contains(r#"value="Red" class="option option--selected""#));
    assert!(html.contains(r#"value="Blue" class="option option--disabled" disabled"#));
    assert!(html.contains(r#"data-request-id="req-test""#));
    assert!(html.contains("Variant Type"));

    let done = capture.find("PDP request complete");
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].fields["status"], json!(200));
    assert_eq!(capture.find("Product loaded").len(), 1);
}

#[tokio::test]
async fn test_out_of_stock_variant_is_rejected() {
    let server = MockServer::start().await;
    serve(&server, "linen-shirt", two_color_shirt()).await;
    let (loader, _) = loader_for(&config_for(&server));

    let rendered = render_route(&loader, "/allproducts/linen-shirt?color=Blue").await;
    assert_eq!(rendered.status, 200);
    assert!(rendered.html.contains("Out of Stock"));
    assert!(rendered.html.contains("0 pieces available"));
    assert!(rendered
        .html
        .contains(r#"class="add-to-cart-button" disabled>"#));

    let (mut view, ticket) = ProductView::start(ProductSlug::new("linen-shirt"));
    let product = loader.load(ticket.slug()).await;
    assert!(view.complete(&ticket, product));

    let page = view.page_mut().unwrap();
    page.apply_query(&parse_query("?color=Blue"));
    assert_eq!(page.available_stock(), 0);

    let mut cart = Cart::new(Currency::USD);
    let result = page.add_to_cart(&mut cart);
    assert!(matches!(
        result,
        Err(ActionError::Rejected(
            SelectionError::InsufficientVariantStock { available: 0 }
        ))
    ));
    assert!(cart.is_empty());
    assert!(page.notice().is_some_and(Notice::is_blocking));
}

#[tokio::test]
async fn test_posted_out_of_stock_color_shows_notice() {
    let server = MockServer::start().await;
    serve(&server, "linen-shirt", two_color_shirt()).await;
    let (loader, capture) = loader_for(&config_for(&server));

    let mut cart = Cart::new(Currency::USD);
    let mut wishlist = Wishlist::new();
    let rendered = submit_route(
        &loader,
        "/allproducts/linen-shirt",
        "size=S&color=Blue&qty=1&action=add-to-cart",
        &mut cart,
        &mut wishlist,
    )
    .await;

    assert_eq!(rendered.status, 422);
    assert!(rendered
        .html
        .contains(r#"<div class="notice notice--error" role="alert">Only 0 items available for this variant</div>"#));
    assert!(cart.is_empty());

    let rejected = capture.find("Page action rejected");
    assert_eq!(rejected.len(), 1);
    assert_eq!(
        rejected[0].field_str("reason"),
        Some("insufficient_variant_stock")
    );
    let done = capture.find("PDP request complete");
    assert_eq!(done[0].fields["status"], json!(422));
}

#[tokio::test]
async fn test_posted_actions_reach_collaborators() {
    let server = MockServer::start().await;
    serve(&server, "linen-shirt", two_color_shirt()).await;
    let (loader, capture) = loader_for(&config_for(&server));
    let logger = loader.logger();

    let mut cart = RequestCart::new(Currency::USD, logger);
    let mut wishlist = RequestWishlist::new(logger);

    // Query selection applies first; the form's quantity wins.
    let rendered = submit_route(
        &loader,
        "/allproducts/linen-shirt?qty=3",
        "qty=2&action=add-to-cart",
        &mut cart,
        &mut wishlist,
    )
    .await;
    assert_eq!(rendered.status, 200);
    assert!(rendered.html.contains("Added 2 items to cart"));
    assert_eq!(cart.cart().item_count(), 2);
    let accepted = capture.find("Cart request accepted");
    assert_eq!(accepted.len(), 1);
    assert_eq!(accepted[0].field_str("variant"), Some("S / Red"));

    let rendered = submit_route(
        &loader,
        "/allproducts/linen-shirt",
        "action=wishlist",
        &mut cart,
        &mut wishlist,
    )
    .await;
    assert_eq!(rendered.status, 200);
    assert!(rendered.html.contains("Added to wishlist"));
    assert_eq!(wishlist.wishlist().len(), 1);

    let rendered = submit_route(
        &loader,
        "/allproducts/linen-shirt",
        "action=checkout",
        &mut cart,
        &mut wishlist,
    )
    .await;
    assert_eq!(rendered.status, 400);
    assert_eq!(capture.find("Unknown page action").len(), 1);
    assert_eq!(cart.cart().item_count(), 2);
}

#[tokio::test]
async fn test_posted_action_for_missing_product_is_not_found() {
    let server = MockServer::start().await;
    serve(&server, "ghost", json!({"data": null})).await;
    let (loader, _) = loader_for(&config_for(&server));

    let mut cart = Cart::new(Currency::USD);
    let mut wishlist = Wishlist::new();
    let rendered = submit_route(
        &loader,
        "/allproducts/ghost",
        "action=wishlist",
        &mut cart,
        &mut wishlist,
    )
    .await;

    assert_eq!(rendered.status, 404);
    assert!(rendered.html.contains("Product not found"));
    assert!(wishlist.is_empty());
}

#[tokio::test]
async fn test_simple_product_stock_limit() {
    let server = MockServer::start().await;
    serve(
        &server,
        "canvas-tote",
        json!({"data": {"_id": "abc123456", "name": "Canvas Tote", "variantType": "Simple", "stock": 5}}),
    )
    .await;
    let (loader, _) = loader_for(&config_for(&server));

    let (mut view, ticket) = ProductView::start(ProductSlug::new("canvas-tote"));
    let product = loader.load(ticket.slug()).await;
    view.complete(&ticket, product);
    let page = view.page_mut().unwrap();

    // No pickers for a simple product.
    let rendered = render_route(&loader, "/allproducts/canvas-tote?qty=9").await;
    assert!(!rendered.html.contains(r#"data-option="size""#));
    assert!(rendered.html.contains("In Stock (5)"));

    page.apply_query(&parse_query("?qty=5"));
    assert_eq!(page.selection().quantity, 5);
    let mut cart = Cart::new(Currency::USD);
    let request = page.add_to_cart(&mut cart).unwrap();
    assert_eq!(request.quantity(), 5);
    assert_eq!(cart.item_count(), 5);

    let over = Selection {
        quantity: 6,
        ..Selection::default()
    };
    assert_eq!(
        prepare_add_to_cart(page.product(), &over),
        Err(SelectionError::InsufficientStock { available: 5 })
    );
    assert_eq!(
        SelectionError::InsufficientStock { available: 5 }.to_string(),
        "Only 5 items available"
    );
}

#[tokio::test]
async fn test_server_error_renders_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{LOOKUP}/broken")))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    let (loader, capture) = loader_for(&config_for(&server));

    let rendered = render_route(&loader, "/allproducts/broken").await;

    assert_eq!(rendered.status, 404);
    assert!(rendered.html.contains("Product not found"));
    let errors = capture.find("Product load error");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field_str("slug"), Some("broken"));
    assert_eq!(errors[0].fields["status"], json!(500));
}

#[tokio::test]
async fn test_missing_record_renders_not_found() {
    let server = MockServer::start().await;
    serve(&server, "ghost", json!({"data": null})).await;
    let (loader, capture) = loader_for(&config_for(&server));

    let rendered = render_route(&loader, "/allproducts/ghost").await;

    assert_eq!(rendered.status, 404);
    assert!(rendered.html.contains("Product not found"));
    assert_eq!(capture.find("Product not found").len(), 1);
}

#[tokio::test]
async fn test_slow_api_times_out_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{LOOKUP}/slow")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(two_color_shirt())
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    let config = PdpConfig {
        request_timeout_ms: 100,
        ..config_for(&server)
    };
    let (loader, _) = loader_for(&config);

    let rendered = render_route(&loader, "/allproducts/slow").await;
    assert_eq!(rendered.status, 404);
}

#[tokio::test]
async fn test_missing_images_use_placeholder() {
    let server = MockServer::start().await;
    serve(
        &server,
        "plain-cap",
        json!({"data": {"_id": "cap000001", "title": "Plain Cap", "stock": 2}}),
    )
    .await;
    let (loader, _) = loader_for(&config_for(&server));

    let rendered = render_route(&loader, "/product/plain-cap").await;

    assert_eq!(rendered.status, 200);
    assert!(rendered.html.contains(r#"<img src="/placeholder.jpg""#));
    assert!(!rendered.html.contains("thumbnail-strip"));
    assert!(!rendered.html.contains("% OFF"));
}

#[tokio::test]
async fn test_non_product_path_skips_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (loader, capture) = loader_for(&config_for(&server));

    for path in ["/cart", "/allproducts/", "/allproducts/a/b"] {
        let rendered = render_route(&loader, path).await;
        assert_eq!(rendered.status, 404);
        assert!(rendered.html.contains("Product not found"));
    }
    assert_eq!(capture.find("No product slug in path").len(), 3);
}

#[tokio::test]
async fn test_slug_is_encoded_in_lookup() {
    let server = MockServer::start().await;
    serve(
        &server,
        "caf%C3%A9-mug",
        json!({"data": {"_id": "mug000001", "title": "Café Mug", "stock": 1}}),
    )
    .await;
    let (loader, _) = loader_for(&config_for(&server));

    let rendered = render_route(&loader, "/allproducts/caf%C3%A9-mug").await;
    assert_eq!(rendered.status, 200);
    assert!(rendered.html.contains("Café Mug"));
}

#[tokio::test]
async fn test_stale_load_is_discarded() {
    let server = MockServer::start().await;
    serve(&server, "linen-shirt", two_color_shirt()).await;
    serve(
        &server,
        "canvas-tote",
        json!({"data": {"_id": "abc123456", "name": "Canvas Tote", "stock": 5}}),
    )
    .await;
    let (loader, _) = loader_for(&config_for(&server));

    let (mut view, first) = ProductView::start(ProductSlug::new("linen-shirt"));
    let second = view.navigate(ProductSlug::new("canvas-tote"));

    let tote = loader.load(second.slug()).await;
    assert!(view.complete(&second, tote));

    let shirt = loader.load(first.slug()).await;
    assert!(shirt.is_some());
    assert!(!view.complete(&first, shirt));

    match view.state() {
        PageState::Ready(page) => assert_eq!(page.product().title, "Canvas Tote"),
        other => panic!("expected ready page, got {other:?}"),
    }
}
