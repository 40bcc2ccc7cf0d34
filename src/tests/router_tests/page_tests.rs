use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_context};

#[test]
fn home_page_stays_interactive_when_the_catalog_is_unreachable() {
    let (ctx, _dir) = test_context();

    let resp = handle(get("/"), &ctx).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Apetments"));
    assert!(body.contains("Could not reach the listing catalog"));
    assert!(body.contains("Showing 0 featured"));
}

#[test]
fn listings_page_degrades_to_zero_results_on_load_failure() {
    let (ctx, _dir) = test_context();

    let resp = handle(get("/listings?location=austin&dogs=on"), &ctx)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Could not reach the listing catalog"));
    assert!(body.contains("Showing 0 results"));

    // The form keeps the submitted criteria.
    assert!(body.contains(r#"value="austin""#));
    assert!(body.contains("checked"));
}

#[test]
fn details_page_requires_a_numeric_id() {
    let (ctx, _dir) = test_context();

    for uri in ["/details", "/details?id=abc"] {
        let resp = handle(get(uri), &ctx).expect("Failed to handle request");
        assert_eq!(resp.status(), 200);

        let body = body_string(resp);
        assert!(body.contains("Missing or invalid listing id"));
    }
}

#[test]
fn details_page_surfaces_a_failed_load_in_page() {
    let (ctx, _dir) = test_context();

    let resp = handle(get("/details?id=3"), &ctx).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Could not reach the listing catalog"));
}

#[test]
fn login_page_loads_successfully() {
    let (ctx, _dir) = test_context();

    let resp = handle(get("/login"), &ctx).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Login / Register"));
    assert!(body.contains("form"));
}

#[test]
fn stylesheet_is_served() {
    let (ctx, _dir) = test_context();

    let resp = handle(get("/static/main.css"), &ctx).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "text/css"
    );
    assert!(body_string(resp).contains(".card"));
}

#[test]
fn unknown_routes_are_not_found() {
    let (ctx, _dir) = test_context();

    let result = handle(get("/nope"), &ctx);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
