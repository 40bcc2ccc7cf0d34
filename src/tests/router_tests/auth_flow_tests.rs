use crate::router::handle;
use crate::tests::utils::{
    body_string, get, get_with_cookie, post_form, session_cookie, test_context,
};

#[test]
fn register_verify_sign_out_and_sign_back_in() {
    let (ctx, _dir) = test_context();

    // Step 1: request a verification code.
    let resp = handle(
        post_form(
            "/auth/register",
            "firstName=Test&lastName=User&phone=555-0100&email=test@example.com&password=Secret!1",
        ),
        &ctx,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("verification code"));
    assert!(body.contains("test@example.com"));

    // Step 2: the demo code completes registration and signs the user in.
    let resp = handle(
        post_form("/auth/verify", "email=test@example.com&code=123456"),
        &ctx,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 303);

    let cookie = session_cookie(&resp);
    assert!(cookie.starts_with("session="));

    // The session cookie puts the user's name in the header.
    let resp = handle(get_with_cookie("/", &cookie), &ctx).expect("Failed to handle request");
    let body = body_string(resp);
    assert!(body.contains("Test User"));
    assert!(body.contains("Logout"));

    // Logout revokes the session; the old cookie is now signed-out.
    let resp =
        handle(get_with_cookie("/auth/logout", &cookie), &ctx).expect("Failed to handle request");
    assert_eq!(resp.status(), 303);

    let resp = handle(get_with_cookie("/", &cookie), &ctx).expect("Failed to handle request");
    let body = body_string(resp);
    assert!(body.contains("Login / Register"));

    // Credentials still work for a fresh sign-in.
    let resp = handle(
        post_form("/auth/login", "email=test@example.com&password=Secret!1"),
        &ctx,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 303);
    assert!(session_cookie(&resp).starts_with("session="));
}

#[test]
fn wrong_verification_code_rerenders_the_verify_step() {
    let (ctx, _dir) = test_context();

    handle(
        post_form(
            "/auth/register",
            "firstName=A&lastName=B&phone=1&email=a@b.com&password=Secret!1",
        ),
        &ctx,
    )
    .expect("Failed to handle request");

    let resp = handle(post_form("/auth/verify", "email=a@b.com&code=999999"), &ctx)
        .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Invalid verification code"));
    assert!(body.contains("a@b.com"));
}

#[test]
fn login_rejects_unknown_credentials_in_page() {
    let (ctx, _dir) = test_context();

    let resp = handle(
        post_form("/auth/login", "email=nobody@example.com&password=Nope!1x"),
        &ctx,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Invalid email or password"));
}

#[test]
fn weak_password_shows_the_rule_hint() {
    let (ctx, _dir) = test_context();

    let resp = handle(
        post_form(
            "/auth/register",
            "firstName=A&lastName=B&phone=1&email=a@b.com&password=short",
        ),
        &ctx,
    )
    .expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Password must be at least 6 characters"));
}
