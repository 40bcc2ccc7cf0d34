use crate::catalog::CatalogLoader;
use crate::router::AppContext;
use crate::store::LocalStore;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

const SCHEMA: &str = include_str!("../../sql/schema.sql");

/// A closed local port: every catalog load fails fast with a transport
/// error, which is the degraded path the page tests exercise.
pub const UNREACHABLE_CATALOG: &str = "http://127.0.0.1:9/listings.json";

/// Fresh context per test: its own store file and a loader that cannot
/// reach a catalog. Keep the TempDir alive for the test's duration.
pub fn test_context() -> (AppContext, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.sqlite3");

    let store = LocalStore::new(path.to_string_lossy());
    store.apply_schema(SCHEMA).unwrap();

    let loader = CatalogLoader::new(UNREACHABLE_CATALOG).unwrap();

    (AppContext { store, loader }, dir)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Pull "session=TOKEN" out of a redirect's Set-Cookie header.
pub fn session_cookie(resp: &Response) -> String {
    resp.headers()
        .get("set-cookie")
        .expect("response sets no cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}
