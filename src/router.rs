use crate::auth::accounts::{self, RegistrationRequest, UserAccount};
use crate::auth::sessions::{self, SESSION_TTL_SECS};
use crate::catalog::CatalogLoader;
use crate::errors::{ResultResp, ServerError};
use crate::filter::{self, FilterCriteria};
use crate::responses::{css_response, html_response, redirect_response};
use crate::store::LocalStore;
use crate::templates::pages;
use astra::Request;
use chrono::Utc;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

const STYLESHEET: &str = include_str!("../static/main.css");

#[derive(Clone)]
pub struct AppContext {
    pub store: LocalStore,
    pub loader: CatalogLoader,
}

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or("").to_string();
    let session_token = req
        .headers()
        .get("cookie")
        .and_then(|value| value.to_str().ok())
        .and_then(cookie_session_token)
        .map(str::to_string);

    let now = Utc::now().timestamp();
    let user = current_user(ctx, session_token.as_deref(), now)?;

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => home_view(ctx, user.as_ref()),
        ("GET", "/listings") => listings_view(ctx, &query, user.as_ref()),
        ("GET", "/details") => details_view(ctx, &query, user.as_ref()),
        ("GET", "/static/main.css") => css_response(STYLESHEET),

        ("GET", "/login") => html_response(pages::login_page(None, None, user.as_ref())),
        ("POST", "/auth/login") => login_action(ctx, req, now),
        ("POST", "/auth/register") => register_action(ctx, req, now),
        ("POST", "/auth/verify") => verify_action(ctx, req, now),
        ("GET", "/auth/logout") => logout_action(ctx, session_token.as_deref(), now),

        _ => Err(ServerError::NotFound),
    }
}

/// Resolve the session cookie to a user. Expired or unknown tokens mean
/// signed-out, never an error.
fn current_user(
    ctx: &AppContext,
    session_token: Option<&str>,
    now: i64,
) -> Result<Option<UserAccount>, ServerError> {
    let Some(token) = session_token else {
        return Ok(None);
    };

    match sessions::resolve_session(&ctx.store, token, now)? {
        Some(user_id) => accounts::find_user(&ctx.store, user_id),
        None => Ok(None),
    }
}

fn home_view(ctx: &AppContext, user: Option<&UserAccount>) -> ResultResp {
    match ctx.loader.load() {
        Ok(catalog) => {
            let featured: Vec<_> = catalog.into_iter().take(3).collect();
            html_response(pages::home_page(&featured, None, user))
        }
        Err(err) => {
            eprintln!("⚠️ Catalog load failed: {err}");
            html_response(pages::home_page(&[], Some(&err.to_string()), user))
        }
    }
}

fn listings_view(ctx: &AppContext, query: &str, user: Option<&UserAccount>) -> ResultResp {
    let criteria = FilterCriteria::from_query(query);

    match ctx.loader.load() {
        Ok(catalog) => {
            let results = filter::apply(&catalog, &criteria);
            html_response(pages::listings_page(&results, &criteria, None, user))
        }
        Err(err) => {
            eprintln!("⚠️ Catalog load failed: {err}");
            html_response(pages::listings_page(
                &[],
                &criteria,
                Some(&err.to_string()),
                user,
            ))
        }
    }
}

fn details_view(ctx: &AppContext, query: &str, user: Option<&UserAccount>) -> ResultResp {
    let id = form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "id")
        .and_then(|(_, value)| value.trim().parse::<i64>().ok());

    let Some(id) = id else {
        return html_response(pages::details_error_page(
            "Missing or invalid listing id in URL. Example: /details?id=1",
            user,
        ));
    };

    match ctx.loader.load() {
        Ok(catalog) => match catalog.into_iter().find(|listing| listing.id == Some(id)) {
            Some(listing) => html_response(pages::details_page(&listing, user)),
            None => html_response(pages::details_error_page(
                &format!("No listing found with id={id}"),
                user,
            )),
        },
        Err(err) => {
            eprintln!("⚠️ Catalog load failed: {err}");
            html_response(pages::details_error_page(&err.to_string(), user))
        }
    }
}

fn login_action(ctx: &AppContext, req: Request, now: i64) -> ResultResp {
    let form = read_form(req)?;
    let email = form_value(&form, "email");
    let password = form_value(&form, "password");

    match accounts::login(&ctx.store, email, password) {
        Ok(user) => {
            let token = sessions::create_session(&ctx.store, user.id, now)?;
            eprintln!("🔓 {} signed in", user.email);
            redirect_response("/", Some(&session_cookie(&token)))
        }
        Err(ServerError::Unauthorized(msg)) | Err(ServerError::BadRequest(msg)) => {
            html_response(pages::login_page(Some(&msg), None, None))
        }
        Err(other) => Err(other),
    }
}

fn register_action(ctx: &AppContext, req: Request, now: i64) -> ResultResp {
    let form = read_form(req)?;
    let request = RegistrationRequest {
        first_name: form_value(&form, "firstName").to_string(),
        last_name: form_value(&form, "lastName").to_string(),
        phone: form_value(&form, "phone").to_string(),
        email: form_value(&form, "email").to_string(),
        password: form_value(&form, "password").to_string(),
    };

    match accounts::begin_registration(&ctx.store, request, now) {
        Ok(email) => html_response(pages::verify_page(&email, None, None)),
        Err(ServerError::BadRequest(msg)) => {
            html_response(pages::login_page(None, Some(&msg), None))
        }
        Err(other) => Err(other),
    }
}

fn verify_action(ctx: &AppContext, req: Request, now: i64) -> ResultResp {
    let form = read_form(req)?;
    let email = form_value(&form, "email");
    let code = form_value(&form, "code");

    match accounts::complete_registration(&ctx.store, email, code, now) {
        Ok(user) => {
            let token = sessions::create_session(&ctx.store, user.id, now)?;
            redirect_response("/", Some(&session_cookie(&token)))
        }
        Err(ServerError::Unauthorized(msg)) => {
            html_response(pages::verify_page(email, Some(&msg), None))
        }
        Err(ServerError::BadRequest(msg)) => {
            html_response(pages::login_page(None, Some(&msg), None))
        }
        Err(other) => Err(other),
    }
}

fn logout_action(ctx: &AppContext, session_token: Option<&str>, now: i64) -> ResultResp {
    if let Some(token) = session_token {
        sessions::revoke_session(&ctx.store, token, now)?;
    }
    redirect_response("/", Some("session=; Path=/; Max-Age=0"))
}

fn cookie_session_token(header: &str) -> Option<&str> {
    header.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == "session").then_some(value)
    })
}

fn session_cookie(token: &str) -> String {
    format!("session={token}; Path=/; HttpOnly; Max-Age={SESSION_TTL_SECS}")
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = String::new();
    req.into_body()
        .reader()
        .read_to_string(&mut raw)
        .map_err(|_| ServerError::BadRequest("Unreadable request body".into()))?;

    Ok(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
}

fn form_value<'a>(form: &'a HashMap<String, String>, key: &str) -> &'a str {
    form.get(key).map(String::as_str).unwrap_or("")
}
