//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{RawQuery, State, rejection::FormRejection},
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::application::controllers::{Field, LoginController, LoginView, SubmitOutcome};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::navigator::RedirectNavigator;

/// Cookie carrying the session token after a successful login.
pub const SESSION_COOKIE: &str = "auth_token";

/// Cookie holding the errors shown by the last render of the page.
///
/// Scoped to `/login` and `SameSite=Strict`, so only this site's own form
/// posts send it back.
pub const FLASH_COOKIE: &str = "login_errors";

const MAX_FLASH_BYTES: usize = 2048;

/// Messages other pages can ask for with `/login?error=<code>`.
const CARRIED_MESSAGES: &[(&str, &str)] = &[
    (
        "session_expired",
        "Your session has expired, please sign in again",
    ),
    ("signed_out", "You have been signed out"),
    ("login_required", "Please sign in to continue"),
];

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Error alert above the form
/// - Email and password inputs
/// - Password visibility toggle and links to recovery and signup
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    errors: Vec<String>,
    email: String,
    password: String,
    show_password: bool,
    password_input_type: &'static str,
    autofocus_email: bool,
    submit_disabled: bool,
    forgot_password_path: &'static str,
    signup_path: &'static str,
}

impl From<LoginView> for LoginTemplate {
    fn from(view: LoginView) -> Self {
        Self {
            errors: view.errors,
            email: view.email,
            password: view.password,
            show_password: view.show_password,
            password_input_type: view.password_input_type,
            autofocus_email: view.focus == Some(Field::Email),
            submit_disabled: view.submit_disabled,
            forgot_password_path: view.forgot_password_path,
            signup_path: view.signup_path,
        }
    }
}

/// Button pressed to submit the form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginIntent {
    #[default]
    Login,
    TogglePasswordVisibility,
}

/// Form posted to `POST /login`. Missing fields count as empty.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Visibility of the password field when the form was posted.
    #[serde(default)]
    pub show_password: bool,
    #[serde(default)]
    pub intent: LoginIntent,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
///
/// # Carried-over errors
///
/// Other pages redirect here with repeated `error` codes
/// (`/login?error=session_expired`). Known codes are shown once, above the
/// form; unknown ones are ignored.
pub async fn login_page_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let store = Arc::new(state.session_store(carried_errors(query.as_deref())));
    let mut page = LoginController::new(store, Arc::new(RedirectNavigator::new()));
    page.mount().await;

    render_page(page.view(), StatusCode::OK, state.secure_cookies)
}

/// Handles the login form.
///
/// # Endpoint
///
/// `POST /login` (`application/x-www-form-urlencoded`)
///
/// The errors shown by the previous render come back in the `login_errors`
/// cookie, so a password visibility toggle keeps them on screen.
///
/// # Responses
///
/// - **303 See Other** to `/` after a successful login, setting the
///   `auth_token` cookie when the session API issued a token
/// - **200 OK** with the re-rendered page for validation errors, rejected
///   logins and password visibility toggles
/// - **409 Conflict** with the re-rendered page while another login for the
///   same email is in flight
/// - **400 Bad Request** when the body is not a form
pub async fn login_submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form.map_err(|e| {
        AppError::bad_request("Malformed login form", json!({ "reason": e.body_text() }))
    })?;

    let navigator = Arc::new(RedirectNavigator::new());
    let store = Arc::new(state.session_store(flashed_errors(&headers)));
    let mut page = LoginController::new(store, Arc::clone(&navigator))
        .with_in_flight_flag(state.submit_flag(&form.email));
    page.mount().await;

    page.set_email(form.email);
    page.set_password(form.password);
    if form.show_password {
        page.toggle_password_visibility();
    }

    let status = match form.intent {
        LoginIntent::TogglePasswordVisibility => {
            page.toggle_password_visibility();
            return render_page(page.view(), StatusCode::OK, state.secure_cookies);
        }
        LoginIntent::Login => match page.submit().await {
            SubmitOutcome::Navigated { session, .. } => {
                if let Some(target) = navigator.take_target() {
                    return redirect_with_session(
                        &target,
                        session.token.as_deref(),
                        state.secure_cookies,
                    );
                }
                StatusCode::OK
            }
            SubmitOutcome::Busy => StatusCode::CONFLICT,
            SubmitOutcome::Invalid | SubmitOutcome::Rejected => StatusCode::OK,
        },
    };

    let mut view = page.view();
    view.password.clear();
    render_page(view, status, state.secure_cookies)
}

/// Renders `view` and records its errors in the flash cookie.
fn render_page(view: LoginView, status: StatusCode, secure: bool) -> Result<Response, AppError> {
    let flash = flash_cookie(&view.errors, secure)?;
    let mut response = (status, LoginTemplate::from(view)).into_response();
    response.headers_mut().append(SET_COOKIE, flash);

    Ok(response)
}

/// Maps known `error` codes of a raw query string to their messages.
fn carried_errors(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };

    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "error")
        .filter_map(|(_, code)| {
            let message = CARRIED_MESSAGES
                .iter()
                .find(|(known, _)| *known == code)
                .map(|(_, message)| message.to_string());
            if message.is_none() {
                tracing::debug!(%code, "ignoring unknown login error code");
            }
            message
        })
        .collect()
}

/// Reads the errors of the previous render from the flash cookie.
fn flashed_errors(headers: &HeaderMap) -> Vec<String> {
    let Some(value) = cookie_value(headers, FLASH_COOKIE) else {
        return Vec::new();
    };

    url::form_urlencoded::parse(value.as_bytes())
        .filter(|(key, _)| key == "error")
        .map(|(_, message)| message.into_owned())
        .filter(|message| !message.is_empty())
        .collect()
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
}

/// Builds the `Set-Cookie` value holding `errors`, or clearing the cookie
/// when there are none.
fn flash_cookie(errors: &[String], secure: bool) -> Result<HeaderValue, AppError> {
    let value = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(errors.iter().map(|message| ("error", message)))
        .finish();

    let secure = if secure { "; Secure" } else { "" };
    let cookie = if value.is_empty() || value.len() > MAX_FLASH_BYTES {
        format!("{FLASH_COOKIE}=; Path=/login; Max-Age=0; HttpOnly; SameSite=Strict{secure}")
    } else {
        format!("{FLASH_COOKIE}={value}; Path=/login; HttpOnly; SameSite=Strict{secure}")
    };

    HeaderValue::from_str(&cookie).map_err(|e| {
        AppError::internal(
            "Login errors cannot be stored in a cookie",
            json!({ "reason": e.to_string() }),
        )
    })
}

fn redirect_with_session(
    target: &str,
    token: Option<&str>,
    secure: bool,
) -> Result<Response, AppError> {
    let mut response = Redirect::to(target).into_response();
    response
        .headers_mut()
        .append(SET_COOKIE, flash_cookie(&[], secure)?);

    if let Some(token) = token {
        let cookie = session_cookie(token, secure)?;
        response.headers_mut().append(SET_COOKIE, cookie);
    }

    Ok(response)
}

/// Builds the `Set-Cookie` value for a session token.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the token contains characters that are
/// not allowed in a cookie value.
fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, AppError> {
    let valid = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_graphic() && !matches!(c, ';' | ',' | '"' | '\\'));
    if !valid {
        return Err(AppError::internal(
            "Session token cannot be stored in a cookie",
            json!({}),
        ));
    }

    let secure = if secure { "; Secure" } else { "" };
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax{secure}");

    HeaderValue::from_str(&cookie).map_err(|e| {
        AppError::internal(
            "Session token cannot be stored in a cookie",
            json!({ "reason": e.to_string() }),
        )
    })
}
