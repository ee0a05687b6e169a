//! Basic-auth gate in front of every route

use crate::infrastructure::UserTable;
use crate::web::AppState;
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::sync::Arc;

pub const REALM: &str = "Slipbox";

/// Username and password from an `Authorization: Basic` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

/// Decode `Basic <base64(user:password)>`. Anything malformed is `None`.
pub fn parse_basic_auth(value: &str) -> Option<Credentials> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8_lossy(&decoded);
    let (user, password) = decoded.split_once(':')?;

    Some(Credentials {
        user: user.to_string(),
        password: password.to_string(),
    })
}

fn credentials(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    parse_basic_auth(value)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(
            header::WWW_AUTHENTICATE,
            format!("Basic realm=\"{}\"", REALM),
        )],
        "Unauthorized",
    )
        .into_response()
}

/// Reject requests without valid credentials.
///
/// The users file is re-read for every request so edits apply without a
/// restart.
pub async fn require_basic_auth(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let users_file = state.settings.users_file.clone();
    let users = match tokio::task::spawn_blocking(move || UserTable::load(&users_file)).await {
        Ok(Ok(users)) => users,
        Ok(Err(e)) => return e.into_response(),
        Err(e) => {
            log::error!("Loading users failed: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response();
        }
    };

    match credentials(request.headers()) {
        Some(creds) if users.verify(&creds.user, &creds.password) => next.run(request).await,
        Some(creds) => {
            log::warn!(
                "Rejected credentials for user '{}' on {}",
                creds.user,
                request.uri().path()
            );
            unauthorized()
        }
        None => {
            log::debug!("No credentials on {}", request.uri().path());
            unauthorized()
        }
    }
}
