//! In-process mock backend for exercising the client over real HTTP.

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::client::ApiClient;
use crate::config::ClientConfig;

/// Token the mock backend issues and accepts.
pub const TEST_TOKEN: &str = "tok-test-session";
/// The one registered account.
pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "correct-horse";

/// Serve `router` on an ephemeral local port, returning the base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Client with default settings pointed at `base`.
pub fn client_for(base: &str) -> ApiClient {
    ApiClient::new(&ClientConfig::new(base.to_string())).unwrap()
}

/// True when the request carries the mock backend's bearer token.
pub fn bearer_ok(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v == format!("Bearer {TEST_TOKEN}"))
}

fn user_json() -> Value {
    json!({
        "id": "u-1",
        "username": USERNAME,
        "email": "alice@example.com",
        "full_name": "Alice Example"
    })
}

async fn login_handler(Json(body): Json<Value>) -> Response {
    if body["username"] == USERNAME && body["password"] == PASSWORD {
        Json(json!({ "access_token": TEST_TOKEN, "token_type": "bearer" })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Incorrect username or password" })),
        )
            .into_response()
    }
}

async fn register_handler(Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Username already registered" })),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(user_json())).into_response()
}

async fn me_handler(headers: HeaderMap) -> Response {
    if bearer_ok(&headers) {
        Json(user_json()).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Not authenticated" })),
        )
            .into_response()
    }
}

/// The authentication endpoints the session manager talks to.
pub fn auth_router() -> Router {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/me", get(me_handler))
}
