//! The forwarding half of the gateway.
//!
//! Every request that reaches the gateway is resolved against the route
//! table and replayed against the matching backend with the prefix
//! stripped. The upstream response (status, headers, body) is relayed
//! unmodified; in particular the backends' CORS headers pass straight
//! through.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::response::Response;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::GatewayError;
use crate::routes::RouteTable;

#[derive(Clone)]
struct ProxyState {
    table: Arc<RouteTable>,
    http: reqwest::Client,
}

/// Builds the gateway router over a validated route table.
///
/// A single fallback handler catches every method and path; routing is the
/// table's job, not the HTTP framework's.
pub fn router(table: RouteTable) -> Router {
    let state = ProxyState {
        table: Arc::new(table),
        http: reqwest::Client::new(),
    };
    Router::new()
        .fallback(forward)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn forward(
    State(state): State<ProxyState>,
    request: Request,
) -> Result<Response, GatewayError> {
    let path = request.uri().path().to_string();
    let resolved = state.table.resolve(&path)?;

    let mut url = format!("{}{}", resolved.target, resolved.rewritten_path);
    if let Some(query) = request.uri().query() {
        url.push('?');
        url.push_str(query);
    }
    tracing::debug!(%path, %url, "forwarding");

    let method = request.method().clone();
    let headers = request.headers().clone();
    let body = to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| GatewayError::Upstream(e.to_string()))?;

    let mut forwarded = HeaderMap::new();
    for (name, value) in headers.iter() {
        // Host names the gateway, not the backend; lengths are recomputed.
        if name == header::HOST || name == header::CONTENT_LENGTH {
            continue;
        }
        forwarded.insert(name.clone(), value.clone());
    }

    let upstream_response = state
        .http
        .request(method, url)
        .headers(forwarded)
        .body(body)
        .send()
        .await
        .map_err(|e| GatewayError::Upstream(e.to_string()))?;

    let status = upstream_response.status();
    let response_headers = upstream_response.headers().clone();
    let bytes = upstream_response
        .bytes()
        .await
        .map_err(|e| GatewayError::Upstream(e.to_string()))?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    for (name, value) in response_headers.iter() {
        if name == header::TRANSFER_ENCODING || name == header::CONTENT_LENGTH {
            continue;
        }
        response.headers_mut().insert(name.clone(), value.clone());
    }
    Ok(response)
}
