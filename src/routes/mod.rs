//! HTTP route table.
//!
//! The table holds a single route, `GET /_health`. It is built once before the
//! listener is bound and shared read-only by every connection afterwards.
//! Unknown paths fall through to a plain-text 404; a known path with the wrong
//! method gets the router's 405 with an `Allow` header.
//!
//! Every request is traced by [`crate::middleware::trace_request`].

pub mod health;

use axum::{http::StatusCode, middleware, response::IntoResponse, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH, NOT_FOUND_BODY};
use crate::middleware::trace_request;

/// Creates the Axum router with the health route and the not-found fallback.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(HEALTH_PATH, get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .fallback(not_found)
        // Outermost so 404/405 responses are traced too
        .layer(middleware::from_fn(trace_request))
}

/// Fallback for paths with no registered route.
async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, Response};
    use futures::future::join_all;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn send(method: Method, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        create_router().oneshot(request).await.unwrap()
    }

    async fn body_bytes(response: Response<Body>) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[tokio::test]
    async fn get_health_returns_healthy() {
        let response = send(Method::GET, "/_health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        assert_eq!(body_bytes(response).await, b"healthy\n");
    }

    #[tokio::test]
    async fn health_ignores_query_and_headers() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/_health?verbose=1")
            .header(header::ACCEPT, "application/json")
            .body(Body::from("ignored"))
            .unwrap();
        let response = create_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"healthy\n");
    }

    #[tokio::test]
    async fn head_health_returns_ok_without_body() {
        let response = send(Method::HEAD, "/_health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn other_methods_on_health_are_not_allowed() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let response = send(method.clone(), "/_health").await;

            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "method {method}"
            );
            let allow = response.headers()[header::ALLOW].to_str().unwrap().to_owned();
            assert!(allow.contains("GET"), "allow header was {allow:?}");
            assert_ne!(body_bytes(response).await, b"healthy\n");
        }
    }

    #[tokio::test]
    async fn unknown_paths_return_not_found() {
        for path in ["/", "/nope", "/_health/", "/_healthz", "/health", "/_HEALTH"] {
            let response = send(Method::GET, path).await;

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
            assert_eq!(body_bytes(response).await, b"404 page not found\n");
        }
    }

    #[tokio::test]
    async fn unknown_path_with_other_method_is_not_found() {
        let response = send(Method::POST, "/nope").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_ne!(body_bytes(response).await, b"healthy\n");
    }

    #[tokio::test]
    async fn concurrent_health_checks_agree() {
        let app = create_router();
        let requests = (0..100).map(|_| {
            let app = app.clone();
            async move {
                let request = Request::builder()
                    .uri("/_health")
                    .body(Body::empty())
                    .unwrap();
                let response = app.oneshot(request).await.unwrap();
                (response.status(), body_bytes(response).await)
            }
        });

        let results = join_all(requests).await;

        assert_eq!(results.len(), 100);
        for (status, body) in results {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, b"healthy\n");
        }
    }
}
