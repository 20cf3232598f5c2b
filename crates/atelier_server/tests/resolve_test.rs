use atelier_models::UnsplashClient;
use atelier_server::{ImageResolver, ImageSourceKind};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use serde_json::json;

/// Serves a mock Unsplash API on an ephemeral port and returns its base URL.
async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn resolver_against(base_url: String) -> ImageResolver {
    ImageResolver::new(Some(UnsplashClient::with_base_url("test-key", base_url)))
}

#[tokio::test]
async fn search_hit_is_served_as_unsplash() {
    let router = Router::new().route(
        "/search/photos",
        get(|| async {
            Json(json!({
                "total": 1,
                "results": [
                    {"id": "abc", "urls": {"regular": "https://images.unsplash.com/photo-1"}}
                ]
            }))
        }),
    );
    let resolver = resolver_against(spawn_mock(router).await);

    let resolved = resolver.resolve("a cat", "realistic").await;

    assert_eq!(*resolved.source(), ImageSourceKind::Unsplash);
    assert_eq!(resolved.image_url(), "https://images.unsplash.com/photo-1");
    assert!(resolved.note().is_none());
}

#[tokio::test]
async fn empty_search_results_fall_back_to_placeholder() {
    let router = Router::new().route(
        "/search/photos",
        get(|| async { Json(json!({"total": 0, "results": []})) }),
    );
    let resolver = resolver_against(spawn_mock(router).await);

    let resolved = resolver.resolve("a cat", "cartoon").await;

    assert_eq!(*resolved.source(), ImageSourceKind::Placeholder);
    assert!(resolved.image_url().starts_with("data:image/png;base64,"));
    assert!(resolved.note().is_some());
}

#[tokio::test]
async fn search_api_errors_fall_back_to_placeholder() {
    let router = Router::new().route(
        "/search/photos",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let resolver = resolver_against(spawn_mock(router).await);

    let resolved = resolver.resolve("a cat", "digital-art").await;

    assert_eq!(*resolved.source(), ImageSourceKind::Placeholder);
}

#[tokio::test]
async fn unreachable_search_host_falls_back_to_placeholder() {
    // Nothing listens on this port; the client error is absorbed.
    let resolver = resolver_against("http://127.0.0.1:9".to_string());

    let resolved = resolver.resolve("a cat", "anime").await;

    assert_eq!(*resolved.source(), ImageSourceKind::Placeholder);
    assert!(resolved.image_url().starts_with("data:image/png;base64,"));
}
