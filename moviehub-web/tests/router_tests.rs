//! Router tests driving the web layer with `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use moviehub_core::config::MovieHubConfig;
use moviehub_core::test_mocks::{MockCatalog, MockOutcome, MockTrendingStore, sample_movie};
use moviehub_core::{TrendingEntry, ViewControllerHandle, spawn_view_controller};
use moviehub_web::{AppState, build_router};
use serde_json::Value;
use tokio::time::sleep;
use tower::ServiceExt;

struct WebFixture {
    router: Router,
    controller: ViewControllerHandle,
    trending: MockTrendingStore,
}

impl WebFixture {
    async fn mounted(catalog: MockCatalog, trending: MockTrendingStore) -> Self {
        let config = MovieHubConfig::for_testing();
        let controller = spawn_view_controller(
            config.controller.clone(),
            Arc::new(catalog),
            Arc::new(trending.clone()),
        );
        controller.mount().await.unwrap();
        sleep(Duration::from_millis(1)).await;

        Self {
            router: build_router(AppState::new(controller.clone(), &config)),
            controller,
            trending,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn type_query(&self, form_body: &str) -> StatusCode {
        let request = Request::post("/htmx/query")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form_body.to_string()))
            .unwrap();
        self.send(request).await.0
    }
}

fn catalog() -> MockCatalog {
    MockCatalog::new()
        .with_movies(
            "",
            vec![sample_movie(155, "The Dark Knight"), sample_movie(603, "The Matrix")],
        )
        .with_movies(
            "batman",
            vec![sample_movie(268, "Batman"), sample_movie(272, "Batman Begins")],
        )
}

fn trending() -> MockTrendingStore {
    MockTrendingStore::new().with_entries(vec![TrendingEntry {
        id: "doc-1".to_string(),
        title: "Inception".to_string(),
        poster_url: "https://img/inception.jpg".to_string(),
    }])
}

#[tokio::test(start_paused = true)]
async fn test_health() {
    let fixture = WebFixture::mounted(catalog(), trending()).await;

    let (status, body) = fixture.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test(start_paused = true)]
async fn test_state_after_mount() {
    let fixture = WebFixture::mounted(catalog(), trending()).await;

    let (status, body) = fixture.get("/api/state").await;
    assert_eq!(status, StatusCode::OK);

    let state: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(state["query"], "");
    assert_eq!(state["is_loading"], false);
    assert_eq!(state["movies"][0]["title"], "The Dark Knight");
    assert_eq!(state["trending_movies"][0]["title"], "Inception");
}

#[tokio::test(start_paused = true)]
async fn test_page_renders_both_sections() {
    let fixture = WebFixture::mounted(catalog(), trending()).await;

    let (status, body) = fixture.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("All Movies"));
    assert!(body.contains("The Matrix"));
    assert!(body.contains("Trending Movies"));
    assert!(body.contains(r#"hx-post="/htmx/query""#));
    assert!(body.contains(r#"hx-trigger="every 750ms""#));
}

#[tokio::test(start_paused = true)]
async fn test_typed_query_searches_after_debounce() {
    let fixture = WebFixture::mounted(catalog(), trending()).await;

    assert_eq!(fixture.type_query("query=bat").await, StatusCode::NO_CONTENT);
    assert_eq!(fixture.type_query("query=batman").await, StatusCode::NO_CONTENT);

    let (_, partial) = fixture.get("/htmx/movies").await;
    assert!(partial.contains("The Dark Knight"));

    sleep(Duration::from_millis(100)).await;

    let (status, partial) = fixture.get("/htmx/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert!(partial.contains("Batman Begins"));
    assert!(!partial.contains("The Dark Knight"));
    assert_eq!(
        fixture.trending.reports().await,
        vec![("batman".to_string(), 268)]
    );
}

#[tokio::test(start_paused = true)]
async fn test_json_query_endpoint() {
    let fixture = WebFixture::mounted(catalog(), trending()).await;

    let request = Request::post("/api/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"query": "batman"}"#))
        .unwrap();
    let (status, _) = fixture.send(request).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    sleep(Duration::from_millis(100)).await;
    let (_, body) = fixture.get("/api/state").await;
    let state: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(state["committed_query"], "batman");

    let malformed = Request::post("/api/query")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"q": 1}"#))
        .unwrap();
    let (status, _) = fixture.send(malformed).await;
    assert!(status.is_client_error());
}

#[tokio::test(start_paused = true)]
async fn test_user_text_is_escaped() {
    let catalog = catalog().with_outcome(
        "<b>x</b>",
        MockOutcome::Rejected("Nothing matches <b>x</b>".to_string()),
    );
    let fixture = WebFixture::mounted(catalog, trending()).await;

    fixture.type_query("query=%3Cb%3Ex%3C%2Fb%3E").await;
    sleep(Duration::from_millis(100)).await;

    let (_, page) = fixture.get("/").await;
    assert!(page.contains(r#"value="&lt;b&gt;x&lt;/b&gt;""#));
    assert!(page.contains("Nothing matches &lt;b&gt;x&lt;/b&gt;"));
    assert!(!page.contains("<b>x</b>"));
}

#[tokio::test(start_paused = true)]
async fn test_trending_partial_empty_without_entries() {
    let fixture = WebFixture::mounted(catalog(), MockTrendingStore::new()).await;

    let (status, body) = fixture.get("/htmx/trending").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_stopped_controller_is_unavailable() {
    let fixture = WebFixture::mounted(catalog(), trending()).await;
    fixture.controller.shutdown().await.unwrap();
    sleep(Duration::from_millis(1)).await;

    let (status, _) = fixture.get("/api/state").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    assert_eq!(fixture.type_query("query=x").await, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test(start_paused = true)]
async fn test_placeholder_poster_asset() {
    let fixture = WebFixture::mounted(catalog(), trending()).await;

    let response = fixture
        .router
        .clone()
        .oneshot(
            Request::get("/static/no-movie.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "image/svg+xml"
    );

    let (status, _) = fixture.get("/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
