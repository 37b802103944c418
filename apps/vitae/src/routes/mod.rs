pub mod health;
pub mod site;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState, site_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Page and its form controls
        .route("/", get(site::handle_page))
        .route("/language", post(site::handle_language))
        .route("/filter", post(site::handle_filter))
        .route("/theme", post(site::handle_theme))
        // JSON API
        .route("/api/v1/state", get(site::handle_state))
        .route("/api/v1/events", post(site::handle_event))
        // Fonts, images and stylesheets
        .fallback_service(ServeDir::new(site_dir))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::dispatch::Dispatcher;
    use crate::engine::Engine;
    use crate::models::resume::fixtures;
    use crate::render::resume_template;

    fn router_with(engine: Engine, site_dir: &Path) -> Router {
        let state = AppState::new(Dispatcher::new(engine), resume_template());
        build_router(state, site_dir)
    }

    fn router(site_dir: &Path) -> Router {
        let mut engine = Engine::new();
        engine.initialize(fixtures::document());
        router_with(engine, site_dir)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn snapshot(app: &Router) -> Value {
        let response = app
            .clone()
            .oneshot(Request::get("/api/v1/state").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_str(&body_text(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let site = tempfile::tempdir().unwrap();
        let response = router(site.path())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["service"], "vitae");
    }

    #[tokio::test]
    async fn test_page_renders_resume() {
        let site = tempfile::tempdir().unwrap();
        let response = router(site.path())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<h1>Ada Lindqvist</h1>"));
        assert!(html.contains("dotfiles"));
    }

    #[tokio::test]
    async fn test_filter_post_redirects_and_updates_state() {
        let site = tempfile::tempdir().unwrap();
        let app = router(site.path());

        let response = app
            .clone()
            .oneshot(form_post("/filter", "tag=Go"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let state = snapshot(&app).await;
        assert_eq!(state["active_tags"], serde_json::json!(["Go"]));
        assert_eq!(state["heading"], "relevant");
        assert_eq!(state["visible_slot"], "relevant");
    }

    #[tokio::test]
    async fn test_language_post_resets_filter() {
        let site = tempfile::tempdir().unwrap();
        let app = router(site.path());

        app.clone().oneshot(form_post("/filter", "tag=Rust")).await.unwrap();
        app.clone().oneshot(form_post("/language", "code=sv")).await.unwrap();

        let state = snapshot(&app).await;
        assert_eq!(state["language"], "sv");
        assert_eq!(state["active_tags"], serde_json::json!(["All"]));
        assert_eq!(state["heading"], "default");
    }

    #[tokio::test]
    async fn test_form_tag_is_url_decoded() {
        let site = tempfile::tempdir().unwrap();
        let app = router(site.path());
        app.clone()
            .oneshot(form_post("/filter", "tag=Inbyggda+system"))
            .await
            .unwrap();
        let state = snapshot(&app).await;
        assert_eq!(state["active_tags"], serde_json::json!(["Inbyggda system"]));
    }

    #[tokio::test]
    async fn test_form_tag_keeps_surrounding_spaces() {
        let site = tempfile::tempdir().unwrap();
        let app = router(site.path());
        app.clone()
            .oneshot(form_post("/filter", "tag=+Go+"))
            .await
            .unwrap();
        let state = snapshot(&app).await;
        assert_eq!(state["active_tags"], serde_json::json!([" Go "]));

        app.clone()
            .oneshot(form_post("/filter", "tag=+Go+"))
            .await
            .unwrap();
        let state = snapshot(&app).await;
        assert_eq!(state["active_tags"], serde_json::json!(["All"]));
    }

    #[tokio::test]
    async fn test_blank_tag_is_rejected() {
        let site = tempfile::tempdir().unwrap();
        let response = router(site.path())
            .oneshot(form_post("/filter", "tag=+++"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_tag_is_rejected() {
        let site = tempfile::tempdir().unwrap();
        let response = router(site.path())
            .oneshot(form_post("/filter", "tag="))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_event_api_returns_snapshot() {
        let site = tempfile::tempdir().unwrap();
        let request = Request::post("/api/v1/events")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"event": "select_theme", "value": "dark"}"#))
            .unwrap();
        let response = router(site.path()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["theme"], "dark");
    }

    #[tokio::test]
    async fn test_unloaded_engine_serves_empty_page() {
        let site = tempfile::tempdir().unwrap();
        let app = router_with(Engine::new(), site.path());
        let response = app
            .clone()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("<h1></h1>"));

        let state = snapshot(&app).await;
        assert!(state["project_count"].is_null());
    }

    #[tokio::test]
    async fn test_static_assets_served_from_site_dir() {
        let site = tempfile::tempdir().unwrap();
        std::fs::write(site.path().join("styles.css"), "body{}").unwrap();
        let response = router(site.path())
            .oneshot(Request::get("/styles.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "body{}");
    }
}
