#![cfg(feature = "axum")]

use std::sync::Arc;

use axum::extract::{Path, RawQuery};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{routing, Extension, Form, Router};

use crate::{DocsViewer, Submission};

impl<S> From<DocsViewer> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn from(viewer: DocsViewer) -> Self {
        let page_path = viewer.page_path().to_string();
        let submit_path = viewer.submit_path();
        let assets_path = format!("{}{{*file}}", viewer.assets_path());
        let viewer = Arc::new(viewer);

        Router::<S>::new()
            .route(
                &page_path,
                routing::get(serve_page).layer(Extension(viewer.clone())),
            )
            .route(
                &submit_path,
                routing::post(submit).layer(Extension(viewer)),
            )
            .route(&assets_path, routing::get(serve_asset))
    }
}

async fn serve_page(
    RawQuery(query): RawQuery,
    Extension(viewer): Extension<Arc<DocsViewer>>,
) -> Html<String> {
    Html(viewer.render(query.as_deref().unwrap_or_default()))
}

async fn submit(
    Extension(viewer): Extension<Arc<DocsViewer>>,
    Form(submission): Form<Submission>,
) -> Response {
    match viewer.submit(&submission.url) {
        Some(location) => Redirect::to(&location).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn serve_asset(Path(file): Path<String>) -> Response {
    crate::assets::serve(&file)
        .map(|file| {
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, file.content_type)],
                file.bytes,
            )
                .into_response()
        })
        .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    use super::*;

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Response) {
        let response = router.oneshot(request).await.unwrap();

        (response.status(), response)
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn get_page_without_query_renders_landing() {
        let (status, response) = send(DocsViewer::new().into(), get("/")).await;
        let body = body_string(response).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"<form method="post" action="/submit">"#));
        assert!(!body.contains("SwaggerUIBundle"));
    }

    #[tokio::test]
    async fn get_page_with_url_renders_viewer() {
        let (status, response) = send(
            DocsViewer::new().path("/docs").into(),
            get("/docs?url=https%3A%2F%2Fx.com%2Fa.json"),
        )
        .await;
        let body = body_string(response).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="banner""#));
        assert!(body.contains(r#""url":"https://x.com/a.json""#));
    }

    #[tokio::test]
    async fn submit_redirects_to_page_with_url() {
        let (status, response) = send(
            DocsViewer::new().into(),
            post_form("/submit", "url=+https%3A%2F%2Fx.com%2Fa.json+"),
        )
        .await;

        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/?url=https%3A%2F%2Fx.com%2Fa.json"
        );
    }

    #[tokio::test]
    async fn submit_whitespace_does_not_navigate() {
        let (status, response) =
            send(DocsViewer::new().into(), post_form("/submit", "url=++%09")).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(response.headers().get(header::LOCATION).is_none());
    }

    #[tokio::test]
    async fn submit_without_field_does_not_navigate() {
        let (status, _) = send(DocsViewer::new().into(), post_form("/submit", "")).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn serve_embedded_logo() {
        let (status, response) =
            send(DocsViewer::new().path("/docs").into(), get("/docs/assets/logo.svg")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
    }

    #[tokio::test]
    async fn serve_unknown_asset() {
        let (status, _) = send(DocsViewer::new().into(), get("/assets/nope.js")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
