#![cfg(feature = "actix-web")]

use actix_web::dev::{AppService, HttpServiceFactory};
use actix_web::guard::{Get, Post};
use actix_web::http::header;
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, Resource};

use crate::{DocsViewer, Submission};

impl HttpServiceFactory for DocsViewer {
    fn register(self, config: &mut AppService) {
        let page_path = self.page_path().to_string();
        let submit_path = self.submit_path();
        let assets_path = format!("{}{{file:.*}}", self.assets_path());
        let viewer = Data::new(self);

        Resource::new(page_path)
            .guard(Get())
            .app_data(viewer.clone())
            .to(serve_page)
            .register(config);

        Resource::new(submit_path)
            .guard(Post())
            .app_data(viewer)
            .to(submit)
            .register(config);

        Resource::new(assets_path)
            .guard(Get())
            .to(serve_asset)
            .register(config);
    }
}

async fn serve_page(request: HttpRequest, viewer: Data<DocsViewer>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(viewer.render(request.query_string()))
}

async fn submit(viewer: Data<DocsViewer>, submission: web::Form<Submission>) -> HttpResponse {
    match viewer.submit(&submission.url) {
        Some(location) => HttpResponse::SeeOther()
            .insert_header((header::LOCATION, location))
            .finish(),
        None => HttpResponse::NoContent().finish(),
    }
}

async fn serve_asset(file: web::Path<String>) -> HttpResponse {
    crate::assets::serve(&file)
        .map(|file| {
            HttpResponse::Ok()
                .content_type(file.content_type)
                .body(file.bytes.into_owned())
        })
        .unwrap_or_else(|| HttpResponse::NotFound().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn get_page_with_url_renders_viewer() {
        let app = test::init_service(App::new().service(DocsViewer::new().path("/docs"))).await;

        let request = test::TestRequest::get()
            .uri("/docs?a=foo=bar")
            .to_request();
        let body = test::call_and_read_body(&app, request).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains(r#"id="banner""#));
        assert!(body.contains(r#""url":"foo=bar""#));
    }

    #[actix_web::test]
    async fn get_page_without_query_renders_landing() {
        let app = test::init_service(App::new().service(DocsViewer::new())).await;

        let request = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, request).await;
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(body.contains(r#"action="/submit""#));
    }

    #[actix_web::test]
    async fn submit_redirects_or_stays() {
        let app = test::init_service(App::new().service(DocsViewer::new())).await;

        let request = test::TestRequest::post()
            .uri("/submit")
            .set_form([("url", "https://x.com/a.json")])
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/?url=https%3A%2F%2Fx.com%2Fa.json"
        );

        let request = test::TestRequest::post()
            .uri("/submit")
            .set_form([("url", "   ")])
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn serve_embedded_logo() {
        let app = test::init_service(App::new().service(DocsViewer::new())).await;

        let request = test::TestRequest::get().uri("/assets/logo.svg").to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/svg+xml"
        );
    }
}
