use axum::response::Json;
use axum::{routing, Router};
use openapi_viewer::DocsViewer;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::openapi::content::ContentBuilder;
use utoipa::openapi::path::{HttpMethod, OperationBuilder, ParameterBuilder, ParameterIn};
use utoipa::openapi::request_body::RequestBodyBuilder;
use utoipa::openapi::response::ResponseBuilder;
use utoipa::openapi::Required;
use utoipa::{OpenApi, PartialSchema, ToSchema};

pub const HEALTH_PATH: &str = "/healthz";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

const SERVER_TAG: &str = "server";
const VIEWER_TAG: &str = "viewer";

#[derive(OpenApi)]
#[openapi(
    paths(health),
    tags(
        (name = SERVER_TAG, description = "Operational endpoints of the server"),
        (name = VIEWER_TAG, description = "Landing page and Swagger UI viewer")
    )
)]
struct ApiDoc;

/// Server health.
#[derive(Serialize, ToSchema)]
pub struct Health {
    /// Always `ok` while the server answers.
    #[schema(example = "ok")]
    status: String,
    /// Version of the running server.
    version: String,
}

/// Form posted by the landing page.
#[derive(ToSchema)]
#[allow(dead_code)]
struct SubmitForm {
    /// Url typed into the landing page form. Surrounding whitespace is ignored.
    url: String,
}

/// Check server health
///
/// Answers as long as the server accepts requests.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = SERVER_TAG,
    responses(
        (status = 200, description = "Server is up", body = Health)
    )
)]
async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router serving the viewer, health check and the server's own OpenAPI document.
pub fn app(viewer: DocsViewer) -> Router {
    let openapi = api_doc(&viewer);

    Router::new()
        .route(HEALTH_PATH, routing::get(health))
        .route(OPENAPI_PATH, routing::get(move || async { Json(openapi) }))
        .merge(viewer)
        .layer(TraceLayer::new_for_http())
}

/// OpenAPI document of this server including the viewer routes at their configured paths.
pub fn api_doc(viewer: &DocsViewer) -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();

    let page = OperationBuilder::new()
        .tag(VIEWER_TAG)
        .operation_id(Some("viewer_page"))
        .summary(Some("Render landing page or Swagger UI viewer"))
        .description(Some(
            "Without a url the landing page with the url form is rendered. With a url Swagger UI \
             is rendered for the document at that url. The url is the text after the first `=` \
             of the query string unless the server runs with `--strict-query`.",
        ))
        .parameter(
            ParameterBuilder::new()
                .name("url")
                .parameter_in(ParameterIn::Query)
                .required(Required::False)
                .description(Some("Percent encoded url of the OpenAPI document"))
                .schema(Some(String::schema())),
        )
        .response("200", html_response("Landing page or Swagger UI viewer"))
        .build();

    let submit = OperationBuilder::new()
        .tag(VIEWER_TAG)
        .operation_id(Some("viewer_submit"))
        .summary(Some("Submit document url from the landing page"))
        .request_body(Some(
            RequestBodyBuilder::new()
                .content(
                    "application/x-www-form-urlencoded",
                    ContentBuilder::new()
                        .schema(Some(SubmitForm::schema()))
                        .build(),
                )
                .required(Some(Required::True))
                .build(),
        ))
        .response(
            "303",
            ResponseBuilder::new()
                .description("Redirect to the viewer page with `?url=<encoded url>`")
                .build(),
        )
        .response(
            "204",
            ResponseBuilder::new()
                .description("Url was empty, browser stays on the landing page")
                .build(),
        )
        .build();

    let asset = OperationBuilder::new()
        .tag(VIEWER_TAG)
        .operation_id(Some("viewer_asset"))
        .summary(Some("Serve embedded static file"))
        .parameter(
            ParameterBuilder::new()
                .name("file")
                .parameter_in(ParameterIn::Path)
                .required(Required::True)
                .schema(Some(String::schema())),
        )
        .response(
            "200",
            ResponseBuilder::new().description("File content").build(),
        )
        .response(
            "404",
            ResponseBuilder::new().description("No such file").build(),
        )
        .build();

    openapi
        .paths
        .add_path_operation(viewer.page_path(), vec![HttpMethod::Get], page);
    openapi
        .paths
        .add_path_operation(viewer.submit_path(), vec![HttpMethod::Post], submit);
    openapi.paths.add_path_operation(
        format!("{}{{file}}", viewer.assets_path()),
        vec![HttpMethod::Get],
        asset,
    );

    openapi
}

fn html_response(description: &str) -> utoipa::openapi::Response {
    ResponseBuilder::new()
        .description(description)
        .content(
            "text/html",
            ContentBuilder::new().schema(Some(String::schema())).build(),
        )
        .build()
}
