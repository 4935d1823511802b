#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
//! This crate serves a small documentation site for OpenAPI documents hosted anywhere on the web.
//!
//! A single page is served from a user defined path. When the request query string carries a url
//! the page renders [Swagger UI][swagger] pointed at that url below a fixed banner. Otherwise a
//! landing page with a form asking for the url is rendered. Submitting the form navigates back to
//! the same page with `?url=<url>` query string.
//!
//! Fetching, validating and rendering the OpenAPI document is done entirely by Swagger UI in the
//! browser. This crate never touches the document itself.
//!
//! # Crate Features
//!
//! * **actix-web** Allows serving [`DocsViewer`] via _**`actix-web`**_.
//! * **axum** Allows serving [`DocsViewer`] via _**`axum`**_.
//!
//! # Install
//!
//! Use the viewer only without any boiler plate implementation.
//! ```toml
//! [dependencies]
//! openapi-viewer = "0.1"
//! ```
//!
//! Enable axum integration with the viewer.
//! ```toml
//! [dependencies]
//! openapi-viewer = { version = "0.1", features = ["axum"] }
//! ```
//!
//! # Using standalone
//!
//! [`DocsViewer::render`] selects the [`View`] from the raw query string and renders it as HTML.
//! [`DocsViewer::submit`] resolves the form submission to the location to redirect to, and
//! [`assets::serve`] serves the embedded static files. These three are all it takes to serve the
//! viewer from any framework.
//! ```rust
//! # use openapi_viewer::DocsViewer;
//! let viewer = DocsViewer::new().path("/docs");
//!
//! let landing = viewer.render("");
//! assert!(landing.contains(r#"action="/docs/submit""#));
//!
//! let location = viewer.submit(" https://x.com/a.json ");
//! assert_eq!(location.as_deref(), Some("/docs?url=https%3A%2F%2Fx.com%2Fa.json"));
//!
//! // Whitespace only submission does not navigate anywhere.
//! assert_eq!(viewer.submit("  "), None);
//! ```
//!
//! # Examples
//!
//! _**Serve [`DocsViewer`] via `axum` framework.**_
//! ```no_run
//! use axum::Router;
//! use openapi_viewer::DocsViewer;
//!
//! let app = Router::<()>::new().merge(DocsViewer::new());
//! ```
//!
//! _**Serve [`DocsViewer`] via `actix-web` framework.**_
//! ```no_run
//! use actix_web::App;
//! use openapi_viewer::DocsViewer;
//!
//! App::new().service(DocsViewer::new().path("/docs"));
//! ```
//!
//! [swagger]: <https://swagger.io/tools/swagger-ui/>

use std::borrow::Cow;

use serde::Deserialize;
use serde_json::Value;

mod actix;
pub mod assets;
mod axum;
mod branding;
pub mod config;
mod error;
pub mod query;
mod view;

pub use branding::Branding;
pub use config::{Config, EmptyConfig, FileConfig, PathConfig};
pub use error::Error;
pub use query::QueryMode;
pub use view::View;

const LANDING_HTML: &str = include_str!("../res/landing.html");
const VIEWER_HTML: &str = include_str!("../res/viewer.html");

/// Default location Swagger UI bundle is loaded from by the browser.
pub const DEFAULT_CDN: &str = "https://unpkg.com/swagger-ui-dist@5";

/// Form body posted by the landing page.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Submission {
    /// Url typed into the landing page form. Not trimmed.
    #[serde(default)]
    pub url: String,
}

/// Entry point for serving the landing page and the Swagger UI viewer.
///
/// This can be used together with predefined web framework integration or standalone with
/// framework of your choice. See [using standalone][standalone].
///
/// [standalone]: index.html#using-standalone
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct DocsViewer {
    path: Cow<'static, str>,
    branding: Branding,
    query_mode: QueryMode,
    cdn: Cow<'static, str>,
    options: Value,
    landing_html: Cow<'static, str>,
    viewer_html: Cow<'static, str>,
}

impl Default for DocsViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocsViewer {
    /// Construct a new [`DocsViewer`] served from `/` with [`EmptyConfig`].
    pub fn new() -> Self {
        Self::with_options(Value::Object(Default::default()))
    }

    /// Construct a new [`DocsViewer`] with Swagger UI options loaded from [`Config`] of choice.
    ///
    /// # Examples
    ///
    /// _**Disable "Try it out" of Swagger UI.**_
    /// ```rust
    /// # use openapi_viewer::DocsViewer;
    /// # use serde_json::json;
    /// let viewer = DocsViewer::with_config(|| json!({ "supportedSubmitMethods": [] }))?;
    /// # Ok::<(), openapi_viewer::Error>(())
    /// ```
    pub fn with_config<C: Config>(config: C) -> Result<Self, Error> {
        Ok(Self::with_options(config.load()?))
    }

    fn with_options(options: Value) -> Self {
        Self {
            path: Cow::Borrowed("/"),
            branding: Branding::default(),
            query_mode: QueryMode::default(),
            cdn: Cow::Borrowed(DEFAULT_CDN),
            options,
            landing_html: Cow::Borrowed(LANDING_HTML),
            viewer_html: Cow::Borrowed(VIEWER_HTML),
        }
    }

    /// Add `path` the [`DocsViewer`] page will be served from. Defaults to `/`.
    ///
    /// Form submissions are posted to `<path>/submit` and assets are served from
    /// `<path>/assets/`.
    pub fn path<P: Into<Cow<'static, str>>>(mut self, path: P) -> Self {
        self.path = path.into();

        self
    }

    /// Override the default [`Branding`].
    pub fn branding(mut self, branding: Branding) -> Self {
        self.branding = branding;

        self
    }

    /// Set [`QueryMode`] used to read the submitted url. Defaults to [`QueryMode::Lenient`].
    pub fn query_mode(mut self, query_mode: QueryMode) -> Self {
        self.query_mode = query_mode;

        self
    }

    /// Override the base url Swagger UI `swagger-ui-bundle.js` and `swagger-ui.css` are loaded
    /// from. Defaults to [`DEFAULT_CDN`].
    pub fn cdn<U: Into<Cow<'static, str>>>(mut self, cdn: U) -> Self {
        self.cdn = cdn.into();

        self
    }

    /// Override the landing page HTML template.
    ///
    /// Template may use `$title`, `$subtitle`, `$description`, `$product`, `$tagline`, `$siteUrl`,
    /// `$siteLabel`, `$logoUrl` and `$submitPath` variables. The form must post field `url` to
    /// `$submitPath`.
    pub fn custom_landing_html<H: Into<Cow<'static, str>>>(mut self, html: H) -> Self {
        self.landing_html = html.into();

        self
    }

    /// Override the viewer page HTML template.
    ///
    /// Template may use the same branding variables as the landing page, `$cdn` and **must**
    /// contain `$options` which is replaced with the JavaScript object literal passed to
    /// `SwaggerUIBundle`.
    pub fn custom_viewer_html<H: Into<Cow<'static, str>>>(mut self, html: H) -> Self {
        self.viewer_html = html.into();

        self
    }

    /// Path the page is served from.
    pub fn page_path(&self) -> &str {
        self.path.as_ref()
    }

    /// Path the landing page form posts to.
    pub fn submit_path(&self) -> String {
        self.sub_path("submit")
    }

    /// Path prefix of the embedded assets, ends with `/`.
    pub fn assets_path(&self) -> String {
        self.sub_path("assets/")
    }

    fn sub_path(&self, segment: &str) -> String {
        format!("{}/{segment}", self.path.trim_end_matches('/'))
    }

    /// Render the page for the raw query string of a request.
    ///
    /// The raw query may or may not start with `?`. The url is read with the configured
    /// [`QueryMode`] and [`View::select`] decides which page is rendered.
    ///
    /// ```rust
    /// # use openapi_viewer::DocsViewer;
    /// let viewer = DocsViewer::new();
    ///
    /// assert!(viewer.render("?url=%2Fopenapi.json").contains(r#""url":"/openapi.json""#));
    /// assert!(viewer.render("").contains("<form"));
    /// ```
    pub fn render(&self, raw_query: &str) -> String {
        let submitted_url = self.query_mode.submitted_url(raw_query);

        match View::select(&submitted_url) {
            View::Landing => {
                tracing::debug!(path = %self.path, "rendering landing page");
                self.to_landing_html()
            }
            View::Viewer { url } => {
                tracing::debug!(path = %self.path, url, "rendering viewer page");
                self.to_viewer_html(url)
            }
        }
    }

    /// Converts this [`DocsViewer`] to the servable landing page HTML.
    pub fn to_landing_html(&self) -> String {
        let submit_path = self.submit_path();
        let mut vars = self.branding_vars();
        vars.push(("submitPath", escape_html(&submit_path)));

        fill_template(&self.landing_html, &vars)
    }

    /// Converts this [`DocsViewer`] to the servable viewer page HTML for `url`.
    ///
    /// The `url` is handed to Swagger UI as is. It is serialized as a JSON string so it cannot
    /// break out of the script element.
    pub fn to_viewer_html(&self, url: &str) -> String {
        let options = config::swagger_options(&self.options, url);

        let mut vars = self.branding_vars();
        vars.push(("cdn", escape_html(&self.cdn)));
        vars.push(("options", Cow::Owned(script_json(&options))));

        fill_template(&self.viewer_html, &vars)
    }

    fn branding_vars(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        let branding = &self.branding;
        let logo_url = format!("{}{}", self.assets_path(), branding.logo);

        vec![
            ("title", escape_html(&branding.title)),
            ("subtitle", escape_html(&branding.subtitle)),
            ("description", escape_html(&branding.description)),
            ("product", escape_html(&branding.product)),
            ("tagline", escape_html(&branding.tagline)),
            ("siteUrl", escape_html(&branding.site_url)),
            ("siteLabel", escape_html(&branding.site_label)),
            ("logoUrl", Cow::Owned(escape_html(&logo_url).into_owned())),
        ]
    }

    /// Resolve a landing page form submission to the location the browser navigates to.
    ///
    /// Returns `None` when the trimmed input is empty, in which case no navigation happens.
    /// Otherwise the location is the page path with `?url=<percent encoded trimmed input>`.
    pub fn submit(&self, input: &str) -> Option<String> {
        let url = input.trim_matches(is_form_whitespace);
        if url.is_empty() {
            tracing::debug!("ignoring empty submission");
            return None;
        }

        let location = format!("{}{}", self.path, query::to_query(url));
        tracing::debug!(%location, "submission accepted");

        Some(location)
    }
}

/// Replaces each `$name` placeholder of `template` in a single pass. Substituted values are not
/// scanned again and unknown placeholders are kept as is.
fn fill_template(template: &str, vars: &[(&str, Cow<'_, str>)]) -> String {
    let mut html = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('$') {
        html.push_str(&rest[..start]);

        let after = &rest[start + 1..];
        let end = after
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(after.len());
        let name = &after[..end];

        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => html.push_str(value),
            None => {
                html.push('$');
                html.push_str(name);
            }
        }
        rest = &after[end..];
    }
    html.push_str(rest);

    html
}

/// Whitespace and line terminators as trimmed by `String.prototype.trim` in browsers.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn escape_html(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

/// JSON for an inline script. `<` only ever occurs inside JSON strings so escaping it keeps
/// `</script>` and `<!--` out of the element.
fn script_json(value: &Value) -> String {
    value.to_string().replace('<', "\\u003c")
}
