use std::borrow::Cow;

use serde::Deserialize;

/// Static texts and links shown on the landing page and in the viewer banner.
///
/// Every field has a default so partial JSON documents can be deserialized.
///
/// # Examples
///
/// ```rust
/// # use openapi_viewer::Branding;
/// let branding: Branding = serde_json::from_str(r#"{"title": "Acme API"}"#).unwrap();
/// assert_eq!(branding.title, "Acme API");
/// assert_eq!(branding.product, "Rocket");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Branding {
    /// Heading next to the logo on the landing page. Also used as the page title.
    pub title: Cow<'static, str>,
    /// Sub heading of the landing page.
    pub subtitle: Cow<'static, str>,
    /// Explanatory paragraph above the url form.
    pub description: Cow<'static, str>,
    /// Name of the product linked from the banner.
    pub product: Cow<'static, str>,
    /// Short slogan shown in the banner and the footer.
    pub tagline: Cow<'static, str>,
    /// Site linked from the banner and the footer.
    pub site_url: Cow<'static, str>,
    /// Text of the footer link to [`Branding::site_url`].
    pub site_label: Cow<'static, str>,
    /// Logo file name within the embedded assets.
    pub logo: Cow<'static, str>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            title: Cow::Borrowed("Rocket API"),
            subtitle: Cow::Borrowed("OpenAPI Documentation Viewer"),
            description: Cow::Borrowed(
                "Visualize and explore your API documentation with our Swagger UI integration. \
                 Simply enter your OpenAPI schema URL below to get started.",
            ),
            product: Cow::Borrowed("Rocket"),
            tagline: Cow::Borrowed("Build your backend with Rocket."),
            site_url: Cow::Borrowed("https://rocketapi.net"),
            site_label: Cow::Borrowed("rocketapi.net"),
            logo: Cow::Borrowed("logo.svg"),
        }
    }
}
