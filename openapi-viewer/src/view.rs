/// Page rendered for a request. Selected purely from the submitted url.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    /// No url was submitted. Shows the informational page with the url form.
    Landing,
    /// Url was submitted. Shows the banner and Swagger UI pointed at the url.
    Viewer {
        /// Decoded url of the OpenAPI document handed to Swagger UI.
        url: &'a str,
    },
}

impl<'a> View<'a> {
    /// Select [`View`] for the submitted url. Empty url always selects [`View::Landing`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use openapi_viewer::View;
    /// assert_eq!(View::select(""), View::Landing);
    /// assert_eq!(View::select("/openapi.json"), View::Viewer { url: "/openapi.json" });
    /// ```
    pub fn select(submitted_url: &'a str) -> Self {
        if submitted_url.is_empty() {
            Self::Landing
        } else {
            Self::Viewer { url: submitted_url }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_url_is_still_a_url() {
        assert_eq!(View::select(" "), View::Viewer { url: " " });
    }
}
