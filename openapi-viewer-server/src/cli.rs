use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use openapi_viewer::{config, Branding, DocsViewer, EmptyConfig, PathConfig, QueryMode};

use crate::app::{HEALTH_PATH, OPENAPI_PATH};

/// Serve a landing page asking for an OpenAPI document url and a Swagger UI viewer for it.
#[derive(Debug, Parser)]
#[command(name = "openapi-viewer-server", version, about)]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, env = "OPENAPI_VIEWER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "OPENAPI_VIEWER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Path the viewer page is served from.
    #[arg(long, env = "OPENAPI_VIEWER_PATH", default_value = "/")]
    pub path: String,

    /// JSON file overriding texts and links of the landing page and the banner.
    #[arg(long, env = "OPENAPI_VIEWER_BRANDING_FILE")]
    pub branding: Option<PathBuf>,

    /// JSON file with Swagger UI configuration options.
    #[arg(long, env = "OPENAPI_VIEWER_SWAGGER_CONFIG_FILE")]
    pub swagger_config: Option<PathBuf>,

    /// Base url Swagger UI bundle is loaded from.
    #[arg(long, env = "OPENAPI_VIEWER_CDN")]
    pub cdn: Option<String>,

    /// Only accept the document url from the `url` query parameter.
    #[arg(long, env = "OPENAPI_VIEWER_STRICT_QUERY")]
    pub strict_query: bool,
}

impl Cli {
    /// Socket address the server binds to.
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the [`DocsViewer`] described by the command line.
    pub fn viewer(&self) -> Result<DocsViewer> {
        self.validate_path()?;

        let viewer = match &self.swagger_config {
            Some(path) => DocsViewer::with_config(PathConfig(path))
                .with_context(|| format!("loading Swagger UI config {}", path.display()))?,
            None => DocsViewer::with_config(EmptyConfig)?,
        };

        let branding = match &self.branding {
            Some(path) => config::read_json_file::<Branding, _>(path)
                .with_context(|| format!("loading branding {}", path.display()))?,
            None => Branding::default(),
        };

        let query_mode = if self.strict_query {
            QueryMode::Strict
        } else {
            QueryMode::Lenient
        };

        let mut viewer = viewer
            .path(self.path.clone())
            .branding(branding)
            .query_mode(query_mode);
        if let Some(cdn) = &self.cdn {
            viewer = viewer.cdn(cdn.trim_end_matches('/').to_string());
        }

        Ok(viewer)
    }

    fn validate_path(&self) -> Result<()> {
        let path = self.path.as_str();
        if !path.starts_with('/') {
            bail!("viewer path `{path}` must start with `/`");
        }
        if path.contains(['{', '}', '*']) {
            bail!("viewer path `{path}` must not contain route parameters or wildcards");
        }

        let trimmed = path.trim_end_matches('/');
        let reserved = [HEALTH_PATH, OPENAPI_PATH];
        let overlaps = |endpoint: &&str| {
            *endpoint == trimmed || endpoint.starts_with(&format!("{trimmed}/"))
        };
        if !trimmed.is_empty() && reserved.iter().any(overlaps) {
            bail!("viewer path `{path}` overlaps server endpoints {reserved:?}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["openapi-viewer-server"]).unwrap();

        assert_eq!(cli.address(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(cli.path, "/");
        assert!(!cli.strict_query);
        assert_eq!(cli.viewer().unwrap().page_path(), "/");
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::try_parse_from([
            "openapi-viewer-server",
            "--host",
            "127.0.0.1",
            "-p",
            "3000",
            "--path",
            "/docs",
            "--cdn",
            "https://cdn.example.com/swagger/",
            "--strict-query",
        ])
        .unwrap();

        assert_eq!(cli.address(), SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert!(cli.strict_query);

        let viewer = cli.viewer().unwrap();
        assert_eq!(viewer.submit_path(), "/docs/submit");
        assert!(viewer.render("?spec=/a.json").contains("<form"));
        assert!(viewer
            .to_viewer_html("/a.json")
            .contains("https://cdn.example.com/swagger/swagger-ui-bundle.js"));
    }

    #[test]
    fn reject_relative_path() {
        let cli = Cli::try_parse_from(["openapi-viewer-server", "--path", "docs"]).unwrap();

        assert!(cli.viewer().is_err());
    }

    #[test]
    fn reject_path_with_route_syntax() {
        for path in ["/docs/{*rest}", "/{id}", "/docs*"] {
            let cli = Cli::try_parse_from(["openapi-viewer-server", "--path", path]).unwrap();

            let error = cli.viewer().unwrap_err();
            assert!(
                error.to_string().contains("route parameters or wildcards"),
                "path: {path}"
            );
        }
    }

    #[test]
    fn reject_path_overlapping_server_endpoints() {
        for path in ["/healthz", "/api-docs", "/api-docs/"] {
            let cli = Cli::try_parse_from(["openapi-viewer-server", "--path", path]).unwrap();

            assert!(cli.viewer().is_err(), "path: {path}");
        }
    }

    #[test]
    fn report_missing_branding_file() {
        let cli = Cli::try_parse_from([
            "openapi-viewer-server",
            "--branding",
            "does/not/exist.json",
        ])
        .unwrap();

        let error = cli.viewer().unwrap_err();
        assert!(format!("{error:#}").contains("loading branding does/not/exist.json"));
    }
}
