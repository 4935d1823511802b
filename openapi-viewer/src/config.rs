//! Swagger UI options of the viewer page.
//!
//! There are 3 configuration methods [`EmptyConfig`], [`FileConfig`] and [`FnOnce`] closure config.
//! The loaded options are merged into the object passed to `SwaggerUIBundle`. Keys `url` and
//! `dom_id` are always set by the viewer and cannot be overridden.
//!
//! * [All supported Swagger UI configuration options][swagger_config].
//!
//! **Note!** There is no validity check for configuration options and all options provided are
//! serialized as is to the Swagger UI.
//!
//! [swagger_config]: <https://swagger.io/docs/open-source-tools/swagger-ui/usage/configuration/>

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::Error;

/// Env variable used by [`FileConfig`] to locate the config file.
pub const CONFIG_FILE_ENV: &str = "OPENAPI_VIEWER_SWAGGER_CONFIG_FILE";

/// Trait defines configuration options loading for the Swagger UI of the viewer page.
///
/// # Examples
///
/// _**Using [`FnOnce`] closure config.**_
/// ```rust
/// # use openapi_viewer::DocsViewer;
/// # use serde_json::json;
/// let viewer = DocsViewer::with_config(|| json!({ "deepLinking": true })).unwrap();
/// ```
///
/// _**Using [`FileConfig`].**_
/// ```no_run
/// # use openapi_viewer::{DocsViewer, FileConfig};
/// let viewer = DocsViewer::with_config(FileConfig)?;
/// # Ok::<(), openapi_viewer::Error>(())
/// ```
pub trait Config {
    /// Implementor must implement the logic which loads the configuration of choice and converts it
    /// to serde's [`serde_json::Value`].
    fn load(self) -> Result<Value, Error>;
}

impl<S: Serialize, F: FnOnce() -> S> Config for F {
    fn load(self) -> Result<Value, Error> {
        Ok(json!(self()))
    }
}

/// Is the default configuration and serializes to empty JSON object _`{}`_.
pub struct EmptyConfig;

impl Config for EmptyConfig {
    fn load(self) -> Result<Value, Error> {
        Ok(json!({}))
    }
}

/// Load configuration from a JSON file named by the _**`OPENAPI_VIEWER_SWAGGER_CONFIG_FILE`**_ env
/// variable. The path is relative to the runtime directory of the application.
///
/// ```bash
/// OPENAPI_VIEWER_SWAGGER_CONFIG_FILE=swagger.config.json openapi-viewer-server
/// ```
pub struct FileConfig;

impl Config for FileConfig {
    fn load(self) -> Result<Value, Error> {
        let path = env::var(CONFIG_FILE_ENV).map_err(|_| Error::MissingEnv(CONFIG_FILE_ENV))?;

        PathConfig(path).load()
    }
}

/// Load configuration from a JSON file at given path.
pub struct PathConfig<P: AsRef<Path>>(pub P);

impl<P: AsRef<Path>> Config for PathConfig<P> {
    fn load(self) -> Result<Value, Error> {
        read_json_file(self.0)
    }
}

/// Read and deserialize JSON file at `path`.
pub fn read_json_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge viewer managed keys over user options. Non object options are replaced.
pub(crate) fn swagger_options(options: &Value, url: &str) -> Value {
    let mut merged = match options {
        Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    merged.insert("url".to_string(), Value::from(url));
    merged.insert("dom_id".to_string(), Value::from("#swagger-ui"));

    Value::Object(merged)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn closure_config_serializes_value() {
        let config = (|| json!({ "deepLinking": true })).load().unwrap();

        assert_eq!(config, json!({ "deepLinking": true }));
    }

    #[test]
    fn empty_config_is_empty_object() {
        assert_eq!(EmptyConfig.load().unwrap(), json!({}));
    }

    #[test]
    fn path_config_reads_json_file() {
        let path =
            env::temp_dir().join(format!("openapi-viewer-config-{}.json", std::process::id()));
        File::create(&path)
            .and_then(|mut file| file.write_all(br#"{"tryItOutEnabled": false}"#))
            .unwrap();

        let config = PathConfig(&path).load();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.unwrap(), json!({ "tryItOutEnabled": false }));
    }

    #[test]
    fn path_config_reports_missing_file() {
        let error = PathConfig("does/not/exist.json").load().unwrap_err();

        assert!(matches!(error, Error::Io { .. }), "unexpected error: {error}");
    }

    #[test]
    fn viewer_managed_keys_win() {
        let options = swagger_options(
            &json!({ "url": "/other.json", "dom_id": "#x", "deepLinking": true }),
            "/a.json",
        );

        assert_eq!(
            options,
            json!({ "url": "/a.json", "dom_id": "#swagger-ui", "deepLinking": true })
        );
    }

    #[test]
    fn non_object_options_are_replaced() {
        assert_eq!(
            swagger_options(&json!([1, 2]), "/a.json"),
            json!({ "url": "/a.json", "dom_id": "#swagger-ui" })
        );
    }
}
