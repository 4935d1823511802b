use std::path::PathBuf;

/// Errors produced while loading viewer configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Environment variable naming a config file is not set.
    #[error("missing `{0}` env variable, cannot load file config")]
    MissingEnv(&'static str),
    /// Config file could not be opened or read.
    #[error("config file `{}` is not readable: {source}", .path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Config file content is not valid JSON for the expected type.
    #[error("config file `{}` cannot be parsed: {source}", .path.display())]
    Json {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
