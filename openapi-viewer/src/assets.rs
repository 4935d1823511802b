//! Static files embedded into the binary and served next to the viewer pages.

use std::borrow::Cow;

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "res/assets/"]
struct Assets;

/// Represents servable embedded file. Returned by [`serve`].
#[non_exhaustive]
pub struct AssetFile {
    /// Content of the file as [`Cow`] [`slice`] of bytes.
    pub bytes: Cow<'static, [u8]>,
    /// Content type of the file e.g `"image/svg+xml"`.
    pub content_type: String,
}

/// Get embedded file by its path relative to the assets root.
///
/// Returns `None` when no such file is embedded.
///
/// ```rust
/// let logo = openapi_viewer::assets::serve("logo.svg").unwrap();
/// assert_eq!(logo.content_type, "image/svg+xml");
/// ```
pub fn serve(path: &str) -> Option<AssetFile> {
    let path = path.trim_start_matches('/');
    let Some(file) = Assets::get(path) else {
        tracing::debug!(path, "asset not found");
        return None;
    };

    Some(AssetFile {
        bytes: file.data,
        content_type: mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_logo_with_guessed_content_type() {
        let logo = serve("/logo.svg").expect("logo must be embedded");

        assert_eq!(logo.content_type, "image/svg+xml");
        assert!(logo.bytes.starts_with(b"<svg"));
    }

    #[test]
    fn serve_unknown_file() {
        assert!(serve("missing.js").is_none());
        assert!(serve("").is_none());
    }
}
