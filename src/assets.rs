use rust_embed::RustEmbed;

/// Embedded static web assets (stylesheet)
#[derive(RustEmbed)]
#[folder = "static/"]
#[prefix = "static/"]
pub struct StaticAssets;

impl StaticAssets {
    /// Get a static asset by path
    pub fn get_asset(path: &str) -> Option<rust_embed::EmbeddedFile> {
        Self::get(path)
    }

    /// Get the content type for a given file extension
    pub fn get_content_type(path: &str) -> &'static str {
        match path.split('.').next_back() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css; charset=utf-8",
            Some("js") => "application/javascript; charset=utf-8",
            Some("json") => "application/json; charset=utf-8",
            Some("png") => "image/png",
            Some("svg") => "image/svg+xml; charset=utf-8",
            Some("ico") => "image/x-icon",
            _ => "application/octet-stream",
        }
    }
}
