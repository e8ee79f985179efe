// classifieds/src/controllers/asset_controller.rs
use actix_web::http::header;
use actix_web::{web, HttpResponse};
use rust_embed::RustEmbed;
use tracing::debug;

use crate::error::ClassifiedsError;

#[derive(RustEmbed)]
#[folder = "src/assets/"]
pub struct StaticAssets;

/// GET /assets/{file}
pub async fn serve_asset(path: web::Path<String>) -> Result<HttpResponse, ClassifiedsError> {
    let file = path.into_inner();
    let asset = StaticAssets::get(&file).ok_or_else(|| {
        debug!("Unknown asset requested: {}", file);
        ClassifiedsError::NotFound
    })?;
    let mime = mime_guess::from_path(&file).first_or_octet_stream();

    Ok(HttpResponse::Ok()
        .content_type(mime.as_ref())
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(asset.data.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_is_embedded() {
        assert!(StaticAssets::get("style.css").is_some());
        assert!(StaticAssets::get("missing.js").is_none());
    }
}
