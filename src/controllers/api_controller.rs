// classifieds/src/controllers/api_controller.rs
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::debug;

use crate::configs::initializer::AppState;
use crate::error::ClassifiedsError;
use crate::helpers::listing_helper::is_valid_slug;
use crate::services::mock_data::DEFAULT_FEATURED_LIMIT;

pub const MAX_FEATURED_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    pub limit: Option<usize>,
}


/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.api.fetch_categories().await)
}

/// GET /api/category-fields/{slug}
pub async fn category_fields(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ClassifiedsError> {
    let slug = path.into_inner();
    if !is_valid_slug(&slug) {
        return Err(ClassifiedsError::BadRequest(format!("invalid category slug '{}'", slug)));
    }

    let resolved = state.resolver.resolve(&slug).await;
    debug!("API fields for '{}' from {:?}", slug, resolved.source());
    Ok(HttpResponse::Ok().json(resolved))
}

/// GET /api/ads/featured?limit=
pub async fn featured_ads(
    state: web::Data<AppState>,
    query: web::Query<FeaturedQuery>,
) -> Result<HttpResponse, ClassifiedsError> {
    let limit = query.limit.unwrap_or(DEFAULT_FEATURED_LIMIT);
    if limit > MAX_FEATURED_LIMIT {
        return Err(ClassifiedsError::BadRequest(format!(
            "limit must be at most {}",
            MAX_FEATURED_LIMIT
        )));
    }
    Ok(HttpResponse::Ok().json(state.ads.featured_ads(limit).await))
}
