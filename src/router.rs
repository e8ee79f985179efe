// classifieds/src/router.rs
use actix_web::{web, Scope};
use tracing::info;

use crate::controllers::api_controller::{category_fields, featured_ads, list_categories};
use crate::controllers::asset_controller::serve_asset;
use crate::controllers::home_controller::home;
use crate::controllers::locale_controller::switch_locale;
use crate::controllers::post_ad_controller::{category_step, form_step, submit_ad};
use crate::health::health_check;

pub fn register_routes() -> Scope {
    info!("🔧 Registering classifieds routes");

    web::scope("")
        // ===========================
        // PAGES
        // ===========================
        .route("/", web::get().to(home))
        .route("/post-ad", web::get().to(category_step))
        .route("/post-ad/{slug}", web::get().to(form_step))
        .route("/post-ad/{slug}", web::post().to(submit_ad))
        .route("/locale", web::post().to(switch_locale))
        // ===========================
        // JSON API
        // ===========================
        .service(
            web::scope("/api")
                .route("/categories", web::get().to(list_categories))
                .route("/category-fields/{slug}", web::get().to(category_fields))
                .route("/ads/featured", web::get().to(featured_ads)),
        )
        // ===========================
        // ASSETS & HEALTH
        // ===========================
        .route("/assets/{file:.*}", web::get().to(serve_asset))
        .route("/health", web::get().to(health_check))
}
