// classifieds/src/controllers/home_controller.rs
use actix_session::Session;
use actix_web::{web, Responder};
use tracing::debug;

use crate::configs::initializer::AppState;
use crate::helpers::listing_helper::main_category_views;
use crate::helpers::template_helper::{create_base_context, render_404, render_template};
use crate::locale::locale_from_session;
use crate::services::mock_data::DEFAULT_FEATURED_LIMIT;

/// GET / - main categories and the featured feed
pub async fn home(session: Session, state: web::Data<AppState>) -> impl Responder {
    let locale = locale_from_session(&session);

    let (categories, featured_ads) = futures::join!(
        state.api.fetch_categories(),
        state.ads.featured_ads(DEFAULT_FEATURED_LIMIT)
    );
    debug!("Home page with {} categories, {} featured ads", categories.len(), featured_ads.len());

    let mut ctx = create_base_context(&locale);
    ctx.insert("categories", &main_category_views(&categories, state.registry(), None));
    ctx.insert("featured_ads", &featured_ads);

    render_template("home.html.tera", ctx).await
}

pub async fn not_found(session: Session) -> impl Responder {
    render_404(&locale_from_session(&session)).await
}
