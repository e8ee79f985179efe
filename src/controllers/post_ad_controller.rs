// classifieds/src/controllers/post_ad_controller.rs
use actix_multipart::Multipart;
use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tera::Context;
use tracing::{debug, error, info, warn};

use crate::configs::category_fields::MAX_IMAGES;
use crate::configs::initializer::AppState;
use crate::error::ClassifiedsError;
use crate::form::{FormData, PostAdFlow};
use crate::helpers::form_helper::{build_form_view, field_bindings};
use crate::helpers::listing_helper::{
    category_icon, find_category, is_known_category, main_category_views, slug_to_title, subcategory_views,
};
use crate::helpers::template_helper::{add_flash_messages, create_base_context, render_404, render_template};
use crate::helpers::upload_helper::{read_post_ad_payload, IMAGES_FIELD};
use crate::locale::{locale_from_session, LocaleContext};
use crate::models::Category;

pub const POSTED_MARKER: &str = "posted";

#[derive(Debug, Deserialize)]
pub struct CategoryStepQuery {
    pub category: Option<i64>,
    pub success: Option<String>,
}

#[derive(Debug, Serialize)]
struct CategoryBadge {
    name: String,
    slug: String,
    icon: String,
}

impl CategoryBadge {
    fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            icon: category_icon(&category.slug, &category.name).to_string(),
        }
    }

    /// For slugs missing from the category list.
    fn from_slug(slug: &str) -> Self {
        let name = slug_to_title(slug);
        Self {
            icon: category_icon(slug, &name).to_string(),
            name,
            slug: slug.to_string(),
        }
    }
}

/// GET /post-ad - category selection step
pub async fn category_step(
    session: Session,
    state: web::Data<AppState>,
    query: web::Query<CategoryStepQuery>,
) -> impl Responder {
    let locale = locale_from_session(&session);
    let categories = state.api.fetch_categories().await;

    let selected = query
        .category
        .and_then(|id| categories.iter().find(|c| c.id == id));

    if let Some(category) = selected {
        let has_children = categories.iter().any(|c| c.parent_id == Some(category.id));
        if !has_children {
            return HttpResponse::SeeOther()
                .append_header(("Location", format!("/post-ad/{}", category.slug)))
                .finish();
        }
    }

    let mut ctx = create_base_context(&locale);
    ctx.insert(
        "main_categories",
        &main_category_views(&categories, state.registry(), selected.map(|c| c.id)),
    );
    match selected {
        Some(category) => {
            ctx.insert("selected_category", &CategoryBadge::from_category(category));
            ctx.insert("subcategories", &subcategory_views(&categories, state.registry(), category.id));
        }
        None => ctx.insert("subcategories", &Vec::<Category>::new()),
    }

    if query.success.as_deref() == Some(POSTED_MARKER) {
        ctx = add_flash_messages(ctx, vec![("success", locale.text.success_message)]);
    }

    render_template("categories.html.tera", ctx).await
}

fn form_context(categories: &[Category], flow: &PostAdFlow, slug: &str, locale: &LocaleContext) -> Context {
    let mut ctx = create_base_context(locale);

    match find_category(categories, slug) {
        Some(category) => {
            ctx.insert("category", &CategoryBadge::from_category(category));
            if let Some(parent) = category
                .parent_id
                .and_then(|id| categories.iter().find(|c| c.id == id))
            {
                ctx.insert("parent", &CategoryBadge::from_category(parent));
            }
        }
        None => ctx.insert("category", &CategoryBadge::from_slug(slug)),
    }
    ctx.insert("form", &build_form_view(flow, locale));
    ctx.insert("images_field", IMAGES_FIELD);
    ctx.insert("max_images", &MAX_IMAGES);
    ctx
}

/// GET /post-ad/{slug} - form step
pub async fn form_step(
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let locale = locale_from_session(&session);
    let slug = path.into_inner();

    let categories = state.api.fetch_categories().await;
    if !is_known_category(&categories, state.registry(), &slug) {
        debug!("Unknown category '{}' requested", slug);
        return render_404(&locale).await;
    }

    let mut flow = PostAdFlow::new();
    state.resolver.load_into(&mut flow, &slug).await;
    debug!("Form step for '{}' using {:?} fields", slug, flow.resolved().source());

    render_template("post_ad.html.tera", form_context(&categories, &flow, &slug, &locale)).await
}

/// POST /post-ad/{slug} - validate and submit
pub async fn submit_ad(
    session: Session,
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, ClassifiedsError> {
    let locale = locale_from_session(&session);
    let slug = path.into_inner();

    let categories = state.api.fetch_categories().await;
    if !is_known_category(&categories, state.registry(), &slug) {
        warn!("Post for unknown category '{}' rejected", slug);
        return Ok(render_404(&locale).await);
    }

    let posted = read_post_ad_payload(payload).await?;

    let mut flow = PostAdFlow::new();
    state.resolver.load_into(&mut flow, &slug).await;

    let bindings = field_bindings(flow.resolved());
    let form = FormData::from_submission(&posted.fields, bindings.iter().map(|(name, kind)| (name.as_str(), *kind)));
    flow.set_form(form);

    match flow.submit(&locale) {
        Some(submission) => {
            let submission = submission.with_images(posted.images);
            tokio::time::sleep(state.config.submit_delay).await;
            match serde_json::to_string(&submission) {
                Ok(payload) => info!("📨 Ad submitted: {}", payload),
                Err(e) => error!("Failed to serialize submission {}: {}", submission.reference, e),
            }
            flow.finish_submission();

            Ok(HttpResponse::SeeOther()
                .append_header(("Location", format!("/post-ad?success={}", POSTED_MARKER)))
                .finish())
        }
        None => {
            warn!("Rejected post for '{}' with {} errors", slug, flow.errors().len());
            let ctx = form_context(&categories, &flow, &slug, &locale);
            let mut response = render_template("post_ad.html.tera", ctx).await;
            if response.status().is_success() {
                *response.status_mut() = StatusCode::UNPROCESSABLE_ENTITY;
            }
            Ok(response)
        }
    }
}
