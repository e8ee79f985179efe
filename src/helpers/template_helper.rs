// classifieds/src/helpers/template_helper.rs
use actix_web::HttpResponse;
use chrono::Datelike;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tera::{Context, Tera};
use tracing::error;

use crate::helpers::listing_helper::price_filter;
use crate::locale::{Locale, LocaleContext};

const TEMPLATE_FILES: &[(&str, &str)] = &[
    ("macros.html.tera", include_str!("../templates/macros.html.tera")),
    ("layout.html.tera", include_str!("../templates/layout.html.tera")),
    ("header.html.tera", include_str!("../templates/header.html.tera")),
    ("footer.html.tera", include_str!("../templates/footer.html.tera")),
    ("home.html.tera", include_str!("../templates/home.html.tera")),
    ("categories.html.tera", include_str!("../templates/categories.html.tera")),
    ("post_ad.html.tera", include_str!("../templates/post_ad.html.tera")),
    ("errors/404.html.tera", include_str!("../templates/errors/404.html.tera")),
    ("errors/500.html.tera", include_str!("../templates/errors/500.html.tera")),
];

pub static CLASSIFIEDS_TEMPLATES: Lazy<Arc<Tera>> = Lazy::new(|| {
    let mut tera = Tera::default();

    for (name, content) in TEMPLATE_FILES {
        tera.add_raw_template(name, content)
            .unwrap_or_else(|e| panic!("Failed to add {}: {}", name, e));
    }

    // Submitted values are echoed back into the form.
    tera.autoescape_on(vec![".html.tera"]);
    tera.register_filter("price", price_filter);
    Arc::new(tera)
});

pub async fn render_template(template_name: &str, ctx: Context) -> HttpResponse {
    let tera = Arc::clone(&CLASSIFIEDS_TEMPLATES);
    match tera.render(template_name, &ctx) {
        Ok(html) => HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html),
        Err(err) => {
            error!("Template render error for {}: {:?}", template_name, err);
            let mut error_ctx = ctx;
            error_ctx.insert("error_message", &err.to_string());

            let fallback_html = tera
                .render("errors/500.html.tera", &error_ctx)
                .unwrap_or_else(|_| format!(
                    "<h1>Internal Server Error</h1><p>Failed to render template: {}</p>",
                    template_name
                ));
            HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(fallback_html)
        }
    }
}

pub async fn render_404(locale: &LocaleContext) -> HttpResponse {
    let tera = Arc::clone(&CLASSIFIEDS_TEMPLATES);
    let ctx = create_base_context(locale);
    let html = tera
        .render("errors/404.html.tera", &ctx)
        .unwrap_or_else(|_| "<h1>404 - Page Not Found</h1>".to_string());
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

pub async fn render_500(locale: &LocaleContext, error_message: Option<&str>) -> HttpResponse {
    let tera = Arc::clone(&CLASSIFIEDS_TEMPLATES);
    let mut ctx = create_base_context(locale);
    ctx.insert("error_message", &error_message.unwrap_or("An internal server error occurred."));

    let html = tera
        .render("errors/500.html.tera", &ctx)
        .unwrap_or_else(|_| "<h1>500 - Internal Server Error</h1>".to_string());
    HttpResponse::InternalServerError()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Values every page needs: app metadata plus the active language, its
/// direction and its UI strings.
pub fn create_base_context(locale: &LocaleContext) -> Context {
    let other = match locale.locale {
        Locale::En => Locale::Ar,
        Locale::Ar => Locale::En,
    };

    let mut ctx = Context::new();
    ctx.insert("app_name", locale.text.app_name);
    ctx.insert("app_version", env!("CARGO_PKG_VERSION"));
    ctx.insert("current_year", &chrono::Utc::now().year());
    ctx.insert("locale", locale.locale.code());
    ctx.insert("dir", locale.locale.dir());
    ctx.insert("other_locale", other.code());
    ctx.insert("t", locale.text);
    ctx
}

pub fn add_flash_messages(mut context: Context, messages: Vec<(&str, &str)>) -> Context {
    // (level, message) where level is "success", "error", "warning" or "info"
    context.insert("flash_messages", &messages);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_all_templates_parse() {
        let tera = Arc::clone(&CLASSIFIEDS_TEMPLATES);
        for (name, _) in TEMPLATE_FILES {
            assert!(tera.get_template_names().any(|n| n == *name), "missing {}", name);
        }
    }

    #[test]
    fn test_base_context_carries_direction() {
        let ctx = create_base_context(&LocaleContext::new(Locale::Ar));
        let json = ctx.into_json();
        assert_eq!(json["dir"], "rtl");
        assert_eq!(json["other_locale"], "en");
        assert_eq!(json["t"]["submit"], "انشر الآن");
    }

    #[actix_rt::test]
    async fn test_404_page_is_localized() {
        let response = render_404(&LocaleContext::new(Locale::Ar)).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body()).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("الصفحة غير موجودة"));
    }
}
