// classifieds/src/controllers/locale_controller.rs
use actix_session::Session;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::ClassifiedsError;
use crate::locale::{Locale, LOCALE_SESSION_KEY};

#[derive(Debug, Deserialize)]
pub struct LocaleForm {
    pub locale: String,
}

/// Only same-site paths are followed back; anything else lands on `/`.
fn redirect_target(req: &HttpRequest) -> String {
    req.headers()
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| {
            let host = req.connection_info().host().to_string();
            let path = referer
                .strip_prefix("http://")
                .or_else(|| referer.strip_prefix("https://"))
                .and_then(|rest| rest.strip_prefix(host.as_str()))
                .or_else(|| referer.starts_with('/').then_some(referer))?;
            (path.starts_with('/') && !path.starts_with("//")).then(|| path.to_string())
        })
        .unwrap_or_else(|| "/".to_string())
}

/// POST /locale
pub async fn switch_locale(
    session: Session,
    req: HttpRequest,
    form: web::Form<LocaleForm>,
) -> Result<HttpResponse, ClassifiedsError> {
    let locale = Locale::from_code(&form.locale);
    session.insert(LOCALE_SESSION_KEY, locale.code()).map_err(|err| {
        error!("Session insertion failed: {}", err);
        ClassifiedsError::InternalError
    })?;
    info!("Locale switched to {}", locale.code());

    Ok(HttpResponse::SeeOther()
        .append_header((header::LOCATION, redirect_target(&req)))
        .finish())
}
