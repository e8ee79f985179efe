// classifieds/src/health.rs
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::configs::initializer::AppState;
use crate::{NAME, VERSION};

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "name": NAME,
        "version": VERSION,
        "fieldFamilies": state.registry().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
