//! Simple liveness probe

use actix_web::{get, web, HttpResponse, Responder};
use serde_json::json;

use crate::db::DataStore;
use crate::metrics;

#[get("/healthz")]
pub async fn healthz(store: web::Data<DataStore>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "data_source": store.mode_label(),
    }))
}

/// Data-store counters in Prometheus text format.
#[get("/healthz/metrics")]
pub async fn store_metrics() -> impl Responder {
    match metrics::render_store_metrics() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            log::error!("encoding store metrics: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz).service(store_metrics);
}
