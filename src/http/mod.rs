use actix_web::HttpResponse;
use serde_json::json;

use crate::db::StoreError;

pub mod health;
pub mod leaderboard;
pub mod matches;
pub mod members;
pub mod players;
pub mod routes;

/// 502 for a write the remote service rejected or never answered.
fn write_failure(what: &str, err: &StoreError) -> HttpResponse {
    log::error!("{what} failed: {err}");
    HttpResponse::BadGateway().json(json!({
        "error": format!("{what} failed, please try again"),
    }))
}

fn bad_request(msg: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": msg }))
}
