//! Match results: listing and registration.

use actix_web::{get, post, web, HttpResponse, Responder};

use crate::db::models::NewMatch;
use crate::db::{match_repo, DataStore};
use crate::http::{bad_request, write_failure};

/// GET /api/matches
#[get("/matches")]
pub async fn list(store: web::Data<DataStore>) -> impl Responder {
    HttpResponse::Ok().json(match_repo::list_all(&store).await)
}

/// POST /api/matches
#[post("/matches")]
pub async fn register(info: web::Json<NewMatch>, store: web::Data<DataStore>) -> impl Responder {
    let mut input = info.into_inner();
    input.player1_id = input.player1_id.trim().to_string();
    input.player2_id = input.player2_id.trim().to_string();

    if input.player1_id.is_empty() || input.player2_id.is_empty() {
        return bad_request("both players must be selected");
    }
    if input.player1_id == input.player2_id {
        return bad_request("a player cannot play against themselves");
    }

    match match_repo::create(&store, input).await {
        Ok(m) => HttpResponse::Created().json(m),
        Err(e) => write_failure("match registration", &e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(register);
}
