//! Player profile, registration and edits.

use actix_web::{get, patch, post, web, HttpResponse, Responder};
use serde::Serialize;

use crate::db::models::{NewPlayer, Player, PlayerUpdate};
use crate::db::{match_repo, player_repo, DataStore};
use crate::http::{bad_request, write_failure};
use crate::ranking::{avatar_url, perspective, win_rate, MatchView};

#[derive(Serialize)]
pub struct Profile {
    pub player: Player,
    pub win_rate: u32,
    pub avatar_url: String,
    pub recent_matches: Vec<MatchView>,
}

/// GET /api/players/{id}
#[get("/players/{id}")]
pub async fn profile(path: web::Path<String>, store: web::Data<DataStore>) -> impl Responder {
    let id = path.into_inner();

    let (player, matches) = tokio::join!(
        player_repo::get_by_id(&store, &id),
        match_repo::list_by_player(&store, &id),
    );

    let Some(player) = player else {
        return HttpResponse::NotFound().json(serde_json::json!({ "error": "player not found" }));
    };

    HttpResponse::Ok().json(Profile {
        win_rate: win_rate(&player),
        avatar_url: avatar_url(&player).to_owned(),
        recent_matches: matches.iter().map(|m| perspective(m, &id)).collect(),
        player,
    })
}

/// POST /api/players
#[post("/players")]
pub async fn create(info: web::Json<NewPlayer>, store: web::Data<DataStore>) -> impl Responder {
    let mut input = info.into_inner();
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return bad_request("name must not be empty");
    }

    match player_repo::create(&store, input).await {
        Ok(player) => HttpResponse::Created().json(player),
        Err(e) => write_failure("player registration", &e),
    }
}

/// PATCH /api/players/{id}
#[patch("/players/{id}")]
pub async fn update(
    path: web::Path<String>,
    info: web::Json<PlayerUpdate>,
    store: web::Data<DataStore>,
) -> impl Responder {
    let id = path.into_inner();
    let changes = info.into_inner();
    if changes.is_empty() {
        return bad_request("nothing to update");
    }
    if changes.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return bad_request("name must not be empty");
    }

    match player_repo::update(&store, &id, &changes).await {
        Ok(Some(player)) => HttpResponse::Ok().json(player),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({ "error": "player not found" })),
        Err(e) => write_failure("player update", &e),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(profile).service(create).service(update);
}
