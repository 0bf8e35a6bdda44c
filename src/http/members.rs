//! Member directory.

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;

use crate::db::{player_repo, DataStore};
use crate::ranking::{avatar_url, is_recently_joined, win_rate};

#[derive(Serialize)]
pub struct MemberCard {
    pub id: String,
    pub name: String,
    pub score: i32,
    pub games: u32,
    pub win_rate: u32,
    pub join_date: Option<String>,
    pub avatar_url: String,
    /// Joined within the last 30 days.
    pub is_new: bool,
}

/// GET /api/members
#[get("/members")]
pub async fn members(store: web::Data<DataStore>) -> impl Responder {
    let now = Utc::now();
    let cards: Vec<MemberCard> = player_repo::list_all(&store)
        .await
        .into_iter()
        .map(|p| MemberCard {
            avatar_url: avatar_url(&p).to_owned(),
            is_new: is_recently_joined(&p, now),
            win_rate: win_rate(&p),
            games: p.games,
            id: p.id,
            name: p.name,
            score: p.score,
            join_date: p.join_date,
        })
        .collect();

    HttpResponse::Ok().json(cards)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(members);
}
