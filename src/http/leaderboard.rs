// src/http/leaderboard.rs

use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::{models::Player, player_repo, DataStore};
use crate::ranking::{avatar_url, is_recently_joined, top, win_rate};

/// Podium size on the home view.
pub const HOME_TOP: usize = 3;

#[derive(Serialize)]
pub struct RankingEntry {
    /// 1-based position.
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub score: i32,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: u32,
    pub avatar_url: String,
    pub join_date: Option<String>,
    /// Joined within the last 30 days.
    pub is_new: bool,
}

fn entries(players: Vec<Player>, now: DateTime<Utc>) -> Vec<RankingEntry> {
    players
        .into_iter()
        .enumerate()
        .map(|(i, p)| RankingEntry {
            rank: i + 1,
            win_rate: win_rate(&p),
            avatar_url: avatar_url(&p).to_owned(),
            is_new: is_recently_joined(&p, now),
            join_date: p.join_date,
            id: p.id,
            name: p.name,
            score: p.score,
            games: p.games,
            wins: p.wins,
            losses: p.losses,
        })
        .collect()
}

/// GET /api/ranking
#[get("/ranking")]
pub async fn ranking(store: web::Data<DataStore>) -> impl Responder {
    let players = player_repo::list_ranking(&store).await;
    HttpResponse::Ok().json(entries(players, Utc::now()))
}

/// GET /api/home: the top of the ranking.
#[get("/home")]
pub async fn home(store: web::Data<DataStore>) -> impl Responder {
    let players = player_repo::list_ranking(&store).await;
    HttpResponse::Ok().json(entries(top(players, HOME_TOP), Utc::now()))
}

/// Mounts the ranking routes under `/api`
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(ranking).service(home);
}
