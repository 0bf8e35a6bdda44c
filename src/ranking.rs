//! Ranking order, win rate and per-player match views.
//!
//! Scores are whatever the store holds; recording a match does not move them.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::db::fixtures::DEFAULT_AVATAR_URL;
use crate::db::models::{Match, Player, PlayerSummary};

/// How long a member counts as newly joined.
pub const NEW_MEMBER_WINDOW_DAYS: i64 = 30;

/// Score descending; equal scores by id ascending. Integer ids compare as
/// numbers and sort before any other id.
pub fn sort_ranking(players: &mut [Player]) {
    players.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| id_key(&a.id).cmp(&id_key(&b.id)))
    });
}

fn id_key(id: &str) -> (bool, Option<i64>, &str) {
    let numeric = id.parse::<i64>().ok();
    (numeric.is_none(), numeric, id)
}

/// The first `n` players of the ranking.
pub fn top(mut players: Vec<Player>, n: usize) -> Vec<Player> {
    sort_ranking(&mut players);
    players.truncate(n);
    players
}

/// Whole-percent win rate; 0 for a player without games.
pub fn win_rate(player: &Player) -> u32 {
    if player.games == 0 {
        return 0;
    }
    (f64::from(player.wins) / f64::from(player.games) * 100.0).round() as u32
}

pub fn is_recently_joined(player: &Player, now: DateTime<Utc>) -> bool {
    player.created_at > now - Duration::days(NEW_MEMBER_WINDOW_DAYS)
}

pub fn avatar_url(player: &Player) -> &str {
    player
        .profile_image
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_AVATAR_URL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// A match seen from one participant's side.
#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub match_id: String,
    pub opponent_id: String,
    pub opponent: Option<PlayerSummary>,
    pub own_score: u32,
    pub opponent_score: u32,
    pub outcome: Outcome,
    pub match_date: DateTime<Utc>,
}

/// View `m` from `player_id`'s side. A player not listed as player 1 is
/// taken to be player 2.
pub fn perspective(m: &Match, player_id: &str) -> MatchView {
    let is_player1 = m.player1_id == player_id;
    let (own_score, opponent_score, opponent_id, opponent) = if is_player1 {
        (m.player1_score, m.player2_score, &m.player2_id, &m.player2)
    } else {
        (m.player2_score, m.player1_score, &m.player1_id, &m.player1)
    };

    let outcome = match own_score.cmp(&opponent_score) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Less => Outcome::Loss,
        std::cmp::Ordering::Equal => Outcome::Draw,
    };

    MatchView {
        match_id: m.id.clone(),
        opponent_id: opponent_id.clone(),
        opponent: opponent.clone(),
        own_score,
        opponent_score,
        outcome,
        match_date: m.match_date,
    }
}
