//! Fixed demo data served whenever the remote table service is unavailable.
//!
//! The store lives inside the adapter instance, so every `DataStore` starts
//! from the same seed. Writes only touch process memory and are gone after a
//! restart.

use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;

use crate::db::models::{
    Match, MatchInsert, Player, PlayerInsert, PlayerSummary, PlayerUpdate,
};

const PORTRAIT_BASE: &str = "https://readdy.ai/api/search-image";

/// Shown for players without a `profile_image`.
pub const DEFAULT_AVATAR_URL: &str = "https://readdy.ai/api/search-image?query=professional%20athlete%20portrait%2C%20confident%20expression%2C%20sport%20uniform%2C%20high%20quality%20headshot%2C%20clean%20background%2C%20realistic%20photography%20style&width=120&height=120&seq=profiledefault&orientation=squarish";

fn portrait(subject: &str, seq: &str) -> String {
    format!(
        "{PORTRAIT_BASE}?query=professional%20{subject}%20athlete%20portrait%2C%20confident%20expression%2C%20sport%20uniform%2C%20high%20quality%20headshot%2C%20clean%20background%2C%20realistic%20photography%20style&width=120&height=120&seq={seq}&orientation=squarish"
    )
}

/// The six seed players, all stamped with `created_at = now`.
pub fn seed_players(now: DateTime<Utc>) -> Vec<Player> {
    [
        ("1", "Tanaka Taro", 2150, 45, 32, 13, "male", "Aug 2023"),
        ("2", "Sato Hanako", 2080, 38, 28, 10, "female", "Sep 2023"),
        ("3", "Yamada Jiro", 2020, 42, 26, 16, "male", "Jul 2023"),
        ("4", "Suzuki Misaki", 1980, 35, 22, 13, "female", "Oct 2023"),
        ("5", "Takahashi Kenta", 1950, 40, 24, 16, "male", "Jun 2023"),
        ("6", "Nakamura Ai", 1920, 33, 20, 13, "female", "Nov 2023"),
    ]
    .into_iter()
    .map(|(id, name, score, games, wins, losses, subject, joined)| Player {
        id: id.to_string(),
        name: name.to_string(),
        score,
        games,
        wins,
        losses,
        profile_image: Some(portrait(subject, &format!("profile{id}"))),
        join_date: Some(joined.to_string()),
        created_at: now,
    })
    .collect()
}

fn played(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("fixture match date is valid")
}

/// The two seed matches. They carry participant names but no avatars.
pub fn seed_matches() -> Vec<Match> {
    let summary = |name: &str| {
        Some(PlayerSummary {
            name: name.to_string(),
            profile_image: None,
        })
    };

    vec![
        Match {
            id: "1".into(),
            player1_id: "1".into(),
            player2_id: "2".into(),
            player1_score: 15,
            player2_score: 12,
            match_date: played(2024, 1, 15, 14, 20),
            created_at: None,
            player1: summary("Tanaka Taro"),
            player2: summary("Sato Hanako"),
        },
        Match {
            id: "2".into(),
            player1_id: "2".into(),
            player2_id: "3".into(),
            player1_score: 21,
            player2_score: 18,
            match_date: played(2024, 1, 14, 16, 30),
            created_at: None,
            player1: summary("Sato Hanako"),
            player2: summary("Yamada Jiro"),
        },
    ]
}

pub struct FixtureStore {
    players: RwLock<Vec<Player>>,
    matches: RwLock<Vec<Match>>,
}

impl FixtureStore {
    pub fn seeded() -> Self {
        FixtureStore {
            players: RwLock::new(seed_players(Utc::now())),
            matches: RwLock::new(seed_matches()),
        }
    }

    /// Players in insertion order.
    pub async fn players(&self) -> Vec<Player> {
        self.players.read().await.clone()
    }

    pub async fn player(&self, id: &str) -> Option<Player> {
        self.players.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Append a player with id `len + 1`.
    pub async fn insert_player(&self, row: PlayerInsert) -> Player {
        let mut players = self.players.write().await;
        let player = Player::from_insert((players.len() + 1).to_string(), row);
        players.push(player.clone());
        player
    }

    pub async fn update_player(&self, id: &str, changes: &PlayerUpdate) -> Option<Player> {
        let mut players = self.players.write().await;
        let player = players.iter_mut().find(|p| p.id == id)?;
        changes.apply(player);
        Some(player.clone())
    }

    /// Matches in insertion order.
    pub async fn matches(&self) -> Vec<Match> {
        self.matches.read().await.clone()
    }

    /// Every match the player took part in, insertion order, no cap.
    pub async fn matches_for(&self, player_id: &str) -> Vec<Match> {
        self.matches
            .read()
            .await
            .iter()
            .filter(|m| m.involves(player_id))
            .cloned()
            .collect()
    }

    /// Append a match with id `len + 1`. No participant summaries are attached.
    pub async fn insert_match(&self, row: MatchInsert) -> Match {
        let mut matches = self.matches.write().await;
        let m = Match::from_insert((matches.len() + 1).to_string(), row);
        matches.push(m.clone());
        m
    }
}

impl Default for FixtureStore {
    fn default() -> Self {
        Self::seeded()
    }
}
