use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::skip_serializing_none;

/// Score every new player starts with.
pub const STARTING_SCORE: i32 = 1500;

/// Row ids are kept as text. Tables keyed by an integer identity column send
/// them as JSON numbers.
fn row_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Int(id) => id.to_string(),
    })
}

/// One row of the `players` table.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    #[serde(deserialize_with = "row_id")]
    pub id: String,
    pub name: String,
    pub score: i32,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn from_insert(id: String, row: PlayerInsert) -> Self {
        Player {
            id,
            name: row.name,
            score: row.score,
            games: row.games,
            wins: row.wins,
            losses: row.losses,
            profile_image: row.profile_image,
            join_date: row.join_date,
            created_at: row.created_at,
        }
    }
}

/// Name and avatar of a match participant, embedded by the remote join.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// One row of the `matches` table, optionally with both participants embedded.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(deserialize_with = "row_id")]
    pub id: String,
    #[serde(deserialize_with = "row_id")]
    pub player1_id: String,
    #[serde(deserialize_with = "row_id")]
    pub player2_id: String,
    pub player1_score: u32,
    pub player2_score: u32,
    pub match_date: DateTime<Utc>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub player1: Option<PlayerSummary>,
    #[serde(default)]
    pub player2: Option<PlayerSummary>,
}

impl Match {
    pub fn from_insert(id: String, row: MatchInsert) -> Self {
        Match {
            id,
            player1_id: row.player1_id,
            player2_id: row.player2_id,
            player1_score: row.player1_score,
            player2_score: row.player2_score,
            match_date: row.match_date,
            created_at: None,
            player1: None,
            player2: None,
        }
    }

    pub fn involves(&self, player_id: &str) -> bool {
        self.player1_id == player_id || self.player2_id == player_id
    }
}

//////////////////////////////////////////////////
// Inputs
//////////////////////////////////////////////////

/// Caller-supplied fields for a new player.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
}

/// Fields to overwrite on an existing player. `None` leaves a field as is.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub score: Option<i32>,
    pub games: Option<u32>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub profile_image: Option<String>,
}

impl PlayerUpdate {
    pub fn is_empty(&self) -> bool {
        *self == PlayerUpdate::default()
    }

    pub fn apply(&self, player: &mut Player) {
        if let Some(name) = &self.name {
            player.name = name.clone();
        }
        if let Some(score) = self.score {
            player.score = score;
        }
        if let Some(games) = self.games {
            player.games = games;
        }
        if let Some(wins) = self.wins {
            player.wins = wins;
        }
        if let Some(losses) = self.losses {
            player.losses = losses;
        }
        if let Some(url) = &self.profile_image {
            player.profile_image = Some(url.clone());
        }
    }
}

/// Caller-supplied fields for a new match.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMatch {
    pub player1_id: String,
    pub player2_id: String,
    pub player1_score: u32,
    pub player2_score: u32,
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,
}

//////////////////////////////////////////////////
// Rows as written
//////////////////////////////////////////////////

/// A player row ready to insert: counters zeroed, score at the default.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct PlayerInsert {
    pub name: String,
    pub profile_image: Option<String>,
    pub join_date: Option<String>,
    pub score: i32,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub created_at: DateTime<Utc>,
}

impl PlayerInsert {
    pub fn new(input: NewPlayer, now: DateTime<Utc>) -> Self {
        PlayerInsert {
            name: input.name,
            profile_image: input.profile_image,
            join_date: input.join_date,
            score: STARTING_SCORE,
            games: 0,
            wins: 0,
            losses: 0,
            created_at: now,
        }
    }
}

/// A match row ready to insert; `match_date` defaults to `now`.
#[derive(Debug, Clone, Serialize)]
pub struct MatchInsert {
    pub player1_id: String,
    pub player2_id: String,
    pub player1_score: u32,
    pub player2_score: u32,
    pub match_date: DateTime<Utc>,
}

impl MatchInsert {
    pub fn new(input: NewMatch, now: DateTime<Utc>) -> Self {
        MatchInsert {
            player1_id: input.player1_id,
            player2_id: input.player2_id,
            player1_score: input.player1_score,
            player2_score: input.player2_score,
            match_date: input.match_date.unwrap_or(now),
        }
    }
}
