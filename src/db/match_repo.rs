use chrono::Utc;

use crate::db::models::{Match, MatchInsert, NewMatch};
use crate::db::remote::{quoted, Params, MATCHES};
use crate::db::{serving_fixtures, write_failed, DataStore, StoreError};

/// Remote select embedding both participants through their foreign keys.
pub const MATCH_SELECT: &str = "*,\
player1:players!matches_player1_id_fkey(name,profile_image),\
player2:players!matches_player2_id_fkey(name,profile_image)";

/// How many matches a player's history returns when served remotely.
pub const RECENT_MATCH_LIMIT: usize = 10;

/// Every match, latest first when served remotely.
pub async fn list_all(store: &DataStore) -> Vec<Match> {
    if let Some(remote) = store.remote() {
        let params: Params = vec![
            ("select", MATCH_SELECT.into()),
            ("order", "match_date.desc".into()),
        ];
        match remote.select(MATCHES, &params).await {
            Ok(rows) => return rows,
            Err(e) => serving_fixtures("matches.list_all", &e),
        }
    }
    store.fixtures().matches().await
}

/// Matches the player took part in on either side.
///
/// Remotely: latest first, at most [`RECENT_MATCH_LIMIT`]. The fixture path
/// keeps insertion order and has no cap.
pub async fn list_by_player(store: &DataStore, player_id: &str) -> Vec<Match> {
    if let Some(remote) = store.remote() {
        let id = quoted(player_id);
        let params: Params = vec![
            ("select", MATCH_SELECT.into()),
            ("or", format!("(player1_id.eq.{id},player2_id.eq.{id})")),
            ("order", "match_date.desc".into()),
            ("limit", RECENT_MATCH_LIMIT.to_string()),
        ];
        match remote.select(MATCHES, &params).await {
            Ok(rows) => return rows,
            Err(e) => serving_fixtures("matches.list_by_player", &e),
        }
    }
    store.fixtures().matches_for(player_id).await
}

/// Record a match result. Player scores and counters are left untouched.
pub async fn create(store: &DataStore, input: NewMatch) -> Result<Match, StoreError> {
    let row = MatchInsert::new(input, Utc::now());
    match store.remote() {
        Some(remote) => remote
            .insert(MATCHES, &row)
            .await
            .map_err(|e| write_failed("matches.create", e)),
        None => Ok(store.fixtures().insert_match(row).await),
    }
}
