use chrono::Utc;

use crate::db::models::{NewPlayer, Player, PlayerInsert, PlayerUpdate};
use crate::db::remote::{eq, single, Params, PLAYERS};
use crate::db::{serving_fixtures, write_failed, DataStore, StoreError};
use crate::ranking::sort_ranking;

/// Every player, newest first when served remotely.
pub async fn list_all(store: &DataStore) -> Vec<Player> {
    if let Some(remote) = store.remote() {
        let params: Params = vec![("select", "*".into()), ("order", "created_at.desc".into())];
        match remote.select(PLAYERS, &params).await {
            Ok(rows) => return rows,
            Err(e) => serving_fixtures("players.list_all", &e),
        }
    }
    store.fixtures().players().await
}

/// One player by id.
///
/// The remote query must yield exactly one row; anything else, including
/// "no such id", is treated as a failed read and answered from the fixtures.
pub async fn get_by_id(store: &DataStore, id: &str) -> Option<Player> {
    if let Some(remote) = store.remote() {
        let params: Params = vec![("select", "*".into()), ("id", eq(id))];
        match remote.select(PLAYERS, &params).await.and_then(single) {
            Ok(player) => return Some(player),
            Err(e) => serving_fixtures("players.get_by_id", &e),
        }
    }
    store.fixtures().player(id).await
}

/// Register a player with the default score and zeroed counters.
pub async fn create(store: &DataStore, input: NewPlayer) -> Result<Player, StoreError> {
    let row = PlayerInsert::new(input, Utc::now());
    match store.remote() {
        Some(remote) => remote
            .insert(PLAYERS, &row)
            .await
            .map_err(|e| write_failed("players.create", e)),
        None => Ok(store.fixtures().insert_player(row).await),
    }
}

/// Overwrite the given fields. `Ok(None)` only happens in fixture mode, for an
/// unknown id; remotely a missing row is an error.
pub async fn update(
    store: &DataStore,
    id: &str,
    changes: &PlayerUpdate,
) -> Result<Option<Player>, StoreError> {
    match store.remote() {
        Some(remote) => {
            let filters: Params = vec![("id", eq(id))];
            remote
                .update(PLAYERS, &filters, changes)
                .await
                .map(Some)
                .map_err(|e| write_failed("players.update", e))
        }
        None => Ok(store.fixtures().update_player(id, changes).await),
    }
}

/// All players, highest score first, ties by id.
pub async fn list_ranking(store: &DataStore) -> Vec<Player> {
    if let Some(remote) = store.remote() {
        let params: Params = vec![("select", "*".into()), ("order", "score.desc,id.asc".into())];
        match remote.select(PLAYERS, &params).await {
            Ok(rows) => return rows,
            Err(e) => serving_fixtures("players.list_ranking", &e),
        }
    }
    let mut players = store.fixtures().players().await;
    sort_ranking(&mut players);
    players
}
