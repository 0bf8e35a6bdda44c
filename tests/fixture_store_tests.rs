//! Fixture mode: the store behaves like a small in-memory database.

use chrono::{TimeZone, Utc};
use rally_board_server::db::models::{NewMatch, NewPlayer, PlayerUpdate, STARTING_SCORE};
use rally_board_server::db::{match_repo, player_repo, DataStore};

fn new_match(p1: &str, p2: &str, s1: u32, s2: u32) -> NewMatch {
    NewMatch {
        player1_id: p1.into(),
        player2_id: p2.into(),
        player1_score: s1,
        player2_score: s2,
        match_date: None,
    }
}

#[tokio::test]
async fn ranking_is_stable_across_calls() {
    let store = DataStore::fixture_only();

    let first = player_repo::list_ranking(&store).await;
    let scores: Vec<i32> = first.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![2150, 2080, 2020, 1980, 1950, 1920]);

    let second = player_repo::list_ranking(&store).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn list_all_keeps_insertion_order() {
    let store = DataStore::fixture_only();
    let ids: Vec<String> = player_repo::list_all(&store)
        .await
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
}

#[tokio::test]
async fn get_by_id_finds_known_players_only() {
    let store = DataStore::fixture_only();

    let player = player_repo::get_by_id(&store, "4").await.expect("seeded");
    assert_eq!(player.name, "Suzuki Misaki");
    assert_eq!((player.games, player.wins, player.losses), (35, 22, 13));

    assert!(player_repo::get_by_id(&store, "999").await.is_none());
}

#[tokio::test]
async fn create_player_appends_with_defaults() {
    let store = DataStore::fixture_only();

    let created = player_repo::create(
        &store,
        NewPlayer {
            name: "Ito Ren".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(created.id, "7");
    assert_eq!(created.score, STARTING_SCORE);
    assert_eq!((created.games, created.wins, created.losses), (0, 0, 0));
    assert!(created.profile_image.is_none());

    assert_eq!(player_repo::list_all(&store).await.len(), 7);
    // a fresh player sits at the bottom of the ranking
    let ranking = player_repo::list_ranking(&store).await;
    assert_eq!(ranking.last().map(|p| p.id.as_str()), Some("7"));
}

#[tokio::test]
async fn update_merges_given_fields() {
    let store = DataStore::fixture_only();

    let changes = PlayerUpdate {
        score: Some(2200),
        wins: Some(27),
        ..Default::default()
    };
    let updated = player_repo::update(&store, "3", &changes)
        .await
        .unwrap()
        .expect("player 3 exists");
    assert_eq!(updated.score, 2200);
    assert_eq!(updated.wins, 27);
    assert_eq!(updated.name, "Yamada Jiro");
    assert_eq!(updated.games, 42);

    let ranking = player_repo::list_ranking(&store).await;
    assert_eq!(ranking[0].id, "3");
}

#[tokio::test]
async fn tenth_player_ranks_after_seventh_on_equal_score() {
    let store = DataStore::fixture_only();
    for name in ["P7", "P8", "P9", "P10"] {
        player_repo::create(
            &store,
            NewPlayer {
                name: name.into(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    let ranking = player_repo::list_ranking(&store).await;
    let tail: Vec<&str> = ranking[6..].iter().map(|p| p.id.as_str()).collect();
    assert_eq!(tail, ["7", "8", "9", "10"]);
}

#[tokio::test]
async fn update_of_unknown_player_is_none() {
    let store = DataStore::fixture_only();
    let changes = PlayerUpdate {
        score: Some(1),
        ..Default::default()
    };
    assert!(player_repo::update(&store, "999", &changes).await.unwrap().is_none());
    assert_eq!(player_repo::list_all(&store).await.len(), 6);
}

#[tokio::test]
async fn seeded_matches_by_player() {
    let store = DataStore::fixture_only();

    assert_eq!(match_repo::list_all(&store).await.len(), 2);
    assert_eq!(match_repo::list_by_player(&store, "1").await.len(), 1);
    assert_eq!(match_repo::list_by_player(&store, "2").await.len(), 2);
    assert_eq!(match_repo::list_by_player(&store, "3").await.len(), 1);
    assert!(match_repo::list_by_player(&store, "6").await.is_empty());
}

#[tokio::test]
async fn create_match_appends_without_touching_players() {
    let store = DataStore::fixture_only();
    let before = player_repo::list_all(&store).await;

    let started = Utc::now();
    let m = match_repo::create(&store, new_match("5", "6", 21, 15)).await.unwrap();
    assert_eq!(m.id, "3");
    assert!(m.match_date >= started);
    assert!(m.player1.is_none() && m.player2.is_none());

    assert_eq!(match_repo::list_all(&store).await.len(), 3);
    assert_eq!(match_repo::list_by_player(&store, "6").await, vec![m]);
    assert_eq!(player_repo::list_all(&store).await, before);
}

#[tokio::test]
async fn create_match_keeps_supplied_date() {
    let store = DataStore::fixture_only();
    let played = Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap();

    let mut input = new_match("1", "3", 9, 11);
    input.match_date = Some(played);
    let m = match_repo::create(&store, input).await.unwrap();
    assert_eq!(m.match_date, played);
}

#[tokio::test]
async fn fixture_history_is_not_capped() {
    let store = DataStore::fixture_only();
    for i in 0..15 {
        match_repo::create(&store, new_match("1", "4", 21, i)).await.unwrap();
    }
    assert_eq!(match_repo::list_by_player(&store, "1").await.len(), 16);
    assert_eq!(match_repo::list_by_player(&store, "4").await.len(), 15);
}

#[tokio::test]
async fn stores_do_not_share_state() {
    let a = DataStore::fixture_only();
    let b = DataStore::fixture_only();

    player_repo::create(
        &a,
        NewPlayer {
            name: "Only In A".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(player_repo::list_all(&a).await.len(), 7);
    assert_eq!(player_repo::list_all(&b).await.len(), 6);
}
