//! A throw-away stand-in for the remote table service.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use rally_board_server::config::DataSourceConfig;
use rally_board_server::db::DataStore;
use serde_json::{json, Value};

pub const TEST_KEY: &str = "test-service-key";

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: String,
    pub apikey: Option<String>,
    pub authorization: Option<String>,
    pub prefer: Option<String>,
    pub body: String,
}

impl Recorded {
    /// Decoded value of a query parameter.
    pub fn param(&self, key: &str) -> Option<String> {
        url::form_urlencoded::parse(self.query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

#[derive(Clone)]
struct MockState {
    failing: bool,
    log: Arc<Mutex<Vec<Recorded>>>,
}

pub struct MockRemote {
    pub base: String,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl MockRemote {
    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    /// A store pointed at this mock with a usable key.
    pub fn store(&self) -> DataStore {
        let config = DataSourceConfig::from_credentials(Some(self.base.as_str()), Some(TEST_KEY));
        assert!(config.is_remote());
        DataStore::new(&config, Duration::from_secs(5)).expect("store")
    }
}

/// Start the mock. A `failing` mock answers every request with HTTP 500.
pub async fn spawn_remote(failing: bool) -> MockRemote {
    let log = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(MockState {
        failing,
        log: log.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .default_service(web::to(handle))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind mock remote");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    MockRemote {
        base: format!("http://{addr}"),
        log,
    }
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

async fn handle(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    let recorded = Recorded {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: req.query_string().to_string(),
        apikey: header(&req, "apikey"),
        authorization: header(&req, "authorization"),
        prefer: header(&req, "prefer"),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    state.log.lock().unwrap().push(recorded.clone());

    if state.failing {
        return HttpResponse::InternalServerError().json(json!({ "message": "database is down" }));
    }

    match (recorded.method.as_str(), recorded.path.as_str()) {
        ("GET", "/rest/v1/players") => {
            let rows = match recorded.param("id") {
                Some(filter) => {
                    let id = filter.trim_start_matches("eq.");
                    remote_players()
                        .into_iter()
                        .filter(|p| p["id"] == id)
                        .collect()
                }
                None => remote_players(),
            };
            HttpResponse::Ok().json(rows)
        }
        ("GET", "/rest/v1/matches") => {
            let limit = recorded
                .param("limit")
                .and_then(|l| l.parse::<usize>().ok())
                .unwrap_or(usize::MAX);
            let rows: Vec<Value> = remote_matches().into_iter().take(limit).collect();
            HttpResponse::Ok().json(rows)
        }
        ("POST", "/rest/v1/players") => {
            let mut rows: Vec<Value> = serde_json::from_slice(&body).unwrap_or_default();
            for row in rows.iter_mut() {
                row["id"] = json!("remote-new");
            }
            HttpResponse::Created().json(rows)
        }
        // the matches table is keyed by an integer identity column
        ("POST", "/rest/v1/matches") => {
            let mut rows: Vec<Value> = serde_json::from_slice(&body).unwrap_or_default();
            for row in rows.iter_mut() {
                row["id"] = json!(42);
                for side in ["player1_id", "player2_id"] {
                    if let Some(n) = row[side].as_str().and_then(|s| s.parse::<i64>().ok()) {
                        row[side] = json!(n);
                    }
                }
            }
            HttpResponse::Created().json(rows)
        }
        ("PATCH", "/rest/v1/players") => {
            let id = recorded
                .param("id")
                .map(|f| f.trim_start_matches("eq.").to_string())
                .unwrap_or_default();
            let changes: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
            let rows: Vec<Value> = remote_players()
                .into_iter()
                .filter(|p| p["id"] == id.as_str())
                .map(|mut p| {
                    if let Value::Object(fields) = &changes {
                        for (k, v) in fields {
                            p[k] = v.clone();
                        }
                    }
                    p
                })
                .collect();
            HttpResponse::Ok().json(rows)
        }
        _ => HttpResponse::NotFound().finish(),
    }
}

pub fn remote_players() -> Vec<Value> {
    vec![
        json!({
            "id": "r1", "name": "Remote Ace", "score": 1800, "games": 10,
            "wins": 7, "losses": 3, "profile_image": null, "join_date": null,
            "created_at": "2024-03-01T09:00:00+00:00"
        }),
        json!({
            "id": "r2", "name": "Remote Deuce", "score": 1700, "games": 0,
            "wins": 0, "losses": 0, "profile_image": "https://img.example/r2.png",
            "join_date": "Feb 2024", "created_at": "2024-02-01T09:00:00+00:00"
        }),
    ]
}

/// Twelve matches between r1 and r2, latest first.
pub fn remote_matches() -> Vec<Value> {
    (0..12)
        .map(|i| {
            json!({
                "id": format!("m{i}"),
                "player1_id": "r1",
                "player2_id": "r2",
                "player1_score": 21,
                "player2_score": 10 + i,
                "match_date": format!("2024-04-{:02}T12:00:00+00:00", 28 - i),
                "created_at": format!("2024-04-{:02}T12:05:00+00:00", 28 - i),
                "player1": { "name": "Remote Ace", "profile_image": null },
                "player2": { "name": "Remote Deuce", "profile_image": "https://img.example/r2.png" }
            })
        })
        .collect()
}
