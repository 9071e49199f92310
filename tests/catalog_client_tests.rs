//! Integration Tests for the Catalog Clients
//!
//! Runs the real reqwest clients against local axum servers standing in
//! for the Spotify and TMDb APIs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use birthday_releases::{
    catalog::{MusicCatalog, SpotifyClient, TmdbClient},
    config::Config,
    finder::{find_kpop_releases, find_movie_releases, DateQuery, YearOutcome},
};
use serde_json::json;

// == Helper Functions ==

async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

// == TMDb Mock ==

#[derive(Clone, Default)]
struct TmdbMock {
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn discover(
    State(mock): State<TmdbMock>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    mock.requests.lock().unwrap().push(params.clone());

    let date = params
        .get("primary_release_date.gte")
        .cloned()
        .unwrap_or_default();
    let year: i64 = date.get(..4).and_then(|y| y.parse().ok()).unwrap_or(0);

    match year {
        2015 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        2020 => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "results": [] })).into_response()
        }
        2010 => Json(json!({ "page": 1 })).into_response(),
        _ => Json(json!({
            "page": 1,
            "results": [{
                "id": year,
                "title": format!("Movie {}", year),
                "release_date": date,
                "vote_average": 6.5,
                "poster_path": null,
                "popularity": 12.3
            }]
        }))
        .into_response(),
    }
}

#[tokio::test]
async fn test_tmdb_client_query_and_failure_isolation() {
    let mock = TmdbMock::default();
    let router = Router::new()
        .route("/3/discover/movie", get(discover))
        .with_state(mock.clone());
    let base_url = spawn_server(router).await;

    let client = TmdbClient::new(&base_url, Duration::from_millis(500)).unwrap();
    let query = DateQuery::new(6, 9).unwrap();

    let run = find_movie_releases(&client, "secret-key", query, 2026)
        .await
        .unwrap();

    // 2015 fails, 2020 times out, 2010 has no results field.
    assert_eq!(run.years.len(), 20);
    assert_eq!(run.skipped(), 2);
    assert_eq!(run.records.len(), 17);
    assert_eq!(run.records[0].id, 2026);
    assert!(run
        .years
        .iter()
        .any(|o| matches!(o, YearOutcome::Skipped { year: 2020, .. })));
    assert!(run
        .years
        .contains(&YearOutcome::Fetched { year: 2010, kept: 0 }));

    let requests = mock.requests.lock().unwrap();
    assert_eq!(requests.len(), 20);
    let first = &requests[0];
    assert_eq!(first["api_key"], "secret-key");
    assert_eq!(first["language"], "ko-KR");
    assert_eq!(first["region"], "KR");
    assert_eq!(first["sort_by"], "popularity.desc");
    assert_eq!(first["primary_release_date.gte"], "2026-06-09");
    assert_eq!(first["primary_release_date.lte"], "2026-06-09");
}

// == Spotify Mock ==

#[derive(Clone)]
struct SpotifyMock {
    token_calls: Arc<AtomicUsize>,
    searches: Arc<Mutex<Vec<HashMap<String, String>>>>,
    token_status: StatusCode,
}

impl SpotifyMock {
    fn new(token_status: StatusCode) -> Self {
        Self {
            token_calls: Arc::new(AtomicUsize::new(0)),
            searches: Arc::new(Mutex::new(Vec::new())),
            token_status,
        }
    }
}

async fn token(
    State(mock): State<SpotifyMock>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    mock.token_calls.fetch_add(1, Ordering::SeqCst);
    let basic = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("Basic "))
        .unwrap_or(false);

    if mock.token_status != StatusCode::OK
        || !basic
        || form.get("grant_type").map(String::as_str) != Some("client_credentials")
    {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(json!({
        "access_token": "test-token",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .into_response()
}

async fn search(
    State(mock): State<SpotifyMock>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("Bearer test-token") {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    mock.searches.lock().unwrap().push(params.clone());

    let query = params.get("q").cloned().unwrap_or_default();
    if query.ends_with("2013") {
        tokio::time::sleep(Duration::from_secs(3600)).await;
    }
    if query.ends_with("2015") {
        return StatusCode::BAD_GATEWAY.into_response();
    }
    if query.ends_with("2016") {
        return Json(json!({ "unexpected": true })).into_response();
    }

    Json(json!({
        "albums": {
            "items": [
                {
                    "id": "day-match",
                    "name": "Matching",
                    "artists": [{"name": "aespa"}],
                    "release_date": "2014-11-17",
                    "release_date_precision": "day",
                    "images": [{"url": "https://i.scdn.co/image/m", "width": 640}],
                    "external_urls": {"spotify": "https://open.spotify.com/album/m"}
                },
                {
                    "id": "month-only",
                    "name": "Month",
                    "artists": [],
                    "release_date": "2014-11",
                    "release_date_precision": "month",
                    "images": [],
                    "external_urls": {}
                },
                {
                    "id": "other-day",
                    "name": "Other",
                    "artists": [],
                    "release_date": "2014-11-18",
                    "release_date_precision": "day",
                    "images": [],
                    "external_urls": {}
                }
            ]
        }
    }))
    .into_response()
}

async fn spotify_client(mock: SpotifyMock, timeout: Duration) -> SpotifyClient {
    let router = Router::new()
        .route("/api/token", post(token))
        .route("/v1/search", get(search))
        .with_state(mock);
    let base_url = spawn_server(router).await;

    SpotifyClient::new(
        "client-id",
        "client-secret",
        &base_url,
        &base_url,
        timeout,
    )
    .unwrap()
}

#[tokio::test]
async fn test_spotify_search_and_failure_isolation() {
    let mock = SpotifyMock::new(StatusCode::OK);
    let client = spotify_client(mock.clone(), Duration::from_secs(5)).await;
    let query = DateQuery::new(11, 17).unwrap();

    let run = find_kpop_releases(&client, query, &[2014, 2015, 2016, 2017]).await;

    let ids: Vec<_> = run.records.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["day-match", "day-match"]);
    assert_eq!(run.skipped(), 2);
    assert!(run.years[1].is_skipped());
    assert!(run.years[2].is_skipped());

    // One token exchange serves every search.
    assert_eq!(mock.token_calls.load(Ordering::SeqCst), 1);

    let searches = mock.searches.lock().unwrap();
    assert_eq!(searches.len(), 4);
    assert_eq!(searches[0]["q"], "genre:\"k-pop\" year:2014");
    assert_eq!(searches[0]["type"], "album");
    assert_eq!(searches[0]["limit"], "50");
    assert_eq!(searches[0]["market"], "KR");
}

#[tokio::test]
async fn test_spotify_auth_failure_skips_every_year() {
    let mock = SpotifyMock::new(StatusCode::UNAUTHORIZED);
    let client = spotify_client(mock.clone(), Duration::from_secs(5)).await;

    let result = client.search_albums("genre:\"k-pop\" year:2014", 50, "KR").await;
    assert!(result.is_err());

    let run = find_kpop_releases(&client, DateQuery::new(11, 17).unwrap(), &[2014, 2017]).await;
    assert!(run.records.is_empty());
    assert_eq!(run.skipped(), 2);
    assert!(mock.searches.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_spotify_stalled_search_times_out() {
    let mock = SpotifyMock::new(StatusCode::OK);
    let client = spotify_client(mock.clone(), Duration::from_millis(300)).await;

    let run = tokio::time::timeout(
        Duration::from_secs(10),
        find_kpop_releases(&client, DateQuery::new(11, 17).unwrap(), &[2013, 2014]),
    )
    .await
    .expect("stalled year should time out instead of hanging");

    assert!(matches!(run.years[0], YearOutcome::Skipped { year: 2013, .. }));
    let ids: Vec<_> = run.records.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["day-match"]);
}

#[test]
fn test_default_music_timeout_is_finite() {
    let config = Config::with_defaults();
    assert!(config.music_timeout > 0);
    assert!(config.music_timeout <= 30);
}
