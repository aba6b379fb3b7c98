mod common;

use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use playlist_generator::library::{Category, Library, Playlist, Recommendation, Song};
use serde_json::{Value, json};

use common::{api, test_server, test_server_with};

#[tokio::test]
async fn test_health_and_welcome() {
    let server = test_server();

    let health = server.get("/health").await;
    health.assert_status(StatusCode::OK);
    assert_eq!(health.json::<Value>(), json!({ "status": "healthy" }));

    let welcome = server.get(common::PREFIX).await;
    welcome.assert_status(StatusCode::OK);
    let body = welcome.json::<Value>();
    assert_eq!(body["message"], "Welcome to Playlist Generator API");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_list_sample_playlist() {
    let server = test_server();

    let playlists = server.get(&api("/playlists")).await.json::<Vec<Playlist>>();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].name, "My First Playlist");
    assert_eq!(playlists[0].songs.len(), 4);
}

#[tokio::test]
async fn test_playlist_crud_round_trip() {
    let server = test_server();

    let created = server
        .post(&api("/playlists"))
        .json(&json!({
            "name": "Workout",
            "description": "Fast stuff",
            "songs": [
                { "title": "Sprint", "artist": "Runner", "genre": "EDM", "duration": 200 },
                { "title": "Cooldown", "artist": "Runner" }
            ]
        }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let created = created.json::<Playlist>();
    assert_eq!(created.id, 2);
    assert_eq!(created.songs.iter().map(|s| s.id).collect::<Vec<_>>(), vec![5, 6]);
    assert_eq!(created.songs[1].genre, None);

    let fetched = server
        .get(&api(&format!("/playlists/{}", created.id)))
        .await
        .json::<Playlist>();
    assert_eq!(fetched, created);

    let updated = server
        .put(&api(&format!("/playlists/{}", created.id)))
        .json(&json!({ "name": "Leg Day" }))
        .await;
    updated.assert_status(StatusCode::OK);
    let updated = updated.json::<Playlist>();
    assert_eq!(updated.name, "Leg Day");
    assert_eq!(updated.description.as_deref(), Some("Fast stuff"));
    assert_eq!(updated.songs, created.songs);

    server
        .delete(&api(&format!("/playlists/{}", created.id)))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let gone = server.get(&api(&format!("/playlists/{}", created.id))).await;
    gone.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        gone.json::<Value>(),
        json!({ "detail": "Playlist with ID 2 not found" })
    );

    let next = server
        .post(&api("/playlists"))
        .json(&json!({ "name": "After" }))
        .await
        .json::<Playlist>();
    assert_eq!(next.id, 3);
}

#[tokio::test]
async fn test_missing_playlist_is_404() {
    let server = test_server();

    server
        .put(&api("/playlists/99"))
        .json(&json!({ "name": "x" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&api("/playlists/99"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_playlist_validation() {
    let server = test_server();

    let empty_name = server
        .post(&api("/playlists"))
        .json(&json!({ "name": "" }))
        .await;
    empty_name.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(empty_name.json::<Value>()["detail"].is_string());

    server
        .post(&api("/playlists"))
        .json(&json!({ "name": "ok", "description": "d".repeat(501) }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    server
        .put(&api("/playlists/1"))
        .json(&json!({ "name": "n".repeat(101) }))
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    // Rejected requests leave the library alone.
    let playlists = server.get(&api("/playlists")).await.json::<Vec<Playlist>>();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].name, "My First Playlist");
}

#[tokio::test]
async fn test_categories() {
    let server = test_server();

    let list = server.get(&api("/categories")).await.json::<Value>();
    assert_eq!(list["total"], 6);
    assert_eq!(list["categories"][0]["name"], "pop");
    assert_eq!(list["categories"][0]["type"], "genre");
    assert_eq!(list["categories"][3]["name"], "artist a");
    assert_eq!(list["categories"][3]["type"], "artist");

    let pop = server.get(&api("/categories/Pop")).await.json::<Category>();
    assert_eq!(pop.song_count, 2);

    let missing = server.get(&api("/categories/jazz")).await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        missing.json::<Value>(),
        json!({ "detail": "Category 'jazz' not found" })
    );

    let by_genre = server
        .get(&api("/categories/genre/ROCK"))
        .await
        .json::<Vec<Song>>();
    assert_eq!(by_genre.len(), 1);
    assert_eq!(by_genre[0].title, "Rock Song 1");

    let by_artist = server
        .get(&api("/categories/artist/Artist%20A"))
        .await
        .json::<Vec<Song>>();
    assert_eq!(by_artist.len(), 2);

    let none = server
        .get(&api("/categories/genre/jazz"))
        .await
        .json::<Vec<Song>>();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_categories_follow_created_playlists() {
    let server = test_server_with(Library::new());

    let empty = server.get(&api("/categories")).await.json::<Value>();
    assert_eq!(empty["total"], 0);

    server
        .post(&api("/playlists"))
        .json(&json!({
            "name": "Jazz Night",
            "songs": [{ "title": "So What", "artist": "Miles Davis", "genre": "Jazz" }]
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let jazz = server.get(&api("/categories/jazz")).await.json::<Category>();
    assert_eq!(jazz.song_count, 1);
    assert_eq!(jazz.songs[0].title, "So What");

    let rec = server
        .get(&api("/recommendations"))
        .add_query_param("category", "jazz")
        .await
        .json::<Recommendation>();
    assert_eq!(rec.recommended_songs[0].title, "Recommended Jazz Song");
}

#[tokio::test]
async fn test_recommendations_get_and_post_agree() {
    let server = test_server();

    let via_get = server
        .get(&api("/recommendations"))
        .add_query_param("category", "Sad")
        .add_query_param("limit", 2)
        .await
        .json::<Recommendation>();
    let via_post = server
        .post(&api("/recommendations"))
        .json(&json!({ "category": "Sad", "limit": 2 }))
        .await
        .json::<Recommendation>();

    assert_eq!(via_get, via_post);
    assert_eq!(via_get.category, "sad");
    assert_eq!(via_get.count, 2);
    assert_eq!(via_get.recommended_songs[0].title, "Emotional Ballad");
}

#[tokio::test]
async fn test_recommendation_defaults() {
    let server = test_server();

    let rec = server
        .post(&api("/recommendations"))
        .json(&json!({}))
        .await
        .json::<Recommendation>();
    assert_eq!(rec.category, "general");
    assert_eq!(rec.count, 5);

    let artist = server
        .get(&api("/recommendations"))
        .add_query_param("category", "Artist B")
        .await
        .json::<Recommendation>();
    assert_eq!(artist.recommended_songs[0].title, "Similar to Artist B");
}

#[tokio::test]
async fn test_recommendation_limit_bounds() {
    let server = test_server();

    for limit in [0, 21] {
        server
            .get(&api("/recommendations"))
            .add_query_param("limit", limit)
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let max = server
        .post(&api("/recommendations"))
        .json(&json!({ "limit": 20 }))
        .await
        .json::<Recommendation>();
    assert_eq!(max.count, 9);
}

#[tokio::test]
async fn test_cors_allows_configured_origin() {
    let server = test_server();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:5173"),
        )
        .await;

    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "http://localhost:5173"
    );
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
        "true"
    );
}

#[tokio::test]
async fn test_collection_routes_accept_trailing_slash() {
    let server = test_server();

    let created = server
        .post(&api("/playlists/"))
        .json(&json!({ "name": "Slashed", "songs": [] }))
        .await;
    created.assert_status(StatusCode::CREATED);
    assert_eq!(created.json::<Playlist>().id, 2);

    let listed = server.get(&api("/playlists/")).await;
    listed.assert_status(StatusCode::OK);
    assert_eq!(listed.json::<Vec<Playlist>>().len(), 2);

    server
        .get(&api("/categories/"))
        .await
        .assert_status(StatusCode::OK);

    let rec = server
        .post(&api("/recommendations/"))
        .json(&json!({}))
        .await;
    rec.assert_status(StatusCode::OK);
    assert_eq!(rec.json::<Recommendation>().category, "general");
}

#[tokio::test]
async fn test_malformed_requests_are_client_errors() {
    let server = test_server();

    let bad_id = server.get(&api("/playlists/abc")).await;
    assert!(bad_id.status_code().is_client_error());

    let bad_body = server
        .post(&api("/playlists"))
        .text("{\"name\": ")
        .content_type("application/json")
        .await;
    assert!(bad_body.status_code().is_client_error());

    let wrong_shape = server
        .post(&api("/recommendations"))
        .json(&json!({ "limit": "many" }))
        .await;
    assert!(wrong_shape.status_code().is_client_error());

    assert_eq!(server.get(&api("/playlists")).await.json::<Vec<Playlist>>().len(), 1);
}
