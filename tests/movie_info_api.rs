//! End-to-end tests of the movie info service REST surface.
#![allow(clippy::unwrap_used)]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use cinefeed::api::rest::movie_info::{self, MovieInfoState};
use cinefeed::infrastructure::persistence::in_memory::InMemoryMovieInfoRepository;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

fn test_state() -> MovieInfoState {
    MovieInfoState::new(Arc::new(InMemoryMovieInfoRepository::new()))
}

fn movie_info_body(title: &str, year: i32) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "year": year,
        "cast": ["Christian Bale", "Michael Caine"],
        "release_date": format!("{year}-06-15"),
    })
}

#[tokio::test]
async fn create_assigns_identifier_and_echoes_the_entity() {
    let app = movie_info::router(test_state());

    let (status, created) = common::post_json(
        app.clone(),
        "/v1/movie-infos",
        &movie_info_body("Batman Begins", 2005),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Batman Begins");
    assert_eq!(created["year"], 2005);
    assert_eq!(created["release_date"], "2005-06-15");
    Uuid::parse_str(created["movie_info_id"].as_str().unwrap()).unwrap();
}

#[tokio::test]
async fn create_keeps_a_caller_provided_identifier() {
    let app = movie_info::router(test_state());

    let mut body = movie_info_body("Batman Begins", 2005);
    body["movie_info_id"] = serde_json::json!("abc");
    let (status, created) = common::post_json(app.clone(), "/v1/movie-infos", &body).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["movie_info_id"], "abc");
}

#[tokio::test]
async fn create_rejects_invalid_input_with_every_violation() {
    let state = test_state();
    let app = movie_info::router(state.clone());

    let body = serde_json::json!({
        "title": "  ",
        "year": -1,
        "cast": ["Christian Bale", ""],
        "release_date": "2005-06-15",
    });
    let (status, message) = common::post_text(app.clone(), "/v1/movie-infos", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        message,
        "cast must not contain blank names, title must not be blank, year must be positive"
    );

    // nothing was stored and nothing reached the feed
    let (_, listed) = common::get_json(app, "/v1/movie-infos").await;
    assert!(listed.as_array().unwrap().is_empty());
    assert!(state.feed.is_empty());
}

#[tokio::test]
async fn list_supports_the_year_filter() {
    let app = movie_info::router(test_state());

    common::post_json(
        app.clone(),
        "/v1/movie-infos",
        &movie_info_body("Batman Begins", 2005),
    )
    .await;
    common::post_json(
        app.clone(),
        "/v1/movie-infos",
        &movie_info_body("Dark Knight", 2008),
    )
    .await;

    let (status, all) = common::get_json(app.clone(), "/v1/movie-infos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, filtered) = common::get_json(app, "/v1/movie-infos?year=2005").await;
    assert_eq!(status, StatusCode::OK);
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["title"], "Batman Begins");
}

#[tokio::test]
async fn get_returns_the_stored_entity_or_404() {
    let app = movie_info::router(test_state());

    let (_, created) = common::post_json(
        app.clone(),
        "/v1/movie-infos",
        &movie_info_body("Batman Begins", 2005),
    )
    .await;
    let id = created["movie_info_id"].as_str().unwrap();

    let (status, fetched) = common::get_json(app.clone(), &format!("/v1/movie-infos/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, message) = common::get_text(app, "/v1/movie-infos/ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message, "no movie info found for id ghost");
}

#[tokio::test]
async fn update_replaces_fields_but_never_the_identifier() {
    let state = test_state();
    let app = movie_info::router(state.clone());

    let (_, created) = common::post_json(
        app.clone(),
        "/v1/movie-infos",
        &movie_info_body("Batman Begins", 2005),
    )
    .await;
    let id = created["movie_info_id"].as_str().unwrap().to_string();

    // the incoming id is ignored even when it differs
    let mut incoming = movie_info_body("Batman Begins 1", 2005);
    incoming["movie_info_id"] = serde_json::json!("smuggled");
    let (status, updated) =
        common::put_json(app.clone(), &format!("/v1/movie-infos/{id}"), &incoming).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["movie_info_id"], id.as_str());
    assert_eq!(updated["title"], "Batman Begins 1");

    let (_, fetched) = common::get_json(app.clone(), &format!("/v1/movie-infos/{id}")).await;
    assert_eq!(fetched["title"], "Batman Begins 1");

    // only the create reached the feed
    assert_eq!(state.feed.len(), 1);

    let (status, message) = common::put_text(
        app,
        "/v1/movie-infos/ghost",
        &movie_info_body("Nobody", 2001),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message, "no movie info found for id ghost");
}

#[tokio::test]
async fn delete_removes_the_entity_once() {
    let app = movie_info::router(test_state());

    let (_, created) = common::post_json(
        app.clone(),
        "/v1/movie-infos",
        &movie_info_body("Batman Begins", 2005),
    )
    .await;
    let id = created["movie_info_id"].as_str().unwrap();

    assert_eq!(
        common::delete(app.clone(), &format!("/v1/movie-infos/{id}")).await,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        common::delete(app.clone(), &format!("/v1/movie-infos/{id}")).await,
        StatusCode::NOT_FOUND
    );

    let (status, _) = common::get_text(app, &format!("/v1/movie-infos/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stream_replays_the_backlog_then_carries_live_entries() {
    let app = movie_info::router(test_state());

    let (_, first) = common::post_json(
        app.clone(),
        "/v1/movie-infos",
        &movie_info_body("Batman Begins", 2005),
    )
    .await;

    let response = app
        .clone()
        .oneshot(
            Request::get("/v1/movie-infos/stream")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/x-ndjson"
    );

    let mut body = response.into_body();
    let replayed = common::next_stream_line(&mut body).await;
    assert_eq!(replayed, first);

    // created after subscribing, delivered live on the same response
    let (_, second) = common::post_json(
        app,
        "/v1/movie-infos",
        &movie_info_body("Dark Knight", 2008),
    )
    .await;
    let live = common::next_stream_line(&mut body).await;
    assert_eq!(live, second);
}
