mod common;

use axum::http::StatusCode;
use common::*;
use infra::repos::{ParticipantRepo, PARTICIPANT_PAGE_SIZE};
use infra::{ParticipantId, RemoteError, TournamentRef};
use serde_json::{json, Value};

fn participants(nodes: Value) -> Value {
    json!({
        "data": {
            "tournament": {
                "id": 555,
                "name": "Hoosier Havoc",
                "participants": { "nodes": nodes }
            }
        }
    })
}

#[tokio::test]
async fn test_fetch_keeps_only_account_linked_participants() {
    let server = MockGraphql::json(|_| {
        participants(json!([
            { "id": 1, "gamerTag": "Alpha", "prefix": "TSM", "user": { "slug": "user/0f43507e" } },
            { "id": 2, "gamerTag": "Walk-in", "prefix": null, "user": null },
            { "id": 3, "gamerTag": "Bravo", "prefix": "", "user": { "slug": "user/9ab1c2d3" } },
            { "id": 4, "gamerTag": "Ghost", "user": { "slug": null } },
            null,
            { "id": 5, "gamerTag": "Alpha again", "user": { "slug": "user/0f43507e" } }
        ]))
    })
    .await;
    let repo = ParticipantRepo::new(server.client());

    let ids = repo
        .fetch_participants(&TournamentRef::new("hoosier-havoc"))
        .await
        .expect("fetch should succeed");

    assert_eq!(
        ids,
        vec![
            ParticipantId::new("0f43507e"),
            ParticipantId::new("9ab1c2d3"),
            ParticipantId::new("0f43507e"),
        ]
    );
}

#[tokio::test]
async fn test_fetch_sends_slug_and_page_capacity() {
    let server = MockGraphql::json(|_| participants(json!([]))).await;
    let repo = ParticipantRepo::new(server.client());

    repo.fetch_participants(&TournamentRef::new("hoosier-havoc"))
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].variables()["tourneySlug"], "hoosier-havoc");
    assert_eq!(requests[0].variables()["perPage"], PARTICIPANT_PAGE_SIZE);
    assert_eq!(PARTICIPANT_PAGE_SIZE, 400);
}

#[tokio::test]
async fn test_unknown_tournament_yields_no_participants() {
    let server = MockGraphql::json(|_| json!({ "data": { "tournament": null } })).await;
    let repo = ParticipantRepo::new(server.client());

    let ids = repo
        .fetch_participants(&TournamentRef::new("does-not-exist"))
        .await
        .expect("null tournament is not an error");

    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_fetch_propagates_but_retrieve_absorbs_failure() {
    let server =
        MockGraphql::start(|_| (StatusCode::BAD_GATEWAY, "upstream down".to_string())).await;
    let repo = ParticipantRepo::new(server.client());
    let tournament = TournamentRef::new("flaky-cup");

    let err = repo
        .fetch_participants(&tournament)
        .await
        .expect_err("502 should fail the raw fetch");
    assert!(matches!(err, RemoteError::Status { status: 502, .. }));

    let ids = repo.retrieve_participants(&tournament).await;
    assert!(ids.is_empty(), "failure should degrade to no participants");
}

#[tokio::test]
async fn test_retrieve_absorbs_graphql_errors() {
    let server = MockGraphql::json(|_| {
        json!({ "data": null, "errors": [{ "message": "complexity too high" }] })
    })
    .await;
    let repo = ParticipantRepo::new(server.client());

    let ids = repo.retrieve_participants(&TournamentRef::new("huge-major")).await;

    assert!(ids.is_empty());
}
