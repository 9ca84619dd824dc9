//! HTTP-level integration tests for the `/api/helprequest` endpoints.

mod common;

use axum::http::StatusCode;
use axum::http::Method;
use common::{
    admin_token, body_json, build_test_app, delete, delete_auth, get, get_auth, post_auth,
    post_form_auth, put_json_auth, send, user_token,
};
use serde_json::json;

const CREATE_URI: &str = "/api/helprequest/post?requesterEmail=a@ucsb.edu&teamId=2\
&tableOrBreakoutRoom=5&requestTime=2022-01-03T00:00:00&explanation=x&solved=false";

// ---------------------------------------------------------------------------
// Role gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_without_token_is_forbidden() {
    let response = get(build_test_app(), "/api/helprequest/all").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn list_with_user_role_is_ok() {
    let response = get_auth(build_test_app(), "/api/helprequest/all", &user_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn create_with_user_role_is_forbidden() {
    let response = post_auth(build_test_app(), CREATE_URI, &user_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_without_token_is_forbidden() {
    let response = delete(build_test_app(), "/api/helprequest?id=1").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn user_cannot_delete() {
    let app = build_test_app();
    post_auth(app.clone(), CREATE_URI, &admin_token()).await;

    let response = delete_auth(app.clone(), "/api/helprequest?id=1", &user_token()).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The record is untouched.
    let response = get_auth(app, "/api/helprequest?id=1", &user_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn user_cannot_update() {
    let response = put_json_auth(
        build_test_app(),
        "/api/helprequest?id=1",
        &user_token(),
        json!({
            "requesterEmail": "a@ucsb.edu",
            "teamId": "2",
            "tableOrBreakoutRoom": "5",
            "requestTime": "2022-01-03T00:00:00",
            "explanation": "x",
            "solved": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_without_token_is_forbidden() {
    let response = send(build_test_app(), Method::POST, CREATE_URI, None, None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn garbage_token_is_forbidden() {
    let response = get_auth(build_test_app(), "/api/helprequest/all", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Create / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_create_echoes_fields_with_generated_id() {
    let response = post_auth(build_test_app(), CREATE_URI, &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "id": 1,
            "requesterEmail": "a@ucsb.edu",
            "teamId": "2",
            "tableOrBreakoutRoom": "5",
            "requestTime": "2022-01-03T00:00:00",
            "explanation": "x",
            "solved": false
        })
    );
}

#[tokio::test]
async fn create_accepts_form_body() {
    let response = post_form_auth(
        build_test_app(),
        "/api/helprequest/post",
        &admin_token(),
        "requesterEmail=b%40ucsb.edu&teamId=s22-5pm-3&tableOrBreakoutRoom=7\
&requestTime=2022-04-20T17%3A35&explanation=Need+help+with+Swagger-ui&solved=true",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["requesterEmail"], "b@ucsb.edu");
    assert_eq!(json["requestTime"], "2022-04-20T17:35:00");
    assert_eq!(json["explanation"], "Need help with Swagger-ui");
    assert_eq!(json["solved"], true);
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = build_test_app();
    let created = body_json(post_auth(app.clone(), CREATE_URI, &admin_token()).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = get_auth(app.clone(), &format!("/api/helprequest?id={id}"), &user_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);

    let all = body_json(get_auth(app, "/api/helprequest/all", &user_token()).await).await;
    assert_eq!(all, json!([created]));
}

#[tokio::test]
async fn create_with_malformed_timestamp_is_bad_request() {
    let response = post_auth(
        build_test_app(),
        "/api/helprequest/post?requesterEmail=a@ucsb.edu&teamId=2\
&tableOrBreakoutRoom=5&requestTime=not-a-date&explanation=x&solved=false",
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("requestTime"));
}

#[tokio::test]
async fn create_with_missing_field_is_bad_request() {
    let response = post_auth(
        build_test_app(),
        "/api/helprequest/post?requesterEmail=a@ucsb.edu",
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let response = get_auth(build_test_app(), "/api/helprequest?id=7", &user_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "HelpRequest with id 7 not found" })
    );
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_update_replaces_fields_and_keeps_id() {
    let app = build_test_app();
    post_auth(app.clone(), CREATE_URI, &admin_token()).await;

    let response = put_json_auth(
        app.clone(),
        "/api/helprequest?id=1",
        &admin_token(),
        json!({
            "id": 42,
            "requesterEmail": "ldelplaya@ucsb.edu",
            "teamId": "s22-6pm-4",
            "tableOrBreakoutRoom": "13",
            "requestTime": "2022-04-21T14:15:00",
            "explanation": "Merge conflict",
            "solved": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["requesterEmail"], "ldelplaya@ucsb.edu");
    assert_eq!(json["solved"], true);

    let fetched = body_json(get_auth(app, "/api/helprequest?id=1", &user_token()).await).await;
    assert_eq!(fetched, json);
}

#[tokio::test]
async fn update_accepts_timestamp_without_seconds() {
    let app = build_test_app();
    let response = post_auth(
        app.clone(),
        "/api/helprequest/post?requesterEmail=a@ucsb.edu&teamId=2\
&tableOrBreakoutRoom=5&requestTime=2022-01-03T00:00&explanation=x&solved=false",
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(
        app,
        "/api/helprequest?id=1",
        &admin_token(),
        json!({
            "requesterEmail": "a@ucsb.edu",
            "teamId": "2",
            "tableOrBreakoutRoom": "5",
            "requestTime": "2022-01-04T09:30",
            "explanation": "x",
            "solved": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["requestTime"], "2022-01-04T09:30:00");
}

#[tokio::test]
async fn update_with_malformed_timestamp_is_bad_request() {
    let app = build_test_app();
    post_auth(app.clone(), CREATE_URI, &admin_token()).await;

    let response = put_json_auth(
        app,
        "/api/helprequest?id=1",
        &admin_token(),
        json!({
            "requesterEmail": "a@ucsb.edu",
            "teamId": "2",
            "tableOrBreakoutRoom": "5",
            "requestTime": "tomorrow",
            "explanation": "x",
            "solved": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"]
        .as_str()
        .unwrap()
        .contains("requestTime"));
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let response = put_json_auth(
        build_test_app(),
        "/api/helprequest?id=67",
        &admin_token(),
        json!({
            "requesterEmail": "a@ucsb.edu",
            "teamId": "2",
            "tableOrBreakoutRoom": "5",
            "requestTime": "2022-01-03T00:00:00",
            "explanation": "x",
            "solved": false
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "HelpRequest with id 67 not found"
    );
}

#[tokio::test]
async fn admin_delete_removes_record() {
    let app = build_test_app();
    post_auth(app.clone(), CREATE_URI, &admin_token()).await;

    let response = delete_auth(app.clone(), "/api/helprequest?id=1", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "HelpRequest with id 1 deleted" })
    );

    let response = get_auth(app, "/api/helprequest?id=1", &user_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let response = delete_auth(build_test_app(), "/api/helprequest?id=15", &admin_token()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "HelpRequest with id 15 not found" })
    );
}
