//! Wire-level tests for the HTTP adapters against a mock server.

use std::sync::Arc;

use mockito::Matcher;
use serde_json::json;
use taskhub::account::adapters::http::HttpUserApi;
use taskhub::account::domain::{Credentials, ProfileUpdate, RegistrationRequest, UserId};
use taskhub::account::ports::UserApi;
use taskhub::account::services::AccountService;
use taskhub::remote::{RemoteClient, RemoteConfig};
use taskhub::session::adapters::memory::InMemorySessionStore;
use taskhub::session::services::SessionContext;
use taskhub::task::adapters::http::HttpTaskApi;
use taskhub::task::domain::{TaskDraft, TaskId, TaskStatus};
use taskhub::task::ports::{TaskApi, TaskApiError};
use taskhub::task::services::load_catalog;
use url::Url;

fn client_for(server: &mockito::Server) -> RemoteClient {
    let base = Url::parse(&server.url()).expect("mock server URL should parse");
    RemoteClient::new(&RemoteConfig::new(base)).expect("client should build")
}

#[tokio::test(flavor = "multi_thread")]
async fn login_stores_the_confirmed_record_in_the_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users/v1/login")
        .match_body(Matcher::Json(json!({
            "username": "alice",
            "password": "secret",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":7,"username":"alice","email":"a@x.com"}"#)
        .create_async()
        .await;

    let api = Arc::new(HttpUserApi::new(client_for(&server)));
    let session = SessionContext::new(Arc::new(InMemorySessionStore::new()));
    let accounts = AccountService::new(api, session);

    let credentials = Credentials::new("alice", "secret").expect("credentials should validate");
    let record = accounts
        .login(&credentials)
        .await
        .expect("login should succeed");

    mock.assert_async().await;
    assert_eq!(record.id, UserId::new(7));
    let stored = accounts
        .current_user()
        .expect("session should be readable")
        .expect("the record should be stored");
    assert_eq!(stored.username, "alice");
    assert_eq!(stored.email, "a@x.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn registration_sends_the_camel_case_form_fields() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users/v1/register")
        .match_body(Matcher::Json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "username": "ada",
            "password": "secret",
            "phoneNumber": "+100200300",
            "email": "ada@x.com",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":3,"username":"ada","email":"ada@x.com"}"#)
        .create_async()
        .await;

    let api = HttpUserApi::new(client_for(&server));
    let request =
        RegistrationRequest::new("Ada", "Lovelace", "ada", "secret", "+100200300", "ada@x.com")
            .expect("registration should validate");
    let record = api
        .register(&request)
        .await
        .expect("registration should succeed");

    mock.assert_async().await;
    assert_eq!(record.id, UserId::new(3));
}

#[tokio::test(flavor = "multi_thread")]
async fn profile_update_puts_explicit_nulls_for_unchanged_passwords() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/users/v1/7/profile")
        .match_body(Matcher::Json(json!({
            "username": "alice",
            "email": "new@x.com",
            "currentPassword": null,
            "newPassword": null,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":7,"username":"alice","email":"new@x.com"}"#)
        .create_async()
        .await;

    let api = HttpUserApi::new(client_for(&server));
    let update = ProfileUpdate::new("alice", "new@x.com").expect("profile should validate");
    let record = api
        .update_profile(UserId::new(7), &update)
        .await
        .expect("profile update should succeed");

    mock.assert_async().await;
    assert_eq!(record.email, "new@x.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn assignee_pages_are_unwrapped_from_their_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/task/v1/assignee/7")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("size".into(), "25".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"content":[{"id":11,"title":"Review docs","status":"NEW","priority":"LOW","assigneeId":7,"creatorId":5}]}"#,
        )
        .create_async()
        .await;

    let api = HttpTaskApi::new(client_for(&server));
    let tasks = api
        .assignee_page(UserId::new(7), 2, 25)
        .await
        .expect("page fetch should succeed");

    mock.assert_async().await;
    assert_eq!(tasks.len(), 1);
    assert_eq!(
        tasks.first().map(|task| task.id),
        Some(TaskId::new(11))
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn enum_listings_accept_both_wire_shapes() {
    let mut server = mockito::Server::new_async().await;
    let statuses_mock = server
        .mock("GET", "/api/task/v1/statuses")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["NEW","DONE"]"#)
        .create_async()
        .await;
    let priorities_mock = server
        .mock("GET", "/api/task/v1/priorityStatuses")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"LOW":"LOW","MEDIUM":"MEDIUM","HIGH":"HIGH","CRITICAL":"CRITICAL"}"#)
        .create_async()
        .await;

    let api = HttpTaskApi::new(client_for(&server));
    let statuses = api.statuses().await.expect("statuses should normalize");
    let priorities = api.priorities().await.expect("priorities should normalize");

    statuses_mock.assert_async().await;
    priorities_mock.assert_async().await;
    let status_values: Vec<&str> = statuses.iter().map(TaskStatus::as_str).collect();
    assert_eq!(status_values, vec!["NEW", "DONE"]);
    assert_eq!(priorities.len(), 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_enum_payloads_fall_back_at_the_catalog() {
    let mut server = mockito::Server::new_async().await;
    let _statuses_mock = server
        .mock("GET", "/api/task/v1/statuses")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("42")
        .create_async()
        .await;
    let _priorities_mock = server
        .mock("GET", "/api/task/v1/priorityStatuses")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("\"oops\"")
        .create_async()
        .await;

    let api = HttpTaskApi::new(client_for(&server));
    assert!(matches!(api.statuses().await, Err(TaskApiError::Decode(_))));

    let catalog = load_catalog(&api).await;
    assert_eq!(catalog.statuses().len(), 5);
    assert_eq!(catalog.priorities().len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn status_patch_sends_the_single_field_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/task/v1/11/status")
        .match_body(Matcher::Json(json!({ "status": "DONE" })))
        .with_status(204)
        .create_async()
        .await;

    let api = HttpTaskApi::new(client_for(&server));
    api.update_status(TaskId::new(11), &TaskStatus::done())
        .await
        .expect("status patch should succeed");

    mock.assert_async().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn task_creation_composes_the_due_date_to_end_of_day() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/task/v1")
        .match_body(Matcher::Json(json!({
            "title": "Ship the board",
            "description": null,
            "status": "NEW",
            "priority": "MEDIUM",
            "dueDate": "2024-05-01T23:59:59",
            "project": null,
            "assigneeId": 7,
            "creatorId": 7,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"id":12,"title":"Ship the board","status":"NEW","priority":"MEDIUM","dueDate":"2024-05-01T23:59:59","assigneeId":7,"creatorId":7}"#,
        )
        .create_async()
        .await;

    let api = HttpTaskApi::new(client_for(&server));
    let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).expect("test date should be valid");
    let draft = TaskDraft::new("Ship the board", UserId::new(7), UserId::new(7))
        .expect("draft should validate")
        .with_due_date(date);
    let created = api.create(&draft).await.expect("creation should succeed");

    mock.assert_async().await;
    assert_eq!(created.id, TaskId::new(12));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_updates_surface_their_status_code() {
    let mut server = mockito::Server::new_async().await;
    let _priority_mock = server
        .mock("PATCH", "/api/task/v1/11/priority")
        .with_status(409)
        .create_async()
        .await;

    let api = HttpTaskApi::new(client_for(&server));
    let priority =
        taskhub::task::domain::TaskPriority::new("HIGH").expect("non-empty priority");
    let result = api.update_priority(TaskId::new(11), &priority).await;

    assert!(matches!(result, Err(TaskApiError::Status(409))));
}

#[tokio::test(flavor = "multi_thread")]
async fn deletion_hits_the_task_resource() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/task/v1/11")
        .with_status(204)
        .create_async()
        .await;

    let api = HttpTaskApi::new(client_for(&server));
    api.delete(TaskId::new(11))
        .await
        .expect("deletion should succeed");

    mock.assert_async().await;
}
