//! Contract tests for the typed endpoint groups
//!
//! Each test pins one wire contract: paths, envelope shapes, persisted
//! session state, and client-side validation.

use std::sync::Arc;
use std::time::Duration;

use taskdeck_client::api::auth::LoginRequest;
use taskdeck_client::api::{BoardBackground, BoardPayload, NewColumn, SupportRequest};
use taskdeck_client::{ApiError, ClientConfig, TaskDeckClient};
use taskdeck_common::auth::{CredentialStore, MemoryCredentialStore, TokenSet};
use taskdeck_domain::{CardPayload, ColumnOrder, Priority, Theme};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_with(
    server: &MockServer,
    tokens: Option<TokenSet>,
) -> (TaskDeckClient, Arc<MemoryCredentialStore>) {
    let store = Arc::new(match tokens {
        Some(tokens) => MemoryCredentialStore::with_tokens(tokens),
        None => MemoryCredentialStore::new(),
    });
    let config = ClientConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        refresh_timeout: Duration::from_secs(2),
    };
    let client = TaskDeckClient::builder()
        .config(config)
        .store(store.clone())
        .build()
        .unwrap();
    (client, store)
}

fn user_json(name: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": "u1",
        "name": name,
        "email": "ada@example.com",
        "theme": "dark"
    })
}

#[tokio::test]
async fn login_persists_session_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_partial_json(serde_json::json!({"email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "acc-1",
            "refreshToken": "ref-1",
            "user": user_json("Ada")
        })))
        .mount(&server)
        .await;

    let (client, store) = client_with(&server, None);
    let user = client
        .auth()
        .login(&LoginRequest { email: "ada@example.com".into(), password: "hunter2".into() })
        .await
        .unwrap();

    assert_eq!(user.name, "Ada");
    let tokens = store.load().await.unwrap().unwrap();
    assert_eq!(tokens.access_token, "acc-1");
    assert_eq!(tokens.refresh_token.as_deref(), Some("ref-1"));
}

#[tokio::test]
async fn logout_revokes_and_clears_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .and(body_partial_json(serde_json::json!({"refreshToken": "ref-1"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (client, store) =
        client_with(&server, Some(TokenSet::new("acc-1", Some("ref-1".to_string()))));
    client.auth().logout().await.unwrap();
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn logout_clears_store_even_when_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let (client, store) =
        client_with(&server, Some(TokenSet::new("acc-1", Some("ref-1".to_string()))));
    let result = client.auth().logout().await;

    assert!(matches!(result, Err(ApiError::Http { status: 500, .. })));
    assert!(store.load().await.unwrap().is_none());
}

#[tokio::test]
async fn me_accepts_wrapped_and_bare_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"user": user_json("Ada")})),
        )
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let user = client.auth().me().await.unwrap();
    assert_eq!(user.id, "u1");
}

#[tokio::test]
async fn theme_read_and_update_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/theme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"theme": "violet"})))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/theme"))
        .and(body_partial_json(serde_json::json!({"theme": "light"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({"data": {"theme": "light"}}),
        ))
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    assert_eq!(client.users().theme().await.unwrap(), Theme::Violet);
    assert_eq!(client.users().set_theme(Theme::Light).await.unwrap(), Theme::Light);
}

#[tokio::test]
async fn avatar_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/users/avatar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("Ada")))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let user = client
        .users()
        .set_avatar("me.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])
        .await
        .unwrap();
    assert_eq!(user.name, "Ada");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    assert!(body.contains("name=\"avatar\""));
    assert!(body.contains("filename=\"me.png\""));
}

#[tokio::test]
async fn board_create_sends_multipart_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/boards"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "board": { "_id": "b1", "title": "Alpha", "iconId": "i2", "backgroundId": "bg-7" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let board = client
        .boards()
        .create(BoardPayload {
            title: "Alpha".into(),
            icon_id: "i2".into(),
            background: BoardBackground::Stock("bg-7".into()),
        })
        .await
        .unwrap();
    assert_eq!(board.id, "b1");

    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body).to_string();
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("name=\"iconId\""));
    assert!(body.contains("name=\"backgroundId\""));
}

#[tokio::test]
async fn board_get_unwraps_single_element_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/boards/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "board": [{ "_id": "b1", "title": "Alpha", "iconId": "i1" }]
        })))
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let board = client.boards().get("b1").await.unwrap();
    assert_eq!(board.title, "Alpha");
}

#[tokio::test]
async fn board_filter_sends_priority_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/boards/b1/filter"))
        .and(query_param("priority", "high"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "board": [{ "_id": "b1", "title": "Alpha", "iconId": "i1" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    client.boards().filter("b1", Priority::High).await.unwrap();
}

#[tokio::test]
async fn columns_reorder_sends_positional_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/columns/board/b1/reorder"))
        .and(body_partial_json(serde_json::json!({
            "columns": [{ "_id": "c2", "order": 0 }, { "_id": "c1", "order": 1 }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "columns": [
                { "_id": "c2", "title": "Doing", "board": "b1", "order": 0 },
                { "_id": "c1", "title": "Todo", "board": "b1", "order": 1 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let order = vec![
        ColumnOrder { id: "c2".into(), order: 0 },
        ColumnOrder { id: "c1".into(), order: 1 },
    ];
    let columns = client.columns().reorder("b1", &order).await.unwrap();
    assert_eq!(columns[0].id, "c2");
}

#[tokio::test]
async fn column_create_returns_bare_column() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/columns"))
        .and(body_partial_json(serde_json::json!({"title": "Todo", "board": "b1"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            serde_json::json!({ "_id": "c1", "title": "Todo", "board": "b1" }),
        ))
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let column = client
        .columns()
        .create(&NewColumn { title: "Todo".into(), board: "b1".into() })
        .await
        .unwrap();
    assert_eq!(column.id, "c1");
}

#[tokio::test]
async fn card_create_validates_before_sending() {
    let server = MockServer::start().await;
    // no mocks mounted: a request would fail loudly

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let payload = CardPayload {
        title: String::new(),
        description: "desc".into(),
        priority: Priority::Low,
        due_date: None,
        column: "c1".into(),
    };
    let result = client.cards().create(&payload).await;

    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn card_answers_decode_all_envelope_shapes() {
    let server = MockServer::start().await;
    let card = serde_json::json!({
        "_id": "card-1",
        "title": "Fix login",
        "description": "401 loop",
        "priority": "high",
        "column": "c1"
    });

    Mock::given(method("POST"))
        .and(path("/api/cards"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"data": card})))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/cards/card-1/status"))
        .and(body_partial_json(serde_json::json!({"newColumnId": "c2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"card": card})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cards/column/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([card])))
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));

    let payload = CardPayload {
        title: "Fix login".into(),
        description: "401 loop".into(),
        priority: Priority::High,
        due_date: None,
        column: "c1".into(),
    };
    let created = client.cards().create(&payload).await.unwrap();
    assert_eq!(created.id, "card-1");

    let moved = client.cards().move_to("card-1", "c2").await.unwrap();
    assert_eq!(moved.priority, Priority::High);

    let listed = client.cards().by_column("c1").await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn card_reorder_sends_column_and_position() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/cards/card-1/order"))
        .and(body_partial_json(serde_json::json!({"columnId": "c1", "order": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "_id": "card-1",
            "title": "Fix login",
            "description": "401 loop",
            "column": "c1",
            "order": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let card = client.cards().reorder("card-1", "c1", 3).await.unwrap();
    assert_eq!(card.order, Some(3));
}

#[tokio::test]
async fn card_stats_endpoint_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cards/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "number": 4, "without": 1, "low": 1, "medium": 1, "high": 1,
            "outdated": 0, "today": 2, "week": 1, "month": 1, "further": 0
        })))
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    let stats = client.cards().stats().await.unwrap();
    assert_eq!(stats.number, 4);
    assert_eq!(stats.today, 2);
}

#[tokio::test]
async fn support_request_posts_comment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/need-help"))
        .and(header("Authorization", "Bearer acc-1"))
        .and(body_partial_json(serde_json::json!({
            "email": "ada@example.com",
            "comment": "The board vanished"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));
    client
        .support()
        .send(&SupportRequest {
            email: "ada@example.com".into(),
            comment: "The board vanished".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn support_request_rejects_empty_comment() {
    let server = MockServer::start().await;
    let (client, _) = client_with(&server, Some(TokenSet::new("acc-1", None)));

    let result = client
        .support()
        .send(&SupportRequest { email: "ada@example.com".into(), comment: "  ".into() })
        .await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}
