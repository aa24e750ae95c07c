//! Telegram transport tests against a mocked Bot API

use serde_json::{json, Value};
use serial_test::serial;
use wiremock::matchers::{body_partial_json, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use TourBuddy::config::BotConfig;
use TourBuddy::models::MessageHandle;
use TourBuddy::services::telegram::{build_bot, TelegramTransport};
use TourBuddy::services::transport::{ConversationKind, Transport};
use TourBuddy::utils::errors::TourBuddyError;

/// Bot API method names are case-insensitive; teloxide sends them capitalised
fn api_method(name: &str) -> impl wiremock::Match {
    path_regex(format!("(?i)^/bot[^/]+/{}$", name))
}

async fn transport_for(server: &MockServer) -> TelegramTransport {
    let config = BotConfig {
        token: "12345:test_token".to_string(),
        api_url: Some(server.uri()),
    };
    TelegramTransport::new(build_bot(&config).unwrap())
}

fn ok(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "ok": true, "result": result }))
}

fn private_message(chat_id: i64, message_id: i32, text: &str, is_bot: bool) -> Value {
    json!({
        "message_id": message_id,
        "date": 1_700_000_000,
        "chat": { "id": chat_id, "type": "private", "first_name": "Ana" },
        "from": { "id": chat_id, "is_bot": is_bot, "first_name": "Ana" },
        "text": text
    })
}

fn group_message(chat_id: i64, message_id: i32, text: &str) -> Value {
    json!({
        "message_id": message_id,
        "date": 1_700_000_000,
        "chat": { "id": chat_id, "type": "group", "title": "Excursão Barretos" },
        "from": { "id": 77, "is_bot": false, "first_name": "Caio" },
        "text": text
    })
}

#[tokio::test]
#[serial]
async fn test_send_returns_chat_and_message_handle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(api_method("sendmessage"))
        .and(body_partial_json(json!({ "chat_id": 42, "text": "Olá!", "parse_mode": "HTML" })))
        .respond_with(ok(private_message(42, 7, "Olá!", true)))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let handle = transport.send("42", "Olá!").await.unwrap();

    assert_eq!(handle, MessageHandle::new("42:7"));
}

#[tokio::test]
#[serial]
async fn test_send_renders_bold_markup_as_html() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(api_method("sendmessage"))
        .and(body_partial_json(json!({
            "text": "🚍 <b>DP EVENTOS TUR</b>\n_____\nIda &amp; volta",
            "parse_mode": "HTML"
        })))
        .respond_with(ok(private_message(42, 8, "DP EVENTOS TUR", true)))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let handle = transport
        .send("42", "🚍 *DP EVENTOS TUR*\n_____\nIda & volta")
        .await
        .unwrap();

    assert_eq!(handle, MessageHandle::new("42:8"));
}

#[tokio::test]
#[serial]
async fn test_send_to_invalid_contact_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(json!(true)))
        .expect(0)
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    assert!(matches!(
        transport.send("not-a-chat", "hi").await,
        Err(TourBuddyError::InvalidInput(_))
    ));
}

#[tokio::test]
#[serial]
async fn test_delete_message_uses_handle_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(api_method("deletemessage"))
        .and(body_partial_json(json!({ "chat_id": 42, "message_id": 7 })))
        .respond_with(ok(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    transport.delete_message(&MessageHandle::new("42:7")).await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_api_error_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(api_method("deletemessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: message to delete not found"
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let result = transport.delete_message(&MessageHandle::new("42:7")).await;

    assert!(matches!(result, Err(TourBuddyError::Telegram(_))));
}

#[tokio::test]
#[serial]
async fn test_pending_updates_are_grouped_by_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(api_method("getupdates"))
        .respond_with(ok(json!([
            { "update_id": 10, "message": private_message(42, 1, "oi", false) },
            { "update_id": 11, "message": group_message(-300, 2, "alguém vai?") },
            { "update_id": 12, "message": private_message(42, 3, "2", false) },
            { "update_id": 13, "message": private_message(43, 4, "Até logo!", true) }
        ])))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let unread = transport.list_unread().await.unwrap();

    let summary: Vec<_> = unread
        .iter()
        .map(|c| (c.user_id.as_str(), c.unread_count, c.is_group))
        .collect();
    assert_eq!(summary, vec![("-300", 1, true), ("42", 2, false), ("43", 1, false)]);

    let latest = transport.fetch_last_message("42").await.unwrap().unwrap();
    assert_eq!(latest.text, "2");
    assert_eq!(latest.kind, ConversationKind::Direct);
    assert!(!latest.from_me);

    let own = transport.fetch_last_message("43").await.unwrap().unwrap();
    assert!(own.from_me);

    let group = transport.fetch_last_message("-300").await.unwrap().unwrap();
    assert_eq!(group.kind, ConversationKind::Group);

    assert!(transport.fetch_last_message("99").await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_acknowledge_confirms_last_update() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(api_method("getupdates"))
        .and(body_partial_json(json!({ "offset": 13 })))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(api_method("getupdates"))
        .respond_with(ok(json!([
            { "update_id": 11, "message": private_message(42, 1, "oi", false) },
            { "update_id": 12, "message": private_message(42, 2, "1", false) }
        ])))
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    assert_eq!(transport.list_unread().await.unwrap().len(), 1);

    transport.acknowledge_pending().await.unwrap();

    assert!(transport.fetch_last_message("42").await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_pending_updates_are_read_past_the_first_page() {
    let server = MockServer::start().await;

    // Full first page: chat 42 says "1" at update 50, the rest are other chats
    let first_page: Vec<Value> = (1..=100i64)
        .map(|id| {
            let (chat, text) = if id == 50 { (42, "1") } else { (1000 + id % 10, "oi") };
            json!({ "update_id": id, "message": private_message(chat, id as i32, text, false) })
        })
        .collect();

    Mock::given(method("POST"))
        .and(api_method("getupdates"))
        .and(body_partial_json(json!({ "offset": 103 })))
        .respond_with(ok(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(api_method("getupdates"))
        .and(body_partial_json(json!({ "offset": 101 })))
        .respond_with(ok(json!([
            { "update_id": 101, "message": private_message(43, 101, "oi", false) },
            { "update_id": 102, "message": private_message(42, 102, "menu", false) }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(api_method("getupdates"))
        .and(body_partial_json(json!({ "limit": 100 })))
        .respond_with(ok(Value::Array(first_page)))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    let unread = transport.list_unread().await.unwrap();

    assert_eq!(unread.len(), 12);
    let chat_42 = unread.iter().find(|c| c.user_id == "42").unwrap();
    assert_eq!(chat_42.unread_count, 2);
    let latest = transport.fetch_last_message("42").await.unwrap().unwrap();
    assert_eq!(latest.text, "menu");

    transport.acknowledge_pending().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_acknowledge_without_pending_updates_is_a_no_op() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ok(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let transport = transport_for(&server).await;
    transport.acknowledge_pending().await.unwrap();
}
