use anyhow::Result;
use chat_mirror::{ChatError, ConfigProvider, HttpMessageApi, Message, MessageApi, MessageDraft};
use httpmock::prelude::*;
use serde_json::json;

struct TestConfig {
    base_url: String,
    timeout_secs: u64,
}

impl TestConfig {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout_secs: 5,
        }
    }
}

impl ConfigProvider for TestConfig {
    fn api_base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

fn message_json(id: i64, text: &str, author: &str) -> serde_json::Value {
    json!({
        "id": id,
        "uuid": format!("00000000-0000-4000-8000-{:012}", id),
        "message": text,
        "author": author
    })
}

#[tokio::test]
async fn full_crud_round_trip_against_a_scripted_server() -> Result<()> {
    let server = MockServer::start();
    let api = HttpMessageApi::new(TestConfig::new(server.base_url()));

    // Phase 1: the server starts with one message.
    let mut list_mock = server.mock(|when, then| {
        when.method(GET).path("/messages");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([message_json(1, "old news", "Aoife")]));
    });

    let history = api.list_messages().await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].author, "Aoife");

    // Post a new message; the server assigns id 2.
    let post_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/message")
            .json_body(json!({"message": "Hello from Earth", "author": "Seanie X"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(message_json(2, "Hello from Earth", "Seanie X"));
    });

    let created = api
        .post_message(&MessageDraft::new("Hello from Earth", "Seanie X"))
        .await?;
    assert_eq!(created.id, 2);
    post_mock.assert();

    // Edit it in place.
    let mut edited = created.clone();
    edited.message = "Hello, I'm Ryan!!!".to_string();
    let edited_json = serde_json::to_value(&edited)?;

    let put_body = edited_json.clone();
    let put_response = edited_json.clone();
    let put_mock = server.mock(move |when, then| {
        when.method(PUT).path("/message").json_body(put_body);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(put_response);
    });

    let updated = api.edit_message(&edited).await?;
    assert_eq!(updated.message, "Hello, I'm Ryan!!!");
    put_mock.assert();

    // Phase 2: the listing now reflects the edit.
    list_mock.delete();
    let phase_two = json!([message_json(1, "old news", "Aoife"), edited_json.clone()]);
    let mut list_mock = server.mock(move |when, then| {
        when.method(GET).path("/messages");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(phase_two);
    });

    let after_edit = api.list_messages().await?;
    assert_eq!(after_edit.len(), 2);
    assert_eq!(after_edit[1].message, "Hello, I'm Ryan!!!");

    // Delete it again.
    let delete_mock = server.mock(|when, then| {
        when.method(DELETE).path("/message/2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"message": "deleted"}));
    });

    api.delete_message(2).await?;
    delete_mock.assert();

    // Phase 3: back to the original listing.
    list_mock.delete();
    server.mock(|when, then| {
        when.method(GET).path("/messages");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([message_json(1, "old news", "Aoife")]));
    });

    let after_delete = api.list_messages().await?;
    assert_eq!(after_delete.len(), 1);
    assert_eq!(after_delete[0].id, 1);

    Ok(())
}

#[tokio::test]
async fn editing_a_message_the_server_no_longer_has_fails_loudly() -> Result<()> {
    let server = MockServer::start();
    let api = HttpMessageApi::new(TestConfig::new(server.base_url()));

    let put_mock = server.mock(|when, then| {
        when.method(PUT).path("/message");
        then.status(404).body("no such message");
    });

    let ghost: Message = serde_json::from_value(message_json(99, "gone", "Seanie X"))?;
    let err = api.edit_message(&ghost).await.unwrap_err();

    put_mock.assert();
    match err {
        ChatError::ApiStatusError { status, endpoint } => {
            assert_eq!(status, 404);
            assert!(endpoint.ends_with("/message"));
        }
        other => panic!("expected ApiStatusError, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn slow_server_trips_the_configured_timeout() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/messages");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([]))
            .delay(std::time::Duration::from_secs(3));
    });

    let mut config = TestConfig::new(server.base_url());
    config.timeout_secs = 1;
    let api = HttpMessageApi::new(config);

    let err = api.list_messages().await.unwrap_err();
    assert!(matches!(err, ChatError::ApiError(_)));

    Ok(())
}
