use crate::domain::model::{Message, MessageDraft};
use crate::domain::ports::{ConfigProvider, MessageApi};
use crate::utils::error::{ChatError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// REST client for the chat server. Paths are fixed by the server:
/// `GET /messages`, `POST /message`, `PUT /message`, `DELETE /message/{id}`.
pub struct HttpMessageApi<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpMessageApi<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.api_base_url().trim_end_matches('/'),
            path
        )
    }

    fn apply_request_options(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(headers) = self.config.headers() {
            for (key, value) in headers {
                request = request.header(key, value);
            }
        }
        request.timeout(Duration::from_secs(self.config.request_timeout_secs()))
    }

    fn ensure_success(endpoint: &str, status: reqwest::StatusCode) -> Result<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ChatError::ApiStatusError {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> MessageApi for HttpMessageApi<C> {
    async fn list_messages(&self) -> Result<Vec<Message>> {
        let endpoint = self.endpoint("/messages");
        tracing::debug!("📡 GET {}", endpoint);

        let request = self.apply_request_options(self.client.get(&endpoint));
        let response = request.send().await?;
        tracing::debug!("📡 Response status: {}", response.status());

        Self::ensure_success(&endpoint, response.status())?;
        let messages = response.json::<Vec<Message>>().await?;
        tracing::debug!("📡 Fetched {} messages", messages.len());
        Ok(messages)
    }

    async fn post_message(&self, draft: &MessageDraft) -> Result<Message> {
        let endpoint = self.endpoint("/message");
        tracing::debug!("📡 POST {} (author: {})", endpoint, draft.author);

        let request = self.apply_request_options(self.client.post(&endpoint).json(draft));
        let response = request.send().await?;
        tracing::debug!("📡 Response status: {}", response.status());

        Self::ensure_success(&endpoint, response.status())?;
        let created = response.json::<Message>().await?;
        tracing::debug!("📡 Created message {}", created.id);
        Ok(created)
    }

    async fn edit_message(&self, message: &Message) -> Result<Message> {
        let endpoint = self.endpoint("/message");
        tracing::debug!("📡 PUT {} (id: {})", endpoint, message.id);

        let request = self.apply_request_options(self.client.put(&endpoint).json(message));
        let response = request.send().await?;
        tracing::debug!("📡 Response status: {}", response.status());

        Self::ensure_success(&endpoint, response.status())?;
        let updated = response.json::<Message>().await?;
        Ok(updated)
    }

    async fn delete_message(&self, id: i64) -> Result<()> {
        let endpoint = self.endpoint(&format!("/message/{}", id));
        tracing::debug!("📡 DELETE {}", endpoint);

        let request = self.apply_request_options(self.client.delete(&endpoint));
        let response = request.send().await?;
        tracing::debug!("📡 Response status: {}", response.status());

        Self::ensure_success(&endpoint, response.status())?;
        // The server acks with a body we do not need beyond the log.
        let ack = response.text().await?;
        tracing::debug!("📡 Delete ack: {}", ack);
        Ok(())
    }
}
