use reqwest::blocking::Client;
use serde::Serialize;
use tripwire_core::{Notifier, NotifyError};
use tripwire_types::Credentials;

/// Blocking client for the channel messages endpoint of the Discord REST API
#[derive(Clone)]
pub struct DiscordClient {
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct CreateMessage<'a> {
    content: &'a str,
}

impl DiscordClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn messages_url(&self, channel_id: &str) -> String {
        format!("{}/channels/{}/messages", self.base_url, channel_id)
    }

    /// Post `content` to the channel, single attempt
    pub fn create_message(&self, content: &str, credentials: &Credentials) -> Result<(), NotifyError> {
        if !credentials.is_complete() {
            return Err(NotifyError::MissingCredentials);
        }

        let response = self
            .client
            .post(self.messages_url(&credentials.channel_id))
            .header(reqwest::header::AUTHORIZATION, &credentials.token)
            .json(&CreateMessage { content })
            .send()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Discord accepted message for channel {}", credentials.channel_id);
        Ok(())
    }
}

impl Notifier for DiscordClient {
    fn send(&self, message: &str, credentials: &Credentials) -> Result<(), NotifyError> {
        self.create_message(message, credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_url_is_channel_scoped() {
        let client = DiscordClient::new("https://discord.com/api/v10/");
        assert_eq!(
            client.messages_url("42"),
            "https://discord.com/api/v10/channels/42/messages"
        );
    }
}
