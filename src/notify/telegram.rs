//! Telegram operator notifications.
//!
//! Posts a one-line match summary to the configured operator chat via the
//! Bot API. Configured entirely from the environment; absent configuration
//! means notifications are disabled.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::{MatchFinished, MatchNotifier};
use crate::domain::MatchWinner;
use crate::error::AppError;

pub struct TelegramNotifier {
    http: reqwest::Client,
    api_base: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Build from `BOT_TOKEN` and `OPERATOR_CHAT_ID`; `None` when either is
    /// unset.
    pub fn from_env() -> Option<Self> {
        let token = std::env::var("BOT_TOKEN").ok()?;
        let chat_id = std::env::var("OPERATOR_CHAT_ID").ok()?;
        Some(Self::new(
            format!("https://api.telegram.org/bot{token}"),
            chat_id,
        ))
    }

    pub fn new(api_base: String, chat_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base,
            chat_id,
        }
    }

    fn summary(event: &MatchFinished) -> String {
        let name = |idx: usize| -> &str {
            event.display_names[idx]
                .as_deref()
                .unwrap_or(if idx == 0 { "p1" } else { "p2" })
        };
        let winner = match event.result.winner {
            MatchWinner::P1 => format!("{} wins", name(0)),
            MatchWinner::P2 => format!("{} wins", name(1)),
            MatchWinner::Draw => "draw".to_string(),
        };
        format!(
            "Chahar Barg {}: {} ({} {} : {} {})",
            event.room_id,
            winner,
            name(0),
            event.result.p1.total,
            name(1),
            event.result.p2.total,
        )
    }
}

#[async_trait]
impl MatchNotifier for TelegramNotifier {
    async fn match_finished(&self, event: &MatchFinished) -> Result<(), AppError> {
        let text = Self::summary(event);
        let url = format!("{}/sendMessage", self.api_base);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await
            .map_err(|err| AppError::notify(format!("sendMessage request failed: {err}")))?;

        response
            .error_for_status()
            .map_err(|err| AppError::notify(format!("sendMessage rejected: {err}")))?;

        info!(room_id = %event.room_id, "delivered match result to operator");
        Ok(())
    }
}
