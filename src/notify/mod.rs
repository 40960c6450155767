//! Operator notification boundary.
//!
//! When a match finishes the registry emits one `MatchFinished` per room,
//! guarded so it cannot fire twice. Delivery is best-effort: failures are
//! logged and never touch room state or the players' experience.

pub mod telegram;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::FinalResult;
use crate::error::AppError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFinished {
    pub room_id: String,
    pub display_names: [Option<String>; 2],
    pub external_ids: [Option<String>; 2],
    pub result: FinalResult,
}

#[async_trait]
pub trait MatchNotifier: Send + Sync {
    async fn match_finished(&self, event: &MatchFinished) -> Result<(), AppError>;
}

/// Used when no operator channel is configured.
pub struct NoopNotifier;

#[async_trait]
impl MatchNotifier for NoopNotifier {
    async fn match_finished(&self, _event: &MatchFinished) -> Result<(), AppError> {
        Ok(())
    }
}
