use std::sync::Arc;

use crate::notify::MatchNotifier;
use crate::services::rooms::RoomRegistry;
use crate::ws::hub::SessionHub;

/// Application state containing shared resources
pub struct AppState {
    rooms: RoomRegistry,
    hub: SessionHub,
    notifier: Arc<dyn MatchNotifier>,
}

impl AppState {
    /// Create a new AppState with the given match notifier
    pub fn new(notifier: Arc<dyn MatchNotifier>) -> Self {
        Self {
            rooms: RoomRegistry::new(),
            hub: SessionHub::new(),
            notifier,
        }
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    pub fn hub(&self) -> &SessionHub {
        &self.hub
    }

    pub fn notifier(&self) -> Arc<dyn MatchNotifier> {
        self.notifier.clone()
    }

    /// Create a test AppState that swallows notifications
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(Arc::new(crate::notify::NoopNotifier))
    }
}
