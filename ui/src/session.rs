use std::sync::Arc;
use tokio::sync::RwLock;

/// Single owner of the emotion context.
///
/// Set by mood analysis and read by later search, view and tracking calls.
/// Clones share the same value; reads and writes are serialized by the lock,
/// but a flow that read the value before a concurrent analysis finished keeps
/// the stale reading.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current_emotion: Arc<RwLock<Option<String>>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn emotion(&self) -> Option<String> {
        self.current_emotion.read().await.clone()
    }

    /// Overwrites the context; blank values clear it.
    pub async fn set_emotion(&self, emotion: &str) {
        let value = match emotion.trim() {
            "" => None,
            trimmed => Some(trimmed.to_string()),
        };
        *self.current_emotion.write().await = value;
    }

    pub async fn clear(&self) {
        *self.current_emotion.write().await = None;
    }
}
