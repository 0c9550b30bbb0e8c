use super::LookupEvent;
use tokio::sync::mpsc;

/// Non-blocking emitter for lookup events.
///
/// Uses an unbounded channel so `emit` never awaits. Events are
/// fire-and-forget: when the emitter is disabled or the receiver is gone they
/// are dropped silently.
#[derive(Clone)]
pub struct LookupEventEmitter {
    sender: Option<mpsc::UnboundedSender<LookupEvent>>,
}

impl LookupEventEmitter {
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    /// Creates an enabled emitter and the receiver for the consumer task.
    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<LookupEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sender: Some(tx) }, rx)
    }

    pub fn emit(&self, event: LookupEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl Default for LookupEventEmitter {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for LookupEventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupEventEmitter")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
