use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Error,
    Success,
}

/// Transient footer message, replaced by the next one and cleared on expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct MessageState {
    pub current: Option<StatusMessage>,
}

impl MessageState {
    const ERROR_TIMEOUT: Duration = Duration::from_secs(3);
    const SUCCESS_TIMEOUT: Duration = Duration::from_secs(1);

    pub fn set_error_at(&mut self, text: String, now: Instant) {
        self.set(MessageLevel::Error, text, now + Self::ERROR_TIMEOUT);
    }

    pub fn set_success_at(&mut self, text: String, now: Instant) {
        self.set(MessageLevel::Success, text, now + Self::SUCCESS_TIMEOUT);
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|m| m.expires_at)
    }

    /// Returns true when a message was removed.
    pub fn clear_expired_at(&mut self, now: Instant) -> bool {
        if self.expires_at().is_some_and(|at| at <= now) {
            self.current = None;
            return true;
        }
        false
    }

    fn set(&mut self, level: MessageLevel, text: String, expires_at: Instant) {
        self.current = Some(StatusMessage {
            level,
            text,
            expires_at,
        });
    }
}
