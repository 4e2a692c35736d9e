//! Notification port for sending email.

use crate::customer::domain::OutgoingEmail;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Outbound email contract. Delivery is fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait EmailSender: Send + Sync {
    /// Hands one message to the transport.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Transport`] when the transport rejects
    /// the message.
    fn send_email(&self, email: &OutgoingEmail) -> NotificationResult<()>;
}

/// Errors returned by email sender implementations.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// The mail transport failed.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl NotificationError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
