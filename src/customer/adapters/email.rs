//! Email sender adapters.

use std::sync::{Arc, RwLock};

use crate::customer::{
    domain::OutgoingEmail,
    ports::{EmailSender, NotificationError, NotificationResult},
};

/// Transport stub that accepts every message and delivers nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmailSender;

impl NoopEmailSender {
    /// Creates the stub.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EmailSender for NoopEmailSender {
    fn send_email(&self, email: &OutgoingEmail) -> NotificationResult<()> {
        tracing::debug!(to = %email.to(), subject = email.subject(), "email accepted");
        Ok(())
    }
}

/// Sender that keeps every message in an in-memory outbox.
#[derive(Debug, Clone, Default)]
pub struct OutboxEmailSender {
    outbox: Arc<RwLock<Vec<OutgoingEmail>>>,
}

impl OutboxEmailSender {
    /// Creates an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every sent message in send order.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Transport`] when the lock is poisoned.
    pub fn sent(&self) -> NotificationResult<Vec<OutgoingEmail>> {
        let outbox = self.outbox.read().map_err(|err| {
            NotificationError::transport(std::io::Error::other(err.to_string()))
        })?;
        Ok(outbox.clone())
    }
}

impl EmailSender for OutboxEmailSender {
    fn send_email(&self, email: &OutgoingEmail) -> NotificationResult<()> {
        let mut outbox = self.outbox.write().map_err(|err| {
            NotificationError::transport(std::io::Error::other(err.to_string()))
        })?;
        outbox.push(email.clone());
        Ok(())
    }
}
