//! Order processing service.

use std::sync::Arc;

use crate::order::{
    domain::Order,
    ports::{LogResult, Logger},
};

/// Processes orders and logs each one through an injected [`Logger`].
#[derive(Debug, Clone)]
pub struct OrderProcessor<L>
where
    L: Logger,
{
    logger: Arc<L>,
}

impl<L> OrderProcessor<L>
where
    L: Logger,
{
    /// Creates a processor that reports through `logger`.
    #[must_use]
    pub const fn new(logger: Arc<L>) -> Self {
        Self { logger }
    }

    /// Processes an order, logging exactly one `"Order processed: …"` line.
    ///
    /// # Errors
    ///
    /// Returns the logger error when the message cannot be recorded.
    pub fn process(&self, order: &Order) -> LogResult<()> {
        tracing::debug!(order_id = order.id(), "processing order");
        self.logger.log(&format!("Order processed: {order}"))
    }
}
