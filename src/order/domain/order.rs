//! Customer order.

use super::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An order placed by a customer.
///
/// Displays as `"{id}, {customer_name}, {total}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: u64,
    customer_name: String,
    total: Money,
}

impl Order {
    /// Creates an order.
    #[must_use]
    pub fn new(id: u64, customer_name: impl Into<String>, total: Money) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            total,
        }
    }

    /// Returns the order identifier.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the name of the ordering customer.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the order total.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.id, self.customer_name, self.total)
    }
}
