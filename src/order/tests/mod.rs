//! Unit tests for order processing and inventory.
