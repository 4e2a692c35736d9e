//! Domain model for orders and stock.

mod inventory;
mod money;
mod order;

pub use inventory::{Inventory, Product};
pub use money::Money;
pub use order::Order;
