//! Product stock.

use super::Money;
use serde::{Deserialize, Serialize};

/// A product on sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
    quantity: u32,
}

impl Product {
    /// Creates a product.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Returns the quantity in stock.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Ordered list of products in stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Appends a product. Duplicates are kept.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first product equal to `product`.
    ///
    /// Returns `false` when no such product is stocked.
    pub fn remove_product(&mut self, product: &Product) -> bool {
        match self.products.iter().position(|stocked| stocked == product) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the stocked products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the value of all stock, or `None` if it overflows.
    #[must_use]
    pub fn stock_value(&self) -> Option<Money> {
        self.products.iter().try_fold(Money::default(), |acc, product| {
            let line = product
                .price()
                .cents()
                .checked_mul(u64::from(product.quantity()))?;
            acc.checked_add(Money::from_cents(line))
        })
    }
}
