//! Concrete animals.

use serde::{Deserialize, Serialize};

use crate::animal::ports::Animal;

/// An animal with no particular voice; keeps the default sound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericAnimal;

impl Animal for GenericAnimal {}

/// A dog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog;

impl Animal for Dog {
    fn sound(&self) -> &'static str {
        "The dog barks"
    }
}

/// A cat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cat;

impl Animal for Cat {
    fn sound(&self) -> &'static str {
        "The cat meows"
    }
}
