//! Sound player service.

use std::sync::Arc;

use crate::{
    animal::ports::Animal,
    console::{Console, ConsoleResult},
};

/// Plays the sound of whatever animal it is given.
#[derive(Debug, Clone)]
pub struct AnimalSound<C>
where
    C: Console,
{
    console: Arc<C>,
}

impl<C> AnimalSound<C>
where
    C: Console,
{
    /// Creates a player writing to the given console.
    #[must_use]
    pub const fn new(console: Arc<C>) -> Self {
        Self { console }
    }

    /// Makes the animal emit its sound.
    ///
    /// # Errors
    ///
    /// Returns the console error when the sound cannot be written.
    pub fn play_sound(&self, animal: &dyn Animal) -> ConsoleResult<()> {
        tracing::debug!(sound = animal.sound(), "playing animal sound");
        animal.make_sound(&*self.console)
    }
}
