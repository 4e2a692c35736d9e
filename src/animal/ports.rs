//! Sound-emitting capability.

use crate::console::{Console, ConsoleResult};

/// Sound used by animals that do not override [`Animal::sound`].
pub const DEFAULT_SOUND: &str = "The animal makes a sound";

/// Anything that can make a sound.
pub trait Animal: Send + Sync {
    /// Returns the line this animal emits.
    fn sound(&self) -> &'static str {
        DEFAULT_SOUND
    }

    /// Writes [`Animal::sound`] to the console as a single line.
    ///
    /// # Errors
    ///
    /// Returns the console error when the line cannot be written.
    fn make_sound(&self, console: &dyn Console) -> ConsoleResult<()> {
        console.write_line(self.sound())
    }
}
