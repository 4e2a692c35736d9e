//! Area capability.

/// Anything with a computable planar area.
///
/// Implementations must be total and deterministic: the same value always
/// yields the same area and never panics.
#[cfg_attr(test, mockall::automock)]
pub trait Shape: Send + Sync {
    /// Returns the area of the shape.
    fn area(&self) -> f64;

    /// Returns a short human-readable name for diagnostics.
    fn name(&self) -> &'static str;
}
