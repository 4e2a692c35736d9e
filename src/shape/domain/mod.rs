//! Concrete shapes.

mod circle;
mod ellipse;
mod rectangle;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use rectangle::Rectangle;
