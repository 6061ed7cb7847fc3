//! Core functionality used across the crate.

pub mod distance;
pub mod location;
pub mod orientation;
pub mod score;

pub use distance::Distance;
pub use location::Buffer;
pub use location::Located;
pub use location::Position;
pub use orientation::Orientable;
pub use orientation::Orientation;
pub use score::Scored;
