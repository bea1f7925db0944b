pub mod color;
pub mod handles;

// Foundation crate: small, well-tested primitives only.
pub use color::*;
pub use handles::*;
