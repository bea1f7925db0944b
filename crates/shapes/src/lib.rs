pub mod appearance;
pub mod attributes;
pub mod image_source;
pub mod stipple;
pub mod style;

pub use appearance::*;
pub use attributes::*;
pub use image_source::*;
pub use stipple::*;
pub use style::*;
