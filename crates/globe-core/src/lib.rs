pub mod anim;
pub mod config;
pub mod constants;
pub mod error;
pub mod glyph;
pub mod grid;
pub mod raster;
pub mod rotation;
pub mod sphere;
pub mod stats;

pub use anim::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use glyph::*;
pub use grid::*;
pub use raster::*;
pub use rotation::*;
pub use sphere::RingKind;
pub use stats::*;
