//! Asteroid field generation: stamps out many noise-displaced instances of a
//! shared multi-level geosphere.

mod generate;
mod instance;
mod params;

pub use generate::AsteroidField;
pub use instance::{InstanceParams, draw_instance_params};
pub use params::FieldParams;
