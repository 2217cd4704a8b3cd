//! Layered coherent noise for asteroid surface displacement.

mod octave;

pub use octave::OctaveNoise;
