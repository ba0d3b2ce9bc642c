//! LED wiring for word clock faces
//!
//! Maps grid coordinates, linear positions and minute markers to physical
//! indices on a single serpentine-wired LED strip.

pub mod config;
pub mod error;
pub mod strip;
pub mod wiring;

pub use config::Config;
pub use error::{Result, WiringError};
pub use strip::{PixelSink, StripSettings};
pub use wiring::{Dimensions, LayoutTable, MinuteLeds, Wiring, WiringLayout};
