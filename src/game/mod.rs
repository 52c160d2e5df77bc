pub mod alien;

pub use alien::{Alien, DEFAULT_HEALTH};
