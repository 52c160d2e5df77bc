pub mod config;
pub mod game;

pub use config::GameConfig;
pub use game::Alien;
