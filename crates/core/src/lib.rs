//! Flip 7 round engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod error;
pub mod events;
pub mod game;
pub mod input;
pub mod player;
pub mod rng;
pub mod scoring;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use error::*;
pub use events::*;
pub use game::*;
pub use input::*;
pub use player::*;
pub use rng::*;
pub use scoring::*;
