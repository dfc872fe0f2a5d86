#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
pub mod duel;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
#[cfg(feature = "std")]
pub mod player_node;
pub mod protocol;
mod ship;
#[cfg(feature = "std")]
pub mod supervisor;
#[cfg(feature = "std")]
pub mod transport;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use duel::{make_rng, prepare_node, run_local, run_seeded, DuelReport};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_node::*;
pub use protocol::Message;
pub use ship::*;
