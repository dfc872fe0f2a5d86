use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    common::{BoardError, Guess, GuessResult},
    config::FleetConfig,
    placement::{place_fleet, PlacementStats},
};

/// Interface implemented by the side that decides where ships go and where
/// to fire on an N×N board.
pub trait Player<const N: usize>: Send {
    /// Place all ships onto the provided board.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board<N>,
        fleet: &FleetConfig,
    ) -> Result<PlacementStats, BoardError>;

    /// Choose the next coordinate to fire at.
    fn select_target(&mut self, rng: &mut SmallRng) -> Guess;

    /// Inform the player of an opponent guess against its board.
    fn handle_opponent_guess(&mut self, _guess: Guess, _result: GuessResult) {}
}

/// Draw a row and a column independently and uniformly from `[0, size)`.
/// Earlier guesses are not remembered, so repeats are possible.
pub fn next_guess<R: Rng>(size: usize, rng: &mut R) -> Guess {
    let row = rng.random_range(0..size);
    let col = rng.random_range(0..size);
    Guess::new(row, col)
}

/// Player that places randomly and fires uniformly at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl<const N: usize> Player<N> for RandomPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board<N>,
        fleet: &FleetConfig,
    ) -> Result<PlacementStats, BoardError> {
        place_fleet(board, fleet, rng)
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Guess {
        next_guess(N, rng)
    }
}
