#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use duel::transport::Transport;
use duel::{
    Board, BoardError, FleetConfig, Guess, Message, Orientation, PlacedShip, PlacementStats,
    Player, Role, Spacing, SINGLE_CELL,
};
use rand::rngs::SmallRng;

/// Player with fixed single-cell ships and a fixed list of shots.
/// Once the shots run out it keeps firing at (0, 0).
pub struct ScriptedPlayer {
    ships: Vec<(usize, usize)>,
    shots: VecDeque<Guess>,
}

impl ScriptedPlayer {
    pub fn new(ships: &[(usize, usize)], shots: &[(usize, usize)]) -> Self {
        Self {
            ships: ships.to_vec(),
            shots: shots.iter().map(|&(r, c)| Guess::new(r, c)).collect(),
        }
    }
}

impl<const N: usize> Player<N> for ScriptedPlayer {
    fn place_fleet(
        &mut self,
        _rng: &mut SmallRng,
        board: &mut Board<N>,
        _fleet: &FleetConfig,
    ) -> Result<PlacementStats, BoardError> {
        board.clear();
        for &(r, c) in &self.ships {
            let ship = PlacedShip::<N>::new(SINGLE_CELL, 1, Orientation::Horizontal, r, c)?;
            board.place(ship, Spacing::Touching)?;
        }
        Ok(PlacementStats::default())
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> Guess {
        self.shots.pop_front().unwrap_or(Guess::new(0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Sent(Message),
    Received(Message),
}

pub type EventLog = Arc<Mutex<Vec<(Role, Event)>>>;

/// Transport wrapper that appends every send and receive to a shared log.
/// Sends are logged before they are handed to the inner transport.
pub struct RecordingTransport<T> {
    inner: T,
    role: Role,
    log: EventLog,
}

impl<T: Transport> RecordingTransport<T> {
    pub fn new(inner: T, role: Role, log: EventLog) -> Self {
        Self { inner, role, log }
    }
}

#[async_trait::async_trait]
impl<T: Transport> Transport for RecordingTransport<T> {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.log.lock().unwrap().push((self.role, Event::Sent(msg)));
        self.inner.send(msg).await
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let msg = self.inner.recv().await?;
        self.log.lock().unwrap().push((self.role, Event::Received(msg)));
        Ok(msg)
    }
}
