//! The lockstep turn loop run by each player.

use core::fmt;

use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{Guess, GuessResult},
    player::Player,
    protocol::{validate_guess, Message},
    transport::{is_channel_closed, Transport},
};

/// Which end of the channel pair a node sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fires the first shot.
    Parent,
    /// Waits for the first shot before firing back.
    Child,
}

impl Role {
    pub const fn moves_first(self) -> bool {
        matches!(self, Role::Parent)
    }

    pub const fn opponent(self) -> Role {
        match self {
            Role::Parent => Role::Child,
            Role::Child => Role::Parent,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Parent => f.write_str("Parent"),
            Role::Child => f.write_str("Child"),
        }
    }
}

/// How the game ended for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    /// The opponent's fleet was sunk.
    Victory,
    /// This node's fleet was sunk.
    Defeat,
    /// The channel closed before either fleet was sunk.
    Abandoned,
}

/// States of the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitIncoming,
    ResolveIncoming(Guess),
    CheckOwnDefeat,
    GenerateOutgoing,
    SendOutgoing(Guess),
    Terminal(GameOutcome),
}

/// Summary of one node's game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NodeReport {
    pub role: Role,
    pub outcome: GameOutcome,
    pub guesses_sent: usize,
    pub guesses_received: usize,
    /// Segments of this node's fleet the opponent destroyed.
    pub hits_taken: usize,
}

impl NodeReport {
    fn new(role: Role) -> Self {
        Self {
            role,
            outcome: GameOutcome::Abandoned,
            guesses_sent: 0,
            guesses_received: 0,
            hits_taken: 0,
        }
    }

    /// The side whose fleet survived, if the game finished.
    pub fn winner(&self) -> Option<Role> {
        match self.outcome {
            GameOutcome::Victory => Some(self.role),
            GameOutcome::Defeat => Some(self.role.opponent()),
            GameOutcome::Abandoned => None,
        }
    }
}

/// One player: its strategy, its board and its end of the channels.
pub struct PlayerNode<const N: usize> {
    role: Role,
    player: Box<dyn Player<N>>,
    board: Board<N>,
    transport: Box<dyn Transport>,
    render_every_turn: bool,
    report: NodeReport,
}

impl<const N: usize> PlayerNode<N> {
    /// `board` must already hold the placed fleet.
    pub fn new(
        role: Role,
        player: Box<dyn Player<N>>,
        board: Board<N>,
        transport: Box<dyn Transport>,
    ) -> Self {
        Self {
            role,
            player,
            board,
            transport,
            render_every_turn: false,
            report: NodeReport::new(role),
        }
    }

    /// Log the whole grid after every resolved guess.
    pub fn render_every_turn(mut self, enabled: bool) -> Self {
        self.render_every_turn = enabled;
        self
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Play until a fleet is sunk or the opponent disappears.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<NodeReport> {
        let mut state = if self.role.moves_first() {
            TurnState::GenerateOutgoing
        } else {
            TurnState::AwaitIncoming
        };
        loop {
            log::trace!("{}: {:?}", self.role, state);
            state = match state {
                TurnState::Terminal(outcome) => {
                    self.report.outcome = outcome;
                    return Ok(self.report);
                }
                other => self.step(other, rng).await?,
            };
        }
    }

    /// Perform the work of one non-terminal state and return the next one.
    pub async fn step(&mut self, state: TurnState, rng: &mut SmallRng) -> anyhow::Result<TurnState> {
        let next = match state {
            TurnState::GenerateOutgoing => {
                let guess = self.player.select_target(rng);
                log::info!("{} guesses {}", self.role, guess);
                TurnState::SendOutgoing(guess)
            }
            TurnState::SendOutgoing(guess) => match self.transport.send(Message::Guess(guess)).await {
                Ok(()) => {
                    self.report.guesses_sent += 1;
                    TurnState::AwaitIncoming
                }
                Err(e) if is_channel_closed(&e) => self.abandon(),
                Err(e) => return Err(e),
            },
            TurnState::AwaitIncoming => match self.transport.recv().await {
                Ok(Message::Guess(guess)) => {
                    self.report.guesses_received += 1;
                    TurnState::ResolveIncoming(validate_guess(guess, N)?)
                }
                Ok(Message::Defeat) => {
                    log::info!(
                        "{} wins! {}'s ships are all sunk.",
                        self.role,
                        self.role.opponent()
                    );
                    TurnState::Terminal(GameOutcome::Victory)
                }
                Err(e) if is_channel_closed(&e) => self.abandon(),
                Err(e) => return Err(e),
            },
            TurnState::ResolveIncoming(guess) => {
                let result = self.board.guess(guess.row, guess.col)?;
                self.log_resolution(guess, result);
                if result.is_hit() {
                    self.report.hits_taken += 1;
                }
                self.player.handle_opponent_guess(guess, result);
                if self.render_every_turn {
                    log::info!("{}'s grid:\n{}", self.role, self.board);
                }
                TurnState::CheckOwnDefeat
            }
            TurnState::CheckOwnDefeat => {
                if self.board.all_sunk() {
                    log::info!(
                        "{} wins! {}'s ships are all sunk.",
                        self.role.opponent(),
                        self.role
                    );
                    match self.transport.send(Message::Defeat).await {
                        Ok(()) => {}
                        Err(e) if is_channel_closed(&e) => {
                            log::warn!("{}: opponent left before the defeat notice", self.role)
                        }
                        Err(e) => return Err(e),
                    }
                    TurnState::Terminal(GameOutcome::Defeat)
                } else {
                    TurnState::GenerateOutgoing
                }
            }
            TurnState::Terminal(outcome) => TurnState::Terminal(outcome),
        };
        Ok(next)
    }

    fn abandon(&self) -> TurnState {
        log::warn!("{}: channel to {} closed, stopping", self.role, self.role.opponent());
        TurnState::Terminal(GameOutcome::Abandoned)
    }

    fn log_resolution(&self, guess: Guess, result: GuessResult) {
        let opponent = self.role.opponent();
        match result {
            GuessResult::Hit => log::info!("{}: {} hit my ship at {}!", self.role, opponent, guess),
            GuessResult::Sink(kind) => log::info!(
                "{}: {} hit my ship at {} and sank my {}!",
                self.role,
                opponent,
                guess,
                kind
            ),
            GuessResult::Miss => log::info!("{}: {} missed at {}.", self.role, opponent, guess),
        }
    }
}
