//! Common types for the duel: coordinates, guess results and error enums.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::ShipKind;

/// A coordinate fired at the opponent's board, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess {
    pub row: usize,
    pub col: usize,
}

impl Guess {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates lie in `[0, size)`.
    pub const fn within(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of resolving a guess against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess hit an intact ship segment.
    Hit,
    /// Guess found water or an already-hit segment.
    Miss,
    /// Guess hit the last intact segment of a ship.
    Sink(ShipKind),
}

impl GuessResult {
    /// `true` for `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by board and placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., board too large for its storage).
    BitBoard(BitBoardError),
    /// A guess targeted a cell outside the board.
    OutOfBounds { row: usize, col: usize },
    /// A ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship, diagonals included.
    ShipTooClose,
    /// The fleet could not be placed within the configured attempt limits.
    PlacementInfeasible { kind: ShipKind, attempts: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoard(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Guess ({}, {}) is outside the board", row, col)
            }
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipTooClose => write!(f, "Ship placement touches another ship"),
            BoardError::PlacementInfeasible { kind, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                kind.name(),
                attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors raised while exchanging messages with the opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The channel reached end-of-stream before a full frame arrived.
    /// `partial` counts the bytes of the truncated frame, if any.
    ChannelClosed { partial: usize },
    /// A coordinate that cannot address the receiving board.
    OutOfBounds { row: i64, col: i64 },
    /// The wire codec rejected a frame.
    Codec(CodecMessage),
}

/// Owned codec error text; kept separate so the core stays `no_std`.
#[cfg(feature = "std")]
pub type CodecMessage = std::string::String;
#[cfg(not(feature = "std"))]
pub type CodecMessage = alloc::string::String;

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::ChannelClosed { partial: 0 } => write!(f, "Channel closed by peer"),
            ProtocolError::ChannelClosed { partial } => {
                write!(f, "Channel closed by peer mid-frame ({} bytes received)", partial)
            }
            ProtocolError::OutOfBounds { row, col } => {
                write!(f, "Received coordinate ({}, {}) is out of bounds", row, col)
            }
            ProtocolError::Codec(msg) => write!(f, "Codec error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}
