//! Messages exchanged between the two players and their wire encoding.
//!
//! On the wire every message is exactly two native-endian `i32` values, row
//! first, with no length prefix or tag. A resignation travels as the
//! sentinel pair `(-1, -1)`, which no real guess can produce.

use crate::common::{Guess, ProtocolError};

/// Messages exchanged between the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A shot at the receiver's board.
    Guess(Guess),
    /// The sender's fleet is sunk; the receiver has won.
    Defeat,
}

/// Bytes in one encoded message.
pub const FRAME_LEN: usize = 8;

/// Row/column pair announcing defeat.
pub const DEFEAT_SENTINEL: (i32, i32) = (-1, -1);

#[cfg(feature = "std")]
mod wire {
    use bincode::Options;
    use serde::{Deserialize, Serialize};

    use super::{Message, DEFEAT_SENTINEL, FRAME_LEN};
    use crate::common::{Guess, ProtocolError};

    #[derive(Serialize, Deserialize)]
    struct WireFrame {
        row: i32,
        col: i32,
    }

    fn options() -> impl Options {
        bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_native_endian()
    }

    fn codec_error(e: bincode::Error) -> ProtocolError {
        ProtocolError::Codec(e.to_string())
    }

    /// Encode one message into its fixed-size frame.
    pub fn encode(msg: &Message) -> Result<[u8; FRAME_LEN], ProtocolError> {
        let (row, col) = match *msg {
            Message::Guess(Guess { row, col }) => {
                let out_of_bounds = || ProtocolError::OutOfBounds {
                    row: super::saturating_i64(row),
                    col: super::saturating_i64(col),
                };
                (
                    i32::try_from(row).map_err(|_| out_of_bounds())?,
                    i32::try_from(col).map_err(|_| out_of_bounds())?,
                )
            }
            Message::Defeat => DEFEAT_SENTINEL,
        };
        let bytes = options()
            .serialize(&WireFrame { row, col })
            .map_err(codec_error)?;
        <[u8; FRAME_LEN]>::try_from(bytes.as_slice()).map_err(|_| {
            ProtocolError::Codec(format!("expected {} bytes, encoded {}", FRAME_LEN, bytes.len()))
        })
    }

    /// Decode one fixed-size frame.
    pub fn decode(frame: &[u8; FRAME_LEN]) -> Result<Message, ProtocolError> {
        let WireFrame { row, col } = options().deserialize(frame).map_err(codec_error)?;
        if (row, col) == DEFEAT_SENTINEL {
            return Ok(Message::Defeat);
        }
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => Ok(Message::Guess(Guess::new(row, col))),
            _ => Err(ProtocolError::OutOfBounds {
                row: row.into(),
                col: col.into(),
            }),
        }
    }
}

#[cfg(feature = "std")]
pub use wire::{decode, encode};

/// Check that an incoming guess addresses an N×N board.
pub fn validate_guess(guess: Guess, size: usize) -> Result<Guess, ProtocolError> {
    if guess.within(size) {
        Ok(guess)
    } else {
        Err(ProtocolError::OutOfBounds {
            row: saturating_i64(guess.row),
            col: saturating_i64(guess.col),
        })
    }
}

fn saturating_i64(v: usize) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}
