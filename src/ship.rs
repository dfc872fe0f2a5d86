//! Ship geometry using our `BitBoard`.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::ShipKind;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship placed on an N×N board, with hits tracked in a `BitBoard`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    kind: ShipKind,
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BitBoard<T, N>,
    hits: BitBoard<T, N>,
}

impl<T, const N: usize> Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Lay out a ship of `length` cells starting at (`row`, `col`) and
    /// extending right or down.
    pub fn new(
        kind: ShipKind,
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let (end_row, end_col) = match orientation {
            Orientation::Horizontal => (row, col + length),
            Orientation::Vertical => (row + length, col),
        };
        if length == 0 || row >= N || col >= N || end_row > N || end_col > N {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mask = BitBoard::<T, N>::from_iter((0..length).map(|i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }))?;

        Ok(Ship {
            kind,
            length,
            orientation,
            row,
            col,
            mask,
            hits: BitBoard::new(),
        })
    }

    /// Whether the ship covers (`row`, `col`).
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }

    /// Register a hit at (`row`, `col`).
    /// Returns `true` if the ship covers that cell.
    pub fn guess(&mut self, row: usize, col: usize) -> bool {
        if self.covers(row, col) {
            let _ = self.hits.set(row, col);
            true
        } else {
            false
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.length
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    /// The ship's cells plus every cell touching them.
    pub fn halo(&self) -> BitBoard<T, N> {
        self.mask.dilate()
    }
}

impl<T, const N: usize> fmt::Debug for Ship<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.kind.name(),
            self.row,
            self.col,
            self.orientation,
            self.hits.count_ones(),
            self.length,
        )
    }
}
