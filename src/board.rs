//! A player's own grid: ship placement, hit detection and defeat check.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Guess, GuessResult};
use crate::config::{ShipKind, Spacing};
use crate::ship::Ship;

/// Bitboard storage for boards up to 8×8.
pub type Grid<const N: usize> = BitBoard<u64, N>;

/// Ship type used on a `Board<N>`.
pub type PlacedShip<const N: usize> = Ship<u64, N>;

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    ShipSegment(ShipKind),
    Hit,
}

/// An N×N grid owned by one player.
#[derive(Clone, PartialEq, Eq)]
pub struct Board<const N: usize> {
    ships: Vec<PlacedShip<N>>,
    ship_map: Grid<N>,
    hits: Grid<N>,
}

impl<const N: usize> Board<N> {
    /// Create a board of water. Fails if N×N cells do not fit the storage.
    pub fn new() -> Result<Self, BoardError> {
        let empty = Grid::<N>::try_new()?;
        Ok(Board {
            ships: Vec::new(),
            ship_map: empty,
            hits: empty,
        })
    }

    /// Edge length of the board.
    pub const fn size(&self) -> usize {
        N
    }

    /// Remove every ship and hit, leaving water.
    pub fn clear(&mut self) {
        self.ships.clear();
        self.ship_map = Grid::new();
        self.hits = Grid::new();
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[PlacedShip<N>] {
        &self.ships
    }

    /// Every cell a ship was placed on, hit or not.
    pub fn ship_map(&self) -> Grid<N> {
        self.ship_map
    }

    /// Cells that have been hit.
    pub fn hits(&self) -> Grid<N> {
        self.hits
    }

    /// Ship cells that have not been hit yet.
    pub fn segments(&self) -> Grid<N> {
        self.ship_map & !self.hits
    }

    /// Whether `ship` could be added under the given spacing rule.
    pub fn check_placement(&self, ship: &PlacedShip<N>, spacing: Spacing) -> Result<(), BoardError> {
        if !(self.ship_map & ship.mask()).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        if spacing == Spacing::Separated && !(self.ship_map & ship.halo()).is_empty() {
            return Err(BoardError::ShipTooClose);
        }
        Ok(())
    }

    /// Add a ship to the board.
    pub fn place(&mut self, ship: PlacedShip<N>, spacing: Spacing) -> Result<(), BoardError> {
        self.check_placement(&ship, spacing)?;
        self.ship_map |= ship.mask();
        self.ships.push(ship);
        Ok(())
    }

    /// Contents of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.hits.get(row, col)? {
            return Ok(Cell::Hit);
        }
        Ok(self
            .ships
            .iter()
            .find(|s| s.covers(row, col))
            .map_or(Cell::Water, |s| Cell::ShipSegment(s.kind())))
    }

    /// Resolve a guess at (row, col), turning an intact segment into a hit.
    /// Water and already-hit cells report a miss and stay unchanged.
    pub fn guess(&mut self, row: usize, col: usize) -> Result<GuessResult, BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if !self.segments().get(row, col)? {
            return Ok(GuessResult::Miss);
        }
        self.hits.set(row, col)?;
        // ship_map is the union of ship masks, so some ship covers the cell.
        match self.ships.iter_mut().find(|s| s.covers(row, col)) {
            Some(ship) => {
                ship.guess(row, col);
                if ship.is_sunk() {
                    Ok(GuessResult::Sink(ship.kind()))
                } else {
                    Ok(GuessResult::Hit)
                }
            }
            None => Ok(GuessResult::Hit),
        }
    }

    /// Whether the guess struck an intact ship segment. Marks the cell hit.
    pub fn check_hit(&mut self, guess: Guess) -> Result<bool, BoardError> {
        Ok(self.guess(guess.row, guess.col)?.is_hit())
    }

    /// Returns `true` when no intact ship segment remains.
    pub fn all_sunk(&self) -> bool {
        self.segments().is_empty()
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..N {
            write!(f, " {}", c)?;
        }
        for r in 0..N {
            write!(f, "\n{} ", r)?;
            for c in 0..N {
                let ch = match self.cell(r, c).map_err(|_| fmt::Error)? {
                    Cell::Water => '.',
                    Cell::ShipSegment(kind) => kind.symbol(),
                    Cell::Hit => 'X',
                };
                write!(f, " {}", ch)?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.ships
        )
    }
}
