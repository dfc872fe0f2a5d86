//! Game variants and the fleet configuration handed to the placement solver.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

/// Board edge length of the classic variant.
pub const CLASSIC_SIZE: usize = 4;
/// Board edge length of the spaced variant.
pub const SPACED_SIZE: usize = 8;

/// Attempts spent on a single ship before the fleet is re-placed from scratch.
pub const DEFAULT_MAX_ATTEMPTS_PER_SHIP: usize = 1_000;
/// Whole-fleet restarts before placement is reported infeasible.
pub const DEFAULT_MAX_FLEET_RESTARTS: usize = 100;

/// Identity of a ship class: display name and the symbol drawn on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipKind {
    name: &'static str,
    symbol: char,
}

impl ShipKind {
    pub const fn new(name: &'static str, symbol: char) -> Self {
        Self { name, symbol }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// How many ships of one kind to place, and how long each one is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    kind: ShipKind,
    length: usize,
    count: usize,
}

impl ShipSpec {
    pub const fn new(kind: ShipKind, length: usize, count: usize) -> Self {
        Self {
            kind,
            length,
            count,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Whether ships may share an edge or corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spacing {
    /// Ships only have to avoid overlapping.
    Touching,
    /// No two ships may be adjacent, diagonals included.
    Separated,
}

pub const SINGLE_CELL: ShipKind = ShipKind::new("Ship", 'S');
pub const BATTLESHIP: ShipKind = ShipKind::new("Battleship", 'B');
pub const CRUISER: ShipKind = ShipKind::new("Cruiser", 'C');
pub const DESTROYER: ShipKind = ShipKind::new("Destroyer", 'D');

/// Immutable description of a fleet and of how hard to try placing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    ships: Vec<ShipSpec>,
    spacing: Spacing,
    max_attempts_per_ship: usize,
    max_fleet_restarts: usize,
}

impl FleetConfig {
    pub fn new(ships: Vec<ShipSpec>, spacing: Spacing) -> Self {
        Self {
            ships,
            spacing,
            max_attempts_per_ship: DEFAULT_MAX_ATTEMPTS_PER_SHIP,
            max_fleet_restarts: DEFAULT_MAX_FLEET_RESTARTS,
        }
    }

    /// Four single-cell ships that may touch.
    pub fn classic() -> Self {
        Self::new(
            [ShipSpec::new(SINGLE_CELL, 1, 4)].to_vec(),
            Spacing::Touching,
        )
    }

    /// One 4-cell, two 3-cell and two 2-cell ships, kept apart.
    pub fn spaced() -> Self {
        Self::new(
            [
                ShipSpec::new(BATTLESHIP, 4, 1),
                ShipSpec::new(CRUISER, 3, 2),
                ShipSpec::new(DESTROYER, 2, 2),
            ]
            .to_vec(),
            Spacing::Separated,
        )
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts_per_ship = attempts;
        self
    }

    pub fn with_max_restarts(mut self, restarts: usize) -> Self {
        self.max_fleet_restarts = restarts;
        self
    }

    pub fn ships(&self) -> &[ShipSpec] {
        &self.ships
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    pub fn max_attempts_per_ship(&self) -> usize {
        self.max_attempts_per_ship
    }

    pub fn max_fleet_restarts(&self) -> usize {
        self.max_fleet_restarts
    }

    /// Number of ships across all specs.
    pub fn ship_count(&self) -> usize {
        self.ships.iter().map(|s| s.count()).sum()
    }

    /// Number of segments the fleet occupies once placed.
    pub fn total_segments(&self) -> usize {
        self.ships.iter().map(|s| s.length() * s.count()).sum()
    }
}

/// The two supported rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// 4×4 board, four single-cell ships.
    Classic,
    /// 8×8 board, five ships that never touch.
    Spaced,
}

impl Variant {
    pub const fn board_size(self) -> usize {
        match self {
            Variant::Classic => CLASSIC_SIZE,
            Variant::Spaced => SPACED_SIZE,
        }
    }

    pub fn fleet(self) -> FleetConfig {
        match self {
            Variant::Classic => FleetConfig::classic(),
            Variant::Spaced => FleetConfig::spaced(),
        }
    }

    /// Whether the full grid is shown after every resolved guess.
    pub const fn renders_every_turn(self) -> bool {
        matches!(self, Variant::Spaced)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Spaced => "spaced",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a player process needs to set up its side of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub variant: Variant,
    pub fleet: FleetConfig,
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            fleet: variant.fleet(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_fleet(mut self, fleet: FleetConfig) -> Self {
        self.fleet = fleet;
        self
    }

    /// Seed for the opponent side, derived so both sides differ.
    pub fn opponent_seed(&self) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(1))
    }
}
