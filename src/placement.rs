//! Random-retry fleet placement with an optional no-touching rule.

use rand::Rng;

use crate::board::{Board, PlacedShip};
use crate::common::BoardError;
use crate::config::{FleetConfig, ShipSpec};
use crate::ship::Orientation;

/// How much work a successful placement took.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementStats {
    /// Candidate positions drawn, across all restarts.
    pub attempts: usize,
    /// Times the board was cleared and the fleet started over.
    pub restarts: usize,
}

/// Draw one candidate: orientation, row and column, each uniform over the
/// whole board. The candidate may hang off the edge.
fn random_candidate<R: Rng, const N: usize>(
    rng: &mut R,
    spec: &ShipSpec,
) -> Result<PlacedShip<N>, BoardError> {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let row = rng.random_range(0..N);
    let col = rng.random_range(0..N);
    PlacedShip::<N>::new(spec.kind(), spec.length(), orientation, row, col)
}

/// Place one ship, retrying fresh candidates until one fits or the
/// per-ship budget runs out.
fn place_ship<R: Rng, const N: usize>(
    board: &mut Board<N>,
    spec: &ShipSpec,
    fleet: &FleetConfig,
    rng: &mut R,
    stats: &mut PlacementStats,
) -> Result<(), BoardError> {
    for _ in 0..fleet.max_attempts_per_ship() {
        stats.attempts += 1;
        let ship = match random_candidate::<R, N>(rng, spec) {
            Ok(ship) => ship,
            Err(BoardError::ShipOutOfBounds) => continue,
            Err(e) => return Err(e),
        };
        match board.place(ship, fleet.spacing()) {
            Ok(()) => return Ok(()),
            Err(BoardError::ShipOverlaps) | Err(BoardError::ShipTooClose) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(BoardError::PlacementInfeasible {
        kind: spec.kind(),
        attempts: stats.attempts,
    })
}

/// Place every ship of `fleet` on `board`, which is cleared first.
///
/// Each ship is retried with freshly drawn positions up to
/// `max_attempts_per_ship` times. When a ship runs out of attempts the board
/// is wiped and the whole fleet starts over, at most `max_fleet_restarts`
/// times, before `PlacementInfeasible` is returned.
pub fn place_fleet<R: Rng, const N: usize>(
    board: &mut Board<N>,
    fleet: &FleetConfig,
    rng: &mut R,
) -> Result<PlacementStats, BoardError> {
    let unplaceable = |s: &&ShipSpec| s.count() > 0 && (s.length() == 0 || s.length() > N);
    if let Some(spec) = fleet.ships().iter().find(unplaceable) {
        return Err(BoardError::PlacementInfeasible {
            kind: spec.kind(),
            attempts: 0,
        });
    }

    let mut stats = PlacementStats::default();
    loop {
        board.clear();
        let outcome = fleet.ships().iter().try_for_each(|spec| {
            (0..spec.count()).try_for_each(|_| place_ship(board, spec, fleet, rng, &mut stats))
        });
        match outcome {
            Ok(()) => {
                log::debug!(
                    "placed {} ships in {} attempts ({} restarts)",
                    board.ships().len(),
                    stats.attempts,
                    stats.restarts
                );
                return Ok(stats);
            }
            Err(BoardError::PlacementInfeasible { .. }) if stats.restarts < fleet.max_fleet_restarts() => {
                stats.restarts += 1;
            }
            Err(e) => {
                board.clear();
                return Err(e);
            }
        }
    }
}
