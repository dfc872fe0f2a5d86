//! Setting up a player and running both players inside one process.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::{
    board::Board,
    config::{GameConfig, Variant, CLASSIC_SIZE, SPACED_SIZE},
    player::{Player, RandomPlayer},
    player_node::{NodeReport, PlayerNode, Role},
    transport::{in_memory::InMemoryTransport, Transport},
};

/// A seeded generator, or one seeded from the thread RNG when `seed` is `None`.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Create a board, place the fleet on it and wrap everything in a node.
pub fn prepare_node<const N: usize>(
    role: Role,
    config: &GameConfig,
    mut player: Box<dyn Player<N>>,
    transport: Box<dyn Transport>,
    rng: &mut SmallRng,
) -> anyhow::Result<PlayerNode<N>> {
    let mut board = Board::<N>::new()?;
    let stats = player.place_fleet(rng, &mut board, &config.fleet)?;
    log::debug!(
        "{} placed its fleet in {} attempts ({} restarts)",
        role,
        stats.attempts,
        stats.restarts
    );
    log::info!("{}'s grid:\n{}", role, board);
    Ok(PlayerNode::new(role, player, board, transport)
        .render_every_turn(config.variant.renders_every_turn()))
}

/// Reports from both sides of one finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DuelReport {
    pub variant: Variant,
    pub parent: NodeReport,
    pub child: NodeReport,
}

impl DuelReport {
    /// The side both reports agree won, if any.
    pub fn winner(&self) -> Option<Role> {
        match (self.parent.winner(), self.child.winner()) {
            (Some(a), Some(b)) if a == b => Some(a),
            _ => None,
        }
    }
}

/// Play a full game between two nodes in this process over typed channels.
pub async fn run_nodes<const N: usize>(
    mut parent: PlayerNode<N>,
    mut child: PlayerNode<N>,
    mut parent_rng: SmallRng,
    mut child_rng: SmallRng,
) -> anyhow::Result<(NodeReport, NodeReport)> {
    let parent_future = async move { parent.run(&mut parent_rng).await };
    let child_future = async move { child.run(&mut child_rng).await };
    tokio::try_join!(parent_future, child_future)
}

async fn run_seeded_sized<const N: usize>(
    config: &GameConfig,
    parent_seed: Option<u64>,
    child_seed: Option<u64>,
) -> anyhow::Result<DuelReport> {
    let mut parent_rng = make_rng(parent_seed);
    let mut child_rng = make_rng(child_seed);
    let (t1, t2) = InMemoryTransport::pair();
    let parent = prepare_node::<N>(
        Role::Parent,
        config,
        Box::new(RandomPlayer::new()),
        Box::new(t1),
        &mut parent_rng,
    )?;
    let child = prepare_node::<N>(
        Role::Child,
        config,
        Box::new(RandomPlayer::new()),
        Box::new(t2),
        &mut child_rng,
    )?;
    let (parent, child) = run_nodes(parent, child, parent_rng, child_rng).await?;
    Ok(DuelReport {
        variant: config.variant,
        parent,
        child,
    })
}

/// Run both players in this process with explicit seeds for each side.
pub async fn run_seeded(
    config: &GameConfig,
    parent_seed: Option<u64>,
    child_seed: Option<u64>,
) -> anyhow::Result<DuelReport> {
    match config.variant {
        Variant::Classic => run_seeded_sized::<CLASSIC_SIZE>(config, parent_seed, child_seed).await,
        Variant::Spaced => run_seeded_sized::<SPACED_SIZE>(config, parent_seed, child_seed).await,
    }
}

/// Run both players of `config` as tasks of the current runtime, seeding the
/// child the same way a spawned child process would be.
pub async fn run_local(config: &GameConfig) -> anyhow::Result<DuelReport> {
    run_seeded(config, config.seed, config.opponent_seed()).await
}
