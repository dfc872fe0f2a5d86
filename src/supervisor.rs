//! Running the two players as separate OS processes joined by pipes.
//!
//! The parent spawns the current executable in child mode. The child's stdin
//! carries Parent→Child guesses and its stdout carries Child→Parent guesses,
//! so nothing else may be written to the child's stdout.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::time::{timeout, Duration};

use crate::{
    config::{GameConfig, Variant, CLASSIC_SIZE, SPACED_SIZE},
    duel::{make_rng, prepare_node},
    player::RandomPlayer,
    player_node::{NodeReport, Role},
    transport::pipe::PipeTransport,
};

/// How long the parent waits for the child to exit before killing it.
pub const DEFAULT_REAP_GRACE: Duration = Duration::from_secs(5);

/// How to launch the child side of a game.
#[derive(Debug, Clone)]
pub struct ChildCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ChildCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// The running executable, so the child shares the parent's build.
    pub fn current_exe() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_exe()?))
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append the `child` subcommand and the options mirroring `config`.
    pub fn child_args(self, config: &GameConfig) -> Self {
        let mut cmd = self
            .arg("child")
            .arg("--variant")
            .arg(config.variant.as_str())
            .arg("--max-attempts")
            .arg(config.fleet.max_attempts_per_ship().to_string())
            .arg("--max-restarts")
            .arg(config.fleet.max_fleet_restarts().to_string());
        if let Some(seed) = config.opponent_seed() {
            cmd = cmd.arg("--seed").arg(seed.to_string());
        }
        cmd
    }
}

/// A spawned child process plus the parent's end of the two pipes.
pub struct SpawnedChild {
    pub child: Child,
    pub transport: PipeTransport<ChildStdout, ChildStdin>,
}

/// Start the child with piped stdin/stdout; its stderr stays on the console.
pub fn spawn_child(command: &ChildCommand) -> anyhow::Result<SpawnedChild> {
    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| anyhow::anyhow!("Failed to spawn {}: {}", command.program.display(), e))?;
    let stdin = child
        .stdin
        .take()
        .ok_or_else(|| anyhow::anyhow!("child stdin was not captured"))?;
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| anyhow::anyhow!("child stdout was not captured"))?;
    log::debug!("spawned child process {:?}", child.id());
    Ok(SpawnedChild {
        child,
        transport: PipeTransport::new(stdout, stdin),
    })
}

/// Wait for the child to exit, killing it once `grace` has passed.
/// Returns `None` when the child had to be killed.
pub async fn reap(child: &mut Child, grace: Duration) -> anyhow::Result<Option<ExitStatus>> {
    match timeout(grace, child.wait()).await {
        Ok(status) => {
            let status = status?;
            if !status.success() {
                log::warn!("child process exited with {}", status);
            }
            Ok(Some(status))
        }
        Err(_) => {
            log::warn!("child process still running after {:?}, killing it", grace);
            child.kill().await?;
            Ok(None)
        }
    }
}

/// Result of a game played across two processes, seen from the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessReport {
    pub parent: NodeReport,
    /// `None` if the child had to be killed.
    pub child_status: Option<ExitStatus>,
}

async fn play_parent_sized<const N: usize>(
    config: &GameConfig,
    command: &ChildCommand,
    grace: Duration,
) -> anyhow::Result<ProcessReport> {
    let mut rng = make_rng(config.seed);
    let SpawnedChild { mut child, transport } = spawn_child(command)?;
    let mut node = prepare_node::<N>(
        Role::Parent,
        config,
        Box::new(RandomPlayer::new()),
        Box::new(transport),
        &mut rng,
    )?;
    let result = node.run(&mut rng).await;
    // Closing our pipe ends lets a child still blocked on a read see EOF.
    drop(node);
    let child_status = reap(&mut child, grace).await?;
    Ok(ProcessReport {
        parent: result?,
        child_status,
    })
}

/// Run the parent side: spawn the child described by `command`, play, reap.
pub async fn play_parent(
    config: &GameConfig,
    command: &ChildCommand,
    grace: Duration,
) -> anyhow::Result<ProcessReport> {
    match config.variant {
        Variant::Classic => play_parent_sized::<CLASSIC_SIZE>(config, command, grace).await,
        Variant::Spaced => play_parent_sized::<SPACED_SIZE>(config, command, grace).await,
    }
}

async fn play_child_sized<const N: usize>(config: &GameConfig) -> anyhow::Result<NodeReport> {
    let mut rng = make_rng(config.seed);
    let mut node = prepare_node::<N>(
        Role::Child,
        config,
        Box::new(RandomPlayer::new()),
        Box::new(PipeTransport::stdio()),
        &mut rng,
    )?;
    node.run(&mut rng).await
}

/// Run the child side over this process's stdin/stdout.
pub async fn play_child(config: &GameConfig) -> anyhow::Result<NodeReport> {
    match config.variant {
        Variant::Classic => play_child_sized::<CLASSIC_SIZE>(config).await,
        Variant::Spaced => play_child_sized::<SPACED_SIZE>(config).await,
    }
}
