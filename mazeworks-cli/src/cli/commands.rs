//! Command implementations and argument parsing for the mazeworks CLI.

use clap::{Args, Parser, Subcommand};
use mazeworks_core::{KruskalMazeCarver, Maze, MazeError, MazeGrid, MazePath, Room};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_WIDTH: u16 = 10;
const DEFAULT_HEIGHT: u16 = 10;
const MAX_DIMENSION: i64 = 512;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "mazeworks", about = "Carve and solve random mazes.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Carve a random perfect maze and print it.
    Carve(CarveCommand),
}

/// Options accepted by the `carve` command.
#[derive(Debug, Args, Clone)]
pub struct CarveCommand {
    /// Number of room columns.
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u16).range(1..=MAX_DIMENSION),
    )]
    pub width: u16,

    /// Number of room rows.
    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u16).range(1..=MAX_DIMENSION),
    )]
    pub height: u16,

    /// Seed for reproducible carving; drawn at random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also solve the maze from the top-left to the bottom-right room.
    #[arg(long)]
    pub solve: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Building, carving or solving the maze failed.
    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// Outcome of the `carve` command.
#[derive(Debug, Clone)]
pub struct CarveSummary {
    /// Seed that reproduces the maze.
    pub seed: u64,
    /// The carved maze.
    pub maze: Maze,
    /// Route from the entrance to the exit when `--solve` was given.
    pub solution: Option<MazePath>,
}

impl CarveSummary {
    /// Top-left room.
    #[must_use]
    pub const fn entrance() -> Room {
        Room::new(0, 0)
    }

    /// Bottom-right room.
    #[must_use]
    pub fn exit(&self) -> Room {
        let grid = self.maze.grid();
        Room::new(grid.width() - 1, grid.height() - 1)
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when carving or solving fails.
///
/// # Examples
/// ```
/// use mazeworks_cli::cli::{CarveCommand, Cli, Command, run_cli};
///
/// let cli = Cli {
///     command: Command::Carve(CarveCommand {
///         width: 4,
///         height: 3,
///         seed: Some(11),
///         solve: true,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.maze.removed_walls().len(), 11);
/// assert!(summary.solution.is_some_and(|path| path.exists()));
/// # Ok::<(), mazeworks_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CarveSummary, CliError> {
    match cli.command {
        Command::Carve(carve) => {
            Span::current().record("command", field::display("carve"));
            run_carve(&carve)
        }
    }
}

#[instrument(
    name = "cli.carve",
    err,
    skip(command),
    fields(width = command.width, height = command.height, seed = field::Empty),
)]
pub(super) fn run_carve(command: &CarveCommand) -> Result<CarveSummary, CliError> {
    let seed = command.seed.unwrap_or_else(rand::random);
    Span::current().record("seed", seed);

    let grid = MazeGrid::new(usize::from(command.width), usize::from(command.height))?;
    let maze = KruskalMazeCarver::with_seed(seed).carve(&grid)?;
    let mut summary = CarveSummary {
        seed,
        maze,
        solution: None,
    };

    if command.solve {
        let path = summary
            .maze
            .solve(CarveSummary::entrance(), summary.exit())?;
        info!(rooms = path.vertices().len(), "maze solved");
        summary.solution = Some(path);
    }

    info!(
        seed,
        removed_walls = summary.maze.removed_walls().len(),
        "carve completed"
    );
    Ok(summary)
}
