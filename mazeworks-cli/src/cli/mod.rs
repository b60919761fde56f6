//! Command-line interface orchestration for mazeworks.
//!
//! The `carve` command builds a rectangular grid, carves it with the
//! randomised Kruskal carver and optionally solves it from the top-left room
//! to the bottom-right room.

mod commands;
mod render;

pub use commands::{CarveCommand, CarveSummary, Cli, CliError, Command, run_cli};
pub use render::{render_maze, render_summary};
