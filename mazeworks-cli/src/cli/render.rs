//! Plain-text maze rendering.
//!
//! Each room is three characters wide. Corners are `+`, standing walls are
//! `---` and `|`, and rooms on the solution path are marked with `*`.

use std::{
    collections::HashSet,
    io::{self, Write},
};

use mazeworks_core::{Maze, Room};

use super::CarveSummary;

/// Writes `maze` to `writer`, marking the rooms in `path`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use mazeworks_cli::cli::render_maze;
/// use mazeworks_core::{Maze, MazeGrid, Room, Wall};
///
/// let grid = MazeGrid::new(2, 1)?;
/// let wall = Wall::new(Room::new(0, 0), Room::new(1, 0)).expect("neighbours");
/// let maze = Maze::new(grid, [wall])?;
/// let mut buffer = Vec::new();
/// render_maze(&maze, &[], &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "+---+---+\n|       |\n+---+---+\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_maze(maze: &Maze, path: &[Room], mut writer: impl Write) -> io::Result<()> {
    let grid = maze.grid();
    let marked: HashSet<Room> = path.iter().copied().collect();

    writeln!(writer, "{}", "+---".repeat(grid.width()) + "+")?;
    for row in 0..grid.height() {
        let mut cells = String::from("|");
        let mut floor = String::from("+");
        for column in 0..grid.width() {
            let room = Room::new(column, row);
            cells.push_str(if marked.contains(&room) { " * " } else { "   " });
            let east = Room::new(column + 1, row);
            cells.push(if maze.has_passage(room, east) { ' ' } else { '|' });

            let south = Room::new(column, row + 1);
            floor.push_str(if maze.has_passage(room, south) {
                "   "
            } else {
                "---"
            });
            floor.push('+');
        }
        writeln!(writer, "{cells}")?;
        writeln!(writer, "{floor}")?;
    }
    Ok(())
}

/// Writes the carve summary: a header line, the maze and, when solved, the
/// path length.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &CarveSummary, mut writer: impl Write) -> io::Result<()> {
    let grid = summary.maze.grid();
    writeln!(
        writer,
        "maze {}x{} seed {}",
        grid.width(),
        grid.height(),
        summary.seed
    )?;
    let path = summary
        .solution
        .as_ref()
        .map(|solution| solution.vertices())
        .unwrap_or_default();
    render_maze(&summary.maze, &path, &mut writer)?;
    if let Some(solution) = &summary.solution {
        if solution.exists() {
            writeln!(
                writer,
                "path: {} rooms, {} steps",
                path.len(),
                solution.edges().len()
            )?;
        } else {
            writeln!(writer, "path: none")?;
        }
    }
    Ok(())
}
