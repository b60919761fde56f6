//! Rooms, walls and the rectangular grid they form.

use std::fmt;

use super::MazeError;

/// A cell of the maze grid.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Room {
    column: usize,
    row: usize,
}

impl Room {
    /// Creates the room at `column`, `row`.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Zero-based column, counted from the left.
    #[must_use]
    #[rustfmt::skip]
    pub const fn column(self) -> usize { self.column }

    /// Zero-based row, counted from the top.
    #[must_use]
    #[rustfmt::skip]
    pub const fn row(self) -> usize { self.row }

    const fn is_adjacent_to(self, other: Self) -> bool {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row) == 1
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// The wall separating two orthogonally adjacent rooms.
///
/// Rooms are stored in ascending order, so `Wall::new(a, b)` and
/// `Wall::new(b, a)` compare equal.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Wall {
    first: Room,
    second: Room,
}

impl Wall {
    /// Returns the wall between `left` and `right`, or `None` when the rooms
    /// are not orthogonal neighbours.
    ///
    /// # Examples
    /// ```
    /// use mazeworks_core::{Room, Wall};
    ///
    /// let wall = Wall::new(Room::new(1, 0), Room::new(0, 0)).expect("neighbours");
    /// assert_eq!(wall.rooms(), (Room::new(0, 0), Room::new(1, 0)));
    /// assert!(Wall::new(Room::new(0, 0), Room::new(1, 1)).is_none());
    /// ```
    #[must_use]
    pub fn new(left: Room, right: Room) -> Option<Self> {
        if !left.is_adjacent_to(right) {
            return None;
        }
        let (first, second) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Some(Self { first, second })
    }

    /// The two rooms, smaller first.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rooms(self) -> (Room, Room) { (self.first, self.second) }

    /// Returns `true` when the wall runs between two rooms of the same row.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.first.row == self.second.row
    }
}

/// A `width` by `height` grid of rooms with a wall between every pair of
/// orthogonal neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeGrid {
    width: usize,
    height: usize,
    rooms: Vec<Room>,
    walls: Vec<Wall>,
}

impl MazeGrid {
    /// Builds the grid and its candidate walls.
    ///
    /// Rooms are listed row by row; walls are listed in the order their
    /// smaller room appears, east wall before south wall.
    ///
    /// # Errors
    /// Returns [`MazeError::InvalidDimensions`] when either dimension is zero
    /// or the room count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        let room_count = width.checked_mul(height).ok_or(invalid)?;

        let mut rooms = Vec::with_capacity(room_count);
        let mut walls = Vec::with_capacity(room_count.saturating_mul(2));
        for row in 0..height {
            for column in 0..width {
                let room = Room::new(column, row);
                rooms.push(room);
                if column + 1 < width {
                    walls.push(Wall {
                        first: room,
                        second: Room::new(column + 1, row),
                    });
                }
                if row + 1 < height {
                    walls.push(Wall {
                        first: room,
                        second: Room::new(column, row + 1),
                    });
                }
            }
        }
        Ok(Self {
            width,
            height,
            rooms,
            walls,
        })
    }

    /// Number of columns.
    #[must_use]
    #[rustfmt::skip]
    pub const fn width(&self) -> usize { self.width }

    /// Number of rows.
    #[must_use]
    #[rustfmt::skip]
    pub const fn height(&self) -> usize { self.height }

    /// Every room, row by row.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Every candidate wall.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Returns `true` when `room` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, room: Room) -> bool {
        room.column < self.width && room.row < self.height
    }

    /// Checks that `room` lies inside the grid.
    ///
    /// # Errors
    /// Returns [`MazeError::UnknownRoom`] otherwise.
    pub const fn require(&self, room: Room) -> Result<(), MazeError> {
        if self.contains(room) {
            Ok(())
        } else {
            Err(MazeError::UnknownRoom { room })
        }
    }
}
