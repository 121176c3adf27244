//! Board representation and move generation for the 3x3 sliding puzzle.
//!
//! The grid is a flat array in row-major order where each cell holds a tile
//! number 1-8, or 0 for the blank.

use std::fmt;
use std::str::FromStr;

/// Cells per row and column.
pub const SIDE: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Tile value used for the blank cell.
pub const BLANK: u8 = 0;

/// Converts (row, col) coordinates to a linear cell index.
#[inline(always)]
pub const fn coord_to_idx(row: usize, col: usize) -> usize {
    row * SIDE + col
}

/// Converts a linear cell index to (row, col) coordinates.
#[inline(always)]
pub const fn idx_to_coord(cell_index: usize) -> (usize, usize) {
    (cell_index / SIDE, cell_index % SIDE)
}

/// Direction the blank travels during one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    #[display("up")]
    Up,
    #[display("down")]
    Down,
    #[display("left")]
    Left,
    #[display("right")]
    Right,
}

impl Direction {
    /// All directions, in the order successors are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) offset applied to the blank.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Reasons a tile layout is not a valid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("expected 9 tiles, found {len}")]
    WrongLength { len: usize },
    #[display("tile {value} is out of range 0-8")]
    OutOfRange { value: u8 },
    #[display("invalid tile symbol {symbol:?}")]
    InvalidSymbol { symbol: char },
    #[display("tile {value} appears more than once")]
    Duplicate { value: u8 },
}

/// An immutable snapshot of the 3x3 grid.
///
/// Cells are always a permutation of `0..=8`. Equality and hashing compare
/// the cells positionally, which makes a board usable as a visited-set key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    cells: [u8; CELLS],
    /// Cell index of the blank, cached so move generation skips the scan.
    blank: u8,
}

impl Board {
    /// Tiles 1-8 in row-major order with the blank in the final cell.
    pub const GOAL: Board = Board {
        cells: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
        blank: (CELLS - 1) as u8,
    };

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        let mut blank = 0;

        for (cell_index, &value) in cells.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::OutOfRange { value })?;
            if *slot {
                return Err(BoardError::Duplicate { value });
            }
            *slot = true;
            if value == BLANK {
                blank = cell_index as u8;
            }
        }

        Ok(Self { cells, blank })
    }

    /// Builds a board from three rows.
    pub fn from_rows(rows: [[u8; SIDE]; SIDE]) -> Result<Self, BoardError> {
        let mut cells = [BLANK; CELLS];
        for (row_index, row) in rows.iter().enumerate() {
            cells[coord_to_idx(row_index, 0)..coord_to_idx(row_index + 1, 0)].copy_from_slice(row);
        }
        Self::from_cells(cells)
    }

    /// Cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Cells grouped into rows.
    pub fn rows(&self) -> [[u8; SIDE]; SIDE] {
        let mut rows = [[BLANK; SIDE]; SIDE];
        for (cell_index, &value) in self.cells.iter().enumerate() {
            let (row, col) = idx_to_coord(cell_index);
            rows[row][col] = value;
        }
        rows
    }

    /// Tile at (row, col), or `None` outside the grid.
    pub fn tile_at(&self, row: usize, col: usize) -> Option<u8> {
        (row < SIDE && col < SIDE).then(|| self.cells[coord_to_idx(row, col)])
    }

    /// (row, col) of the blank.
    #[inline]
    pub fn blank(&self) -> (usize, usize) {
        idx_to_coord(self.blank as usize)
    }

    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Cell index of every tile, indexed by tile value.
    pub fn positions(&self) -> [u8; CELLS] {
        let mut positions = [0u8; CELLS];
        for (cell_index, &value) in self.cells.iter().enumerate() {
            positions[value as usize] = cell_index as u8;
        }
        positions
    }

    /// Slides the blank one cell in `direction`, producing a new board.
    ///
    /// Returns `None` if the blank would leave the grid.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (row, col) = self.blank();
        let (row_offset, col_offset) = direction.offset();
        let target_row = row.checked_add_signed(row_offset).filter(|&r| r < SIDE)?;
        let target_col = col.checked_add_signed(col_offset).filter(|&c| c < SIDE)?;
        let target = coord_to_idx(target_row, target_col);

        let mut cells = self.cells;
        cells.swap(self.blank as usize, target);
        Some(Board {
            cells,
            blank: target as u8,
        })
    }

    /// Legal moves paired with the boards they produce, in [`Direction::ALL`] order.
    pub fn successors(&self) -> impl Iterator<Item = (Direction, Board)> {
        let board = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| board.slide(direction).map(|next| (direction, next)))
    }

    /// All boards one move away: 2 from a corner, 3 from an edge, 4 from the center.
    pub fn neighbors(&self) -> impl Iterator<Item = Board> {
        self.successors().map(|(_, next)| next)
    }

    /// The blank's move that turns `self` into `next`, if they are one move apart.
    pub fn direction_to(&self, next: &Board) -> Option<Direction> {
        self.successors()
            .find(|(_, candidate)| candidate == next)
            .map(|(direction, _)| direction)
    }
}

impl TryFrom<[u8; CELLS]> for Board {
    type Error = BoardError;

    fn try_from(cells: [u8; CELLS]) -> Result<Self, Self::Error> {
        Self::from_cells(cells)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine tile symbols such as `"478 365 12."` or `"4,7,8/3,6,5/1,2,0"`.
    ///
    /// `0`, `.` and `_` mark the blank; whitespace, `,` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',' && *c != '/')
            .map(|symbol| match symbol {
                '0' | '.' | '_' => Ok(BLANK),
                '1'..='8' => Ok(symbol as u8 - b'0'),
                _ => Err(BoardError::InvalidSymbol { symbol }),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        let cells: [u8; CELLS] = values
            .try_into()
            .map_err(|values: Vec<u8>| BoardError::WrongLength { len: values.len() })?;
        Self::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (cell_index, &value) in self.cells.iter().enumerate() {
            let (row, col) = idx_to_coord(cell_index);
            if col > 0 {
                f.write_str(" ")?;
            } else if row > 0 {
                f.write_str("\n")?;
            }
            if value == BLANK {
                f.write_str(".")?;
            } else {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Board[")?;
        for (cell_index, &value) in self.cells.iter().enumerate() {
            let (row, col) = idx_to_coord(cell_index);
            if col > 0 {
                f.write_str(" ")?;
            } else if row > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

/// Formats a solution path as numbered steps.
///
/// Every step after the first is labelled with the direction the blank moved.
pub fn format_path(path: &[Board]) -> String {
    let mut output = String::new();

    for (step, board) in path.iter().enumerate() {
        if step > 0 {
            output.push_str("\n\n");
        }
        let direction = step
            .checked_sub(1)
            .and_then(|previous| path[previous].direction_to(board));
        match direction {
            Some(direction) => output.push_str(&format!("Step {step} ({direction}):\n")),
            None => output.push_str(&format!("Step {step}:\n")),
        }
        output.push_str(&board.to_string());
    }

    output
}
