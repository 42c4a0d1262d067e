use crate::error::{GridError, Result};

/// Classification of a single grid byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    House,
    Station,
    /// Any byte outside `{0, 1, 2}`; counts as occupied but never seeds an entity
    Unknown(u8),
}

impl Cell {
    pub const EMPTY: u8 = 0;
    pub const HOUSE: u8 = 1;
    pub const STATION: u8 = 2;

    /// True for every non-EMPTY cell
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }

    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Empty => Self::EMPTY,
            Self::House => Self::HOUSE,
            Self::Station => Self::STATION,
            Self::Unknown(byte) => byte,
        }
    }
}

impl From<u8> for Cell {
    fn from(byte: u8) -> Self {
        match byte {
            Self::EMPTY => Self::Empty,
            Self::HOUSE => Self::House,
            Self::STATION => Self::Station,
            other => Self::Unknown(other),
        }
    }
}

/// Immutable row-major occupancy grid.
///
/// `cells.len() == width * height` holds for every constructed value; cells
/// are addressed as `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from row-major cells, rejecting a length mismatch
    pub fn new(width: u32, height: u32, cells: Vec<u8>) -> Result<Self> {
        let expected = Self::area(width, height)?;
        if cells.len() != expected {
            return Err(GridError::Malformed {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid with every cell EMPTY
    pub fn empty(width: u32, height: u32) -> Result<Self> {
        let area = Self::area(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::EMPTY; area],
        })
    }

    /// Build a grid from equally sized rows.
    ///
    /// Ragged input is reported as [`GridError::Malformed`].
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Malformed {
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(rows.len())) else {
            return Err(GridError::TooLarge {
                width: u32::MAX,
                height: u32::MAX,
            });
        };
        Self::new(w, h, cells)
    }

    /// Number of cells a `width x height` grid holds
    pub fn area(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::TooLarge { width, height })
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major bytes
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw byte at `(row, col)`, `None` outside the grid
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// Classified cell at `(row, col)`; outside the grid reads as EMPTY
    #[must_use]
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        self.get(row, col).map_or(Cell::Empty, Cell::from)
    }

    #[must_use]
    pub fn is_occupied(&self, row: u32, col: u32) -> bool {
        self.cell(row, col).is_occupied()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() rejects a zero size; a zero-width grid has no cells anyway
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Count cells of each kind: (houses, stations, unknown)
    #[must_use]
    pub fn census(&self) -> (usize, usize, usize) {
        self.cells
            .iter()
            .fold((0, 0, 0), |(h, s, u), &byte| match Cell::from(byte) {
                Cell::House => (h + 1, s, u),
                Cell::Station => (h, s + 1, u),
                Cell::Unknown(_) => (h, s, u + 1),
                Cell::Empty => (h, s, u),
            })
    }
}
