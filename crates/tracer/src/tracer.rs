use crate::types::Layout;
use stationmap_grid::{Cell, Grid};

/// Inclusive cell bounds of a rectangle grown from a seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Footprint {
    pub const fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub const fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }
}

/// Single forward scan turning grid cells into houses and stations.
///
/// This is not a connected-component labelling. A HOUSE cell whose upper
/// neighbour is also HOUSE is treated as the continuation of a region opened
/// on an earlier row, and its whole HOUSE run is skipped. Otherwise the cell
/// seeds a rectangle that grows down its own column, then right along the
/// bottom row, while cells are non-EMPTY. The scan resumes two columns past
/// the rectangle's right edge. Non-rectangular or diagonal shapes
/// may therefore be split or merged; house ids depend on this exact rule.
pub struct RegionTracer<'g> {
    grid: &'g Grid,
}

impl<'g> RegionTracer<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Scan the whole grid row-major
    pub fn trace(&self) -> Layout {
        let mut layout = Layout::new();
        let (width, height) = (self.grid.width(), self.grid.height());

        for row in 0..height {
            let mut col = 0;
            while col < width {
                match self.grid.cell(row, col) {
                    Cell::Station => {
                        layout.push_station(col, row);
                    }
                    Cell::House if self.continues_from_above(row, col) => {
                        col = self.end_of_house_run(row, col);
                    }
                    Cell::House => {
                        let rect = self.grow(row, col);
                        layout.push_house(rect.left, rect.top, rect.width(), rect.height());
                        // the column just past the bottom-row extent is never a seed
                        col = rect.right.saturating_add(1);
                    }
                    Cell::Empty | Cell::Unknown(_) => {}
                }
                col = col.saturating_add(1);
            }
        }

        log::debug!(
            "Traced {} houses and {} stations from {}x{} grid",
            layout.houses().len(),
            layout.stations().len(),
            width,
            height
        );
        layout
    }

    /// Grow a rectangle from the seed at `(row, col)`
    pub fn grow(&self, row: u32, col: u32) -> Footprint {
        let mut bottom = row;
        while bottom + 1 < self.grid.height() && self.grid.is_occupied(bottom + 1, col) {
            bottom += 1;
        }

        let mut right = col;
        while right + 1 < self.grid.width() && self.grid.is_occupied(bottom, right + 1) {
            right += 1;
        }

        Footprint {
            left: col,
            top: row,
            right,
            bottom,
        }
    }

    fn continues_from_above(&self, row: u32, col: u32) -> bool {
        row > 0 && self.grid.cell(row - 1, col) == Cell::House
    }

    /// Last column of the contiguous HOUSE run starting at `col`
    fn end_of_house_run(&self, row: u32, col: u32) -> u32 {
        let mut end = col;
        while end + 1 < self.grid.width() && self.grid.cell(row, end + 1) == Cell::House {
            end += 1;
        }
        end
    }
}

/// Trace `grid` with a fresh [`RegionTracer`]
pub fn trace(grid: &Grid) -> Layout {
    RegionTracer::new(grid).trace()
}
