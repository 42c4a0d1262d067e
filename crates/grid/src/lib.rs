//! # Stationmap Grid
//!
//! Decoding of the binary neighborhood raster into an in-memory occupancy grid.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────┬───────────────┬──────────────────────────────┐
//! │ width: u32   │ height: u32   │ width*height cell bytes      │
//! │ (native)     │ (native)      │ row-major, 0/1/2             │
//! └──────────────┴───────────────┴──────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use stationmap_grid::{decode, encode, Cell, Grid};
//!
//! let grid = Grid::from_rows(&[[1u8, 1, 0, 2]]).unwrap();
//! let bytes = encode(&grid);
//! let decoded = decode(&bytes).unwrap();
//!
//! assert_eq!(decoded.cell(0, 3), Cell::Station);
//! ```

mod codec;
mod error;
mod grid;

pub use codec::{decode, encode, read_from, read_grid, HEADER_LEN};
pub use error::{GridError, Result};
pub use grid::{Cell, Grid};
