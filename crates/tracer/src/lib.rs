//! # Stationmap Tracer
//!
//! Region tracing: one row-major pass over an occupancy grid that emits
//! station points and house rectangles.
//!
//! ## Architecture
//!
//! ```text
//! Grid
//!     │
//!     └──> RegionTracer (row-major scan)
//!            ├─ STATION cell → Station { x, y, id }
//!            ├─ HOUSE cell continuing a region above → skip HOUSE run
//!            └─ HOUSE seed → grow down, grow right → House { center, size, id }
//! ```
//!
//! ## Example
//!
//! ```
//! use stationmap_grid::Grid;
//! use stationmap_tracer::trace;
//!
//! let grid = Grid::from_rows(&[[1u8, 1, 0, 2]]).unwrap();
//! let layout = trace(&grid);
//!
//! assert_eq!(layout.houses()[0].to_string(), "HOUSE0: {CORDS: {1, 0}; SIZE: {2, 1}}");
//! assert_eq!(layout.stations()[0].to_string(), "STAT0: {CORDS: {3, 0}}");
//! ```

mod tracer;
mod types;

pub use tracer::{trace, Footprint, RegionTracer};
pub use types::{House, Layout, Station};
