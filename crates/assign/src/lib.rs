//! # Stationmap Assign
//!
//! Nearest-station assignment for traced houses.
//!
//! ## Features
//!
//! - **Brute force** linear scan for small station sets
//! - **Spatial index** via an R-tree (`rstar`) for large ones
//! - **Identical results** from both: exact integer comparison, lowest
//!   station id wins a tie, distance truncated from `f64`
//!
//! ## Example
//!
//! ```
//! use stationmap_assign::{AssignConfig, NearestAssigner};
//! use stationmap_tracer::{House, Station};
//!
//! let houses = [House::from_seed(0, 0, 2, 1, 0)];
//! let stations = [Station::new(3, 0, 0)];
//!
//! let assignment = NearestAssigner::new(AssignConfig::spatial()).assign(&houses, &stations);
//! let pairing = assignment.get(0).unwrap();
//! assert_eq!((pairing.station, pairing.distance), (0, 2));
//! ```

mod assigner;
mod config;
mod error;
mod station_index;
mod types;

pub use assigner::{assign, NearestAssigner};
pub use config::{AssignConfig, Strategy};
pub use error::{AssignError, Result};
pub use station_index::{
    distance_squared, truncated_distance, LinearScan, NearestStation, StationTree,
    MAX_SPATIAL_COORD,
};
pub use types::{Assignment, Pairing};
