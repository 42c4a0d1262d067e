//! # Stationmap Relations
//!
//! Queryable store of houses, stations and the nearest-station pairing.
//!
//! ## Architecture
//!
//! ```text
//! Layout + Assignment
//!     │
//!     └──> RelationIndex (built once, read-only)
//!            ├─ house(id) / station(id)         O(1)
//!            ├─ station_for_house(id)           O(1)
//!            ├─ houses_for_station(id)          memoized, farthest first
//!            └─ all_houses() / all_stations()   restartable iterators
//! ```

mod error;
mod index;

pub use error::{RelationError, Result};
pub use index::{AssignmentRecord, HouseTrace, RelationIndex, Snapshot, StationLink};
