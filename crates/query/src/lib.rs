//! # Stationmap Query
//!
//! Line-oriented command language over a [`RelationIndex`].
//!
//! | Command     | Syntax                      |
//! |-------------|-----------------------------|
//! | `SELECT`    | `SELECT HOUSE\|STATION <id>` |
//! | `SHOW`      | `SHOW HOUSE\|STATION`        |
//! | `STATTRACE` | `STATTRACE <id>`            |
//! | `HOUSEREL`  | `HOUSEREL <id>\|ALL`         |
//! | `HELP`      | `HELP`                      |
//! | `EXIT`      | `EXIT`                      |
//!
//! [`RelationIndex`]: stationmap_relations::RelationIndex

mod engine;
mod error;
pub mod render;

pub use engine::{QueryEngine, Reply};
pub use error::{QueryError, Result};
