//! Console front end for stationmap: loads one grid file through the
//! decode → trace → assign → index pipeline, then serves queries.

pub mod console;
pub mod pipeline;

pub use pipeline::{load, Stage};
