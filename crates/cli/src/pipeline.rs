use anyhow::{Context, Result};
use stationmap_assign::{AssignConfig, NearestAssigner};
use stationmap_grid::{read_grid, Grid};
use stationmap_relations::RelationIndex;
use stationmap_tracer::{trace, Layout};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Decode,
    Trace,
    Assign,
    Index,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Trace => "trace",
            Self::Assign => "assign",
            Self::Index => "index",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn timed<T>(stage: Stage, run: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let out = run();
    log::debug!("{stage} finished in {} ms", started.elapsed().as_millis());
    out
}

/// Decode the grid file
pub fn decode(path: &Path) -> Result<Grid> {
    timed(Stage::Decode, || read_grid(path))
        .with_context(|| format!("Cannot load grid {}", path.display()))
}

/// Trace houses and stations
pub fn trace_layout(grid: &Grid) -> Layout {
    timed(Stage::Trace, || trace(grid))
}

/// Assign and index
pub fn build_index(layout: Layout, config: AssignConfig) -> RelationIndex {
    let assigner = NearestAssigner::new(config);
    let assignment = timed(Stage::Assign, || {
        assigner.assign(layout.houses(), layout.stations())
    });
    timed(Stage::Index, || RelationIndex::new(layout, assignment))
}

/// Run every stage for `path`
pub fn load(path: &Path, config: AssignConfig) -> Result<RelationIndex> {
    let grid = decode(path)?;
    let layout = trace_layout(&grid);
    drop(grid);
    let index = build_index(layout, config);
    log::info!(
        "Loaded {}: {} houses, {} stations",
        path.display(),
        index.house_count(),
        index.station_count()
    );
    Ok(index)
}

/// Write the index as pretty JSON
pub fn export_json(index: &RelationIndex, path: &Path) -> Result<()> {
    let json = serde_json::to_vec_pretty(&index.snapshot())?;
    fs::write(path, json).with_context(|| format!("Cannot write {}", path.display()))?;
    log::info!("Exported relations to {}", path.display());
    Ok(())
}
