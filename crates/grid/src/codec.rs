//! Binary grid layout: `width: u32`, `height: u32` in platform-native byte
//! order, then `width * height` row-major cell bytes. Trailing bytes after
//! the body are ignored.

use crate::error::{GridError, Result};
use crate::grid::Grid;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Size of the `width`/`height` header in bytes
pub const HEADER_LEN: usize = 2 * std::mem::size_of::<u32>();

/// Open `path` and decode it as a grid
pub fn read_grid(path: impl AsRef<Path>) -> Result<Grid> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| GridError::not_found(path, err))?;
    log::debug!("Decoding grid from {}", path.display());
    read_from(file)
}

/// Decode a grid from any byte stream
pub fn read_from(mut reader: impl Read) -> Result<Grid> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Decode a grid from an in-memory buffer
pub fn decode(bytes: &[u8]) -> Result<Grid> {
    let Some((header, body)) = bytes.split_first_chunk::<HEADER_LEN>() else {
        return Err(GridError::TruncatedHeader {
            actual: bytes.len(),
        });
    };

    let (w, h) = header.split_at(HEADER_LEN / 2);
    let width = read_u32(w);
    let height = read_u32(h);
    let expected = Grid::area(width, height)?;

    if body.len() < expected {
        return Err(GridError::Malformed {
            expected,
            actual: body.len(),
        });
    }
    if body.len() > expected {
        log::warn!(
            "Ignoring {} trailing bytes after {}x{} grid body",
            body.len() - expected,
            width,
            height
        );
    }

    let grid = Grid::new(width, height, body[..expected].to_vec())?;
    let (houses, stations, unknown) = grid.census();
    if unknown > 0 {
        log::warn!("Grid contains {unknown} cells outside {{0, 1, 2}}; treating them as occupied");
    }
    log::debug!(
        "Decoded {width}x{height} grid: {houses} house cells, {stations} station cells"
    );
    Ok(grid)
}

/// Encode a grid back into the binary layout `decode` accepts
#[must_use]
pub fn encode(grid: &Grid) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + grid.cells().len());
    out.extend_from_slice(&grid.width().to_ne_bytes());
    out.extend_from_slice(&grid.height().to_ne_bytes());
    out.extend_from_slice(grid.cells());
    out
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(bytes);
    u32::from_ne_bytes(raw)
}
