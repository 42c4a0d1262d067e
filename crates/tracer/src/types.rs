use serde::Serialize;
use std::fmt;

/// A single-cell station location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Station {
    /// Column
    pub x: u32,

    /// Row
    pub y: u32,

    /// Scan-order id, starting at 0
    pub id: usize,
}

impl Station {
    #[must_use]
    pub const fn new(x: u32, y: u32, id: usize) -> Self {
        Self { x, y, id }
    }

    #[must_use]
    pub const fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "STAT{}: {{CORDS: {{{}, {}}}}}", self.id, self.x, self.y)
    }
}

/// A detected rectangular house footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct House {
    /// Seed column plus half the width (floor)
    pub center_x: u32,

    /// Seed row plus half the height (floor)
    pub center_y: u32,

    pub width: u32,
    pub height: u32,

    /// Detection-order id, starting at 0
    pub id: usize,
}

impl House {
    /// Build a house from its top-left seed cell and rectangle size
    #[must_use]
    pub const fn from_seed(left: u32, top: u32, width: u32, height: u32, id: usize) -> Self {
        Self {
            center_x: left + width / 2,
            center_y: top + height / 2,
            width,
            height,
            id,
        }
    }

    #[must_use]
    pub const fn center(&self) -> (u32, u32) {
        (self.center_x, self.center_y)
    }

    /// Top-left cell of the footprint
    #[must_use]
    pub const fn origin(&self) -> (u32, u32) {
        (
            self.center_x - self.width / 2,
            self.center_y - self.height / 2,
        )
    }

    /// Number of cells covered by the footprint rectangle
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HOUSE{}: {{CORDS: {{{}, {}}}; SIZE: {{{}, {}}}}}",
            self.id, self.center_x, self.center_y, self.width, self.height
        )
    }
}

/// Houses and stations traced from one grid, both in detection order.
///
/// `houses[i].id == i` and `stations[i].id == i` always hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Layout {
    houses: Vec<House>,
    stations: Vec<Station>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a station at `(x, y)` with the next sequential id
    pub fn push_station(&mut self, x: u32, y: u32) -> &Station {
        let id = self.stations.len();
        self.stations.push(Station::new(x, y, id));
        &self.stations[id]
    }

    /// Append a house rectangle with the next sequential id
    pub fn push_house(&mut self, left: u32, top: u32, width: u32, height: u32) -> &House {
        let id = self.houses.len();
        self.houses
            .push(House::from_seed(left, top, width, height, id));
        &self.houses[id]
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn is_empty(&self) -> bool {
        self.houses.is_empty() && self.stations.is_empty()
    }

    /// Split into `(houses, stations)`
    pub fn into_parts(self) -> (Vec<House>, Vec<Station>) {
        (self.houses, self.stations)
    }
}
