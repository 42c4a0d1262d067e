use crate::error::{RelationError, Result};
use once_cell::unsync::OnceCell;
use serde::Serialize;
use stationmap_assign::{Assignment, NearestAssigner};
use stationmap_tracer::{House, Layout, Station};

/// A house listed under its station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseTrace<'a> {
    pub house: &'a House,
    pub distance: u32,
}

/// The station a house was assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationLink<'a> {
    pub house: &'a House,
    pub station: &'a Station,
    pub distance: u32,
}

/// Read-only store of houses, stations and their pairing.
///
/// The only interior mutation is the per-station house listing, filled on
/// first request and never invalidated.
#[derive(Debug)]
pub struct RelationIndex {
    houses: Vec<House>,
    stations: Vec<Station>,
    assignment: Assignment,
    /// Station id -> (house id, distance), distance-descending
    by_station: Vec<OnceCell<Vec<(usize, u32)>>>,
}

impl RelationIndex {
    /// Build from a traced layout and its assignment
    pub fn new(layout: Layout, assignment: Assignment) -> Self {
        let (houses, stations) = layout.into_parts();
        debug_assert_eq!(assignment.len(), houses.len());
        let by_station = std::iter::repeat_with(OnceCell::new)
            .take(stations.len())
            .collect();

        log::debug!(
            "Relation index ready: {} houses, {} stations, {} assigned",
            houses.len(),
            stations.len(),
            assignment.assigned_count()
        );

        Self {
            houses,
            stations,
            assignment,
            by_station,
        }
    }

    /// Assign `layout` with `assigner` and index the result
    pub fn build(layout: Layout, assigner: &NearestAssigner) -> Self {
        let assignment = assigner.assign(layout.houses(), layout.stations());
        Self::new(layout, assignment)
    }

    pub fn house(&self, id: usize) -> Result<&House> {
        self.houses.get(id).ok_or(RelationError::HouseNotFound(id))
    }

    pub fn station(&self, id: usize) -> Result<&Station> {
        self.stations
            .get(id)
            .ok_or(RelationError::StationNotFound(id))
    }

    /// Station assigned to house `id`
    pub fn station_for_house(&self, id: usize) -> Result<StationLink<'_>> {
        let house = self.house(id)?;
        let pairing = self
            .assignment
            .get(id)
            .ok_or(RelationError::Unassigned(id))?;
        let station = self.station(pairing.station)?;
        Ok(StationLink {
            house,
            station,
            distance: pairing.distance,
        })
    }

    /// Houses assigned to station `id`, farthest first.
    ///
    /// The listing is computed on the first call per station and reused
    /// afterwards. A station without houses yields an empty listing.
    pub fn houses_for_station(
        &self,
        id: usize,
    ) -> Result<impl ExactSizeIterator<Item = HouseTrace<'_>> + Clone + '_> {
        let listing = self.station_listing(id)?;
        Ok(listing.iter().map(move |&(house, distance)| HouseTrace {
            house: &self.houses[house],
            distance,
        }))
    }

    /// Cached `(house id, distance)` listing backing [`Self::houses_for_station`]
    pub fn station_listing(&self, id: usize) -> Result<&[(usize, u32)]> {
        let cell = self
            .by_station
            .get(id)
            .ok_or(RelationError::StationNotFound(id))?;
        Ok(cell.get_or_init(|| self.collect_listing(id)))
    }

    fn collect_listing(&self, station: usize) -> Vec<(usize, u32)> {
        let mut listing: Vec<(usize, u32)> = self
            .assignment
            .iter()
            .filter(|(_, pairing)| pairing.station == station)
            .map(|(house, pairing)| (house, pairing.distance))
            .collect();
        // stable: equal distances keep ascending house id
        listing.sort_by(|a, b| b.1.cmp(&a.1));
        log::debug!(
            "Cached {} houses for station {}",
            listing.len(),
            station
        );
        listing
    }

    /// All houses in id order; call again to restart
    pub fn all_houses(&self) -> impl ExactSizeIterator<Item = &House> + Clone + '_ {
        self.houses.iter()
    }

    /// All stations in id order; call again to restart
    pub fn all_stations(&self) -> impl ExactSizeIterator<Item = &Station> + Clone + '_ {
        self.stations.iter()
    }

    pub fn house_count(&self) -> usize {
        self.houses.len()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of stations whose listing has been memoized
    pub fn cached_stations(&self) -> usize {
        self.by_station
            .iter()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    /// Serializable view of the whole index
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            houses: &self.houses,
            stations: &self.stations,
            assignments: self
                .assignment
                .iter()
                .map(|(house, pairing)| AssignmentRecord {
                    house,
                    station: pairing.station,
                    distance: pairing.distance,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub houses: &'a [House],
    pub stations: &'a [Station],
    pub assignments: Vec<AssignmentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignmentRecord {
    pub house: usize,
    pub station: usize,
    pub distance: u32,
}
