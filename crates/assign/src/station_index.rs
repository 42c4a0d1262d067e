use crate::types::Pairing;
use rstar::primitives::GeomWithData;
use rstar::RTree;
use stationmap_tracer::Station;

/// Largest coordinate the spatial index accepts; keeps `dx² + dy²` inside `i64`
pub const MAX_SPATIAL_COORD: u32 = 1 << 30;

/// Nearest-station lookup for a point
pub trait NearestStation {
    /// Closest station to `(x, y)`; equal distances resolve to the lowest station id
    fn nearest(&self, x: u32, y: u32) -> Option<Pairing>;
}

/// Exact squared distance between two grid points
pub fn distance_squared(a: (u32, u32), b: (u32, u32)) -> u128 {
    let dx = u128::from(a.0.abs_diff(b.0));
    let dy = u128::from(a.1.abs_diff(b.1));
    dx * dx + dy * dy
}

/// Euclidean distance computed in `f64` and truncated
pub fn truncated_distance(a: (u32, u32), b: (u32, u32)) -> u32 {
    let dx = f64::from(a.0) - f64::from(b.0);
    let dy = f64::from(a.1) - f64::from(b.1);
    // `as` saturates past u32::MAX
    (dx * dx + dy * dy).sqrt() as u32
}

/// Linear scan in station id order, first minimum wins
pub struct LinearScan<'s> {
    stations: &'s [Station],
}

impl<'s> LinearScan<'s> {
    pub fn new(stations: &'s [Station]) -> Self {
        Self { stations }
    }
}

impl NearestStation for LinearScan<'_> {
    fn nearest(&self, x: u32, y: u32) -> Option<Pairing> {
        let mut best: Option<(u128, &Station)> = None;
        for station in self.stations {
            let d2 = distance_squared((x, y), station.position());
            if best.map_or(true, |(best_d2, _)| d2 < best_d2) {
                best = Some((d2, station));
            }
        }
        best.map(|(_, station)| Pairing {
            station: station.id,
            distance: truncated_distance((x, y), station.position()),
        })
    }
}

type StationPoint = GeomWithData<[i64; 2], usize>;

/// R-tree over station points
pub struct StationTree {
    tree: RTree<StationPoint>,
}

impl StationTree {
    /// Bulk-load the tree.
    ///
    /// Returns `None` when a station lies beyond [`MAX_SPATIAL_COORD`].
    pub fn build(stations: &[Station]) -> Option<Self> {
        if stations
            .iter()
            .any(|s| s.x > MAX_SPATIAL_COORD || s.y > MAX_SPATIAL_COORD)
        {
            return None;
        }

        let points = stations
            .iter()
            .map(|s| StationPoint::new([i64::from(s.x), i64::from(s.y)], s.id))
            .collect();
        Some(Self {
            tree: RTree::bulk_load(points),
        })
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// True when `(x, y)` can be queried without overflowing the metric
    pub const fn accepts(x: u32, y: u32) -> bool {
        x <= MAX_SPATIAL_COORD && y <= MAX_SPATIAL_COORD
    }
}

impl NearestStation for StationTree {
    fn nearest(&self, x: u32, y: u32) -> Option<Pairing> {
        let query = [i64::from(x), i64::from(y)];
        let mut candidates = self.tree.nearest_neighbor_iter_with_distance_2(&query);
        let (first, best_d2) = candidates.next()?;

        // the iterator yields in non-decreasing distance; drain the ties
        let best = candidates
            .take_while(|(_, d2)| *d2 == best_d2)
            .map(|(point, _)| point)
            .fold(first, |best, point| {
                if point.data < best.data {
                    point
                } else {
                    best
                }
            });

        let [sx, sy] = *best.geom();
        Some(Pairing {
            station: best.data,
            distance: truncated_distance((x, y), (sx as u32, sy as u32)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations(points: &[(u32, u32)]) -> Vec<Station> {
        points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Station::new(x, y, id))
            .collect()
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // sqrt(8) = 2.83
        assert_eq!(truncated_distance((0, 0), (2, 2)), 2);
        assert_eq!(truncated_distance((1, 0), (3, 0)), 2);
        assert_eq!(truncated_distance((0, 0), (3, 4)), 5);
    }

    #[test]
    fn squared_distance_does_not_overflow() {
        let far = distance_squared((0, 0), (u32::MAX, u32::MAX));
        assert_eq!(far, 2 * u128::from(u32::MAX) * u128::from(u32::MAX));
    }

    #[test]
    fn linear_scan_prefers_lowest_id_on_tie() {
        let list = stations(&[(4, 0), (0, 4), (0, 0)]);
        let nearest = LinearScan::new(&list).nearest(2, 2).unwrap();
        assert_eq!(nearest.station, 0);
        assert_eq!(nearest.distance, 2);
    }

    #[test]
    fn tree_prefers_lowest_id_on_tie() {
        let list = stations(&[(9, 9), (4, 0), (0, 4), (2, 6)]);
        let tree = StationTree::build(&list).unwrap();
        assert_eq!(tree.len(), 4);
        let nearest = tree.nearest(2, 2).unwrap();
        assert_eq!(nearest.station, 1);
    }

    #[test]
    fn empty_station_set_has_no_nearest() {
        assert_eq!(LinearScan::new(&[]).nearest(0, 0), None);
        let tree = StationTree::build(&[]).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.nearest(0, 0), None);
    }

    #[test]
    fn tree_rejects_out_of_range_stations() {
        let list = stations(&[(MAX_SPATIAL_COORD + 1, 0)]);
        assert!(StationTree::build(&list).is_none());
        assert!(!StationTree::accepts(0, MAX_SPATIAL_COORD + 1));
    }
}
