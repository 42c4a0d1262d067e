use crate::config::{AssignConfig, Strategy};
use crate::station_index::{LinearScan, NearestStation, StationTree};
use crate::types::{Assignment, Pairing};
use stationmap_tracer::{House, Station};

/// Pairs every house with its closest station
pub struct NearestAssigner {
    config: AssignConfig,
}

impl NearestAssigner {
    pub fn new(config: AssignConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssignConfig {
        &self.config
    }

    /// Concrete strategy for a station set (`Auto` resolved)
    pub fn resolve(&self, stations: &[Station]) -> Strategy {
        match self.config.strategy {
            Strategy::Auto if stations.len() >= self.config.spatial_threshold => Strategy::Spatial,
            Strategy::Auto => Strategy::BruteForce,
            explicit => explicit,
        }
    }

    /// Compute the assignment for all houses
    pub fn assign(&self, houses: &[House], stations: &[Station]) -> Assignment {
        if stations.is_empty() {
            if !houses.is_empty() {
                log::warn!(
                    "No stations found; {} houses stay unassigned",
                    houses.len()
                );
            }
            return Assignment::from_pairings(vec![None; houses.len()]);
        }

        let strategy = self.resolve(stations);
        log::debug!(
            "Assigning {} houses to {} stations using {} search",
            houses.len(),
            stations.len(),
            strategy
        );

        let pairings: Vec<Option<Pairing>> = match strategy {
            Strategy::Spatial => match StationTree::build(stations) {
                Some(tree) => {
                    let linear = LinearScan::new(stations);
                    houses
                        .iter()
                        .map(|house| {
                            let (x, y) = house.center();
                            if StationTree::accepts(x, y) {
                                tree.nearest(x, y)
                            } else {
                                linear.nearest(x, y)
                            }
                        })
                        .collect()
                }
                None => {
                    log::warn!("Station coordinates exceed the spatial index range; scanning linearly");
                    scan(&LinearScan::new(stations), houses)
                }
            },
            Strategy::BruteForce | Strategy::Auto => scan(&LinearScan::new(stations), houses),
        };

        let assignment = Assignment::from_pairings(pairings);
        log::debug!("Assigned {} of {} houses", assignment.assigned_count(), houses.len());
        assignment
    }
}

impl Default for NearestAssigner {
    fn default() -> Self {
        Self::new(AssignConfig::default())
    }
}

fn scan(index: &impl NearestStation, houses: &[House]) -> Vec<Option<Pairing>> {
    houses
        .iter()
        .map(|house| {
            let (x, y) = house.center();
            index.nearest(x, y)
        })
        .collect()
}

/// Assign with the default configuration
pub fn assign(houses: &[House], stations: &[Station]) -> Assignment {
    NearestAssigner::default().assign(houses, stations)
}
