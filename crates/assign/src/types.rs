use serde::Serialize;

/// Nearest station chosen for one house
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pairing {
    pub station: usize,

    /// Euclidean center distance, truncated toward zero
    pub distance: u32,
}

/// House id → nearest station, at most one station per house.
///
/// Built once; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pairings: Vec<Option<Pairing>>,
}

impl Assignment {
    pub(crate) fn from_pairings(pairings: Vec<Option<Pairing>>) -> Self {
        Self { pairings }
    }

    /// Pairing for `house`, `None` when the house is unknown or unassigned
    pub fn get(&self, house: usize) -> Option<Pairing> {
        self.pairings.get(house).copied().flatten()
    }

    /// Number of houses covered (assigned or not)
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn assigned_count(&self) -> usize {
        self.pairings.iter().flatten().count()
    }

    /// `(house id, pairing)` for every assigned house, in house id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Pairing)> + '_ {
        self.pairings
            .iter()
            .enumerate()
            .filter_map(|(house, pairing)| pairing.map(|p| (house, p)))
    }
}
