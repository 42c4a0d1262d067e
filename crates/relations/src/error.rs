use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelationError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationError {
    #[error("House not found: {0}")]
    HouseNotFound(usize),

    #[error("Station not found: {0}")]
    StationNotFound(usize),

    /// House exists but no station was assigned to it
    #[error("House {0} has no assigned station")]
    Unassigned(usize),
}

impl RelationError {
    /// Every variant is a lookup miss
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::HouseNotFound(_) | Self::StationNotFound(_) | Self::Unassigned(_)
        )
    }
}
