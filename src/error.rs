use crate::Distance;

/// Largest edit-distance bound an automaton accepts.
pub const MAX_DISTANCE: usize = Distance::MAX as usize;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a search is configured with an unusable distance bound.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("maximum edit distance {distance} exceeds the supported limit of {max}")]
    DistanceTooLarge { distance: usize, max: usize },
    #[error("maximum edit distance must not be negative, got {0}")]
    NegativeDistance(i64),
}

pub(crate) fn check_distance(distance: usize) -> Result<()> {
    if distance > MAX_DISTANCE {
        return Err(Error::DistanceTooLarge {
            distance,
            max: MAX_DISTANCE,
        });
    }
    Ok(())
}
