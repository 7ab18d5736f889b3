use std::fmt;

/// Represents errors that can occur while scoring one candidate node.
#[derive(Debug, PartialEq, Eq)]
pub enum ScoreError {
    /// Cluster maxima were never published for this scheduling cycle.
    MissingMaxima,
    /// A second maxima publish was attempted within the same cycle.
    MaximaAlreadyPublished,
    /// Aggregating the score terms would exceed the u64 range.
    Overflow,
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::MissingMaxima => {
                write!(f, "Cluster maxima not published for this cycle")
            }
            ScoreError::MaximaAlreadyPublished => {
                write!(f, "Cluster maxima already published for this cycle")
            }
            ScoreError::Overflow => write!(f, "Score aggregation overflowed"),
        }
    }
}
