//! The distance between two annotations.

use crate::core::Position;

/// The distance between two annotations.
///
/// Annotations on different chromosomes are [`Distance::DifferentSequence`]
/// apart. Consumers that need a number (for instance, to rank candidates
/// across chromosomes) can convert a [`Distance`] into a [`Position`], in which
/// case [`Distance::DifferentSequence`] becomes [`Distance::SENTINEL`].
///
/// The derived ordering places every [`Distance::Finite`] value before
/// [`Distance::DifferentSequence`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Distance {
    /// The number of bases between the nearer edges of two annotations on the
    /// same chromosome (zero if they overlap or abut).
    Finite(Position),

    /// The annotations are located on different chromosomes.
    DifferentSequence,
}

impl Distance {
    /// The numeric stand-in for [`Distance::DifferentSequence`].
    pub const SENTINEL: Position = 1_000_000_000;

    /// Gets the finite distance, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::core::Distance;
    ///
    /// assert_eq!(Distance::Finite(10).get(), Some(10));
    /// assert_eq!(Distance::DifferentSequence.get(), None);
    /// ```
    pub fn get(&self) -> Option<Position> {
        match self {
            Distance::Finite(distance) => Some(*distance),
            Distance::DifferentSequence => None,
        }
    }

    /// Returns whether the distance is zero (the annotations overlap or abut).
    pub fn is_zero(&self) -> bool {
        matches!(self, Distance::Finite(0))
    }
}

impl From<Distance> for Position {
    fn from(value: Distance) -> Self {
        match value {
            Distance::Finite(distance) => distance,
            Distance::DifferentSequence => Distance::SENTINEL,
        }
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Finite(distance) => write!(f, "{distance}"),
            Distance::DifferentSequence => write!(f, "different sequence"),
        }
    }
}
