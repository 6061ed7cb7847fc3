//! The orientation of an annotation relative to its chromosome.

use std::str::FromStr;

/// An error related to the parsing of an orientation.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseOrientationError(String);

impl std::fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse orientation error: {} is not a valid orientation", self.0)
    }
}

impl std::error::Error for ParseOrientationError {}

/// The orientation of an annotation.
///
/// Annotations that were never assigned an orientation are
/// [`Orientation::Unknown`], which is distinct from both `+` and `-`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Orientation {
    /// The forward orientation (`+`).
    Forward,
    /// The reverse orientation (`-`).
    Reverse,
    /// No known orientation (`*`).
    #[default]
    Unknown,
}

impl Orientation {
    /// Returns whether the orientation is [`Orientation::Reverse`].
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::core::Orientation;
    ///
    /// assert!(Orientation::Reverse.is_reverse());
    /// assert!(!Orientation::Forward.is_reverse());
    /// assert!(!Orientation::Unknown.is_reverse());
    /// ```
    pub fn is_reverse(&self) -> bool {
        matches!(self, Orientation::Reverse)
    }

    /// Returns whether the orientation is [`Orientation::Forward`].
    pub fn is_forward(&self) -> bool {
        matches!(self, Orientation::Forward)
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Forward),
            "-" => Ok(Self::Reverse),
            "*" | "." => Ok(Self::Unknown),
            c => Err(ParseOrientationError(c.to_string())),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Forward => write!(f, "+"),
            Orientation::Reverse => write!(f, "-"),
            Orientation::Unknown => write!(f, "*"),
        }
    }
}

/// Anything that carries an [`Orientation`].
pub trait Orientable: crate::core::Located {
    /// Gets the orientation.
    fn orientation(&self) -> Orientation;

    /// Sets the orientation.
    fn set_orientation(&mut self, orientation: Orientation);

    /// Returns whether this is in the reverse orientation.
    fn is_reversed(&self) -> bool {
        self.orientation().is_reverse()
    }

    /// Gets the start with respect to the orientation: the end position for
    /// reverse-oriented items and the start position otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::core::Orientable;
    /// use genomic_annotation::core::Orientation;
    ///
    /// let mut annotation = Annotation::new("chr1", 100, 200);
    /// assert_eq!(annotation.oriented_start(), 100);
    ///
    /// annotation.set_orientation(Orientation::Reverse);
    /// assert_eq!(annotation.oriented_start(), 200);
    /// assert_eq!(annotation.oriented_end(), 100);
    /// ```
    fn oriented_start(&self) -> crate::core::Position {
        match self.is_reversed() {
            true => self.end(),
            false => self.start(),
        }
    }

    /// Gets the end with respect to the orientation: the start position for
    /// reverse-oriented items and the end position otherwise.
    fn oriented_end(&self) -> crate::core::Position {
        match self.is_reversed() {
            true => self.start(),
            false => self.end(),
        }
    }
}
