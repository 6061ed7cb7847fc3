//! Creating annotations from raw records.

use std::num::ParseFloatError;
use std::num::ParseIntError;

use crate::Annotation;
use crate::core::Orientation;
use crate::core::Position;
use crate::core::orientation::ParseOrientationError;

/// The delimiter between the fields of a BED record.
pub const BED_DELIMITER: char = '\t';

/// The minimum number of fields in a BED record.
pub const MIN_BED_FIELDS: usize = 3;

/// The placeholder for a missing value in a BED record.
pub const MISSING_VALUE: &str = ".";

/// An error associated with parsing a BED record.
#[derive(Debug)]
pub enum ParseError {
    /// An incorrect number of fields.
    IncorrectNumberOfFields(usize),

    /// An invalid start position.
    InvalidStart(ParseIntError),

    /// An invalid end position.
    InvalidEnd(ParseIntError),

    /// An invalid score.
    InvalidScore(ParseFloatError),

    /// An invalid orientation.
    InvalidOrientation(ParseOrientationError),

    /// An invalid extra score (the index of the field and the error).
    InvalidExtraScore(usize, ParseFloatError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in BED record: expected at least {} fields, found {} \
                 fields",
                MIN_BED_FIELDS, n
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start position: {}", err),
            ParseError::InvalidEnd(err) => write!(f, "invalid end position: {}", err),
            ParseError::InvalidScore(err) => write!(f, "invalid score: {}", err),
            ParseError::InvalidOrientation(err) => write!(f, "invalid orientation: {}", err),
            ParseError::InvalidExtraScore(i, err) => {
                write!(f, "invalid extra score in field {}: {}", i + 1, err)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A [`Result`](std::result::Result) with a [`ParseError`].
type Result<T> = std::result::Result<T, ParseError>;

/// A way of creating annotations from raw records.
pub trait Factory {
    /// The type of annotation created.
    type Output;

    /// The error returned when a record cannot be read.
    type Error;

    /// Creates an annotation from the fields of a record.
    fn create(&self, fields: &[&str]) -> std::result::Result<Self::Output, Self::Error>;

    /// Creates an annotation from an existing one.
    fn create_from(&self, annotation: &Annotation) -> Self::Output;

    /// Creates an empty placeholder annotation carrying only a name.
    fn create_named(&self, name: &str) -> Self::Output;

    /// Creates an annotation from a tab-delimited line.
    fn create_from_line(&self, line: &str) -> std::result::Result<Self::Output, Self::Error> {
        let fields = line
            .trim_end_matches(['\r', '\n'])
            .split(BED_DELIMITER)
            .collect::<Vec<_>>();
        self.create(&fields)
    }
}

/// A [`Factory`] for [`Annotation`]s from BED records.
///
/// The fields read are the chromosome, the start and the end, optionally
/// followed by the name, the score (`.` reads as zero), the strand and any
/// number of extra scores.
///
/// # Examples
///
/// ```
/// use genomic_annotation::annotation::factory::BedFactory;
/// use genomic_annotation::annotation::factory::Factory;
/// use genomic_annotation::core::Located;
/// use genomic_annotation::core::Orientable;
/// use genomic_annotation::core::Orientation;
/// use genomic_annotation::core::Scored;
///
/// let annotation = BedFactory.create_from_line("chr1\t100\t200\texon\t5\t-\t0.5")?;
///
/// assert_eq!(annotation.chromosome(), Some("chr1"));
/// assert_eq!(annotation.start(), 100);
/// assert_eq!(annotation.end(), 200);
/// assert_eq!(annotation.name(), "exon");
/// assert_eq!(annotation.score(), 5.0);
/// assert_eq!(annotation.orientation(), Orientation::Reverse);
/// assert_eq!(annotation.extra_scores(), &[0.5]);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BedFactory;

impl Factory for BedFactory {
    type Output = Annotation;
    type Error = ParseError;

    fn create(&self, fields: &[&str]) -> Result<Annotation> {
        if fields.len() < MIN_BED_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(fields.len()));
        }

        let start = fields[1]
            .parse::<Position>()
            .map_err(ParseError::InvalidStart)?;
        let end = fields[2]
            .parse::<Position>()
            .map_err(ParseError::InvalidEnd)?;

        let mut builder = Annotation::builder()
            .chromosome(fields[0])
            .start(start)
            .end(end);

        if let Some(name) = fields.get(3) {
            builder = builder.name(*name);
        }

        if let Some(score) = fields.get(4) {
            let score = match *score {
                MISSING_VALUE => 0.0,
                score => score.parse::<f64>().map_err(ParseError::InvalidScore)?,
            };
            builder = builder.score(score);
        }

        if let Some(orientation) = fields.get(5) {
            let orientation = orientation
                .parse::<Orientation>()
                .map_err(ParseError::InvalidOrientation)?;
            builder = builder.orientation(orientation);
        }

        for (i, score) in fields.iter().enumerate().skip(6) {
            let score = score
                .parse::<f64>()
                .map_err(|err| ParseError::InvalidExtraScore(i, err))?;
            builder = builder.extra_score(score);
        }

        Ok(builder.build())
    }

    fn create_from(&self, annotation: &Annotation) -> Annotation {
        annotation.clone()
    }

    fn create_named(&self, name: &str) -> Annotation {
        Annotation::named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Located;
    use crate::core::Orientable;
    use crate::core::Scored;

    #[test]
    fn test_three_fields() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let annotation = BedFactory.create_from_line("chr1\t100\t200\n")?;

        assert_eq!(annotation.to_string(), "chr1:100-200");
        assert_eq!(annotation.explicit_name(), None);
        assert_eq!(annotation.orientation(), Orientation::Unknown);
        assert_eq!(annotation.score(), 0.0);

        Ok(())
    }

    #[test]
    fn test_a_missing_score() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let annotation = BedFactory.create(&["chr1", "100", "200", "a", ".", "+"])?;

        assert_eq!(annotation.score(), 0.0);
        assert_eq!(annotation.orientation(), Orientation::Forward);

        Ok(())
    }

    #[test]
    fn test_too_few_fields() {
        let err = BedFactory.create(&["chr1", "100"]).unwrap_err();
        assert!(matches!(err, ParseError::IncorrectNumberOfFields(2)));
        assert_eq!(
            err.to_string(),
            "invalid number of fields in BED record: expected at least 3 fields, found 2 fields"
        );
    }

    #[test]
    fn test_invalid_fields() {
        let err = BedFactory.create_from_line("chr1\tfoo\t200").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStart(_)));

        let err = BedFactory.create_from_line("chr1\t100\t-1").unwrap_err();
        assert!(matches!(err, ParseError::InvalidEnd(_)));

        let err = BedFactory.create_from_line("chr1\t100\t200\ta\thigh").unwrap_err();
        assert!(matches!(err, ParseError::InvalidScore(_)));

        let err = BedFactory.create_from_line("chr1\t100\t200\ta\t1\t?").unwrap_err();
        assert!(matches!(err, ParseError::InvalidOrientation(_)));
        assert_eq!(
            err.to_string(),
            "invalid orientation: parse orientation error: ? is not a valid orientation"
        );

        let err = BedFactory
            .create_from_line("chr1\t100\t200\ta\t1\t+\t0.5\tx")
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidExtraScore(7, _)));
    }

    #[test]
    fn test_copies_and_placeholders() {
        let annotation = Annotation::new("chr1", 100, 200);

        assert_eq!(BedFactory.create_from(&annotation), annotation);

        let placeholder = BedFactory.create_named("gene");
        assert_eq!(placeholder.name(), "gene");
        assert_eq!(placeholder.length(), 0);
    }
}
