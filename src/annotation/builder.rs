//! A builder for an [`Annotation`].

use crate::Annotation;
use crate::core::Orientable as _;
use crate::core::Orientation;
use crate::core::Position;
use crate::core::Scored as _;

/// A builder for an [`Annotation`].
///
/// Every field is optional: an annotation built from an empty builder is the
/// unnamed, unoriented `0..0` range on an unset chromosome.
///
/// # Examples
///
/// ```
/// use genomic_annotation::Annotation;
/// use genomic_annotation::core::Located;
/// use genomic_annotation::core::Orientable;
/// use genomic_annotation::core::Orientation;
/// use genomic_annotation::core::Scored;
///
/// let annotation = Annotation::builder()
///     .chromosome("chr2")
///     .start(1_000)
///     .end(2_000)
///     .name("exon-1")
///     .orientation(Orientation::Forward)
///     .score(0.75)
///     .extra_score(12.0)
///     .build();
///
/// assert_eq!(annotation.chromosome(), Some("chr2"));
/// assert_eq!(annotation.name(), "exon-1");
/// assert_eq!(annotation.orientation(), Orientation::Forward);
/// assert_eq!(annotation.score(), 0.75);
/// assert_eq!(annotation.extra_scores(), &[12.0]);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    /// The chromosome.
    chromosome: Option<String>,

    /// The start position.
    start: Position,

    /// The end position.
    end: Position,

    /// The name.
    name: Option<String>,

    /// The orientation.
    orientation: Orientation,

    /// The score.
    score: f64,

    /// The extra scores.
    extra_scores: Vec<f64>,
}

impl Builder {
    /// Sets the chromosome.
    pub fn chromosome(mut self, chromosome: impl Into<String>) -> Self {
        self.chromosome = Some(chromosome.into());
        self
    }

    /// Sets the start position.
    pub fn start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    /// Sets the end position.
    pub fn end(mut self, end: Position) -> Self {
        self.end = end;
        self
    }

    /// Sets the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the score.
    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// Appends an extra score.
    pub fn extra_score(mut self, score: f64) -> Self {
        self.extra_scores.push(score);
        self
    }

    /// Builds the [`Annotation`].
    pub fn build(self) -> Annotation {
        let mut annotation = Annotation::default();

        if let Some(chromosome) = self.chromosome {
            annotation.set_chromosome(chromosome);
        }

        if let Some(name) = self.name {
            annotation.set_name(name);
        }

        annotation.set_start(self.start);
        annotation.set_end(self.end);

        annotation.set_orientation(self.orientation);
        annotation.set_score(self.score);
        for score in self.extra_scores {
            annotation.add_extra_score(score);
        }

        annotation
    }
}
