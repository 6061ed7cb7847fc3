//! Annotations: named, oriented and scored ranges upon a chromosome.

pub mod builder;
pub mod factory;

use std::borrow::Cow;
use std::cmp::Ordering;
use std::hash::Hash;
use std::hash::Hasher;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

pub use builder::Builder;

use crate::algebra;
use crate::algebra::Algebra;
use crate::algebra::Stitch;
use crate::core::Located;
use crate::core::Orientable;
use crate::core::Orientation;
use crate::core::Position;
use crate::core::Scored;
use crate::core::location;

/// The pattern of a location string (`<chromosome>:<start>-<end>`, where the
/// positions may contain thousands separators).
static LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:\s]*):([0-9,]+)-([0-9,]+)$").unwrap());

/// An error associated with parsing an annotation from a location string.
#[derive(Debug)]
pub enum ParseError {
    /// The string is not of the form `<chromosome>:<start>-<end>`.
    InvalidFormat(String),

    /// An invalid start position.
    InvalidStart(ParseIntError),

    /// An invalid end position.
    InvalidEnd(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidFormat(s) => write!(
                f,
                "invalid location: expected \"<chromosome>:<start>-<end>\", found \"{}\"",
                s
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start position: {}", err),
            ParseError::InvalidEnd(err) => write!(f, "invalid end position: {}", err),
        }
    }
}

impl std::error::Error for ParseError {}

/// A genomic annotation.
///
/// An annotation is the half-open range `[start, end)` on a chromosome along
/// with an optional name, an orientation, a score and any number of extra
/// scores.
///
/// Two annotations are equal when they share a chromosome, a start, an end and
/// an (effective) [name](Annotation::name()). Orientation and scores do not
/// take part in equality.
#[derive(Clone, Debug, Default)]
pub struct Annotation {
    /// The chromosome.
    chromosome: Option<String>,

    /// The start position (inclusive).
    start: Position,

    /// The end position (exclusive).
    end: Position,

    /// The name, if one was given.
    name: Option<String>,

    /// The orientation.
    orientation: Orientation,

    /// The score.
    score: f64,

    /// Any extra scores.
    extra_scores: Vec<f64>,
}

impl Annotation {
    /// Creates a new, unnamed annotation.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::core::Located;
    ///
    /// let annotation = Annotation::new("chr1", 100, 200);
    ///
    /// assert_eq!(annotation.chromosome(), Some("chr1"));
    /// assert_eq!(annotation.start(), 100);
    /// assert_eq!(annotation.end(), 200);
    /// ```
    pub fn new(chromosome: impl Into<String>, start: Position, end: Position) -> Self {
        Self {
            chromosome: Some(chromosome.into()),
            start,
            end,
            ..Default::default()
        }
    }

    /// Creates an empty placeholder annotation carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Gets a [`Builder`] for an annotation.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates an unnamed annotation covering the same range as `other`.
    ///
    /// Only the chromosome, start and end are carried over.
    pub fn spanning(other: &Annotation) -> Self {
        Self {
            chromosome: other.chromosome.clone(),
            start: other.start,
            end: other.end,
            ..Default::default()
        }
    }

    /// Copies this annotation with its range replaced by `[start, end)`.
    pub fn with_range(&self, start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }

    /// Gets the effective name: the explicit name if one was set or the
    /// location string otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    ///
    /// let mut annotation = Annotation::new("chr1", 100, 200);
    /// assert_eq!(annotation.name(), "chr1:100-200");
    ///
    /// annotation.set_name("exon");
    /// assert_eq!(annotation.name(), "exon");
    /// ```
    pub fn name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.location_string()),
        }
    }

    /// Gets the name, if one was explicitly set.
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Sets the chromosome.
    pub fn set_chromosome(&mut self, chromosome: impl Into<String>) {
        self.chromosome = Some(chromosome.into());
    }

    /// Sets the start position.
    pub fn set_start(&mut self, start: Position) {
        self.start = start;
    }

    /// Sets the end position.
    pub fn set_end(&mut self, end: Position) {
        self.end = end;
    }

    /// Shrinks this annotation to its overlap with `other`.
    ///
    /// Nothing changes when the two do not overlap or when the overlap would
    /// be inverted.
    pub fn take_intersection<L>(&mut self, other: &L)
    where
        L: Located + ?Sized,
    {
        if let Some((start, end)) = algebra::shared_range(self, other) {
            self.start = start;
            self.end = end;
        }
    }

    /// Grows this annotation to the span of itself and `other`.
    ///
    /// Nothing changes when the two do not overlap: use
    /// [`stitch_to()`](Annotation::stitch_to) to span a gap.
    pub fn take_union<L>(&mut self, other: &L)
    where
        L: Located + ?Sized,
    {
        if algebra::overlaps(self, other, 0) {
            self.stitch_to(other);
        }
    }

    /// Grows this annotation to the span of itself and `other` whether or not
    /// the two overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    ///
    /// let mut annotation = Annotation::new("chr1", 100, 200);
    /// annotation.stitch_to(&Annotation::new("chr1", 500, 600));
    ///
    /// assert_eq!(annotation.to_string(), "chr1:100-600");
    /// ```
    pub fn stitch_to<L>(&mut self, other: &L)
    where
        L: Located + ?Sized,
    {
        self.start = self.start.min(other.start());
        self.end = self.end.max(other.end());
    }

    /// Gets the overlap with `other` as a new, unnamed annotation.
    ///
    /// Returns `None` when the two are on different chromosomes or do not
    /// overlap by at least one position.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    ///
    /// let a = Annotation::new("chr1", 100, 200);
    /// let b = Annotation::new("chr1", 150, 300);
    /// let c = Annotation::new("chr1", 200, 300);
    ///
    /// assert_eq!(a.intersect(&b), Some(Annotation::new("chr1", 150, 200)));
    /// assert_eq!(a.intersect(&c), None);
    /// ```
    pub fn intersect<L>(&self, other: &L) -> Option<Annotation>
    where
        L: Located + ?Sized,
    {
        let (start, end) = algebra::shared_range(self, other)?;

        Some(Annotation {
            chromosome: self
                .chromosome
                .clone()
                .or_else(|| other.chromosome().map(String::from)),
            start,
            end,
            orientation: self.orientation,
            ..Default::default()
        })
    }

    /// Intersects with each of `others` and stitches the (sorted)
    /// intersections that overlap one another.
    pub fn intersect_all<'a, L, I>(&self, others: I) -> Vec<Annotation>
    where
        L: Located + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        let mut intersections = others
            .into_iter()
            .filter_map(|other| self.intersect(other))
            .collect::<Vec<_>>();
        intersections.sort();

        algebra::stitch_list(intersections, 0)
    }

    /// Gets the span of this annotation and `other` as a new annotation, or
    /// `None` when the two do not overlap.
    pub fn union<L>(&self, other: &L) -> Option<Annotation>
    where
        L: Located + ?Sized,
    {
        match algebra::overlaps(self, other, 0) {
            true => Some(self.stitched(other)),
            false => None,
        }
    }

    /// Gets the span of this annotation and `other` as a new annotation.
    pub fn stitched<L>(&self, other: &L) -> Annotation
    where
        L: Located + ?Sized,
    {
        let mut result = self.clone();
        result.stitch_to(other);
        result
    }

    /// Gets the portions of this annotation not covered by any of `others`
    /// (see [`algebra::difference::minus()`]).
    pub fn minus<'a, L, I>(&self, others: I) -> Vec<Annotation>
    where
        L: Located + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        algebra::difference::minus(self, others)
    }

    /// Fragments this annotation at the boundaries of `dissectors` (see
    /// [`algebra::difference::dissect()`]).
    pub fn dissect<'a, L, I>(&self, dissectors: I) -> Vec<Annotation>
    where
        L: Located + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        algebra::difference::dissect(self, dissectors)
    }

    /// Fragments this annotation at the boundaries of `dissector` (see
    /// [`algebra::difference::dissect_by()`]).
    pub fn dissect_by<L>(&self, dissector: &L) -> Vec<Annotation>
    where
        L: Located + ?Sized,
    {
        algebra::difference::dissect_by(self, dissector)
    }
}

impl Located for Annotation {
    fn chromosome(&self) -> Option<&str> {
        self.chromosome.as_deref()
    }

    fn start(&self) -> Position {
        self.start
    }

    fn end(&self) -> Position {
        self.end
    }
}

impl Algebra for Annotation {}

impl Orientable for Annotation {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

impl Scored for Annotation {
    fn score(&self) -> f64 {
        self.score
    }

    fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    fn extra_scores(&self) -> &[f64] {
        &self.extra_scores
    }

    fn add_extra_score(&mut self, score: f64) {
        self.extra_scores.push(score);
    }

    fn clear_extra_scores(&mut self) {
        self.extra_scores.clear();
    }
}

impl Stitch for Annotation {
    fn stitch(&mut self, other: &Self) {
        self.stitch_to(other);
    }

    fn label(&self) -> Cow<'_, str> {
        self.name()
    }

    fn relabel(&mut self, label: String) {
        self.set_name(label);
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome
            && self.start == other.start
            && self.end == other.end
            && self.name() == other.name()
    }
}

impl Eq for Annotation {}

impl Hash for Annotation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chromosome.hash(state);
        self.name().hash(state);
        ((u128::from(self.start) + u128::from(self.end)) / 2).hash(state);
    }
}

impl Ord for Annotation {
    fn cmp(&self, other: &Self) -> Ordering {
        location::compare(self, other).then_with(|| self.name().cmp(&other.name()))
    }
}

impl PartialOrd for Annotation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.location_string())
    }
}

impl FromStr for Annotation {
    type Err = ParseError;

    /// Parses a location string (`chr1:1,000-2,000`) into an unnamed
    /// annotation. An empty chromosome leaves the chromosome unset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = LOCATION
            .captures(s.trim())
            .ok_or_else(|| ParseError::InvalidFormat(s.to_string()))?;

        let chromosome = match &captures[1] {
            "" => None,
            chromosome => Some(chromosome.to_string()),
        };

        let start = captures[2]
            .replace(',', "")
            .parse::<Position>()
            .map_err(ParseError::InvalidStart)?;

        let end = captures[3]
            .replace(',', "")
            .parse::<Position>()
            .map_err(ParseError::InvalidEnd)?;

        Ok(Self {
            chromosome,
            start,
            end,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::Distance;

    #[test]
    fn test_parsing_a_location() -> Result<(), Box<dyn std::error::Error>> {
        let annotation = "chr7:1,000-2,500".parse::<Annotation>()?;

        assert_eq!(annotation.chromosome(), Some("chr7"));
        assert_eq!(annotation.start(), 1000);
        assert_eq!(annotation.end(), 2500);
        assert_eq!(annotation.explicit_name(), None);
        assert_eq!(annotation.to_string(), "chr7:1000-2500");

        let wildcard = ":5-10".parse::<Annotation>()?;
        assert_eq!(wildcard.chromosome(), None);

        Ok(())
    }

    #[test]
    fn test_invalid_locations() {
        let err = "chr1-100-200".parse::<Annotation>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert_eq!(
            err.to_string(),
            "invalid location: expected \"<chromosome>:<start>-<end>\", found \"chr1-100-200\""
        );

        let err = "chr1:99999999999999999999-1".parse::<Annotation>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidStart(_)));

        let err = "chr1:1-99999999999999999999".parse::<Annotation>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidEnd(_)));
    }

    #[test]
    fn test_short_chromosomes_are_displayed_with_a_prefix() {
        let annotation = Annotation::new("X", 10, 20);

        assert_eq!(annotation.chromosome(), Some("X"));
        assert_eq!(annotation.to_string(), "chrX:10-20");
        assert_eq!(annotation.to_ucsc(), "chrX:10-20");
    }

    #[test]
    fn test_overlapping_intervals() -> Result<(), Box<dyn std::error::Error>> {
        let a = "chr1:100-200".parse::<Annotation>()?;
        let b = "chr1:150-300".parse::<Annotation>()?;

        assert!(a.overlaps(&b));
        assert_eq!(a.overlap(&b), 50);
        assert_eq!(a.intersect(&b), Some("chr1:150-200".parse()?));

        Ok(())
    }

    #[test]
    fn test_different_chromosomes() -> Result<(), Box<dyn std::error::Error>> {
        let a = "chr1:100-200".parse::<Annotation>()?;
        let b = "chr2:150-300".parse::<Annotation>()?;

        assert!(!a.overlaps(&b));
        assert_eq!(a.distance_to(&b), Distance::DifferentSequence);
        assert_eq!(Position::from(a.distance_to(&b)), 1_000_000_000);
        assert_eq!(a.intersect(&b), None);

        Ok(())
    }

    #[test]
    fn test_in_place_algebra() {
        let mut a = Annotation::new("chr1", 100, 200);
        a.take_intersection(&Annotation::new("chr1", 150, 300));
        assert_eq!((a.start(), a.end()), (150, 200));

        a.take_intersection(&Annotation::new("chr1", 500, 600));
        assert_eq!((a.start(), a.end()), (150, 200));

        a.take_union(&Annotation::new("chr1", 100, 160));
        assert_eq!((a.start(), a.end()), (100, 200));

        a.take_union(&Annotation::new("chr1", 300, 400));
        assert_eq!((a.start(), a.end()), (100, 200));

        a.stitch_to(&Annotation::new("chr1", 300, 400));
        assert_eq!((a.start(), a.end()), (100, 400));
    }

    #[test]
    fn test_inverted_annotations_are_not_intersected() {
        let other = Annotation::new("chr1", 0, 20);

        let mut inverted = Annotation::new("chr1", 10, 5);
        inverted.take_intersection(&other);
        assert_eq!((inverted.start(), inverted.end()), (10, 5));
        assert_eq!(inverted.intersect(&other), None);
        assert_eq!(other.intersect(&inverted), None);

        let mut annotation = other.clone();
        annotation.take_intersection(&inverted);
        assert_eq!((annotation.start(), annotation.end()), (0, 20));
    }

    #[test]
    fn test_pure_algebra_leaves_the_original_alone() {
        let a = Annotation::new("chr1", 100, 200);

        assert_eq!(
            a.union(&Annotation::new("chr1", 150, 300)),
            Some(Annotation::new("chr1", 100, 300))
        );
        assert_eq!(a.union(&Annotation::new("chr1", 300, 400)), None);
        assert_eq!(
            a.stitched(&Annotation::new("chr1", 300, 400)),
            Annotation::new("chr1", 100, 400)
        );
        assert_eq!(a, Annotation::new("chr1", 100, 200));
    }

    #[test]
    fn test_intersecting_with_many() {
        let a = Annotation::new("chr1", 0, 100);
        let others = vec![
            Annotation::new("chr1", 80, 120),
            Annotation::new("chr1", 10, 30),
            Annotation::new("chr1", 20, 40),
            Annotation::new("chr2", 0, 100),
        ];

        let intersections = a.intersect_all(&others);

        assert_eq!(intersections.len(), 2);
        assert_eq!((intersections[0].start(), intersections[0].end()), (10, 40));
        assert_eq!((intersections[1].start(), intersections[1].end()), (80, 100));
    }

    #[test]
    fn test_equality_uses_the_effective_name() {
        let unnamed = Annotation::new("chr1", 100, 200);
        let named_as_location = Annotation::builder()
            .chromosome("chr1")
            .start(100)
            .end(200)
            .name("chr1:100-200")
            .build();
        let named = Annotation::builder()
            .chromosome("chr1")
            .start(100)
            .end(200)
            .name("exon")
            .build();

        assert_eq!(unnamed, named_as_location);
        assert_ne!(unnamed, named);

        let set = [unnamed.clone(), named_as_location, named]
            .into_iter()
            .collect::<HashSet<_>>();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_orientation_and_scores_are_ignored_by_equality() {
        let mut a = Annotation::new("chr1", 100, 200);
        let b = a.clone();

        a.set_orientation(Orientation::Reverse);
        a.set_score(10.0);
        a.add_extra_score(1.0);

        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_natural_ordering() {
        let mut annotations = vec![
            Annotation::new("chr1", 10, 20),
            Annotation::new("chr2", 50, 60),
            Annotation::new("chr1", 5, 30),
            Annotation::new("chr1", 5, 10),
        ];
        annotations.sort();

        assert_eq!(
            annotations,
            vec![
                Annotation::new("chr2", 50, 60),
                Annotation::new("chr1", 5, 10),
                Annotation::new("chr1", 5, 30),
                Annotation::new("chr1", 10, 20),
            ]
        );
    }

    #[test]
    fn test_the_ordering_agrees_with_equality() {
        let a = Annotation::builder()
            .chromosome("chr1")
            .start(0)
            .end(10)
            .name("a")
            .build();
        let b = Annotation::builder()
            .chromosome("chr1")
            .start(0)
            .end(10)
            .name("b")
            .build();

        assert_ne!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_hashing_does_not_overflow() {
        let annotation = Annotation::new("chr1", Position::MAX - 1, Position::MAX);
        let set = [annotation.clone()].into_iter().collect::<HashSet<_>>();

        assert!(set.contains(&annotation));
    }

    #[test]
    fn test_placeholders() {
        let placeholder = Annotation::named("gene");

        assert_eq!(placeholder.name(), "gene");
        assert_eq!(placeholder.chromosome(), None);
        assert_eq!(placeholder.length(), 0);
    }

    #[test]
    fn test_oriented_ends() {
        let mut annotation = Annotation::new("chr1", 100, 200);
        assert_eq!(annotation.oriented_start(), 100);
        assert_eq!(annotation.oriented_end(), 200);

        annotation.set_orientation(Orientation::Reverse);
        assert!(annotation.is_reversed());
        assert_eq!(annotation.oriented_start(), 200);
        assert_eq!(annotation.oriented_end(), 100);
    }

    #[test]
    fn test_extra_scores() {
        let mut annotation = Annotation::new("chr1", 100, 200);
        annotation.add_extra_score(1.5);
        annotation.add_extra_score(2.5);

        assert_eq!(annotation.extra_scores(), &[1.5, 2.5]);
        assert_eq!(annotation.extra_score(1), Some(2.5));
        assert_eq!(annotation.extra_score(2), None);

        let copy = annotation.clone();
        annotation.clear_extra_scores();

        assert!(annotation.extra_scores().is_empty());
        assert_eq!(copy.extra_scores(), &[1.5, 2.5]);
    }
}
