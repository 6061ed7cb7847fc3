//! Composite annotations: sorted, discontinuous parts (such as the exons of a
//! transcript) treated as a single annotation.

pub mod builder;

use std::borrow::Cow;
use std::cmp::Ordering;

use tracing::debug;

pub use builder::Builder;

use crate::Annotation;
use crate::algebra;
use crate::algebra::Algebra;
use crate::core::Buffer;
use crate::core::Distance;
use crate::core::Located;
use crate::core::Orientable;
use crate::core::Orientation;
use crate::core::Position;
use crate::core::location;

/// A structural change that a [`Composite`] refuses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// Setting the start position.
    SetStart,

    /// Setting the end position.
    SetEnd,

    /// Inserting a part at an index.
    InsertAt,

    /// Replacing the part at an index.
    Set,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::SetStart => write!(f, "set the start"),
            Operation::SetEnd => write!(f, "set the end"),
            Operation::InsertAt => write!(f, "insert a part at an index"),
            Operation::Set => write!(f, "replace a part at an index"),
        }
    }
}

/// An error related to a [`Composite`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// An unsupported operation.
    ///
    /// The span of a composite is derived from its parts, and the position of
    /// each part is determined by the natural ordering.
    Unsupported(Operation),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unsupported(operation) => write!(
                f,
                "unsupported operation: cannot {} of a composite annotation",
                operation
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A composite annotation.
///
/// The parts are always kept sorted by their natural ordering and stitched
/// together whenever they come within the maximum stitching distance of one
/// another. Queries against the composite binary search the parts.
///
/// # Examples
///
/// ```
/// use genomic_annotation::Annotation;
/// use genomic_annotation::Composite;
/// use genomic_annotation::algebra::Algebra;
/// use genomic_annotation::core::Located;
///
/// let transcript = Composite::builder()
///     .name("transcript")
///     .push(Annotation::new("chr1", 500, 550))
///     .push(Annotation::new("chr1", 100, 150))
///     .build();
///
/// assert_eq!(transcript.start(), 100);
/// assert_eq!(transcript.end(), 550);
/// assert_eq!(transcript.effective_length(), 100);
///
/// // The gap between the parts is not covered.
/// assert!(transcript.contains(&Annotation::new("chr1", 110, 120)));
/// assert!(!transcript.contains(&Annotation::new("chr1", 140, 510)));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Composite {
    /// The name, if one was given.
    name: Option<String>,

    /// The orientation.
    orientation: Orientation,

    /// The parts in their natural order.
    parts: Vec<Annotation>,

    /// The maximum gap between parts that are stitched together (never
    /// negative, so overlapping parts are always stitched).
    max_distance_to_stitch: Buffer,
}

/// Orders a part against a query, ignoring the chromosome when the query has
/// none.
fn query_order<L>(part: &Annotation, query: &L) -> Ordering
where
    L: Located + ?Sized,
{
    match query.chromosome() {
        Some(_) => location::compare(part, query),
        None => part
            .start()
            .cmp(&query.start())
            .then_with(|| part.end().cmp(&query.end())),
    }
}

impl Composite {
    /// Gets a [`Builder`] for a composite.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates a composite from parts in any order.
    pub(crate) fn from_parts(
        name: Option<String>,
        orientation: Orientation,
        parts: Vec<Annotation>,
        max_distance_to_stitch: Buffer,
    ) -> Self {
        let mut composite = Self {
            name,
            orientation,
            parts,
            max_distance_to_stitch: max_distance_to_stitch.max(0),
        };
        composite.consolidate();
        composite
    }

    /// Gets the effective name: the explicit name if one was set or the
    /// location string otherwise.
    pub fn name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(self.location_string()),
        }
    }

    /// Sets the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Gets the maximum gap between parts that are stitched together.
    pub fn max_distance_to_stitch(&self) -> Buffer {
        self.max_distance_to_stitch
    }

    /// Gets the parts.
    pub fn parts(&self) -> &[Annotation] {
        &self.parts
    }

    /// Gets the number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns whether there are no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Gets the part at `index`.
    pub fn get(&self, index: usize) -> Option<&Annotation> {
        self.parts.get(index)
    }

    /// Iterates over the parts in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Annotation> {
        self.parts.iter()
    }

    /// Gets the total number of positions covered by the parts.
    pub fn effective_length(&self) -> Position {
        self.parts.iter().map(|part| part.length()).sum()
    }

    /// Adds a part at its sorted position and stitches it to its neighbours
    /// if they are close enough.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::Composite;
    ///
    /// let mut composite = Composite::builder().max_distance_to_stitch(10).build();
    /// composite.add(Annotation::new("chr1", 100, 150));
    /// composite.add(Annotation::new("chr1", 300, 350));
    /// composite.add(Annotation::new("chr1", 155, 200));
    ///
    /// assert_eq!(composite.len(), 2);
    /// assert_eq!(composite[0].to_string(), "chr1:100-200");
    /// ```
    pub fn add(&mut self, part: Annotation) {
        let index = self.parts.partition_point(|existing| existing < &part);
        self.parts.insert(index, part);
        self.restitch();
    }

    /// Adds many parts, then sorts and stitches all parts.
    pub fn extend<I>(&mut self, parts: I)
    where
        I: IntoIterator<Item = Annotation>,
    {
        self.parts.extend(parts);
        self.consolidate();
    }

    /// Removes and returns the part at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<Annotation> {
        match index < self.parts.len() {
            true => Some(self.parts.remove(index)),
            false => None,
        }
    }

    /// Removes all parts.
    pub fn clear(&mut self) {
        self.parts.clear();
    }

    /// Sorts the parts and stitches those within the maximum stitching
    /// distance of one another.
    pub fn consolidate(&mut self) {
        self.parts.sort();
        self.restitch();
    }

    /// Stitches the (already sorted) parts.
    fn restitch(&mut self) {
        let before = self.parts.len();
        let parts = std::mem::take(&mut self.parts);
        self.parts = algebra::stitch_list(parts, self.max_distance_to_stitch);

        if self.parts.len() != before {
            debug!(
                "stitched {} parts of {} into {}",
                before,
                self.name(),
                self.parts.len()
            );
        }
    }

    /// Gets the index of the part closest to `query`.
    ///
    /// A part equal to `query` by location is found directly. Otherwise, the
    /// parts on either side of where `query` would sit are compared by
    /// distance and the earlier part is preferred when they are equally
    /// close. Returns `None` when there are no parts.
    pub fn closest_part_index<L>(&self, query: &L) -> Option<usize>
    where
        L: Located + ?Sized,
    {
        if self.parts.is_empty() {
            return None;
        }

        match self
            .parts
            .binary_search_by(|part| query_order(part, query))
        {
            Ok(index) => Some(index),
            Err(insertion) => {
                let next = insertion.min(self.parts.len() - 1);
                let prior = insertion.saturating_sub(1);

                let closest = match algebra::distance(query, &self.parts[prior])
                    > algebra::distance(query, &self.parts[next])
                {
                    true => next,
                    false => prior,
                };

                Some(closest)
            }
        }
    }

    /// Gets the part closest to `query` (see
    /// [`closest_part_index()`](Composite::closest_part_index)).
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::Composite;
    ///
    /// let composite = Composite::builder()
    ///     .push(Annotation::new("chr1", 100, 150))
    ///     .push(Annotation::new("chr1", 500, 550))
    ///     .build();
    ///
    /// let closest = composite.closest_part(&Annotation::new("chr1", 400, 410));
    /// assert_eq!(closest, Some(&Annotation::new("chr1", 500, 550)));
    /// ```
    pub fn closest_part<L>(&self, query: &L) -> Option<&Annotation>
    where
        L: Located + ?Sized,
    {
        self.closest_part_index(query)
            .and_then(|index| self.parts.get(index))
    }

    /// Gets the parts that overlap `query`, in order.
    ///
    /// The search starts at the closest part and walks outwards in both
    /// directions until a part no longer overlaps.
    pub fn overlapping_parts<L>(&self, query: &L) -> Vec<&Annotation>
    where
        L: Located + ?Sized,
    {
        let closest = match self.closest_part_index(query) {
            Some(index) => index,
            None => return Vec::new(),
        };

        let mut results = self.parts[closest..]
            .iter()
            .take_while(|part| part.overlaps(query))
            .collect::<Vec<_>>();

        results.extend(
            self.parts[..closest]
                .iter()
                .rev()
                .take_while(|part| part.overlaps(query)),
        );

        results.sort();
        results
    }

    /// Gets the portions of the parts not covered by any of `others`.
    pub fn minus<'a, L, I>(&self, others: I) -> Vec<Annotation>
    where
        L: Located + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        let others = others.into_iter().collect::<Vec<_>>();

        self.parts
            .iter()
            .flat_map(|part| part.minus(others.iter().copied()))
            .collect()
    }

    /// Shrinks the part closest to `other` to its overlap with `other`.
    ///
    /// Nothing changes when the closest part does not overlap `other`.
    pub fn take_intersection<L>(&mut self, other: &L)
    where
        L: Located + ?Sized,
    {
        if let Some(index) = self.closest_part_index(other) {
            self.parts[index].take_intersection(other);
            self.consolidate();
        }
    }

    /// Grows the part closest to `other` to the span of itself and `other`.
    ///
    /// Nothing changes when the closest part does not overlap `other`.
    pub fn take_union<L>(&mut self, other: &L)
    where
        L: Located + ?Sized,
    {
        if let Some(index) = self.closest_part_index(other) {
            self.parts[index].take_union(other);
            self.consolidate();
        }
    }

    /// Always fails: the start is derived from the first part.
    pub fn set_start(&mut self, _: Position) -> Result<()> {
        Err(Error::Unsupported(Operation::SetStart))
    }

    /// Always fails: the end is derived from the last part.
    pub fn set_end(&mut self, _: Position) -> Result<()> {
        Err(Error::Unsupported(Operation::SetEnd))
    }

    /// Always fails: parts are placed by their natural ordering. Use
    /// [`add()`](Composite::add) instead.
    pub fn insert_at(&mut self, _: usize, _: Annotation) -> Result<()> {
        Err(Error::Unsupported(Operation::InsertAt))
    }

    /// Always fails: parts are placed by their natural ordering. Use
    /// [`remove()`](Composite::remove) and [`add()`](Composite::add) instead.
    pub fn set(&mut self, _: usize, _: Annotation) -> Result<()> {
        Err(Error::Unsupported(Operation::Set))
    }
}

impl Located for Composite {
    fn chromosome(&self) -> Option<&str> {
        self.parts.first().and_then(|part| part.chromosome())
    }

    fn start(&self) -> Position {
        self.parts.first().map(|part| part.start()).unwrap_or_default()
    }

    fn end(&self) -> Position {
        self.parts.last().map(|part| part.end()).unwrap_or_default()
    }
}

impl Algebra for Composite {
    fn overlaps_with_buffer<L>(&self, other: &L, buffer: Buffer) -> bool
    where
        L: Located + ?Sized,
    {
        self.parts
            .binary_search_by(|part| match algebra::overlaps(part, other, buffer) {
                true => Ordering::Equal,
                false => query_order(part, other),
            })
            .is_ok()
    }

    fn contains<L>(&self, other: &L) -> bool
    where
        L: Located + ?Sized,
    {
        self.parts
            .binary_search_by(|part| match algebra::contains(part, other) {
                true => Ordering::Equal,
                false => query_order(part, other),
            })
            .is_ok()
    }

    fn overlap<L>(&self, other: &L) -> Position
    where
        L: Located + ?Sized,
    {
        self.overlapping_parts(other)
            .into_iter()
            .map(|part| part.overlap(other))
            .sum()
    }

    /// Gets the distance from the closest part to `other`, or
    /// [`Distance::DifferentSequence`] when there are no parts.
    fn distance_to<L>(&self, other: &L) -> Distance
    where
        L: Located + ?Sized,
    {
        match self.closest_part(other) {
            Some(part) => part.distance_to(other),
            None => Distance::DifferentSequence,
        }
    }
}

impl Orientable for Composite {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }
}

impl std::ops::Index<usize> for Composite {
    type Output = Annotation;

    fn index(&self, index: usize) -> &Self::Output {
        &self.parts[index]
    }
}

impl IntoIterator for Composite {
    type Item = Annotation;
    type IntoIter = std::vec::IntoIter<Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

impl<'a> IntoIterator for &'a Composite {
    type Item = &'a Annotation;
    type IntoIter = std::slice::Iter<'a, Annotation>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

impl std::fmt::Display for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [", self.name())?;

        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{}", part)?;
        }

        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exons() -> Composite {
        Composite::builder()
            .name("transcript")
            .push(Annotation::new("chr1", 500, 550))
            .push(Annotation::new("chr1", 100, 150))
            .push(Annotation::new("chr1", 300, 320))
            .build()
    }

    #[test]
    fn test_span_and_effective_length() {
        let composite = Composite::builder()
            .push(Annotation::new("chr1", 100, 150))
            .push(Annotation::new("chr1", 500, 550))
            .build();

        assert_eq!(composite.chromosome(), Some("chr1"));
        assert_eq!(composite.start(), 100);
        assert_eq!(composite.end(), 550);
        assert_eq!(composite.length(), 450);
        assert_eq!(composite.effective_length(), 100);
    }

    #[test]
    fn test_an_empty_composite() {
        let composite = Composite::default();

        assert!(composite.is_empty());
        assert_eq!(composite.start(), 0);
        assert_eq!(composite.end(), 0);
        assert_eq!(composite.chromosome(), None);
        assert_eq!(composite.closest_part(&Annotation::new("chr1", 0, 10)), None);
        assert!(composite
            .overlapping_parts(&Annotation::new("chr1", 0, 10))
            .is_empty());
        assert!(!composite.overlaps(&Annotation::new("chr1", 0, 10)));
        assert_eq!(
            composite.distance_to(&Annotation::new("chr1", 0, 10)),
            Distance::DifferentSequence
        );
    }

    #[test]
    fn test_closest_part() {
        let composite = exons();

        let closest = composite.closest_part_index(&Annotation::new("chr1", 160, 170));
        assert_eq!(closest, Some(0));

        let closest = composite.closest_part_index(&Annotation::new("chr1", 480, 490));
        assert_eq!(closest, Some(2));

        let closest = composite.closest_part_index(&Annotation::new("chr1", 300, 320));
        assert_eq!(closest, Some(1));

        let closest = composite.closest_part_index(&Annotation::new("chr1", 0, 10));
        assert_eq!(closest, Some(0));

        let closest = composite.closest_part_index(&Annotation::new("chr1", 900, 910));
        assert_eq!(closest, Some(2));
    }

    #[test]
    fn test_equally_close_parts_prefer_the_earlier_part() {
        let composite = exons();

        // 50 positions from the end of the first part and from the start of the
        // second part.
        let closest = composite.closest_part_index(&Annotation::new("chr1", 200, 250));
        assert_eq!(closest, Some(0));
    }

    #[test]
    fn test_closest_part_with_an_unset_chromosome() {
        let composite = exons();
        let query = Annotation::builder().start(505).end(510).build();

        assert_eq!(composite.closest_part_index(&query), Some(2));
        assert!(composite.overlaps(&query));
    }

    #[test]
    fn test_overlapping_parts() {
        let composite = exons();

        let parts = composite.overlapping_parts(&Annotation::new("chr1", 140, 310));
        assert_eq!(
            parts,
            vec![
                &Annotation::new("chr1", 100, 150),
                &Annotation::new("chr1", 300, 320),
            ]
        );

        let parts = composite.overlapping_parts(&Annotation::new("chr1", 0, 1000));
        assert_eq!(parts.len(), 3);

        let parts = composite.overlapping_parts(&Annotation::new("chr1", 200, 250));
        assert!(parts.is_empty());

        let parts = composite.overlapping_parts(&Annotation::new("chr2", 0, 1000));
        assert!(parts.is_empty());
    }

    #[test]
    fn test_algebra_over_parts() {
        let composite = exons();

        assert!(composite.overlaps(&Annotation::new("chr1", 310, 315)));
        assert!(!composite.overlaps(&Annotation::new("chr1", 200, 250)));
        assert!(composite.overlaps_with_buffer(&Annotation::new("chr1", 200, 250), 51));

        assert!(composite.contains(&Annotation::new("chr1", 510, 520)));
        assert!(!composite.contains(&Annotation::new("chr1", 140, 160)));
        assert!(!composite.contains(&Annotation::new("chr2", 510, 520)));

        assert_eq!(composite.overlap(&Annotation::new("chr1", 140, 310)), 20);
        assert_eq!(
            composite.distance_to(&Annotation::new("chr1", 330, 340)),
            Distance::Finite(10)
        );
        assert_eq!(
            composite.distance_to(&Annotation::new("chr2", 330, 340)),
            Distance::DifferentSequence
        );
    }

    #[test]
    fn test_minus() {
        let composite = exons();
        let pieces = composite.minus(&[Annotation::new("chr1", 120, 310)]);

        assert_eq!(
            pieces
                .iter()
                .map(|piece| (piece.start(), piece.end()))
                .collect::<Vec<_>>(),
            vec![(100, 120), (310, 320), (500, 550)]
        );
    }

    #[test]
    fn test_adding_keeps_the_parts_sorted_and_stitched() {
        let mut composite = Composite::builder().max_distance_to_stitch(10).build();

        composite.add(Annotation::new("chr1", 500, 550));
        composite.add(Annotation::new("chr1", 100, 150));
        composite.add(Annotation::new("chr1", 300, 320));
        assert_eq!(composite.len(), 3);
        assert!(composite.parts().windows(2).all(|w| w[0] <= w[1]));

        composite.add(Annotation::new("chr1", 325, 495));
        assert_eq!(composite.len(), 2);
        assert_eq!((composite[1].start(), composite[1].end()), (300, 550));

        composite.extend([Annotation::new("chr1", 0, 10), Annotation::new("chr1", 145, 200)]);
        assert_eq!(
            composite
                .iter()
                .map(|part| (part.start(), part.end()))
                .collect::<Vec<_>>(),
            vec![(0, 10), (100, 200), (300, 550)]
        );
    }

    #[test]
    fn test_in_place_algebra_on_the_closest_part() {
        let mut composite = exons();

        composite.take_union(&Annotation::new("chr1", 140, 200));
        assert_eq!((composite[0].start(), composite[0].end()), (100, 200));

        composite.take_intersection(&Annotation::new("chr1", 510, 600));
        assert_eq!((composite[2].start(), composite[2].end()), (510, 550));

        composite.take_intersection(&Annotation::new("chr1", 700, 800));
        assert_eq!((composite[2].start(), composite[2].end()), (510, 550));
    }

    #[test]
    fn test_container_operations() {
        let mut composite = exons();

        assert_eq!(composite.get(1), Some(&Annotation::new("chr1", 300, 320)));
        assert_eq!(composite.get(3), None);
        assert_eq!((&composite).into_iter().count(), 3);

        assert_eq!(composite.remove(1), Some(Annotation::new("chr1", 300, 320)));
        assert_eq!(composite.remove(5), None);
        assert_eq!(composite.len(), 2);

        composite.clear();
        assert!(composite.is_empty());
    }

    #[test]
    fn test_unsupported_operations() {
        let mut composite = exons();

        let err = composite.set_start(0).unwrap_err();
        assert_eq!(err, Error::Unsupported(Operation::SetStart));
        assert_eq!(
            err.to_string(),
            "unsupported operation: cannot set the start of a composite annotation"
        );

        assert!(composite.set_end(0).is_err());
        assert!(composite
            .insert_at(0, Annotation::new("chr1", 0, 10))
            .is_err());
        assert!(composite.set(0, Annotation::new("chr1", 0, 10)).is_err());
        assert_eq!(composite, exons());
    }

    #[test]
    fn test_consolidated_parts_are_sorted() {
        use rand::Rng as _;
        use rand::SeedableRng as _;
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..100 {
            let parts = (0..20)
                .map(|_| {
                    let start = rng.gen_range(0..10_000);
                    Annotation::new("chr1", start, start + rng.gen_range(1..100))
                })
                .collect::<Vec<_>>();

            let composite = Composite::builder()
                .max_distance_to_stitch(rng.gen_range(0..50))
                .extend(parts)
                .build();

            assert!(composite
                .parts()
                .windows(2)
                .all(|w| w[0].start() <= w[1].start()));
            assert!(composite
                .parts()
                .windows(2)
                .all(|w| !w[0].overlaps_with_buffer(&w[1], composite.max_distance_to_stitch())));
        }
    }

    #[test]
    fn test_a_negative_stitching_distance_still_stitches_overlapping_parts() {
        let composite = Composite::builder()
            .max_distance_to_stitch(-5)
            .push(Annotation::new("chr1", 0, 10))
            .push(Annotation::new("chr1", 8, 20))
            .build();

        assert_eq!(composite.max_distance_to_stitch(), 0);
        assert_eq!(composite.len(), 1);
        assert_eq!((composite[0].start(), composite[0].end()), (0, 20));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            exons().to_string(),
            "transcript [chr1:100-150, chr1:300-320, chr1:500-550]"
        );
    }
}
