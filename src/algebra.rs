//! The interval algebra over located items.
//!
//! The query operations (overlap, containment, overlap depth, distance and
//! fuzzy equality) are available both as free functions over anything that is
//! [`Located`] and through the [`Algebra`] trait. The trait's default methods
//! defer to the free functions; types with a richer structure (such as
//! [`Composite`](crate::Composite)) override them.
//!
//! Operations that combine many annotations live in the submodules:
//!
//! - [`merge::merge_all_overlappers()`] collapses runs of overlapping
//!   annotations.
//! - [`stitch::stitch_list()`] merges adjacent annotations within a gap
//!   tolerance.
//! - [`difference::minus()`] and [`difference::dissect()`] subtract or
//!   fragment an annotation.

pub mod difference;
pub mod merge;
pub mod stitch;

pub use merge::merge_all_overlappers;
pub use stitch::Stitch;
pub use stitch::stitch_list;

use crate::core::Buffer;
use crate::core::Distance;
use crate::core::Located;
use crate::core::Position;
use crate::core::location::same_sequence;

/// Returns whether `a` overlaps `b` once both ends of `b` are extended by
/// `buffer`.
///
/// The two must be on compatible chromosomes (see
/// [`same_sequence()`](crate::core::location::same_sequence)). A negative
/// `buffer` requires the two to overlap by at least `-buffer` positions.
///
/// # Examples
///
/// ```
/// use genomic_annotation::Annotation;
/// use genomic_annotation::algebra;
///
/// let a = Annotation::new("chr1", 100, 200);
/// let b = Annotation::new("chr1", 205, 300);
///
/// assert!(!algebra::overlaps(&a, &b, 0));
/// assert!(algebra::overlaps(&a, &b, 10));
/// ```
pub fn overlaps<A, B>(a: &A, b: &B, buffer: Buffer) -> bool
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    if !same_sequence(a, b) {
        return false;
    }

    let buffer = i128::from(buffer);

    i128::from(a.start()) < i128::from(b.end()) + buffer
        && i128::from(a.end()) > i128::from(b.start()) - buffer
}

/// Returns whether `a` entirely contains `b`.
///
/// Containment requires the chromosome of `b` to equal the chromosome of `a`
/// unless the chromosome of `b` is unset.
pub fn contains<A, B>(a: &A, b: &B) -> bool
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    (b.chromosome().is_none() || b.chromosome() == a.chromosome())
        && a.start() <= b.start()
        && a.end() >= b.end()
}

/// Gets the range `[start, end)` shared by `a` and `b`.
///
/// Returns `None` when the two do not overlap or when the shared range would be
/// inverted (which happens when either has a start past its end).
pub fn shared_range<A, B>(a: &A, b: &B) -> Option<(Position, Position)>
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    if !overlaps(a, b, 0) {
        return None;
    }

    let start = a.start().max(b.start());
    let end = a.end().min(b.end());

    end.checked_sub(start).map(|_| (start, end))
}

/// Gets the number of positions shared by `a` and `b` (zero when they do not
/// overlap).
pub fn overlap<A, B>(a: &A, b: &B) -> Position
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    shared_range(a, b)
        .map(|(start, end)| end - start)
        .unwrap_or_default()
}

/// Gets the distance between `a` and `b`.
///
/// Overlapping items are zero apart. Items on different chromosomes are
/// [`Distance::DifferentSequence`] apart. Otherwise, the distance is the gap
/// between the nearer edges, which means that abutting items (`a.end() ==
/// b.start()`) are also zero apart.
pub fn distance<A, B>(a: &A, b: &B) -> Distance
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    if !same_sequence(a, b) {
        return Distance::DifferentSequence;
    }

    if overlaps(a, b, 0) {
        return Distance::Finite(0);
    }

    match a.start() >= b.end() {
        true => Distance::Finite(a.start() - b.end()),
        false => Distance::Finite(b.start().saturating_sub(a.end())),
    }
}

/// Interval algebra queries.
pub trait Algebra: Located {
    /// Returns whether `self` overlaps `other` when the ends of `other` are
    /// extended by `buffer` (see [`overlaps()`]).
    fn overlaps_with_buffer<L>(&self, other: &L, buffer: Buffer) -> bool
    where
        L: Located + ?Sized,
    {
        overlaps(self, other, buffer)
    }

    /// Returns whether `self` overlaps `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::algebra::Algebra;
    ///
    /// let a = Annotation::new("chr1", 100, 200);
    /// let b = Annotation::new("chr1", 150, 300);
    /// let c = Annotation::new("chr2", 150, 300);
    ///
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    fn overlaps<L>(&self, other: &L) -> bool
    where
        L: Located + ?Sized,
    {
        self.overlaps_with_buffer(other, 0)
    }

    /// Returns whether `self` overlaps any of `others`.
    fn overlaps_any<'a, L, I>(&self, others: I, buffer: Buffer) -> bool
    where
        L: Located + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        others
            .into_iter()
            .any(|other| self.overlaps_with_buffer(other, buffer))
    }

    /// Returns whether `self` entirely contains `other`.
    fn contains<L>(&self, other: &L) -> bool
    where
        L: Located + ?Sized,
    {
        contains(self, other)
    }

    /// Gets the number of positions shared with `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::algebra::Algebra;
    ///
    /// let a = Annotation::new("chr1", 100, 200);
    /// let b = Annotation::new("chr1", 150, 300);
    ///
    /// assert_eq!(a.overlap(&b), 50);
    /// ```
    fn overlap<L>(&self, other: &L) -> Position
    where
        L: Located + ?Sized,
    {
        overlap(self, other)
    }

    /// Gets the distance to `other` (see [`distance()`]).
    fn distance_to<L>(&self, other: &L) -> Distance
    where
        L: Located + ?Sized,
    {
        distance(self, other)
    }

    /// Returns whether both the starts and the ends of `self` and `other`
    /// differ by strictly less than `fudge`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::algebra::Algebra;
    ///
    /// let a = Annotation::new("chr1", 100, 200);
    /// let b = Annotation::new("chr1", 104, 197);
    ///
    /// assert!(a.almost_equal(&b, 5));
    /// assert!(!a.almost_equal(&b, 4));
    /// ```
    fn almost_equal<L>(&self, other: &L, fudge: Position) -> bool
    where
        L: Located + ?Sized,
    {
        self.start().abs_diff(other.start()) < fudge && self.end().abs_diff(other.end()) < fudge
    }
}
