//! The location of an annotation: a chromosome and a half-open range of
//! positions upon it.

use std::borrow::Cow;
use std::cmp::Ordering;

/// The exact, 0-based position upon a chromosome.
pub type Position = u64;

/// A symmetric extension (positive) or contraction (negative) applied to both
/// ends of an annotation before testing for overlap.
pub type Buffer = i64;

/// The prefix conventionally displayed before short chromosome names.
pub const CHROMOSOME_PREFIX: &str = "chr";

/// Anything that sits at a half-open range `[start, end)` on a chromosome.
///
/// An unset chromosome acts as a wildcard in the algebra: it is considered to
/// be compatible with every chromosome.
pub trait Located {
    /// Gets the chromosome, if one is set.
    fn chromosome(&self) -> Option<&str>;

    /// Gets the (inclusive) start position.
    fn start(&self) -> Position;

    /// Gets the (exclusive) end position.
    fn end(&self) -> Position;

    /// Gets the number of positions covered.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::core::Located;
    ///
    /// let annotation = Annotation::new("chr1", 100, 200);
    /// assert_eq!(annotation.length(), 100);
    /// ```
    fn length(&self) -> Position {
        self.end().saturating_sub(self.start())
    }

    /// Gets the midpoint, rounding halves up.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::core::Located;
    ///
    /// assert_eq!(Annotation::new("chr1", 100, 200).middle(), 150);
    /// assert_eq!(Annotation::new("chr1", 100, 201).middle(), 151);
    /// ```
    fn middle(&self) -> Position {
        let (low, high) = match self.start() <= self.end() {
            true => (self.start(), self.end()),
            false => (self.end(), self.start()),
        };

        low + (high - low).div_ceil(2)
    }

    /// Gets the chromosome the way it is usually written: prefixed with
    /// `chr` when the stored name is shorter than three characters (e.g.,
    /// `1` becomes `chr1`) and verbatim otherwise (e.g., `chrX` or
    /// `scaffold_12`).
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::core::Located;
    ///
    /// let annotation = Annotation::new("1", 0, 10);
    /// assert_eq!(annotation.chromosome_string().as_deref(), Some("chr1"));
    ///
    /// let annotation = Annotation::new("chr1", 0, 10);
    /// assert_eq!(annotation.chromosome_string().as_deref(), Some("chr1"));
    /// ```
    fn chromosome_string(&self) -> Option<Cow<'_, str>> {
        self.chromosome().map(|chromosome| {
            if chromosome.len() < 3 {
                Cow::Owned(format!("{CHROMOSOME_PREFIX}{chromosome}"))
            } else {
                Cow::Borrowed(chromosome)
            }
        })
    }

    /// Gets the location string (`chr<chromosome>:<start>-<end>`).
    ///
    /// An unset chromosome renders as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::core::Located;
    ///
    /// let annotation = Annotation::new("7", 1000, 2000);
    /// assert_eq!(annotation.location_string(), "chr7:1000-2000");
    /// ```
    fn location_string(&self) -> String {
        format!(
            "{}:{}-{}",
            self.chromosome_string().unwrap_or_default(),
            self.start(),
            self.end()
        )
    }

    /// An alias for [`Located::location_string()`] (the UCSC browser form).
    fn to_ucsc(&self) -> String {
        self.location_string()
    }
}

/// Returns whether two located items may share a chromosome: either both
/// chromosomes are equal or at least one of them is unset.
pub fn same_sequence<A, B>(a: &A, b: &B) -> bool
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    match (a.chromosome(), b.chromosome()) {
        (Some(a), Some(b)) => a == b,
        _ => true,
    }
}

/// The natural ordering over located items.
///
/// Chromosomes are compared in _reverse_ lexicographic order (the chromosome
/// of `b` is compared against the chromosome of `a`). Within a chromosome,
/// items are ordered by start and then by end, both ascending.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use genomic_annotation::Annotation;
/// use genomic_annotation::core::location::compare;
///
/// let a = Annotation::new("chr1", 100, 200);
/// let b = Annotation::new("chr1", 100, 300);
/// let c = Annotation::new("chr2", 0, 10);
///
/// assert_eq!(compare(&a, &b), Ordering::Less);
/// assert_eq!(compare(&a, &c), Ordering::Greater);
/// ```
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: Located + ?Sized,
    B: Located + ?Sized,
{
    b.chromosome()
        .cmp(&a.chromosome())
        .then_with(|| a.start().cmp(&b.start()))
        .then_with(|| a.end().cmp(&b.end()))
}
