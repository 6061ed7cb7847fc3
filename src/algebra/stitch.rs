//! Stitching adjacent annotations together.

use std::borrow::Cow;

use tracing::trace;

use crate::algebra::Algebra;
use crate::core::Buffer;

/// The separator placed between the names of stitched items.
pub const NAME_SEPARATOR: char = '-';

/// What the stitching pass needs from the items it stitches.
pub trait Stitch: Algebra {
    /// Enlarges `self` to the span enclosing both `self` and `other`,
    /// regardless of whether they overlap.
    fn stitch(&mut self, other: &Self);

    /// Gets the name used when joining the names of stitched items.
    fn label(&self) -> Cow<'_, str>;

    /// Replaces the name.
    fn relabel(&mut self, label: String);
}

/// Stitches together the items of a sorted sequence that lie within
/// `max_gap` positions of one another.
///
/// This is a single left-to-right pass holding one accumulating item: each
/// subsequent item that overlaps the accumulator (after extending it by
/// `max_gap`) is stitched into it and their names are joined with
/// [`NAME_SEPARATOR`]; any other item replaces the accumulator, which is
/// emitted unchanged. The relative order of the input is kept.
///
/// The input is expected to be sorted by start (for instance, by the natural
/// ordering of [`Annotation`](crate::Annotation)). This function does not sort.
///
/// # Examples
///
/// ```
/// use genomic_annotation::Annotation;
/// use genomic_annotation::algebra::stitch_list;
///
/// let annotations = vec![
///     Annotation::builder().chromosome("chr1").start(1).end(10).name("a").build(),
///     Annotation::builder().chromosome("chr1").start(8).end(15).name("b").build(),
///     Annotation::builder().chromosome("chr1").start(50).end(60).name("c").build(),
/// ];
///
/// let stitched = stitch_list(annotations, 0);
///
/// assert_eq!(stitched.len(), 2);
/// assert_eq!(stitched[0].to_string(), "chr1:1-15");
/// assert_eq!(stitched[0].name(), "a-b");
/// assert_eq!(stitched[1].to_string(), "chr1:50-60");
/// assert_eq!(stitched[1].name(), "c");
/// ```
pub fn stitch_list<T, I>(sorted: I, max_gap: Buffer) -> Vec<T>
where
    T: Stitch,
    I: IntoIterator<Item = T>,
{
    let mut results = Vec::new();
    let mut items = sorted.into_iter();

    let mut current = match items.next() {
        Some(item) => item,
        None => return results,
    };

    for next in items {
        if current.overlaps_with_buffer(&next, max_gap) {
            current.stitch(&next);
            let label = format!("{}{}{}", current.label(), NAME_SEPARATOR, next.label());
            trace!("stitched into {label}");
            current.relabel(label);
        } else {
            results.push(std::mem::replace(&mut current, next));
        }
    }

    results.push(current);
    results
}
