//! Merging runs of overlapping annotations.

use tracing::debug;

use crate::Annotation;
use crate::algebra::Algebra;
use crate::core::Located;

/// Merges every run of mutually overlapping annotations into one spanning
/// annotation and leaves singletons alone.
///
/// The annotations are expected to be sorted by start (for instance, a
/// [`BTreeSet`](std::collections::BTreeSet) of annotations or a sorted slice);
/// this function does not sort. A growing accumulator is seeded with the first
/// annotation; each subsequent annotation that overlaps the accumulator extends
/// its end, and any other annotation flushes the accumulator and starts a new
/// one.
///
/// Annotations that did not overlap anything are returned as copies of
/// themselves. Merged runs are returned as new annotations carrying only the
/// chromosome, start and end of the run.
///
/// # Examples
///
/// ```
/// use genomic_annotation::Annotation;
/// use genomic_annotation::algebra::merge_all_overlappers;
///
/// let annotations = vec![
///     Annotation::new("chr1", 1, 10),
///     Annotation::new("chr1", 5, 20),
///     Annotation::new("chr1", 30, 40),
/// ];
///
/// let merged = merge_all_overlappers(&annotations);
///
/// assert_eq!(
///     merged,
///     vec![Annotation::new("chr1", 1, 20), Annotation::new("chr1", 30, 40)]
/// );
/// ```
pub fn merge_all_overlappers<'a, I>(sorted: I) -> Vec<Annotation>
where
    I: IntoIterator<Item = &'a Annotation>,
{
    let mut results = Vec::new();
    let mut annotations = sorted.into_iter();

    let mut growing = match annotations.next() {
        Some(first) => Run::new(first),
        None => return results,
    };

    for next in annotations {
        if next.overlaps(growing.annotation()) {
            growing.extend(next);
        } else {
            results.push(std::mem::replace(&mut growing, Run::new(next)).finish());
        }
    }

    results.push(growing.finish());

    debug!("merged overlapping annotations into {} runs", results.len());
    results
}

/// A run of overlapping annotations being accumulated.
struct Run {
    /// The accumulated annotation.
    annotation: Annotation,

    /// Whether more than one annotation has been accumulated.
    merged: bool,
}

impl Run {
    /// Starts a new run from a single annotation.
    fn new(annotation: &Annotation) -> Self {
        Self {
            annotation: annotation.clone(),
            merged: false,
        }
    }

    /// Gets the accumulated annotation.
    fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Extends the run to cover `next`.
    ///
    /// The start is never moved, as the input is sorted by start.
    fn extend(&mut self, next: &Annotation) {
        if !self.merged {
            self.annotation = Annotation::spanning(&self.annotation);
            self.merged = true;
        }

        let end = self.annotation.end().max(next.end());
        self.annotation.set_end(end);
    }

    /// Consumes the run to produce the accumulated annotation.
    fn finish(self) -> Annotation {
        self.annotation
    }
}
