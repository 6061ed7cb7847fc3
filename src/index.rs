//! An interval index over many annotations.

use std::collections::HashMap;

use rust_lapper as lapper;

use crate::Annotation;
use crate::core::Located;

pub mod builder;

pub use builder::Builder;

/// An interval index over many annotations, searchable by overlap.
///
/// Generally, you will want to use a [`builder::Builder`] to construct one of
/// these.
#[derive(Debug)]
pub struct Index {
    /// The inner interval trees for each chromosome.
    inner: HashMap<String, lapper::Lapper<u64, Annotation>>,
}

impl Index {
    /// Gets the number of indexed annotations.
    pub fn len(&self) -> usize {
        self.inner.values().map(|tree| tree.len()).sum()
    }

    /// Returns whether nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets the indexed chromosomes in sorted order.
    pub fn chromosomes(&self) -> Vec<&str> {
        let mut chromosomes = self.inner.keys().map(String::as_str).collect::<Vec<_>>();
        chromosomes.sort();
        chromosomes
    }

    /// Finds the indexed annotations overlapping `query` in their natural
    /// order.
    ///
    /// A query without a chromosome is searched for on every chromosome.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::index;
    ///
    /// let index = index::Builder.try_build_from(vec![
    ///     Annotation::new("chr1", 100, 200),
    ///     Annotation::new("chr1", 150, 250),
    ///     Annotation::new("chr2", 100, 200),
    /// ])?;
    ///
    /// let hits = index.find(&Annotation::new("chr1", 190, 195));
    /// assert_eq!(hits.len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn find<L>(&self, query: &L) -> Vec<&Annotation>
    where
        L: Located + ?Sized,
    {
        let (start, stop) = (query.start(), query.end());

        let mut results = match query.chromosome() {
            Some(chromosome) => match self.inner.get(chromosome) {
                Some(tree) => tree.find(start, stop).map(|e| &e.val).collect::<Vec<_>>(),
                None => Vec::new(),
            },
            None => self
                .inner
                .values()
                .flat_map(|tree| tree.find(start, stop).map(|e| &e.val))
                .collect::<Vec<_>>(),
        };

        results.sort();
        results
    }

    /// Counts the indexed annotations overlapping `query`.
    pub fn count<L>(&self, query: &L) -> usize
    where
        L: Located + ?Sized,
    {
        self.find(query).len()
    }

    /// Returns whether any indexed annotation overlaps `query`.
    pub fn overlaps_any<L>(&self, query: &L) -> bool
    where
        L: Located + ?Sized,
    {
        let (start, stop) = (query.start(), query.end());

        match query.chromosome() {
            Some(chromosome) => self
                .inner
                .get(chromosome)
                .is_some_and(|tree| tree.find(start, stop).next().is_some()),
            None => self
                .inner
                .values()
                .any(|tree| tree.find(start, stop).next().is_some()),
        }
    }

    /// Gets the portions of `annotation` not covered by any indexed
    /// annotation.
    pub fn subtract(&self, annotation: &Annotation) -> Vec<Annotation> {
        annotation.minus(self.find(annotation))
    }

    /// Gets the portions of `annotation` covered by the indexed annotations,
    /// with overlapping portions stitched together.
    pub fn intersect(&self, annotation: &Annotation) -> Vec<Annotation> {
        annotation.intersect_all(self.find(annotation))
    }
}
