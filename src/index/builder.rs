//! A builder for an [`Index`].

use std::collections::HashMap;

use rust_lapper as lapper;
use tracing::debug;

use crate::Annotation;
use crate::core::Located;
use crate::index::Index;

/// The inner value of the index.
type Iv = lapper::Interval<u64, Annotation>;

/// An error related to building an [`Index`].
#[derive(Debug)]
pub enum Error {
    /// An annotation without a chromosome (the name of the annotation).
    MissingChromosome(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingChromosome(name) => {
                write!(f, "missing chromosome: cannot index annotation {}", name)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for an [`Index`].
#[derive(Debug)]
pub struct Builder;

impl Builder {
    /// Builds an [`Index`] from annotations in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::index;
    ///
    /// let index = index::Builder::default().try_build_from(vec![
    ///     Annotation::new("chr1", 100, 200),
    ///     Annotation::new("chr2", 100, 200),
    /// ])?;
    ///
    /// assert_eq!(index.len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build_from<I>(&self, annotations: I) -> Result<Index>
    where
        I: IntoIterator<Item = Annotation>,
    {
        let mut hm = HashMap::<String, Vec<Iv>>::default();

        for annotation in annotations {
            let chromosome = match annotation.chromosome() {
                Some(chromosome) => chromosome.to_string(),
                None => return Err(Error::MissingChromosome(annotation.name().into_owned())),
            };

            hm.entry(chromosome).or_default().push(lapper::Interval {
                start: annotation.start(),
                stop: annotation.end(),
                val: annotation,
            });
        }

        let mut inner = HashMap::<String, lapper::Lapper<u64, Annotation>>::new();

        for (k, v) in hm.into_iter() {
            debug!("indexing {} annotations on {}", v.len(), k);
            inner.insert(k, lapper::Lapper::new(v));
        }

        Ok(Index { inner })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self
    }
}
