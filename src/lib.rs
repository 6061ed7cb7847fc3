//! `genomic-annotation` is a crate for genomic annotations and the interval
//! algebra over them.
//!
//! The crate provides three main points of entry:
//!
//! - The [`Annotation`], a named, oriented and scored half-open range upon a
//!   chromosome, along with the [interval algebra](crate::algebra) over it.
//! - The [`Composite`], a sorted set of discontinuous parts (the exons of a
//!   transcript, say) that behaves as one annotation.
//! - The [`index::Index`], an interval tree for finding which of many
//!   annotations overlap a region of interest.
//!
//! ## Annotations and the interval algebra
//!
//! Annotations are created directly, with a [`annotation::Builder`], from a
//! location string (`chr1:1,000-2,000`) or from a raw record via an
//! [`annotation::factory::Factory`] such as the
//! [`annotation::factory::BedFactory`]. Every annotation sits on a
//! chromosome (or, when the chromosome is unset, matches any chromosome) and
//! covers the positions `[start, end)`.
//!
//! The query side of the algebra (overlap with or without a buffer,
//! containment, overlap depth and distance) is provided by the
//! [`algebra::Algebra`] trait. The combining side works over whole sequences
//! of annotations that are already in their natural (sorted) order:
//! [`algebra::merge_all_overlappers()`] collapses overlapping runs,
//! [`algebra::stitch_list()`] joins annotations that lie within a maximum gap
//! of one another, and [`algebra::difference::minus()`] subtracts.
//!
//! Below is a representative example of how you might merge a handful of
//! annotations and subtract the result from a region.
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use genomic_annotation::Annotation;
//! use genomic_annotation::algebra;
//!
//! let annotations = ["chr1:100-200", "chr1:150-300", "chr1:500-600"]
//!     .into_iter()
//!     .map(|s| s.parse::<Annotation>())
//!     .collect::<Result<BTreeSet<_>, _>>()?;
//!
//! let merged = algebra::merge_all_overlappers(&annotations);
//! assert_eq!(merged.len(), 2);
//!
//! let region = "chr1:0-1,000".parse::<Annotation>()?;
//! for piece in region.minus(&merged) {
//!     println!("{}", piece);
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Composite annotations
//!
//! A [`Composite`] is built with a [`composite::Builder`], which accepts parts
//! in any order. The parts are kept sorted and are stitched together whenever
//! they come within the maximum stitching distance of one another, so the
//! binary-search-driven queries (such as
//! [`Composite::closest_part()`] and [`Composite::overlapping_parts()`]) are
//! always valid.
//!
//! ```
//! use genomic_annotation::Annotation;
//! use genomic_annotation::Composite;
//! use genomic_annotation::algebra::Algebra;
//! use genomic_annotation::core::Located;
//!
//! let transcript = Composite::builder()
//!     .name("NM_000001")
//!     .push(Annotation::new("chr1", 500, 550))
//!     .push(Annotation::new("chr1", 100, 150))
//!     .build();
//!
//! assert_eq!(transcript.start(), 100);
//! assert_eq!(transcript.end(), 550);
//! assert_eq!(transcript.effective_length(), 100);
//! assert!(!transcript.overlaps(&Annotation::new("chr1", 200, 300)));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod algebra;
pub mod annotation;
pub mod composite;
pub mod core;
pub mod index;
pub mod prelude;

pub use annotation::Annotation;
pub use composite::Composite;
