//! The traits needed to use annotations, brought into scope at once.
//!
//! ```
//! use genomic_annotation::prelude::*;
//!
//! let annotation = Annotation::new("chr1", 100, 200);
//! assert_eq!(annotation.length(), 100);
//! assert!(annotation.overlaps(&Annotation::new("chr1", 150, 250)));
//! ```

pub use crate::Annotation;
pub use crate::Composite;
pub use crate::algebra::Algebra;
pub use crate::algebra::Stitch;
pub use crate::annotation::factory::Factory;
pub use crate::core::Located;
pub use crate::core::Orientable;
pub use crate::core::Scored;
