//! A builder for a [`Composite`].

use crate::Annotation;
use crate::Composite;
use crate::core::Buffer;
use crate::core::Orientation;

/// A builder for a [`Composite`].
///
/// Parts may be pushed in any order. They are sorted and stitched once, when
/// the composite is built.
#[derive(Debug, Default)]
pub struct Builder {
    /// The name.
    name: Option<String>,

    /// The orientation.
    orientation: Orientation,

    /// The parts, in the order they were pushed.
    parts: Vec<Annotation>,

    /// The maximum gap between parts that are stitched together.
    max_distance_to_stitch: Buffer,
}

impl Builder {
    /// Sets the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the maximum gap between parts that are stitched together (zero
    /// by default, which only stitches overlapping parts).
    ///
    /// A negative distance is treated as zero: overlapping parts are always
    /// stitched.
    pub fn max_distance_to_stitch(mut self, max_distance_to_stitch: Buffer) -> Self {
        self.max_distance_to_stitch = max_distance_to_stitch;
        self
    }

    /// Pushes a part.
    pub fn push(mut self, part: Annotation) -> Self {
        self.parts.push(part);
        self
    }

    /// Pushes many parts.
    pub fn extend<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator<Item = Annotation>,
    {
        self.parts.extend(parts);
        self
    }

    /// Builds the [`Composite`], sorting and stitching the parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::Composite;
    ///
    /// let composite = Composite::builder()
    ///     .name("gene")
    ///     .max_distance_to_stitch(5)
    ///     .extend([
    ///         Annotation::new("chr1", 40, 50),
    ///         Annotation::new("chr1", 0, 10),
    ///         Annotation::new("chr1", 12, 20),
    ///     ])
    ///     .build();
    ///
    /// assert_eq!(composite.len(), 2);
    /// assert_eq!(composite[0].to_string(), "chr1:0-20");
    /// assert_eq!(composite[1].to_string(), "chr1:40-50");
    /// ```
    pub fn build(self) -> Composite {
        Composite::from_parts(
            self.name,
            self.orientation,
            self.parts,
            self.max_distance_to_stitch,
        )
    }
}
