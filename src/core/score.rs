//! Scores attached to an annotation.

/// Anything that carries a primary score and an ordered list of extra scores.
pub trait Scored {
    /// Gets the primary score.
    fn score(&self) -> f64;

    /// Sets the primary score.
    fn set_score(&mut self, score: f64);

    /// Gets all extra scores in the order they were added.
    fn extra_scores(&self) -> &[f64];

    /// Appends an extra score.
    fn add_extra_score(&mut self, score: f64);

    /// Removes all extra scores.
    fn clear_extra_scores(&mut self);

    /// Gets the extra score at index `i`, if it exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use genomic_annotation::Annotation;
    /// use genomic_annotation::core::Scored;
    ///
    /// let mut annotation = Annotation::new("chr1", 0, 10);
    /// annotation.add_extra_score(0.5);
    ///
    /// assert_eq!(annotation.extra_score(0), Some(0.5));
    /// assert_eq!(annotation.extra_score(1), None);
    /// ```
    fn extra_score(&self, i: usize) -> Option<f64> {
        self.extra_scores().get(i).copied()
    }
}
