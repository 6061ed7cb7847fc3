//! Subtracting from and fragmenting an annotation.

use crate::Annotation;
use crate::algebra::overlaps;
use crate::core::Located;
use crate::core::Position;

/// Gets the portions of `annotation` not covered by any of `others`.
///
/// The obstacles in `others` may overlap one another and need not be sorted.
/// Obstacles on other chromosomes are ignored. Each returned piece is a copy of
/// `annotation` (same chromosome, orientation, scores and explicit name) with
/// its range narrowed.
///
/// # Examples
///
/// ```
/// use genomic_annotation::Annotation;
/// use genomic_annotation::algebra::difference::minus;
///
/// let annotation = Annotation::new("chr1", 0, 100);
/// let obstacles = vec![
///     Annotation::new("chr1", 40, 60),
///     Annotation::new("chr1", 10, 20),
///     Annotation::new("chr1", 15, 25),
///     Annotation::new("chr2", 0, 100),
/// ];
///
/// let pieces = minus(&annotation, &obstacles);
///
/// assert_eq!(
///     pieces,
///     vec![
///         Annotation::new("chr1", 0, 10),
///         Annotation::new("chr1", 25, 40),
///         Annotation::new("chr1", 60, 100),
///     ]
/// );
/// ```
pub fn minus<'a, L, I>(annotation: &Annotation, others: I) -> Vec<Annotation>
where
    L: Located + ?Sized + 'a,
    I: IntoIterator<Item = &'a L>,
{
    let mut obstacles = others
        .into_iter()
        .filter(|other| overlaps(annotation, *other, 0))
        .map(|other| (other.start(), other.end()))
        .collect::<Vec<_>>();
    obstacles.sort_unstable();

    let mut pieces = Vec::new();
    let mut cursor = annotation.start();

    for (start, end) in obstacles {
        if start > cursor {
            pieces.push(annotation.with_range(cursor, start));
        }

        cursor = cursor.max(end);

        if cursor >= annotation.end() {
            return pieces;
        }
    }

    if cursor < annotation.end() {
        pieces.push(annotation.with_range(cursor, annotation.end()));
    }

    pieces
}

/// Fragments `annotation` at every boundary of the `dissectors` that overlap
/// it.
///
/// The fragments partition `annotation`: they are contiguous, sorted and
/// together span exactly the original range. If no dissector overlaps,
/// `annotation` is returned as the only fragment.
///
/// # Examples
///
/// ```
/// use genomic_annotation::Annotation;
/// use genomic_annotation::algebra::difference::dissect;
///
/// let annotation = Annotation::new("chr1", 0, 100);
/// let dissectors = vec![Annotation::new("chr1", 20, 40), Annotation::new("chr1", 90, 200)];
///
/// let fragments = dissect(&annotation, &dissectors);
///
/// assert_eq!(
///     fragments,
///     vec![
///         Annotation::new("chr1", 0, 20),
///         Annotation::new("chr1", 20, 40),
///         Annotation::new("chr1", 40, 90),
///         Annotation::new("chr1", 90, 100),
///     ]
/// );
/// ```
pub fn dissect<'a, L, I>(annotation: &Annotation, dissectors: I) -> Vec<Annotation>
where
    L: Located + ?Sized + 'a,
    I: IntoIterator<Item = &'a L>,
{
    let (start, end) = (annotation.start(), annotation.end());

    let mut boundaries = vec![start, end];
    for dissector in dissectors {
        if overlaps(annotation, dissector, 0) {
            boundaries.extend(
                [dissector.start(), dissector.end()]
                    .into_iter()
                    .filter(|position| *position > start && *position < end),
            );
        }
    }

    boundaries.sort_unstable();
    boundaries.dedup();

    boundaries
        .windows(2)
        .map(|window| annotation.with_range(window[0], window[1]))
        .collect()
}

/// Fragments `annotation` at the boundaries of a single `dissector`.
///
/// Unlike [`dissect()`], an empty vector is returned when `dissector` does not
/// overlap `annotation`.
pub fn dissect_by<L>(annotation: &Annotation, dissector: &L) -> Vec<Annotation>
where
    L: Located + ?Sized,
{
    match overlaps(annotation, dissector, 0) {
        true => dissect(annotation, [dissector]),
        false => Vec::new(),
    }
}

/// Gets the total number of positions covered by `pieces`, assuming they do
/// not overlap one another.
pub fn covered<'a, I>(pieces: I) -> Position
where
    I: IntoIterator<Item = &'a Annotation>,
{
    pieces.into_iter().map(|piece| piece.length()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Orientable;
    use crate::core::Orientation;

    #[test]
    fn test_minus_without_obstacles() {
        let annotation = Annotation::new("chr1", 0, 100);
        let pieces = minus(&annotation, &Vec::<Annotation>::new());
        assert_eq!(pieces, vec![annotation]);
    }

    #[test]
    fn test_minus_a_covering_obstacle() {
        let annotation = Annotation::new("chr1", 10, 20);
        let pieces = minus(&annotation, &[Annotation::new("chr1", 0, 100)]);
        assert!(pieces.is_empty());
    }

    #[test]
    fn test_minus_keeps_metadata() {
        let annotation = Annotation::builder()
            .chromosome("chr3")
            .start(0)
            .end(100)
            .name("gene")
            .orientation(Orientation::Reverse)
            .score(2.5)
            .build();

        let pieces = minus(&annotation, &[Annotation::new("chr3", 50, 60)]);

        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            assert_eq!(piece.name(), "gene");
            assert_eq!(piece.orientation(), Orientation::Reverse);
        }
        assert_eq!((pieces[0].start(), pieces[0].end()), (0, 50));
        assert_eq!((pieces[1].start(), pieces[1].end()), (60, 100));
        assert_eq!(covered(&pieces), 90);
    }

    #[test]
    fn test_minus_touching_obstacles() {
        let annotation = Annotation::new("chr1", 0, 100);
        let obstacles = [Annotation::new("chr1", 0, 10), Annotation::new("chr1", 100, 110)];

        assert_eq!(minus(&annotation, &obstacles), vec![Annotation::new("chr1", 10, 100)]);
    }

    #[test]
    fn test_dissect_without_overlap() {
        let annotation = Annotation::new("chr1", 0, 100);
        let elsewhere = Annotation::new("chr1", 200, 300);

        assert_eq!(dissect(&annotation, [&elsewhere]), vec![annotation.clone()]);
        assert!(dissect_by(&annotation, &elsewhere).is_empty());
    }

    #[test]
    fn test_dissect_by_a_contained_annotation() {
        let annotation = Annotation::new("chr1", 0, 100);
        let fragments = dissect_by(&annotation, &Annotation::new("chr1", 10, 20));

        assert_eq!(
            fragments,
            vec![
                Annotation::new("chr1", 0, 10),
                Annotation::new("chr1", 10, 20),
                Annotation::new("chr1", 20, 100),
            ]
        );
        assert_eq!(covered(&fragments), annotation.length());
    }
}
