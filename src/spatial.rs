//! Immutable, bulk-loaded 2D spatial index over axis-aligned rectangles.
//!
//! Backed by [`rstar`]'s R-tree, which provides exactly the contract the
//! engine needs: a single bulk load, no inserts or deletes afterwards, and a
//! rectangle-intersection query that returns the same (unordered) result set
//! regardless of the order items were loaded in (spec §4.1).

use rstar::{AABB, RTree, RTreeObject};

use crate::geometry::Rect;

/// One entry loaded into the index: the original item's position (its index
/// into the caller's slice) paired with its bounding box.
#[derive(Debug, Clone, Copy)]
struct IndexedRect {
    item_index: usize,
    rect: Rect,
}

impl RTreeObject for IndexedRect {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.rect.min_x, self.rect.min_y],
            [self.rect.max_x, self.rect.max_y],
        )
    }
}

/// A static spatial index over a fixed set of rectangles.
///
/// Construction is a single bulk load; the index cannot be mutated
/// afterwards. Query results are returned as indices into the slice that was
/// passed to [`SpatialIndex::build`].
pub struct SpatialIndex {
    tree: RTree<IndexedRect>,
}

impl SpatialIndex {
    /// Bulk-loads an index over `rects`. Empty input yields an empty index.
    #[must_use]
    pub fn build(rects: &[Rect]) -> Self {
        let entries: Vec<IndexedRect> = rects
            .iter()
            .enumerate()
            .map(|(item_index, &rect)| IndexedRect { item_index, rect })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Returns the indices of every item whose bounding box intersects the
    /// query rectangle `[min_x, max_x] x [min_y, max_y]`.
    #[must_use]
    pub fn search(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<usize> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item_index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_finds_intersecting_rects_regardless_of_load_order() {
        let rects = vec![
            Rect::new(0.0, 10.0, 0.0, 10.0).unwrap(),
            Rect::new(100.0, 110.0, 100.0, 110.0).unwrap(),
            Rect::new(5.0, 15.0, 5.0, 15.0).unwrap(),
        ];
        let index = SpatialIndex::build(&rects);
        let mut hits = index.search(0.0, 0.0, 20.0, 20.0);
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 2]);

        let reversed: Vec<Rect> = rects.iter().rev().copied().collect();
        let index_rev = SpatialIndex::build(&reversed);
        let mut hits_rev = index_rev.search(0.0, 0.0, 20.0, 20.0);
        hits_rev.sort_unstable();
        assert_eq!(hits_rev, vec![1, 2]);
    }

    #[test]
    fn search_on_empty_index_returns_nothing() {
        let index = SpatialIndex::build(&[]);
        assert!(index.search(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
