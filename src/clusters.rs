//! Groups anchors into connected components of spatial proximity, using a
//! static spatial index (spec §4.4).

use std::collections::VecDeque;

use crate::geometry::Rect;
use crate::spatial::SpatialIndex;

/// The neighbour-inflation distance, either the same on both axes or given
/// per-axis (spec §3, Strategy: "`distance` may be scalar or `{x,y}`").
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClusterDistance {
    Scalar(f64),
    Axis { x: f64, y: f64 },
}

impl ClusterDistance {
    #[must_use]
    pub fn xy(self) -> (f64, f64) {
        match self {
            ClusterDistance::Scalar(d) => (d, d),
            ClusterDistance::Axis { x, y } => (x, y),
        }
    }
}

/// Groups `items` into clusters: connected components under the "bounding
/// boxes, each inflated by `distance`, intersect" neighbour relation.
///
/// `bbox_fn` is an injected capability (spec §9: "keep as an injected
/// capability so the detector can be reused for other entity types") rather
/// than a hardcoded field access, so the same detector works over markers,
/// labels, or degenerate point-as-rectangle inputs alike.
///
/// Result ordering between clusters, and within a cluster, is not
/// contractual (spec §4.4).
pub fn cluster_by_proximity<T>(
    items: &[T],
    bbox_fn: impl Fn(&T) -> Rect,
    distance: ClusterDistance,
) -> Vec<Vec<usize>> {
    if items.is_empty() {
        return Vec::new();
    }

    let (dist_x, dist_y) = distance.xy();
    let bboxes: Vec<Rect> = items.iter().map(&bbox_fn).collect();
    let index = SpatialIndex::build(&bboxes);

    let mut visited = vec![false; items.len()];
    let mut clusters = Vec::new();

    for start in 0..items.len() {
        if visited[start] {
            continue;
        }

        let mut cluster = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            cluster.push(current);
            let inflated = bboxes[current].inflate(dist_x, dist_y);
            let neighbours = index.search(
                inflated.min_x,
                inflated.min_y,
                inflated.max_x,
                inflated.max_y,
            );
            for neighbour in neighbours {
                if !visited[neighbour] {
                    visited[neighbour] = true;
                    queue.push_back(neighbour);
                }
            }
        }

        clusters.push(cluster);
    }

    clusters
}
