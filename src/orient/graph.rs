//! The Riemannian graph builder (§4.5).

use kiddo::{KdTree, SquaredEuclidean};

use crate::orient::point::PointRecord;

/// An undirected graph on the input's point indices, stored as adjacency
/// lists of `(neighbour, weight)` pairs (§3). Built once per
/// [`crate::orient::orient_normals_via_mst`] call and consumed by the MST
/// builder.
#[derive(Debug, Clone, Default)]
pub struct RiemannianGraph {
    pub adjacency: Vec<Vec<(usize, f32)>>,
}

impl RiemannianGraph {
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }
}

/// Builds the k-NN adjacency of §4.5 over `points`, weighting each edge by
/// the normal-alignment defect `1 - |n_i . n_j|` (§3), clamped to `[0, inf)`
/// to absorb round-off (§7). The k-d tree backing the queries is a local
/// dropped at the end of this call (§5) — it never outlives graph
/// construction.
pub fn build_riemannian_graph(points: &[PointRecord], k: usize) -> RiemannianGraph {
    let n = points.len();
    let mut tree: KdTree<f32, 3> = KdTree::new();
    for (i, p) in points.iter().enumerate() {
        tree.add(&[p.position.x, p.position.y, p.position.z], i as u64);
    }

    let mut adjacency = vec![Vec::new(); n];
    for (i, p) in points.iter().enumerate() {
        let query = [p.position.x, p.position.y, p.position.z];
        // k+1 because the query point itself is always its own nearest
        // neighbour; the dedup rule below drops it along with every
        // lower-index neighbour, giving the symmetric closure described
        // in §4.5 without a second pass.
        let neighbours = tree.nearest_n::<SquaredEuclidean>(&query, k + 1);
        for neighbour in neighbours {
            let j = neighbour.item as usize;
            if j <= i {
                continue;
            }
            let weight = (1.0 - p.normal.dot(points[j].normal).abs()).max(0.0);
            adjacency[i].push((j, weight));
            adjacency[j].push((i, weight));
        }
    }

    RiemannianGraph { adjacency }
}

#[cfg(test)]
mod test {
    use super::*;
    use glam::vec3;

    #[test]
    fn symmetric_closure_is_reflexive() {
        let points = vec![
            PointRecord::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
            PointRecord::new(vec3(0.1, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
            PointRecord::new(vec3(0.2, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
            PointRecord::new(vec3(5.0, 5.0, 5.0), vec3(0.0, 0.0, 1.0)),
        ];
        let graph = build_riemannian_graph(&points, 2);
        for i in 0..points.len() {
            for &(j, w) in &graph.adjacency[i] {
                assert!(graph.adjacency[j].iter().any(|&(k, _)| k == i));
                assert!(w >= 0.0);
            }
        }
    }

    #[test]
    fn aligned_normals_weigh_near_zero() {
        let points = vec![
            PointRecord::new(vec3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
            PointRecord::new(vec3(0.1, 0.0, 0.0), vec3(0.0, 0.0, 1.0)),
        ];
        let graph = build_riemannian_graph(&points, 2);
        let (_, w) = graph.adjacency[0][0];
        assert!(w < 1e-5);
    }
}
