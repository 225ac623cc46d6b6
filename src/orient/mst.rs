//! The minimum spanning tree builder (§4.6), via Prim's algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::orient::graph::RiemannianGraph;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapEntry {
    weight: f32,
    to: usize,
    from: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse the comparison so the
        // lowest-weight candidate edge pops first.
        other
            .weight
            .partial_cmp(&self.weight)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes a minimum spanning tree of `graph` rooted at `seed` (§4.6).
/// Returns the predecessor array with `predecessor[seed] == seed`; a
/// vertex unreachable from `seed` (a disconnected graph) is left pointing
/// at itself too, which the propagator below simply never visits.
pub fn minimum_spanning_tree(graph: &RiemannianGraph, seed: usize) -> Vec<usize> {
    let n = graph.adjacency.len();
    let mut predecessor: Vec<usize> = (0..n).collect();
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry {
        weight: 0.0,
        to: seed,
        from: seed,
    });

    while let Some(HeapEntry { to, from, .. }) = heap.pop() {
        if visited[to] {
            continue;
        }
        visited[to] = true;
        predecessor[to] = from;
        for &(neighbour, weight) in &graph.adjacency[to] {
            if !visited[neighbour] {
                heap.push(HeapEntry {
                    weight,
                    to: neighbour,
                    from: to,
                });
            }
        }
    }

    predecessor
}

#[cfg(test)]
mod test {
    use super::*;

    fn graph(edges: &[(usize, usize, f32)], n: usize) -> RiemannianGraph {
        let mut adjacency = vec![Vec::new(); n];
        for &(a, b, w) in edges {
            adjacency[a].push((b, w));
            adjacency[b].push((a, w));
        }
        RiemannianGraph { adjacency }
    }

    #[test]
    fn picks_cheapest_edges_over_a_triangle() {
        // 0 -1.0- 1, 0 -5.0- 2, 1 -1.0- 2: MST should skip the 5.0 edge.
        let g = graph(&[(0, 1, 1.0), (0, 2, 5.0), (1, 2, 1.0)], 3);
        let p = minimum_spanning_tree(&g, 0);
        assert_eq!(p[0], 0);
        assert_eq!(p[1], 0);
        assert_eq!(p[2], 1);
    }

    #[test]
    fn disconnected_vertex_stays_self_rooted() {
        let g = graph(&[(0, 1, 1.0)], 3);
        let p = minimum_spanning_tree(&g, 0);
        assert_eq!(p[2], 2);
    }
}
