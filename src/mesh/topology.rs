//! Edge and vertex adjacency of indexed triangle meshes.

use super::TriMesh2;

#[cfg(feature = "hashmap")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashmap"))]
use std::collections::HashMap;

/// Number of distinct triangles incident to each vertex.
///
/// A face repeating an index counts once for that vertex.
pub fn connectivity_counts(faces: &[[usize; 3]], vertex_count: usize) -> Vec<usize> {
    let mut counts = vec![0usize; vertex_count];
    for &[a, b, c] in faces {
        counts[a] += 1;
        if b != a {
            counts[b] += 1;
        }
        if c != a && c != b {
            counts[c] += 1;
        }
    }
    counts
}

/// Sorted, de-duplicated edge neighbours of each vertex.
pub fn vertex_neighbors(faces: &[[usize; 3]], vertex_count: usize) -> Vec<Vec<usize>> {
    let mut neighbors = vec![Vec::new(); vertex_count];
    for face in faces {
        for k in 0..3 {
            let (a, b) = (face[k], face[(k + 1) % 3]);
            if a != b {
                neighbors[a].push(b);
                neighbors[b].push(a);
            }
        }
    }
    for list in &mut neighbors {
        list.sort_unstable();
        list.dedup();
    }
    neighbors
}

/// Undirected edge keyed with the smaller index first.
#[inline]
const fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// How many faces use each undirected edge.
pub fn edge_face_counts(faces: &[[usize; 3]]) -> HashMap<(usize, usize), usize> {
    let mut counts: HashMap<(usize, usize), usize> = HashMap::with_capacity(faces.len() * 2);
    for face in faces {
        for k in 0..3 {
            *counts.entry(edge_key(face[k], face[(k + 1) % 3])).or_default() += 1;
        }
    }
    counts
}

/// **Topology summary of a planar triangle mesh**
///
/// For a triangulated region with `h` holes the Euler characteristic
/// `χ = V − E + F` equals `1 − h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyAnalysis {
    /// Edges used by exactly one face.
    pub boundary_edges: usize,
    /// Edges used by more than two faces.
    pub non_manifold_edges: usize,
    pub isolated_vertices: usize,
    pub euler_characteristic: i64,
}

impl TriMesh2 {
    /// Free edges (used by a single face), sorted, smaller index first.
    pub fn boundary_edges(&self) -> Vec<[usize; 2]> {
        let mut edges: Vec<[usize; 2]> = edge_face_counts(&self.faces)
            .into_iter()
            .filter(|&(_, count)| count == 1)
            .map(|((a, b), _)| [a, b])
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Per-vertex flag: does the vertex lie on a free edge.
    pub fn boundary_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.vertices.len()];
        for [a, b] in self.boundary_edges() {
            mask[a] = true;
            mask[b] = true;
        }
        mask
    }

    /// Sorted indices of the vertices on free edges.
    pub fn boundary_vertices(&self) -> Vec<usize> {
        self.boundary_mask()
            .iter()
            .enumerate()
            .filter_map(|(i, &on_boundary)| on_boundary.then_some(i))
            .collect()
    }

    pub fn connectivity_counts(&self) -> Vec<usize> {
        connectivity_counts(&self.faces, self.vertices.len())
    }

    pub fn vertex_neighbors(&self) -> Vec<Vec<usize>> {
        vertex_neighbors(&self.faces, self.vertices.len())
    }

    pub fn analyze_topology(&self) -> TopologyAnalysis {
        let edges = edge_face_counts(&self.faces);
        let boundary_edges = edges.values().filter(|&&c| c == 1).count();
        let non_manifold_edges = edges.values().filter(|&&c| c > 2).count();
        let isolated_vertices = self.connectivity_counts().iter().filter(|&&c| c == 0).count();
        let euler_characteristic =
            self.vertices.len() as i64 - edges.len() as i64 + self.faces.len() as i64;

        TopologyAnalysis {
            boundary_edges,
            non_manifold_edges,
            isolated_vertices,
            euler_characteristic,
        }
    }
}
