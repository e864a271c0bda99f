// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Kernel-native shape types
//!
//! What leaf converters produce: a complete vertex, wire, or solid. There
//! is no partially-built state; a converter either returns one of these or
//! an error.

use nalgebra::Point3;

/// Triangle mesh solid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f64>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the mesh has no geometry
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Kernel-native shape produced by a leaf converter
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A single point
    Vertex(Point3<f64>),
    /// An open or closed polyline
    Wire(Vec<Point3<f64>>),
    /// A triangulated solid
    Solid(Mesh),
}

impl Shape {
    /// The vertex payload, if this shape is one
    pub fn as_vertex(&self) -> Option<&Point3<f64>> {
        match self {
            Shape::Vertex(p) => Some(p),
            _ => None,
        }
    }

    /// The wire payload, if this shape is one
    pub fn as_wire(&self) -> Option<&[Point3<f64>]> {
        match self {
            Shape::Wire(points) => Some(points),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_counts() {
        let mesh = Mesh {
            positions: vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            indices: vec![0, 1, 2],
        };
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(!mesh.is_empty());
        assert!(Mesh::new().is_empty());
    }

    #[test]
    fn test_shape_accessors() {
        let vertex = Shape::Vertex(Point3::new(1.0, 2.0, 3.0));
        assert!(vertex.as_vertex().is_some());
        assert!(vertex.as_wire().is_none());
    }
}
