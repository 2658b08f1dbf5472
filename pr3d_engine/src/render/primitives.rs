/// Hard-coded geometry for the built-in meshes.
///
/// Every primitive is packed as interleaved `f32` attributes matching one of
/// the `VertexLayout` presets. Quads and cubes are unit sized and centered on
/// the origin, with counter-clockwise front faces.

use glam::{Vec3, Vec4};
use crate::graphics_device::VertexLayout;

/// CPU-side vertex and index data ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub layout: VertexLayout,
    pub vertices: Vec<f32>,
    pub indices: Option<Vec<u32>>,
}

impl Geometry {
    /// Number of vertices described by `vertices`
    pub fn vertex_count(&self) -> u32 {
        let floats_per_vertex = self.layout.stride as usize / std::mem::size_of::<f32>();
        if floats_per_vertex == 0 {
            return 0;
        }
        (self.vertices.len() / floats_per_vertex) as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.as_ref().map_or(0, |i| i.len() as u32)
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> Option<&[u8]> {
        self.indices.as_deref().map(|i| bytemuck::cast_slice(i))
    }
}

const QUAD_POSITIONS: [[f32; 3]; 4] = [
    [0.5, 0.5, 0.0],   // top right
    [0.5, -0.5, 0.0],  // bottom right
    [-0.5, -0.5, 0.0], // bottom left
    [-0.5, 0.5, 0.0],  // top left
];

const QUAD_UVS: [[f32; 2]; 4] = [[1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]];

const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

// Six faces, two triangles each: position xyz, uv
#[rustfmt::skip]
const CUBE_VERTICES: [f32; 180] = [
    // back (-Z)
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    // front (+Z)
    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    // left (-X)
    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,
    // right (+X)
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
    // bottom (-Y)
    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    // top (+Y)
    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
];

/// Single triangle, position only
pub fn triangle(vertices: [Vec3; 3]) -> Geometry {
    let data = vertices.iter().flat_map(|v| v.to_array()).collect();
    Geometry { layout: VertexLayout::position(), vertices: data, indices: None }
}

/// Single triangle with a per-vertex RGB color
pub fn triangle_vertex_color(vertices: [Vec3; 3], colors: [Vec3; 3]) -> Geometry {
    let data = vertices
        .iter()
        .zip(colors.iter())
        .flat_map(|(v, c)| v.to_array().into_iter().chain(c.to_array()))
        .collect();
    Geometry { layout: VertexLayout::position_color(), vertices: data, indices: None }
}

/// Unit quad in the XY plane with texture coordinates
pub fn rectangle() -> Geometry {
    let data = QUAD_POSITIONS
        .iter()
        .zip(QUAD_UVS.iter())
        .flat_map(|(p, uv)| p.iter().chain(uv.iter()).copied())
        .collect();
    Geometry {
        layout: VertexLayout::position_uv(),
        vertices: data,
        indices: Some(QUAD_INDICES.to_vec()),
    }
}

/// Unit quad with per-corner RGBA colors and texture coordinates
///
/// Colors are given in corner order: top right, bottom right, bottom left,
/// top left.
pub fn rectangle_vertex_color(colors: [Vec4; 4]) -> Geometry {
    let data = (0..4)
        .flat_map(|i| {
            QUAD_POSITIONS[i]
                .into_iter()
                .chain(colors[i].to_array())
                .chain(QUAD_UVS[i])
        })
        .collect();
    Geometry {
        layout: VertexLayout::position_color_uv(),
        vertices: data,
        indices: Some(QUAD_INDICES.to_vec()),
    }
}

/// Unit cube with texture coordinates, 36 unindexed vertices
pub fn cube() -> Geometry {
    Geometry {
        layout: VertexLayout::position_uv(),
        vertices: CUBE_VERTICES.to_vec(),
        indices: None,
    }
}

#[cfg(test)]
#[path = "primitives_tests.rs"]
mod tests;
