/// Mesh records and placed instances.
///
/// A `Mesh` owns the GPU objects for one piece of geometry and lives in the
/// `RenderContext` arena. Callers only ever hold a `MeshKey`, which goes
/// stale (and is rejected) once the mesh is deleted.

use std::sync::Arc;
use glam::{Mat4, Quat, Vec3};
use slotmap::new_key_type;
use crate::error::Pr3dResult;
use crate::engine_bail;
use crate::graphics_device::{Buffer, Texture, VertexArray};

const SOURCE: &str = "pr3d::Render";

new_key_type! {
    /// Generational handle to a mesh owned by a `RenderContext`.
    ///
    /// Deleting the mesh invalidates this key; a later mesh reusing the same
    /// slot gets a different key.
    pub struct MeshKey;
}

// ===== MESH =====

/// GPU geometry for one drawable object
pub struct Mesh {
    pub(crate) vertex_count: u32,
    pub(crate) index_count: u32,
    pub(crate) vertex_buffer: Arc<dyn Buffer>,
    pub(crate) vertex_array: Arc<dyn VertexArray>,
    pub(crate) index_buffer: Option<Arc<dyn Buffer>>,
    pub(crate) texture: Option<Arc<dyn Texture>>,
}

impl Mesh {
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Number of indices, 0 when the mesh is not indexed
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }

    pub fn vertex_buffer(&self) -> &Arc<dyn Buffer> {
        &self.vertex_buffer
    }

    pub fn vertex_array(&self) -> &Arc<dyn VertexArray> {
        &self.vertex_array
    }

    pub fn index_buffer(&self) -> Option<&Arc<dyn Buffer>> {
        self.index_buffer.as_ref()
    }

    pub fn texture(&self) -> Option<&Arc<dyn Texture>> {
        self.texture.as_ref()
    }
}

// ===== TRANSFORM =====

/// Model matrix `translate(position) * rotate(axis, degrees) * scale(scale)`
///
/// The axis does not need to be normalized. A zero angle ignores the axis;
/// any other angle about a zero-length axis is rejected.
pub fn model_matrix(position: Vec3, rotation_axis: Vec3, degrees: f32, scale: Vec3) -> Pr3dResult<Mat4> {
    if !degrees.is_finite() {
        engine_bail!(SOURCE, InvalidParameter; "rotation angle must be finite, got {}", degrees);
    }
    let rotation = if degrees == 0.0 {
        Quat::IDENTITY
    } else {
        match rotation_axis.try_normalize() {
            Some(axis) => Quat::from_axis_angle(axis, degrees.to_radians()),
            None => engine_bail!(SOURCE, InvalidParameter;
                "rotation axis {:?} cannot be normalized", rotation_axis),
        }
    };
    Ok(Mat4::from_scale_rotation_translation(scale, rotation, position))
}

// ===== INSTANCE =====

/// A mesh placed in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshInstance {
    pub mesh: MeshKey,
    pub transform: Mat4,
}

impl MeshInstance {
    /// Instance at the origin with no rotation or scale
    pub fn new(mesh: MeshKey) -> Self {
        Self { mesh, transform: Mat4::IDENTITY }
    }

    pub fn with_transform(mesh: MeshKey, transform: Mat4) -> Self {
        Self { mesh, transform }
    }

    /// Instance built from position, axis-angle rotation and scale
    pub fn from_trs(
        mesh: MeshKey,
        position: Vec3,
        rotation_axis: Vec3,
        degrees: f32,
        scale: Vec3,
    ) -> Pr3dResult<Self> {
        Ok(Self { mesh, transform: model_matrix(position, rotation_axis, degrees, scale)? })
    }

    /// World-space position carried by the transform
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
