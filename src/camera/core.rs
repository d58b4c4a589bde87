use glam::{EulerRot, Mat4, Quat, Vec3};

/// Render-side perspective camera.
///
/// The update loop writes `position`, the Euler angles, `zoom` and `fovy`
/// once per frame and then calls [`update_projection`](Self::update_projection).
/// Rotation is applied yaw first, then pitch in the yaw-rotated frame, so
/// pitch always tilts relative to the current facing.
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Tilt below the horizon in radians (positive looks down).
    pub pitch: f32,
    /// Heading around the vertical axis in radians.
    pub yaw: f32,
    /// Roll around the view axis in radians.
    pub roll: f32,
    /// Optical zoom factor applied to the field of view.
    pub zoom: f32,
    /// Vertical field of view in degrees, before zoom.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    projection: Mat4,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Effective vertical field of view in degrees (zoom applied).
    pub fovy: f32,
    /// Optical zoom factor.
    pub zoom: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl Camera {
    /// Create a camera at the origin looking along -Z.
    #[must_use]
    pub fn new(aspect: f32, fovy: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            zoom: 1.0,
            fovy,
            aspect,
            znear,
            zfar,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    /// Orientation as a quaternion (yaw, then pitch, then roll).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, self.roll)
    }

    /// Unit view direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Field of view in degrees after applying `zoom`.
    #[must_use]
    pub fn effective_fovy(&self) -> f32 {
        let half = (self.fovy.to_radians() * 0.5).tan() / self.zoom.max(f32::EPSILON);
        (2.0 * half.atan()).to_degrees()
    }

    /// Recompute the projection matrix. Call after any FOV, zoom or aspect
    /// change.
    pub fn update_projection(&mut self) {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        self.projection = Mat4::perspective_rh(
            self.effective_fovy().to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
    }

    /// Projection matrix as of the last [`update_projection`](Self::update_projection).
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position).inverse()
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
            zoom: 1.0,
            _pad: [0.0; 3],
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.forward().to_array();
        self.fovy = camera.effective_fovy();
        self.zoom = camera.zoom;
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn positive_pitch_looks_down() {
        let mut camera = Camera::new(1.0, 60.0, 0.1, 100.0);
        camera.pitch = FRAC_PI_2;
        let f = camera.forward();
        assert!((f - Vec3::NEG_Y).length() < 1e-5, "forward = {f}");
    }

    #[test]
    fn pitch_tilts_relative_to_yaw() {
        let mut camera = Camera::new(1.0, 60.0, 0.1, 100.0);
        camera.yaw = FRAC_PI_2;
        camera.pitch = 0.3;
        let f = camera.forward();
        // Yaw of +90° turns -Z toward -X; pitch then dips that heading.
        assert!(f.x < -0.9);
        assert!(f.y < 0.0);
        assert!(f.z.abs() < 1e-5);
    }

    #[test]
    fn zoom_narrows_field_of_view() {
        let mut camera = Camera::new(1.0, 60.0, 0.1, 100.0);
        assert!((camera.effective_fovy() - 60.0).abs() < 1e-3);
        camera.zoom = 2.0;
        assert!(camera.effective_fovy() < 60.0);
    }

    #[test]
    fn uniform_is_tightly_packed() {
        assert_eq!(size_of::<CameraUniform>(), 112);
        let mut uniform = CameraUniform::new();
        let camera = Camera::new(2.0, 50.0, 0.1, 100.0);
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.aspect, 2.0);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
    }
}
