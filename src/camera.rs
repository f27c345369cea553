//! Perspective camera looking down -Z at the play plane

use glam::{Mat4, Vec3};

/// Field of view limits (degrees)
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            zoom: MAX_ZOOM,
        }
    }

    /// Mouse wheel: positive offsets zoom in
    pub fn scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect.max(0.01), NEAR, FAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_zoom_clamped() {
        let mut cam = Camera::default();
        cam.scroll(-10.0);
        assert_eq!(cam.zoom, MAX_ZOOM);
        cam.scroll(100.0);
        assert_eq!(cam.zoom, MIN_ZOOM);
        cam.scroll(-4.0);
        assert_eq!(cam.zoom, 5.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let cam = Camera::default();
        let clip = cam.view_proj(800.0 / 600.0) * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn test_belt_fits_on_screen() {
        // The top of the belt should be inside the view at default zoom
        let cam = Camera::default();
        let clip = cam.view_proj(800.0 / 600.0) * Vec4::new(0.0, 1.2, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.y > 0.0 && ndc.y < 1.0);
    }
}
