//! Scene lighting
//!
//! A single point light in front of the belt, shaded per fragment with
//! ambient, diffuse and specular terms.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::camera::Camera;

/// Point light shading every quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
    /// Light that reaches surfaces facing away
    pub ambient: f32,
    /// Highlight strength
    pub specular: f32,
    pub shininess: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            // Above the plate, between belt and camera
            position: Vec3::new(0.0, 0.8, 1.5),
            color: Vec3::ONE,
            ambient: 0.35,
            specular: 0.3,
            shininess: 32.0,
        }
    }
}

/// Uniform block shared by the vertex and fragment stages.
///
/// The `w` lanes carry the scalar light terms so the block packs into
/// plain vec4s.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Camera position, w = shininess
    pub eye: [f32; 4],
    /// Light position, w = specular strength
    pub light_position: [f32; 4],
    /// Light color, w = ambient strength
    pub light_color: [f32; 4],
}

impl SceneUniform {
    pub fn new(camera: &Camera, light: &Light, aspect: f32) -> Self {
        Self {
            view_proj: camera.view_proj(aspect).to_cols_array_2d(),
            eye: camera.position.extend(light.shininess).to_array(),
            light_position: light.position.extend(light.specular).to_array(),
            light_color: light.color.extend(light.ambient).to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_vec4_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniform>(), 64 + 3 * 16);
    }

    #[test]
    fn test_uniform_packs_light_terms() {
        let camera = Camera::default();
        let light = Light::default();
        let u = SceneUniform::new(&camera, &light, 4.0 / 3.0);

        assert_eq!(u.eye, [0.0, 0.0, 3.0, light.shininess]);
        assert_eq!(u.light_position, [0.0, 0.8, 1.5, light.specular]);
        assert_eq!(u.light_color, [1.0, 1.0, 1.0, light.ambient]);
        assert_eq!(u.view_proj, camera.view_proj(4.0 / 3.0).to_cols_array_2d());
    }

    #[test]
    fn test_light_sits_in_front_of_belt() {
        let light = Light::default();
        assert!(light.position.z > crate::consts::BELT_DEPTH);
        assert!(light.ambient > 0.0 && light.ambient < 1.0);
    }
}
