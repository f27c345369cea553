//! Vertex types for the scene

use bytemuck::{Pod, Zeroable};

/// Every quad in the scene faces the camera
pub const FACING: [f32; 3] = [0.0, 0.0, 1.0];

/// Scene vertex with position, surface normal and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            normal: FACING,
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BELT: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
    pub const BELT_STRIPE: [f32; 4] = [0.38, 0.38, 0.40, 1.0];
    pub const PLATE: [f32; 4] = [0.92, 0.92, 0.95, 1.0];
    pub const PLATE_RIM: [f32; 4] = [0.55, 0.6, 0.7, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.2, 0.3, 0.3, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let desc = Vertex::desc();
        assert_eq!(desc.array_stride, 40);
        let offsets: Vec<u64> = desc.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
    }
}
