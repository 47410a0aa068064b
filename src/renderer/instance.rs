//! Per-instance sprite data for a GPU renderer

use bytemuck::{Pod, Zeroable};

use super::RenderFrame;
use crate::sim::Role;

/// One sprite quad: center, half extents and a tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub center: [f32; 2],
    pub half_size: [f32; 2],
    pub color: [f32; 4],
}

impl SpriteInstance {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Fallback tints, used when a sprite's texture is not bound
pub mod colors {
    pub const FLOOR: [f32; 4] = [0.35, 0.25, 0.15, 1.0];
    pub const PLATFORM: [f32; 4] = [0.45, 0.35, 0.2, 1.0];
    pub const GOAL: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
    pub const PLAYER: [f32; 4] = [0.2, 0.5, 0.9, 1.0];
    pub const BOX: [f32; 4] = [0.8, 0.6, 0.3, 1.0];
    pub const BANNER: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
}

fn role_color(role: Role) -> [f32; 4] {
    match role {
        Role::Floor => colors::FLOOR,
        Role::Platform => colors::PLATFORM,
        Role::Goal => colors::GOAL,
        Role::Player => colors::PLAYER,
        Role::Box => colors::BOX,
        Role::Banner => colors::BANNER,
    }
}

/// Pack a frame into instance data, preserving draw order
pub fn build_instances(frame: &RenderFrame) -> Vec<SpriteInstance> {
    frame
        .sprites
        .iter()
        .map(|sprite| SpriteInstance {
            center: sprite.center.to_array(),
            half_size: (sprite.size / 2.0).to_array(),
            color: role_color(sprite.role),
        })
        .collect()
}

/// Raw bytes for upload to an instance buffer
pub fn as_bytes(instances: &[SpriteInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
