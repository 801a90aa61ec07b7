//! Instance buffers and pipelines for the two point clouds: the permanent
//! starfield and the on-demand confetti burst.

use landing_core::{
    in_sphere, pick_colors, BURST_COUNT, BURST_PALETTE, BURST_RADIUS, STAR_COUNT, STAR_RADIUS,
};
use rand::prelude::*;
use wgpu::util::DeviceExt;

use super::targets::HDR_FORMAT;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4], // rgb + opacity
    pub misc: [f32; 4],  // x: point half-extent
}

pub struct CloudResources {
    pub stars_pipeline: wgpu::RenderPipeline,
    pub stars_instances: wgpu::Buffer,
    pub stars_uniforms: wgpu::Buffer,
    pub stars_bind_group: wgpu::BindGroup,

    pub burst_pipeline: wgpu::RenderPipeline,
    pub burst_instances: wgpu::Buffer,
    pub burst_uniforms: wgpu::Buffer,
    pub burst_bind_group: wgpu::BindGroup,
}

// interleaved position + color, one entry per burst particle
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct BurstInstance {
    pos: [f32; 3],
    color: [f32; 3],
}

fn scene_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    label: &str,
    vs_entry: &str,
    buffers: &[wgpu::VertexBufferLayout<'_>],
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        // transparent sprites, no depth buffer: painter's order is fine here
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_point"),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub fn create_cloud_resources(device: &wgpu::Device, shader: &wgpu::ShaderModule) -> CloudResources {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    // Starfield: generated once, never regenerated.
    let mut rng = StdRng::from_entropy();
    let stars: Vec<[f32; 3]> = in_sphere(&mut rng, STAR_COUNT, STAR_RADIUS);
    let stars_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_instances"),
        contents: bytemuck::cast_slice(&stars),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let stars_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("star_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let stars_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("star_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: stars_uniforms.as_entire_binding(),
        }],
    });
    let stars_pipeline = scene_pipeline(
        device,
        shader,
        &layout,
        "stars_pipeline",
        "vs_stars",
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3],
        }],
    );

    // Burst: fixed-capacity buffer, refilled each time the burst mounts.
    let burst_instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("burst_instances"),
        size: (BURST_COUNT * std::mem::size_of::<BurstInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let burst_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("burst_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let burst_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("burst_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: burst_uniforms.as_entire_binding(),
        }],
    });
    let burst_pipeline = scene_pipeline(
        device,
        shader,
        &layout,
        "burst_pipeline",
        "vs_burst",
        &[wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BurstInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
        }],
    );

    CloudResources {
        stars_pipeline,
        stars_instances,
        stars_uniforms,
        stars_bind_group,
        burst_pipeline,
        burst_instances,
        burst_uniforms,
        burst_bind_group,
    }
}

/// Fill the burst buffer with a fresh cloud: positions in a unit sphere and a
/// random pick from the three-color palette per particle.
pub fn fill_burst(queue: &wgpu::Queue, resources: &CloudResources) {
    let mut rng = StdRng::from_entropy();
    let positions = in_sphere(&mut rng, BURST_COUNT, BURST_RADIUS);
    let colors = pick_colors(&mut rng, BURST_COUNT, &BURST_PALETTE);
    let instances: Vec<BurstInstance> = positions
        .into_iter()
        .zip(colors)
        .map(|(pos, color)| BurstInstance { pos, color })
        .collect();
    queue.write_buffer(
        &resources.burst_instances,
        0,
        bytemuck::cast_slice(&instances),
    );
}
