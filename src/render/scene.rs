use wgpu;
use wgpu::util::DeviceExt;

use super::helpers;
use crate::constants::{MARKER_RADIUS, STAR_COUNT, STAR_DEPTH, STAR_INNER_RADIUS, STAR_SEED};
use crate::core::{self, Camera, SCENE_ANCHORS};
use glam::Mat4;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    /// xyz camera eye, w accumulated time.
    pub(crate) camera_pos: [f32; 4],
    pub(crate) camera_right: [f32; 4],
    pub(crate) camera_up: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MarkerInstance {
    /// xyz anchor in model space, w sphere radius.
    pub(crate) center_radius: [f32; 4],
    /// rgb subsystem color, w emphasis level (1 = idle).
    pub(crate) color_level: [f32; 4],
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];
const MARKER_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![3 => Float32x4, 4 => Float32x4];
const STAR_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32];

pub(crate) struct SceneResources {
    pub(crate) mesh_pipeline: wgpu::RenderPipeline,
    pub(crate) marker_pipeline: wgpu::RenderPipeline,
    pub(crate) star_pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) satellite_vertices: wgpu::Buffer,
    pub(crate) satellite_indices: wgpu::Buffer,
    pub(crate) satellite_index_count: u32,
    pub(crate) marker_vertices: wgpu::Buffer,
    pub(crate) marker_indices: wgpu::Buffer,
    pub(crate) marker_index_count: u32,
    pub(crate) marker_instances: wgpu::Buffer,
    pub(crate) star_instances: wgpu::Buffer,
    pub(crate) star_count: u32,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    hdr_format: wgpu::TextureFormat,
) -> SceneResources {
    let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let stars_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("stars_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::STARS_WGSL.into()),
    });

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
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<core::Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    };
    let marker_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MarkerInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &MARKER_ATTRS,
    };
    let star_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<core::StarInstance>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &STAR_ATTRS,
    };

    let cull_back = wgpu::PrimitiveState {
        cull_mode: Some(wgpu::Face::Back),
        ..Default::default()
    };
    let additive = wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    };

    let mesh_pipeline = make_scene_pipeline(
        device,
        &pl,
        "mesh_pipeline",
        &scene_shader,
        ("vs_mesh", "fs_lit"),
        &[vertex_layout.clone()],
        cull_back,
        true,
        None,
        hdr_format,
    );
    let marker_pipeline = make_scene_pipeline(
        device,
        &pl,
        "marker_pipeline",
        &scene_shader,
        ("vs_marker", "fs_marker"),
        &[vertex_layout, marker_layout],
        cull_back,
        true,
        None,
        hdr_format,
    );
    // Stars test depth against the satellite but never write it.
    let star_pipeline = make_scene_pipeline(
        device,
        &pl,
        "star_pipeline",
        &stars_shader,
        ("vs_star", "fs_star"),
        &[star_layout],
        wgpu::PrimitiveState::default(),
        false,
        Some(additive),
        hdr_format,
    );

    let satellite = core::build_satellite();
    let satellite_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("satellite_vb"),
        contents: bytemuck::cast_slice(&satellite.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let satellite_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("satellite_ib"),
        contents: bytemuck::cast_slice(&satellite.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    let marker = core::build_marker_sphere(12, 18);
    let marker_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("marker_vb"),
        contents: bytemuck::cast_slice(&marker.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let marker_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("marker_ib"),
        contents: bytemuck::cast_slice(&marker.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    let marker_instances = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (SCENE_ANCHORS.len() * std::mem::size_of::<MarkerInstance>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let stars = core::build_starfield(STAR_COUNT, STAR_INNER_RADIUS, STAR_DEPTH, STAR_SEED);
    let star_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("star_instances"),
        contents: bytemuck::cast_slice(&stars),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    SceneResources {
        mesh_pipeline,
        marker_pipeline,
        star_pipeline,
        uniform_buffer,
        bind_group,
        satellite_vertices,
        satellite_indices,
        satellite_index_count: satellite.indices.len() as u32,
        marker_vertices,
        marker_indices,
        marker_index_count: marker.indices.len() as u32,
        marker_instances,
        star_instances,
        star_count: stars.len() as u32,
    }
}

#[allow(clippy::too_many_arguments)]
fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    label: &str,
    shader: &wgpu::ShaderModule,
    entries: (&str, &str),
    buffers: &[wgpu::VertexBufferLayout],
    primitive: wgpu::PrimitiveState,
    depth_write: bool,
    blend: Option<wgpu::BlendState>,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(entries.0),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive,
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(entries.1),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub(crate) fn write_scene_uniforms(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    camera: &Camera,
    model: Mat4,
    time: f32,
) {
    let forward = (camera.target - camera.eye).normalize_or_zero();
    let right = forward.cross(camera.up).normalize_or_zero();
    let up = right.cross(forward);
    let u = SceneUniforms {
        view_proj: camera.view_proj().to_cols_array_2d(),
        model: model.to_cols_array_2d(),
        camera_pos: [camera.eye.x, camera.eye.y, camera.eye.z, time],
        camera_right: [right.x, right.y, right.z, 0.0],
        camera_up: [up.x, up.y, up.z, 0.0],
    };
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(&u));
}

/// Re-upload the six marker instances with the frame's emphasis levels.
pub(crate) fn write_marker_instances(queue: &wgpu::Queue, buffer: &wgpu::Buffer, levels: &[f32; 6]) {
    let mut data = [MarkerInstance {
        center_radius: [0.0; 4],
        color_level: [0.0; 4],
    }; 6];
    for (slot, anchor) in data.iter_mut().zip(SCENE_ANCHORS.iter()) {
        let c = anchor.subsystem.color_rgb();
        *slot = MarkerInstance {
            center_radius: [anchor.world.x, anchor.world.y, anchor.world.z, MARKER_RADIUS],
            color_level: [c[0], c[1], c[2], levels[anchor.subsystem.index()]],
        };
    }
    queue.write_buffer(buffer, 0, bytemuck::cast_slice(&data));
}
