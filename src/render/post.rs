use super::helpers::make_post_pipeline;
use crate::constants::{BLOOM_STRENGTH, BLOOM_THRESHOLD};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) bloom_strength: f32,
    pub(crate) blur_dir: [f32; 2],
    pub(crate) threshold: f32,
    pub(crate) _pad: f32,
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout,
    pub(crate) bgl1: wgpu::BindGroupLayout,
    // One uniform buffer per pass flavour. All passes are encoded into a
    // single command buffer, and queued buffer writes land before any of
    // them execute, so per-pass values must live in separate buffers.
    pub(crate) uniform_base: wgpu::Buffer,
    pub(crate) uniform_blur_h: wgpu::Buffer,
    pub(crate) uniform_blur_v: wgpu::Buffer,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    bloom_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    let make_uniform_buffer = |label: &str| {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(&PostUniforms {
                resolution: [1.0, 1.0],
                time: 0.0,
                bloom_strength: BLOOM_STRENGTH,
                blur_dir: [0.0, 0.0],
                threshold: BLOOM_THRESHOLD,
                _pad: 0.0,
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        })
    };
    let uniform_base = make_uniform_buffer("post_uniforms_base");
    let uniform_blur_h = make_uniform_buffer("post_uniforms_blur_h");
    let uniform_blur_v = make_uniform_buffer("post_uniforms_blur_v");

    let pl_post_0 = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_post_comp = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });

    let bright_pipeline =
        make_post_pipeline(device, &pl_post_0, shader, "fs_bright", bloom_format, None);
    let blur_pipeline =
        make_post_pipeline(device, &pl_post_0, shader, "fs_blur", bloom_format, None);
    let composite_pipeline = make_post_pipeline(
        device,
        &pl_post_comp,
        shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniform_base,
        uniform_blur_h,
        uniform_blur_v,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

/// Refresh all three per-pass uniform buffers for this frame.
pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    post: &PostResources,
    resolution: [f32; 2],
    time: f32,
) {
    let write = |buffer: &wgpu::Buffer, blur_dir: [f32; 2]| {
        let u = PostUniforms {
            resolution,
            time,
            bloom_strength: BLOOM_STRENGTH,
            blur_dir,
            threshold: BLOOM_THRESHOLD,
            _pad: 0.0,
        };
        queue.write_buffer(buffer, 0, bytemuck::bytes_of(&u));
    };
    write(&post.uniform_base, [0.0, 0.0]);
    write(&post.uniform_blur_h, [1.0, 0.0]);
    write(&post.uniform_blur_v, [0.0, 1.0]);
}

fn bind_source(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: Option<&wgpu::Buffer>,
) -> wgpu::BindGroup {
    let mut entries = vec![
        wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::TextureView(view),
        },
        wgpu::BindGroupEntry {
            binding: 1,
            resource: wgpu::BindingResource::Sampler(sampler),
        },
    ];
    if let Some(buffer) = uniforms {
        entries.push(wgpu::BindGroupEntry {
            binding: 2,
            resource: buffer.as_entire_binding(),
        });
    }
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &entries,
    })
}

type PostBindGroups = (
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
    wgpu::BindGroup,
);

/// Build the bind groups that reference the offscreen target views. Used at
/// startup and again whenever the targets are recreated on resize.
pub(crate) fn rebuild_bind_groups(
    device: &wgpu::Device,
    post: &PostResources,
    sampler: &wgpu::Sampler,
    hdr_view: &wgpu::TextureView,
    bloom_a_view: &wgpu::TextureView,
    bloom_b_view: &wgpu::TextureView,
) -> PostBindGroups {
    let bg_hdr = bind_source(
        device,
        "bg_hdr",
        &post.bgl0,
        hdr_view,
        sampler,
        Some(&post.uniform_base),
    );
    let bg_from_bloom_a = bind_source(
        device,
        "bg_from_bloom_a",
        &post.bgl0,
        bloom_a_view,
        sampler,
        Some(&post.uniform_blur_h),
    );
    let bg_from_bloom_b = bind_source(
        device,
        "bg_from_bloom_b",
        &post.bgl0,
        bloom_b_view,
        sampler,
        Some(&post.uniform_blur_v),
    );
    let bg_bloom_a_only = bind_source(
        device,
        "bg_bloom_a_only",
        &post.bgl1,
        bloom_a_view,
        sampler,
        None,
    );
    (bg_hdr, bg_from_bloom_a, bg_from_bloom_b, bg_bloom_a_only)
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    rpass.set_pipeline(pipeline);
    rpass.set_bind_group(0, bg0, &[]);
    if let Some(bg1) = bg1 {
        rpass.set_bind_group(1, bg1, &[]);
    }
    rpass.draw(0..3, 0..1);
}
