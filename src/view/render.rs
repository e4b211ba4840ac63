use std::path::Path;

use wgpu::util::DeviceExt;
use wgpu::*;

use crate::model::scene::{GLOBE_RADIUS, SPHERE_RINGS, SPHERE_SEGMENTS};
use crate::model::{starfield, OrbitCamera, SceneState};
use crate::utils::{create_uv_sphere, upload_points, MeshBuffer, PointBuffer, Vertex};
use crate::view::texture::{self, GlobeTexture};

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

/// Additive blending for the glow pass
const ADDITIVE_BLEND: BlendState = BlendState {
    color: BlendComponent {
        src_factor: BlendFactor::One,
        dst_factor: BlendFactor::One,
        operation: BlendOperation::Add,
    },
    alpha: BlendComponent {
        src_factor: BlendFactor::One,
        dst_factor: BlendFactor::One,
        operation: BlendOperation::Add,
    },
};

const SPHERE_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
    step_mode: VertexStepMode::Vertex,
    attributes: &[
        VertexAttribute { offset: 0, shader_location: 0, format: VertexFormat::Float32x3 },
        VertexAttribute { offset: 12, shader_location: 1, format: VertexFormat::Float32x3 },
        VertexAttribute { offset: 24, shader_location: 2, format: VertexFormat::Float32x2 },
    ],
};

const STAR_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: (std::mem::size_of::<f32>() * 3) as BufferAddress,
    step_mode: VertexStepMode::Vertex,
    attributes: &[VertexAttribute { offset: 0, shader_location: 0, format: VertexFormat::Float32x3 }],
};

pub struct CameraResources {
    pub camera_buffer: wgpu::Buffer,
    pub bind_group_layout: wgpu::BindGroupLayout,
    pub camera_bind_group: wgpu::BindGroup,
}

pub fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let depth_texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_texture"),
        size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let depth_view = depth_texture.create_view(&wgpu::TextureViewDescriptor::default());
    (depth_texture, depth_view)
}

pub fn create_camera_resources(device: &wgpu::Device) -> CameraResources {
    let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("camera_buffer"),
        size: std::mem::size_of::<CameraUniform>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("camera_bind_group_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("camera_bind_group"),
        layout: &bind_group_layout,
        entries: &[wgpu::BindGroupEntry { binding: 0, resource: camera_buffer.as_entire_binding() }],
    });

    CameraResources { camera_buffer, bind_group_layout, camera_bind_group }
}

/// Globe mesh: textured sphere with its own model transform.
pub struct GlobeResources {
    pub pipeline: wgpu::RenderPipeline,
    pub model_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub texture: GlobeTexture,
}

/// Atmosphere shell: same sphere geometry, glow pipeline.
pub struct AtmosphereResources {
    pub pipeline: wgpu::RenderPipeline,
    pub model_buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

/// Star backdrop: an immutable point cloud.
pub struct StarResources {
    pub pipeline: wgpu::RenderPipeline,
    pub points: PointBuffer,
}

fn create_globe_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    camera_bgl: &wgpu::BindGroupLayout,
    depth_format: wgpu::TextureFormat,
    texture: &GlobeTexture,
) -> (wgpu::RenderPipeline, wgpu::Buffer, wgpu::BindGroup) {
    let shader_src = include_str!("shaders/globe.wgsl");
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("globe_shader"),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("globe_model"),
        contents: bytemuck::cast_slice(&glam::Mat4::IDENTITY.to_cols_array_2d()),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });

    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("globe_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("globe_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry { binding: 0, resource: model_buffer.as_entire_binding() },
            wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&texture.view) },
            wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(&texture.sampler) },
        ],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("globe_pipeline_layout"),
        bind_group_layouts: &[camera_bgl, &bgl],
        push_constant_ranges: &[],
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("globe_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[SPHERE_VERTEX_LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState { count: 1, mask: !0, alpha_to_coverage_enabled: false },
        multiview: None,
        cache: None,
    });

    (pipeline, model_buffer, bind_group)
}

fn create_atmosphere_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    camera_bgl: &wgpu::BindGroupLayout,
    depth_format: wgpu::TextureFormat,
) -> (wgpu::RenderPipeline, wgpu::Buffer, wgpu::BindGroup) {
    let shader_src = include_str!("shaders/atmosphere.wgsl");
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("atmosphere_shader"),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let model_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("atmosphere_model"),
        contents: bytemuck::cast_slice(&glam::Mat4::IDENTITY.to_cols_array_2d()),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    });

    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("atmosphere_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("atmosphere_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry { binding: 0, resource: model_buffer.as_entire_binding() }],
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("atmosphere_pipeline_layout"),
        bind_group_layouts: &[camera_bgl, &bgl],
        push_constant_ranges: &[],
    });

    // Back faces only, additive, no depth writes: the glow layers over the
    // globe without occluding it.
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("atmosphere_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[SPHERE_VERTEX_LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(ADDITIVE_BLEND),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Front),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState { count: 1, mask: !0, alpha_to_coverage_enabled: false },
        multiview: None,
        cache: None,
    });

    (pipeline, model_buffer, bind_group)
}

fn create_star_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    camera_bgl: &wgpu::BindGroupLayout,
    depth_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader_src = include_str!("shaders/stars.wgsl");
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("stars_shader"),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("stars_pipeline_layout"),
        bind_group_layouts: &[camera_bgl],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("stars_pipeline"),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[STAR_VERTEX_LAYOUT],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::PointList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState { count: 1, mask: !0, alpha_to_coverage_enabled: false },
        multiview: None,
        cache: None,
    })
}

/// The assembled scene: camera resources, the shared sphere geometry, and the
/// three pipelines that draw stars, globe, and atmosphere.
pub struct SceneRenderer {
    pub camera: CameraResources,
    pub sphere: MeshBuffer,
    pub globe: GlobeResources,
    pub atmosphere: AtmosphereResources,
    pub stars: StarResources,
}

impl SceneRenderer {
    /// Compose the scene. A bad texture path degrades to a placeholder
    /// surface; it never fails construction.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        depth_format: wgpu::TextureFormat,
        texture_path: &Path,
    ) -> Self {
        let camera = create_camera_resources(device);

        let sphere = create_uv_sphere(GLOBE_RADIUS, SPHERE_SEGMENTS, SPHERE_RINGS).upload(device);

        let image = texture::load_image(texture_path);
        let globe_texture = texture::upload(device, queue, &image);
        let (globe_pipeline, globe_model_buffer, globe_bind_group) =
            create_globe_pipeline(device, format, &camera.bind_group_layout, depth_format, &globe_texture);

        let (atmo_pipeline, atmo_model_buffer, atmo_bind_group) =
            create_atmosphere_pipeline(device, format, &camera.bind_group_layout, depth_format);

        let star_positions = starfield::generate(starfield::STAR_COUNT, &mut rand::rng());
        let points = upload_points(device, &star_positions);
        let star_pipeline = create_star_pipeline(device, format, &camera.bind_group_layout, depth_format);

        let renderer = Self {
            camera,
            sphere,
            globe: GlobeResources {
                pipeline: globe_pipeline,
                model_buffer: globe_model_buffer,
                bind_group: globe_bind_group,
                texture: globe_texture,
            },
            atmosphere: AtmosphereResources {
                pipeline: atmo_pipeline,
                model_buffer: atmo_model_buffer,
                bind_group: atmo_bind_group,
            },
            stars: StarResources { pipeline: star_pipeline, points },
        };

        // The shell never moves after creation; write its transform once
        let scene = SceneState::new();
        let atmo_uniform = ModelUniform { model: scene.atmosphere_model().to_cols_array_2d() };
        queue.write_buffer(&renderer.atmosphere.model_buffer, 0, bytemuck::bytes_of(&atmo_uniform));

        renderer
    }

    /// Upload the per-frame uniforms: camera view-projection and the globe's
    /// combined tilt + spin transform.
    pub fn update_uniforms(&self, queue: &wgpu::Queue, camera: &OrbitCamera, scene: &SceneState) {
        let cam_uniform = CameraUniform { view_proj: camera.view_proj().to_cols_array_2d() };
        queue.write_buffer(&self.camera.camera_buffer, 0, bytemuck::bytes_of(&cam_uniform));

        let globe_uniform = ModelUniform { model: scene.globe_model().to_cols_array_2d() };
        queue.write_buffer(&self.globe.model_buffer, 0, bytemuck::bytes_of(&globe_uniform));
    }

    /// Record the scene into an open render pass: stars first, then the
    /// globe, then the additive glow on top.
    pub fn draw(&self, rp: &mut wgpu::RenderPass<'_>) {
        rp.set_bind_group(0, &self.camera.camera_bind_group, &[]);

        rp.set_pipeline(&self.stars.pipeline);
        rp.set_vertex_buffer(0, self.stars.points.vertex_buffer.slice(..));
        rp.draw(0..self.stars.points.count, 0..1);

        rp.set_pipeline(&self.globe.pipeline);
        rp.set_bind_group(1, &self.globe.bind_group, &[]);
        rp.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
        rp.set_index_buffer(self.sphere.index_buffer.slice(..), IndexFormat::Uint32);
        rp.draw_indexed(0..self.sphere.index_count, 0, 0..1);

        rp.set_pipeline(&self.atmosphere.pipeline);
        rp.set_bind_group(1, &self.atmosphere.bind_group, &[]);
        rp.set_vertex_buffer(0, self.sphere.vertex_buffer.slice(..));
        rp.set_index_buffer(self.sphere.index_buffer.slice(..), IndexFormat::Uint32);
        rp.draw_indexed(0..self.sphere.index_count, 0, 0..1);
    }
}
