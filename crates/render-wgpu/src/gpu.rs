use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use glade_render::{FirstPersonCamera, Geometry, Mesh, Scene};
use wgpu::util::DeviceExt;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    ambient: [f32; 4],
    sun_direction: [f32; 4],
    sun_color: [f32; 4],
}

impl Uniforms {
    fn new(scene: &Scene, camera: &FirstPersonCamera) -> Self {
        let (sun_direction, sun_color) = scene
            .sun()
            .and_then(|sun| Some((sun.direction_to_light()?, sun.radiance())))
            .unwrap_or((Vec3::Y, Vec3::ZERO));
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            ambient: scene.ambient().extend(1.0).to_array(),
            sun_direction: sun_direction.extend(0.0).to_array(),
            sun_color: sun_color.extend(1.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
    normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

impl InstanceData {
    /// The shared unit cube scaled to the mesh's size and moved into place.
    fn from_mesh(mesh: &Mesh) -> Self {
        let model = Mat4::from_translation(mesh.position) * Mat4::from_scale(mesh.geometry.size());
        let cols = model.to_cols_array_2d();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color: mesh.material.color.to_linear().extend(1.0).to_array(),
        }
    }
}

/// Unit cube vertices and indices from the procedural geometry.
fn cube_mesh() -> (Vec<Vertex>, Vec<u16>) {
    let triangles = Geometry::cube().triangles();
    let vertices = triangles
        .vertices
        .iter()
        .map(|v| Vertex {
            position: v.position,
            normal: v.normal,
        })
        .collect();
    (vertices, triangles.indices)
}

/// Clear color for the scene background, in linear space.
fn clear_color(scene: &Scene) -> wgpu::Color {
    let c = scene.background.to_linear();
    wgpu::Color {
        r: c.x as f64,
        g: c.y as f64,
        b: c.z as f64,
        a: 1.0,
    }
}

/// Maximum meshes drawn per frame. Extra meshes are skipped.
const MAX_INSTANCES: usize = 256;

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

impl InstanceData {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4, 6 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// GPU copy of the shared unit cube.
struct CubeBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl CubeBuffers {
    fn upload(device: &wgpu::Device) -> Self {
        let (vertices, indices) = cube_mesh();
        Self {
            vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cube_vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cube_indices"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: indices.len() as u32,
        }
    }
}

fn frame_uniforms(device: &wgpu::Device) -> (wgpu::Buffer, wgpu::BindGroupLayout, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("frame_uniforms"),
        size: std::mem::size_of::<Uniforms>() as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("frame_uniforms_layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(std::mem::size_of::<Uniforms>() as u64),
            },
            count: None,
        }],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("frame_uniforms_group"),
        layout: &layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    (buffer, layout, bind_group)
}

fn multisample_state(sample_count: u32) -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: sample_count.max(1),
        ..Default::default()
    }
}

fn lit_mesh_pipeline(
    device: &wgpu::Device,
    uniforms: &wgpu::BindGroupLayout,
    surface_format: wgpu::TextureFormat,
    sample_count: u32,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lit_mesh"),
        source: wgpu::ShaderSource::Wgsl(shaders::MESH_SHADER.into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("lit_mesh_layout"),
        bind_group_layouts: &[uniforms],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("lit_mesh_pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout(), InstanceData::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(surface_format.into())],
        }),
        primitive: wgpu::PrimitiveState {
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: multisample_state(sample_count),
        multiview: None,
        cache: None,
    })
}

fn attachment_size(width: u32, height: u32) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: width.max(1),
        height: height.max(1),
        depth_or_array_layers: 1,
    }
}

fn depth_descriptor(
    width: u32,
    height: u32,
    sample_count: u32,
) -> wgpu::TextureDescriptor<'static> {
    wgpu::TextureDescriptor {
        label: Some("depth"),
        size: attachment_size(width, height),
        mip_level_count: 1,
        sample_count: sample_count.max(1),
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    }
}

/// Multisampled color target, or `None` when drawing straight into the
/// surface.
fn msaa_color_descriptor(
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
    sample_count: u32,
) -> Option<wgpu::TextureDescriptor<'static>> {
    (sample_count > 1).then(|| wgpu::TextureDescriptor {
        label: Some("msaa_color"),
        size: attachment_size(width, height),
        mip_level_count: 1,
        sample_count,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    })
}

/// Size-dependent attachments, rebuilt on resize.
struct FrameTargets {
    depth: wgpu::TextureView,
    msaa: Option<wgpu::TextureView>,
}

impl FrameTargets {
    fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> Self {
        let view = |desc: &wgpu::TextureDescriptor| {
            device
                .create_texture(desc)
                .create_view(&wgpu::TextureViewDescriptor::default())
        };
        Self {
            depth: view(&depth_descriptor(width, height, sample_count)),
            msaa: msaa_color_descriptor(format, width, height, sample_count)
                .as_ref()
                .map(view),
        }
    }
}

/// Draws a [`Scene`] through a [`FirstPersonCamera`]: sky clear, then one
/// lit cube instance per mesh.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_group: wgpu::BindGroup,
    cube: CubeBuffers,
    instance_buffer: wgpu::Buffer,
    targets: FrameTargets,
    surface_format: wgpu::TextureFormat,
    sample_count: u32,
}

impl WgpuRenderer {
    /// `sample_count` above 1 renders into a multisampled target that is
    /// resolved into the surface view. It must be supported by both the
    /// surface format and the depth format; see
    /// [`GpuContext::sample_count`](crate::GpuContext::sample_count).
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> Self {
        let sample_count = sample_count.max(1);
        let (uniform_buffer, uniform_layout, uniform_group) = frame_uniforms(device);
        let pipeline = lit_mesh_pipeline(device, &uniform_layout, surface_format, sample_count);
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_instances"),
            size: (MAX_INSTANCES * std::mem::size_of::<InstanceData>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            uniform_buffer,
            uniform_group,
            cube: CubeBuffers::upload(device),
            instance_buffer,
            targets: FrameTargets::new(device, surface_format, width, height, sample_count),
            surface_format,
            sample_count,
        }
    }

    /// Recreate the depth and multisample targets for a new viewport size.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.targets = FrameTargets::new(
            device,
            self.surface_format,
            width,
            height,
            self.sample_count,
        );
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// Record and submit one frame into `target`.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        target: &wgpu::TextureView,
        camera: &FirstPersonCamera,
        scene: &Scene,
    ) {
        let uniforms = Uniforms::new(scene, camera);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let instances: Vec<InstanceData> = scene
            .meshes()
            .take(MAX_INSTANCES)
            .map(InstanceData::from_mesh)
            .collect();
        if !instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene_frame"),
        });
        let (view, resolve_target, store) = match &self.targets.msaa {
            Some(msaa) => (msaa, Some(target), wgpu::StoreOp::Discard),
            None => (target, None, wgpu::StoreOp::Store),
        };
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color(scene)),
                        store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            if !instances.is_empty() {
                pass.set_pipeline(&self.pipeline);
                pass.set_bind_group(0, &self.uniform_group, &[]);
                pass.set_vertex_buffer(0, self.cube.vertices.slice(..));
                pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
                pass.set_index_buffer(self.cube.indices.slice(..), wgpu::IndexFormat::Uint16);
                pass.draw_indexed(0..self.cube.index_count, 0, 0..instances.len() as u32);
            }
        }
        queue.submit([encoder.finish()]);
    }
}
