use super::helpers::{self, DepthMode, PipelineDesc};
use crate::model::{MeshVertex, ModelMesh};
use glam::Mat4;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
}

const MESH_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x3];

/// GPU copy of the loaded model.
struct UploadedMesh {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

pub(crate) struct MeshResources {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    mesh: Option<UploadedMesh>,
}

impl MeshResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        globals_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(landing_core::MESH_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("mesh_object_bgl"),
            entries: &[helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX)],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[globals_bgl, &bgl],
            push_constant_ranges: &[],
        });
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &MESH_ATTRIBUTES,
        }];
        let pipeline = helpers::make_pipeline(
            device,
            PipelineDesc {
                label: "mesh_pipeline",
                layout: &layout,
                shader: &shader,
                buffers: &buffers,
                color_format,
                blend: None,
                // OBJ winding is not reliable across exporters
                cull_mode: None,
                depth: DepthMode::Write,
            },
        );
        let uniform_buffer = helpers::uniform_buffer::<ObjectUniforms>(device, "mesh_object");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mesh_object_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            pipeline,
            uniform_buffer,
            bind_group,
            mesh: None,
        }
    }

    pub(crate) fn upload(&mut self, device: &wgpu::Device, mesh: &ModelMesh) {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("model_vertices"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        self.mesh = Some(UploadedMesh {
            vertex_buffer,
            vertex_count: mesh.vertices.len() as u32,
        });
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, model: Mat4) {
        let u = ObjectUniforms {
            model: model.to_cols_array_2d(),
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, globals: &wgpu::BindGroup) {
        let Some(mesh) = &self.mesh else {
            return;
        };
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, globals, &[]);
        rpass.set_bind_group(1, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        rpass.draw(0..mesh.vertex_count, 0..1);
    }
}
